//! Service layer for maintenance requests.
//! - Holds the domain rules (email uniqueness, not-found reporting, update semantics).
//! - Talks to storage only through [`maintenance::repository::MaintenanceRequestRepository`].
//! - Entity definitions live in the `models` crate.

pub mod errors;
pub mod maintenance;
#[cfg(test)]
pub mod test_support;
