//! Maintenance requests: three-layer split (domain, repository, service).
//!
//! The service owns the rules; repositories only persist and fetch.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::MaintenanceRequestService;
