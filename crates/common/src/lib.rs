//! Pieces shared by the binary and the HTTP server: logging setup and
//! small wire types that don't belong to the domain.

pub mod types;
pub mod utils;
