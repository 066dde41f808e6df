use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found_id(id: i64) -> Self { Self::NotFound(format!("No request found with id: {id}")) }

    pub fn not_found_email(email: &str) -> Self { Self::NotFound(format!("No request found with email: {email}")) }

    pub fn duplicate_email(email: &str) -> Self {
        Self::Conflict(format!("Request with this email already exists: {email}"))
    }

    /// The human-readable part, without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(m) | Self::Conflict(m) | Self::Db(m) => m,
        }
    }
}
