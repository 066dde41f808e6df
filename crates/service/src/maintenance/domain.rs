use serde::{Deserialize, Serialize};

/// Stored record as returned to callers.
pub type MaintenanceRequest = models::maintenance_request::Model;

/// Create input. `id` and `createdAt` are assigned by the system, so any
/// values a client sends for them are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMaintenanceRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub apt_num: String,
    pub description: String,
}

/// Update input: every field except `id` is overwritten, `createdAt` included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequestDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub apt_num: String,
    pub description: String,
    pub created_at: String,
}
