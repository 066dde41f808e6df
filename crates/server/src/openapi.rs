use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse { pub error: String, pub message: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequestDoc {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub apt_num: String,
    pub description: String,
    pub created_at: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewMaintenanceRequestDoc {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub apt_num: String,
    pub description: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequestDetailsDoc {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub apt_num: String,
    pub description: String,
    pub created_at: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::maintenance_requests::list,
        crate::routes::maintenance_requests::create,
        crate::routes::maintenance_requests::get,
        crate::routes::maintenance_requests::lookup,
        crate::routes::maintenance_requests::update,
        crate::routes::maintenance_requests::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            MaintenanceRequestDoc,
            NewMaintenanceRequestDoc,
            MaintenanceRequestDetailsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "maintenance")
    )
)]
pub struct ApiDoc;
