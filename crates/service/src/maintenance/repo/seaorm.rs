use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, SqlErr,
};

use models::maintenance_request::{self, ActiveModel, Entity as MaintenanceRequestEntity};

use crate::errors::ServiceError;
use crate::maintenance::domain::MaintenanceRequest;
use crate::maintenance::repository::{assigned_id, MaintenanceRequestRepository};

pub struct SeaOrmMaintenanceRequestRepository {
    pub db: DatabaseConnection,
}

/// Map a write failure: unique index hits become `Conflict`, a vanished row `NotFound`.
fn map_write_err(err: DbErr, id: Option<i64>, email: &str) -> ServiceError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return ServiceError::duplicate_email(email);
    }
    match (err, id) {
        (DbErr::RecordNotUpdated, Some(id)) => ServiceError::not_found_id(id),
        (other, _) => ServiceError::Db(other.to_string()),
    }
}

#[async_trait::async_trait]
impl MaintenanceRequestRepository for SeaOrmMaintenanceRequestRepository {
    async fn save(&self, record: ActiveModel) -> Result<MaintenanceRequest, ServiceError> {
        let id = assigned_id(&record);
        let email = match &record.email {
            ActiveValue::Set(e) | ActiveValue::Unchanged(e) => e.clone(),
            ActiveValue::NotSet => String::new(),
        };
        let saved = match id {
            None => record.insert(&self.db).await,
            Some(_) => record.update(&self.db).await,
        };
        saved.map_err(|e| map_write_err(e, id, &email))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MaintenanceRequest>, ServiceError> {
        MaintenanceRequestEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<MaintenanceRequest>, ServiceError> {
        MaintenanceRequestEntity::find()
            .filter(maintenance_request::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<MaintenanceRequest>, ServiceError> {
        MaintenanceRequestEntity::find()
            .order_by_asc(maintenance_request::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete(&self, record: MaintenanceRequest) -> Result<(), ServiceError> {
        let res = MaintenanceRequestEntity::delete_by_id(record.id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found_id(record.id));
        }
        Ok(())
    }
}
