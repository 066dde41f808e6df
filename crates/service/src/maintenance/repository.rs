use async_trait::async_trait;
use models::maintenance_request::ActiveModel;

use super::domain::MaintenanceRequest;
use crate::errors::ServiceError;

/// Persistence boundary for maintenance requests.
///
/// Implementations must be safe to share across in-flight requests.
#[async_trait]
pub trait MaintenanceRequestRepository: Send + Sync {
    /// Insert when `record.id` is not set, otherwise overwrite the row with that id.
    /// A second record with an existing email fails with `Conflict`.
    async fn save(&self, record: ActiveModel) -> Result<MaintenanceRequest, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<MaintenanceRequest>, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<MaintenanceRequest>, ServiceError>;
    /// All records in primary-key order.
    async fn find_all(&self) -> Result<Vec<MaintenanceRequest>, ServiceError>;
    async fn delete(&self, record: MaintenanceRequest) -> Result<(), ServiceError>;
}

/// Primary key of an active model, if one has been assigned.
pub(crate) fn assigned_id(record: &ActiveModel) -> Option<i64> {
    match &record.id {
        sea_orm::ActiveValue::Set(id) | sea_orm::ActiveValue::Unchanged(id) => Some(*id),
        sea_orm::ActiveValue::NotSet => None,
    }
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use sea_orm::{Set, TryIntoModel};
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    #[derive(Default)]
    pub struct MockMaintenanceRequestRepository {
        state: Mutex<MockState>,
    }

    #[derive(Default)]
    struct MockState {
        rows: BTreeMap<i64, MaintenanceRequest>, // key: id
        last_id: i64,
    }

    impl MockMaintenanceRequestRepository {
        fn lock(&self) -> MutexGuard<'_, MockState> {
            self.state.lock().unwrap_or_else(PoisonError::into_inner)
        }

        /// Number of stored records.
        pub fn len(&self) -> usize {
            self.lock().rows.len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl MaintenanceRequestRepository for MockMaintenanceRequestRepository {
        async fn save(&self, mut record: ActiveModel) -> Result<MaintenanceRequest, ServiceError> {
            let mut state = self.lock();
            let (id, inserting) = match assigned_id(&record) {
                Some(id) if state.rows.contains_key(&id) => (id, false),
                Some(id) => return Err(ServiceError::not_found_id(id)),
                None => (state.last_id + 1, true),
            };
            record.id = Set(id);
            let model = record.try_into_model().map_err(|e| ServiceError::Db(e.to_string()))?;
            if state.rows.values().any(|r| r.email == model.email && r.id != id) {
                return Err(ServiceError::duplicate_email(&model.email));
            }
            if inserting {
                state.last_id = id;
            }
            state.rows.insert(id, model.clone());
            Ok(model)
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<MaintenanceRequest>, ServiceError> {
            Ok(self.lock().rows.get(&id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<MaintenanceRequest>, ServiceError> {
            Ok(self.lock().rows.values().find(|r| r.email == email).cloned())
        }

        async fn find_all(&self) -> Result<Vec<MaintenanceRequest>, ServiceError> {
            Ok(self.lock().rows.values().cloned().collect())
        }

        async fn delete(&self, record: MaintenanceRequest) -> Result<(), ServiceError> {
            match self.lock().rows.remove(&record.id) {
                Some(_) => Ok(()),
                None => Err(ServiceError::not_found_id(record.id)),
            }
        }
    }
}
