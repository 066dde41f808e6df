use std::sync::Arc;

use chrono::Local;
use models::maintenance_request::ActiveModel;
use sea_orm::{NotSet, Set};
use tracing::{debug, info, instrument};

use super::domain::{MaintenanceRequest, MaintenanceRequestDetails, NewMaintenanceRequest};
use super::repository::MaintenanceRequestRepository;
use crate::errors::ServiceError;

/// Local date-time the way `createdAt` is stored, e.g. `2024-01-15T10:30:45.123456789`.
pub(crate) fn timestamp_now() -> String {
    Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

/// Maintenance request business service, independent of web framework.
/// Every call reads storage afresh; nothing is cached between calls.
pub struct MaintenanceRequestService<R: MaintenanceRequestRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: MaintenanceRequestRepository + ?Sized> MaintenanceRequestService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a request, rejecting an email that already has one.
    ///
    /// # Examples
    /// ```
    /// use service::maintenance::{repository::mock::MockMaintenanceRequestRepository, MaintenanceRequestService};
    /// use service::maintenance::domain::NewMaintenanceRequest;
    /// use std::sync::Arc;
    /// let svc = MaintenanceRequestService::new(Arc::new(MockMaintenanceRequestRepository::default()));
    /// let input = NewMaintenanceRequest {
    ///     first_name: "Ana".into(), last_name: "Lee".into(), email: "ana@x.com".into(),
    ///     apt_num: "4B".into(), description: "Leaky faucet".into(),
    /// };
    /// let created = tokio_test::block_on(svc.create(input.clone())).unwrap();
    /// assert_eq!(created.id, 1);
    /// assert!(!created.created_at.is_empty());
    /// assert!(tokio_test::block_on(svc.create(input)).is_err());
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: NewMaintenanceRequest) -> Result<MaintenanceRequest, ServiceError> {
        if let Some(existing) = self.repo.find_by_email(&input.email).await? {
            debug!(id = existing.id, "email already has a request");
            return Err(ServiceError::duplicate_email(&input.email));
        }
        let record = ActiveModel {
            id: NotSet,
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            email: Set(input.email),
            apt_num: Set(input.apt_num),
            description: Set(input.description),
            created_at: Set(timestamp_now()),
        };
        let created = self.repo.save(record).await?;
        info!(id = created.id, created_at = %created.created_at, "maintenance_request_created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<MaintenanceRequest, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found_id(id))
    }

    #[instrument(skip(self))]
    pub async fn get_by_email(&self, email: &str) -> Result<MaintenanceRequest, ServiceError> {
        self.repo.find_by_email(email).await?.ok_or_else(|| ServiceError::not_found_email(email))
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<MaintenanceRequest>, ServiceError> {
        self.repo.find_all().await
    }

    /// Overwrite every field but `id`. The email is not pre-checked here; a
    /// collision with another record surfaces from storage as `Conflict`.
    #[instrument(skip(self, details), fields(email = %details.email))]
    pub async fn update(&self, id: i64, details: MaintenanceRequestDetails) -> Result<MaintenanceRequest, ServiceError> {
        let mut record: ActiveModel = self.get_by_id(id).await?.into();
        record.first_name = Set(details.first_name);
        record.last_name = Set(details.last_name);
        record.email = Set(details.email);
        record.apt_num = Set(details.apt_num);
        record.description = Set(details.description);
        record.created_at = Set(details.created_at);
        let updated = self.repo.save(record).await?;
        info!(id = updated.id, "maintenance_request_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let record = self.get_by_id(id).await?;
        self.repo.delete(record).await?;
        info!(id, "maintenance_request_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maintenance::repo::seaorm::SeaOrmMaintenanceRequestRepository;
    use crate::maintenance::repository::mock::MockMaintenanceRequestRepository;
    use crate::test_support::get_db;
    use chrono::NaiveDateTime;

    fn new_request(first_name: &str, email: &str) -> NewMaintenanceRequest {
        NewMaintenanceRequest {
            first_name: first_name.into(),
            last_name: "Lee".into(),
            email: email.into(),
            apt_num: "4B".into(),
            description: "Leaky faucet".into(),
        }
    }

    fn mock_service() -> (Arc<MockMaintenanceRequestRepository>, MaintenanceRequestService<MockMaintenanceRequestRepository>) {
        let repo = Arc::new(MockMaintenanceRequestRepository::default());
        (repo.clone(), MaintenanceRequestService::new(repo))
    }

    #[test]
    fn timestamp_is_iso_local_date_time() {
        let ts = timestamp_now();
        assert!(NaiveDateTime::parse_from_str(&ts, "%Y-%m-%dT%H:%M:%S%.f").is_ok(), "unexpected format: {ts}");
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids_and_timestamps() -> Result<(), anyhow::Error> {
        let (_, svc) = mock_service();
        let emails = ["a@x.com", "b@x.com", "c@x.com"];
        for email in emails {
            svc.create(new_request("Ana", email)).await?;
        }

        let all = svc.get_all().await?;
        assert_eq!(all.len(), emails.len());
        let mut ids: Vec<i64> = all.iter().map(|r| r.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), emails.len());
        assert!(all.iter().all(|r| !r.created_at.is_empty()));
        assert_eq!(all.iter().map(|r| r.email.as_str()).collect::<Vec<_>>(), emails);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_conflicts_without_mutation() -> Result<(), anyhow::Error> {
        let (repo, svc) = mock_service();
        let original = svc.create(new_request("Ana", "ana@x.com")).await?;

        let err = svc.create(new_request("Impostor", "ana@x.com")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(ref m) if m.contains("ana@x.com")));
        assert_eq!(repo.len(), 1);
        assert_eq!(svc.get_by_email("ana@x.com").await?, original);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_and_email_are_not_found() -> Result<(), anyhow::Error> {
        let (_, svc) = mock_service();
        svc.create(new_request("Ana", "ana@x.com")).await?;

        let err = svc.get_by_id(99).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m.contains("99")));
        let err = svc.get_by_email("nobody@x.com").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m.contains("nobody@x.com")));
        Ok(())
    }

    #[tokio::test]
    async fn lookup_by_email_returns_submitted_fields() -> Result<(), anyhow::Error> {
        let (_, svc) = mock_service();
        let input = new_request("Ana", "ana@x.com");
        let created = svc.create(input.clone()).await?;

        let found = svc.get_by_email("ana@x.com").await?;
        assert_eq!(found.id, created.id);
        assert_eq!(found.first_name, input.first_name);
        assert_eq!(found.last_name, input.last_name);
        assert_eq!(found.apt_num, input.apt_num);
        assert_eq!(found.description, input.description);
        assert_eq!(found.created_at, created.created_at);
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_everything_but_id() -> Result<(), anyhow::Error> {
        let (_, svc) = mock_service();
        let created = svc.create(new_request("Ana", "ana@x.com")).await?;

        let details = MaintenanceRequestDetails {
            first_name: "Anna".into(),
            last_name: "Leigh".into(),
            email: "anna@x.com".into(),
            apt_num: "5C".into(),
            description: "Fixed".into(),
            created_at: "2020-01-01T00:00:00".into(),
        };
        let updated = svc.update(created.id, details.clone()).await?;
        assert_eq!(updated.id, created.id);

        let found = svc.get_by_id(created.id).await?;
        assert_eq!(found.first_name, details.first_name);
        assert_eq!(found.last_name, details.last_name);
        assert_eq!(found.email, details.email);
        assert_eq!(found.apt_num, details.apt_num);
        assert_eq!(found.description, details.description);
        assert_eq!(found.created_at, details.created_at);
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_is_not_found() -> Result<(), anyhow::Error> {
        let (repo, svc) = mock_service();
        let details = MaintenanceRequestDetails {
            first_name: "Anna".into(),
            last_name: "Leigh".into(),
            email: "anna@x.com".into(),
            apt_num: "5C".into(),
            description: "Fixed".into(),
            created_at: "2020-01-01T00:00:00".into(),
        };
        assert!(matches!(svc.update(7, details).await, Err(ServiceError::NotFound(_))));
        assert!(repo.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() -> Result<(), anyhow::Error> {
        let (repo, svc) = mock_service();
        let keep = svc.create(new_request("Ana", "ana@x.com")).await?;
        let gone = svc.create(new_request("Bo", "bo@x.com")).await?;

        svc.delete(gone.id).await?;
        assert!(matches!(svc.get_by_id(gone.id).await, Err(ServiceError::NotFound(_))));

        // Deleting an unknown id leaves storage untouched.
        assert!(matches!(svc.delete(gone.id).await, Err(ServiceError::NotFound(_))));
        assert_eq!(repo.len(), 1);
        assert_eq!(svc.get_all().await?, vec![keep]);
        Ok(())
    }

    #[tokio::test]
    async fn full_lifecycle_on_sqlite() -> Result<(), anyhow::Error> {
        let repo = Arc::new(SeaOrmMaintenanceRequestRepository { db: get_db().await? });
        let svc = MaintenanceRequestService::new(repo);

        let created = svc.create(new_request("Ana", "ana@x.com")).await?;
        assert_eq!(created.id, 1);
        assert!(matches!(
            svc.create(new_request("Ana", "ana@x.com")).await,
            Err(ServiceError::Conflict(_))
        ));
        assert_eq!(svc.get_by_email("ana@x.com").await?.id, 1);

        let details = MaintenanceRequestDetails {
            first_name: created.first_name.clone(),
            last_name: created.last_name.clone(),
            email: created.email.clone(),
            apt_num: created.apt_num.clone(),
            description: "Fixed".into(),
            created_at: created.created_at.clone(),
        };
        let updated = svc.update(1, details).await?;
        assert_eq!(updated.id, 1);
        assert_eq!(updated.description, "Fixed");

        svc.delete(1).await?;
        assert!(matches!(svc.get_by_id(1).await, Err(ServiceError::NotFound(_))));
        assert!(svc.get_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_onto_taken_email_conflicts_on_sqlite() -> Result<(), anyhow::Error> {
        let repo = Arc::new(SeaOrmMaintenanceRequestRepository { db: get_db().await? });
        let svc = MaintenanceRequestService::new(repo);

        svc.create(new_request("Ana", "ana@x.com")).await?;
        let bo = svc.create(new_request("Bo", "bo@x.com")).await?;
        let details = MaintenanceRequestDetails {
            first_name: bo.first_name.clone(),
            last_name: bo.last_name.clone(),
            email: "ana@x.com".into(),
            apt_num: bo.apt_num.clone(),
            description: bo.description.clone(),
            created_at: bo.created_at.clone(),
        };
        assert!(matches!(svc.update(bo.id, details).await, Err(ServiceError::Conflict(_))));
        assert_eq!(svc.get_by_id(bo.id).await?.email, "bo@x.com");
        Ok(())
    }

    #[tokio::test]
    async fn long_field_values_round_trip_on_sqlite() -> Result<(), anyhow::Error> {
        let repo = Arc::new(SeaOrmMaintenanceRequestRepository { db: get_db().await? });
        let svc = MaintenanceRequestService::new(repo);

        let mut input = new_request(&"A".repeat(300), "long@x.com");
        input.last_name = "L".repeat(300);
        input.apt_num = "9".repeat(200);
        let created = svc.create(input.clone()).await?;
        assert_eq!(created.first_name.len(), 300);
        assert_eq!(created.apt_num, input.apt_num);

        let details = MaintenanceRequestDetails {
            first_name: created.first_name.clone(),
            last_name: created.last_name.clone(),
            email: created.email.clone(),
            apt_num: created.apt_num.clone(),
            description: "D".repeat(5000),
            created_at: format!("{} (reported by phone, confirmed by building manager)", created.created_at),
        };
        let updated = svc.update(created.id, details.clone()).await?;
        assert_eq!(updated.created_at, details.created_at);
        assert_eq!(svc.get_by_id(created.id).await?.description.len(), 5000);
        Ok(())
    }
}
