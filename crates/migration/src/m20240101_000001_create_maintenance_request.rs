//! Create `maintenance_request` table.
//!
//! One row per tenant-submitted ticket; `created_at` is kept as the text
//! timestamp the service stamps on create. Text columns carry no length cap:
//! any non-null value a client sends must be storable.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(MaintenanceRequest::Table)
        .if_not_exists()
        .col(big_integer(MaintenanceRequest::Id).auto_increment().primary_key())
        .col(string(MaintenanceRequest::FirstName))
        .col(string(MaintenanceRequest::LastName))
        .col(string(MaintenanceRequest::Email))
        .col(string(MaintenanceRequest::AptNum))
        .col(text(MaintenanceRequest::Description))
        .col(text(MaintenanceRequest::CreatedAt))
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MaintenanceRequest::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MaintenanceRequest { Table, Id, FirstName, LastName, Email, AptNum, Description, CreatedAt }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgres_ddl_uses_bigint_key_and_unbounded_text() {
        let sql = create_table().to_string(PostgresQueryBuilder);
        assert!(sql.contains(r#""id" bigserial"#), "{sql}");
        assert!(!sql.contains("varchar("), "{sql}");
    }
}
