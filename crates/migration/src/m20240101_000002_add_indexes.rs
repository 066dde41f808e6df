use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One request per email; closes the lookup-then-insert race on create
        manager
            .create_index(
                Index::create()
                    .name("idx_maintenance_request_email")
                    .table(MaintenanceRequest::Table)
                    .col(MaintenanceRequest::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_maintenance_request_email")
                    .table(MaintenanceRequest::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum MaintenanceRequest { Table, Email }
