use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A tenant-submitted maintenance ticket.
///
/// Serialized with camelCase keys: `id, firstName, lastName, email, aptNum,
/// description, createdAt`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "maintenance_request")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub apt_num: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}
