//! Cabin entity for database

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cabin status
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum CabinStatus {
    #[sea_orm(string_value = "empty_clean")]
    EmptyClean,
    #[sea_orm(string_value = "empty_dirty")]
    EmptyDirty,
    #[sea_orm(string_value = "occupied")]
    Occupied,
    #[sea_orm(string_value = "issue_tech")]
    IssueTech,
    #[sea_orm(string_value = "issue_clean")]
    IssueClean,
}

/// Cabin model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cabins")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub icon: String,
    pub status: CabinStatus,
    pub active_issue_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
