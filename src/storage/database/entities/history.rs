use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Operation history database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "history")]
pub struct Model {
    /// Record ID, increasing with insertion order
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Operation label (sum, subtract, multiplication, division)
    pub operation: String,

    /// Operands as a JSON array
    #[sea_orm(column_type = "Text")]
    pub numbers: String,

    /// Computed result
    #[sea_orm(column_type = "Double")]
    pub result: f64,

    /// Write timestamp in the configured zone
    pub date: DateTimeWithTimeZone,

    /// Display rendering of the timestamp
    pub date_formatted: Option<String>,
}

/// History entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
