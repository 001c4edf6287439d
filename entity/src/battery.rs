//! Physical battery unit composed of an A/B cell pair. Battery-safety
//! recurring records reference it by the `battery_number_a + battery_number_b`
//! composite display key.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "battery")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub organization_id: i32,
    pub model: String,
    pub capacity: String,
    pub battery_number_a: String,
    pub battery_number_b: String,
    pub created_at: DateTime,
}

impl Model {
    /// Composite key used by battery-safety recurring records and selectors.
    pub fn composite_key(&self) -> String {
        format!("{}{}", self.battery_number_a, self.battery_number_b)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
