//! Battery DTOs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A physical battery unit (A/B cell pair).
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct BatteryDto {
    /// Battery id.
    pub id: i32,
    /// Battery model.
    pub model: String,
    /// Rated capacity.
    pub capacity: String,
    /// Identifier of cell A.
    pub battery_number_a: String,
    /// Identifier of cell B.
    pub battery_number_b: String,
    /// Composite key referenced by battery-safety recurring records.
    pub composite_key: String,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
}

impl From<entity::battery::Model> for BatteryDto {
    fn from(battery: entity::battery::Model) -> Self {
        let composite_key = battery.composite_key();
        Self {
            id: battery.id,
            model: battery.model,
            capacity: battery.capacity,
            battery_number_a: battery.battery_number_a,
            battery_number_b: battery.battery_number_b,
            composite_key,
            created_at: battery.created_at,
        }
    }
}

/// Payload for registering a battery unit.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBatteryDto {
    /// Battery model.
    pub model: String,
    /// Rated capacity.
    pub capacity: String,
    /// Identifier of cell A.
    pub battery_number_a: String,
    /// Identifier of cell B.
    pub battery_number_b: String,
}
