//! Drone DTOs and checklist mutation payloads.
//!
//! Every mutation payload carries the `version` token from the snapshot the
//! caller rendered; a stale token is rejected with 409 and no write occurs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use entity::drone::{DroneUploads, ManufacturedUnit, RecurringData};

use crate::model::checklist::{NewRecurringRecord, OneTimeChecklistDto, RecurringStatusDto, UploadKind};

/// A drone with its embedded compliance aggregates.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct DroneDto {
    /// Drone id.
    pub id: i32,
    /// Owning organization.
    pub organization_id: i32,
    /// Drone model name.
    pub model_name: String,
    /// Display image reference, if uploaded.
    pub image: Option<String>,
    /// Assigned accountable manager, if nominated.
    pub accountable_manager_id: Option<i32>,
    /// Uploaded document references.
    #[schema(value_type = Object)]
    pub uploads: DroneUploads,
    /// Manufactured units in insertion order.
    #[schema(value_type = Vec<Object>)]
    pub manufactured_units: Vec<ManufacturedUnit>,
    /// The eight recurring category lists plus the reported flag.
    #[schema(value_type = Object)]
    pub recurring_data: RecurringData,
    /// Optimistic-concurrency token; echo back on mutations.
    pub version: i32,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
}

impl From<entity::drone::Model> for DroneDto {
    fn from(drone: entity::drone::Model) -> Self {
        Self {
            id: drone.id,
            organization_id: drone.organization_id,
            model_name: drone.model_name,
            image: drone.image,
            accountable_manager_id: drone.accountable_manager_id,
            uploads: drone.uploads,
            manufactured_units: drone.manufactured_units.0,
            recurring_data: drone.recurring_data,
            version: drone.version,
            created_at: drone.created_at,
        }
    }
}

/// A drone together with its derived checklist state; returned by snapshot
/// reads and by every checklist mutation.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct DroneChecklistDto {
    /// The drone and its aggregates.
    pub drone: DroneDto,
    /// Derived one-time checklist.
    pub one_time: OneTimeChecklistDto,
    /// Derived recurring checklist state.
    pub recurring: RecurringStatusDto,
}

/// Payload for registering a new drone.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDroneDto {
    /// Drone model name.
    pub model_name: String,
    /// Optional display image reference.
    #[serde(default)]
    pub image: Option<String>,
}

/// Payload for nominating the accountable manager.
///
/// Re-assignment simply overwrites; the engine does not verify the id against
/// the roster (the selector UI constrains it), though the database foreign key
/// rejects ids that do not exist at all.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignManagerDto {
    /// Version token from the caller's snapshot.
    pub version: i32,
    /// Team member to nominate.
    pub manager_id: i32,
}

/// Payload for saving uploaded file references into an upload slot.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUploadsDto {
    /// Version token from the caller's snapshot.
    pub version: i32,
    /// Which upload slot to write.
    pub kind: UploadKind,
    /// Upload collaborator references. Replaces the slot for single and
    /// multi-file kinds; for the others gallery only `files[0]` is used.
    pub files: Vec<String>,
    /// Caption for the others gallery; ignored by every other kind.
    #[serde(default)]
    pub label: Option<String>,
}

/// Payload for replacing the web portal link.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateWebPortalDto {
    /// Version token from the caller's snapshot.
    pub version: i32,
    /// Portal URL; accepted as-is, no format validation at this layer.
    pub url: String,
}

/// A manufactured unit as submitted.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewManufacturedUnitDto {
    /// Caller-supplied serial number; not checked for global uniqueness.
    pub serial_number: String,
    /// Unique Identification Number.
    pub uin: String,
}

/// Payload replacing the full manufactured-unit list.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUnitsDto {
    /// Version token from the caller's snapshot.
    pub version: i32,
    /// The full desired unit list in order.
    pub units: Vec<NewManufacturedUnitDto>,
}

/// Payload appending one recurring compliance record.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct AppendRecurringDto {
    /// Version token from the caller's snapshot.
    pub version: i32,
    /// The record to append, tagged by category.
    pub record: NewRecurringRecord,
}

/// Version-only payload for deletes and the mark-reported action.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct VersionDto {
    /// Version token from the caller's snapshot.
    pub version: i32,
}
