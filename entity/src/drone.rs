//! Drone entity with its embedded compliance aggregates.
//!
//! A drone row owns exactly one [`DroneUploads`] and one [`RecurringData`]
//! aggregate plus an ordered list of manufactured units, all stored as JSON
//! columns and rewritten whole on mutation. The `version` column is a
//! monotonic token bumped on every aggregate write; writers supply the version
//! they read and a mismatch rejects the write.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "drone")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub organization_id: i32,
    pub model_name: String,
    pub image: Option<String>,
    pub accountable_manager_id: Option<i32>,
    #[sea_orm(column_type = "Json")]
    pub uploads: DroneUploads,
    #[sea_orm(column_type = "Json")]
    pub manufactured_units: ManufacturedUnits,
    #[sea_orm(column_type = "Json")]
    pub recurring_data: RecurringData,
    pub version: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team_member::Entity",
        from = "Column::AccountableManagerId",
        to = "super::team_member::Column::Id"
    )]
    TeamMember,
}

impl Related<super::team_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Uploaded document references for the one-time checklist.
///
/// Every list field defaults to empty so "has at least one entry" checks never
/// need a null guard; absent JSON keys deserialize to empty lists.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult,
)]
#[serde(rename_all = "camelCase")]
pub struct DroneUploads {
    #[serde(default)]
    pub training_manual: Option<String>,
    #[serde(default)]
    pub system_design: Option<String>,
    #[serde(default)]
    pub infrastructure_manufacturing: Vec<String>,
    #[serde(default)]
    pub infrastructure_testing: Vec<String>,
    #[serde(default)]
    pub infrastructure_office: Vec<String>,
    #[serde(default)]
    pub infrastructure_others: Vec<LabeledImage>,
    #[serde(default)]
    pub regulatory_display: Vec<String>,
    #[serde(default)]
    pub hardware_security: Vec<String>,
    #[serde(default)]
    pub web_portal_link: Option<String>,
}

/// A captioned image reference in the "other infrastructure" gallery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledImage {
    pub label: String,
    pub image: String,
}

/// Ordered list of units manufactured against this drone model.
///
/// Units are append-only with no independent id; insertion order is the only
/// ordering.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult,
)]
#[serde(transparent)]
pub struct ManufacturedUnits(pub Vec<ManufacturedUnit>);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturedUnit {
    pub serial_number: String,
    pub uin: String,
}

/// The eight recurring compliance category lists plus the personnel reported
/// flag.
///
/// Absent keys are empty lists, never an error. `personnel_reported` is forced
/// back to `false` by any mutation of the personnel list and only an explicit
/// mark-reported action sets it true.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult,
)]
#[serde(rename_all = "camelCase")]
pub struct RecurringData {
    #[serde(default)]
    pub personnel: Vec<PersonnelRecord>,
    #[serde(default)]
    pub staff_competence: Vec<StaffCompetenceRecord>,
    #[serde(default)]
    pub training_records: Vec<TrainingRecord>,
    #[serde(default)]
    pub equipment_maintenance: Vec<EquipmentMaintenanceRecord>,
    #[serde(default)]
    pub battery_safety: Vec<BatterySafetyRecord>,
    #[serde(default)]
    pub operational_records: Vec<OperationalRecord>,
    #[serde(default)]
    pub material_procurement: Vec<MaterialProcurementRecord>,
    #[serde(default)]
    pub uas_sold: Vec<UasSoldRecord>,
    #[serde(default)]
    pub personnel_reported: bool,
}

/// A change of personnel in a nominated position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelRecord {
    pub id: String,
    pub date: String,
    pub position: String,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub new: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffCompetenceRecord {
    pub id: String,
    pub date: String,
    pub staff: String,
    pub result: CompetenceResult,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetenceResult {
    Competent,
    #[serde(rename = "Needs Training")]
    NeedsTraining,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingRecord {
    pub id: String,
    pub date: String,
    pub session: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentMaintenanceRecord {
    pub id: String,
    pub date: String,
    pub equipment: String,
}

/// Battery/charger safety check. For batteries `item_id` is the composite
/// `batteryNumberA+batteryNumberB` key of an org battery; for chargers it is
/// free-form. The engine persists the string as given either way.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatterySafetyRecord {
    pub id: String,
    pub date: String,
    pub tested_item: TestedItem,
    pub item_id: String,
    pub condition: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestedItem {
    Battery,
    Charger,
}

/// UIN lifecycle event. `serial_number` is only present for linking events and
/// `transferred_to` only for transfers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalRecord {
    pub id: String,
    pub date: String,
    pub operation: UinOperation,
    pub uin: String,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub transferred_to: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UinOperation {
    #[serde(rename = "UIN Issuance")]
    UinIssuance,
    #[serde(rename = "Transfer of UIN")]
    TransferOfUin,
    #[serde(rename = "Linking UIN to Serial Number")]
    LinkingUinToSerial,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialProcurementRecord {
    pub id: String,
    pub date: String,
    pub material: String,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UasSoldRecord {
    pub id: String,
    pub date: String,
    pub unit_serial_number: String,
    pub sold_to: String,
}
