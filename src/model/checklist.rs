//! Closed vocabularies and DTOs for the compliance checklist.
//!
//! Upload slots and recurring categories are tagged enums rather than free
//! strings, so an unrecognized kind is rejected at deserialization instead of
//! falling through to a silent no-op.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use entity::drone::{CompetenceResult, TestedItem, UinOperation};

/// The eight file-upload slots on a drone's uploads aggregate.
///
/// The ninth uploads field, the web portal link, is a URL rather than a file
/// and has its own operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    /// Single-file training procedure manual.
    TrainingManual,
    /// Single-file system design document.
    SystemDesign,
    /// Manufacturing facility images; a new batch replaces the list.
    InfrastructureManufacturing,
    /// Testing facility images; a new batch replaces the list.
    InfrastructureTesting,
    /// Office facility images; a new batch replaces the list.
    InfrastructureOffice,
    /// Additive gallery of labeled facility images.
    InfrastructureOthers,
    /// Regulatory display images; a new batch replaces the list.
    RegulatoryDisplay,
    /// Hardware security images; a new batch replaces the list.
    HardwareSecurity,
}

impl UploadKind {
    /// Stable wire name of the slot, also used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TrainingManual => "training_manual",
            Self::SystemDesign => "system_design",
            Self::InfrastructureManufacturing => "infrastructure_manufacturing",
            Self::InfrastructureTesting => "infrastructure_testing",
            Self::InfrastructureOffice => "infrastructure_office",
            Self::InfrastructureOthers => "infrastructure_others",
            Self::RegulatoryDisplay => "regulatory_display",
            Self::HardwareSecurity => "hardware_security",
        }
    }
}

/// The eight recurring compliance categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum RecurringCategory {
    /// Changes of nominated personnel; drives the tri-state DGCA status.
    Personnel,
    /// Staff competence assessments.
    StaffCompetence,
    /// Training sessions held (immutable audit trail, no delete).
    TrainingRecords,
    /// Equipment maintenance log (immutable audit trail, no delete).
    EquipmentMaintenance,
    /// Battery and charger safety checks.
    BatterySafety,
    /// UIN issuance, transfer, and linking events.
    OperationalRecords,
    /// Material procurement log.
    MaterialProcurement,
    /// UAS units sold.
    UasSold,
}

impl RecurringCategory {
    /// All categories in display order.
    pub const ALL: [RecurringCategory; 8] = [
        Self::Personnel,
        Self::StaffCompetence,
        Self::TrainingRecords,
        Self::EquipmentMaintenance,
        Self::BatterySafety,
        Self::OperationalRecords,
        Self::MaterialProcurement,
        Self::UasSold,
    ];

    /// Stable wire name of the category, also used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personnel => "personnel",
            Self::StaffCompetence => "staffCompetence",
            Self::TrainingRecords => "trainingRecords",
            Self::EquipmentMaintenance => "equipmentMaintenance",
            Self::BatterySafety => "batterySafety",
            Self::OperationalRecords => "operationalRecords",
            Self::MaterialProcurement => "materialProcurement",
            Self::UasSold => "uasSold",
        }
    }

    /// Section heading used in the recurring compliance report.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Personnel => "Change of Personnel",
            Self::StaffCompetence => "Staff Competence Checks",
            Self::TrainingRecords => "Training Records",
            Self::EquipmentMaintenance => "Equipment Maintenance",
            Self::BatterySafety => "Battery & Charger Safety Checks",
            Self::OperationalRecords => "UIN Operational Records",
            Self::MaterialProcurement => "Material Procurement",
            Self::UasSold => "UAS Sold",
        }
    }
}

/// A recurring record as submitted for append, one variant per category with
/// that category's required-field shape. Record ids are assigned by the
/// engine at append time.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(tag = "category", rename_all = "camelCase")]
pub enum NewRecurringRecord {
    /// A change of nominated personnel.
    #[serde(rename_all = "camelCase")]
    Personnel {
        /// Date of the change.
        date: String,
        /// Position affected.
        position: String,
        /// Outgoing holder, if any.
        #[serde(default)]
        previous: Option<String>,
        /// Incoming holder, if any.
        #[serde(default)]
        new: Option<String>,
    },
    /// A staff competence assessment.
    #[serde(rename_all = "camelCase")]
    StaffCompetence {
        /// Date of the assessment.
        date: String,
        /// Staff member assessed.
        staff: String,
        /// Assessment outcome.
        #[schema(value_type = String)]
        result: CompetenceResult,
    },
    /// A training session held.
    #[serde(rename_all = "camelCase")]
    TrainingRecords {
        /// Date of the session.
        date: String,
        /// Session description.
        session: String,
    },
    /// An equipment maintenance entry.
    #[serde(rename_all = "camelCase")]
    EquipmentMaintenance {
        /// Date of the maintenance.
        date: String,
        /// Equipment serviced.
        equipment: String,
    },
    /// A battery or charger safety check.
    #[serde(rename_all = "camelCase")]
    BatterySafety {
        /// Date of the check.
        date: String,
        /// Whether a battery or a charger was tested.
        #[schema(value_type = String)]
        tested_item: TestedItem,
        /// Battery composite key or free-form charger id.
        item_id: String,
        /// Observed condition.
        condition: String,
    },
    /// A UIN lifecycle event.
    #[serde(rename_all = "camelCase")]
    OperationalRecords {
        /// Date of the event.
        date: String,
        /// Which UIN operation took place.
        #[schema(value_type = String)]
        operation: UinOperation,
        /// The UIN involved.
        uin: String,
        /// Unit serial number; required only for linking events.
        #[serde(default)]
        serial_number: Option<String>,
        /// Receiving party; required only for transfers.
        #[serde(default)]
        transferred_to: Option<String>,
    },
    /// A material procurement entry.
    #[serde(rename_all = "camelCase")]
    MaterialProcurement {
        /// Date of procurement.
        date: String,
        /// Material procured.
        material: String,
        /// Quantity, free-form.
        #[serde(default)]
        quantity: Option<String>,
        /// Vendor name.
        #[serde(default)]
        vendor: Option<String>,
    },
    /// A UAS unit sale.
    #[serde(rename_all = "camelCase")]
    UasSold {
        /// Date of sale.
        date: String,
        /// Serial number of the unit sold.
        unit_serial_number: String,
        /// Buyer.
        sold_to: String,
    },
}

impl NewRecurringRecord {
    /// The category this record belongs to.
    pub fn category(&self) -> RecurringCategory {
        match self {
            Self::Personnel { .. } => RecurringCategory::Personnel,
            Self::StaffCompetence { .. } => RecurringCategory::StaffCompetence,
            Self::TrainingRecords { .. } => RecurringCategory::TrainingRecords,
            Self::EquipmentMaintenance { .. } => RecurringCategory::EquipmentMaintenance,
            Self::BatterySafety { .. } => RecurringCategory::BatterySafety,
            Self::OperationalRecords { .. } => RecurringCategory::OperationalRecords,
            Self::MaterialProcurement { .. } => RecurringCategory::MaterialProcurement,
            Self::UasSold { .. } => RecurringCategory::UasSold,
        }
    }
}

/// One row of the fixed ten-item one-time checklist.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ChecklistItemDto {
    /// Display label of the checklist item.
    pub label: String,
    /// Whether the item's completion predicate holds.
    pub complete: bool,
}

/// Derived one-time checklist for a drone.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct OneTimeChecklistDto {
    /// The ten fixed items in display order.
    pub items: Vec<ChecklistItemDto>,
    /// Count of complete items; no weighting.
    pub completed_count: usize,
    /// Always ten.
    pub total: usize,
}

/// Derived status of one recurring category.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryStatusDto {
    /// The recurring category.
    pub category: RecurringCategory,
    /// Complete iff the category list is non-empty.
    pub complete: bool,
    /// Number of records currently in the list.
    pub entries: usize,
}

/// Tri-state DGCA reporting status of the personnel category.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct PersonnelStatusDto {
    /// "No Change", "Report to DGCA", or "DGCA Notified".
    pub status: String,
    /// Badge color for the status.
    pub badge: String,
}

/// Derived recurring checklist state for a drone.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct RecurringStatusDto {
    /// Personnel tri-state status.
    pub personnel: PersonnelStatusDto,
    /// Boolean completion per category, in display order.
    pub categories: Vec<CategoryStatusDto>,
}
