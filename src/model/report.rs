//! Report payload DTOs handed to the external report generator.
//!
//! These are pure data projections; the generator owns the actual PDF or
//! spreadsheet rendering. Missing optionals are already substituted with their
//! display fallbacks ("Not Assigned", "Pending", "—") so the generator never
//! needs business knowledge.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::checklist::RecurringCategory;

/// One roster row of the one-time report.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct RosterRowDto {
    /// Member name.
    pub name: String,
    /// Position held.
    pub position: String,
    /// Contact phone.
    pub phone: String,
    /// Contact email.
    pub email: String,
}

/// One subcontractor row of the one-time report.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct SubcontractorRowDto {
    /// Company name.
    pub company_name: String,
    /// Design or Manufacturing.
    pub contractor_type: String,
    /// Contact person.
    pub contact_person: String,
    /// Agreement date, localized.
    pub agreement_date: String,
}

/// A captioned image row in the others gallery.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct LabeledImageRowDto {
    /// Caption.
    pub label: String,
    /// Image reference.
    pub image: String,
}

/// Infrastructure images grouped by facility kind.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct InfrastructureReportDto {
    /// Manufacturing facility images.
    pub manufacturing: Vec<String>,
    /// Testing facility images.
    pub testing: Vec<String>,
    /// Office facility images.
    pub office: Vec<String>,
    /// Labeled other-facility images.
    pub others: Vec<LabeledImageRowDto>,
}

/// One manufactured-unit row of the one-time report.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UnitRowDto {
    /// Unit serial number.
    pub serial_number: String,
    /// Unique Identification Number.
    pub uin: String,
}

/// The one-time compliance report payload.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct OneTimeReportDto {
    /// Drone model the report covers.
    pub drone_model: String,
    /// Organizational roster.
    pub roster: Vec<RosterRowDto>,
    /// Accountable manager name, or "Not Assigned".
    pub accountable_manager: String,
    /// "Uploaded" or "Pending".
    pub training_manual: String,
    /// "Uploaded" or "Pending".
    pub system_design: String,
    /// Infrastructure images grouped by facility kind.
    pub infrastructure: InfrastructureReportDto,
    /// Subcontractor roster.
    pub subcontractors: Vec<SubcontractorRowDto>,
    /// Regulatory display images.
    pub regulatory_display: Vec<String>,
    /// Hardware security images.
    pub hardware_security: Vec<String>,
    /// Web portal URL, or "—".
    pub web_portal: String,
    /// Manufactured units table.
    pub units: Vec<UnitRowDto>,
}

/// One tabular section of the recurring report. Sections are emitted for all
/// eight categories even when empty; the generator renders an explicit
/// "no records" row for an empty `rows`.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportSectionDto {
    /// The recurring category.
    pub category: RecurringCategory,
    /// Section heading.
    pub heading: String,
    /// Column headers in order.
    pub columns: Vec<String>,
    /// Formatted cell rows, one per record, in insertion order.
    pub rows: Vec<Vec<String>>,
}

/// The recurring compliance report payload.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct RecurringReportDto {
    /// Drone model the report covers.
    pub drone_model: String,
    /// Tri-state personnel status label.
    pub personnel_status: String,
    /// All eight category sections in display order.
    pub sections: Vec<ReportSectionDto>,
}
