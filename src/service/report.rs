//! Report payload projection.
//!
//! Builds the data handed to the external report generator: the one-time
//! payload mirrors the ten checklist items with display fallbacks substituted,
//! and the recurring payload renders every category list into a formatted
//! table section. Projection is pure; the service only assembles the inputs.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use entity::drone::{CompetenceResult, RecurringData, TestedItem, UinOperation};

use crate::{
    data::{DroneRepository, SubcontractorRepository, TeamMemberRepository},
    error::Error,
    model::{
        checklist::RecurringCategory,
        report::{
            InfrastructureReportDto, LabeledImageRowDto, OneTimeReportDto, RecurringReportDto,
            ReportSectionDto, RosterRowDto, SubcontractorRowDto, UnitRowDto,
        },
    },
    service::checklist::status,
};

/// Service assembling report payloads for a drone.
pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    /// Creates a new instance of [`ReportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the one-time compliance report payload for a drone.
    pub async fn one_time(&self, drone_id: i32) -> Result<OneTimeReportDto, Error> {
        let drone = DroneRepository::new(self.db)
            .get(drone_id)
            .await?
            .ok_or(Error::NotFound("Drone", drone_id))?;

        let team_members = TeamMemberRepository::new(self.db)
            .list(drone.organization_id)
            .await?;
        let subcontractors = SubcontractorRepository::new(self.db)
            .list(drone.organization_id)
            .await?;

        Ok(project_one_time(&drone, &team_members, &subcontractors))
    }

    /// Builds the recurring compliance report payload for a drone.
    pub async fn recurring(&self, drone_id: i32) -> Result<RecurringReportDto, Error> {
        let drone = DroneRepository::new(self.db)
            .get(drone_id)
            .await?
            .ok_or(Error::NotFound("Drone", drone_id))?;

        Ok(project_recurring(&drone))
    }
}

/// Projects a drone snapshot into the one-time report payload.
pub fn project_one_time(
    drone: &entity::drone::Model,
    team_members: &[entity::team_member::Model],
    subcontractors: &[entity::subcontractor::Model],
) -> OneTimeReportDto {
    let accountable_manager = drone
        .accountable_manager_id
        .and_then(|id| team_members.iter().find(|member| member.id == id))
        .map(|member| member.name.clone())
        .unwrap_or_else(|| "Not Assigned".to_string());

    let uploads = &drone.uploads;

    OneTimeReportDto {
        drone_model: drone.model_name.clone(),
        roster: team_members
            .iter()
            .map(|member| RosterRowDto {
                name: member.name.clone(),
                position: member.position.clone(),
                phone: member.phone.clone(),
                email: member.email.clone(),
            })
            .collect(),
        accountable_manager,
        training_manual: upload_state(uploads.training_manual.as_deref()),
        system_design: upload_state(uploads.system_design.as_deref()),
        infrastructure: InfrastructureReportDto {
            manufacturing: uploads.infrastructure_manufacturing.clone(),
            testing: uploads.infrastructure_testing.clone(),
            office: uploads.infrastructure_office.clone(),
            others: uploads
                .infrastructure_others
                .iter()
                .map(|labeled| LabeledImageRowDto {
                    label: labeled.label.clone(),
                    image: labeled.image.clone(),
                })
                .collect(),
        },
        subcontractors: subcontractors
            .iter()
            .map(|subcontractor| SubcontractorRowDto {
                company_name: subcontractor.company_name.clone(),
                contractor_type: match subcontractor.contractor_type {
                    entity::subcontractor::ContractorType::Design => "Design".to_string(),
                    entity::subcontractor::ContractorType::Manufacturing => {
                        "Manufacturing".to_string()
                    }
                },
                contact_person: subcontractor.contact_person.clone(),
                agreement_date: format_naive_date(subcontractor.agreement_date),
            })
            .collect(),
        regulatory_display: uploads.regulatory_display.clone(),
        hardware_security: uploads.hardware_security.clone(),
        web_portal: uploads
            .web_portal_link
            .clone()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| "—".to_string()),
        units: drone
            .manufactured_units
            .0
            .iter()
            .map(|unit| UnitRowDto {
                serial_number: unit.serial_number.clone(),
                uin: unit.uin.clone(),
            })
            .collect(),
    }
}

/// Projects a drone snapshot into the recurring report payload. All eight
/// sections are emitted even when empty.
pub fn project_recurring(drone: &entity::drone::Model) -> RecurringReportDto {
    let data = &drone.recurring_data;

    RecurringReportDto {
        drone_model: drone.model_name.clone(),
        personnel_status: status::personnel_status(data).label().to_string(),
        sections: RecurringCategory::ALL
            .iter()
            .map(|category| section(*category, data))
            .collect(),
    }
}

fn section(category: RecurringCategory, data: &RecurringData) -> ReportSectionDto {
    let (columns, rows): (&[&str], Vec<Vec<String>>) = match category {
        RecurringCategory::Personnel => (
            &["Date", "Position", "Previous", "New"],
            data.personnel
                .iter()
                .map(|record| {
                    vec![
                        format_date(&record.date),
                        record.position.clone(),
                        optional_cell(record.previous.as_deref()),
                        optional_cell(record.new.as_deref()),
                    ]
                })
                .collect(),
        ),
        RecurringCategory::StaffCompetence => (
            &["Date", "Staff", "Result"],
            data.staff_competence
                .iter()
                .map(|record| {
                    vec![
                        format_date(&record.date),
                        record.staff.clone(),
                        competence_cell(record.result).to_string(),
                    ]
                })
                .collect(),
        ),
        RecurringCategory::TrainingRecords => (
            &["Date", "Session"],
            data.training_records
                .iter()
                .map(|record| vec![format_date(&record.date), record.session.clone()])
                .collect(),
        ),
        RecurringCategory::EquipmentMaintenance => (
            &["Date", "Equipment"],
            data.equipment_maintenance
                .iter()
                .map(|record| vec![format_date(&record.date), record.equipment.clone()])
                .collect(),
        ),
        RecurringCategory::BatterySafety => (
            &["Date", "Tested Item", "Item ID", "Condition"],
            data.battery_safety
                .iter()
                .map(|record| {
                    vec![
                        format_date(&record.date),
                        match record.tested_item {
                            TestedItem::Battery => "Battery".to_string(),
                            TestedItem::Charger => "Charger".to_string(),
                        },
                        record.item_id.clone(),
                        record.condition.clone(),
                    ]
                })
                .collect(),
        ),
        RecurringCategory::OperationalRecords => (
            &["Date", "Operation", "UIN", "Details"],
            data.operational_records
                .iter()
                .map(|record| {
                    vec![
                        format_date(&record.date),
                        operation_cell(record.operation).to_string(),
                        record.uin.clone(),
                        operation_details(record),
                    ]
                })
                .collect(),
        ),
        RecurringCategory::MaterialProcurement => (
            &["Date", "Material", "Quantity", "Vendor"],
            data.material_procurement
                .iter()
                .map(|record| {
                    vec![
                        format_date(&record.date),
                        record.material.clone(),
                        optional_cell(record.quantity.as_deref()),
                        optional_cell(record.vendor.as_deref()),
                    ]
                })
                .collect(),
        ),
        RecurringCategory::UasSold => (
            &["Date", "Serial Number", "Sold To"],
            data.uas_sold
                .iter()
                .map(|record| {
                    vec![
                        format_date(&record.date),
                        record.unit_serial_number.clone(),
                        record.sold_to.clone(),
                    ]
                })
                .collect(),
        ),
    };

    ReportSectionDto {
        category,
        heading: category.heading().to_string(),
        columns: columns.iter().map(|column| column.to_string()).collect(),
        rows,
    }
}

fn upload_state(reference: Option<&str>) -> String {
    match reference {
        Some(value) if !value.trim().is_empty() => "Uploaded".to_string(),
        _ => "Pending".to_string(),
    }
}

fn optional_cell(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => "—".to_string(),
    }
}

fn competence_cell(result: CompetenceResult) -> &'static str {
    match result {
        CompetenceResult::Competent => "Staff is Competent",
        CompetenceResult::NeedsTraining => "Needs Training",
    }
}

fn operation_cell(operation: UinOperation) -> &'static str {
    match operation {
        UinOperation::UinIssuance => "UIN Issuance",
        UinOperation::TransferOfUin => "Transfer of UIN",
        UinOperation::LinkingUinToSerial => "Linking UIN to Serial Number",
    }
}

fn operation_details(record: &entity::drone::OperationalRecord) -> String {
    match record.operation {
        UinOperation::UinIssuance => "-".to_string(),
        UinOperation::TransferOfUin => match record.transferred_to.as_deref() {
            Some(to) if !to.trim().is_empty() => format!("To: {to}"),
            _ => "-".to_string(),
        },
        UinOperation::LinkingUinToSerial => match record.serial_number.as_deref() {
            Some(serial) if !serial.trim().is_empty() => format!("S/N: {serial}"),
            _ => "-".to_string(),
        },
    }
}

/// Formats an ISO record date as e.g. "15 Jan 2026"; unparseable strings pass
/// through unchanged.
fn format_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(format_naive_date)
        .unwrap_or_else(|_| date.to_string())
}

fn format_naive_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use entity::drone::{
        CompetenceResult, DroneUploads, LabeledImage, OperationalRecord, PersonnelRecord,
        StaffCompetenceRecord, UinOperation,
    };
    use fleetcert_test_utils::fixtures::factory::{mock_drone_model, mock_team_member_model};

    use crate::model::checklist::RecurringCategory;

    use super::{format_date, project_one_time, project_recurring};

    /// Expect ISO dates to localize and junk to pass through
    #[test]
    fn test_date_formatting() {
        assert_eq!(format_date("2026-01-15"), "15 Jan 2026");
        assert_eq!(format_date("mid January"), "mid January");
    }

    /// Expect an empty drone to project with every fallback substituted
    #[test]
    fn test_one_time_fallbacks() {
        let drone = mock_drone_model(1, 1);

        let report = project_one_time(&drone, &[], &[]);

        assert_eq!(report.accountable_manager, "Not Assigned");
        assert_eq!(report.training_manual, "Pending");
        assert_eq!(report.system_design, "Pending");
        assert_eq!(report.web_portal, "—");
        assert!(report.roster.is_empty());
        assert!(report.units.is_empty());
    }

    /// Expect the manager name to resolve against the roster
    #[test]
    fn test_one_time_resolves_manager_name() {
        let mut drone = mock_drone_model(1, 1);
        drone.accountable_manager_id = Some(7);
        drone.uploads = DroneUploads {
            training_manual: Some("manual.pdf".to_string()),
            infrastructure_others: vec![LabeledImage {
                label: "Paint shop".to_string(),
                image: "paint.jpg".to_string(),
            }],
            ..Default::default()
        };

        let mut manager = mock_team_member_model(7, 1);
        manager.name = "Asha Rao".to_string();
        manager.position = "Accountable Manager".to_string();

        let report = project_one_time(&drone, &[manager], &[]);

        assert_eq!(report.accountable_manager, "Asha Rao");
        assert_eq!(report.training_manual, "Uploaded");
        assert_eq!(report.infrastructure.others[0].label, "Paint shop");
    }

    /// Expect all eight sections in display order, empty lists included
    #[test]
    fn test_recurring_emits_all_sections() {
        let drone = mock_drone_model(1, 1);

        let report = project_recurring(&drone);

        assert_eq!(report.sections.len(), 8);
        assert_eq!(report.sections[0].category, RecurringCategory::Personnel);
        assert_eq!(report.sections[0].heading, "Change of Personnel");
        assert!(report.sections.iter().all(|s| s.rows.is_empty()));
        assert_eq!(report.personnel_status, "No Change");
    }

    /// Expect row cells to carry formatted dates, display labels, and
    /// operation details
    #[test]
    fn test_recurring_row_formatting() {
        let mut drone = mock_drone_model(1, 1);
        drone.recurring_data.personnel.push(PersonnelRecord {
            id: "p-1".to_string(),
            date: "2026-02-01".to_string(),
            position: "Quality Manager".to_string(),
            previous: None,
            new: Some("Asha Rao".to_string()),
        });
        drone
            .recurring_data
            .staff_competence
            .push(StaffCompetenceRecord {
                id: "s-1".to_string(),
                date: "2026-02-02".to_string(),
                staff: "Vikram Shah".to_string(),
                result: CompetenceResult::Competent,
            });
        drone
            .recurring_data
            .operational_records
            .push(OperationalRecord {
                id: "o-1".to_string(),
                date: "2026-02-03".to_string(),
                operation: UinOperation::TransferOfUin,
                uin: "UIN-042".to_string(),
                serial_number: None,
                transferred_to: Some("SkyLift Pvt Ltd".to_string()),
            });

        let report = project_recurring(&drone);

        let personnel = &report.sections[0];
        assert_eq!(
            personnel.rows[0],
            vec!["01 Feb 2026", "Quality Manager", "—", "Asha Rao"]
        );

        let competence = &report.sections[1];
        assert_eq!(
            competence.rows[0],
            vec!["02 Feb 2026", "Vikram Shah", "Staff is Competent"]
        );

        let operational = &report.sections[5];
        assert_eq!(
            operational.rows[0],
            vec![
                "03 Feb 2026",
                "Transfer of UIN",
                "UIN-042",
                "To: SkyLift Pvt Ltd"
            ]
        );
        assert_eq!(report.personnel_status, "Report to DGCA");
    }
}
