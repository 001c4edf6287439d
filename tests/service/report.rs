//! Tests report payload assembly from persisted state.

use fleetcert::{
    model::{
        checklist::NewRecurringRecord,
        drone::{AssignManagerDto, NewManufacturedUnitDto, UpdateUnitsDto},
    },
    service::{drone::DroneService, report::ReportService},
};
use fleetcert_test_utils::{
    fixtures::factory, test_setup_with_compliance_tables, TestError, TestSetup,
};

/// Tests the one-time report against seeded rosters and aggregates.
///
/// Expected: roster, manager name, localized agreement date, and unit table
/// all present
#[tokio::test]
async fn one_time_report_assembles_org_state() -> Result<(), TestError> {
    let setup = test_setup_with_compliance_tables!()?;
    let db = setup.state.db;
    let drone = factory::seed_drone(&db, 1, "AgriHawk X4").await?;
    let manager = factory::seed_team_member(&db, 1, "Asha Rao", "Accountable Manager").await?;
    factory::seed_subcontractor(&db, 1, "Aerostruct Pvt Ltd").await?;

    let drone_service = DroneService::new(&db);
    let assigned = drone_service
        .assign_manager(
            drone.id,
            AssignManagerDto {
                version: drone.version,
                manager_id: manager.id,
            },
        )
        .await
        .unwrap();
    drone_service
        .update_units(
            drone.id,
            UpdateUnitsDto {
                version: assigned.drone.version,
                units: vec![NewManufacturedUnitDto {
                    serial_number: "SN-001".to_string(),
                    uin: "UIN-001".to_string(),
                }],
            },
        )
        .await
        .unwrap();

    let report = ReportService::new(&db).one_time(drone.id).await.unwrap();

    assert_eq!(report.drone_model, "AgriHawk X4");
    assert_eq!(report.accountable_manager, "Asha Rao");
    assert_eq!(report.roster.len(), 1);
    assert_eq!(report.subcontractors[0].company_name, "Aerostruct Pvt Ltd");
    assert_eq!(report.subcontractors[0].agreement_date, "15 Jan 2026");
    assert_eq!(report.units.len(), 1);
    assert_eq!(report.units[0].uin, "UIN-001");
    assert_eq!(report.training_manual, "Pending");

    Ok(())
}

/// Tests that the recurring report reflects appended records.
///
/// Expected: eight sections, with the UAS sold row formatted in place
#[tokio::test]
async fn recurring_report_reflects_records() -> Result<(), TestError> {
    let setup = test_setup_with_compliance_tables!()?;
    let db = setup.state.db;
    let drone = factory::seed_drone(&db, 1, "AgriHawk X4").await?;

    let drone_service = DroneService::new(&db);
    drone_service
        .append_recurring(
            drone.id,
            fleetcert::model::drone::AppendRecurringDto {
                version: drone.version,
                record: NewRecurringRecord::UasSold {
                    date: "2026-04-05".to_string(),
                    unit_serial_number: "SN-001".to_string(),
                    sold_to: "GreenField Agro".to_string(),
                },
            },
        )
        .await
        .unwrap();

    let report = ReportService::new(&db).recurring(drone.id).await.unwrap();

    assert_eq!(report.sections.len(), 8);
    let uas_sold = report
        .sections
        .iter()
        .find(|section| section.heading == "UAS Sold")
        .unwrap();
    assert_eq!(
        uas_sold.rows[0],
        vec!["05 Apr 2026", "SN-001", "GreenField Agro"]
    );
    assert_eq!(report.personnel_status, "No Change");

    Ok(())
}
