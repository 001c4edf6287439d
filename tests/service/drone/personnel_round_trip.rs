//! Tests the personnel change lifecycle through the persisted aggregate.

use fleetcert::{
    model::{
        checklist::{NewRecurringRecord, RecurringCategory},
        drone::AppendRecurringDto,
    },
    service::drone::DroneService,
};
use fleetcert_test_utils::{
    fixtures::factory, test_setup_with_compliance_tables, TestError, TestSetup,
};

fn personnel_record() -> NewRecurringRecord {
    NewRecurringRecord::Personnel {
        date: "2026-02-01".to_string(),
        position: "Quality Manager".to_string(),
        previous: Some("Ravi Menon".to_string()),
        new: Some("Asha Rao".to_string()),
    }
}

/// Tests the append, report, delete round trip against the database.
///
/// Expected: status walks "No Change" → "Report to DGCA" → "DGCA Notified" →
/// "No Change", with the version bumped by each step
#[tokio::test]
async fn append_report_delete_round_trip() -> Result<(), TestError> {
    let setup = test_setup_with_compliance_tables!()?;
    let db = setup.state.db;
    let drone = factory::seed_drone(&db, 1, "AgriHawk X4").await?;

    let drone_service = DroneService::new(&db);

    let initial = drone_service.get_checklist(drone.id).await.unwrap();
    assert_eq!(initial.recurring.personnel.status, "No Change");

    let appended = drone_service
        .append_recurring(
            drone.id,
            AppendRecurringDto {
                version: initial.drone.version,
                record: personnel_record(),
            },
        )
        .await
        .unwrap();
    assert_eq!(appended.recurring.personnel.status, "Report to DGCA");
    assert_eq!(appended.recurring.personnel.badge, "yellow");

    let reported = drone_service
        .mark_personnel_reported(drone.id, appended.drone.version)
        .await
        .unwrap();
    assert_eq!(reported.recurring.personnel.status, "DGCA Notified");
    assert_eq!(reported.recurring.personnel.badge, "green");

    let deleted = drone_service
        .delete_recurring(
            drone.id,
            RecurringCategory::Personnel,
            0,
            reported.drone.version,
        )
        .await
        .unwrap();
    assert_eq!(deleted.recurring.personnel.status, "No Change");
    assert!(deleted.drone.recurring_data.personnel.is_empty());
    assert!(!deleted.drone.recurring_data.personnel_reported);
    assert_eq!(deleted.drone.version, drone.version + 3);

    Ok(())
}

/// Tests that a second personnel change after reporting reopens the status.
///
/// Expected: status falls back to "Report to DGCA"
#[tokio::test]
async fn new_change_after_reporting_reopens_status() -> Result<(), TestError> {
    let setup = test_setup_with_compliance_tables!()?;
    let db = setup.state.db;
    let drone = factory::seed_drone(&db, 1, "AgriHawk X4").await?;

    let drone_service = DroneService::new(&db);

    let appended = drone_service
        .append_recurring(
            drone.id,
            AppendRecurringDto {
                version: drone.version,
                record: personnel_record(),
            },
        )
        .await
        .unwrap();
    let reported = drone_service
        .mark_personnel_reported(drone.id, appended.drone.version)
        .await
        .unwrap();

    let reopened = drone_service
        .append_recurring(
            drone.id,
            AppendRecurringDto {
                version: reported.drone.version,
                record: personnel_record(),
            },
        )
        .await
        .unwrap();

    assert_eq!(reopened.recurring.personnel.status, "Report to DGCA");
    assert_eq!(reopened.drone.recurring_data.personnel.len(), 2);

    Ok(())
}

/// Tests that appended records receive distinct stable ids.
///
/// Expected: two appends produce two records with different non-empty ids
#[tokio::test]
async fn appended_records_get_stable_ids() -> Result<(), TestError> {
    let setup = test_setup_with_compliance_tables!()?;
    let db = setup.state.db;
    let drone = factory::seed_drone(&db, 1, "AgriHawk X4").await?;

    let drone_service = DroneService::new(&db);

    let first = drone_service
        .append_recurring(
            drone.id,
            AppendRecurringDto {
                version: drone.version,
                record: personnel_record(),
            },
        )
        .await
        .unwrap();
    let second = drone_service
        .append_recurring(
            drone.id,
            AppendRecurringDto {
                version: first.drone.version,
                record: personnel_record(),
            },
        )
        .await
        .unwrap();

    let records = &second.drone.recurring_data.personnel;
    assert_eq!(records.len(), 2);
    assert!(!records[0].id.is_empty());
    assert_ne!(records[0].id, records[1].id);

    Ok(())
}
