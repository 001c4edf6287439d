//! Tests UIN operational record shapes through the persisted aggregate.

use entity::drone::UinOperation;
use fleetcert::{
    error::Error,
    model::{checklist::NewRecurringRecord, drone::AppendRecurringDto},
    service::drone::DroneService,
};
use fleetcert_test_utils::{
    fixtures::factory, test_setup_with_compliance_tables, TestError, TestSetup,
};

/// Tests that a transfer record stores the recipient and no serial number.
///
/// Expected: persisted record has transferred_to set and serial_number None
#[tokio::test]
async fn transfer_record_shape() -> Result<(), TestError> {
    let setup = test_setup_with_compliance_tables!()?;
    let db = setup.state.db;
    let drone = factory::seed_drone(&db, 1, "AgriHawk X4").await?;

    let drone_service = DroneService::new(&db);

    let updated = drone_service
        .append_recurring(
            drone.id,
            AppendRecurringDto {
                version: drone.version,
                record: NewRecurringRecord::OperationalRecords {
                    date: "2026-03-10".to_string(),
                    operation: UinOperation::TransferOfUin,
                    uin: "UIN-042".to_string(),
                    serial_number: Some("SN-LEFTOVER".to_string()),
                    transferred_to: Some("SkyLift Pvt Ltd".to_string()),
                },
            },
        )
        .await
        .unwrap();

    let record = &updated.drone.recurring_data.operational_records[0];
    assert_eq!(record.operation, UinOperation::TransferOfUin);
    assert_eq!(record.transferred_to.as_deref(), Some("SkyLift Pvt Ltd"));
    assert!(record.serial_number.is_none());

    Ok(())
}

/// Tests that an issuance record drops both conditional fields.
///
/// Expected: persisted record has neither serial_number nor transferred_to
#[tokio::test]
async fn issuance_record_drops_conditional_fields() -> Result<(), TestError> {
    let setup = test_setup_with_compliance_tables!()?;
    let db = setup.state.db;
    let drone = factory::seed_drone(&db, 1, "AgriHawk X4").await?;

    let drone_service = DroneService::new(&db);

    let updated = drone_service
        .append_recurring(
            drone.id,
            AppendRecurringDto {
                version: drone.version,
                record: NewRecurringRecord::OperationalRecords {
                    date: "2026-03-10".to_string(),
                    operation: UinOperation::UinIssuance,
                    uin: "UIN-042".to_string(),
                    serial_number: Some("SN-LEFTOVER".to_string()),
                    transferred_to: Some("IGNORED".to_string()),
                },
            },
        )
        .await
        .unwrap();

    let record = &updated.drone.recurring_data.operational_records[0];
    assert!(record.serial_number.is_none());
    assert!(record.transferred_to.is_none());

    Ok(())
}

/// Tests that a rejected linking append leaves the aggregate untouched.
///
/// Expected: Err with validation error and no record persisted or version
/// bumped
#[tokio::test]
async fn rejected_append_leaves_aggregate_untouched() -> Result<(), TestError> {
    let setup = test_setup_with_compliance_tables!()?;
    let db = setup.state.db;
    let drone = factory::seed_drone(&db, 1, "AgriHawk X4").await?;

    let drone_service = DroneService::new(&db);

    let result = drone_service
        .append_recurring(
            drone.id,
            AppendRecurringDto {
                version: drone.version,
                record: NewRecurringRecord::OperationalRecords {
                    date: "2026-03-10".to_string(),
                    operation: UinOperation::LinkingUinToSerial,
                    uin: "UIN-042".to_string(),
                    serial_number: None,
                    transferred_to: None,
                },
            },
        )
        .await;

    assert!(matches!(result, Err(Error::ValidationError(_))));

    let current = drone_service.get_checklist(drone.id).await.unwrap();
    assert!(current.drone.recurring_data.operational_records.is_empty());
    assert_eq!(current.drone.version, drone.version);

    Ok(())
}
