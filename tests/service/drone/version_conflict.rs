//! Tests the version token guarding aggregate writes.

use fleetcert::{
    error::Error,
    model::{
        checklist::UploadKind,
        drone::{AssignManagerDto, UpdateUploadsDto},
    },
    service::drone::DroneService,
};
use fleetcert_test_utils::{
    fixtures::factory, test_setup_with_compliance_tables, TestError, TestSetup,
};

fn upload_dto(version: i32) -> UpdateUploadsDto {
    UpdateUploadsDto {
        version,
        kind: UploadKind::TrainingManual,
        files: vec!["manual.pdf".to_string()],
        label: None,
    }
}

/// Tests that a stale version token rejects the write with a conflict.
///
/// Expected: second write with the original token fails with Error::Conflict
/// and the stored aggregate keeps the first write's state
#[tokio::test]
async fn stale_token_conflicts_and_leaves_state() -> Result<(), TestError> {
    let setup = test_setup_with_compliance_tables!()?;
    let db = setup.state.db;
    let drone = factory::seed_drone(&db, 1, "AgriHawk X4").await?;

    let drone_service = DroneService::new(&db);

    drone_service
        .update_uploads(drone.id, upload_dto(drone.version))
        .await
        .unwrap();

    let result = drone_service
        .update_uploads(
            drone.id,
            UpdateUploadsDto {
                version: drone.version,
                kind: UploadKind::TrainingManual,
                files: vec!["other.pdf".to_string()],
                label: None,
            },
        )
        .await;

    assert!(matches!(result, Err(Error::Conflict { .. })));

    let current = drone_service.get_checklist(drone.id).await.unwrap();
    assert_eq!(
        current.drone.uploads.training_manual.as_deref(),
        Some("manual.pdf")
    );
    assert_eq!(current.drone.version, drone.version + 1);

    Ok(())
}

/// Tests that the refreshed token from a mutation response is accepted.
///
/// Expected: a chain of writes succeeds when each uses the returned version
#[tokio::test]
async fn refreshed_token_allows_next_write() -> Result<(), TestError> {
    let setup = test_setup_with_compliance_tables!()?;
    let db = setup.state.db;
    let drone = factory::seed_drone(&db, 1, "AgriHawk X4").await?;
    let manager = factory::seed_team_member(&db, 1, "Asha Rao", "Accountable Manager").await?;

    let drone_service = DroneService::new(&db);

    let first = drone_service
        .update_uploads(drone.id, upload_dto(drone.version))
        .await
        .unwrap();

    let second = drone_service
        .assign_manager(
            drone.id,
            AssignManagerDto {
                version: first.drone.version,
                manager_id: manager.id,
            },
        )
        .await
        .unwrap();

    assert_eq!(second.drone.accountable_manager_id, Some(manager.id));
    assert_eq!(second.drone.version, drone.version + 2);

    Ok(())
}

/// Tests that mutations against a missing drone report not found, not
/// conflict.
///
/// Expected: Err with Error::NotFound
#[tokio::test]
async fn missing_drone_is_not_found() -> Result<(), TestError> {
    let setup = test_setup_with_compliance_tables!()?;
    let db = setup.state.db;

    let drone_service = DroneService::new(&db);

    let result = drone_service.update_uploads(999, upload_dto(1)).await;

    assert!(matches!(result, Err(Error::NotFound("Drone", 999))));

    Ok(())
}
