//! Tests that a document upload completes exactly its own checklist item.

use fleetcert::{
    model::{
        checklist::UploadKind,
        drone::{UpdateUploadsDto, UpdateWebPortalDto},
    },
    service::drone::DroneService,
};
use fleetcert_test_utils::{
    fixtures::factory, test_setup_with_compliance_tables, TestError, TestSetup,
};

/// Tests that uploading the training manual flips exactly one item.
///
/// Expected: completed count goes from 0 to 1 and only the manual item is
/// complete
#[tokio::test]
async fn training_manual_completes_only_its_item() -> Result<(), TestError> {
    let setup = test_setup_with_compliance_tables!()?;
    let db = setup.state.db;
    let drone = factory::seed_drone(&db, 1, "AgriHawk X4").await?;

    let drone_service = DroneService::new(&db);

    let before = drone_service.get_checklist(drone.id).await.unwrap();
    assert_eq!(before.one_time.completed_count, 0);

    let after = drone_service
        .update_uploads(
            drone.id,
            UpdateUploadsDto {
                version: drone.version,
                kind: UploadKind::TrainingManual,
                files: vec!["training-manual.pdf".to_string()],
                label: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(after.one_time.completed_count, 1);
    let complete: Vec<&str> = after
        .one_time
        .items
        .iter()
        .filter(|item| item.complete)
        .map(|item| item.label.as_str())
        .collect();
    assert_eq!(complete, vec!["Training Procedure Manual"]);

    Ok(())
}

/// Tests that the roster-derived items complete from org state, not uploads.
///
/// Expected: seeding a team member and a subcontractor completes two items
/// without touching the drone
#[tokio::test]
async fn roster_items_derive_from_org_state() -> Result<(), TestError> {
    let setup = test_setup_with_compliance_tables!()?;
    let db = setup.state.db;
    let drone = factory::seed_drone(&db, 1, "AgriHawk X4").await?;

    factory::seed_team_member(&db, 1, "Asha Rao", "Quality Manager").await?;
    factory::seed_subcontractor(&db, 1, "Aerostruct Pvt Ltd").await?;

    let drone_service = DroneService::new(&db);
    let checklist = drone_service.get_checklist(drone.id).await.unwrap();

    assert_eq!(checklist.one_time.completed_count, 2);
    assert_eq!(checklist.drone.version, drone.version);

    Ok(())
}

/// Tests that rosters in another organization do not leak into the checklist.
///
/// Expected: completed count stays 0
#[tokio::test]
async fn other_org_rosters_do_not_count() -> Result<(), TestError> {
    let setup = test_setup_with_compliance_tables!()?;
    let db = setup.state.db;
    let drone = factory::seed_drone(&db, 1, "AgriHawk X4").await?;

    factory::seed_team_member(&db, 2, "Vikram Shah", "Quality Manager").await?;
    factory::seed_subcontractor(&db, 2, "Aerostruct Pvt Ltd").await?;

    let drone_service = DroneService::new(&db);
    let checklist = drone_service.get_checklist(drone.id).await.unwrap();

    assert_eq!(checklist.one_time.completed_count, 0);

    Ok(())
}

/// Tests that setting the web portal link completes the portal item and bumps
/// the version token.
///
/// Expected: Web Portal complete and version incremented by one
#[tokio::test]
async fn web_portal_completes_item_and_bumps_version() -> Result<(), TestError> {
    let setup = test_setup_with_compliance_tables!()?;
    let db = setup.state.db;
    let drone = factory::seed_drone(&db, 1, "AgriHawk X4").await?;

    let drone_service = DroneService::new(&db);
    let after = drone_service
        .update_web_portal(
            drone.id,
            UpdateWebPortalDto {
                version: drone.version,
                url: "https://portal.example.com".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(after.one_time.completed_count, 1);
    let portal = after
        .one_time
        .items
        .iter()
        .find(|item| item.label == "Web Portal")
        .unwrap();
    assert!(portal.complete);
    assert_eq!(after.drone.version, drone.version + 1);

    Ok(())
}
