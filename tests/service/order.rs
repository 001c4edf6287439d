//! Tests sales-order vocabulary validation and badge derivation.

use chrono::NaiveDate;

use fleetcert::{error::Error, model::order::SalesOrderFormDto, service::order::OrderService};
use fleetcert_test_utils::{test_setup_with_tables, TestError, TestSetup};

fn form() -> SalesOrderFormDto {
    SalesOrderFormDto {
        contract_number: "CT-2026-007".to_string(),
        client_name: "GreenField Agro".to_string(),
        client_segment: "Agriculture".to_string(),
        order_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        quantity: 2,
        unit_price: "650000".to_string(),
        advance_received: "650000".to_string(),
        payment_status: "Pending".to_string(),
        drone_model: "AgriHawk X4".to_string(),
        payload_type: "Sprayer".to_string(),
        endurance_minutes: 25,
        battery_count: 4,
        type_certification_status: "In Design".to_string(),
        uin_allocation_status: "Pending".to_string(),
        rpto_training_status: "Pending".to_string(),
        insurance_status: "Pending".to_string(),
        delivery_status: "Not Ready".to_string(),
        delivery_date: None,
        deployment_location: "Nashik, MH".to_string(),
        support_contract: "AMC 1yr".to_string(),
    }
}

/// Tests that a status value outside its vocabulary rejects the create.
///
/// Expected: Err with validation error and no row written
#[tokio::test]
async fn create_rejects_unknown_status() -> Result<(), TestError> {
    let setup = test_setup_with_tables!(entity::prelude::SalesOrder)?;
    let db = setup.state.db;
    let order_service = OrderService::new(&db);

    let mut bad = form();
    bad.delivery_status = "Shipped".to_string();

    let result = order_service.create(1, bad).await;
    assert!(matches!(result, Err(Error::ValidationError(_))));

    let orders = order_service.list(1).await.unwrap();
    assert!(orders.is_empty());

    Ok(())
}

/// Tests that update validates the replacement form too.
///
/// Expected: Err with validation error and stored row unchanged
#[tokio::test]
async fn update_rejects_unknown_status() -> Result<(), TestError> {
    let setup = test_setup_with_tables!(entity::prelude::SalesOrder)?;
    let db = setup.state.db;
    let order_service = OrderService::new(&db);

    let created = order_service.create(1, form()).await.unwrap();

    let mut bad = form();
    bad.rpto_training_status = "Complete".to_string();

    let result = order_service.update(created.id, bad).await;
    assert!(matches!(result, Err(Error::ValidationError(_))));

    let current = order_service.get(created.id).await.unwrap();
    assert_eq!(current.rpto_training_status, "Pending");

    Ok(())
}

/// Tests that badges track the stored status values through an update.
///
/// Expected: updated row reflects the new statuses with matching badge classes
#[tokio::test]
async fn update_rederives_badges() -> Result<(), TestError> {
    let setup = test_setup_with_tables!(entity::prelude::SalesOrder)?;
    let db = setup.state.db;
    let order_service = OrderService::new(&db);

    let created = order_service.create(1, form()).await.unwrap();
    assert_eq!(created.badges.delivery_status, "blue");

    let mut updated_form = form();
    updated_form.payment_status = "Fully Billed".to_string();
    updated_form.delivery_status = "Delivered".to_string();
    updated_form.delivery_date = NaiveDate::from_ymd_opt(2026, 6, 20);
    updated_form.type_certification_status = "Rejected".to_string();

    let updated = order_service.update(created.id, updated_form).await.unwrap();

    assert_eq!(updated.badges.payment_status, "green");
    assert_eq!(updated.badges.delivery_status, "green");
    assert_eq!(updated.badges.type_certification_status, "red");
    assert_eq!(
        updated.delivery_date,
        NaiveDate::from_ymd_opt(2026, 6, 20)
    );

    Ok(())
}
