//! Factory functions for generating mock database models.
//!
//! Pure functions return in-memory model instances with standard test values
//! for unit tests; the `seed_*` helpers insert a row and return the persisted
//! model for tests that need real database state.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use entity::drone::{DroneUploads, ManufacturedUnits, RecurringData};
use entity::subcontractor::ContractorType;

/// Create a mock team member model for testing.
pub fn mock_team_member_model(id: i32, organization_id: i32) -> entity::team_member::Model {
    let now = Utc::now().naive_utc();
    entity::team_member::Model {
        id,
        organization_id,
        access_id: format!("AC-TEST{:04}", id),
        name: "Test Member".to_string(),
        phone: "+91 90000 00000".to_string(),
        email: "member@example.com".to_string(),
        position: "Quality Manager".to_string(),
        created_at: now,
    }
}

/// Create a mock subcontractor model for testing.
pub fn mock_subcontractor_model(id: i32, organization_id: i32) -> entity::subcontractor::Model {
    let now = Utc::now().naive_utc();
    entity::subcontractor::Model {
        id,
        organization_id,
        company_name: "Aerostruct Pvt Ltd".to_string(),
        contractor_type: ContractorType::Manufacturing,
        contact_person: "Test Contact".to_string(),
        email: "contact@aerostruct.example".to_string(),
        phone: "+91 90000 00001".to_string(),
        agreement_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        created_at: now,
    }
}

/// Create a mock battery model for testing.
pub fn mock_battery_model(id: i32, organization_id: i32) -> entity::battery::Model {
    let now = Utc::now().naive_utc();
    entity::battery::Model {
        id,
        organization_id,
        model: "LiPo 6S".to_string(),
        capacity: "22000mAh".to_string(),
        battery_number_a: format!("BAT-A{:03}", id),
        battery_number_b: format!("BAT-B{:03}", id),
        created_at: now,
    }
}

/// Create a mock drone model with empty aggregates, suitable as the base
/// snapshot for checklist derivation tests.
pub fn mock_drone_model(id: i32, organization_id: i32) -> entity::drone::Model {
    let now = Utc::now().naive_utc();
    entity::drone::Model {
        id,
        organization_id,
        model_name: "AgriHawk X4".to_string(),
        image: None,
        accountable_manager_id: None,
        uploads: DroneUploads::default(),
        manufactured_units: ManufacturedUnits::default(),
        recurring_data: RecurringData::default(),
        version: 1,
        created_at: now,
    }
}

/// Create a mock sales order model for testing.
pub fn mock_sales_order_model(id: i32, organization_id: i32) -> entity::sales_order::Model {
    let now = Utc::now().naive_utc();
    entity::sales_order::Model {
        id,
        organization_id,
        contract_number: format!("CT-2026-{:03}", id),
        client_name: "GreenField Agro".to_string(),
        client_segment: "Agriculture".to_string(),
        order_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        quantity: 4,
        unit_price: "650000".to_string(),
        advance_received: "1300000".to_string(),
        payment_status: "Partially Billed".to_string(),
        drone_model: "AgriHawk X4".to_string(),
        payload_type: "Sprayer".to_string(),
        endurance_minutes: 25,
        battery_count: 8,
        type_certification_status: "In Progress".to_string(),
        uin_allocation_status: "Pending".to_string(),
        rpto_training_status: "Pending".to_string(),
        insurance_status: "Approved".to_string(),
        delivery_status: "Not Ready".to_string(),
        delivery_date: None,
        deployment_location: "Nashik, MH".to_string(),
        support_contract: "AMC 1yr".to_string(),
        created_at: now,
    }
}

/// Insert a team member row and return the persisted model.
pub async fn seed_team_member(
    db: &DatabaseConnection,
    organization_id: i32,
    name: &str,
    position: &str,
) -> Result<entity::team_member::Model, DbErr> {
    entity::team_member::ActiveModel {
        organization_id: ActiveValue::Set(organization_id),
        access_id: ActiveValue::Set(format!("AC-{}", uuid::Uuid::new_v4().simple())),
        name: ActiveValue::Set(name.to_string()),
        phone: ActiveValue::Set("+91 90000 00000".to_string()),
        email: ActiveValue::Set(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
        position: ActiveValue::Set(position.to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Insert a subcontractor row and return the persisted model.
pub async fn seed_subcontractor(
    db: &DatabaseConnection,
    organization_id: i32,
    company_name: &str,
) -> Result<entity::subcontractor::Model, DbErr> {
    entity::subcontractor::ActiveModel {
        organization_id: ActiveValue::Set(organization_id),
        company_name: ActiveValue::Set(company_name.to_string()),
        contractor_type: ActiveValue::Set(ContractorType::Design),
        contact_person: ActiveValue::Set("Test Contact".to_string()),
        email: ActiveValue::Set("contact@example.com".to_string()),
        phone: ActiveValue::Set("+91 90000 00001".to_string()),
        agreement_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Insert a battery row and return the persisted model.
pub async fn seed_battery(
    db: &DatabaseConnection,
    organization_id: i32,
    number_a: &str,
    number_b: &str,
) -> Result<entity::battery::Model, DbErr> {
    entity::battery::ActiveModel {
        organization_id: ActiveValue::Set(organization_id),
        model: ActiveValue::Set("LiPo 6S".to_string()),
        capacity: ActiveValue::Set("22000mAh".to_string()),
        battery_number_a: ActiveValue::Set(number_a.to_string()),
        battery_number_b: ActiveValue::Set(number_b.to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Insert a drone row with empty aggregates and return the persisted model.
pub async fn seed_drone(
    db: &DatabaseConnection,
    organization_id: i32,
    model_name: &str,
) -> Result<entity::drone::Model, DbErr> {
    entity::drone::ActiveModel {
        organization_id: ActiveValue::Set(organization_id),
        model_name: ActiveValue::Set(model_name.to_string()),
        image: ActiveValue::Set(None),
        accountable_manager_id: ActiveValue::Set(None),
        uploads: ActiveValue::Set(DroneUploads::default()),
        manufactured_units: ActiveValue::Set(ManufacturedUnits::default()),
        recurring_data: ActiveValue::Set(RecurringData::default()),
        version: ActiveValue::Set(1),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}
