pub use sea_orm_migration::prelude::*;

mod m20260812_000001_create_team_member_table;
mod m20260812_000002_create_subcontractor_table;
mod m20260812_000003_create_battery_table;
mod m20260812_000004_create_drone_table;
mod m20260812_000005_create_sales_order_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260812_000001_create_team_member_table::Migration),
            Box::new(m20260812_000002_create_subcontractor_table::Migration),
            Box::new(m20260812_000003_create_battery_table::Migration),
            Box::new(m20260812_000004_create_drone_table::Migration),
            Box::new(m20260812_000005_create_sales_order_table::Migration),
        ]
    }
}
