pub mod prelude;

pub mod battery;
pub mod drone;
pub mod sales_order;
pub mod subcontractor;
pub mod team_member;
