pub use super::battery::Entity as Battery;
pub use super::drone::Entity as Drone;
pub use super::sales_order::Entity as SalesOrder;
pub use super::subcontractor::Entity as Subcontractor;
pub use super::team_member::Entity as TeamMember;
