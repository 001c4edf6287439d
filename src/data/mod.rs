//! Data access layer repositories.
//!
//! One repository per entity, each a thin abstraction over sea-orm queries.
//! The drone repository is the only one with non-trivial write semantics:
//! every aggregate column write is conditional on the row's version token and
//! bumps it, so concurrent writers cannot silently overwrite each other.

pub mod battery;
pub mod drone;
pub mod sales_order;
pub mod subcontractor;
pub mod team_member;

pub use battery::BatteryRepository;
pub use drone::DroneRepository;
pub use sales_order::{SalesOrderFields, SalesOrderRepository};
pub use subcontractor::{SubcontractorFields, SubcontractorRepository};
pub use team_member::TeamMemberRepository;
