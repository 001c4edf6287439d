//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories and the pure checklist engine: the drone
//! service runs every checklist mutation through engine validation before
//! persisting the aggregate under a version guard, the report service builds
//! the projections handed to the external report generator, and the roster
//! services provide plain org-scoped CRUD.

pub mod battery;
pub mod checklist;
pub mod drone;
pub mod order;
pub mod report;
pub mod subcontractor;
pub mod team;
