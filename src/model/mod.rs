//! Server models and type definitions.
//!
//! Request/response DTOs for the HTTP API, the shared application state, and
//! the closed upload-kind/recurring-category vocabularies used by the
//! checklist engine. DTOs are mapped from entity models in the service layer
//! rather than exposing entities directly.

pub mod api;
pub mod app;
pub mod battery;
pub mod checklist;
pub mod drone;
pub mod order;
pub mod report;
pub mod subcontractor;
pub mod team;
