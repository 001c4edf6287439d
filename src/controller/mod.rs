//! HTTP request handlers.
//!
//! Handlers stay thin: extract the request, hand it to the matching service,
//! and let [`crate::error::Error`]'s `IntoResponse` shape every failure.

pub mod battery;
pub mod drone;
pub mod order;
pub mod report;
pub mod subcontractor;
pub mod team;
