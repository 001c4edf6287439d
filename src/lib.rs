//! Fleetcert server application core modules.
//!
//! This crate is the backend for a DGCA compliance administration system for
//! drone fleet operators. It provides HTTP routing, entity repositories for
//! the organization's rosters (team members, subcontractors, batteries, sales
//! orders), and the compliance checklist engine that derives one-time and
//! recurring checklist status for each drone and validates mutations to its
//! compliance aggregates.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
