//! The compliance checklist engine.
//!
//! Pure, synchronous functions over a drone snapshot: one-time checklist
//! derivation, upload slot mutation semantics, recurring record validation and
//! mutation, and the shared status badge mapping. Nothing here touches the
//! database; the drone service applies these functions to a freshly loaded
//! aggregate and persists the result under a version guard.

pub mod badge;
pub mod recurring;
pub mod status;
pub mod uploads;
