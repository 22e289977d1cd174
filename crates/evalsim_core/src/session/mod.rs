//! Session-scoped simulation results.
//!
//! # Responsibility
//! - Hold the latest result per simulator kind for one UI session.
//!
//! # Invariants
//! - One slot per simulator kind; recording replaces the whole slot.
//! - Nothing here is persisted; the snapshot stays immutable.

pub mod results;

pub use results::{ResultStore, SessionSlot, SimulationOutcome};
