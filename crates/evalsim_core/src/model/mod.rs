//! Domain model for the accreditation-evaluation demo core.
//!
//! # Responsibility
//! - Define the three synthetic entity collections (documents, evaluators,
//!   risk alerts) and their fixed catalogs.
//! - Carry bilingual projections alongside the canonical English fields.
//!
//! # Invariants
//! - Entity IDs are stable strings (`DOC-NNN`, `EVA-NNN`, `ALERT-NNN`).
//! - Document status derives from the compliance score at generation time.
//! - Alert risk scores stay inside the band of their risk level.

pub mod alert;
pub mod document;
pub mod evaluator;
