//! Core domain logic for the accreditation-evaluation demo.
//! This crate is the single source of truth for the snapshot schema and
//! the simulation contracts.

pub mod logging;
pub mod model;
pub mod query;
pub mod session;
pub mod sim;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::alert::{Alert, AlertStatus, RiskLevel, RiskType};
pub use model::document::{Document, DocumentStatus, SectionName, StandardKind};
pub use model::evaluator::{Availability, Evaluator, Region, Specialty};
pub use query::{dashboard_summary, join_alert_organizations, pending_documents, DashboardSummary};
pub use session::{ResultStore, SessionSlot, SimulationOutcome};
pub use sim::matching::{match_evaluators, EvaluatorMatch};
pub use sim::risk::{score_document_risk, RiskAssessment, RiskFactor};
pub use sim::validation::{validate_document, ValidationReport, ValidationVerdict};
pub use sim::{DelayHook, DelayOutcome, FixedDelay, NoDelay, SimError, SimResult, SimulatorKind};
pub use store::{
    load_or_generate, DataSet, GenerationPlan, JsonSnapshotStore, SnapshotStore, StoreError,
    StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
