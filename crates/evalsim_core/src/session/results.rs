//! Keyed store for the latest simulation results.
//!
//! # Responsibility
//! - Hold per-simulator results in one explicit store the presentation
//!   layer owns and passes around.
//!
//! # Invariants
//! - `record` replaces the slot for the outcome's kind as a single value;
//!   readers never observe a half-updated slot.
//! - Slots for different kinds are independent.

use crate::sim::matching::EvaluatorMatch;
use crate::sim::risk::RiskAssessment;
use crate::sim::validation::ValidationReport;
use crate::sim::SimulatorKind;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Result payload of one simulator run.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationOutcome {
    Validation(ValidationReport),
    Matching(Vec<EvaluatorMatch>),
    RiskScoring(RiskAssessment),
}

impl SimulationOutcome {
    /// The slot this outcome belongs to.
    pub fn kind(&self) -> SimulatorKind {
        match self {
            Self::Validation(_) => SimulatorKind::DocumentValidation,
            Self::Matching(_) => SimulatorKind::EvaluatorMatching,
            Self::RiskScoring(_) => SimulatorKind::RiskScoring,
        }
    }
}

/// One recorded result envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSlot {
    /// Fresh per recording; lets the UI detect overwrites.
    pub entry_id: Uuid,
    /// Document the simulation ran against.
    pub document_id: String,
    pub outcome: SimulationOutcome,
}

/// Latest-result store, one slot per simulator kind.
#[derive(Debug, Default)]
pub struct ResultStore {
    slots: BTreeMap<SimulatorKind, SessionSlot>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an outcome, replacing any previous slot of the same kind.
    ///
    /// Returns the entry id of the new slot.
    pub fn record(&mut self, document_id: impl Into<String>, outcome: SimulationOutcome) -> Uuid {
        let entry_id = Uuid::new_v4();
        let slot = SessionSlot {
            entry_id,
            document_id: document_id.into(),
            outcome,
        };
        self.slots.insert(slot.outcome.kind(), slot);
        entry_id
    }

    /// Returns the latest slot for one simulator kind.
    pub fn get(&self, kind: SimulatorKind) -> Option<&SessionSlot> {
        self.slots.get(&kind)
    }

    /// Clears one slot; clearing an empty slot is a no-op.
    pub fn clear(&mut self, kind: SimulatorKind) {
        self.slots.remove(&kind);
    }

    pub fn clear_all(&mut self) {
        self.slots.clear();
    }

    /// Kinds that currently hold a result, in stable order.
    pub fn recorded_kinds(&self) -> Vec<SimulatorKind> {
        self.slots.keys().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ResultStore, SimulationOutcome};
    use crate::sim::validation::{ValidationReport, ValidationVerdict};
    use crate::sim::SimulatorKind;

    fn sample_report(score: u8) -> ValidationReport {
        ValidationReport {
            compliance_score: score,
            missing_sections: Vec::new(),
            compliance_issues: Vec::new(),
            status: ValidationVerdict::Approved,
            recommendations: Vec::new(),
        }
    }

    #[test]
    fn record_replaces_previous_slot_of_same_kind() {
        let mut store = ResultStore::new();
        let first = store.record("DOC-001", SimulationOutcome::Validation(sample_report(91)));
        let second = store.record("DOC-002", SimulationOutcome::Validation(sample_report(95)));
        assert_ne!(first, second);

        let slot = store
            .get(SimulatorKind::DocumentValidation)
            .expect("slot should hold the latest result");
        assert_eq!(slot.entry_id, second);
        assert_eq!(slot.document_id, "DOC-002");
        assert_eq!(store.recorded_kinds().len(), 1);
    }

    #[test]
    fn clear_removes_only_the_named_kind() {
        let mut store = ResultStore::new();
        store.record("DOC-001", SimulationOutcome::Validation(sample_report(80)));
        store.record("DOC-001", SimulationOutcome::Matching(Vec::new()));

        store.clear(SimulatorKind::DocumentValidation);
        assert!(store.get(SimulatorKind::DocumentValidation).is_none());
        assert!(store.get(SimulatorKind::EvaluatorMatching).is_some());

        store.clear_all();
        assert!(store.is_empty());
    }
}
