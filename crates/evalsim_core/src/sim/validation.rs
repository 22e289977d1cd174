//! Document validation simulator.
//!
//! # Responsibility
//! - Produce a validation verdict for one selected document.
//!
//! # Invariants
//! - The compliance score is redrawn fresh on every call; the stored score
//!   on the input document is not consulted.
//! - Recommendations derive deterministically from the drawn report parts,
//!   never from additional randomness.

use crate::model::document::{Document, SectionName};
use crate::sim::{run_delay_stage, DelayHook, SimResult, SimulatorKind};
use log::info;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;

const MISSING_SECTION_THRESHOLD: u8 = 90;
const COMPLIANCE_ISSUE_THRESHOLD: u8 = 85;
const CONSULTANT_THRESHOLD: u8 = 75;

/// Compliance problem the validator can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceIssue {
    #[serde(rename = "Incomplete management review records")]
    IncompleteManagementReview,
    #[serde(rename = "Missing signatures on key documents")]
    MissingSignatures,
    #[serde(rename = "Insufficient method validation data")]
    InsufficientMethodValidation,
    #[serde(rename = "Inadequate uncertainty calculations")]
    InadequateUncertaintyCalculations,
    #[serde(rename = "Incomplete training records")]
    IncompleteTrainingRecords,
}

impl ComplianceIssue {
    pub const ALL: [Self; 5] = [
        Self::IncompleteManagementReview,
        Self::MissingSignatures,
        Self::InsufficientMethodValidation,
        Self::InadequateUncertaintyCalculations,
        Self::IncompleteTrainingRecords,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::IncompleteManagementReview => "Incomplete management review records",
            Self::MissingSignatures => "Missing signatures on key documents",
            Self::InsufficientMethodValidation => "Insufficient method validation data",
            Self::InadequateUncertaintyCalculations => "Inadequate uncertainty calculations",
            Self::IncompleteTrainingRecords => "Incomplete training records",
        }
    }
}

/// Overall verdict of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationVerdict {
    Approved,
    #[serde(rename = "Needs Minor Revisions")]
    NeedsMinorRevisions,
    #[serde(rename = "Needs Major Revisions")]
    NeedsMajorRevisions,
}

impl ValidationVerdict {
    pub fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::NeedsMinorRevisions => "Needs Minor Revisions",
            Self::NeedsMajorRevisions => "Needs Major Revisions",
        }
    }
}

/// Result of one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub compliance_score: u8,
    pub missing_sections: Vec<SectionName>,
    pub compliance_issues: Vec<ComplianceIssue>,
    pub status: ValidationVerdict,
    pub recommendations: Vec<String>,
}

/// Simulates validating one document.
///
/// # Contract
/// - One delay stage runs before any computation; an interrupted pause
///   aborts with `SimError::Interrupted`.
/// - Missing sections (1-3) are drawn when the fresh score is below 90,
///   compliance issues (1-3) below 85, both from fixed catalogs.
/// - Verdict thresholds: >=90 Approved, >=75 Needs Minor Revisions, else
///   Needs Major Revisions.
pub fn validate_document<R: Rng + ?Sized>(
    document: &Document,
    rng: &mut R,
    delay: &dyn DelayHook,
) -> SimResult<ValidationReport> {
    let started_at = Instant::now();
    run_delay_stage(delay, SimulatorKind::DocumentValidation)?;

    let compliance_score: u8 = rng.gen_range(60..=100);

    let missing_sections: Vec<SectionName> = if compliance_score < MISSING_SECTION_THRESHOLD {
        let count = rng.gen_range(1..=3);
        SectionName::ALL.choose_multiple(rng, count).copied().collect()
    } else {
        Vec::new()
    };

    let compliance_issues: Vec<ComplianceIssue> = if compliance_score < COMPLIANCE_ISSUE_THRESHOLD {
        let count = rng.gen_range(1..=3);
        ComplianceIssue::ALL
            .choose_multiple(rng, count)
            .copied()
            .collect()
    } else {
        Vec::new()
    };

    let status = verdict_for_score(compliance_score);
    let recommendations =
        derive_recommendations(&missing_sections, &compliance_issues, compliance_score);

    info!(
        "event=simulate_validation module=sim status=ok document={} score={} verdict={} duration_ms={}",
        document.id,
        compliance_score,
        status.label(),
        started_at.elapsed().as_millis()
    );

    Ok(ValidationReport {
        compliance_score,
        missing_sections,
        compliance_issues,
        status,
        recommendations,
    })
}

fn verdict_for_score(score: u8) -> ValidationVerdict {
    if score >= 90 {
        ValidationVerdict::Approved
    } else if score >= 75 {
        ValidationVerdict::NeedsMinorRevisions
    } else {
        ValidationVerdict::NeedsMajorRevisions
    }
}

/// Derives advice from the report parts alone.
pub fn derive_recommendations(
    missing_sections: &[SectionName],
    compliance_issues: &[ComplianceIssue],
    compliance_score: u8,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !missing_sections.is_empty() {
        let names: Vec<&str> = missing_sections.iter().map(|s| s.label()).collect();
        recommendations.push(format!(
            "Complete the following missing sections: {}",
            names.join(", ")
        ));
    }
    if !compliance_issues.is_empty() {
        let names: Vec<&str> = compliance_issues.iter().map(|i| i.label()).collect();
        recommendations.push(format!(
            "Address the following compliance issues: {}",
            names.join(", ")
        ));
    }
    if compliance_score < CONSULTANT_THRESHOLD {
        recommendations
            .push("Consider requesting assistance from an accreditation consultant".to_string());
    }

    recommendations
}
