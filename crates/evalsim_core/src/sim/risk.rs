//! Risk scoring simulator.
//!
//! # Responsibility
//! - Score accreditation risk for one selected document.
//! - Define the tagged risk-factor vocabulary and its mitigation mapping.
//!
//! # Invariants
//! - Risk factors carry stable identities; mitigation rules key off the
//!   variant, never off display text.
//! - The risk level is a fresh draw from the score thresholds and may
//!   disagree with the band an alert was generated in.

use crate::model::alert::RiskLevel;
use crate::model::document::Document;
use crate::sim::{run_delay_stage, DelayHook, SimResult, SimulatorKind};
use log::info;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;

const LOW_COMPLIANCE_THRESHOLD: u8 = 75;
const HIGH_RISK_THRESHOLD: u8 = 70;
const MEDIUM_RISK_THRESHOLD: u8 = 40;
const SCORE_JITTER: i16 = 10;

/// Identified contributor to a document's risk.
///
/// Tagged so downstream rules survive wording changes in the display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum RiskFactor {
    LowComplianceScore,
    MissingSections { count: usize },
    HistoryOfNonCompliance,
    RecentStaffTurnover,
    ComplexAccreditationScope,
    PreviousAccreditationIssues,
    DelayedQueryResponses,
}

/// Pool the sampled additional factors are drawn from.
const ADDITIONAL_FACTORS: [RiskFactor; 5] = [
    RiskFactor::HistoryOfNonCompliance,
    RiskFactor::RecentStaffTurnover,
    RiskFactor::ComplexAccreditationScope,
    RiskFactor::PreviousAccreditationIssues,
    RiskFactor::DelayedQueryResponses,
];

impl RiskFactor {
    /// Human-readable description shown by the dashboard.
    pub fn describe(self) -> String {
        match self {
            Self::LowComplianceScore => "Low compliance score".to_string(),
            Self::MissingSections { count } => format!("Missing sections: {count}"),
            Self::HistoryOfNonCompliance => "History of non-compliance".to_string(),
            Self::RecentStaffTurnover => "Recent staff turnover".to_string(),
            Self::ComplexAccreditationScope => "Complex scope of accreditation".to_string(),
            Self::PreviousAccreditationIssues => "Previous accreditation issues".to_string(),
            Self::DelayedQueryResponses => "Delayed responses to queries".to_string(),
        }
    }

    /// Mitigation advice keyed off this factor's identity.
    ///
    /// Two factors intentionally carry no mitigation.
    pub fn mitigation(self) -> Option<&'static str> {
        match self {
            Self::LowComplianceScore => Some("Conduct a thorough pre-assessment review"),
            Self::MissingSections { .. } => {
                Some("Request complete documentation before proceeding")
            }
            Self::HistoryOfNonCompliance => {
                Some("Assign senior evaluator with experience in similar cases")
            }
            Self::RecentStaffTurnover => Some("Verify training records of new personnel"),
            Self::ComplexAccreditationScope => {
                Some("Consider splitting evaluation across multiple specialized evaluators")
            }
            Self::PreviousAccreditationIssues | Self::DelayedQueryResponses => None,
        }
    }
}

/// Result of one risk scoring run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// 0-100 after clamping.
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<RiskFactor>,
    pub mitigation_recommendations: Vec<String>,
}

/// Simulates scoring one document's accreditation risk.
///
/// # Contract
/// - `risk_score = clamp(100 - compliance_score + U[-10,10], 0, 100)`.
/// - Level thresholds: >=70 High Risk, >=40 Medium Risk, else Low Risk.
/// - Factors always include low-compliance below 75 and a missing-sections
///   note when the document lists any; 1/2/3 additional factors (by level)
///   are sampled without replacement.
pub fn score_document_risk<R: Rng + ?Sized>(
    document: &Document,
    rng: &mut R,
    delay: &dyn DelayHook,
) -> SimResult<RiskAssessment> {
    let started_at = Instant::now();
    run_delay_stage(delay, SimulatorKind::RiskScoring)?;

    let base_risk = i16::from(100 - document.compliance_score.min(100));
    let jitter = rng.gen_range(-SCORE_JITTER..=SCORE_JITTER);
    let risk_score = (base_risk + jitter).clamp(0, 100) as u8;
    let risk_level = level_for_score(risk_score);

    let mut risk_factors = Vec::new();
    if document.compliance_score < LOW_COMPLIANCE_THRESHOLD {
        risk_factors.push(RiskFactor::LowComplianceScore);
    }
    if !document.missing_sections.is_empty() {
        risk_factors.push(RiskFactor::MissingSections {
            count: document.missing_sections.len(),
        });
    }

    let additional_count = match risk_level {
        RiskLevel::Low => 1,
        RiskLevel::Medium => 2,
        RiskLevel::High => 3,
    };
    risk_factors.extend(
        ADDITIONAL_FACTORS
            .choose_multiple(rng, additional_count)
            .copied(),
    );

    let mitigation_recommendations = derive_mitigations(&risk_factors);

    info!(
        "event=simulate_risk module=sim status=ok document={} score={} level={} factors={} duration_ms={}",
        document.id,
        risk_score,
        risk_level.label(),
        risk_factors.len(),
        started_at.elapsed().as_millis()
    );

    Ok(RiskAssessment {
        risk_score,
        risk_level,
        risk_factors,
        mitigation_recommendations,
    })
}

fn level_for_score(risk_score: u8) -> RiskLevel {
    if risk_score >= HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else if risk_score >= MEDIUM_RISK_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Collects mitigation advice for every factor that carries one.
pub fn derive_mitigations(factors: &[RiskFactor]) -> Vec<String> {
    factors
        .iter()
        .filter_map(|factor| factor.mitigation())
        .map(str::to_string)
        .collect()
}
