//! Evaluator matching simulator.
//!
//! # Responsibility
//! - Rank candidate evaluators for one selected document.
//!
//! # Invariants
//! - Output is sorted descending by match score; equal scores keep roster
//!   order.
//! - Conflict-of-interest flags are drawn independently of every other
//!   field; conflicted candidates are never filtered out.

use crate::model::document::Document;
use crate::model::evaluator::Evaluator;
use crate::sim::{run_delay_stage, DelayHook, SimResult, SimulatorKind};
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;

const SPECIALTY_BONUS: u8 = 10;
const RATING_BONUS: u8 = 5;
const RATING_BONUS_THRESHOLD: f64 = 4.5;
const CONFLICT_PROBABILITY: f64 = 0.2;
const MAX_SCORE: u8 = 100;

/// One ranked candidate produced by a matching run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorMatch {
    pub evaluator: Evaluator,
    /// 0-100 after clamping.
    pub match_score: u8,
    /// Independent of the score; the caller renders "Cannot Assign" when
    /// set, even for the top match.
    pub conflict_of_interest: bool,
    pub match_reasons: Vec<String>,
}

/// Simulates ranking the roster against one document.
///
/// # Contract
/// - Candidate pool is the available subset of the roster; an empty pool
///   falls back to the full roster. An empty roster yields an empty list.
/// - Per candidate: base score ~U[50,100]; +10 with an expertise reason
///   when the document standard appears among the candidate's specialties;
///   always an experience reason; +5 with a rating reason at >=4.5; the
///   total is clamped to 100.
pub fn match_evaluators<R: Rng + ?Sized>(
    document: &Document,
    roster: &[Evaluator],
    rng: &mut R,
    delay: &dyn DelayHook,
) -> SimResult<Vec<EvaluatorMatch>> {
    let started_at = Instant::now();
    run_delay_stage(delay, SimulatorKind::EvaluatorMatching)?;

    let available: Vec<&Evaluator> = roster.iter().filter(|e| e.is_available()).collect();
    let pool: Vec<&Evaluator> = if available.is_empty() {
        // With nobody available the whole roster is considered instead of
        // failing.
        roster.iter().collect()
    } else {
        available
    };

    let standard_label = document.kind.label();
    let mut matches: Vec<EvaluatorMatch> = Vec::with_capacity(pool.len());

    for evaluator in pool {
        let mut match_score: u8 = rng.gen_range(50..=100);
        let conflict_of_interest = rng.gen_bool(CONFLICT_PROBABILITY);
        let mut match_reasons = Vec::new();

        if evaluator
            .specialties
            .iter()
            .any(|s| s.covers_standard(standard_label))
        {
            match_reasons.push(format!("Expertise in {standard_label}"));
            match_score += SPECIALTY_BONUS;
        }

        match_reasons.push(format!("{} years of experience", evaluator.experience));

        if evaluator.performance_rating >= RATING_BONUS_THRESHOLD {
            match_reasons.push("High performance rating".to_string());
            match_score += RATING_BONUS;
        }

        matches.push(EvaluatorMatch {
            evaluator: (*evaluator).clone(),
            match_score: match_score.min(MAX_SCORE),
            conflict_of_interest,
            match_reasons,
        });
    }

    // Stable sort keeps roster order for equal scores.
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    info!(
        "event=simulate_matching module=sim status=ok document={} candidates={} duration_ms={}",
        document.id,
        matches.len(),
        started_at.elapsed().as_millis()
    );

    Ok(matches)
}
