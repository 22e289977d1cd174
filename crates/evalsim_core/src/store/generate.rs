//! Synthetic snapshot generation.
//!
//! # Responsibility
//! - Produce the three entity collections from fixed catalogs and an
//!   injected random source.
//!
//! # Invariants
//! - Document status derives from the drawn compliance score; the sub-75
//!   band resolves to Pending or Rejected at random.
//! - Pending documents carry no evaluator reference and no review comment.
//! - Alert scores are drawn inside the band of the already-chosen level.

use crate::model::alert::{Alert, AlertArabic, AlertStatus, RiskLevel, RiskType};
use crate::model::document::{
    status_for_score, Document, DocumentArabic, DocumentStatus, SectionName, StandardKind,
};
use crate::model::evaluator::{
    Availability, Evaluator, EvaluatorArabic, Region, Specialty,
};
use crate::store::{DataSet, GenerationPlan};
use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

const DOCUMENT_HISTORY_DAYS: i64 = 180;
const ALERT_HISTORY_DAYS: i64 = 30;
const ALERT_ACTIVE_PROBABILITY: f64 = 0.7;

/// Generates one full snapshot in a single pass.
pub fn generate_dataset<R: Rng + ?Sized>(
    plan: GenerationPlan,
    today: NaiveDate,
    rng: &mut R,
) -> DataSet {
    let documents = generate_documents(plan.documents, plan.evaluators, today, rng);
    let evaluators = generate_evaluators(plan.evaluators, rng);
    let alerts = generate_alerts(plan.alerts, plan.documents, today, rng);
    DataSet {
        documents,
        evaluators,
        alerts,
    }
}

/// Generates `count` accreditation documents.
///
/// `evaluator_count` bounds the `EVA-NNN` references assigned to
/// non-pending documents.
pub fn generate_documents<R: Rng + ?Sized>(
    count: usize,
    evaluator_count: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<Document> {
    let mut documents = Vec::with_capacity(count);

    for i in 1..=count {
        let days_ago = rng.gen_range(0..=DOCUMENT_HISTORY_DAYS);
        let submission_date = today - Duration::days(days_ago);

        let compliance_score: u8 = rng.gen_range(60..=100);
        let status = status_for_score(compliance_score).unwrap_or_else(|| {
            if rng.gen_bool(0.5) {
                DocumentStatus::Pending
            } else {
                DocumentStatus::Rejected
            }
        });

        let missing_sections = if compliance_score < 90 {
            let num_missing = rng.gen_range(0..=3);
            sample_sections(num_missing, rng)
        } else {
            Vec::new()
        };

        let assigned_evaluator = if status == DocumentStatus::Pending {
            None
        } else {
            Some(format!("EVA-{:03}", rng.gen_range(1..=evaluator_count)))
        };
        let review_comments = if status == DocumentStatus::Pending {
            String::new()
        } else {
            format!("Review comments for document {i}")
        };

        documents.push(Document {
            id: format!("DOC-{i:03}"),
            title: format!("Accreditation Application {i}"),
            kind: pick(&StandardKind::ALL, rng),
            organization: format!("Organization {i}"),
            submission_date,
            compliance_score,
            status,
            missing_sections,
            assigned_evaluator,
            review_comments,
            arabic: DocumentArabic {
                title: format!("طلب اعتماد {i}"),
                organization: format!("مؤسسة {i}"),
                status: status.arabic_label().to_string(),
            },
        });
    }

    documents
}

/// Generates `count` roster evaluators.
pub fn generate_evaluators<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Evaluator> {
    let mut evaluators = Vec::with_capacity(count);

    for i in 1..=count {
        let availability = pick(&Availability::ALL, rng);
        let region = pick(&Region::ALL, rng);
        let experience: u8 = rng.gen_range(1..=15);
        let evaluations_completed: u32 = rng.gen_range(5..=50);
        let performance_rating = round_to_one_decimal(rng.gen_range(3.0..=5.0));

        let num_specialties = rng.gen_range(1..=3);
        let specialties: Vec<Specialty> = Specialty::ALL
            .choose_multiple(rng, num_specialties)
            .copied()
            .collect();

        let arabic = EvaluatorArabic {
            specialties: specialties
                .iter()
                .map(|s| s.arabic_label().to_string())
                .collect(),
            region: region.arabic_label().to_string(),
            availability: availability.arabic_label().to_string(),
        };

        evaluators.push(Evaluator {
            id: format!("EVA-{i:03}"),
            name: format!("Evaluator {i}"),
            arabic_name: format!("مقيّم {i}"),
            specialties,
            region,
            availability,
            experience,
            evaluations_completed,
            performance_rating,
            arabic,
        });
    }

    evaluators
}

/// Generates `count` risk alerts.
///
/// `document_count` bounds the `DOC-NNN` references; an alert can point at
/// a document id that was never generated.
pub fn generate_alerts<R: Rng + ?Sized>(
    count: usize,
    document_count: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<Alert> {
    let mut alerts = Vec::with_capacity(count);

    for i in 1..=count {
        let days_ago = rng.gen_range(0..=ALERT_HISTORY_DAYS);
        let date = today - Duration::days(days_ago);

        // Level first, then a score inside its band: the marginal score
        // distribution is a mixture, not uniform on 1-100.
        let risk_level = pick(&RiskLevel::ALL, rng);
        let (band_low, band_high) = risk_level.score_band();
        let risk_score: u8 = rng.gen_range(band_low..=band_high);

        let kind = pick(&RiskType::ALL, rng);
        let status = if rng.gen_bool(ALERT_ACTIVE_PROBABILITY) {
            AlertStatus::Active
        } else {
            AlertStatus::Resolved
        };

        alerts.push(Alert {
            id: format!("ALERT-{i:03}"),
            kind,
            description: format!("Risk alert {i} description"),
            document_id: format!("DOC-{:03}", rng.gen_range(1..=document_count)),
            date,
            risk_level,
            risk_score,
            status,
            arabic: AlertArabic {
                kind: kind.arabic_label().to_string(),
                description: format!("وصف تنبيه المخاطر {i}"),
                risk_level: risk_level.arabic_label().to_string(),
                status: status.arabic_label().to_string(),
            },
        });
    }

    alerts
}

fn pick<T: Copy, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> T {
    *items.choose(rng).expect("catalog is non-empty")
}

fn sample_sections<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<SectionName> {
    SectionName::ALL
        .choose_multiple(rng, count)
        .copied()
        .collect()
}

fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
