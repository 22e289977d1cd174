//! Dashboard aggregations and snapshot joins.
//!
//! # Responsibility
//! - KPI summary, per-catalog distributions, and the two cross-collection
//!   joins (alert -> organization, document -> assigned evaluator).
//!
//! # Invariants
//! - Distribution rows follow catalog order; zero-count rows are omitted.
//! - An alert whose document reference does not resolve joins to `None`.
//! - Assignment rows whose evaluator reference does not resolve are
//!   skipped.

use crate::model::alert::{Alert, RiskLevel};
use crate::model::document::{Document, DocumentStatus, StandardKind};
use crate::model::evaluator::Evaluator;
use chrono::NaiveDate;

/// KPI figures shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_documents: usize,
    pub available_evaluators: usize,
    pub total_evaluators: usize,
    /// Mean compliance score; 0.0 when there are no documents.
    pub average_compliance: f64,
    pub active_alerts: usize,
}

/// Computes the KPI summary for one snapshot.
pub fn dashboard_summary(
    documents: &[Document],
    evaluators: &[Evaluator],
    alerts: &[Alert],
) -> DashboardSummary {
    let total_documents = documents.len();
    let average_compliance = if total_documents == 0 {
        0.0
    } else {
        let total: u32 = documents
            .iter()
            .map(|d| u32::from(d.compliance_score))
            .sum();
        f64::from(total) / total_documents as f64
    };

    DashboardSummary {
        total_documents,
        available_evaluators: evaluators.iter().filter(|e| e.is_available()).count(),
        total_evaluators: evaluators.len(),
        average_compliance,
        active_alerts: alerts.iter().filter(|a| a.is_active()).count(),
    }
}

/// Mean compliance score per standard kind, in catalog order.
///
/// Standards with no documents are omitted.
pub fn compliance_by_standard(documents: &[Document]) -> Vec<(StandardKind, f64)> {
    StandardKind::ALL
        .iter()
        .filter_map(|kind| {
            let scores: Vec<u32> = documents
                .iter()
                .filter(|d| d.kind == *kind)
                .map(|d| u32::from(d.compliance_score))
                .collect();
            if scores.is_empty() {
                return None;
            }
            let mean = f64::from(scores.iter().sum::<u32>()) / scores.len() as f64;
            Some((*kind, mean))
        })
        .collect()
}

/// Document counts per status, in catalog order; zero counts omitted.
pub fn status_distribution(documents: &[Document]) -> Vec<(DocumentStatus, usize)> {
    DocumentStatus::ALL
        .iter()
        .filter_map(|status| {
            let count = documents.iter().filter(|d| d.status == *status).count();
            (count > 0).then_some((*status, count))
        })
        .collect()
}

/// Alert counts per risk level, in catalog order; zero counts omitted.
pub fn risk_distribution(alerts: &[Alert]) -> Vec<(RiskLevel, usize)> {
    RiskLevel::ALL
        .iter()
        .filter_map(|level| {
            let count = alerts.iter().filter(|a| a.risk_level == *level).count();
            (count > 0).then_some((*level, count))
        })
        .collect()
}

/// Selection pool for the matching page; may be empty, which the caller
/// renders as a neutral informational state.
pub fn pending_documents(documents: &[Document]) -> Vec<&Document> {
    documents.iter().filter(|d| d.is_pending()).collect()
}

pub fn active_alerts(alerts: &[Alert]) -> Vec<&Alert> {
    alerts.iter().filter(|a| a.is_active()).collect()
}

/// One alert joined against the document collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertJoinRow<'a> {
    pub alert: &'a Alert,
    /// `None` when the referenced document does not exist in the snapshot.
    pub organization: Option<&'a str>,
}

/// Joins each alert to the organization of its referenced document.
pub fn join_alert_organizations<'a>(
    alerts: &'a [Alert],
    documents: &'a [Document],
) -> Vec<AlertJoinRow<'a>> {
    alerts
        .iter()
        .map(|alert| {
            let organization = documents
                .iter()
                .find(|d| d.id == alert.document_id)
                .map(|d| d.organization.as_str());
            AlertJoinRow {
                alert,
                organization,
            }
        })
        .collect()
}

/// One assignment listing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRow<'a> {
    pub document_id: &'a str,
    pub document_title: &'a str,
    pub organization: &'a str,
    pub evaluator_id: &'a str,
    pub evaluator_name: &'a str,
    pub status: DocumentStatus,
    pub submission_date: NaiveDate,
}

/// Lists documents with a resolvable assigned evaluator.
///
/// Documents whose evaluator reference does not resolve are skipped, same
/// as documents with no assignment.
pub fn join_assignments<'a>(
    documents: &'a [Document],
    evaluators: &'a [Evaluator],
) -> Vec<AssignmentRow<'a>> {
    documents
        .iter()
        .filter_map(|document| {
            let reference = document.assigned_evaluator.as_deref()?;
            let evaluator = evaluators.iter().find(|e| e.id == reference)?;
            Some(AssignmentRow {
                document_id: &document.id,
                document_title: &document.title,
                organization: &document.organization,
                evaluator_id: &evaluator.id,
                evaluator_name: &evaluator.name,
                status: document.status,
                submission_date: document.submission_date,
            })
        })
        .collect()
}
