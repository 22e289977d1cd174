//! FFI use-case API for the dashboard UI.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Resolve process-level configuration (data directory, simulator delay)
//!   exactly once.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Session results are replaced whole behind one mutex; the UI never
//!   observes a half-updated slot.

use chrono::Local;
use evalsim_core::query::{
    dashboard_summary, join_alert_organizations, pending_documents,
};
use evalsim_core::store::load_or_generate;
use evalsim_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, match_evaluators,
    ping as ping_inner, score_document_risk, validate_document, DataSet, Document, FixedDelay,
    GenerationPlan, JsonSnapshotStore, ResultStore, SimulationOutcome, SimulatorKind,
};
use log::warn;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};
use std::time::Duration;

const DATA_DIR_ENV: &str = "EVALSIM_DATA_DIR";
const DELAY_MS_ENV: &str = "EVALSIM_DELAY_MS";
const DATA_DIR_NAME: &str = "evalsim_data";

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();
static SIM_DELAY: OnceLock<Duration> = OnceLock::new();
static SESSION: OnceLock<Mutex<ResultStore>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may create the log directory.
/// - Idempotent for the same `level + log_dir`; conflicting reconfiguration
///   returns an error message.
/// - Never panics; returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One document row offered for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCard {
    pub document_id: String,
    pub title: String,
    pub standard: String,
    pub organization: String,
    pub submission_date: String,
    pub compliance_score: u8,
    pub status: String,
}

/// One alert row with its resolved organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertCard {
    pub alert_id: String,
    pub risk_type: String,
    pub description: String,
    pub document_id: String,
    /// "Unknown" when the referenced document is absent from the snapshot.
    pub organization: String,
    pub date: String,
    pub risk_level: String,
    pub risk_score: u8,
    pub status: String,
}

/// Dashboard KPI envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardResponse {
    pub ok: bool,
    pub message: String,
    pub total_documents: u32,
    pub available_evaluators: u32,
    pub total_evaluators: u32,
    pub average_compliance: f64,
    pub active_alert_count: u32,
    pub active_alerts: Vec<AlertCard>,
}

impl DashboardResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            total_documents: 0,
            available_evaluators: 0,
            total_evaluators: 0,
            average_compliance: 0.0,
            active_alert_count: 0,
            active_alerts: Vec::new(),
        }
    }
}

/// Computes the dashboard overview from the current snapshot.
///
/// # FFI contract
/// - Sync call; may generate and persist the snapshot on first use.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_overview() -> DashboardResponse {
    let data = match load_snapshot() {
        Ok(data) => data,
        Err(err) => return DashboardResponse::failure(format!("dashboard_overview failed: {err}")),
    };

    let summary = dashboard_summary(&data.documents, &data.evaluators, &data.alerts);
    let active_alerts: Vec<AlertCard> = join_alert_organizations(&data.alerts, &data.documents)
        .into_iter()
        .filter(|row| row.alert.is_active())
        .map(|row| AlertCard {
            alert_id: row.alert.id.clone(),
            risk_type: row.alert.kind.label().to_string(),
            description: row.alert.description.clone(),
            document_id: row.alert.document_id.clone(),
            organization: row.organization.unwrap_or("Unknown").to_string(),
            date: row.alert.date.to_string(),
            risk_level: row.alert.risk_level.label().to_string(),
            risk_score: row.alert.risk_score,
            status: row.alert.status.label().to_string(),
        })
        .collect();

    DashboardResponse {
        ok: true,
        message: "Dashboard ready.".to_string(),
        total_documents: summary.total_documents as u32,
        available_evaluators: summary.available_evaluators as u32,
        total_evaluators: summary.total_evaluators as u32,
        average_compliance: summary.average_compliance,
        active_alert_count: summary.active_alerts as u32,
        active_alerts,
    }
}

/// Pending-document selection envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDocumentsResponse {
    pub ok: bool,
    /// Neutral informational text when the pool is empty.
    pub message: String,
    pub items: Vec<DocumentCard>,
}

/// Lists documents waiting for an evaluator.
///
/// # FFI contract
/// - Sync call; an empty pool is a neutral state, not an error.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn list_pending_documents() -> PendingDocumentsResponse {
    let data = match load_snapshot() {
        Ok(data) => data,
        Err(err) => {
            return PendingDocumentsResponse {
                ok: false,
                message: format!("list_pending_documents failed: {err}"),
                items: Vec::new(),
            }
        }
    };

    let items: Vec<DocumentCard> = pending_documents(&data.documents)
        .into_iter()
        .map(document_card)
        .collect();
    let message = if items.is_empty() {
        "No pending documents available for evaluator assignment.".to_string()
    } else {
        format!("{} pending document(s).", items.len())
    };

    PendingDocumentsResponse {
        ok: true,
        message,
        items,
    }
}

/// Validation result envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResponse {
    pub ok: bool,
    pub message: String,
    pub compliance_score: u8,
    pub status: String,
    pub missing_sections: Vec<String>,
    pub compliance_issues: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ValidationResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            compliance_score: 0,
            status: String::new(),
            missing_sections: Vec::new(),
            compliance_issues: Vec::new(),
            recommendations: Vec::new(),
        }
    }
}

/// Runs the document validation simulator against one document.
///
/// # FFI contract
/// - Sync call; blocks for the configured simulator delay.
/// - Records the result in the session store, replacing the previous
///   validation slot.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn run_document_validation(document_id: String) -> ValidationResponse {
    let data = match load_snapshot() {
        Ok(data) => data,
        Err(err) => {
            return ValidationResponse::failure(format!("run_document_validation failed: {err}"))
        }
    };
    let Some(document) = find_document(&data, &document_id) else {
        return ValidationResponse::failure(format!("document not found: {document_id}"));
    };

    let delay = resolve_delay();
    let report = match validate_document(document, &mut rand::thread_rng(), &delay) {
        Ok(report) => report,
        Err(err) => {
            return ValidationResponse::failure(format!("run_document_validation failed: {err}"))
        }
    };

    session()
        .record(&document.id, SimulationOutcome::Validation(report.clone()));

    ValidationResponse {
        ok: true,
        message: "Validation complete.".to_string(),
        compliance_score: report.compliance_score,
        status: report.status.label().to_string(),
        missing_sections: report
            .missing_sections
            .iter()
            .map(|s| s.label().to_string())
            .collect(),
        compliance_issues: report
            .compliance_issues
            .iter()
            .map(|i| i.label().to_string())
            .collect(),
        recommendations: report.recommendations,
    }
}

/// One ranked candidate row.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCard {
    pub evaluator_id: String,
    pub evaluator_name: String,
    pub region: String,
    pub availability: String,
    pub performance_rating: f64,
    pub match_score: u8,
    pub conflict_of_interest: bool,
    /// False when a conflict blocks assignment; the UI shows
    /// "Cannot Assign" instead of hiding the row.
    pub can_assign: bool,
    pub match_reasons: Vec<String>,
}

/// Matching result envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingResponse {
    pub ok: bool,
    pub message: String,
    pub matches: Vec<MatchCard>,
}

impl MatchingResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            matches: Vec::new(),
        }
    }
}

/// Runs the evaluator matching simulator against one document.
///
/// # FFI contract
/// - Sync call; blocks for the configured simulator delay.
/// - Ranked rows keep conflicted candidates; callers render them as
///   non-assignable.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn run_evaluator_matching(document_id: String) -> MatchingResponse {
    let data = match load_snapshot() {
        Ok(data) => data,
        Err(err) => {
            return MatchingResponse::failure(format!("run_evaluator_matching failed: {err}"))
        }
    };
    let Some(document) = find_document(&data, &document_id) else {
        return MatchingResponse::failure(format!("document not found: {document_id}"));
    };

    let delay = resolve_delay();
    let matches =
        match match_evaluators(document, &data.evaluators, &mut rand::thread_rng(), &delay) {
            Ok(matches) => matches,
            Err(err) => {
                return MatchingResponse::failure(format!("run_evaluator_matching failed: {err}"))
            }
        };

    session().record(&document.id, SimulationOutcome::Matching(matches.clone()));

    let message = if matches.is_empty() {
        "No evaluators on the roster.".to_string()
    } else {
        format!("Found {} candidate(s).", matches.len())
    };

    MatchingResponse {
        ok: true,
        message,
        matches: matches
            .into_iter()
            .map(|entry| MatchCard {
                evaluator_id: entry.evaluator.id.clone(),
                evaluator_name: entry.evaluator.name.clone(),
                region: entry.evaluator.region.label().to_string(),
                availability: entry.evaluator.availability.label().to_string(),
                performance_rating: entry.evaluator.performance_rating,
                match_score: entry.match_score,
                conflict_of_interest: entry.conflict_of_interest,
                can_assign: !entry.conflict_of_interest,
                match_reasons: entry.match_reasons,
            })
            .collect(),
    }
}

/// Risk assessment envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskResponse {
    pub ok: bool,
    pub message: String,
    pub risk_score: u8,
    pub risk_level: String,
    pub risk_factors: Vec<String>,
    pub mitigation_recommendations: Vec<String>,
}

impl RiskResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            risk_score: 0,
            risk_level: String::new(),
            risk_factors: Vec::new(),
            mitigation_recommendations: Vec::new(),
        }
    }
}

/// Runs the risk scoring simulator against one document.
///
/// # FFI contract
/// - Sync call; blocks for the configured simulator delay.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn run_risk_scoring(document_id: String) -> RiskResponse {
    let data = match load_snapshot() {
        Ok(data) => data,
        Err(err) => return RiskResponse::failure(format!("run_risk_scoring failed: {err}")),
    };
    let Some(document) = find_document(&data, &document_id) else {
        return RiskResponse::failure(format!("document not found: {document_id}"));
    };

    let delay = resolve_delay();
    let assessment = match score_document_risk(document, &mut rand::thread_rng(), &delay) {
        Ok(assessment) => assessment,
        Err(err) => return RiskResponse::failure(format!("run_risk_scoring failed: {err}")),
    };

    session().record(
        &document.id,
        SimulationOutcome::RiskScoring(assessment.clone()),
    );

    RiskResponse {
        ok: true,
        message: "Risk assessment complete.".to_string(),
        risk_score: assessment.risk_score,
        risk_level: assessment.risk_level.label().to_string(),
        risk_factors: assessment
            .risk_factors
            .iter()
            .map(|f| f.describe())
            .collect(),
        mitigation_recommendations: assessment.mitigation_recommendations,
    }
}

/// One recorded session slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEntry {
    pub simulator: String,
    pub document_id: String,
    pub entry_id: String,
}

/// Session overview envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOverviewResponse {
    pub ok: bool,
    pub message: String,
    pub entries: Vec<SessionEntry>,
}

/// Lists which simulators hold a recorded result for this session.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn session_overview() -> SessionOverviewResponse {
    let store = session();
    let entries: Vec<SessionEntry> = SimulatorKind::ALL
        .iter()
        .filter_map(|kind| store.get(*kind))
        .map(|slot| SessionEntry {
            simulator: slot.outcome.kind().label().to_string(),
            document_id: slot.document_id.clone(),
            entry_id: slot.entry_id.to_string(),
        })
        .collect();

    let message = if entries.is_empty() {
        "No simulations recorded.".to_string()
    } else {
        format!("{} simulation(s) recorded.", entries.len())
    };

    SessionOverviewResponse {
        ok: true,
        message,
        entries,
    }
}

fn document_card(document: &Document) -> DocumentCard {
    DocumentCard {
        document_id: document.id.clone(),
        title: document.title.clone(),
        standard: document.kind.label().to_string(),
        organization: document.organization.clone(),
        submission_date: document.submission_date.to_string(),
        compliance_score: document.compliance_score,
        status: document.status.label().to_string(),
    }
}

fn find_document<'a>(data: &'a DataSet, document_id: &str) -> Option<&'a Document> {
    let trimmed = document_id.trim();
    let found = data.documents.iter().find(|d| d.id == trimmed);
    if found.is_none() {
        warn!("event=document_lookup module=ffi status=miss document={trimmed}");
    }
    found
}

fn load_snapshot() -> Result<DataSet, String> {
    let store = JsonSnapshotStore::new(resolve_data_dir());
    let today = Local::now().date_naive();
    load_or_generate(
        &store,
        GenerationPlan::default(),
        today,
        &mut rand::thread_rng(),
    )
    .map_err(|err| {
        warn!("event=snapshot_access module=ffi status=error error={err}");
        err.to_string()
    })
}

fn resolve_data_dir() -> PathBuf {
    DATA_DIR
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DATA_DIR_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DATA_DIR_NAME)
        })
        .clone()
}

fn resolve_delay() -> FixedDelay {
    let pause_for = SIM_DELAY.get_or_init(|| {
        std::env::var(DELAY_MS_ENV)
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(evalsim_core::sim::delay::STANDARD_PAUSE)
    });
    FixedDelay::new(*pause_for)
}

fn session() -> MutexGuard<'static, ResultStore> {
    SESSION
        .get_or_init(|| Mutex::new(ResultStore::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
