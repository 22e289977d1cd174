//! JSON-file snapshot persistence.
//!
//! # Responsibility
//! - Read and write the three collection files under one data directory.
//! - Validate persisted records before handing them to callers.
//!
//! # Invariants
//! - Presence of all three files is the sole cache-hit signal.
//! - Loaded records must satisfy ID-format and score-band invariants;
//!   violations surface as `StoreError::InvalidData`.

use crate::model::alert::Alert;
use crate::model::document::Document;
use crate::model::evaluator::Evaluator;
use crate::store::{DataSet, SnapshotStore, StoreError, StoreResult};
use log::{error, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DOCUMENTS_FILE: &str = "documents.json";
pub const EVALUATORS_FILE: &str = "evaluators.json";
pub const ALERTS_FILE: &str = "alerts.json";

static DOCUMENT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^DOC-\d{3}$").expect("valid document id regex"));
static EVALUATOR_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^EVA-\d{3}$").expect("valid evaluator id regex"));
static ALERT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ALERT-\d{3}$").expect("valid alert id regex"));

/// Snapshot store backed by pretty-printed JSON files.
pub struct JsonSnapshotStore {
    data_dir: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn collection_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    fn read_collection<T: DeserializeOwned>(&self, file_name: &str) -> StoreResult<Vec<T>> {
        let path = self.collection_path(file_name);
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_collection<T: Serialize>(&self, file_name: &str, records: &[T]) -> StoreResult<()> {
        let path = self.collection_path(file_name);
        let raw = serde_json::to_string_pretty(records)?;
        fs::write(&path, raw)?;
        Ok(())
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load_existing(&self) -> StoreResult<Option<DataSet>> {
        // Three independent presence checks; any absence means the caller
        // regenerates everything, including files that do exist.
        let all_present = [DOCUMENTS_FILE, EVALUATORS_FILE, ALERTS_FILE]
            .iter()
            .all(|file| self.collection_path(file).is_file());
        if !all_present {
            info!(
                "event=snapshot_probe module=store status=miss dir={}",
                self.data_dir.display()
            );
            return Ok(None);
        }

        let documents: Vec<Document> = self.read_collection(DOCUMENTS_FILE)?;
        let evaluators: Vec<Evaluator> = self.read_collection(EVALUATORS_FILE)?;
        let alerts: Vec<Alert> = self.read_collection(ALERTS_FILE)?;

        let data = DataSet {
            documents,
            evaluators,
            alerts,
        };
        if let Err(err) = validate_dataset(&data) {
            error!(
                "event=snapshot_probe module=store status=error error_code=snapshot_invalid error={err}"
            );
            return Err(err);
        }

        Ok(Some(data))
    }

    fn persist(&self, data: &DataSet) -> StoreResult<()> {
        fs::create_dir_all(&self.data_dir)?;
        self.write_collection(DOCUMENTS_FILE, &data.documents)?;
        self.write_collection(EVALUATORS_FILE, &data.evaluators)?;
        self.write_collection(ALERTS_FILE, &data.alerts)?;
        info!(
            "event=snapshot_persist module=store status=ok dir={}",
            self.data_dir.display()
        );
        Ok(())
    }
}

fn validate_dataset(data: &DataSet) -> StoreResult<()> {
    for document in &data.documents {
        if !DOCUMENT_ID_RE.is_match(&document.id) {
            return Err(invalid(format!(
                "malformed document id `{}`",
                document.id
            )));
        }
        if document.compliance_score > 100 {
            return Err(invalid(format!(
                "compliance score {} out of range for {}",
                document.compliance_score, document.id
            )));
        }
        if let Some(reference) = &document.assigned_evaluator {
            if !EVALUATOR_ID_RE.is_match(reference) {
                return Err(invalid(format!(
                    "malformed evaluator reference `{reference}` on {}",
                    document.id
                )));
            }
        }
    }

    for evaluator in &data.evaluators {
        if !EVALUATOR_ID_RE.is_match(&evaluator.id) {
            return Err(invalid(format!(
                "malformed evaluator id `{}`",
                evaluator.id
            )));
        }
        if !(3.0..=5.0).contains(&evaluator.performance_rating) {
            return Err(invalid(format!(
                "performance rating {} out of range for {}",
                evaluator.performance_rating, evaluator.id
            )));
        }
    }

    for alert in &data.alerts {
        if !ALERT_ID_RE.is_match(&alert.id) {
            return Err(invalid(format!("malformed alert id `{}`", alert.id)));
        }
        if !DOCUMENT_ID_RE.is_match(&alert.document_id) {
            return Err(invalid(format!(
                "malformed document reference `{}` on {}",
                alert.document_id, alert.id
            )));
        }
        if !alert.risk_level.contains_score(alert.risk_score) {
            return Err(invalid(format!(
                "risk score {} outside the {} band on {}",
                alert.risk_score,
                alert.risk_level.label(),
                alert.id
            )));
        }
    }

    Ok(())
}

fn invalid(message: String) -> StoreError {
    StoreError::InvalidData(message)
}
