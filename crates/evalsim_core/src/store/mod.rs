//! Synthetic data store: snapshot persistence and regeneration policy.
//!
//! # Responsibility
//! - Define the snapshot persistence contract and its error taxonomy.
//! - Decide between loading a persisted snapshot and regenerating it.
//!
//! # Invariants
//! - A snapshot is served verbatim only when all three collection files are
//!   present; partial presence regenerates and overwrites everything.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::model::alert::Alert;
use crate::model::document::Document;
use crate::model::evaluator::Evaluator;
use chrono::NaiveDate;
use log::info;
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub mod generate;
pub mod snapshot;

pub use snapshot::JsonSnapshotStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error taxonomy for snapshot persistence.
///
/// A missing or partially present snapshot is not represented here: that
/// case is the regeneration path, not a failure.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure; propagated unmodified from the OS.
    Io(std::io::Error),
    /// Snapshot file exists but is not parseable JSON of the expected shape.
    Serde(serde_json::Error),
    /// Snapshot parsed but violates a model invariant.
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Serde(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted snapshot: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// In-memory triple of the three entity collections.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    pub documents: Vec<Document>,
    pub evaluators: Vec<Evaluator>,
    pub alerts: Vec<Alert>,
}

/// Collection sizes for one generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPlan {
    pub documents: usize,
    pub evaluators: usize,
    pub alerts: usize,
}

impl Default for GenerationPlan {
    fn default() -> Self {
        Self {
            documents: 15,
            evaluators: 10,
            alerts: 5,
        }
    }
}

/// Persistence contract for the snapshot files.
pub trait SnapshotStore {
    /// Returns the persisted snapshot, or `None` when any collection file
    /// is absent.
    fn load_existing(&self) -> StoreResult<Option<DataSet>>;

    /// Writes all three collection files, overwriting previous content.
    fn persist(&self, data: &DataSet) -> StoreResult<()>;
}

/// Serves the persisted snapshot when complete, else regenerates it.
///
/// # Contract
/// - A complete snapshot is returned verbatim; no regeneration happens.
/// - Any missing file triggers regeneration and persistence of all three
///   collections.
///
/// # Side effects
/// - May create the data directory and three files on first call.
/// - Emits `snapshot_load` / `snapshot_generate` logging events.
pub fn load_or_generate<S, R>(
    store: &S,
    plan: GenerationPlan,
    today: NaiveDate,
    rng: &mut R,
) -> StoreResult<DataSet>
where
    S: SnapshotStore,
    R: Rng + ?Sized,
{
    let started_at = Instant::now();

    if let Some(data) = store.load_existing()? {
        info!(
            "event=snapshot_load module=store status=ok source=disk duration_ms={} documents={} evaluators={} alerts={}",
            started_at.elapsed().as_millis(),
            data.documents.len(),
            data.evaluators.len(),
            data.alerts.len()
        );
        return Ok(data);
    }

    let data = generate::generate_dataset(plan, today, rng);
    store.persist(&data)?;
    info!(
        "event=snapshot_generate module=store status=ok duration_ms={} documents={} evaluators={} alerts={}",
        started_at.elapsed().as_millis(),
        data.documents.len(),
        data.evaluators.len(),
        data.alerts.len()
    );
    Ok(data)
}
