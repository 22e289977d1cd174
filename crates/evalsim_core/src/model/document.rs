//! Accreditation document model.
//!
//! # Responsibility
//! - Define the document record persisted in the snapshot.
//! - Define the standard and dossier-section catalogs shared with the
//!   scoring simulators.
//!
//! # Invariants
//! - `status == Pending` implies `assigned_evaluator == None` and an empty
//!   review comment.
//! - `missing_sections` is non-empty only when `compliance_score < 90`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Accreditation standard a document applies under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StandardKind {
    #[serde(rename = "ISO 17025")]
    Iso17025,
    #[serde(rename = "ISO 15189")]
    Iso15189,
    #[serde(rename = "ISO 17020")]
    Iso17020,
    #[serde(rename = "ISO 17043")]
    Iso17043,
    #[serde(rename = "ISO 17065")]
    Iso17065,
}

impl StandardKind {
    pub const ALL: [Self; 5] = [
        Self::Iso17025,
        Self::Iso15189,
        Self::Iso17020,
        Self::Iso17043,
        Self::Iso17065,
    ];

    /// Canonical English label, identical to the snapshot wire value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Iso17025 => "ISO 17025",
            Self::Iso15189 => "ISO 15189",
            Self::Iso17020 => "ISO 17020",
            Self::Iso17043 => "ISO 17043",
            Self::Iso17065 => "ISO 17065",
        }
    }
}

/// Review lifecycle state of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    Approved,
    Pending,
    Rejected,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl DocumentStatus {
    pub const ALL: [Self; 5] = [
        Self::Approved,
        Self::Pending,
        Self::Rejected,
        Self::InProgress,
        Self::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Pending => "Pending",
            Self::Rejected => "Rejected",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    pub fn arabic_label(self) -> &'static str {
        match self {
            Self::Approved => "معتمد",
            Self::Pending => "قيد الانتظار",
            Self::Rejected => "مرفوض",
            Self::InProgress => "قيد التنفيذ",
            Self::Completed => "مكتمل",
        }
    }
}

/// Dossier section a submission can be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionName {
    #[serde(rename = "Quality Manual")]
    QualityManual,
    #[serde(rename = "Technical Records")]
    TechnicalRecords,
    #[serde(rename = "Personnel Records")]
    PersonnelRecords,
    #[serde(rename = "Equipment Calibration")]
    EquipmentCalibration,
    #[serde(rename = "Method Validation")]
    MethodValidation,
}

impl SectionName {
    pub const ALL: [Self; 5] = [
        Self::QualityManual,
        Self::TechnicalRecords,
        Self::PersonnelRecords,
        Self::EquipmentCalibration,
        Self::MethodValidation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::QualityManual => "Quality Manual",
            Self::TechnicalRecords => "Technical Records",
            Self::PersonnelRecords => "Personnel Records",
            Self::EquipmentCalibration => "Equipment Calibration",
            Self::MethodValidation => "Method Validation",
        }
    }
}

/// Arabic projection of the document fields shown by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentArabic {
    pub title: String,
    pub organization: String,
    pub status: String,
}

/// One accreditation application in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Stable `DOC-NNN` identifier.
    pub id: String,
    pub title: String,
    /// Serialized as `type` to match the snapshot schema.
    #[serde(rename = "type")]
    pub kind: StandardKind,
    pub organization: String,
    pub submission_date: NaiveDate,
    /// Integer 0-100 summarizing standards adherence.
    pub compliance_score: u8,
    pub status: DocumentStatus,
    pub missing_sections: Vec<SectionName>,
    /// `EVA-NNN` reference; `None` exactly when status is `Pending`.
    pub assigned_evaluator: Option<String>,
    /// Empty when status is `Pending`.
    pub review_comments: String,
    pub arabic: DocumentArabic,
}

impl Document {
    /// Returns whether this document is waiting for an evaluator.
    pub fn is_pending(&self) -> bool {
        self.status == DocumentStatus::Pending
    }
}

/// Maps a compliance score to the generation-time status rule.
///
/// Scores below 75 resolve to `None`: the generator picks Pending or
/// Rejected at random for that band.
pub fn status_for_score(compliance_score: u8) -> Option<DocumentStatus> {
    if compliance_score >= 90 {
        Some(DocumentStatus::Approved)
    } else if compliance_score >= 75 {
        Some(DocumentStatus::InProgress)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{status_for_score, DocumentStatus, SectionName, StandardKind};

    #[test]
    fn status_rule_matches_score_bands() {
        assert_eq!(status_for_score(90), Some(DocumentStatus::Approved));
        assert_eq!(status_for_score(89), Some(DocumentStatus::InProgress));
        assert_eq!(status_for_score(75), Some(DocumentStatus::InProgress));
        assert_eq!(status_for_score(74), None);
    }

    #[test]
    fn labels_match_wire_values() {
        let json = serde_json::to_string(&StandardKind::Iso17025).expect("serialize standard");
        assert_eq!(json, "\"ISO 17025\"");
        let json = serde_json::to_string(&DocumentStatus::InProgress).expect("serialize status");
        assert_eq!(json, "\"In Progress\"");
        assert_eq!(SectionName::QualityManual.label(), "Quality Manual");
    }
}
