//! Risk alert model.
//!
//! # Responsibility
//! - Define the alert record persisted in the snapshot.
//! - Define the risk-level bands shared by generation and load validation.
//!
//! # Invariants
//! - `risk_score` lies inside the band of `risk_level`.
//! - `document_id` is a well-formed reference that may not resolve; joins
//!   treat a miss as absent data, never a fault.

use serde::{Deserialize, Serialize};

/// Category of a raised risk alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskType {
    #[serde(rename = "Document Incomplete")]
    DocumentIncomplete,
    #[serde(rename = "Conflict of Interest")]
    ConflictOfInterest,
    #[serde(rename = "Process Delay")]
    ProcessDelay,
    #[serde(rename = "Compliance Issue")]
    ComplianceIssue,
}

impl RiskType {
    pub const ALL: [Self; 4] = [
        Self::DocumentIncomplete,
        Self::ConflictOfInterest,
        Self::ProcessDelay,
        Self::ComplianceIssue,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::DocumentIncomplete => "Document Incomplete",
            Self::ConflictOfInterest => "Conflict of Interest",
            Self::ProcessDelay => "Process Delay",
            Self::ComplianceIssue => "Compliance Issue",
        }
    }

    pub fn arabic_label(self) -> &'static str {
        match self {
            Self::DocumentIncomplete => "وثيقة غير مكتملة",
            Self::ConflictOfInterest => "تضارب المصالح",
            Self::ProcessDelay => "تأخير في العملية",
            Self::ComplianceIssue => "مشكلة في الامتثال",
        }
    }
}

/// Risk severity level with its associated score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "High Risk")]
    High,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "Low Risk")]
    Low,
}

impl RiskLevel {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High Risk",
            Self::Medium => "Medium Risk",
            Self::Low => "Low Risk",
        }
    }

    pub fn arabic_label(self) -> &'static str {
        match self {
            Self::High => "مخاطر عالية",
            Self::Medium => "مخاطر متوسطة",
            Self::Low => "مخاطر منخفضة",
        }
    }

    /// Inclusive score band used when alerts are generated.
    pub fn score_band(self) -> (u8, u8) {
        match self {
            Self::High => (75, 100),
            Self::Medium => (40, 74),
            Self::Low => (1, 39),
        }
    }

    /// Returns whether a score lies inside this level's band.
    pub fn contains_score(self, score: u8) -> bool {
        let (low, high) = self.score_band();
        (low..=high).contains(&score)
    }
}

/// Whether an alert still requires attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    Active,
    Resolved,
}

impl AlertStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Resolved => "Resolved",
        }
    }

    pub fn arabic_label(self) -> &'static str {
        match self {
            Self::Active => "نشط",
            Self::Resolved => "تم الحل",
        }
    }
}

/// Arabic projection of the alert fields shown by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertArabic {
    /// Serialized as `type` to match the snapshot schema.
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub risk_level: String,
    pub status: String,
}

/// One risk alert in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Stable `ALERT-NNN` identifier.
    pub id: String,
    /// Serialized as `type` to match the snapshot schema.
    #[serde(rename = "type")]
    pub kind: RiskType,
    pub description: String,
    /// `DOC-NNN` reference; not guaranteed to resolve against the snapshot.
    pub document_id: String,
    pub date: chrono::NaiveDate,
    pub risk_level: RiskLevel,
    /// Constrained to `risk_level.score_band()`.
    pub risk_score: u8,
    pub status: AlertStatus,
    pub arabic: AlertArabic,
}

impl Alert {
    pub fn is_active(&self) -> bool {
        self.status == AlertStatus::Active
    }
}
