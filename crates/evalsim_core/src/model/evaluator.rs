//! Evaluator roster model.
//!
//! # Responsibility
//! - Define the evaluator record persisted in the snapshot.
//! - Define the specialty and region catalogs used by matching.
//!
//! # Invariants
//! - `specialties` holds 1-3 distinct entries.
//! - `performance_rating` stays in 3.0-5.0 with one decimal of precision.

use serde::{Deserialize, Serialize};

/// Accreditation specialty an evaluator can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Specialty {
    #[serde(rename = "Chemical Testing")]
    ChemicalTesting,
    #[serde(rename = "Medical Testing")]
    MedicalTesting,
    Calibration,
    Inspection,
    Certification,
}

impl Specialty {
    pub const ALL: [Self; 5] = [
        Self::ChemicalTesting,
        Self::MedicalTesting,
        Self::Calibration,
        Self::Inspection,
        Self::Certification,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ChemicalTesting => "Chemical Testing",
            Self::MedicalTesting => "Medical Testing",
            Self::Calibration => "Calibration",
            Self::Inspection => "Inspection",
            Self::Certification => "Certification",
        }
    }

    pub fn arabic_label(self) -> &'static str {
        match self {
            Self::ChemicalTesting => "الاختبارات الكيميائية",
            Self::MedicalTesting => "الاختبارات الطبية",
            Self::Calibration => "المعايرة",
            Self::Inspection => "التفتيش",
            Self::Certification => "الشهادات",
        }
    }

    /// Returns whether this specialty covers the given standard label.
    ///
    /// Matching compares against document standard labels, so the mapping is
    /// kept here next to the catalog it belongs to.
    pub fn covers_standard(self, standard_label: &str) -> bool {
        self.label() == standard_label
    }
}

/// Operating region of an evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Riyadh,
    Jeddah,
    Dammam,
    Makkah,
    Madinah,
    Abha,
    Tabuk,
}

impl Region {
    pub const ALL: [Self; 7] = [
        Self::Riyadh,
        Self::Jeddah,
        Self::Dammam,
        Self::Makkah,
        Self::Madinah,
        Self::Abha,
        Self::Tabuk,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Riyadh => "Riyadh",
            Self::Jeddah => "Jeddah",
            Self::Dammam => "Dammam",
            Self::Makkah => "Makkah",
            Self::Madinah => "Madinah",
            Self::Abha => "Abha",
            Self::Tabuk => "Tabuk",
        }
    }

    pub fn arabic_label(self) -> &'static str {
        match self {
            Self::Riyadh => "الرياض",
            Self::Jeddah => "جدة",
            Self::Dammam => "الدمام",
            Self::Makkah => "مكة",
            Self::Madinah => "المدينة",
            Self::Abha => "أبها",
            Self::Tabuk => "تبوك",
        }
    }
}

/// Whether an evaluator can take new assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Available,
    Busy,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl Availability {
    pub const ALL: [Self; 3] = [Self::Available, Self::Busy, Self::OnLeave];

    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Busy => "Busy",
            Self::OnLeave => "On Leave",
        }
    }

    pub fn arabic_label(self) -> &'static str {
        match self {
            Self::Available => "متاح",
            Self::Busy => "مشغول",
            Self::OnLeave => "في إجازة",
        }
    }
}

/// Arabic projection of the evaluator fields shown by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorArabic {
    pub specialties: Vec<String>,
    pub region: String,
    pub availability: String,
}

/// One roster entry in the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluator {
    /// Stable `EVA-NNN` identifier.
    pub id: String,
    pub name: String,
    pub arabic_name: String,
    /// 1-3 distinct specialties.
    pub specialties: Vec<Specialty>,
    pub region: Region,
    pub availability: Availability,
    /// Years of experience, 1-15.
    pub experience: u8,
    pub evaluations_completed: u32,
    /// 3.0-5.0, one decimal.
    pub performance_rating: f64,
    pub arabic: EvaluatorArabic,
}

impl Evaluator {
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}

#[cfg(test)]
mod tests {
    use super::{Availability, Specialty};

    #[test]
    fn specialty_covers_matching_standard_label() {
        assert!(Specialty::Calibration.covers_standard("Calibration"));
        assert!(!Specialty::Calibration.covers_standard("ISO 17025"));
    }

    #[test]
    fn on_leave_serializes_with_space() {
        let json = serde_json::to_string(&Availability::OnLeave).expect("serialize availability");
        assert_eq!(json, "\"On Leave\"");
    }
}
