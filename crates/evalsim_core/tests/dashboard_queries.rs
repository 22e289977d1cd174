use chrono::NaiveDate;
use evalsim_core::model::alert::{Alert, AlertArabic, AlertStatus, RiskLevel, RiskType};
use evalsim_core::model::document::{Document, DocumentArabic, DocumentStatus, StandardKind};
use evalsim_core::model::evaluator::{
    Availability, Evaluator, EvaluatorArabic, Region, Specialty,
};
use evalsim_core::query::{
    active_alerts, compliance_by_standard, dashboard_summary, join_alert_organizations,
    join_assignments, pending_documents, risk_distribution, status_distribution,
};

fn document(
    index: usize,
    kind: StandardKind,
    compliance_score: u8,
    status: DocumentStatus,
    assigned_evaluator: Option<&str>,
) -> Document {
    Document {
        id: format!("DOC-{index:03}"),
        title: format!("Accreditation Application {index}"),
        kind,
        organization: format!("Organization {index}"),
        submission_date: NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date"),
        compliance_score,
        status,
        missing_sections: Vec::new(),
        assigned_evaluator: assigned_evaluator.map(str::to_string),
        review_comments: String::new(),
        arabic: DocumentArabic {
            title: format!("طلب اعتماد {index}"),
            organization: format!("مؤسسة {index}"),
            status: status.arabic_label().to_string(),
        },
    }
}

fn evaluator(index: usize, availability: Availability) -> Evaluator {
    Evaluator {
        id: format!("EVA-{index:03}"),
        name: format!("Evaluator {index}"),
        arabic_name: format!("مقيّم {index}"),
        specialties: vec![Specialty::Inspection],
        region: Region::Jeddah,
        availability,
        experience: 5,
        evaluations_completed: 12,
        performance_rating: 4.0,
        arabic: EvaluatorArabic {
            specialties: vec![Specialty::Inspection.arabic_label().to_string()],
            region: Region::Jeddah.arabic_label().to_string(),
            availability: availability.arabic_label().to_string(),
        },
    }
}

fn alert(index: usize, document_id: &str, level: RiskLevel, status: AlertStatus) -> Alert {
    let (band_low, _) = level.score_band();
    Alert {
        id: format!("ALERT-{index:03}"),
        kind: RiskType::ProcessDelay,
        description: format!("Risk alert {index} description"),
        document_id: document_id.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 5, 20).expect("valid date"),
        risk_level: level,
        risk_score: band_low,
        status,
        arabic: AlertArabic {
            kind: RiskType::ProcessDelay.arabic_label().to_string(),
            description: format!("وصف تنبيه المخاطر {index}"),
            risk_level: level.arabic_label().to_string(),
            status: status.arabic_label().to_string(),
        },
    }
}

#[test]
fn summary_counts_and_average_are_computed_over_the_snapshot() {
    let documents = vec![
        document(1, StandardKind::Iso17025, 80, DocumentStatus::InProgress, Some("EVA-001")),
        document(2, StandardKind::Iso15189, 90, DocumentStatus::Approved, Some("EVA-002")),
    ];
    let evaluators = vec![
        evaluator(1, Availability::Available),
        evaluator(2, Availability::Busy),
    ];
    let alerts = vec![
        alert(1, "DOC-001", RiskLevel::High, AlertStatus::Active),
        alert(2, "DOC-002", RiskLevel::Low, AlertStatus::Resolved),
    ];

    let summary = dashboard_summary(&documents, &evaluators, &alerts);
    assert_eq!(summary.total_documents, 2);
    assert_eq!(summary.available_evaluators, 1);
    assert_eq!(summary.total_evaluators, 2);
    assert!((summary.average_compliance - 85.0).abs() < 1e-9);
    assert_eq!(summary.active_alerts, 1);
}

#[test]
fn summary_average_is_zero_for_an_empty_snapshot() {
    let summary = dashboard_summary(&[], &[], &[]);
    assert_eq!(summary.total_documents, 0);
    assert_eq!(summary.average_compliance, 0.0);
}

#[test]
fn compliance_average_groups_by_standard_in_catalog_order() {
    let documents = vec![
        document(1, StandardKind::Iso15189, 70, DocumentStatus::InProgress, Some("EVA-001")),
        document(2, StandardKind::Iso17025, 80, DocumentStatus::InProgress, Some("EVA-001")),
        document(3, StandardKind::Iso17025, 90, DocumentStatus::Approved, Some("EVA-001")),
    ];

    let rows = compliance_by_standard(&documents);
    assert_eq!(rows.len(), 2);
    // Catalog order puts ISO 17025 first.
    assert_eq!(rows[0].0, StandardKind::Iso17025);
    assert!((rows[0].1 - 85.0).abs() < 1e-9);
    assert_eq!(rows[1].0, StandardKind::Iso15189);
    assert!((rows[1].1 - 70.0).abs() < 1e-9);
}

#[test]
fn distributions_omit_zero_count_rows() {
    let documents = vec![
        document(1, StandardKind::Iso17020, 95, DocumentStatus::Approved, Some("EVA-001")),
        document(2, StandardKind::Iso17020, 60, DocumentStatus::Pending, None),
        document(3, StandardKind::Iso17020, 61, DocumentStatus::Pending, None),
    ];
    let statuses = status_distribution(&documents);
    assert_eq!(
        statuses,
        vec![(DocumentStatus::Approved, 1), (DocumentStatus::Pending, 2)]
    );

    let alerts = vec![
        alert(1, "DOC-001", RiskLevel::Medium, AlertStatus::Active),
        alert(2, "DOC-001", RiskLevel::Medium, AlertStatus::Active),
    ];
    assert_eq!(risk_distribution(&alerts), vec![(RiskLevel::Medium, 2)]);
}

#[test]
fn pending_pool_contains_only_pending_documents() {
    let documents = vec![
        document(1, StandardKind::Iso17043, 62, DocumentStatus::Pending, None),
        document(2, StandardKind::Iso17043, 88, DocumentStatus::InProgress, Some("EVA-001")),
    ];
    let pending = pending_documents(&documents);
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, "DOC-001");

    assert!(pending_documents(&[]).is_empty());
}

#[test]
fn alert_join_reports_unresolved_documents_as_absent() {
    let documents = vec![document(
        1,
        StandardKind::Iso17065,
        75,
        DocumentStatus::InProgress,
        Some("EVA-001"),
    )];
    let alerts = vec![
        alert(1, "DOC-001", RiskLevel::High, AlertStatus::Active),
        alert(2, "DOC-999", RiskLevel::Low, AlertStatus::Active),
    ];

    let rows = join_alert_organizations(&alerts, &documents);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].organization, Some("Organization 1"));
    assert_eq!(rows[1].organization, None);
}

#[test]
fn active_alert_filter_drops_resolved_entries() {
    let alerts = vec![
        alert(1, "DOC-001", RiskLevel::High, AlertStatus::Active),
        alert(2, "DOC-001", RiskLevel::Low, AlertStatus::Resolved),
    ];
    let active = active_alerts(&alerts);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, "ALERT-001");
}

#[test]
fn assignment_join_skips_unresolvable_evaluator_references() {
    let documents = vec![
        document(1, StandardKind::Iso17025, 85, DocumentStatus::InProgress, Some("EVA-001")),
        document(2, StandardKind::Iso17025, 86, DocumentStatus::InProgress, Some("EVA-404")),
        document(3, StandardKind::Iso17025, 60, DocumentStatus::Pending, None),
    ];
    let evaluators = vec![evaluator(1, Availability::Available)];

    let rows = join_assignments(&documents, &evaluators);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].document_id, "DOC-001");
    assert_eq!(rows[0].evaluator_name, "Evaluator 1");
}
