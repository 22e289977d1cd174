use chrono::NaiveDate;
use evalsim_core::model::document::{Document, DocumentArabic, DocumentStatus, StandardKind};
use evalsim_core::model::evaluator::{
    Availability, Evaluator, EvaluatorArabic, Region, Specialty,
};
use evalsim_core::{match_evaluators, NoDelay};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn pending_document() -> Document {
    Document {
        id: "DOC-003".to_string(),
        title: "Accreditation Application 3".to_string(),
        kind: StandardKind::Iso15189,
        organization: "Organization 3".to_string(),
        submission_date: NaiveDate::from_ymd_opt(2025, 4, 2).expect("valid date"),
        compliance_score: 68,
        status: DocumentStatus::Pending,
        missing_sections: Vec::new(),
        assigned_evaluator: None,
        review_comments: String::new(),
        arabic: DocumentArabic {
            title: "طلب اعتماد 3".to_string(),
            organization: "مؤسسة 3".to_string(),
            status: DocumentStatus::Pending.arabic_label().to_string(),
        },
    }
}

fn evaluator(index: usize, availability: Availability, rating: f64) -> Evaluator {
    Evaluator {
        id: format!("EVA-{index:03}"),
        name: format!("Evaluator {index}"),
        arabic_name: format!("مقيّم {index}"),
        specialties: vec![Specialty::Calibration],
        region: Region::Riyadh,
        availability,
        experience: 7,
        evaluations_completed: 20,
        performance_rating: rating,
        arabic: EvaluatorArabic {
            specialties: vec![Specialty::Calibration.arabic_label().to_string()],
            region: Region::Riyadh.arabic_label().to_string(),
            availability: availability.arabic_label().to_string(),
        },
    }
}

#[test]
fn candidate_pool_is_the_available_subset() {
    let roster = vec![
        evaluator(1, Availability::Available, 3.5),
        evaluator(2, Availability::Busy, 3.5),
        evaluator(3, Availability::Available, 3.5),
        evaluator(4, Availability::OnLeave, 3.5),
    ];
    let mut rng = StdRng::seed_from_u64(5);

    let matches =
        match_evaluators(&pending_document(), &roster, &mut rng, &NoDelay).expect("matching runs");

    assert_eq!(matches.len(), 2);
    assert!(matches
        .iter()
        .all(|m| m.evaluator.availability == Availability::Available));
}

#[test]
fn falls_back_to_full_roster_when_nobody_is_available() {
    let roster = vec![
        evaluator(1, Availability::Busy, 3.5),
        evaluator(2, Availability::OnLeave, 3.5),
    ];
    let mut rng = StdRng::seed_from_u64(6);

    let matches =
        match_evaluators(&pending_document(), &roster, &mut rng, &NoDelay).expect("matching runs");
    assert_eq!(matches.len(), 2);
}

#[test]
fn empty_roster_yields_an_empty_result() {
    let mut rng = StdRng::seed_from_u64(7);
    let matches =
        match_evaluators(&pending_document(), &[], &mut rng, &NoDelay).expect("matching runs");
    assert!(matches.is_empty());
}

#[test]
fn scores_are_descending_clamped_and_ties_keep_roster_order() {
    let roster: Vec<Evaluator> = (1..=10)
        .map(|i| evaluator(i, Availability::Available, 3.5))
        .collect();

    for seed in 0..30 {
        let mut rng = StdRng::seed_from_u64(seed);
        let matches = match_evaluators(&pending_document(), &roster, &mut rng, &NoDelay)
            .expect("matching runs");
        assert_eq!(matches.len(), roster.len());

        for pair in matches.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
            if pair[0].match_score == pair[1].match_score {
                let first_pos = roster
                    .iter()
                    .position(|e| e.id == pair[0].evaluator.id)
                    .expect("evaluator from roster");
                let second_pos = roster
                    .iter()
                    .position(|e| e.id == pair[1].evaluator.id)
                    .expect("evaluator from roster");
                assert!(first_pos < second_pos, "equal scores must keep roster order");
            }
        }

        assert!(matches.iter().all(|m| m.match_score <= 100));
    }
}

#[test]
fn reasons_include_experience_always_and_rating_bonus_at_threshold() {
    let roster = vec![
        evaluator(1, Availability::Available, 4.8),
        evaluator(2, Availability::Available, 4.4),
    ];
    let mut rng = StdRng::seed_from_u64(9);

    let matches =
        match_evaluators(&pending_document(), &roster, &mut rng, &NoDelay).expect("matching runs");

    for entry in &matches {
        assert!(entry
            .match_reasons
            .iter()
            .any(|r| r == "7 years of experience"));
    }

    let high_rated = matches
        .iter()
        .find(|m| m.evaluator.id == "EVA-001")
        .expect("high-rated evaluator present");
    assert!(high_rated
        .match_reasons
        .iter()
        .any(|r| r == "High performance rating"));

    let mid_rated = matches
        .iter()
        .find(|m| m.evaluator.id == "EVA-002")
        .expect("mid-rated evaluator present");
    assert!(!mid_rated
        .match_reasons
        .iter()
        .any(|r| r == "High performance rating"));
}

#[test]
fn conflict_flag_varies_independently_of_ranking() {
    let roster = vec![evaluator(1, Availability::Available, 3.5)];
    let mut conflicts = 0;
    let trials = 200;

    for seed in 0..trials {
        let mut rng = StdRng::seed_from_u64(seed);
        let matches = match_evaluators(&pending_document(), &roster, &mut rng, &NoDelay)
            .expect("matching runs");
        if matches[0].conflict_of_interest {
            conflicts += 1;
        }
    }

    // Bernoulli(0.2): both outcomes must occur over 200 trials.
    assert!(conflicts > 0, "conflict flag never set across {trials} trials");
    assert!(
        conflicts < trials,
        "conflict flag always set across {trials} trials"
    );
}
