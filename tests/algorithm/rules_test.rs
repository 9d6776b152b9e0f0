//! Tests for the care gap rules and per-patient assessment

use care_gaps::algorithm::care_gaps::rules::{
    evaluate_patient, needs_annual_visit, needs_colonoscopy, needs_mammogram,
};
use care_gaps::algorithm::care_gaps::{assess_patient, identify_care_gaps};
use care_gaps::CareDataset;
use care_gaps::models::{GapType, PriorityTier, ScreeningRecord, VisitRecord};
use chrono::Days;

use crate::utils::{
    analysis_config, date, labels, patient, patient_record, screening_all_due,
    single_patient_dataset, today,
};

#[test]
fn test_male_55_with_overdue_colonoscopy() {
    let patient = patient("P001", Some(55), "M");
    let screening = ScreeningRecord::new("P001")
        .with_mammogram_due(Some(date(2026, 1, 1)))
        .with_colonoscopy_due(Some(date(2024, 1, 1)))
        .with_flu_shot_due(Some(date(2025, 10, 1)));
    let dataset = single_patient_dataset(&patient, Some(screening), &[date(2024, 12, 1)]);

    let finding = assess_patient(&dataset.patients()[0], &dataset, &analysis_config())
        .expect("patient has a gap");

    assert_eq!(labels(&finding), vec!["Colonoscopy overdue"]);
    assert_eq!(finding.score, 2);
    assert_eq!(finding.priority, PriorityTier::Medium);
}

#[test]
fn test_female_70_with_nothing_recorded() {
    let patient = patient("P002", Some(70), "F");
    let dataset = single_patient_dataset(&patient, None, &[]);

    let finding = assess_patient(&dataset.patients()[0], &dataset, &analysis_config())
        .expect("patient has gaps");

    assert_eq!(
        labels(&finding),
        vec![
            "Mammogram overdue",
            "Colonoscopy overdue",
            "Annual visit overdue",
            "Flu shot needed"
        ]
    );
    assert_eq!(finding.score, 11);
    assert_eq!(finding.priority, PriorityTier::High);
}

#[test]
fn test_up_to_date_patient_has_no_finding() {
    let patient = patient("P003", Some(45), "F");
    let screening = screening_all_due("P003", Some(date(2025, 6, 1)));
    let dataset = single_patient_dataset(&patient, Some(screening), &[date(2024, 9, 1)]);

    assert!(assess_patient(&dataset.patients()[0], &dataset, &analysis_config()).is_none());
    assert!(identify_care_gaps(&dataset, &analysis_config()).is_empty());
}

#[test]
fn test_annual_visit_boundary() {
    let today = today();
    let exactly_a_year = today.checked_sub_days(Days::new(365)).unwrap();
    let just_over = today.checked_sub_days(Days::new(366)).unwrap();

    assert!(!needs_annual_visit(&[Some(exactly_a_year)], today));
    assert!(needs_annual_visit(&[Some(just_over)], today));
    assert!(needs_annual_visit(&[], today));
    assert!(needs_annual_visit(&[None, None], today));
    // The most recent dated visit counts
    assert!(!needs_annual_visit(&[Some(just_over), None, Some(exactly_a_year)], today));
}

#[test]
fn test_due_today_is_not_overdue() {
    let patient = patient("P004", Some(60), "F");
    let screening = screening_all_due("P004", Some(today()));

    let gaps = evaluate_patient(&patient, Some(&screening), &[Some(today())], today());
    assert!(gaps.is_empty());

    let yesterday = today().pred_opt().unwrap();
    let screening = screening_all_due("P004", Some(yesterday));
    let gaps = evaluate_patient(&patient, Some(&screening), &[Some(today())], today());
    assert_eq!(
        gaps.as_slice(),
        &[
            GapType::MammogramOverdue,
            GapType::ColonoscopyOverdue,
            GapType::FluShotNeeded
        ]
    );
}

#[test]
fn test_age_thresholds_are_inclusive() {
    let today = today();
    let overdue = screening_all_due("X", None);

    assert!(!needs_mammogram(&patient("A", Some(39), "F"), Some(&overdue), today));
    assert!(needs_mammogram(&patient("B", Some(40), "F"), Some(&overdue), today));
    assert!(!needs_mammogram(&patient("C", Some(40), "M"), Some(&overdue), today));

    assert!(!needs_colonoscopy(&patient("D", Some(49), "M"), Some(&overdue), today));
    assert!(needs_colonoscopy(&patient("E", Some(50), "M"), Some(&overdue), today));
    assert!(needs_colonoscopy(&patient("F", Some(50), "F"), Some(&overdue), today));
}

#[test]
fn test_unknown_age_and_sex_skip_gated_rules() {
    let unknown_age = patient("P005", None, "F");
    let gaps = evaluate_patient(&unknown_age, None, &[], today());
    assert_eq!(
        gaps.as_slice(),
        &[GapType::AnnualVisitOverdue, GapType::FluShotNeeded]
    );

    // Lowercase codes canonicalize, unknown codes never match female
    assert!(needs_mammogram(&patient("P006", Some(50), "f"), None, today()));
    assert!(!needs_mammogram(&patient("P007", Some(50), "X"), None, today()));
}

#[test]
fn test_findings_follow_roster_order() {
    let records = vec![
        patient_record(Some("P010"), Some(30), Some("M")),
        patient_record(Some("P011"), Some(30), Some("M")),
        patient_record(Some("P012"), Some(30), Some("M")),
    ];
    let screenings = vec![screening_all_due("P011", Some(date(2026, 1, 1)))];
    let visits = vec![VisitRecord::new("P011", Some(date(2024, 12, 24)))];
    let dataset = CareDataset::new(records, screenings, visits);

    let findings = identify_care_gaps(&dataset, &analysis_config());
    let ids: Vec<&str> = findings.iter().map(|f| f.patient_id.as_str()).collect();
    assert_eq!(ids, vec!["P010", "P012"]);
}
