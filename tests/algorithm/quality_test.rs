//! Tests for roster quality validation

use care_gaps::algorithm::quality::{QualityIssueKind, validate_patients};
use care_gaps::models::Sex;

use crate::utils::patient_record;

#[test]
fn test_clean_roster_has_no_issues() {
    let records = vec![
        patient_record(Some("P1"), Some(0), Some("F")),
        patient_record(Some("P2"), Some(120), Some("m")),
    ];
    assert!(validate_patients(&records).is_empty());
}

#[test]
fn test_defects_are_counted() {
    let mut missing_contact = patient_record(Some("P5"), Some(50), Some("F"));
    missing_contact.phone = None;
    missing_contact.email = Some("not-an-email".to_string());

    let records = vec![
        patient_record(None, Some(30), Some("F")),
        patient_record(Some("P2"), Some(-1), Some("M")),
        patient_record(Some("P3"), Some(121), Some("X")),
        patient_record(Some("P4"), None, None),
        missing_contact,
    ];
    let issues = validate_patients(&records);

    let count = |kind| {
        issues
            .iter()
            .find(|issue| issue.kind == kind)
            .map_or(0, |issue| issue.count)
    };
    assert_eq!(count(QualityIssueKind::MissingPatientId), 1);
    assert_eq!(count(QualityIssueKind::InvalidAge), 2);
    assert_eq!(count(QualityIssueKind::InvalidSex), 2);
    assert_eq!(count(QualityIssueKind::MissingPhone), 1);
    assert_eq!(count(QualityIssueKind::MissingEmail), 0);
    assert_eq!(count(QualityIssueKind::MalformedEmail), 1);

    let kinds: Vec<QualityIssueKind> = issues.iter().map(|issue| issue.kind).collect();
    assert_eq!(
        kinds,
        vec![
            QualityIssueKind::MissingPatientId,
            QualityIssueKind::InvalidAge,
            QualityIssueKind::InvalidSex,
            QualityIssueKind::MissingPhone,
            QualityIssueKind::MalformedEmail,
        ]
    );
}

#[test]
fn test_issue_messages() {
    let records = vec![patient_record(Some("P1"), Some(130), Some("M"))];
    let issues = validate_patients(&records);

    assert_eq!(
        issues[0].to_string(),
        "1 patients have invalid ages (outside 0-120)"
    );
    assert_eq!(Sex::from_code(" f "), Some(Sex::Female));
}
