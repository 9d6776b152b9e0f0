//! Tests for gap and priority aggregation

use care_gaps::algorithm::care_gaps::aggregate;
use care_gaps::models::{GapFinding, GapList, GapType, PriorityTier};

use crate::utils::patient;

fn finding(id: &str, gaps: &[GapType], priority: PriorityTier) -> GapFinding {
    GapFinding::new(
        &patient(id, Some(50), "M"),
        gaps.iter().copied().collect::<GapList>(),
        2,
        priority,
    )
}

#[test]
fn test_empty_findings() {
    let summary = aggregate(&[], 12);

    assert_eq!(summary.total_patients, 12);
    assert_eq!(summary.patients_with_gaps, 0);
    assert!(summary.gap_counts.is_empty());
    for tier in PriorityTier::ALL {
        assert_eq!(summary.priority_counts.get(tier), 0);
    }
    assert!(summary.gap_percentage().abs() < f64::EPSILON);
}

#[test]
fn test_counts_in_first_seen_order() {
    let findings = vec![
        finding(
            "P1",
            &[GapType::AnnualVisitOverdue, GapType::FluShotNeeded],
            PriorityTier::High,
        ),
        finding("P2", &[GapType::FluShotNeeded], PriorityTier::Low),
        finding(
            "P3",
            &[GapType::MammogramOverdue, GapType::FluShotNeeded],
            PriorityTier::High,
        ),
    ];
    let summary = aggregate(&findings, 4);

    let order: Vec<GapType> = summary.gap_counts.iter().map(|(gap, _)| gap).collect();
    assert_eq!(
        order,
        vec![
            GapType::AnnualVisitOverdue,
            GapType::FluShotNeeded,
            GapType::MammogramOverdue
        ]
    );
    assert_eq!(summary.gap_counts.get(GapType::FluShotNeeded), 3);
    assert_eq!(summary.gap_counts.get(GapType::ColonoscopyOverdue), 0);

    assert_eq!(summary.priority_counts.get(PriorityTier::High), 2);
    assert_eq!(summary.priority_counts.get(PriorityTier::Medium), 0);
    assert_eq!(summary.priority_counts.get(PriorityTier::Low), 1);
    assert_eq!(summary.priority_counts.total(), summary.patients_with_gaps);
    assert!((summary.gap_percentage() - 75.0).abs() < 1e-9);
}

#[test]
fn test_summary_serializes_with_labels() {
    let findings = vec![finding("P1", &[GapType::FluShotNeeded], PriorityTier::Low)];
    let summary = aggregate(&findings, 1);
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["gap_counts"]["Flu shot needed"], 1);
    assert_eq!(json["priority_counts"]["High"], 0);
    assert_eq!(json["priority_counts"]["Low"], 1);
}
