//! Tests for priority scoring and tiers

use care_gaps::algorithm::care_gaps::priority::{ScoringPolicy, score_labels};
use care_gaps::algorithm::care_gaps::prioritize;
use care_gaps::models::{GapType, PriorityTier};

#[test]
fn test_score_from_label_wording() {
    let labels = ["Mammogram overdue", "Flu shot needed"];
    assert_eq!(score_labels(labels, Some(40), ScoringPolicy::AgeBonusPerGap), 3);
    assert_eq!(score_labels(["Something else"], Some(40), ScoringPolicy::AgeBonusPerGap), 0);
    assert_eq!(score_labels(["FLU SHOT NEEDED"], None, ScoringPolicy::AgeBonusPerGap), 1);
}

#[test]
fn test_age_bonus_per_gap_starts_at_65() {
    let gaps = [GapType::FluShotNeeded];
    assert_eq!(prioritize(&gaps, Some(64), ScoringPolicy::AgeBonusPerGap), (1, PriorityTier::Low));
    assert_eq!(
        prioritize(&gaps, Some(65), ScoringPolicy::AgeBonusPerGap),
        (2, PriorityTier::Medium)
    );

    let gaps = [GapType::AnnualVisitOverdue, GapType::FluShotNeeded];
    assert_eq!(
        prioritize(&gaps, Some(80), ScoringPolicy::AgeBonusPerGap),
        (5, PriorityTier::High)
    );
}

#[test]
fn test_age_bonus_per_patient() {
    let gaps = [
        GapType::MammogramOverdue,
        GapType::ColonoscopyOverdue,
        GapType::AnnualVisitOverdue,
        GapType::FluShotNeeded,
    ];
    assert_eq!(prioritize(&gaps, Some(70), ScoringPolicy::AgeBonusPerGap).0, 11);
    assert_eq!(prioritize(&gaps, Some(70), ScoringPolicy::AgeBonusPerPatient).0, 8);
    assert_eq!(prioritize(&[], Some(70), ScoringPolicy::AgeBonusPerPatient).0, 0);
}

#[test]
fn test_unknown_age_gets_no_bonus() {
    let gaps = [GapType::FluShotNeeded];
    assert_eq!(prioritize(&gaps, None, ScoringPolicy::AgeBonusPerGap), (1, PriorityTier::Low));
}
