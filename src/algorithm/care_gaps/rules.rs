//! Preventive care rules
//!
//! Four independent rules decide which services a patient is missing:
//!
//! | Gap                  | Applies to         | Triggered when                          |
//! |----------------------|--------------------|-----------------------------------------|
//! | Mammogram overdue    | women aged 40+     | due date missing or before today        |
//! | Colonoscopy overdue  | anyone aged 50+    | due date missing or before today        |
//! | Annual visit overdue | everyone           | no dated visit within the last 365 days |
//! | Flu shot needed      | everyone           | due date missing or before today        |
//!
//! A missing due date counts as overdue. A patient whose age is unknown is
//! not subject to the age-gated rules.

use crate::models::{GapList, GapType, Patient, ScreeningRecord};
use crate::utils::dates::days_between;
use chrono::NaiveDate;

/// Minimum age for mammogram screening (women only)
pub const MAMMOGRAM_MIN_AGE: i32 = 40;

/// Minimum age for colonoscopy screening
pub const COLONOSCOPY_MIN_AGE: i32 = 50;

/// A visit older than this many days no longer counts as the annual visit
pub const ANNUAL_VISIT_WINDOW_DAYS: i64 = 365;

/// Evaluate all rules for one patient
///
/// Gaps are returned in [`GapType::ALL`] order.
#[must_use]
pub fn evaluate_patient(
    patient: &Patient,
    screening: Option<&ScreeningRecord>,
    visit_dates: &[Option<NaiveDate>],
    today: NaiveDate,
) -> GapList {
    let mut gaps = GapList::new();

    if needs_mammogram(patient, screening, today) {
        gaps.push(GapType::MammogramOverdue);
    }
    if needs_colonoscopy(patient, screening, today) {
        gaps.push(GapType::ColonoscopyOverdue);
    }
    if needs_annual_visit(visit_dates, today) {
        gaps.push(GapType::AnnualVisitOverdue);
    }
    if needs_flu_shot(screening, today) {
        gaps.push(GapType::FluShotNeeded);
    }

    gaps
}

/// Women 40+ whose mammogram due date is missing or past
#[must_use]
pub fn needs_mammogram(
    patient: &Patient,
    screening: Option<&ScreeningRecord>,
    today: NaiveDate,
) -> bool {
    patient.is_female()
        && patient.is_at_least(MAMMOGRAM_MIN_AGE)
        && is_overdue(screening.and_then(|s| s.mammogram_due), today)
}

/// Anyone 50+ whose colonoscopy due date is missing or past
#[must_use]
pub fn needs_colonoscopy(
    patient: &Patient,
    screening: Option<&ScreeningRecord>,
    today: NaiveDate,
) -> bool {
    patient.is_at_least(COLONOSCOPY_MIN_AGE)
        && is_overdue(screening.and_then(|s| s.colonoscopy_due), today)
}

/// No visits, only undated visits, or a last visit over a year ago
#[must_use]
pub fn needs_annual_visit(visit_dates: &[Option<NaiveDate>], today: NaiveDate) -> bool {
    match most_recent_visit(visit_dates) {
        Some(last_visit) => days_between(last_visit, today) > ANNUAL_VISIT_WINDOW_DAYS,
        None => true,
    }
}

/// Flu shot due date missing or past
#[must_use]
pub fn needs_flu_shot(screening: Option<&ScreeningRecord>, today: NaiveDate) -> bool {
    is_overdue(screening.and_then(|s| s.flu_shot_due), today)
}

/// Latest dated visit; undated visits are ignored
#[must_use]
pub fn most_recent_visit(visit_dates: &[Option<NaiveDate>]) -> Option<NaiveDate> {
    visit_dates.iter().flatten().max().copied()
}

/// A due date is overdue when it is unknown or strictly before `today`
#[must_use]
pub fn is_overdue(due: Option<NaiveDate>, today: NaiveDate) -> bool {
    due.is_none_or(|due| due < today)
}
