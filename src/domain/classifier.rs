//! Risk classifier: (age, gender, distinct term count) -> RiskLevel.
//!
//! Rules are evaluated top to bottom and the first match wins. Anything no
//! rule covers (age exactly 30, a single term, gaps between thresholds)
//! falls back to `RiskLevel::None`.

use crate::domain::{Gender, RiskLevel};
use chrono::NaiveDate;
use std::ops::RangeInclusive;

/// Age pivot of the rule set. Neither age band contains it.
pub const AGE_THRESHOLD: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AgeBand {
    Any,
    Over,
    Under,
}

impl AgeBand {
    fn contains(self, age: i32) -> bool {
        match self {
            AgeBand::Any => true,
            AgeBand::Over => age > AGE_THRESHOLD,
            AgeBand::Under => age < AGE_THRESHOLD,
        }
    }
}

struct Rule {
    age: AgeBand,
    gender: Option<Gender>,
    terms: RangeInclusive<usize>,
    level: RiskLevel,
}

const fn rule(
    age: AgeBand,
    gender: Option<Gender>,
    terms: RangeInclusive<usize>,
    level: RiskLevel,
) -> Rule {
    Rule {
        age,
        gender,
        terms,
        level,
    }
}

const AT_LEAST: usize = usize::MAX;

static RULES: [Rule; 8] = [
    rule(AgeBand::Any, None, 0..=0, RiskLevel::None),
    rule(AgeBand::Over, None, 2..=5, RiskLevel::Borderline),
    rule(AgeBand::Over, None, 6..=7, RiskLevel::InDanger),
    rule(AgeBand::Over, None, 8..=AT_LEAST, RiskLevel::EarlyOnset),
    rule(AgeBand::Under, Some(Gender::Male), 3..=3, RiskLevel::InDanger),
    rule(AgeBand::Under, Some(Gender::Male), 5..=AT_LEAST, RiskLevel::EarlyOnset),
    rule(AgeBand::Under, Some(Gender::Female), 4..=4, RiskLevel::InDanger),
    rule(AgeBand::Under, Some(Gender::Female), 7..=AT_LEAST, RiskLevel::EarlyOnset),
];

impl Rule {
    fn applies(&self, age: i32, gender: Gender, term_count: usize) -> bool {
        self.age.contains(age)
            && self.gender.is_none_or(|g| g == gender)
            && self.terms.contains(&term_count)
    }
}

/// Classify a patient. Total over all inputs.
pub fn classify(age: i32, gender: Gender, term_count: usize) -> RiskLevel {
    RULES
        .iter()
        .find(|r| r.applies(age, gender, term_count))
        .map(|r| r.level)
        .unwrap_or(RiskLevel::None)
}

/// Whole years elapsed from `date_of_birth` to `today`.
///
/// The year only counts once the birthday has been reached. Birth dates in
/// the future give a negative age.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    match today.years_since(date_of_birth) {
        Some(years) => years as i32,
        None => date_of_birth
            .years_since(today)
            .map_or(-1, |years| -(years as i32) - 1),
    }
}
