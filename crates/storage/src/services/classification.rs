use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

/// Label returned whenever an athlete cannot be placed in a division:
/// missing weight, age outside the competition bands, unrecognized gender,
/// or a weight falling into a gap between bands.
pub const UNKNOWN_CATEGORY: &str = "Unknown Category";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassificationError {
    #[error("date of birth {dob} is later than reference date {today}")]
    InvalidDate { dob: NaiveDate, today: NaiveDate },
}

/// Computes age in whole years at `today`.
///
/// The year difference is decremented by one when the birthday has not yet
/// been reached in the reference year.
pub fn compute_age(dob: NaiveDate, today: NaiveDate) -> Result<i32, ClassificationError> {
    if dob > today {
        return Err(ClassificationError::InvalidDate { dob, today });
    }

    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }

    Ok(age)
}

/// A single entry in an ordered division table. Rules are evaluated in
/// sequence and the first matching predicate wins, so overlapping bounds
/// (90..=100 followed by >100) resolve deterministically.
struct DivisionRule {
    matches: fn(Decimal) -> bool,
    division: &'static str,
}

/// Senior male bands (age 18..=35).
const MALE_SENIOR_DIVISIONS: &[DivisionRule] = &[
    DivisionRule {
        matches: |w| w <= dec!(54.9),
        division: "Fin Weight Division",
    },
    DivisionRule {
        matches: |w| w >= dec!(55) && w <= dec!(59.9),
        division: "Fly Weight Division",
    },
    DivisionRule {
        matches: |w| w >= dec!(60) && w <= dec!(64.9),
        division: "Bantam Weight Division",
    },
    DivisionRule {
        matches: |w| w >= dec!(65) && w <= dec!(69.9),
        division: "Feather Weight Division",
    },
    DivisionRule {
        matches: |w| w >= dec!(70) && w <= dec!(74.9),
        division: "Light Weight Division",
    },
    DivisionRule {
        matches: |w| w >= dec!(75) && w <= dec!(79.9),
        division: "Welter Weight Division",
    },
    DivisionRule {
        matches: |w| w >= dec!(80) && w <= dec!(84.9),
        division: "Middle Weight Division",
    },
    DivisionRule {
        matches: |w| w >= dec!(85) && w <= dec!(89.9),
        division: "Heavy Weight Division",
    },
    DivisionRule {
        matches: |w| w >= dec!(90) && w <= dec!(100),
        division: "Super Heavy Weight Division",
    },
    DivisionRule {
        matches: |w| w > dec!(100),
        division: "Super Heavy Weight Division Level 1",
    },
];

/// Masters male (36..=49) and all female (18..=49) bands share one table.
/// Weights below 50.9 fall through every rule; that gap is inherited from
/// the federation's threshold data and is deliberately left unclassified.
const MASTERS_DIVISIONS: &[DivisionRule] = &[
    DivisionRule {
        matches: |w| w >= dec!(50.9) && w <= dec!(59.9),
        division: "Fly Weight Division",
    },
    DivisionRule {
        matches: |w| w >= dec!(60) && w <= dec!(69.9),
        division: "Middle Weight Division",
    },
    DivisionRule {
        matches: |w| w >= dec!(70) && w <= dec!(79.9),
        division: "Heavy Weight Division",
    },
    DivisionRule {
        matches: |w| w >= dec!(80) && w <= dec!(89.9),
        division: "Super Heavy Weight Division",
    },
    DivisionRule {
        matches: |w| w >= dec!(90),
        division: "Super Heavy Weight Division Level 0",
    },
];

fn first_match(rules: &[DivisionRule], weight: Decimal) -> &'static str {
    rules
        .iter()
        .find(|rule| (rule.matches)(weight))
        .map(|rule| rule.division)
        .unwrap_or(UNKNOWN_CATEGORY)
}

/// Maps (gender, age, weight) to a named weight division.
///
/// A missing weight is a classification failure, not zero: the result is
/// `Unknown Category` regardless of age and gender. Gender matching is
/// case-insensitive; anything other than male/female is unclassified.
pub fn classify_weight_division(gender: &str, age: i32, weight: Option<Decimal>) -> &'static str {
    let Some(weight) = weight else {
        return UNKNOWN_CATEGORY;
    };

    match gender.to_lowercase().as_str() {
        "male" => {
            if (18..=35).contains(&age) {
                first_match(MALE_SENIOR_DIVISIONS, weight)
            } else if (36..=49).contains(&age) {
                first_match(MASTERS_DIVISIONS, weight)
            } else {
                UNKNOWN_CATEGORY
            }
        }
        "female" => {
            if (18..=49).contains(&age) {
                first_match(MASTERS_DIVISIONS, weight)
            } else {
                UNKNOWN_CATEGORY
            }
        }
        _ => UNKNOWN_CATEGORY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_before_birthday() {
        let age = compute_age(date(2000, 6, 15), date(2024, 6, 14)).unwrap();
        assert_eq!(age, 23);
    }

    #[test]
    fn test_age_on_birthday() {
        let age = compute_age(date(2000, 6, 15), date(2024, 6, 15)).unwrap();
        assert_eq!(age, 24);
    }

    #[test]
    fn test_age_future_dob_rejected() {
        let result = compute_age(date(2030, 1, 1), date(2024, 6, 15));
        assert_eq!(
            result,
            Err(ClassificationError::InvalidDate {
                dob: date(2030, 1, 1),
                today: date(2024, 6, 15),
            })
        );
    }

    #[test]
    fn test_senior_male_fin() {
        assert_eq!(
            classify_weight_division("Male", 25, Some(dec!(54.9))),
            "Fin Weight Division"
        );
    }

    #[test]
    fn test_senior_male_super_heavy_boundary() {
        // 100 is covered by the 90..=100 band because it is evaluated first.
        assert_eq!(
            classify_weight_division("Male", 25, Some(dec!(100.0))),
            "Super Heavy Weight Division"
        );
        assert_eq!(
            classify_weight_division("Male", 25, Some(dec!(100.01))),
            "Super Heavy Weight Division Level 1"
        );
    }

    #[test]
    fn test_senior_male_band_gap_unclassified() {
        // 54.95 sits between the Fin and Fly bands.
        assert_eq!(
            classify_weight_division("Male", 25, Some(dec!(54.95))),
            UNKNOWN_CATEGORY
        );
    }

    #[test]
    fn test_masters_male_bands() {
        assert_eq!(
            classify_weight_division("male", 40, Some(dec!(59.9))),
            "Fly Weight Division"
        );
        assert_eq!(
            classify_weight_division("male", 49, Some(dec!(95))),
            "Super Heavy Weight Division Level 0"
        );
    }

    #[test]
    fn test_masters_gap_below_lightest_band() {
        assert_eq!(
            classify_weight_division("Male", 40, Some(dec!(48))),
            UNKNOWN_CATEGORY
        );
    }

    #[test]
    fn test_female_bands() {
        assert_eq!(
            classify_weight_division("Female", 30, Some(dec!(65))),
            "Middle Weight Division"
        );
        assert_eq!(
            classify_weight_division("FEMALE", 18, Some(dec!(90))),
            "Super Heavy Weight Division Level 0"
        );
    }

    #[test]
    fn test_age_out_of_band() {
        assert_eq!(
            classify_weight_division("Female", 50, Some(dec!(65))),
            UNKNOWN_CATEGORY
        );
        assert_eq!(
            classify_weight_division("Male", 17, Some(dec!(65))),
            UNKNOWN_CATEGORY
        );
        assert_eq!(
            classify_weight_division("Male", 50, Some(dec!(65))),
            UNKNOWN_CATEGORY
        );
    }

    #[test]
    fn test_unrecognized_gender() {
        assert_eq!(
            classify_weight_division("Other", 25, Some(dec!(65))),
            UNKNOWN_CATEGORY
        );
        assert_eq!(classify_weight_division("", 25, Some(dec!(65))), UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_missing_weight() {
        assert_eq!(classify_weight_division("Male", 25, None), UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let first = classify_weight_division("Female", 25, Some(dec!(72.5)));
        let second = classify_weight_division("Female", 25, Some(dec!(72.5)));
        assert_eq!(first, second);
        assert_eq!(first, "Heavy Weight Division");
    }
}
