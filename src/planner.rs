use crate::error::InputError;
use crate::stats::round2;

/// Inputs for one bunk calculation. Form-local and transient; validated
/// before any arithmetic runs.
#[derive(Debug, Clone, PartialEq)]
pub struct BunkInput {
    pub total_classes: u32,
    pub attended_classes: u32,
    pub desired_percentage: f64,
    pub classes_per_week: u32,
}

impl BunkInput {
    /// The original form silently dropped zero or non-numeric fields; here the
    /// boundary rejects them with a typed error instead. The desired
    /// percentage is bounds-checked to (0, 100] rather than trusted to be on
    /// the 0-100 scale.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.total_classes == 0 {
            return Err(InputError::Zero {
                field: "total classes",
            });
        }
        if self.attended_classes == 0 {
            return Err(InputError::Zero {
                field: "attended classes",
            });
        }
        if self.classes_per_week == 0 {
            return Err(InputError::Zero {
                field: "classes per week",
            });
        }
        if !(self.desired_percentage > 0.0 && self.desired_percentage <= 100.0) {
            return Err(InputError::PercentOutOfRange(self.desired_percentage));
        }
        if self.attended_classes > self.total_classes {
            return Err(InputError::AttendedExceedsTotal {
                attended: self.attended_classes,
                total: self.total_classes,
            });
        }
        Ok(())
    }
}

/// What the computed number means for the coming week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanVerdict {
    /// May skip this many classes and stay at or above target.
    Skippable(u32),
    /// Already short: this many classes beyond the normal week must be
    /// attended to reach target.
    Deficit(u32),
}

/// Largest k such that skipping k of next week's classes (and attending the
/// rest) keeps the attendance ratio at or above the target.
///
/// Formula: floor(attended + per_week - desired/100 * (total + per_week)).
/// Negative results mean the student is below target even with a full week
/// attended.
pub fn max_skippable(input: &BunkInput) -> Result<i64, InputError> {
    input.validate()?;

    let attended = f64::from(input.attended_classes);
    let per_week = f64::from(input.classes_per_week);
    let total = f64::from(input.total_classes);
    let target = input.desired_percentage / 100.0;

    Ok((attended + per_week - target * (total + per_week)).floor() as i64)
}

pub fn plan(input: &BunkInput) -> Result<PlanVerdict, InputError> {
    let result = max_skippable(input)?;
    if result >= 0 {
        Ok(PlanVerdict::Skippable(result as u32))
    } else {
        Ok(PlanVerdict::Deficit(result.unsigned_abs() as u32))
    }
}

/// Current standing shown alongside the form. Independent of the skip
/// formula; suppressed entirely when no classes were held.
pub fn current_percentage(total_classes: u32, attended_classes: u32) -> Option<f64> {
    if total_classes == 0 {
        return None;
    }
    Some(round2(
        f64::from(attended_classes) / f64::from(total_classes) * 100.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(total: u32, attended: u32, desired: f64, per_week: u32) -> BunkInput {
        BunkInput {
            total_classes: total,
            attended_classes: attended,
            desired_percentage: desired,
            classes_per_week: per_week,
        }
    }

    #[test]
    fn worked_example_above_target() {
        // floor(80 + 10 - 0.75 * 110) = floor(7.5) = 7
        assert_eq!(max_skippable(&input(100, 80, 75.0, 10)).unwrap(), 7);
        assert_eq!(
            plan(&input(100, 80, 75.0, 10)).unwrap(),
            PlanVerdict::Skippable(7)
        );
    }

    #[test]
    fn worked_example_below_target() {
        // floor(60 + 10 - 0.75 * 110) = floor(-12.5) = -13
        assert_eq!(max_skippable(&input(100, 60, 75.0, 10)).unwrap(), -13);
        assert_eq!(
            plan(&input(100, 60, 75.0, 10)).unwrap(),
            PlanVerdict::Deficit(13)
        );
    }

    #[test]
    fn exactly_on_target_allows_skipping_the_slack() {
        // floor(75 + 10 - 0.75 * 110) = floor(2.5) = 2
        assert_eq!(
            plan(&input(100, 75, 75.0, 10)).unwrap(),
            PlanVerdict::Skippable(2)
        );
    }

    #[test]
    fn zero_fields_are_rejected() {
        assert_eq!(
            max_skippable(&input(0, 80, 75.0, 10)).unwrap_err(),
            InputError::Zero {
                field: "total classes"
            }
        );
        assert_eq!(
            max_skippable(&input(100, 0, 75.0, 10)).unwrap_err(),
            InputError::Zero {
                field: "attended classes"
            }
        );
        assert_eq!(
            max_skippable(&input(100, 80, 75.0, 0)).unwrap_err(),
            InputError::Zero {
                field: "classes per week"
            }
        );
    }

    #[test]
    fn desired_percentage_is_bounds_checked() {
        assert_eq!(
            max_skippable(&input(100, 80, 0.0, 10)).unwrap_err(),
            InputError::PercentOutOfRange(0.0)
        );
        assert_eq!(
            max_skippable(&input(100, 80, 120.0, 10)).unwrap_err(),
            InputError::PercentOutOfRange(120.0)
        );
        assert!(matches!(
            max_skippable(&input(100, 80, f64::NAN, 10)).unwrap_err(),
            InputError::PercentOutOfRange(_)
        ));
        assert!(max_skippable(&input(100, 80, 100.0, 10)).is_ok());
    }

    #[test]
    fn attended_above_total_is_rejected() {
        assert_eq!(
            max_skippable(&input(50, 60, 75.0, 10)).unwrap_err(),
            InputError::AttendedExceedsTotal {
                attended: 60,
                total: 50
            }
        );
    }

    #[test]
    fn current_percentage_handles_edges() {
        assert_eq!(current_percentage(100, 0), Some(0.0));
        assert_eq!(current_percentage(0, 5), None);
        assert_eq!(current_percentage(90, 72), Some(80.0));
        assert_eq!(current_percentage(3, 1), Some(33.33));
    }
}
