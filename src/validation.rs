//! Input validation for activity collections.
//!
//! The solvers themselves are total over well-formed input and define no
//! error type; malformed intervals and oversized brute-force instances are
//! policy concerns of the embedding application. This module is the
//! recommended pre-flight for that layer. Detects:
//! - Inverted or empty intervals (`end_ms <= start_ms`)
//! - Activity counts beyond the brute-force feasibility bound

use crate::models::Activity;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Largest activity count for which brute force is considered feasible.
///
/// A performance guard, not a correctness limit: the `u64` mask handles up
/// to 63 activities, but 2ⁿ enumeration is already painful well before
/// this bound.
pub const MAX_BRUTE_FORCE_ACTIVITIES: usize = 24;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An activity ends at or before it starts.
    InvertedInterval,
    /// Too many activities for exhaustive search.
    TooManyActivities,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks that every activity is a well-formed interval.
///
/// Collects all offending activities rather than stopping at the first.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_activities(activities: &[Activity]) -> ValidationResult {
    let mut errors = Vec::new();

    for (index, act) in activities.iter().enumerate() {
        if act.end_ms <= act.start_ms {
            let label = act.name.as_deref().unwrap_or("unnamed");
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedInterval,
                format!(
                    "Activity #{index} ('{label}') has end {} <= start {}",
                    act.end_ms, act.start_ms
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that `n` activities are feasible for brute-force enumeration.
///
/// Applications should run this before
/// [`crate::selector::BruteForceSelector`] and refuse or warn on failure.
pub fn check_brute_force_bound(n: usize) -> ValidationResult {
    if n <= MAX_BRUTE_FORCE_ACTIVITIES {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::TooManyActivities,
            format!(
                "{n} activities exceed the brute-force bound of {MAX_BRUTE_FORCE_ACTIVITIES}"
            ),
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_activities() {
        let activities = vec![Activity::new(0, 1), Activity::new(5, 9).with_name("ok")];
        assert!(validate_activities(&activities).is_ok());
    }

    #[test]
    fn test_inverted_interval() {
        let activities = vec![Activity::new(5, 3)];
        let errors = validate_activities(&activities).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvertedInterval));
    }

    #[test]
    fn test_zero_length_interval_rejected() {
        let activities = vec![Activity::new(4, 4)];
        assert!(validate_activities(&activities).is_err());
    }

    #[test]
    fn test_all_errors_collected() {
        let activities = vec![
            Activity::new(5, 3),
            Activity::new(0, 1),
            Activity::new(2, 2),
        ];
        let errors = validate_activities(&activities).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.contains("#0"));
    }

    #[test]
    fn test_brute_force_bound() {
        assert!(check_brute_force_bound(0).is_ok());
        assert!(check_brute_force_bound(MAX_BRUTE_FORCE_ACTIVITIES).is_ok());

        let errors = check_brute_force_bound(MAX_BRUTE_FORCE_ACTIVITIES + 1).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TooManyActivities));
    }
}
