//! Attendance status guard.
//!
//! The guard runs before the framework's own validation of an attendance
//! record and rejects any status outside [`AttendanceStatus::ALL`]. The base
//! routine is passed in by the caller, so it is never reached for a rejected
//! record.

use std::sync::Arc;

use thiserror::Error;
use validator::Validate;

use crate::{
    error::AppError,
    models::attendance::{AttendanceRecord, AttendanceStatus, HasStatus},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("Invalid Status: {status}. Allowed statuses are: {}", allowed_statuses())]
    Invalid { status: String },
    #[error("Status is required. Allowed statuses are: {}", allowed_statuses())]
    Missing,
}

/// Allowed status labels in display order.
pub fn status_options() -> [&'static str; 6] {
    AttendanceStatus::ALL.map(AttendanceStatus::label)
}

/// Option string for a select field, one label per line.
pub fn select_options() -> String {
    status_options().join("\n")
}

fn allowed_statuses() -> String {
    status_options().join(", ")
}

pub fn check_status(status: Option<&str>) -> Result<AttendanceStatus, StatusError> {
    let status = status.ok_or(StatusError::Missing)?;
    AttendanceStatus::from_label(status).ok_or_else(|| StatusError::Invalid {
        status: status.to_string(),
    })
}

/// Runs the status guard, then `base` on success.
pub fn validate<R, T, E, F>(record: &R, base: F) -> Result<T, E>
where
    R: HasStatus + ?Sized,
    F: FnOnce(&R) -> Result<T, E>,
    E: From<StatusError>,
{
    check_status(record.status())?;
    base(record)
}

/// Validation owned by the HR framework, run once the status guard passes.
#[cfg_attr(test, mockall::automock)]
pub trait BaseValidation: Send + Sync {
    fn validate(&self, record: &AttendanceRecord) -> Result<(), AppError>;
}

/// Field rules declared on [`AttendanceRecord`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardValidation;

impl BaseValidation for StandardValidation {
    fn validate(&self, record: &AttendanceRecord) -> Result<(), AppError> {
        Validate::validate(record)?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct AttendanceValidator {
    base: Arc<dyn BaseValidation>,
}

impl AttendanceValidator {
    pub fn new(base: Arc<dyn BaseValidation>) -> Self {
        Self { base }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(StandardValidation))
    }

    /// Returns the accepted status once both the guard and the base routine pass.
    pub fn validate(&self, record: &AttendanceRecord) -> Result<AttendanceStatus, AppError> {
        validate(record, |r| self.base.validate(r))?;
        // The guard already accepted the label.
        check_status(record.status()).map_err(AppError::from)
    }
}

impl std::fmt::Debug for AttendanceValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttendanceValidator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::cell::Cell;

    struct Doc(Option<&'static str>);

    impl HasStatus for Doc {
        fn status(&self) -> Option<&str> {
            self.0
        }
    }

    fn record(status: &str) -> AttendanceRecord {
        AttendanceRecord::new("HR-EMP-00001", NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
            .with_status(status)
    }

    #[test]
    fn status_options_are_in_declared_order() {
        assert_eq!(
            status_options(),
            [
                "Present",
                "Absent",
                "Half Day",
                "Work From Home",
                "Leave",
                "On Duty"
            ]
        );
    }

    #[test]
    fn status_options_are_stable_across_calls() {
        let first = status_options();
        let _ = validate(&Doc(Some("Pending")), |_| Ok::<_, StatusError>(()));
        let _ = validate(&Doc(Some("Present")), |_| Ok::<_, StatusError>(()));
        assert_eq!(status_options(), first);
        assert_eq!(status_options(), first);
    }

    #[test]
    fn select_options_are_newline_joined() {
        assert_eq!(
            select_options(),
            "Present\nAbsent\nHalf Day\nWork From Home\nLeave\nOn Duty"
        );
    }

    #[test]
    fn invalid_status_message_lists_allowed_statuses() {
        let err = check_status(Some("Pending")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid Status: Pending. Allowed statuses are: Present, Absent, Half Day, Work From Home, Leave, On Duty"
        );
    }

    #[test]
    fn missing_status_is_reported_separately() {
        let err = check_status(None).unwrap_err();
        assert_eq!(err, StatusError::Missing);
        assert_eq!(
            err.to_string(),
            "Status is required. Allowed statuses are: Present, Absent, Half Day, Work From Home, Leave, On Duty"
        );
    }

    #[test]
    fn empty_status_is_invalid_not_missing() {
        assert_eq!(
            check_status(Some("")),
            Err(StatusError::Invalid {
                status: String::new()
            })
        );
    }

    #[test]
    fn allowed_statuses_reach_base_validation() {
        for label in status_options() {
            let calls = Cell::new(0);
            let result = validate(&Doc(Some(label)), |_| {
                calls.set(calls.get() + 1);
                Ok::<_, StatusError>(label)
            });
            assert_eq!(result, Ok(label));
            assert_eq!(calls.get(), 1, "base not called for {label}");
        }
    }

    #[test]
    fn rejected_statuses_skip_base_validation() {
        for status in [Some("Pending"), Some(""), Some("present"), Some("on duty"), None] {
            let calls = Cell::new(0);
            let result = validate(&Doc(status), |_| {
                calls.set(calls.get() + 1);
                Ok::<_, StatusError>(())
            });
            assert!(result.is_err(), "{status:?} should be rejected");
            assert_eq!(calls.get(), 0);
        }
    }

    #[test]
    fn base_error_is_returned_unchanged() {
        let result: Result<(), AppError> = validate(&record("Leave"), |_| {
            Err(AppError::Validation(vec!["employee: length".to_string()]))
        });
        match result {
            Err(AppError::Validation(errors)) => assert_eq!(errors, ["employee: length"]),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn validator_calls_base_once_for_on_duty() {
        let mut base = MockBaseValidation::new();
        base.expect_validate()
            .withf(|r| r.status.as_deref() == Some("On Duty"))
            .times(1)
            .returning(|_| Ok(()));
        let validator = AttendanceValidator::new(Arc::new(base));

        let status = validator.validate(&record("On Duty")).unwrap();
        assert_eq!(status, AttendanceStatus::OnDuty);
    }

    #[test]
    fn validator_never_calls_base_for_invalid_status() {
        let mut base = MockBaseValidation::new();
        base.expect_validate().times(0);
        let validator = AttendanceValidator::new(Arc::new(base));

        let err = validator.validate(&record("Pending")).unwrap_err();
        assert!(matches!(
            err,
            AppError::Status(StatusError::Invalid { ref status }) if status == "Pending"
        ));
    }

    #[test]
    fn standard_validation_checks_record_fields() {
        let validator = AttendanceValidator::standard();
        assert!(validator.validate(&record("Present")).is_ok());

        let mut blank = record("Present");
        blank.employee.clear();
        assert!(matches!(
            validator.validate(&blank),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn concurrent_validation_matches_sequential_results() {
        let validator = AttendanceValidator::standard();
        let inputs = [
            "Present",
            "Pending",
            "On Duty",
            "on duty",
            "Half Day",
            "",
            "Leave",
            "Work From Home",
        ];
        let expected: Vec<bool> = inputs
            .iter()
            .map(|s| validator.validate(&record(s)).is_ok())
            .collect();

        let results: Vec<Vec<bool>> = std::thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|s| {
                    let validator = validator.clone();
                    scope.spawn(move || {
                        (0..100)
                            .map(|_| validator.validate(&record(s)).is_ok())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for (runs, ok) in results.iter().zip(&expected) {
            assert!(runs.iter().all(|r| r == ok));
        }
        assert_eq!(
            expected,
            [true, false, true, false, true, false, true, true]
        );
    }
}
