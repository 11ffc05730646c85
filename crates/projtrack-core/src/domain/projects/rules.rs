//! Status / end-date consistency rule
//!
//! A completed project must carry an end date; a project in progress must not.

use chrono::{DateTime, Utc};

use super::dates::parse_datetime;
use super::entity::ProjectStatus;
use crate::error::{Error, Result};

/// Enforce the end-date rule against a raw end-date string.
///
/// An absent or empty string counts as "no end date supplied". Presence is
/// checked before format, so an in-progress project with any end date fails
/// as "not allowed" even when the value would not parse.
pub fn validate_end_date(
    status: ProjectStatus,
    raw_end_date: Option<&str>,
) -> Result<Option<DateTime<Utc>>> {
    let supplied = raw_end_date.filter(|raw| !raw.is_empty());

    check_end_date(status, supplied)?
        .map(|raw| {
            parse_datetime(raw).ok_or_else(|| Error::validation("Invalid end date format"))
        })
        .transpose()
}

/// Enforce the end-date rule on whether an end date is present
pub fn check_end_date<T>(status: ProjectStatus, end_date: Option<T>) -> Result<Option<T>> {
    match (status, end_date) {
        (ProjectStatus::Completed, Some(date)) => Ok(Some(date)),
        (ProjectStatus::Completed, None) => Err(end_date_required(status)),
        (ProjectStatus::InProgress, None) => Ok(None),
        (ProjectStatus::InProgress, Some(_)) => Err(end_date_not_allowed(status)),
    }
}

fn end_date_required(status: ProjectStatus) -> Error {
    Error::validation(format!(
        "End date is required when status is {}",
        status.label()
    ))
}

fn end_date_not_allowed(status: ProjectStatus) -> Error {
    Error::validation(format!(
        "End date is not allowed when status is {}",
        status.label()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::Datelike;

    #[test]
    fn test_completed_with_end_date_returns_date() {
        let date = validate_end_date(ProjectStatus::Completed, Some("2025-12-31"))
            .unwrap()
            .expect("date should be returned");
        assert_eq!((date.year(), date.month(), date.day()), (2025, 12, 31));
    }

    #[test]
    fn test_completed_without_end_date_fails() {
        for raw in [None, Some("")] {
            let err = validate_end_date(ProjectStatus::Completed, raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
            assert_eq!(err.to_string(), "End date is required when status is Completed");
        }
    }

    #[test]
    fn test_in_progress_without_end_date_returns_none() {
        assert_eq!(validate_end_date(ProjectStatus::InProgress, None).unwrap(), None);
        assert_eq!(validate_end_date(ProjectStatus::InProgress, Some("")).unwrap(), None);
    }

    #[test]
    fn test_in_progress_with_end_date_fails() {
        let err = validate_end_date(ProjectStatus::InProgress, Some("2025-12-31")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "End date is not allowed when status is In Progress");
    }

    #[test]
    fn test_in_progress_rejects_presence_before_format() {
        let err = validate_end_date(ProjectStatus::InProgress, Some("garbage")).unwrap_err();
        assert_eq!(err.to_string(), "End date is not allowed when status is In Progress");
    }

    #[test]
    fn test_completed_with_unparsable_end_date() {
        let err = validate_end_date(ProjectStatus::Completed, Some("garbage")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid end date format");
    }

    #[test]
    fn test_check_end_date_table() {
        let date = Utc::now();
        assert_eq!(check_end_date(ProjectStatus::Completed, Some(date)).unwrap(), Some(date));
        assert!(check_end_date::<DateTime<Utc>>(ProjectStatus::Completed, None).is_err());
        assert_eq!(check_end_date::<DateTime<Utc>>(ProjectStatus::InProgress, None).unwrap(), None);
        assert!(check_end_date(ProjectStatus::InProgress, Some(date)).is_err());
    }

    #[test]
    fn test_raw_and_parsed_forms_share_messages() {
        let raw = validate_end_date(ProjectStatus::InProgress, Some("2025-12-31")).unwrap_err();
        let parsed = check_end_date(ProjectStatus::InProgress, Some(Utc::now())).unwrap_err();
        assert_eq!(raw.to_string(), parsed.to_string());

        let raw = validate_end_date(ProjectStatus::Completed, None).unwrap_err();
        let parsed = check_end_date::<DateTime<Utc>>(ProjectStatus::Completed, None).unwrap_err();
        assert_eq!(raw.to_string(), parsed.to_string());
    }
}
