//! Trip form parsing and validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::{
    check_max_length, check_optional_max_length, normalize_optional, require, MAX_NOTES_LENGTH,
    MAX_SHORT_TEXT_LENGTH,
};

/// Calendar date format accepted from date inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw trip form as submitted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TripForm {
    pub name: Option<String>,
    pub activity_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// Validated trip fields ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripFields {
    pub name: String,
    pub activity_type: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl TripForm {
    /// Validate and normalize the submitted fields.
    pub fn validate(&self) -> Result<TripFields, String> {
        let name = require("Name", self.name.as_deref())?;
        check_max_length("Name", &name, MAX_SHORT_TEXT_LENGTH)?;

        let activity_type = require("Activity type", self.activity_type.as_deref())?;
        check_max_length("Activity type", &activity_type, MAX_SHORT_TEXT_LENGTH)?;

        let start_date = parse_date("Start date", self.start_date.as_deref())?;
        let end_date = parse_date("End date", self.end_date.as_deref())?;
        validate_date_range(start_date, end_date)?;

        let location = normalize_optional(self.location.as_deref());
        check_optional_max_length("Location", location.as_ref(), MAX_SHORT_TEXT_LENGTH)?;

        let notes = normalize_optional(self.notes.as_deref());
        check_optional_max_length("Notes", notes.as_ref(), MAX_NOTES_LENGTH)?;

        Ok(TripFields {
            name,
            activity_type,
            start_date,
            end_date,
            location,
            notes,
        })
    }
}

/// Parse an optional `YYYY-MM-DD` date. Blank or absent input is `None`.
pub fn parse_date(field: &str, input: Option<&str>) -> Result<Option<NaiveDate>, String> {
    let Some(raw) = normalize_optional(input) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(&raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| format!("{field} must be a date in YYYY-MM-DD format, got '{raw}'"))
}

/// When both ends are known, the trip cannot end before it starts.
pub fn validate_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), String> {
    match (start, end) {
        (Some(s), Some(e)) if e < s => Err(format!(
            "End date {e} is before start date {s}"
        )),
        _ => Ok(()),
    }
}

/// Inclusive length of a trip in days, when both dates are known.
pub fn duration_days(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<i64> {
    match (start, end) {
        (Some(s), Some(e)) => Some((e - s).num_days() + 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ridge_hike() -> TripForm {
        TripForm {
            name: Some("Ridge Hike".into()),
            activity_type: Some("Hiking".into()),
            ..TripForm::default()
        }
    }

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date("Start date", Some("2024-07-04")),
            Ok(Some(date(2024, 7, 4)))
        );
    }

    #[test]
    fn parse_date_blank_is_none() {
        assert_eq!(parse_date("Start date", Some("")), Ok(None));
        assert_eq!(parse_date("Start date", None), Ok(None));
    }

    #[test]
    fn parse_date_rejects_garbage() {
        let err = parse_date("Start date", Some("not-a-date")).unwrap_err();
        assert!(err.starts_with("Start date must be a date"));
    }

    #[test]
    fn parse_date_rejects_impossible_dates() {
        assert!(parse_date("End date", Some("2024-02-30")).is_err());
    }

    #[test]
    fn date_range_rejects_reversed() {
        assert!(validate_date_range(Some(date(2024, 7, 5)), Some(date(2024, 7, 4))).is_err());
        assert!(validate_date_range(Some(date(2024, 7, 4)), Some(date(2024, 7, 4))).is_ok());
        assert!(validate_date_range(None, Some(date(2024, 7, 4))).is_ok());
    }

    #[test]
    fn duration_is_inclusive() {
        assert_eq!(
            duration_days(Some(date(2024, 7, 4)), Some(date(2024, 7, 6))),
            Some(3)
        );
        assert_eq!(duration_days(Some(date(2024, 7, 4)), None), None);
    }

    #[test]
    fn minimal_form_validates() {
        let fields = ridge_hike().validate().unwrap();
        assert_eq!(fields.name, "Ridge Hike");
        assert_eq!(fields.activity_type, "Hiking");
        assert_eq!(fields.start_date, None);
        assert_eq!(fields.location, None);
    }

    #[test]
    fn missing_activity_rejected() {
        let form = TripForm {
            activity_type: Some("".into()),
            ..ridge_hike()
        };
        assert_eq!(form.validate().unwrap_err(), "Activity type is required");
    }

    #[test]
    fn bad_start_date_rejected() {
        let form = TripForm {
            start_date: Some("not-a-date".into()),
            ..ridge_hike()
        };
        assert!(form.validate().is_err());
    }
}
