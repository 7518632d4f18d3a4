use chrono::NaiveDate;

use crate::server::error::AppError;

/// Returns the trimmed value of a required text field.
///
/// # Arguments
/// - `value` - The submitted value, if any
/// - `field` - Snake case field name, used to build the error message
///
/// # Returns
/// - `Ok(String)` - Trimmed, non-empty value
/// - `Err(AppError::BadRequest)` - `"<Field Title> is required"` when missing or blank
pub fn required_text(value: Option<&str>, field: &str) -> Result<String, AppError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::BadRequest(format!(
            "{} is required",
            field_title(field)
        ))),
    }
}

/// Trims an optional text field, mapping blank values to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Turns `date_of_birth` into `Date Of Birth`.
pub fn field_title(field: &str) -> String {
    field
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Returns
/// - `Ok(NaiveDate)` - Parsed date
/// - `Err(AppError::BadRequest)` - `"Invalid date format. Use YYYY-MM-DD"`
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest("Invalid date format. Use YYYY-MM-DD".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_field_titles() {
        assert_eq!(field_title("date_of_birth"), "Date Of Birth");
        assert_eq!(field_title("username"), "Username");
        assert_eq!(field_title("grade_qualification"), "Grade Qualification");
    }

    #[test]
    fn rejects_blank_required_text() {
        let err = required_text(Some("   "), "username").unwrap_err();

        assert_eq!(err.to_string(), "Username is required");
        assert!(required_text(None, "password").is_err());
        assert_eq!(required_text(Some(" ravi "), "username").unwrap(), "ravi");
    }

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(
            parse_date("2012-04-30").unwrap(),
            NaiveDate::from_ymd_opt(2012, 4, 30).unwrap()
        );
        assert!(parse_date("30/04/2012").is_err());
        assert!(parse_date("2012-02-30").is_err());
    }
}
