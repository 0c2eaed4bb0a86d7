//! Field parsers shared by the forms.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::borrow::Cow;
use std::str::FromStr;
use validator::{ValidateEmail, ValidationError};
use workforce_core::{rules, FieldErrors, WorkforceError, REQUIRED_FIELD_MESSAGE};

/// Display format for dates in forms and tables.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

const SALARY_SCALE: u32 = 2;

fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Required text of at most `max` characters.
pub(crate) fn required_text(value: &str, max: usize) -> Result<(), ValidationError> {
    rules::not_blank(value).map_err(|_| error("required", REQUIRED_FIELD_MESSAGE))?;
    rules::max_chars(value, max)
        .map_err(|_| error("too_long", format!("Field can't exceed {max} characters")))
}

pub(crate) fn required_email(value: &str, max: usize) -> Result<(), ValidationError> {
    required_text(value, max)?;
    let email = value.trim().to_lowercase();
    if !email.validate_email() {
        return Err(error("email", "Invalid email address"));
    }
    Ok(())
}

/// Blank means "not yet persisted".
pub(crate) fn optional_id(value: &str) -> Result<Option<i64>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<i64>()
        .map(Some)
        .map_err(|_| error("integer", "Id must be an integer"))
}

/// Accepts `dd/MM/yyyy` and ISO `yyyy-MM-dd`.
pub(crate) fn date(value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(error("required", REQUIRED_FIELD_MESSAGE));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(value, ISO_DATE_FORMAT))
        .map_err(|_| error("date", "Invalid date, expected dd/MM/yyyy"))
}

pub(crate) fn salary(value: &str) -> Result<Decimal, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(error("required", REQUIRED_FIELD_MESSAGE));
    }
    let amount =
        Decimal::from_str(value).map_err(|_| error("decimal", "Invalid salary amount"))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(error("range", "Salary can't be negative"));
    }
    if amount.normalize().scale() > SALARY_SCALE {
        return Err(error("scale", "Salary can't have more than 2 decimal places"));
    }
    Ok(amount)
}

/// Two decimals, unless the stored amount is more precise than that.
pub fn format_salary(amount: &Decimal) -> String {
    if amount.normalize().scale() > SALARY_SCALE {
        amount.to_string()
    } else {
        format!("{amount:.2}")
    }
}

/// Adapters with the signature `#[validate(custom)]` expects.
pub(crate) mod check {
    use super::ValidationError;

    pub fn id(value: &str) -> Result<(), ValidationError> {
        super::optional_id(value).map(|_| ())
    }

    pub fn date(value: &str) -> Result<(), ValidationError> {
        super::date(value).map(|_| ())
    }

    pub fn salary(value: &str) -> Result<(), ValidationError> {
        super::salary(value).map(|_| ())
    }
}

/// Turns a parser failure into a single-field validation error.
pub(crate) fn parsed<T>(field: &str, result: Result<T, ValidationError>) -> Result<T, WorkforceError> {
    result.map_err(|e| {
        let message = e
            .message
            .map_or_else(|| e.code.to_string(), |m| m.to_string());
        WorkforceError::Validation(FieldErrors::single(field, message))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(required_text("IT", 30).is_ok());

        let blank = required_text("  ", 30).unwrap_err();
        assert_eq!(blank.message.unwrap(), REQUIRED_FIELD_MESSAGE);

        let long = required_text(&"x".repeat(31), 30).unwrap_err();
        assert_eq!(long.code, "too_long");
    }

    #[test]
    fn test_optional_id() {
        assert_eq!(optional_id("").unwrap(), None);
        assert_eq!(optional_id(" 12 ").unwrap(), Some(12));
        assert!(optional_id("abc").is_err());
    }

    #[test]
    fn test_date_accepts_both_formats() {
        let expected = NaiveDate::from_ymd_opt(1998, 4, 21).unwrap();
        assert_eq!(date("21/04/1998").unwrap(), expected);
        assert_eq!(date("1998-04-21").unwrap(), expected);
        assert!(date("31/02/1998").is_err());
        assert_eq!(date("").unwrap_err().code, "required");
    }

    #[test]
    fn test_salary() {
        assert_eq!(salary("3000.50").unwrap(), Decimal::new(300_050, 2));
        assert_eq!(salary("0").unwrap(), Decimal::ZERO);
        assert_eq!(salary("-1").unwrap_err().code, "range");
        assert_eq!(salary("lots").unwrap_err().code, "decimal");
        assert_eq!(salary("2500.555").unwrap_err().code, "scale");
        assert_eq!(salary("2500.500").unwrap(), Decimal::new(2_500_500, 3));
    }

    #[test]
    fn test_format_salary_keeps_extra_precision() {
        assert_eq!(format_salary(&Decimal::new(25005, 1)), "2500.50");
        assert_eq!(format_salary(&Decimal::new(2_500_555, 3)), "2500.555");
    }

    #[test]
    fn test_parsed_maps_to_field_error() {
        let err = parsed("base_salary", salary("-5")).unwrap_err();
        let fields = err.field_errors().unwrap();
        assert_eq!(fields.get("base_salary"), Some("Salary can't be negative"));
    }
}
