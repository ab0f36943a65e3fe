use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::{
    model::cobranza::IntOrText,
    server::{error::AppError, model::billing::Period},
};

/// Parses a required positive integer sent as a JSON number or numeric string.
///
/// # Arguments
/// - `value` - The raw field value
/// - `field` - Field name used in the error message
///
/// # Returns
/// - `Ok(i32)` - Value greater than zero
/// - `Err(AppError::BadRequest)` - Non-numeric, zero, negative or out of range
pub fn parse_positive_int(value: &IntOrText, field: &str) -> Result<i32, AppError> {
    let parsed = match value {
        IntOrText::Int(number) => i32::try_from(*number).ok(),
        IntOrText::Text(text) => text.trim().parse::<i32>().ok(),
    };

    parsed
        .filter(|number| *number > 0)
        .ok_or_else(|| AppError::BadRequest(format!("{} debe ser un número entero positivo", field)))
}

/// Parses a billing period: `1`-`12` as number or string, or `S1`/`S2`.
///
/// # Returns
/// - `Ok(Period)` - A valid month or semester marker
/// - `Err(AppError::BadRequest)` - Anything else
pub fn parse_period(value: &IntOrText) -> Result<Period, AppError> {
    let text = match value {
        IntOrText::Int(number) => number.to_string(),
        IntOrText::Text(text) => text.clone(),
    };

    text.parse::<Period>()
        .map_err(|_| AppError::BadRequest("Periodo inválido. Use 1-12, S1 o S2".to_string()))
}

/// Largest limit the store accepts as a bound parameter.
const MAX_LIMIT: u64 = i64::MAX as u64;

/// Parses the optional `limit` query parameter of due listings.
///
/// An empty value counts as absent. Limits above `i64::MAX` are capped, since the store
/// binds them as signed integers.
///
/// # Returns
/// - `Ok(None)` - No limit requested
/// - `Ok(Some(u64))` - Positive limit
/// - `Err(AppError::BadRequest)` - Zero, negative or non-numeric limit
pub fn parse_limit(value: Option<&str>) -> Result<Option<u64>, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse::<u64>()
            .ok()
            .filter(|limit| *limit > 0)
            .map(|limit| Some(limit.min(MAX_LIMIT)))
            .ok_or_else(|| AppError::BadRequest("limit debe ser un número positivo".to_string())),
    }
}

/// Parses a payment date given as an RFC 3339 timestamp or a `YYYY-MM-DD` date.
///
/// Date-only values are taken as midnight UTC.
pub fn parse_payment_date(value: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(start_of_day)
        .map_err(|_| {
            AppError::BadRequest(
                "fecha_pago debe ser una fecha válida (YYYY-MM-DD o RFC 3339)".to_string(),
            )
        })
}

/// Midnight UTC of a calendar date.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
