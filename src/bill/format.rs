//! Conversion of raw bill fields into the strings shown to the user.

use time::{
    Date, Month, OffsetDateTime, PrimitiveDateTime, Time,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

/// The date format bills are stored with, e.g. "2004-04-04".
const BILL_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// A date-time without an offset, e.g. "2022-06-15T10:00:00".
const LOCAL_DATE_TIME_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// The error returned when a raw bill date cannot be formatted.
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("could not parse \"{0}\" as a date")]
pub struct DateFormatError(pub String);

/// Parse a raw bill date as a point in time, used to order bills.
///
/// Accepts a calendar date ("2022-06-15", taken as midnight UTC), an RFC 3339
/// date-time ("2022-06-15T10:00:00+02:00") or a date-time without an offset
/// ("2022-06-15T10:00:00", taken as UTC). Returns `None` for anything else.
pub fn parse_bill_instant(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();

    Date::parse(raw, BILL_DATE_FORMAT)
        .map(|date| PrimitiveDateTime::new(date, Time::MIDNIGHT).assume_utc())
        .or_else(|_| OffsetDateTime::parse(raw, &Rfc3339))
        .or_else(|_| {
            PrimitiveDateTime::parse(raw, LOCAL_DATE_TIME_FORMAT).map(|dt| dt.assume_utc())
        })
        .ok()
}

/// Parse the calendar date of a raw bill date.
///
/// Date-times keep the date in their own offset, so "2022-06-15T23:00:00-05:00"
/// is the 15th. Returns `None` if [parse_bill_instant] does.
pub fn parse_bill_date(raw: &str) -> Option<Date> {
    parse_bill_instant(raw).map(|instant| instant.date())
}

/// Format a raw bill date for display, e.g. "2004-04-04" becomes "4 Avr. 04".
///
/// # Errors
///
/// Returns a [DateFormatError] if `raw` is not a valid date. Callers
/// formatting a list of bills should recover from this per bill.
pub fn format_date(raw: &str) -> Result<String, DateFormatError> {
    let date = parse_bill_date(raw).ok_or_else(|| DateFormatError(raw.to_owned()))?;

    Ok(format!(
        "{} {}. {:02}",
        date.day(),
        month_abbreviation(date.month()),
        date.year().rem_euclid(100)
    ))
}

/// Map a bill status code to its display label.
///
/// Unknown codes are shown as is.
pub fn format_status(code: &str) -> String {
    match code {
        "pending" => "En attente".to_owned(),
        "accepted" => "Accepté".to_owned(),
        "refused" => "Refusé".to_owned(),
        _ => code.to_owned(),
    }
}

fn month_abbreviation(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Fév",
        Month::March => "Mar",
        Month::April => "Avr",
        Month::May => "Mai",
        Month::June => "Jui",
        Month::July => "Jui",
        Month::August => "Aoû",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Déc",
    }
}


#[cfg(test)]
mod format_status_tests {
    use super::format_status;

    #[test]
    fn maps_known_codes() {
        assert_eq!(format_status("pending"), "En attente");
        assert_eq!(format_status("accepted"), "Accepté");
        assert_eq!(format_status("refused"), "Refusé");
    }

    #[test]
    fn echoes_unknown_codes() {
        assert_eq!(format_status("archived"), "archived");
        assert_eq!(format_status(""), "");
        assert_eq!(format_status("PENDING"), "PENDING");
    }
}
