use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    InvalidMonth {
        year: i32,
        month: u32,
    },
    NoSuchOccurrence {
        year: i32,
        month: u32,
        weekday: Weekday,
        nth: u32,
    },
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::InvalidMonth { year, month } => {
                write!(f, "no such month: {year}-{month:02}")
            }
            CalendarError::NoSuchOccurrence {
                year,
                month,
                weekday,
                nth,
            } => write!(
                f,
                "could not find occurrence {nth} of {weekday} in {year}-{month:02}"
            ),
        }
    }
}

impl std::error::Error for CalendarError {}

pub type CalendarResult<T> = Result<T, CalendarError>;

/// First day of the given month.
pub fn first_of_month(year: i32, month: u32) -> CalendarResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidMonth { year, month })
}

/// Month after the given one, rolling the year over past December.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Every occurrence of `weekday` within the given month, ascending.
///
/// A weekday occurs four or five times in any month, so the result holds
/// four or five dates.
pub fn weekday_dates_in_month(
    year: i32,
    month: u32,
    weekday: Weekday,
) -> CalendarResult<Vec<NaiveDate>> {
    let mut date = first_of_month(year, month)?;
    let mut dates = Vec::with_capacity(5);

    while date.month() == month {
        if date.weekday() == weekday {
            dates.push(date);
        }
        date = date + Duration::days(1);
    }
    Ok(dates)
}

/// Find the nth (1-based) occurrence of a weekday in a month.
///
/// The walk is bounded by the month's end; asking for an occurrence the
/// month does not contain (a fifth Friday in a four-Friday month) fails
/// with [`CalendarError::NoSuchOccurrence`].
pub fn nth_weekday(year: i32, month: u32, weekday: Weekday, nth: u32) -> CalendarResult<NaiveDate> {
    let mut date = first_of_month(year, month)?;
    let mut count = 0;

    while date.month() == month {
        if date.weekday() == weekday {
            count += 1;
            if count == nth {
                return Ok(date);
            }
        }
        date = date + Duration::days(1);
    }
    Err(CalendarError::NoSuchOccurrence {
        year,
        month,
        weekday,
        nth,
    })
}
