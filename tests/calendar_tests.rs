use chrono::{Datelike, NaiveDate, Weekday};
use meeting_tool::calendar::{self, CalendarError};

#[test]
fn nth_weekday_finds_each_friday_of_august_2025() {
    // 2025-08-01 is a Friday, so the Fridays are 1, 8, 15, 22, 29
    for (nth, day) in [(1, 1), (2, 8), (3, 15), (4, 22), (5, 29)] {
        let date = calendar::nth_weekday(2025, 8, Weekday::Fri, nth).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 8, day).unwrap());
        assert_eq!(date.weekday(), Weekday::Fri);
    }
}

#[test]
fn nth_weekday_position_matches_enumeration_across_years() {
    for year in 2024..=2026 {
        for month in 1..=12 {
            let fridays = calendar::weekday_dates_in_month(year, month, Weekday::Fri).unwrap();
            assert!(fridays.len() == 4 || fridays.len() == 5);
            for (index, expected) in fridays.iter().enumerate() {
                let nth = index as u32 + 1;
                let found = calendar::nth_weekday(year, month, Weekday::Fri, nth).unwrap();
                assert_eq!(found, *expected);
                assert_eq!(found.weekday(), Weekday::Fri);
            }
        }
    }
}

#[test]
fn weekday_dates_in_month_enumerates_all_fridays() {
    let fridays = calendar::weekday_dates_in_month(2025, 8, Weekday::Fri).unwrap();
    let days: Vec<u32> = fridays.iter().map(|d| d.day()).collect();
    assert_eq!(days, vec![1, 8, 15, 22, 29]);

    // December 2025 starts on a Monday and has only four Fridays
    let fridays = calendar::weekday_dates_in_month(2025, 12, Weekday::Fri).unwrap();
    let days: Vec<u32> = fridays.iter().map(|d| d.day()).collect();
    assert_eq!(days, vec![5, 12, 19, 26]);
}

#[test]
fn missing_fifth_occurrence_is_an_explicit_error() {
    let err = calendar::nth_weekday(2025, 12, Weekday::Fri, 5).unwrap_err();
    assert_eq!(
        err,
        CalendarError::NoSuchOccurrence {
            year: 2025,
            month: 12,
            weekday: Weekday::Fri,
            nth: 5,
        }
    );
}

#[test]
fn invalid_month_is_rejected() {
    let err = calendar::nth_weekday(2025, 13, Weekday::Fri, 1).unwrap_err();
    assert_eq!(
        err,
        CalendarError::InvalidMonth {
            year: 2025,
            month: 13,
        }
    );
}

#[test]
fn next_month_rolls_year_over_past_december() {
    assert_eq!(calendar::next_month(2025, 8), (2025, 9));
    assert_eq!(calendar::next_month(2025, 12), (2026, 1));
}
