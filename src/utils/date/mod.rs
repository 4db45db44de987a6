// Date utility functions

use chrono::{Datelike, NaiveDate};

/// Korean weekday names indexed by days-from-Sunday (0 = 일요일).
pub const WEEKDAYS_KO: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Zero-padded `YYYY-MM-DD`.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `"{year}년 {month}월 {day}일 ({weekday})"` with unpadded month and day.
pub fn format_korean_long(date: NaiveDate) -> String {
    let weekday = WEEKDAYS_KO[date.weekday().num_days_from_sunday() as usize];
    format!(
        "{}년 {}월 {}일 ({})",
        date.year(),
        date.month(),
        date.day(),
        weekday
    )
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

pub fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    shift_month(first_of_month(date), 1)
}

pub fn first_of_previous_month(date: NaiveDate) -> NaiveDate {
    shift_month(first_of_month(date), -1)
}

fn shift_month(first: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (first.year() * 12) + (first.month() as i32 - 1) + delta_months;
    let year = total_months.div_euclid(12);
    let month = total_months.rem_euclid(12) + 1;
    NaiveDate::from_ymd_opt(year, month as u32, 1).expect("valid calendar date")
}
