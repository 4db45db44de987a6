//! Month grid computation for the date picker.
//!
//! The grid is always 42 cells (six full weeks) starting on the Sunday on or
//! before the 1st of the target month. Adjacent-month filler days are part of
//! the grid and flagged via `in_month`; the view renders them inert.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::selection::Selection;
use crate::utils::date::first_of_month;

/// Number of cells in a rendered month grid.
pub const GRID_CELLS: usize = 42;

/// One day cell of the 6x7 month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Day-of-month number shown in the cell.
    pub day: u32,
    /// Whether the cell belongs to the target month. Filler cells never
    /// react to clicks.
    pub in_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

/// Build the 42-cell grid for the month containing `target_month`.
pub fn month_grid(
    target_month: NaiveDate,
    today: NaiveDate,
    selection: &Selection,
) -> Vec<DayCell> {
    let first = first_of_month(target_month);
    let days_back = first.weekday().num_days_from_sunday() as i64;
    let grid_start = first - Duration::days(days_back);

    (0..GRID_CELLS as i64)
        .map(|offset| {
            let date = grid_start + Duration::days(offset);
            DayCell {
                date,
                day: date.day(),
                in_month: date.year() == first.year() && date.month() == first.month(),
                is_today: date == today,
                is_selected: selection.contains(date),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use test_case::test_case;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test_case(2024, 5, 31; "may 2024")]
    #[test_case(2024, 2, 29; "february of a leap year")]
    #[test_case(2023, 2, 28; "february of a common year")]
    #[test_case(2023, 10, 31; "month starting on a sunday")]
    #[test_case(2024, 12, 31; "december")]
    fn test_grid_shape(year: i32, month: u32, days_in_month: u32) {
        let today = ymd(2024, 5, 15);
        let selection = Selection::new();
        let cells = month_grid(ymd(year, month, 1), today, &selection);

        assert_eq!(cells.len(), GRID_CELLS);
        assert_eq!(cells[0].date.weekday(), Weekday::Sun);
        assert_eq!(
            cells.iter().filter(|c| c.in_month).count(),
            days_in_month as usize
        );
        // Consecutive days from the grid start
        for pair in cells.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn test_grid_starts_on_the_first_when_month_begins_on_sunday() {
        // 2023-10-01 is a Sunday, so no filler before it
        let cells = month_grid(ymd(2023, 10, 1), ymd(2023, 10, 1), &Selection::new());
        assert_eq!(cells[0].date, ymd(2023, 10, 1));
        assert!(cells[0].in_month);
    }

    #[test]
    fn test_grid_flags_today_and_selection() {
        let mut selection = Selection::new();
        selection.toggle(ymd(2024, 5, 3));
        let cells = month_grid(ymd(2024, 5, 1), ymd(2024, 5, 15), &selection);

        let today_cell = cells.iter().find(|c| c.is_today).unwrap();
        assert_eq!(today_cell.date, ymd(2024, 5, 15));

        let selected: Vec<_> = cells.iter().filter(|c| c.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, ymd(2024, 5, 3));
    }

    #[test]
    fn test_filler_cells_carry_adjacent_month_dates() {
        // May 2024 starts on a Wednesday; the grid starts on Sunday 2024-04-28
        let cells = month_grid(ymd(2024, 5, 1), ymd(2024, 5, 15), &Selection::new());
        assert_eq!(cells[0].date, ymd(2024, 4, 28));
        assert!(!cells[0].in_month);
        assert_eq!(cells[0].day, 28);
    }
}
