// Property-based tests for the selection store and the month grid.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::collection::vec;
use proptest::prelude::*;

use reservation_scheduler::models::selection::{Selection, MAX_DATES};
use reservation_scheduler::services::calendar::{month_grid, GRID_CELLS};
use reservation_scheduler::utils::date::format_iso;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

proptest! {
    #[test]
    fn selection_never_exceeds_capacity(dates in vec(arb_date(), 0..40)) {
        let mut selection = Selection::new();
        for date in dates {
            selection.toggle(date);
            prop_assert!(selection.len() <= MAX_DATES);
        }
    }

    #[test]
    fn double_toggle_restores_the_chosen_set(dates in vec(arb_date(), 0..12), extra in arb_date()) {
        let mut selection = Selection::new();
        for date in dates {
            selection.toggle(date);
        }
        let before = selection.clone();

        selection.toggle(extra);
        selection.toggle(extra);

        prop_assert_eq!(selection.len(), before.len());
        prop_assert_eq!(selection.sorted(), before.sorted());
    }

    #[test]
    fn month_grid_is_six_sunday_first_weeks(date in arb_date()) {
        let cells = month_grid(date, date, &Selection::new());

        prop_assert_eq!(cells.len(), GRID_CELLS);
        prop_assert_eq!(cells[0].date.weekday(), Weekday::Sun);
        for pair in cells.windows(2) {
            prop_assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        // The 1st of the target month is always on the grid and in-month
        let first = date.with_day(1).unwrap();
        prop_assert!(cells.iter().any(|c| c.in_month && c.date == first));
    }

    #[test]
    fn format_iso_round_trips(date in arb_date()) {
        let parsed = NaiveDate::parse_from_str(&format_iso(date), "%Y-%m-%d").unwrap();
        prop_assert_eq!(parsed, date);
    }
}
