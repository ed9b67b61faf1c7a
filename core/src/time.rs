use chrono::{Datelike, Duration, NaiveDate};

use crate::model::grid::{GRID_COLS, GRID_ROWS};

/// Remap a source weekday (0=Sunday .. 6=Saturday) to a grid row
/// (0=Monday .. 6=Sunday).
pub fn remap_weekday(weekday: u8) -> usize {
    ((weekday + 6) % 7) as usize
}

/// Grid row for a calendar date, 0=Monday .. 6=Sunday.
pub fn row_for_date(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// First day of the trailing 53-week window whose last column is the week
/// containing `today`.
///
/// Walking back 52 full weeks lands on the same weekday as `today`; the
/// remaining shift of `1 - isoWeekday` days (0 for a Monday, -6 for a
/// Sunday) moves that start backward onto a Monday, so `today` always falls
/// in column 52 at row `isoWeekday - 1`.
pub fn window_start(today: NaiveDate) -> NaiveDate {
    let natural = today - Duration::days((GRID_COLS as i64 - 1) * GRID_ROWS as i64);
    let iso_weekday = natural.weekday().number_from_monday() as i64;
    natural + Duration::days(1 - iso_weekday)
}

/// Calendar date of the cell at `(column, row)` for the window ending in
/// `today`'s week.
pub fn window_date(today: NaiveDate, column: usize, row: usize) -> NaiveDate {
    window_start(today) + Duration::days((column * GRID_ROWS + row) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_remap_weekday() {
        // Source Sunday lands on the last row, source Monday on the first.
        assert_eq!(remap_weekday(0), 6);
        assert_eq!(remap_weekday(1), 0);
        assert_eq!(remap_weekday(6), 5);
    }

    #[test]
    fn test_window_start_is_always_monday() {
        // One of each weekday.
        for offset in 0..7 {
            let today = date(2024, 3, 4 + offset);
            assert_eq!(window_start(today).weekday(), Weekday::Mon);
        }
    }

    #[test]
    fn test_window_start_no_shift_for_monday_today() {
        // 2024-01-01 is a Monday; 52 weeks back is already Monday-aligned.
        assert_eq!(window_start(date(2024, 1, 1)), date(2023, 1, 2));
    }

    #[test]
    fn test_window_start_sunday_shifts_six_days() {
        // 2024-01-07 is a Sunday; the natural start (also a Sunday) shifts
        // back six days onto the same Monday as above.
        assert_eq!(window_start(date(2024, 1, 7)), date(2023, 1, 2));
    }

    #[test]
    fn test_today_lands_in_last_column() {
        let today = date(2024, 1, 1);
        assert_eq!(window_date(today, GRID_COLS - 1, 0), today);

        // For a Sunday the window spans exactly 53*7 days ending today.
        let sunday = date(2024, 1, 7);
        assert_eq!(window_date(sunday, GRID_COLS - 1, GRID_ROWS - 1), sunday);
        assert_eq!(
            sunday - window_start(sunday),
            Duration::days((GRID_COLS * GRID_ROWS) as i64 - 1)
        );
    }
}
