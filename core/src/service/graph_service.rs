use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::model::day::DailyCount;
use crate::model::grid::{
    bucket_for, empty_counts, empty_dates, BucketGrid, CountGrid, DateGrid, GRID_COLS, GRID_ROWS,
};
use crate::model::source::{CalendarDocument, ContributionDocument, FlatDay};
use crate::service::dto::{ContributionGraph, MonthLabel};
use crate::time::{remap_weekday, row_for_date, window_date};

/// Normalize a raw document into the fixed 53x7 rendering model. `today`
/// anchors the trailing window used for flat-list inputs and is passed
/// explicitly so callers (and tests) control the clock.
pub fn build_graph(document: ContributionDocument, today: NaiveDate) -> ContributionGraph {
    let (counts, dates, total) = match document {
        ContributionDocument::Calendar(calendar) => normalize_calendar(&calendar),
        ContributionDocument::Flat(days) => normalize_flat(&days, today),
    };

    let mut buckets: BucketGrid = [[0; GRID_ROWS]; GRID_COLS];
    for column in 0..GRID_COLS {
        for row in 0..GRID_ROWS {
            buckets[column][row] = bucket_for(counts[column][row]);
        }
    }

    let month_labels = derive_month_labels(&dates);
    ContributionGraph {
        counts,
        dates,
        buckets,
        month_labels,
        total,
    }
}

/// Calendar shape: each week object is one column, columns beyond the 53rd
/// are discarded.
fn normalize_calendar(calendar: &CalendarDocument) -> (CountGrid, DateGrid, Option<u32>) {
    let mut counts = empty_counts();
    let mut dates = empty_dates();

    for (column, week) in calendar.weeks.iter().take(GRID_COLS).enumerate() {
        for day in &week.contribution_days {
            let date = NaiveDate::parse_from_str(&day.date, "%Y-%m-%d").ok();
            // An explicit weekday field wins; otherwise the row comes from the
            // date itself. The two can disagree when the source computed its
            // weekday under another timezone; that mismatch is inherited from
            // the data, not resolved here.
            let row = match (day.weekday, date) {
                (Some(weekday), _) if weekday < 7 => remap_weekday(weekday),
                (_, Some(date)) => row_for_date(date),
                _ => continue,
            };
            counts[column][row] = day.contribution_count;
            dates[column][row] = date;
        }
    }

    (counts, dates, calendar.total_contributions)
}

/// Flat-list shape: counts are looked up by date over the Monday-aligned
/// trailing window ending in `today`'s week. Cells after `today` keep count 0
/// and no date.
fn normalize_flat(days: &[FlatDay], today: NaiveDate) -> (CountGrid, DateGrid, Option<u32>) {
    let by_date: HashMap<NaiveDate, u32> = days
        .iter()
        .filter_map(FlatDay::resolve)
        .map(|DailyCount { date, count }| (date, count))
        .collect();

    let mut counts = empty_counts();
    let mut dates = empty_dates();
    for idx in 0..GRID_COLS * GRID_ROWS {
        let column = idx / GRID_ROWS;
        let row = idx % GRID_ROWS;
        let date = window_date(today, column, row);
        if date > today {
            break;
        }
        counts[column][row] = by_date.get(&date).copied().unwrap_or(0);
        dates[column][row] = Some(date);
    }

    (counts, dates, None)
}

/// Record the first column at which each distinct (year, month) pair appears,
/// scanning columns left to right. Scan order guarantees the earliest column
/// per pair and a result ordered by column.
fn derive_month_labels(dates: &DateGrid) -> Vec<MonthLabel> {
    let mut seen: Vec<(i32, u32)> = Vec::new();
    let mut labels = Vec::new();
    for (column, rows) in dates.iter().enumerate() {
        for date in rows.iter().flatten() {
            let key = (date.year(), date.month());
            if !seen.contains(&key) {
                seen.push(key);
                labels.push(MonthLabel {
                    column,
                    name: date.format("%b").to_string(),
                });
            }
        }
    }
    labels
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTotal {
    pub year: i32,
    pub month: u32,
    pub name: String,
    pub count: u64,
}

/// Per-month contribution totals over every dated cell, ordered by first
/// appearance in the grid.
pub fn monthly_totals(graph: &ContributionGraph) -> Vec<MonthTotal> {
    let mut totals: Vec<MonthTotal> = Vec::new();
    for column in 0..GRID_COLS {
        for row in 0..GRID_ROWS {
            let Some(date) = graph.dates[column][row] else {
                continue;
            };
            let count = graph.counts[column][row] as u64;
            match totals
                .iter_mut()
                .find(|t| t.year == date.year() && t.month == date.month())
            {
                Some(total) => total.count += count,
                None => totals.push(MonthTotal {
                    year: date.year(),
                    month: date.month(),
                    name: date.format("%b").to_string(),
                    count,
                }),
            }
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::source::{CalendarDay, CalendarWeek};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar_day(date: &str, count: u32, weekday: Option<u8>) -> CalendarDay {
        CalendarDay {
            date: date.to_string(),
            contribution_count: count,
            weekday,
        }
    }

    fn calendar(weeks: Vec<CalendarWeek>, total: Option<u32>) -> ContributionDocument {
        ContributionDocument::Calendar(CalendarDocument {
            weeks,
            total_contributions: total,
        })
    }

    #[test]
    fn test_calendar_weekday_remap() {
        // Source weekday 0 (Sunday) lands on row 6, weekday 1 (Monday) on row 0.
        let doc = calendar(
            vec![CalendarWeek {
                contribution_days: vec![
                    calendar_day("2024-01-07", 5, Some(0)),
                    calendar_day("2024-01-01", 2, Some(1)),
                ],
            }],
            Some(7),
        );
        let graph = build_graph(doc, date(2024, 1, 7));
        assert_eq!(graph.counts[0][6], 5);
        assert_eq!(graph.counts[0][0], 2);
        assert_eq!(graph.dates[0][6], Some(date(2024, 1, 7)));
        assert_eq!(graph.total, Some(7));
    }

    #[test]
    fn test_calendar_weekday_fallback_from_date() {
        // 2024-01-03 is a Wednesday; with no weekday field the row comes from
        // the date.
        let doc = calendar(
            vec![CalendarWeek {
                contribution_days: vec![calendar_day("2024-01-03", 4, None)],
            }],
            None,
        );
        let graph = build_graph(doc, date(2024, 1, 7));
        assert_eq!(graph.counts[0][2], 4);
        assert_eq!(graph.buckets[0][2], 2);
    }

    #[test]
    fn test_calendar_discards_weeks_beyond_53() {
        let mut weeks = Vec::new();
        for i in 0..60 {
            weeks.push(CalendarWeek {
                contribution_days: vec![calendar_day("2024-01-01", i, Some(1))],
            });
        }
        let doc = calendar(weeks, None);
        let graph = build_graph(doc, date(2024, 1, 7));
        // Column 52 holds week index 52; weeks 53..59 are gone.
        assert_eq!(graph.counts[52][0], 52);
    }

    #[test]
    fn test_flat_single_day_at_fixed_today() {
        // Today pinned to Monday 2024-01-01: its count sits in the last
        // column at row 0 and every other cell stays 0.
        let today = date(2024, 1, 1);
        let doc = ContributionDocument::Flat(vec![FlatDay {
            date: "2024-01-01".to_string(),
            count: 10,
        }]);
        let graph = build_graph(doc, today);

        assert_eq!(graph.counts[52][0], 10);
        assert_eq!(graph.dates[52][0], Some(today));
        let sum: u32 = graph.counts.iter().flatten().sum();
        assert_eq!(sum, 10);
        // Cells past today carry no date.
        assert_eq!(graph.dates[52][1], None);
    }

    #[test]
    fn test_flat_window_is_monday_aligned() {
        let today = date(2024, 1, 7);
        let graph = build_graph(ContributionDocument::Flat(Vec::new()), today);
        assert_eq!(graph.dates[0][0], Some(date(2023, 1, 2)));
        assert_eq!(graph.dates[52][6], Some(today));
    }

    #[test]
    fn test_flat_missing_days_default_to_zero_bucket() {
        let today = date(2024, 1, 7);
        let doc = ContributionDocument::Flat(vec![FlatDay {
            date: "2023-06-15".to_string(),
            count: 20,
        }]);
        let graph = build_graph(doc, today);
        let high_cells = graph
            .buckets
            .iter()
            .flatten()
            .filter(|&&b| b == 4)
            .count();
        assert_eq!(high_cells, 1);
        assert_eq!(graph.buckets[0][0], 0);
    }

    #[test]
    fn test_month_labels_two_months() {
        // A window starting late in one month: exactly one label per distinct
        // (year, month), each at the column of its first dated cell.
        let mut dates = empty_dates();
        for column in 0..4 {
            for row in 0..GRID_ROWS {
                dates[column][row] = Some(date(2024, 1, 29) + chrono::Duration::days((column * GRID_ROWS + row) as i64));
            }
        }
        let labels = derive_month_labels(&dates);
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0], MonthLabel { column: 0, name: "Jan".to_string() });
        assert_eq!(labels[1], MonthLabel { column: 0, name: "Feb".to_string() });
    }

    #[test]
    fn test_month_labels_same_month_across_years() {
        // Jan 2023 and Jan 2024 are distinct (year, month) pairs.
        let mut dates = empty_dates();
        dates[0][0] = Some(date(2023, 1, 2));
        dates[52][0] = Some(date(2024, 1, 1));
        let labels = derive_month_labels(&dates);
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].column, 0);
        assert_eq!(labels[1].column, 52);
        assert_eq!(labels[0].name, labels[1].name);
    }

    #[test]
    fn test_monthly_totals_sums_dated_cells() {
        let today = date(2024, 1, 7);
        let doc = ContributionDocument::Flat(vec![
            FlatDay { date: "2024-01-01".to_string(), count: 3 },
            FlatDay { date: "2024-01-02".to_string(), count: 4 },
            FlatDay { date: "2023-12-25".to_string(), count: 5 },
        ]);
        let graph = build_graph(doc, today);
        let totals = monthly_totals(&graph);
        let jan_2024 = totals
            .iter()
            .find(|t| t.year == 2024 && t.month == 1)
            .unwrap();
        let dec_2023 = totals
            .iter()
            .find(|t| t.year == 2023 && t.month == 12)
            .unwrap();
        assert_eq!(jan_2024.count, 7);
        assert_eq!(dec_2023.count, 5);
    }

    #[test]
    fn test_duplicate_dates_last_one_wins() {
        let today = date(2024, 1, 1);
        let doc = ContributionDocument::Flat(vec![
            FlatDay { date: "2024-01-01".to_string(), count: 1 },
            FlatDay { date: "2024-01-01".to_string(), count: 9 },
        ]);
        let graph = build_graph(doc, today);
        assert_eq!(graph.counts[52][0], 9);
    }
}
