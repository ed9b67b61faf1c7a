use chrono::NaiveDate;

/// One resolved day of activity. At most one entry exists per date; later
/// records for the same date overwrite earlier ones during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u32,
}
