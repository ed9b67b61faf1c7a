use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::day::DailyCount;

/// Raw contribution document as shipped next to the page. Two shapes exist in
/// the wild: the nested calendar export and a flat list of per-day records.
/// Anything else fails to deserialize and the pipeline degrades to "no data".
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ContributionDocument {
    Calendar(CalendarDocument),
    Flat(Vec<FlatDay>),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CalendarDocument {
    pub weeks: Vec<CalendarWeek>,
    #[serde(rename = "totalContributions")]
    pub total_contributions: Option<u32>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CalendarWeek {
    #[serde(rename = "contributionDays")]
    pub contribution_days: Vec<CalendarDay>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CalendarDay {
    /// ISO date string; kept as-is because the source is loosely typed.
    pub date: String,
    #[serde(rename = "contributionCount")]
    pub contribution_count: u32,
    /// Source numbering, 0=Sunday .. 6=Saturday. When absent the row is
    /// derived from the date instead, which can disagree with what an
    /// explicit field would have said under a different timezone assumption.
    pub weekday: Option<u8>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FlatDay {
    pub date: String,
    #[serde(alias = "contributionCount")]
    pub count: u32,
}

impl FlatDay {
    /// Parse the date field; records with unparseable dates are dropped.
    pub fn resolve(&self) -> Option<DailyCount> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()?;
        Some(DailyCount {
            date,
            count: self.count,
        })
    }
}
