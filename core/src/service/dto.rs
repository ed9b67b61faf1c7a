use serde::{Serialize, Serializer};

use crate::model::grid::{BucketGrid, CountGrid, DateGrid, GRID_COLS, GRID_ROWS};

/// Serde only implements `Serialize` for arrays up to length 32; serialize
/// the 53-column outer array as a slice, which yields the same sequence.
fn serialize_grid<T, S>(grid: &[[T; GRID_ROWS]; GRID_COLS], serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    grid.as_slice().serialize(serializer)
}

/// Static weekday labels: rows 0, 2 and 4 (Mon/Wed/Fri) only, for visual
/// compactness; the remaining rows stay unlabeled.
pub const WEEKDAY_LABELS: [(usize, &str); 3] = [(0, "Mon"), (2, "Wed"), (4, "Fri")];

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MonthLabel {
    /// Column at which the month first appears in scan order.
    pub column: usize,
    /// Localized short month name, e.g. "Jan".
    pub name: String,
}

/// Renderer-facing output of the pipeline. Buckets are derived once from the
/// counts and cached here; only the bucket-to-color mapping depends on the
/// theme, so a palette change never needs a rebuild.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ContributionGraph {
    #[serde(serialize_with = "serialize_grid")]
    pub counts: CountGrid,
    #[serde(serialize_with = "serialize_grid")]
    pub dates: DateGrid,
    #[serde(serialize_with = "serialize_grid")]
    pub buckets: BucketGrid,
    pub month_labels: Vec<MonthLabel>,
    /// Passed through from the source document when present; display only.
    pub total: Option<u32>,
}
