use chrono::NaiveDate;

/// One column per ISO week, 53 columns covering roughly a year.
pub const GRID_COLS: usize = 53;
/// One row per weekday, 0=Monday .. 6=Sunday.
pub const GRID_ROWS: usize = 7;

/// Per-day activity counts. The shape is always exactly 53x7; days missing
/// from the input stay at 0.
pub type CountGrid = [[u32; GRID_ROWS]; GRID_COLS];

/// Calendar date assigned to each cell, None for cells with no known date.
pub type DateGrid = [[Option<NaiveDate>; GRID_ROWS]; GRID_COLS];

/// Display level per cell, always in 0..=4.
pub type BucketGrid = [[u8; GRID_ROWS]; GRID_COLS];

pub fn empty_counts() -> CountGrid {
    [[0; GRID_ROWS]; GRID_COLS]
}

pub fn empty_dates() -> DateGrid {
    [[None; GRID_ROWS]; GRID_COLS]
}

/// Classify a daily count into a display bucket. Fixed thresholds, not
/// adaptive to the data distribution.
pub fn bucket_for(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=15 => 3,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_thresholds() {
        assert_eq!(bucket_for(0), 0);
        assert_eq!(bucket_for(1), 1);
        assert_eq!(bucket_for(2), 1);
        assert_eq!(bucket_for(3), 2);
        assert_eq!(bucket_for(5), 2);
        assert_eq!(bucket_for(6), 3);
        assert_eq!(bucket_for(15), 3);
        assert_eq!(bucket_for(16), 4);
        assert_eq!(bucket_for(1000), 4);
    }
}
