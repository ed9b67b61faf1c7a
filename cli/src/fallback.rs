use rand::Rng;
use streakmap_core::{BucketGrid, GRID_COLS, GRID_ROWS};

/// Non-semantic placeholder grid used when no contribution data could be
/// loaded; purely decorative, re-rolled on every run.
pub fn decorative_buckets() -> BucketGrid {
    let mut rng = rand::thread_rng();
    let mut buckets: BucketGrid = [[0; GRID_ROWS]; GRID_COLS];
    for column in buckets.iter_mut() {
        for cell in column.iter_mut() {
            *cell = rng.gen_range(0..5);
        }
    }
    buckets
}
