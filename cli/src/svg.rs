use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use streakmap_core::{BucketGrid, ContributionGraph, Theme, GRID_COLS, GRID_ROWS};

use crate::fallback::decorative_buckets;

const CELL_SIZE: u32 = 10;
const CELL_GAP: u32 = 2;

/// Write the grid as rounded 10x10 rects with a 2px gap, colored by bucket
/// through the theme palette. Without data the decorative grid is written
/// instead.
pub fn export(graph: Option<&ContributionGraph>, theme: Theme, out: &Path) -> Result<()> {
    let buckets: BucketGrid = match graph {
        Some(g) => g.buckets,
        None => decorative_buckets(),
    };
    let palette = theme.palette();

    let width = GRID_COLS as u32 * (CELL_SIZE + CELL_GAP) - CELL_GAP;
    let height = GRID_ROWS as u32 * (CELL_SIZE + CELL_GAP) - CELL_GAP;

    let file = File::create(out)?;
    let mut w = BufWriter::new(file);
    writeln!(
        w,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;
    for (column, rows) in buckets.iter().enumerate() {
        for (row, level) in rows.iter().enumerate() {
            let x = column as u32 * (CELL_SIZE + CELL_GAP);
            let y = row as u32 * (CELL_SIZE + CELL_GAP);
            let fill = palette.buckets[(*level as usize).min(4)];
            writeln!(
                w,
                r#"  <rect x="{x}" y="{y}" width="{CELL_SIZE}" height="{CELL_SIZE}" rx="2" fill="{fill}"/>"#
            )?;
        }
    }
    writeln!(w, "</svg>")?;
    w.flush()?;

    println!("Wrote {}", out.display());
    Ok(())
}
