// File: crates/heatmap-core/src/export.rs
// Summary: CSV export of the laid-out cell table.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::cell::Cell;

#[derive(Serialize)]
struct CellRow {
    year: i32,
    month: u32,
    variance: f64,
    temperature: f64,
    bucket: u8,
    fill: String,
    x: f64,
    y: f64,
}

impl From<&Cell> for CellRow {
    fn from(c: &Cell) -> Self {
        Self {
            year: c.record.year,
            month: c.record.month,
            variance: c.record.variance,
            temperature: c.temperature,
            bucket: c.bucket.index(),
            fill: c.fill().to_hex(),
            x: c.rect.left,
            y: c.rect.top,
        }
    }
}

/// Write one CSV row per cell (with a header) to `out`.
pub fn write_cells_csv<W: Write>(cells: &[Cell], out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for c in cells {
        wtr.serialize(CellRow::from(c))?;
    }
    wtr.flush()?;
    Ok(())
}
