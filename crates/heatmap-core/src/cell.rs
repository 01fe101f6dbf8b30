// File: crates/heatmap-core/src/cell.rs
// Summary: Per-record cell geometry and color, computed once per render.

use crate::color::{bucket_for, ColorBucket, Rgb};
use crate::dataset::{AnomalyRecord, Dataset};
use crate::geometry::RectF;
use crate::scale::Scales;
use crate::types::Layout;

/// One laid-out heatmap rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub record: AnomalyRecord,
    /// Absolute temperature (base + variance).
    pub temperature: f64,
    pub rect: RectF,
    pub bucket: ColorBucket,
}

impl Cell {
    pub fn fill(&self) -> Rgb { self.bucket.color() }

    /// 0-based month, as exposed in `data-month`.
    pub fn data_month(&self) -> u32 { self.record.month - 1 }
}

/// Lay out every record in feed order; one cell per record, nothing dropped.
pub fn layout_cells(dataset: &Dataset, scales: &Scales, layout: &Layout) -> Vec<Cell> {
    dataset
        .records
        .iter()
        .map(|r| {
            let temperature = dataset.temperature_of(r);
            Cell {
                record: *r,
                temperature,
                rect: RectF::from_ltwh(
                    scales.x_for_year(r.year),
                    scales.y_for_month(r.month),
                    layout.cell_width as f64,
                    layout.cell_height as f64,
                ),
                bucket: bucket_for(temperature),
            }
        })
        .collect()
}
