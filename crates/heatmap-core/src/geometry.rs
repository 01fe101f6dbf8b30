// File: crates/heatmap-core/src/geometry.rs
// Summary: Canvas sizing and lightweight rectangle helpers for pixel math.

use crate::dataset::Dataset;
use crate::types::Layout;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl RectF {
    pub const fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }

    /// Half-open containment: left/top edges inclusive, right/bottom exclusive.
    /// NaN edges never contain anything.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// Canvas (width, height) for a dataset.
///
/// width  = (maxYear - minYear) * cell_width + 2 * padding
/// height = (maxMonth - minMonth + 1) * cell_height + 2 * padding
///
/// An empty dataset collapses to `2 * padding` on both axes. Spans too wide
/// for a `u32` canvas saturate at `u32::MAX`.
pub fn canvas_size(dataset: &Dataset, layout: &Layout) -> (u32, u32) {
    let pad = 2 * u64::from(layout.padding);
    let width = match dataset.year_extent() {
        Some((lo, hi)) => extent_px(i64::from(hi) - i64::from(lo), layout.cell_width, pad),
        None => pad,
    };
    let height = match dataset.month_extent() {
        Some((lo, hi)) => extent_px(i64::from(hi) - i64::from(lo) + 1, layout.cell_height, pad),
        None => pad,
    };
    (clamp_px(width), clamp_px(height))
}

fn extent_px(count: i64, cell: u32, pad: u64) -> u64 {
    count.unsigned_abs().saturating_mul(u64::from(cell)).saturating_add(pad)
}

fn clamp_px(v: u64) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}
