// File: crates/heatmap-core/src/types.rs
// Summary: Shared types and constants (cell sizes, padding, legend placement).

/// Margin around the cell grid on every side, in pixels.
pub const PADDING: u32 = 80;
/// Width of one year column, in pixels.
pub const CELL_WIDTH: u32 = 5;
/// Height of one month row, in pixels.
pub const CELL_HEIGHT: u32 = 40;

/// Legend swatch edge length.
pub const LEGEND_SWATCH: u32 = 20;
/// X of the first legend swatch/label.
pub const LEGEND_X0: u32 = 200;
/// Horizontal step between legend entries.
pub const LEGEND_STEP: u32 = 40;
/// Swatch row sits this far above the bottom edge.
pub const LEGEND_SWATCH_RISE: u32 = 50;
/// Label row sits this far above the bottom edge.
pub const LEGEND_LABEL_RISE: u32 = 10;

/// Tooltip offset to the right of the pointer.
pub const TOOLTIP_OFFSET_X: f64 = 20.0;

/// Fixed geometry parameters of the heatmap.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub padding: u32,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl Layout {
    pub const fn new(padding: u32, cell_width: u32, cell_height: u32) -> Self {
        Self { padding, cell_width, cell_height }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(PADDING, CELL_WIDTH, CELL_HEIGHT)
    }
}

/// How the vertical band scale orders its month domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MonthOrder {
    /// Months in order of first appearance in the feed.
    #[default]
    FirstSeen,
    /// Months sorted January..December.
    Calendar,
}
