// File: crates/heatmap-core/src/lib.rs
// Summary: Core library entry point; dataset model, layout and rendering of the monthly anomaly heatmap.

pub mod axis;
pub mod cell;
pub mod chart;
pub mod color;
pub mod dataset;
pub mod error;
pub mod export;
pub mod geometry;
pub mod legend;
pub mod page;
pub mod scale;
pub mod svg;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod tooltip;
pub mod types;

pub use axis::Axis;
pub use cell::Cell;
pub use chart::{Frame, HeatmapChart, RenderOptions};
pub use color::{bucket_for, color_for, ColorBucket, Rgb};
pub use dataset::{AnomalyRecord, Dataset};
pub use error::DatasetError;
pub use export::write_cells_csv;
pub use geometry::canvas_size;
pub use legend::Legend;
pub use scale::{build_scales, BandScale, LinearScale, Scale, Scales};
pub use theme::Theme;
pub use tooltip::{PointerEvent, Tooltip, TooltipState, Visibility};
pub use types::{Layout, MonthOrder};
