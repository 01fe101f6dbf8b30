// File: crates/heatmap-core/src/legend.rs
// Summary: Static color legend: 7 bucket swatches and their threshold labels.

use crate::color::{ColorBucket, Rgb};
use crate::types::{LEGEND_LABEL_RISE, LEGEND_STEP, LEGEND_SWATCH, LEGEND_SWATCH_RISE, LEGEND_X0};

/// Label row. One more entry than there are swatches: the trailing unit sits after the last swatch.
pub const LEGEND_LABELS: [&str; 8] = ["<2", "<4", "<6", "<8", "<10", "<12", ">12", "℃"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swatch {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLabel {
    pub x: f64,
    pub y: f64,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub swatches: Vec<Swatch>,
    pub labels: Vec<LegendLabel>,
}

impl Legend {
    /// Legend for a canvas of the given height. Content never depends on the dataset.
    pub fn new(height: u32) -> Self {
        let h = height as f64;
        let x_at = |i: usize| (LEGEND_X0 + i as u32 * LEGEND_STEP) as f64;
        let swatches = ColorBucket::coldest_first()
            .enumerate()
            .map(|(i, b)| Swatch {
                x: x_at(i),
                y: h - LEGEND_SWATCH_RISE as f64,
                size: LEGEND_SWATCH as f64,
                color: b.color(),
            })
            .collect();
        let labels = LEGEND_LABELS
            .iter()
            .enumerate()
            .map(|(i, &text)| LegendLabel { x: x_at(i), y: h - LEGEND_LABEL_RISE as f64, text })
            .collect();
        Self { swatches, labels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement() {
        let legend = Legend::new(640);
        assert_eq!(legend.swatches.len(), 7);
        assert_eq!(legend.labels.len(), 8);
        assert_eq!((legend.swatches[0].x, legend.swatches[0].y), (200.0, 590.0));
        assert_eq!(legend.swatches[6].x, 440.0);
        assert_eq!(legend.swatches[0].color, ColorBucket::COLDEST.color());
        assert_eq!(legend.swatches[6].color, ColorBucket::HOTTEST.color());
        assert_eq!((legend.labels[7].x, legend.labels[7].y, legend.labels[7].text), (480.0, 630.0, "℃"));
    }
}
