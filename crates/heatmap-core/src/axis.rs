// File: crates/heatmap-core/src/axis.rs
// Summary: Axis models (placement, domain line, labelled ticks) derived from scales.

use chrono::{DateTime, Utc};

use crate::scale::{Scale, Scales};
use crate::tooltip::month_name;
use crate::types::Layout;

/// Length of tick marks and of the domain path's end caps.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label.
pub const TICK_PADDING: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position along the axis, in the axis group's local coordinates.
    pub pos: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub id: &'static str,
    pub orient: Orient,
    /// Group translation (x, y).
    pub translate: (f64, f64),
    /// Scale range, drawn as the domain line.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Build an axis from any scale, labelling each tick value with `format`.
    pub fn from_scale<S, F>(id: &'static str, orient: Orient, translate: (f64, f64), scale: &S, format: F) -> Self
    where
        S: Scale,
        F: Fn(&S::Value) -> String,
    {
        let offset = scale.tick_offset();
        let ticks = scale
            .tick_values()
            .iter()
            .filter_map(|v| scale.position(v).map(|p| Tick { pos: p + offset, label: format(v) }))
            .collect();
        Self { id, orient, translate, range: scale.range(), ticks }
    }

    /// SVG path for the domain line with outer tick caps.
    pub fn domain_path(&self) -> String {
        let (r0, r1) = self.range;
        match self.orient {
            Orient::Bottom => format!("M{r0},{TICK_SIZE}V0H{r1}V{TICK_SIZE}"),
            Orient::Left => format!("M-{TICK_SIZE},{r0}H0V{r1}H-{TICK_SIZE}"),
        }
    }
}

/// 4-digit UTC year of an epoch-millisecond instant.
pub fn year_label(epoch_ms: f64) -> String {
    if !epoch_ms.is_finite() { return String::new(); }
    DateTime::<Utc>::from_timestamp_millis(epoch_ms as i64)
        .map(|dt| dt.format("%Y").to_string())
        .unwrap_or_default()
}

/// Bottom year axis, placed at the bottom edge of the grid.
pub fn x_axis(scales: &Scales, height: u32, layout: &Layout) -> Axis {
    let y = height as f64 - layout.padding as f64;
    Axis::from_scale("x-axis", Orient::Bottom, (0.0, y), &scales.x, |ms| year_label(*ms))
}

/// Left month axis, one tick per band.
pub fn y_axis(scales: &Scales, layout: &Layout) -> Axis {
    Axis::from_scale("y-axis", Orient::Left, (layout.padding as f64, 0.0), &scales.y, |m| month_name(*m).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{year_epoch_ms, BandScale, LinearScale};

    #[test]
    fn year_labels() {
        assert_eq!(year_label(0.0), "1970");
        assert_eq!(year_label(year_epoch_ms(1753)), "1753");
        assert_eq!(year_label(f64::NAN), "");
    }

    #[test]
    fn band_ticks_sit_at_band_centers() {
        let scales = Scales {
            x: LinearScale::new((0.0, 1.0), (80.0, 100.0)),
            y: BandScale::new([1u32, 2], (80.0, 160.0)),
        };
        let axis = y_axis(&scales, &Layout::default());
        assert_eq!(axis.translate, (80.0, 0.0));
        assert_eq!(axis.ticks, vec![
            Tick { pos: 100.0, label: "January".into() },
            Tick { pos: 140.0, label: "February".into() },
        ]);
        assert_eq!(axis.domain_path(), "M-6,80H0V160H-6");
    }
}
