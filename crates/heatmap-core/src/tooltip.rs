// File: crates/heatmap-core/src/tooltip.rs
// Summary: Pointer-driven tooltip as an explicit Hidden/Visible state machine.

use chrono::Month;

use crate::cell::Cell;
use crate::types::TOOLTIP_OFFSET_X;

/// Pointer input in page coordinates.
#[derive(Clone, Copy, Debug)]
pub enum PointerEvent<'a> {
    Enter(&'a Cell),
    Move { page_x: f64, page_y: f64 },
    Leave,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
    pub visibility: Visibility,
    /// (left, top) in pixels; unset until the first move.
    pub position: Option<(f64, f64)>,
    pub html: String,
    /// Year of the most recently entered cell.
    pub data_year: Option<i32>,
}

impl TooltipState {
    pub fn opacity(&self) -> u8 {
        match self.visibility {
            Visibility::Hidden => 0,
            Visibility::Visible => 1,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Tooltip {
    state: TooltipState,
}

impl Tooltip {
    pub fn new() -> Self { Self::default() }

    pub fn state(&self) -> &TooltipState { &self.state }

    pub fn is_visible(&self) -> bool { self.state.visibility == Visibility::Visible }

    /// Apply one pointer event. Leaving keeps content and position, only opacity drops.
    pub fn apply(&mut self, event: PointerEvent<'_>) -> &TooltipState {
        match event {
            PointerEvent::Enter(cell) => {
                self.state.visibility = Visibility::Visible;
                self.state.html = tooltip_text(cell);
                self.state.data_year = Some(cell.record.year);
            }
            PointerEvent::Move { page_x, page_y } => {
                self.state.position = Some((page_x + TOOLTIP_OFFSET_X, page_y));
            }
            PointerEvent::Leave => {
                self.state.visibility = Visibility::Hidden;
            }
        }
        &self.state
    }

    /// The floating `#tooltip` element for the current state.
    pub fn to_html(&self) -> String {
        let s = &self.state;
        let mut style = format!("position: absolute; opacity: {};", s.opacity());
        if let Some((left, top)) = s.position {
            style.push_str(&format!(" left: {left}px; top: {top}px;"));
        }
        let year = s.data_year.map(|y| format!(" data-year=\"{y}\"")).unwrap_or_default();
        format!("<div id=\"tooltip\"{year} style=\"{style}\">{}</div>", s.html)
    }
}

/// Full English month name for a 1-based month; empty when out of range.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

/// One decimal place, rounding exact ties away from zero and printing zero unsigned,
/// so the text matches the page's `Number.prototype.toFixed(1)`.
pub fn to_fixed_1(v: f64) -> String {
    if v == 0.0 {
        return "0.0".to_string();
    }
    // Only quarters (x.25, x.75) sit exactly halfway between two tenths.
    let quarters = v * 4.0;
    if v.abs() < 1e15 && quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let tenths = (v.abs() * 10.0).ceil() as u64;
        let sign = if v < 0.0 { "-" } else { "" };
        return format!("{sign}{}.{}", tenths / 10, tenths % 10);
    }
    format!("{v:.1}")
}

/// Tooltip body for a cell: year, month name, temperature and variance to one decimal.
pub fn tooltip_text(cell: &Cell) -> String {
    format!(
        "Year: {}<br>Month: {}<br>Temperature: {} ℃<br>Variance: {} ℃",
        cell.record.year,
        month_name(cell.record.month),
        to_fixed_1(cell.temperature),
        to_fixed_1(cell.record.variance),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(300), "");
    }

    #[test]
    fn one_decimal_matches_to_fixed() {
        assert_eq!(to_fixed_1(0.25), "0.3");
        assert_eq!(to_fixed_1(-0.25), "-0.3");
        assert_eq!(to_fixed_1(8.25), "8.3");
        assert_eq!(to_fixed_1(0.75), "0.8");
        assert_eq!(to_fixed_1(-2.75), "-2.8");
        assert_eq!(to_fixed_1(0.35), "0.3");
        assert_eq!(to_fixed_1(-3.85), "-3.9");
        assert_eq!(to_fixed_1(6.5), "6.5");
        assert_eq!(to_fixed_1(-1.5), "-1.5");
        assert_eq!(to_fixed_1(11.0), "11.0");
        assert_eq!(to_fixed_1(-0.0), "0.0");
        assert_eq!(to_fixed_1(-0.04), "-0.0");
        assert_eq!(to_fixed_1(f64::NAN), "NaN");
    }

    #[test]
    fn initial_state_is_hidden_without_position() {
        let t = Tooltip::new();
        assert!(!t.is_visible());
        assert_eq!(t.to_html(), "<div id=\"tooltip\" style=\"position: absolute; opacity: 0;\"></div>");
    }
}
