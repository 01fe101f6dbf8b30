// File: crates/heatmap-core/src/svg.rs
// Summary: SVG emission for cells, axes, caption and legend into an explicit render target.

use crate::axis::{Axis, Orient, TICK_PADDING, TICK_SIZE};
use crate::cell::Cell;
use crate::legend::Legend;
use crate::text::TextAnchor;
use crate::theme::{css_hex, Theme};

/// An SVG element under construction. Rendering functions append to it; nothing is global.
pub struct SvgDocument {
    width: u32,
    height: u32,
    body: String,
}

impl SvgDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, body: String::new() }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    fn push(&mut self, s: &str) {
        self.body.push_str(s);
    }

    /// Close the document and return the `<svg>` element.
    pub fn finish(self, theme: &Theme) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" style=\"background: {}; color: {};\">\n{}</svg>\n",
            self.width,
            self.height,
            css_hex(theme.background),
            css_hex(theme.axis),
            self.body
        )
    }
}

pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// One `rect.cell` per cell, in feed order.
pub fn render_cells(doc: &mut SvgDocument, cells: &[Cell]) {
    for c in cells {
        doc.push(&format!(
            "  <rect class=\"cell\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" data-month=\"{}\" data-year=\"{}\" data-temp=\"{}\" data-variance=\"{}\" fill=\"{}\"/>\n",
            c.rect.left,
            c.rect.top,
            c.rect.width(),
            c.rect.height(),
            c.data_month(),
            c.record.year,
            c.temperature,
            c.record.variance,
            c.fill(),
        ));
    }
}

pub fn render_axis(doc: &mut SvgDocument, axis: &Axis) {
    let (tx, ty) = axis.translate;
    let anchor = match axis.orient {
        Orient::Bottom => TextAnchor::Middle,
        Orient::Left => TextAnchor::End,
    };
    doc.push(&format!(
        "  <g id=\"{}\" transform=\"translate({tx}, {ty})\" fill=\"none\" font-size=\"10\" font-family=\"sans-serif\" text-anchor=\"{}\">\n",
        axis.id,
        anchor.as_svg()
    ));
    doc.push(&format!("    <path class=\"domain\" stroke=\"currentColor\" d=\"{}\"/>\n", axis.domain_path()));
    let gap = TICK_SIZE + TICK_PADDING;
    for t in &axis.ticks {
        let label = escape_xml(&t.label);
        let tick = match axis.orient {
            Orient::Bottom => format!(
                "    <g class=\"tick\" opacity=\"1\" transform=\"translate({},0)\"><line stroke=\"currentColor\" y2=\"{TICK_SIZE}\"/><text fill=\"currentColor\" y=\"{gap}\" dy=\"0.71em\">{label}</text></g>\n",
                t.pos
            ),
            Orient::Left => format!(
                "    <g class=\"tick\" opacity=\"1\" transform=\"translate(0,{})\"><line stroke=\"currentColor\" x2=\"-{TICK_SIZE}\"/><text fill=\"currentColor\" x=\"-{gap}\" dy=\"0.32em\">{label}</text></g>\n",
                t.pos
            ),
        };
        doc.push(&tick);
    }
    doc.push("  </g>\n");
}

pub fn render_axes(doc: &mut SvgDocument, x_axis: &Axis, y_axis: &Axis) {
    render_axis(doc, x_axis);
    render_axis(doc, y_axis);
}

/// "Year" caption centered under the grid.
pub fn render_caption(doc: &mut SvgDocument) {
    let (w, h) = (doc.width, doc.height);
    doc.push(&format!("  <text x=\"{}\" y=\"{h}\" fill=\"currentColor\">Year</text>\n", w as f64 / 2.0));
}

pub fn render_legend(doc: &mut SvgDocument, legend: &Legend) {
    doc.push("  <g id=\"legend\">\n    <g>\n");
    for s in &legend.swatches {
        doc.push(&format!(
            "      <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" style=\"fill: {};\"/>\n",
            s.x, s.y, s.size, s.size, s.color
        ));
    }
    doc.push("    </g>\n    <g>\n");
    for l in &legend.labels {
        doc.push(&format!(
            "      <text x=\"{}\" y=\"{}\" fill=\"currentColor\">{}</text>\n",
            l.x,
            l.y,
            escape_xml(l.text)
        ));
    }
    doc.push("    </g>\n  </g>\n");
}
