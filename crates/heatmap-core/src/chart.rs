// File: crates/heatmap-core/src/chart.rs
// Summary: HeatmapChart: one-shot layout of a dataset plus SVG/HTML emission and a headless Skia raster pipeline.

use anyhow::Result;
use log::{debug, warn};
use skia_safe as skia;

use crate::axis::{self, Axis, Orient, TICK_PADDING, TICK_SIZE};
use crate::cell::{layout_cells, Cell};
use crate::dataset::Dataset;
use crate::geometry::canvas_size;
use crate::legend::Legend;
use crate::page;
use crate::scale::{build_scales, Scales};
use crate::svg::{self, SvgDocument};
use crate::text::{TextAnchor, TextShaper};
use crate::theme::Theme;
use crate::tooltip::Tooltip;
use crate::types::{Layout, MonthOrder};

#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    pub layout: Layout,
    pub month_order: MonthOrder,
    pub theme: Theme,
    /// Raster output only; SVG always carries its text. Off gives font-independent pixels.
    pub draw_labels: bool,
}

/// Everything derived from the dataset in a single layout pass. Fixed for the chart's lifetime.
#[derive(Clone, Debug)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub scales: Scales,
    pub cells: Vec<Cell>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Legend,
}

impl Frame {
    pub fn compute(dataset: &Dataset, opts: &RenderOptions) -> Self {
        let layout = &opts.layout;
        let (width, height) = canvas_size(dataset, layout);
        let scales = build_scales(dataset, width, height, layout, opts.month_order);
        let cells = layout_cells(dataset, &scales, layout);
        let nan = cells.iter().filter(|c| c.temperature.is_nan()).count();
        if nan > 0 {
            warn!("{nan} of {} records have a NaN temperature", cells.len());
        }
        let x_axis = axis::x_axis(&scales, height, layout);
        let y_axis = axis::y_axis(&scales, layout);
        let legend = Legend::new(height);
        debug!("frame {width}x{height}: {} cells, {} year ticks", cells.len(), x_axis.ticks.len());
        Self { width, height, scales, cells, x_axis, y_axis, legend }
    }
}

pub struct HeatmapChart {
    dataset: Dataset,
    options: RenderOptions,
    frame: Frame,
}

impl HeatmapChart {
    pub fn new(dataset: Dataset) -> Self {
        Self::with_options(dataset, RenderOptions::default())
    }

    pub fn with_options(dataset: Dataset, options: RenderOptions) -> Self {
        let frame = Frame::compute(&dataset, &options);
        Self { dataset, options, frame }
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn options(&self) -> &RenderOptions { &self.options }
    pub fn frame(&self) -> &Frame { &self.frame }
    pub fn cells(&self) -> &[Cell] { &self.frame.cells }
    pub fn canvas_size(&self) -> (u32, u32) { (self.frame.width, self.frame.height) }

    /// Topmost cell under a point (later records are drawn over earlier ones).
    pub fn cell_at(&self, x: f64, y: f64) -> Option<&Cell> {
        self.frame.cells.iter().rev().find(|c| c.rect.contains(x, y))
    }

    /// The chart as an `<svg>` element.
    pub fn render_svg(&self) -> String {
        let f = &self.frame;
        let mut doc = SvgDocument::new(f.width, f.height);
        svg::render_cells(&mut doc, &f.cells);
        svg::render_axes(&mut doc, &f.x_axis, &f.y_axis);
        svg::render_caption(&mut doc);
        svg::render_legend(&mut doc, &f.legend);
        doc.finish(&self.options.theme)
    }

    /// Standalone HTML page with the chart and a hidden tooltip.
    pub fn render_page(&self) -> String {
        let description = page::description(self.dataset.year_extent());
        page::render_page(&self.render_svg(), &description, &Tooltip::new())
    }

    pub fn render_to_svg(&self, output_path: impl AsRef<std::path::Path>) -> Result<()> {
        let doc = format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}", self.render_svg());
        write_file(output_path.as_ref(), doc.as_bytes())
    }

    pub fn render_to_html(&self, output_path: impl AsRef<std::path::Path>) -> Result<()> {
        write_file(output_path.as_ref(), self.render_page().as_bytes())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes()?;
        write_file(output_png_path.as_ref(), &bytes)
    }

    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut surface = self.raster_surface()?;
        self.paint(surface.canvas());

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA8 pixels: (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.raster_surface()?;
        self.paint(surface.canvas());

        let (w, h) = self.canvas_size();
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} pixels failed");
        }
        Ok((pixels, w, h, stride))
    }

    fn raster_surface(&self) -> Result<skia::Surface> {
        let (w, h) = self.canvas_size();
        skia::surfaces::raster_n32_premul((w as i32, h as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))
    }

    fn paint(&self, canvas: &skia::Canvas) {
        let theme = &self.options.theme;
        canvas.clear(theme.background);

        draw_cells(canvas, &self.frame.cells);
        draw_legend(canvas, &self.frame.legend);

        let shaper = self.options.draw_labels.then(TextShaper::new);
        draw_axis(canvas, &self.frame.x_axis, theme, shaper.as_ref());
        draw_axis(canvas, &self.frame.y_axis, theme, shaper.as_ref());
        if let Some(shaper) = &shaper {
            let (w, h) = self.canvas_size();
            shaper.draw(canvas, "Year", w as f32 / 2.0, h as f32, 14.0, theme.text, TextAnchor::Start);
            for l in &self.frame.legend.labels {
                shaper.draw(canvas, l.text, l.x as f32, l.y as f32, 12.0, theme.text, TextAnchor::Start);
            }
        }
    }
}

fn write_file(path: &std::path::Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

// ---- raster helpers ---------------------------------------------------------

fn fill_paint(c: crate::color::Rgb) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(skia::Color::from_argb(255, c.r, c.g, c.b));
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn draw_cells(canvas: &skia::Canvas, cells: &[Cell]) {
    for c in cells {
        let r = &c.rect;
        if !(r.left.is_finite() && r.top.is_finite()) { continue; }
        let rect = skia::Rect::from_xywh(r.left as f32, r.top as f32, r.width() as f32, r.height() as f32);
        canvas.draw_rect(rect, &fill_paint(c.fill()));
    }
}

fn draw_legend(canvas: &skia::Canvas, legend: &Legend) {
    for s in &legend.swatches {
        let rect = skia::Rect::from_xywh(s.x as f32, s.y as f32, s.size as f32, s.size as f32);
        canvas.draw_rect(rect, &fill_paint(s.color));
    }
}

fn draw_axis(canvas: &skia::Canvas, axis: &Axis, theme: &Theme, shaper: Option<&TextShaper>) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (tx, ty) = (axis.translate.0 as f32, axis.translate.1 as f32);
    let (r0, r1) = (axis.range.0 as f32, axis.range.1 as f32);
    let tick = TICK_SIZE as f32;
    let gap = (TICK_SIZE + TICK_PADDING) as f32;
    match axis.orient {
        Orient::Bottom => {
            canvas.draw_line((tx + r0, ty), (tx + r1, ty), &paint);
            for t in &axis.ticks {
                let x = tx + t.pos as f32;
                canvas.draw_line((x, ty), (x, ty + tick), &paint);
                if let Some(s) = shaper {
                    s.draw(canvas, &t.label, x, ty + gap + 10.0, 10.0, theme.text, TextAnchor::Middle);
                }
            }
        }
        Orient::Left => {
            canvas.draw_line((tx, ty + r0), (tx, ty + r1), &paint);
            for t in &axis.ticks {
                let y = ty + t.pos as f32;
                canvas.draw_line((tx - tick, y), (tx, y), &paint);
                if let Some(s) = shaper {
                    s.draw(canvas, &t.label, tx - gap, y + 3.5, 10.0, theme.text, TextAnchor::End);
                }
            }
        }
    }
}
