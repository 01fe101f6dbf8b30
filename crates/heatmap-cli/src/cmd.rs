// File: crates/heatmap-cli/src/cmd.rs
// Summary: Subcommands: render artifacts to disk, or inspect the tooltip under a point.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Subcommand, ValueEnum};
use heatmap_core::{theme, Dataset, HeatmapChart, MonthOrder, PointerEvent, RenderOptions, Tooltip};
use log::info;

use crate::fetch::{fetch_dataset, read_dataset, DEFAULT_URL};

#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Dataset URL (ignored when --input is given)
    #[arg(long, env = "HEATMAP_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Read the dataset from a local JSON file instead of fetching it
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Order of the month rows
    #[arg(long, value_enum, default_value_t = MonthOrderArg::FirstSeen)]
    pub month_order: MonthOrderArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MonthOrderArg {
    /// Order in which months first appear in the feed
    FirstSeen,
    /// January to December
    Calendar,
}

impl From<MonthOrderArg> for MonthOrder {
    fn from(v: MonthOrderArg) -> Self {
        match v {
            MonthOrderArg::FirstSeen => MonthOrder::FirstSeen,
            MonthOrderArg::Calendar => MonthOrder::Calendar,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the heatmap page (and optionally SVG, PNG and a cell CSV)
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory
        #[arg(short, long, default_value = "target/out")]
        out: PathBuf,

        /// Also write heatmap.svg
        #[arg(long)]
        svg: bool,

        /// Also write heatmap.png
        #[arg(long)]
        png: bool,

        /// Also write cells.csv
        #[arg(long)]
        csv: bool,

        /// Draw text labels in the PNG
        #[arg(long)]
        labels: bool,

        /// Color theme for background and axes (light, dark)
        #[arg(long, default_value = "light")]
        theme: String,
    },

    /// Print the tooltip shown when the pointer rests at (x, y)
    Inspect {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long, allow_hyphen_values = true)]
        x: f64,

        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
}

async fn load(source: &SourceArgs) -> anyhow::Result<Dataset> {
    match &source.input {
        Some(path) => read_dataset(path).with_context(|| format!("failed to load '{}'", path.display())),
        None => {
            let client = reqwest::Client::new();
            fetch_dataset(&client, &source.url)
                .await
                .with_context(|| format!("failed to fetch '{}'", source.url))
        }
    }
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render { source, out, svg, png, csv, labels, theme: theme_name } => {
            let dataset = load(&source).await?;
            let opts = RenderOptions {
                month_order: source.month_order.into(),
                theme: theme::find(&theme_name),
                draw_labels: labels,
                ..RenderOptions::default()
            };
            let chart = HeatmapChart::with_options(dataset, opts);
            render(&chart, &out, svg, png, csv)
        }
        Command::Inspect { source, x, y } => {
            let dataset = load(&source).await?;
            let opts = RenderOptions { month_order: source.month_order.into(), ..RenderOptions::default() };
            let chart = HeatmapChart::with_options(dataset, opts);
            println!("{}", inspect(&chart, x, y));
            Ok(())
        }
    }
}

fn render(chart: &HeatmapChart, out: &std::path::Path, svg: bool, png: bool, csv: bool) -> anyhow::Result<()> {
    let (w, h) = chart.canvas_size();
    info!("Canvas {w}x{h}, {} cells", chart.cells().len());

    let html = out.join("heatmap.html");
    chart.render_to_html(&html).with_context(|| format!("writing {}", html.display()))?;
    info!("Wrote {}", html.display());

    if svg {
        let path = out.join("heatmap.svg");
        chart.render_to_svg(&path).with_context(|| format!("writing {}", path.display()))?;
        info!("Wrote {}", path.display());
    }
    if png {
        let path = out.join("heatmap.png");
        chart.render_to_png(&path).with_context(|| format!("writing {}", path.display()))?;
        info!("Wrote {}", path.display());
    }
    if csv {
        let path = out.join("cells.csv");
        let file = std::fs::File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        heatmap_core::write_cells_csv(chart.cells(), file)?;
        info!("Wrote {}", path.display());
    }
    Ok(())
}

/// Replay enter + move at (x, y) and return the resulting tooltip element.
fn inspect(chart: &HeatmapChart, x: f64, y: f64) -> String {
    let mut tooltip = Tooltip::new();
    match chart.cell_at(x, y) {
        Some(cell) => {
            tooltip.apply(PointerEvent::Enter(cell));
            tooltip.apply(PointerEvent::Move { page_x: x, page_y: y });
        }
        None => info!("No cell at ({x}, {y})"),
    }
    tooltip.to_html()
}
