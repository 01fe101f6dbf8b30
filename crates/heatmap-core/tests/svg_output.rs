// File: crates/heatmap-core/tests/svg_output.rs
// Purpose: The emitted SVG/HTML honours the element contract (cells, attributes, axes, legend, tooltip).

use heatmap_core::{AnomalyRecord, Dataset, HeatmapChart};

fn dataset() -> Dataset {
    let mut records = Vec::new();
    for year in 1850..1860 {
        for month in 1..=12u32 {
            records.push(AnomalyRecord::new(year, month, (month as f64 - 6.5) * 0.9 - (year - 1850) as f64 * 0.11));
        }
    }
    // A duplicate draws a second, overlapping cell.
    records.push(AnomalyRecord::new(1855, 7, 3.3));
    Dataset::new(8.66, records).unwrap()
}

fn attr<'a>(element: &'a str, name: &str) -> Option<&'a str> {
    let key = format!(" {name}=\"");
    let start = element.find(&key)? + key.len();
    let len = element[start..].find('"')?;
    Some(&element[start..start + len])
}

fn cell_elements(svg: &str) -> Vec<&str> {
    svg.lines().filter(|l| l.contains("class=\"cell\"")).collect()
}

#[test]
fn one_cell_per_record() {
    let ds = dataset();
    let svg = HeatmapChart::new(ds.clone()).render_svg();
    assert_eq!(cell_elements(&svg).len(), ds.len());
    assert_eq!(ds.len(), 121);
}

#[test]
fn cell_attributes_round_trip() {
    let ds = dataset();
    let svg = HeatmapChart::new(ds.clone()).render_svg();
    let cells = cell_elements(&svg);
    for (rec, el) in ds.records.iter().zip(cells) {
        assert_eq!(attr(el, "data-year"), Some(rec.year.to_string().as_str()));
        assert_eq!(attr(el, "data-month"), Some((rec.month - 1).to_string().as_str()));
        let temp: f64 = attr(el, "data-temp").unwrap().parse().unwrap();
        assert!((temp - (ds.base_temperature + rec.variance)).abs() < 1e-9);
        let variance: f64 = attr(el, "data-variance").unwrap().parse().unwrap();
        assert_eq!(variance, rec.variance);
        assert_eq!(attr(el, "width"), Some("5"));
        assert_eq!(attr(el, "height"), Some("40"));
        assert!(attr(el, "fill").unwrap().starts_with("rgb("));
    }
}

#[test]
fn variance_is_emitted_exactly_not_derived_from_temperature() {
    let ds = Dataset::new(8.66, vec![AnomalyRecord::new(1900, 1, -3.85), AnomalyRecord::new(1900, 2, -2.85)]).unwrap();
    let svg = HeatmapChart::new(ds).render_svg();
    let cells = cell_elements(&svg);
    assert_eq!(attr(cells[0], "data-variance"), Some("-3.85"));
    assert_eq!(attr(cells[1], "data-variance"), Some("-2.85"));
}

#[test]
fn cells_are_placed_by_scales() {
    let ds = dataset();
    let chart = HeatmapChart::new(ds);
    let svg = chart.render_svg();
    let first = cell_elements(&svg)[0];
    assert_eq!(attr(first, "x"), Some("80"));
    assert_eq!(attr(first, "y"), Some("80"));
    let (w, h) = chart.canvas_size();
    assert_eq!((w, h), (9 * 5 + 160, 12 * 40 + 160));
    assert!(svg.starts_with(&format!("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\"")));
}

#[test]
fn axes_and_legend_groups() {
    let chart = HeatmapChart::new(dataset());
    let svg = chart.render_svg();
    let (_, h) = chart.canvas_size();
    assert!(svg.contains(&format!("<g id=\"x-axis\" transform=\"translate(0, {})\"", h - 80)));
    assert!(svg.contains("<g id=\"y-axis\" transform=\"translate(80, 0)\""));
    assert_eq!(svg.matches(">January</text>").count(), 1);
    assert!(svg.contains(">Year</text>"));

    let legend = &svg[svg.find("<g id=\"legend\">").expect("legend group")..];
    assert_eq!(legend.matches("<rect ").count(), 7);
    assert_eq!(legend.matches("<text ").count(), 8);
    assert!(legend.contains(&format!("<rect x=\"200\" y=\"{}\" width=\"20\" height=\"20\" style=\"fill: rgb(49, 54, 149);\"/>", h - 50)));
}

#[test]
fn legend_is_independent_of_data() {
    let small = HeatmapChart::new(Dataset::new(8.0, vec![AnomalyRecord::new(1900, 1, 0.0)]).unwrap());
    let svg = small.render_svg();
    let legend = &svg[svg.find("<g id=\"legend\">").unwrap()..];
    assert_eq!(legend.matches("<rect ").count(), 7);
}

#[test]
fn page_contains_every_contract_id() {
    let html = HeatmapChart::new(dataset()).render_page();
    for needle in [
        "id=\"title\"",
        "id=\"description\">Data from 1850 to 1859<",
        "class=\"cell\"",
        "id=\"x-axis\"",
        "id=\"y-axis\"",
        "id=\"legend\"",
        "id=\"tooltip\"",
    ] {
        assert!(html.contains(needle), "missing {needle}");
    }
}
