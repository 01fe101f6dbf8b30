// File: crates/heatmap-core/tests/layout.rs
// Purpose: Canvas size, scale determinism and axis ticks over a full 1753..2015 feed.

use heatmap_core::scale::year_epoch_ms;
use heatmap_core::{build_scales, canvas_size, AnomalyRecord, Dataset, HeatmapChart, Layout, MonthOrder};

fn full_feed() -> Dataset {
    let mut records = Vec::new();
    for year in 1753..=2015 {
        for month in 1..=12 {
            if year == 2015 && month > 9 { break; }
            let variance = ((year * 12 + month as i32) % 17) as f64 * 0.3 - 2.5;
            records.push(AnomalyRecord::new(year, month, variance));
        }
    }
    Dataset::new(8.66, records).expect("valid feed")
}

#[test]
fn canvas_size_of_full_feed() {
    let ds = full_feed();
    assert_eq!(canvas_size(&ds, &Layout::default()), (262 * 5 + 160, 12 * 40 + 160));
}

#[test]
fn size_and_scales_are_deterministic() {
    let ds = full_feed();
    let layout = Layout::default();
    let (w1, h1) = canvas_size(&ds, &layout);
    let (w2, h2) = canvas_size(&ds.clone(), &layout);
    assert_eq!((w1, h1), (w2, h2));

    let a = build_scales(&ds, w1, h1, &layout, MonthOrder::FirstSeen);
    let b = build_scales(&ds, w2, h2, &layout, MonthOrder::FirstSeen);
    assert_eq!(a, b);
    for year in [1753, 1900, 2015] {
        assert_eq!(a.x_for_year(year), b.x_for_year(year));
    }
}

#[test]
fn x_scale_spans_padding_to_padding() {
    let ds = full_feed();
    let layout = Layout::default();
    let (w, h) = canvas_size(&ds, &layout);
    let s = build_scales(&ds, w, h, &layout, MonthOrder::FirstSeen);
    assert_eq!(s.x_for_year(1753), 80.0);
    assert!((s.x_for_year(2015) - (w as f64 - 80.0)).abs() < 1e-9);
    // Years are calendar instants, so leap years stretch slightly.
    let mid = s.x.map(year_epoch_ms(1884));
    assert!(mid > 80.0 && mid < w as f64 - 80.0);
}

#[test]
fn month_bands_follow_first_appearance_unless_calendar() {
    let records = vec![
        AnomalyRecord::new(1900, 3, 0.0),
        AnomalyRecord::new(1900, 1, 0.0),
        AnomalyRecord::new(1900, 2, 0.0),
        AnomalyRecord::new(1901, 3, 0.0),
    ];
    let ds = Dataset::new(8.0, records).unwrap();
    let layout = Layout::default();
    let (w, h) = canvas_size(&ds, &layout);

    let seen = build_scales(&ds, w, h, &layout, MonthOrder::FirstSeen);
    assert_eq!(seen.y.domain(), &[3, 1, 2]);
    assert_eq!(seen.y_for_month(3), 80.0);

    let cal = build_scales(&ds, w, h, &layout, MonthOrder::Calendar);
    assert_eq!(cal.y.domain(), &[1, 2, 3]);
    assert_eq!(cal.y_for_month(3), 160.0);
}

#[test]
fn year_axis_uses_nice_millisecond_ticks() {
    let chart = HeatmapChart::new(full_feed());
    let labels: Vec<&str> = chart.frame().x_axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["1779", "1811", "1843", "1874", "1906", "1938", "1970", "2001"]);

    let months: Vec<&str> = chart.frame().y_axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(months.len(), 12);
    assert_eq!(months[0], "January");
    assert_eq!(months[11], "December");
    assert_eq!(chart.frame().y_axis.ticks[0].pos, 100.0);
}

#[test]
fn degenerate_datasets_do_not_panic() {
    let one = HeatmapChart::new(Dataset::new(8.0, vec![AnomalyRecord::new(1900, 6, 0.0)]).unwrap());
    assert_eq!(one.canvas_size(), (160, 200));
    assert_eq!(one.cells()[0].rect.left, 80.0);
    assert!(!one.render_svg().is_empty());

    let none = HeatmapChart::new(Dataset::new(8.0, Vec::new()).unwrap());
    assert_eq!(none.canvas_size(), (160, 160));
    assert!(none.frame().x_axis.ticks.is_empty());
    assert!(none.render_svg().contains("id=\"legend\""));
}
