// File: crates/heatmap-core/src/page.rs
// Summary: Standalone HTML page: title, description, the chart SVG, the tooltip element and its pointer wiring.

use crate::svg::escape_xml;
use crate::tooltip::Tooltip;

pub const TITLE: &str = "Monthly Global Land-Surface Temperature";

/// Browser-side mirror of `Tooltip::apply`: enter shows and fills, move repositions, leave hides.
const TOOLTIP_SCRIPT: &str = r#"(function () {
  var tip = document.getElementById("tooltip");
  var months = ["January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December"];
  document.querySelectorAll(".cell").forEach(function (cell) {
    cell.addEventListener("mouseover", function () {
      var temp = Number(cell.getAttribute("data-temp"));
      var variance = Number(cell.getAttribute("data-variance"));
      var year = cell.getAttribute("data-year");
      tip.style.opacity = 1;
      tip.innerHTML = "Year: " + year + "<br>Month: " + months[Number(cell.getAttribute("data-month"))] +
        "<br>Temperature: " + temp.toFixed(1) + " ℃<br>Variance: " + variance.toFixed(1) + " ℃";
      tip.setAttribute("data-year", year);
    });
    cell.addEventListener("mousemove", function (e) {
      tip.style.left = (e.pageX + 20) + "px";
      tip.style.top = e.pageY + "px";
    });
    cell.addEventListener("mouseout", function () {
      tip.style.opacity = 0;
    });
  });
})();"#;

/// Description line under the title; falls back to a bare label without data.
pub fn description(year_extent: Option<(i32, i32)>) -> String {
    match year_extent {
        Some((lo, hi)) => format!("Data from {lo} to {hi}"),
        None => "No data".to_string(),
    }
}

/// Assemble the page around an already rendered `<svg>` element.
pub fn render_page(svg: &str, description: &str, tooltip: &Tooltip) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<div id=\"app\">\n<h1 id=\"title\">{title}</h1>\n<p id=\"description\">{desc}</p>\n{svg}{tip}\n</div>\n<script>\n{script}\n</script>\n</body>\n</html>\n",
        title = TITLE,
        desc = escape_xml(description),
        svg = svg,
        tip = tooltip.to_html(),
        script = TOOLTIP_SCRIPT,
    )
}
