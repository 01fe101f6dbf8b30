// File: crates/heatmap-core/src/theme.rs
// Summary: Light/Dark theming for the chrome around the cells (background, axes, text).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis: skia::Color,
    pub text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis: skia::Color::from_argb(255, 0, 0, 0),
            text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis: skia::Color::from_argb(255, 180, 180, 190),
            text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// `#rrggbb` for use in SVG/CSS; alpha is dropped.
pub fn css_hex(c: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_and_hex() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("solarized").name, "light");
        assert_eq!(css_hex(Theme::light().background), "#ffffff");
    }
}
