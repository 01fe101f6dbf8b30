// File: crates/heatmap-core/src/color.rs
// Summary: RdYlBu diverging color ramp and the 7-bucket temperature step function.

use std::fmt;

/// 8-bit sRGB color, serialized as `rgb(r, g, b)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// ColorBrewer RdYlBu, 11 classes, red (t = 0) to blue (t = 1).
const RD_YL_BU: [Rgb; 11] = [
    Rgb::from_hex(0xa50026),
    Rgb::from_hex(0xd73027),
    Rgb::from_hex(0xf46d43),
    Rgb::from_hex(0xfdae61),
    Rgb::from_hex(0xfee090),
    Rgb::from_hex(0xffffbf),
    Rgb::from_hex(0xe0f3f8),
    Rgb::from_hex(0xabd9e9),
    Rgb::from_hex(0x74add1),
    Rgb::from_hex(0x4575b4),
    Rgb::from_hex(0x313695),
];

/// Uniform cubic B-spline weight for segment-local parameter `t1`.
fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

/// B-spline through `values`, sampled at `t` in [0, 1]; endpoints are interpolated exactly.
fn spline(values: &[f64], t: f64) -> f64 {
    let n = values.len() - 1;
    let (t, i) = if t <= 0.0 {
        (0.0, 0)
    } else if t >= 1.0 {
        (1.0, n - 1)
    } else {
        (t, (t * n as f64).floor() as usize)
    };
    let v1 = values[i];
    let v2 = values[i + 1];
    let v0 = if i > 0 { values[i - 1] } else { 2.0 * v1 - v2 };
    let v3 = if i < n - 1 { values[i + 2] } else { 2.0 * v2 - v1 };
    basis((t - i as f64 / n as f64) * n as f64, v0, v1, v2, v3)
}

/// Round half up and clamp to a channel; NaN becomes 0.
fn channel(v: f64) -> u8 {
    if v.is_nan() { return 0; }
    (v + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Sample the RdYlBu ramp at `t` (0 = hot red, 1 = cold blue).
pub fn interpolate_rd_yl_bu(t: f64) -> Rgb {
    let pick = |f: fn(&Rgb) -> u8| RD_YL_BU.map(|c| f(&c) as f64);
    let (r, g, b) = (pick(|c| c.r), pick(|c| c.g), pick(|c| c.b));
    Rgb::new(channel(spline(&r, t)), channel(spline(&g, t)), channel(spline(&b, t)))
}

/// Number of discrete temperature buckets.
pub const BUCKET_COUNT: u8 = 7;

/// Upper bounds (exclusive) of buckets 7..=2; anything at or above the last is bucket 1.
pub const THRESHOLDS: [f64; 6] = [2.0, 4.0, 6.0, 8.0, 10.0, 12.0];

/// One of the 7 temperature ranges; 7 is coldest, 1 is hottest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorBucket(u8);

impl ColorBucket {
    pub const COLDEST: ColorBucket = ColorBucket(BUCKET_COUNT);
    pub const HOTTEST: ColorBucket = ColorBucket(1);

    /// `None` unless `k` is in 1..=7.
    pub fn new(k: u8) -> Option<Self> {
        (1..=BUCKET_COUNT).contains(&k).then_some(Self(k))
    }

    pub fn index(self) -> u8 { self.0 }

    /// Interpolation position on the ramp, `k / 7`.
    pub fn position(self) -> f64 { self.0 as f64 / BUCKET_COUNT as f64 }

    pub fn color(self) -> Rgb { interpolate_rd_yl_bu(self.position()) }

    /// All buckets from coldest to hottest (legend order).
    pub fn coldest_first() -> impl Iterator<Item = ColorBucket> {
        (1..=BUCKET_COUNT).rev().map(ColorBucket)
    }
}

/// Bucket for an absolute temperature: ascending threshold ladder, first match wins.
/// NaN matches no threshold and lands in the hottest bucket.
pub fn bucket_for(temperature: f64) -> ColorBucket {
    THRESHOLDS
        .iter()
        .position(|&limit| temperature < limit)
        .map(|i| ColorBucket(BUCKET_COUNT - i as u8))
        .unwrap_or(ColorBucket::HOTTEST)
}

/// Fill color for an absolute temperature.
pub fn color_for(temperature: f64) -> Rgb {
    bucket_for(temperature).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_endpoints_hit_scheme_ends() {
        assert_eq!(interpolate_rd_yl_bu(0.0), Rgb::from_hex(0xa50026));
        assert_eq!(interpolate_rd_yl_bu(1.0), Rgb::from_hex(0x313695));
        assert_eq!(interpolate_rd_yl_bu(-3.0), interpolate_rd_yl_bu(0.0));
        assert_eq!(interpolate_rd_yl_bu(7.0), interpolate_rd_yl_bu(1.0));
    }

    #[test]
    fn bucket_colors() {
        let got: Vec<String> = ColorBucket::coldest_first().map(|b| b.color().to_string()).collect();
        assert_eq!(
            got,
            vec![
                "rgb(49, 54, 149)",
                "rgb(90, 141, 192)",
                "rgb(163, 209, 229)",
                "rgb(231, 245, 227)",
                "rgb(254, 232, 157)",
                "rgb(251, 163, 94)",
                "rgb(227, 75, 52)",
            ]
        );
    }

    #[test]
    fn ladder_edges() {
        assert_eq!(bucket_for(1.999).index(), 7);
        assert_eq!(bucket_for(2.0).index(), 6);
        assert_eq!(bucket_for(7.99).index(), 4);
        assert_eq!(bucket_for(11.999).index(), 2);
        assert_eq!(bucket_for(12.0).index(), 1);
        assert_eq!(bucket_for(-40.0), ColorBucket::COLDEST);
        assert_eq!(bucket_for(40.0), ColorBucket::HOTTEST);
        assert_eq!(bucket_for(f64::NAN), ColorBucket::HOTTEST);
    }

    #[test]
    fn bucket_bounds() {
        assert!(ColorBucket::new(0).is_none());
        assert!(ColorBucket::new(8).is_none());
        assert_eq!(ColorBucket::new(3).map(|b| b.position()), Some(3.0 / 7.0));
        assert_eq!(Rgb::new(49, 54, 149).to_hex(), "#313695");
    }
}
