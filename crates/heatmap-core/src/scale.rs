// File: crates/heatmap-core/src/scale.rs
// Summary: Year (X, continuous) and month (Y, banded) scale transforms.

use chrono::NaiveDate;
use log::debug;

use crate::dataset::Dataset;
use crate::ticks::{ticks, DEFAULT_TICK_COUNT};
use crate::types::{Layout, MonthOrder};

/// Operations shared by the heatmap's axes; axis rendering is generic over this.
pub trait Scale {
    type Value;
    /// Screen position of the start of `v`, or `None` when `v` is outside a discrete domain.
    fn position(&self, v: &Self::Value) -> Option<f64>;
    /// Values an axis should label, in drawing order.
    fn tick_values(&self) -> Vec<Self::Value>;
    /// Distance from `position` to where a tick is drawn (band center for discrete scales).
    fn tick_offset(&self) -> f64 { 0.0 }
    /// Output interval as (start, end).
    fn range(&self) -> (f64, f64);
}

/// Milliseconds since the Unix epoch of January 1st, 00:00 UTC of `year`.
/// NaN when the year is outside chrono's calendar.
pub fn year_epoch_ms(year: i32) -> f64 {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis() as f64)
        .unwrap_or(f64::NAN)
}

/// Continuous linear mapping from `domain` to `range`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to the range. A zero-width domain maps everything to the range midpoint.
    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span != 0.0 {
            (v - d0) / span
        } else if span.is_nan() {
            f64::NAN
        } else {
            0.5
        };
        r0 + t * (r1 - r0)
    }

    /// Inverse of [`LinearScale::map`]; NaN for a zero-width range.
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 { return f64::NAN; }
        d0 + (px - r0) / span * (d1 - d0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

impl Scale for LinearScale {
    type Value = f64;
    fn position(&self, v: &f64) -> Option<f64> { Some(self.map(*v)) }
    fn tick_values(&self) -> Vec<f64> { self.ticks(DEFAULT_TICK_COUNT) }
    fn range(&self) -> (f64, f64) { self.range }
}

/// Discrete mapping from a domain of keys to evenly sized contiguous bands.
/// Zero inner/outer padding: bands tile the range exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale<K> {
    domain: Vec<K>,
    pub range: (f64, f64),
}

impl<K: Copy + PartialEq> BandScale<K> {
    /// Build from keys in encounter order; repeated keys keep their first slot.
    pub fn new(keys: impl IntoIterator<Item = K>, range: (f64, f64)) -> Self {
        let mut domain: Vec<K> = Vec::new();
        for k in keys {
            if !domain.contains(&k) { domain.push(k); }
        }
        Self { domain, range }
    }

    pub fn domain(&self) -> &[K] { &self.domain }

    /// Distance between band starts.
    pub fn step(&self) -> f64 {
        (self.range.1 - self.range.0) / self.domain.len().max(1) as f64
    }

    /// Band thickness (equal to the step with no padding).
    pub fn bandwidth(&self) -> f64 { self.step() }

    pub fn index_of(&self, k: &K) -> Option<usize> {
        self.domain.iter().position(|d| d == k)
    }

    #[inline]
    pub fn map(&self, k: &K) -> Option<f64> {
        self.index_of(k).map(|i| self.range.0 + self.step() * i as f64)
    }
}

impl<K: Copy + PartialEq> Scale for BandScale<K> {
    type Value = K;
    fn position(&self, v: &K) -> Option<f64> { self.map(v) }
    fn tick_values(&self) -> Vec<K> { self.domain.clone() }
    fn tick_offset(&self) -> f64 { self.bandwidth() / 2.0 }
    fn range(&self) -> (f64, f64) { self.range }
}

/// Horizontal (year, as epoch ms) and vertical (month) scales for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct Scales {
    pub x: LinearScale,
    pub y: BandScale<u32>,
}

impl Scales {
    #[inline]
    pub fn x_for_year(&self, year: i32) -> f64 {
        self.x.map(year_epoch_ms(year))
    }

    /// Top edge of the month's band; NaN if the month is not in the domain.
    #[inline]
    pub fn y_for_month(&self, month: u32) -> f64 {
        self.y.map(&month).unwrap_or(f64::NAN)
    }
}

/// Build both scales for a dataset drawn on a `width` x `height` canvas.
pub fn build_scales(dataset: &Dataset, width: u32, height: u32, layout: &Layout, order: MonthOrder) -> Scales {
    let pad = layout.padding as f64;
    let domain = match dataset.year_extent() {
        Some((lo, hi)) => (year_epoch_ms(lo), year_epoch_ms(hi)),
        None => (f64::NAN, f64::NAN),
    };
    let x = LinearScale::new(domain, (pad, width as f64 - pad));

    let y_range = (pad, height as f64 - pad);
    let y = match order {
        MonthOrder::FirstSeen => BandScale::new(dataset.records.iter().map(|r| r.month), y_range),
        MonthOrder::Calendar => {
            let mut months: Vec<u32> = dataset.records.iter().map(|r| r.month).collect();
            months.sort_unstable();
            BandScale::new(months, y_range)
        }
    };
    debug!("scales: x domain {:?} -> {:?}, y bands {:?} (step {})", x.domain, x.range, y.domain(), y.step());
    Scales { x, y }
}
