// File: crates/heatmap-core/src/dataset.rs
// Summary: Anomaly dataset model and JSON loading.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, Result};

/// One monthly measurement: deviation from the base temperature.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    pub year: i32,
    /// Calendar month, 1-based.
    pub month: u32,
    pub variance: f64,
}

impl AnomalyRecord {
    pub const fn new(year: i32, month: u32, variance: f64) -> Self {
        Self { year, month, variance }
    }

    /// Absolute temperature for this record.
    #[inline]
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }
}

/// Base temperature plus the ordered monthly records.
///
/// Records are kept in feed order; duplicates are allowed and simply draw
/// overlapping cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(rename = "baseTemperature")]
    pub base_temperature: f64,
    #[serde(rename = "monthlyVariance")]
    pub records: Vec<AnomalyRecord>,
}

impl Dataset {
    /// Build a dataset from already-typed records, enforcing the month range.
    pub fn new(base_temperature: f64, records: Vec<AnomalyRecord>) -> Result<Self> {
        let ds = Self { base_temperature, records };
        ds.validate()?;
        Ok(ds)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let ds: Dataset = serde_json::from_str(s)?;
        ds.validate()?;
        Ok(ds)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let ds: Dataset = serde_json::from_slice(bytes)?;
        ds.validate()?;
        Ok(ds)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let ds: Dataset = serde_json::from_reader(reader)?;
        ds.validate()?;
        Ok(ds)
    }

    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    fn validate(&self) -> Result<()> {
        match self.records.iter().position(|r| !(1..=12).contains(&r.month)) {
            Some(index) => Err(DatasetError::MonthOutOfRange { index, month: self.records[index].month }),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// (min, max) year, or `None` when there are no records.
    pub fn year_extent(&self) -> Option<(i32, i32)> {
        extent(self.records.iter().map(|r| r.year))
    }

    /// (min, max) month, or `None` when there are no records.
    pub fn month_extent(&self) -> Option<(u32, u32)> {
        extent(self.records.iter().map(|r| r.month))
    }

    /// Absolute temperature of the given record.
    #[inline]
    pub fn temperature_of(&self, record: &AnomalyRecord) -> f64 {
        record.temperature(self.base_temperature)
    }
}

fn extent<T: Ord + Copy>(mut it: impl Iterator<Item = T>) -> Option<(T, T)> {
    let first = it.next()?;
    Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}
