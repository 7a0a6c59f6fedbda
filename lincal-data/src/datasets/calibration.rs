use crate::datasets::batch::Batch;
use crate::datasets::traits::Dataset;
use csv::{ReaderBuilder, StringRecord, Trim};
use lincal_core::LinCalError;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One measurement: absorbance observed at a known concentration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CalibrationRow {
    pub concentration: f64,
    pub absorbance: f64,
}

/// Ordered, immutable set of calibration measurements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalibrationDataset {
    rows: Vec<CalibrationRow>,
}

impl CalibrationDataset {
    pub fn new(rows: Vec<CalibrationRow>) -> Self {
        CalibrationDataset { rows }
    }

    /// Loads `concentration,absorbance` lines (no header) from a file.
    ///
    /// # Errors
    /// `DataLoadError` if the file cannot be opened or read, `MalformedRecord`
    /// for a line without exactly two numeric fields.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, LinCalError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LinCalError::DataLoadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let dataset = Self::read_records(file, &path.display().to_string())?;
        log::info!("Loaded {} calibration rows from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Same format as `from_csv_path`, from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LinCalError> {
        Self::read_records(reader, "<reader>")
    }

    fn read_records<R: Read>(reader: R, source: &str) -> Result<Self, LinCalError> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result.map_err(|e| match e.position() {
                Some(pos) => LinCalError::MalformedRecord {
                    line: pos.line() as usize,
                    reason: e.to_string(),
                },
                None => LinCalError::DataLoadError {
                    path: source.to_string(),
                    reason: e.to_string(),
                },
            })?;
            rows.push(parse_row(&record)?);
        }
        log::debug!("Parsed {} rows from {}", rows.len(), source);
        Ok(CalibrationDataset { rows })
    }

    /// Generates `n` rows of `A = slope * c + intercept + N(0, noise_std)` with `c`
    /// drawn uniformly from `concentration_range`.
    ///
    /// # Errors
    /// `ConfigurationError` for a negative or non-finite `noise_std` or an empty range.
    pub fn synthetic<R: Rng + ?Sized>(
        n: usize,
        slope: f64,
        intercept: f64,
        noise_std: f64,
        concentration_range: (f64, f64),
        rng: &mut R,
    ) -> Result<Self, LinCalError> {
        let (low, high) = concentration_range;
        if !(low < high) || !low.is_finite() || !high.is_finite() {
            return Err(LinCalError::ConfigurationError(format!(
                "concentration range must satisfy low < high, got ({}, {})",
                low, high
            )));
        }
        if !noise_std.is_finite() || noise_std < 0.0 {
            return Err(LinCalError::ConfigurationError(format!(
                "noise_std must be finite and non-negative, got {}",
                noise_std
            )));
        }
        let noise = Normal::new(0.0, noise_std).map_err(|e| {
            LinCalError::ConfigurationError(format!("invalid noise_std {}: {}", noise_std, e))
        })?;
        let concentrations = Uniform::new(low, high);

        let rows = (0..n)
            .map(|_| {
                let concentration = concentrations.sample(rng);
                CalibrationRow {
                    concentration,
                    absorbance: slope * concentration + intercept + noise.sample(rng),
                }
            })
            .collect();
        Ok(CalibrationDataset { rows })
    }

    pub fn rows(&self) -> &[CalibrationRow] {
        &self.rows
    }

    pub fn concentrations(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.concentration).collect()
    }

    pub fn absorbances(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.absorbance).collect()
    }

    /// Builds a batch from the rows at `indices`, in that order.
    ///
    /// # Errors
    /// `IndexOutOfBounds` if any index is past the end.
    pub fn select(&self, indices: &[usize]) -> Result<Batch, LinCalError> {
        let mut concentrations = Vec::with_capacity(indices.len());
        let mut absorbances = Vec::with_capacity(indices.len());
        for &index in indices {
            let row = self.get(index)?;
            concentrations.push(row.concentration);
            absorbances.push(row.absorbance);
        }
        Ok(Batch {
            indices: indices.to_vec(),
            concentrations,
            absorbances,
        })
    }
}

impl Dataset for CalibrationDataset {
    type Item = CalibrationRow;

    fn get(&self, index: usize) -> Result<Self::Item, LinCalError> {
        self.rows
            .get(index)
            .copied()
            .ok_or_else(|| LinCalError::IndexOutOfBounds {
                index: vec![index],
                shape: vec![self.rows.len()],
            })
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

fn parse_row(record: &StringRecord) -> Result<CalibrationRow, LinCalError> {
    let line = record.position().map(|p| p.line() as usize).unwrap_or(0);
    if record.len() != 2 {
        return Err(LinCalError::MalformedRecord {
            line,
            reason: format!("expected 2 fields, found {}", record.len()),
        });
    }
    let row: CalibrationRow = record
        .deserialize(None)
        .map_err(|e| LinCalError::MalformedRecord {
            line,
            reason: e.to_string(),
        })?;
    if !row.concentration.is_finite() || !row.absorbance.is_finite() {
        return Err(LinCalError::MalformedRecord {
            line,
            reason: "values must be finite".to_string(),
        });
    }
    Ok(row)
}

#[cfg(test)]
#[path = "calibration_test.rs"]
mod tests;
