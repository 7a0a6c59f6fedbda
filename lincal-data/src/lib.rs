//! Calibration data for the line fit: the `Dataset` abstraction, the CSV-backed
//! `CalibrationDataset`, and the samplers that turn it into training batches.

pub mod datasets;
pub mod samplers;

pub use datasets::{Batch, CalibrationDataset, CalibrationRow, Dataset};
pub use samplers::{BatchSampler, RandomSampler, Sampler, SequentialSampler};
