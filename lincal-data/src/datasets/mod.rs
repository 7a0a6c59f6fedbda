pub mod batch;
pub mod calibration;
pub mod traits;

pub use batch::Batch;
pub use calibration::{CalibrationDataset, CalibrationRow};
pub use traits::Dataset;
