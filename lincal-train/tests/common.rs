use lincal_data::CalibrationDataset;
use std::path::PathBuf;

#[allow(dead_code)]
pub fn demo_dataset() -> CalibrationDataset {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("data")
        .join("demo_lr_data_3.csv");
    CalibrationDataset::from_csv_path(path).expect("demo dataset should load")
}

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
