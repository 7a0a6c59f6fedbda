use std::path::PathBuf;

// The demo dataset shipped at the workspace root.
#[allow(dead_code)]
pub fn demo_csv_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("data")
        .join("demo_lr_data_3.csv")
}

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
