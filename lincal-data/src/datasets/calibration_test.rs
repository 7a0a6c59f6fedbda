use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_from_reader_parses_rows() {
    let input = "0.1,0.26\n 0.5 , 0.51 \n0.0,0.2\n";
    let dataset = CalibrationDataset::from_reader(input.as_bytes()).unwrap();
    assert_eq!(dataset.len(), 3);
    assert_eq!(
        dataset.rows()[1],
        CalibrationRow {
            concentration: 0.5,
            absorbance: 0.51
        }
    );
    assert_eq!(dataset.concentrations(), vec![0.1, 0.5, 0.0]);
    assert_eq!(dataset.absorbances(), vec![0.26, 0.51, 0.2]);
}

#[test]
fn test_blank_lines_are_skipped() {
    let input = "0.1,0.26\n\n0.2,0.32\n";
    let dataset = CalibrationDataset::from_reader(input.as_bytes()).unwrap();
    assert_eq!(dataset.len(), 2);
}

#[test]
fn test_non_numeric_value_reports_line() {
    let input = "0.1,0.26\n0.2,abc\n";
    let err = CalibrationDataset::from_reader(input.as_bytes()).unwrap_err();
    assert!(matches!(err, LinCalError::MalformedRecord { line: 2, .. }), "{:?}", err);
}

#[test]
fn test_wrong_column_count_reports_line() {
    let input = "0.1,0.26\n0.2,0.3\n0.3\n";
    let err = CalibrationDataset::from_reader(input.as_bytes()).unwrap_err();
    assert!(matches!(err, LinCalError::MalformedRecord { line: 3, .. }), "{:?}", err);
}

#[test]
fn test_missing_file() {
    let err = CalibrationDataset::from_csv_path("does/not/exist.csv").unwrap_err();
    assert!(matches!(err, LinCalError::DataLoadError { .. }));
}

#[test]
fn test_empty_input_gives_empty_dataset() {
    let dataset = CalibrationDataset::from_reader("".as_bytes()).unwrap();
    assert!(dataset.is_empty());
}

#[test]
fn test_get_out_of_bounds() {
    let dataset = CalibrationDataset::from_reader("0.1,0.2\n".as_bytes()).unwrap();
    assert!(matches!(
        dataset.get(1),
        Err(LinCalError::IndexOutOfBounds { .. })
    ));
}

#[test]
fn test_select_keeps_requested_order() {
    let dataset = CalibrationDataset::from_reader("0.0,0.2\n0.1,0.26\n0.2,0.32\n".as_bytes()).unwrap();
    let batch = dataset.select(&[2, 0]).unwrap();
    assert_eq!(batch.indices, vec![2, 0]);
    assert_eq!(batch.concentrations, vec![0.2, 0.0]);
    assert_eq!(batch.absorbances, vec![0.32, 0.2]);
    assert!(dataset.select(&[3]).is_err());
}

#[test]
fn test_synthetic_follows_line() {
    let mut rng = StdRng::seed_from_u64(7);
    let dataset = CalibrationDataset::synthetic(500, 0.6, 0.2, 0.0, (0.0, 0.8), &mut rng).unwrap();
    assert_eq!(dataset.len(), 500);
    for row in dataset.rows() {
        assert!((0.0..0.8).contains(&row.concentration));
        assert_relative_eq!(row.absorbance, 0.6 * row.concentration + 0.2, epsilon = 1e-12);
    }
}

#[test]
fn test_synthetic_is_reproducible_with_seed() {
    let a = CalibrationDataset::synthetic(20, 0.6, 0.2, 0.05, (0.0, 0.8), &mut StdRng::seed_from_u64(1)).unwrap();
    let b = CalibrationDataset::synthetic(20, 0.6, 0.2, 0.05, (0.0, 0.8), &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_synthetic_rejects_bad_configuration() {
    let mut rng = StdRng::seed_from_u64(0);
    for noise_std in [-1.0, -1e-9, f64::NAN, f64::INFINITY] {
        assert!(
            matches!(
                CalibrationDataset::synthetic(3, 1.0, 0.0, noise_std, (0.0, 1.0), &mut rng),
                Err(LinCalError::ConfigurationError(_))
            ),
            "noise_std {} should be rejected",
            noise_std
        );
    }
    assert!(CalibrationDataset::synthetic(10, 1.0, 0.0, 0.1, (1.0, 1.0), &mut rng).is_err());
}
