use corrmat::core::matrix::CorrelationMatrix;
use corrmat::core::table::Table;
use corrmat::core::MatrixError;

use rand::{rngs::StdRng, Rng, SeedableRng};

const ABCD: [&str; 4] = ["A", "B", "C", "D"];

fn abcd_values() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, -0.9, 0.5, 0.8],
        vec![-0.9, 1.0, 0.6, 0.4],
        vec![0.5, 0.6, 1.0, -0.4],
        vec![0.8, 0.4, -0.4, 1.0],
    ]
}

fn abcd_table(values: Vec<Vec<f64>>) -> Table {
    Table::new(&ABCD, &ABCD, &values).unwrap()
}

/// Deterministic 100x4 integer dataset, as an observation table.
fn random_dataset(seed: u64) -> Table {
    let mut rng = StdRng::seed_from_u64(seed);
    let columns: Vec<Vec<f64>> = (0..4)
        .map(|_| (0..100).map(|_| rng.random_range(0..100) as f64).collect())
        .collect();
    Table::from_columns(&ABCD, &columns).unwrap()
}

#[test]
fn valid_matrix_is_adopted() {
    let m = CorrelationMatrix::from_table(&abcd_table(abcd_values())).unwrap();
    assert_eq!(m.len(), 4);
    assert_eq!(m.labels(), &ABCD);
    assert_eq!(m.get(0, 1), -0.9);
    assert_eq!(m.coefficient("A", "D").unwrap(), 0.8);
}

#[test]
fn cells_equal_their_transpose() {
    let m = CorrelationMatrix::from_table(&abcd_table(abcd_values())).unwrap();
    for i in 0..m.len() {
        for j in 0..m.len() {
            assert_eq!(m.get(i, j), m.get(j, i));
        }
    }
}

#[test]
fn diagonal_is_exactly_one() {
    let m = CorrelationMatrix::from_table(&abcd_table(abcd_values())).unwrap();
    for i in 0..m.len() {
        assert_eq!(m.get(i, i), 1.0);
    }
}

#[test]
fn non_symmetric_breaks() {
    let mut values = abcd_values();
    values[0][1] += 1.0;
    let err = CorrelationMatrix::from_table(&abcd_table(values)).unwrap_err();
    assert!(matches!(err, MatrixError::Symmetry { .. }), "got {err:?}");
}

#[test]
fn large_values_break() {
    let mut values = abcd_values();
    values[0][1] = 2.0;
    let err = CorrelationMatrix::from_table(&abcd_table(values)).unwrap_err();
    // Range is checked before symmetry, so the wild value wins.
    assert!(
        matches!(err, MatrixError::Coefficient { value, .. } if value == 2.0),
        "got {err:?}"
    );
}

#[test]
fn nan_cell_breaks_as_out_of_range() {
    let mut values = abcd_values();
    values[0][1] = f64::NAN;
    values[1][0] = f64::NAN;
    let err = CorrelationMatrix::from_table(&abcd_table(values)).unwrap_err();
    assert!(matches!(err, MatrixError::Coefficient { .. }), "got {err:?}");
}

#[test]
fn broken_diagonal_breaks() {
    let mut values = abcd_values();
    values[0][0] = 0.9;
    let err = CorrelationMatrix::from_table(&abcd_table(values)).unwrap_err();
    assert!(
        matches!(err, MatrixError::Diagonal { ref label, value } if label == "A" && value == 0.9),
        "got {err:?}"
    );
}

#[test]
fn non_square_breaks() {
    let table = Table::new(
        &["a", "b"],
        &["a", "b", "c"],
        &[vec![1.0, 0.5, 0.3], vec![0.5, 1.0, 0.2]],
    )
    .unwrap();
    let err = CorrelationMatrix::from_table(&table).unwrap_err();
    assert_eq!(
        err,
        MatrixError::Shape {
            rows: 2,
            columns: 3
        }
    );
}

#[test]
fn differing_row_and_column_labels_break() {
    let table = Table::new(
        &["A", "B"],
        &["B", "A"],
        &[vec![1.0, 0.5], vec![0.5, 1.0]],
    )
    .unwrap();
    let err = CorrelationMatrix::from_table(&table).unwrap_err();
    assert!(matches!(err, MatrixError::LabelMismatch { index: 0, .. }), "got {err:?}");
}

// The validator compares with a 1e-9 tolerance rather than exactly. Round-off
// sized perturbations pass; anything larger still fails.
#[test]
fn round_off_perturbations_are_tolerated() {
    let mut values = abcd_values();
    values[0][1] += 1e-10;
    values[0][0] += 1e-10;
    values[3][0] = 0.8 + 1e-10;
    assert!(CorrelationMatrix::from_table(&abcd_table(values)).is_ok());

    let mut values = abcd_values();
    values[0][1] += 1e-6;
    assert!(CorrelationMatrix::from_table(&abcd_table(values)).is_err());
}

#[test]
fn coefficient_slightly_above_one_is_tolerated() {
    let mut values = abcd_values();
    values[0][3] = 1.0 + 1e-10;
    values[3][0] = 1.0 + 1e-10;
    let m = CorrelationMatrix::from_table(&abcd_table(values)).unwrap();
    assert!(m.get(0, 3) > 1.0);
}

#[test]
fn unknown_label_lookup_fails() {
    let m = CorrelationMatrix::from_table(&abcd_table(abcd_values())).unwrap();
    let err = m.coefficient("A", "Z").unwrap_err();
    assert_eq!(
        err,
        MatrixError::UnknownLabel {
            label: "Z".to_string()
        }
    );
}

#[test]
fn derived_matrix_is_valid() {
    let m = CorrelationMatrix::from_observations(&random_dataset(0)).unwrap();
    assert_eq!(m.labels(), &ABCD);
    for i in 0..m.len() {
        assert_eq!(m.get(i, i), 1.0);
        for j in 0..m.len() {
            assert_eq!(m.get(i, j), m.get(j, i));
            assert!(m.get(i, j).abs() <= 1.0);
        }
    }
}

#[test]
fn display_renders_labeled_grid() {
    let m = CorrelationMatrix::from_table(&abcd_table(abcd_values())).unwrap();
    let text = format!("{m}");
    assert!(text.contains('A') && text.contains('D'));
    assert!(text.contains("-0.900"));
    assert_eq!(text.lines().count(), 5, "header plus one line per row");
}
