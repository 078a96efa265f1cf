//! core/table.rs — Labeled rectangular numeric table.
//!
//! The input carrier for both construction paths: a finished square
//! correlation table to adopt, or a column-per-variable observation set to
//! reduce with [`crate::core::stats::pairwise_correlation`].

use crate::core::MatrixError;

/// Rectangular numeric table with row and column labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    row_labels: Vec<String>,
    column_labels: Vec<String>,
    /// Row-major, `row_labels.len() * column_labels.len()` values.
    values: Vec<f64>,
}

impl Table {
    /// Build a table from per-row value slices.
    ///
    /// Fails with [`MatrixError::Shape`] when the row count does not match
    /// the row labels or any row length does not match the column labels.
    pub fn new<S: AsRef<str>>(
        row_labels: &[S],
        column_labels: &[S],
        rows: &[Vec<f64>],
    ) -> Result<Self, MatrixError> {
        let n_cols = column_labels.len();
        if rows.len() != row_labels.len() {
            return Err(MatrixError::Shape {
                rows: rows.len(),
                columns: n_cols,
            });
        }
        let mut values = Vec::with_capacity(rows.len() * n_cols);
        for row in rows {
            if row.len() != n_cols {
                return Err(MatrixError::Shape {
                    rows: rows.len(),
                    columns: row.len(),
                });
            }
            values.extend_from_slice(row);
        }
        Ok(Self {
            row_labels: row_labels.iter().map(|s| s.as_ref().to_string()).collect(),
            column_labels: column_labels
                .iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
            values,
        })
    }

    /// Build an observation table from per-column value slices.
    ///
    /// Rows are numbered from zero; every column must have the same length.
    pub fn from_columns<S: AsRef<str>>(
        column_labels: &[S],
        columns: &[Vec<f64>],
    ) -> Result<Self, MatrixError> {
        if columns.len() != column_labels.len() {
            return Err(MatrixError::Shape {
                rows: columns.first().map_or(0, Vec::len),
                columns: columns.len(),
            });
        }
        let n_rows = columns.first().map_or(0, Vec::len);
        for column in columns {
            if column.len() != n_rows {
                return Err(MatrixError::Shape {
                    rows: column.len(),
                    columns: columns.len(),
                });
            }
        }
        let mut values = Vec::with_capacity(n_rows * columns.len());
        for i in 0..n_rows {
            for column in columns {
                values.push(column[i]);
            }
        }
        let row_labels: Vec<String> = (0..n_rows).map(|i| i.to_string()).collect();
        Ok(Self {
            row_labels,
            column_labels: column_labels
                .iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
            values,
        })
    }

    /// Build directly from row-major storage. Dimensions are the caller's
    /// contract, checked only in debug builds.
    pub(crate) fn from_flat(
        row_labels: Vec<String>,
        column_labels: Vec<String>,
        values: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(values.len(), row_labels.len() * column_labels.len());
        Self {
            row_labels,
            column_labels,
            values,
        }
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.row_labels.len()
    }

    #[inline]
    pub fn n_cols(&self) -> usize {
        self.column_labels.len()
    }

    /// Cell value at (row, column).
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.values[row * self.n_cols() + column]
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    /// Copy of one column's values, top to bottom.
    pub fn column(&self, column: usize) -> Vec<f64> {
        (0..self.n_rows()).map(|i| self.get(i, column)).collect()
    }
}
