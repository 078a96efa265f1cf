//! core/matrix.rs — Validated correlation-matrix container.
//!
//! A `CorrelationMatrix` can only come out of a validating constructor, so
//! holding one is proof that the cells are a square, symmetric, unit-diagonal
//! table of coefficients in [-1, 1] with one label sequence shared by both
//! axes. There is no mutation API; replacing the matrix means constructing a
//! new one through the same checks.

use tracing::debug;

use crate::core::stats;
use crate::core::table::Table;
use crate::core::{MatrixError, EPS};

/// Square, symmetric correlation matrix with shared row/column labels.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    labels: Vec<String>,
    /// Row-major, `labels.len() * labels.len()` coefficients.
    cells: Vec<f64>,
}

impl CorrelationMatrix {
    /// Adopt a finished correlation table as-is.
    ///
    /// Trusts nothing: runs the full validation in diagnostic order (range,
    /// diagonal, shape, symmetry, label identity) and reports the first
    /// failure.
    pub fn from_table(table: &Table) -> Result<Self, MatrixError> {
        validate(table)?;
        let n = table.n_rows();
        let mut cells = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                cells.push(table.get(i, j));
            }
        }
        debug!("validated {n}x{n} correlation matrix");
        Ok(Self {
            labels: table.row_labels().to_vec(),
            cells,
        })
    }

    /// Reduce an observation table (columns are variables) to its pairwise
    /// correlation matrix, then adopt it through the validating path.
    pub fn from_observations(data: &Table) -> Result<Self, MatrixError> {
        let corr = stats::pairwise_correlation(data);
        Self::from_table(&corr)
    }

    /// Shared row/column labels, in matrix order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Side length.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Row-major coefficient storage.
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Coefficient at (row, column) index.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.cells[row * self.len() + column]
    }

    /// Position of a label, if present.
    pub fn label_index(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Coefficient between two labeled variables.
    pub fn coefficient(&self, a: &str, b: &str) -> Result<f64, MatrixError> {
        let i = self.label_index(a).ok_or_else(|| MatrixError::UnknownLabel {
            label: a.to_string(),
        })?;
        let j = self.label_index(b).ok_or_else(|| MatrixError::UnknownLabel {
            label: b.to_string(),
        })?;
        Ok(self.get(i, j))
    }
}

/// Run all invariant checks on a candidate table, first failure wins.
fn validate(table: &Table) -> Result<(), MatrixError> {
    let rows = table.n_rows();
    let columns = table.n_cols();

    // Range runs first. The negated comparison traps NaN cells here instead
    // of letting them slide through the later equality checks.
    for i in 0..rows {
        for j in 0..columns {
            let value = table.get(i, j);
            if !(value.abs() <= 1.0 + EPS) {
                return Err(MatrixError::Coefficient {
                    row: table.row_labels()[i].clone(),
                    column: table.column_labels()[j].clone(),
                    value,
                });
            }
        }
    }

    for i in 0..rows.min(columns) {
        let value = table.get(i, i);
        if (value - 1.0).abs() > EPS {
            return Err(MatrixError::Diagonal {
                label: table.row_labels()[i].clone(),
                value,
            });
        }
    }

    if rows != columns {
        return Err(MatrixError::Shape { rows, columns });
    }

    for i in 0..rows {
        for j in (i + 1)..rows {
            let lower = table.get(j, i);
            let upper = table.get(i, j);
            if (lower - upper).abs() > EPS {
                return Err(MatrixError::Symmetry {
                    row: table.row_labels()[i].clone(),
                    column: table.column_labels()[j].clone(),
                    lower,
                    upper,
                });
            }
        }
    }

    for (index, (row, column)) in table
        .row_labels()
        .iter()
        .zip(table.column_labels())
        .enumerate()
    {
        if row != column {
            return Err(MatrixError::LabelMismatch {
                index,
                row: row.clone(),
                column: column.clone(),
            });
        }
    }

    Ok(())
}

impl std::fmt::Display for CorrelationMatrix {
    /// Aligned labeled grid, one row per label.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label_width = self.labels.iter().map(String::len).max().unwrap_or(0);
        write!(f, "{:label_width$}", "")?;
        for label in &self.labels {
            write!(f, " {label:>8}")?;
        }
        writeln!(f)?;
        for (i, label) in self.labels.iter().enumerate() {
            write!(f, "{label:label_width$}")?;
            for j in 0..self.len() {
                write!(f, " {:>8.3}", self.get(i, j))?;
            }
            if i + 1 < self.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
