//! Core container and extraction logic for correlation matrices.

pub mod extract;
pub mod matrix;
pub mod stats;
pub mod table;

/// Tolerance applied to the range, diagonal and symmetry checks.
///
/// The checks would otherwise demand exact equality, which rejects matrices
/// that only differ by floating round-off (e.g. a coefficient of
/// 1.0000000000000002 coming out of an accumulation).
pub const EPS: f64 = 1e-9;

/// Errors returned by table construction, matrix validation and extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A coefficient magnitude exceeds 1 (or is NaN).
    Coefficient {
        row: String,
        column: String,
        value: f64,
    },
    /// The extraction threshold is negative.
    Threshold { value: f64 },
    /// A diagonal cell is not 1.
    Diagonal { label: String, value: f64 },
    /// Row and column counts differ.
    Shape { rows: usize, columns: usize },
    /// A cell differs from its transposed counterpart.
    Symmetry {
        row: String,
        column: String,
        lower: f64,
        upper: f64,
    },
    /// Row labels and column labels disagree.
    LabelMismatch {
        index: usize,
        row: String,
        column: String,
    },
    /// A requested label is not present.
    UnknownLabel { label: String },
}

impl std::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::Coefficient { row, column, value } => write!(
                f,
                "coefficient at ({row}, {column}) is {value}; correlation coefficients must lie in [-1, 1]"
            ),
            MatrixError::Threshold { value } => write!(
                f,
                "threshold {value} is negative; coefficients are filtered against both signs of the threshold"
            ),
            MatrixError::Diagonal { label, value } => {
                write!(f, "diagonal cell for {label} is {value}, expected 1")
            }
            MatrixError::Shape { rows, columns } => {
                write!(f, "table is not square: {rows} rows by {columns} columns")
            }
            MatrixError::Symmetry {
                row,
                column,
                lower,
                upper,
            } => write!(
                f,
                "matrix is not symmetric at ({row}, {column}): {lower} vs {upper}"
            ),
            MatrixError::LabelMismatch { index, row, column } => write!(
                f,
                "row and column labels differ at position {index}: {row} vs {column}"
            ),
            MatrixError::UnknownLabel { label } => {
                write!(f, "label {label} is not present in the matrix")
            }
        }
    }
}

impl std::error::Error for MatrixError {}
