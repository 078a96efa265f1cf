//! corrmat — validated correlation matrices.
//!
//! A `CorrelationMatrix` owns a square, symmetric, unit-diagonal table of
//! coefficients with one shared label sequence for both axes. Every
//! construction path re-runs the full invariant check, so a value of this
//! type is valid by existence. On top of that sit thresholded sub-matrix
//! extraction and an annotated ellipse rendering of the coefficients.

pub mod cli;
pub mod config;
pub mod core;
pub mod plot;

pub use crate::core::extract::ExtractOptions;
pub use crate::core::matrix::CorrelationMatrix;
pub use crate::core::table::Table;
pub use crate::core::MatrixError;
