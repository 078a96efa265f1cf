//! core/extract.rs — Thresholded sub-matrix extraction.
//!
//! Selects the variables whose coefficient against a target variable clears
//! a threshold and returns the principal submatrix over them, revalidated as
//! a fresh [`CorrelationMatrix`].

use tracing::debug;

use crate::core::matrix::CorrelationMatrix;
use crate::core::table::Table;
use crate::core::MatrixError;

/// Options controlling sub-matrix extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractOptions {
    /// Minimum coefficient for a variable to qualify. With `skip_negatives`
    /// unset, a coefficient at or below the negated threshold qualifies too.
    pub threshold: f64,
    /// Keep only positively correlated variables, however strong the
    /// negative ones are.
    pub skip_negatives: bool,
    /// Order the result by descending coefficient against the target; ties
    /// keep the source label order. Unset preserves the source order.
    pub sort: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            threshold: 0.75,
            skip_negatives: false,
            sort: true,
        }
    }
}

impl CorrelationMatrix {
    /// Extract the sub-matrix of variables correlated with `target`.
    ///
    /// The target variable itself always qualifies, so the degenerate result
    /// is a 1x1 unit matrix rather than an error. The source matrix is left
    /// untouched; the result owns an independent copy of the selected cells.
    pub fn submatrix(
        &self,
        target: &str,
        opts: &ExtractOptions,
    ) -> Result<CorrelationMatrix, MatrixError> {
        let target_index =
            self.label_index(target)
                .ok_or_else(|| MatrixError::UnknownLabel {
                    label: target.to_string(),
                })?;
        if opts.threshold < 0.0 {
            return Err(MatrixError::Threshold {
                value: opts.threshold,
            });
        }

        let coefficients: Vec<f64> = (0..self.len())
            .map(|i| self.get(i, target_index))
            .collect();

        let mut order: Vec<usize> = (0..self.len()).collect();
        if opts.sort {
            // Stable sort: equal coefficients keep the source label order.
            order.sort_by(|&a, &b| {
                coefficients[b]
                    .partial_cmp(&coefficients[a])
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }

        let kept: Vec<usize> = order
            .into_iter()
            .filter(|&i| {
                i == target_index
                    || coefficients[i] >= opts.threshold
                    || (!opts.skip_negatives && coefficients[i] <= -opts.threshold)
            })
            .collect();

        debug!(
            "sub-matrix for {target}: kept {} of {} variables at threshold {}",
            kept.len(),
            self.len(),
            opts.threshold
        );

        let labels: Vec<&str> = kept.iter().map(|&i| self.labels()[i].as_str()).collect();
        let rows: Vec<Vec<f64>> = kept
            .iter()
            .map(|&i| kept.iter().map(|&j| self.get(i, j)).collect())
            .collect();

        // A principal submatrix of a valid correlation matrix is itself
        // valid; going back through `from_table` keeps that a checked fact.
        let table = Table::new(&labels, &labels, &rows)?;
        CorrelationMatrix::from_table(&table)
    }
}
