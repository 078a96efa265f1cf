//! core/stats.rs — Pairwise Pearson correlation over table columns.
//!
//! The reduction used by the derived construction path: each pair of columns
//! is computed once and mirrored, so the output is exactly symmetric with an
//! exact unit diagonal.

use tracing::debug;

use crate::core::table::Table;

/// Pearson correlation coefficient of two equal-length series.
///
/// Returns 0 when either series has zero variance (a constant column carries
/// no linear association), and clamps the result into [-1, 1] against
/// accumulation round-off.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len();
    if n == 0 {
        return 0.0;
    }
    let inv_n = 1.0 / n as f64;
    let mean_x = x.iter().sum::<f64>() * inv_n;
    let mean_y = y.iter().sum::<f64>() * inv_n;

    let mut cov = 0.0;
    let mut ss_x = 0.0;
    let mut ss_y = 0.0;
    for (&a, &b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        ss_x += dx * dx;
        ss_y += dy * dy;
    }

    let denom = (ss_x * ss_y).sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    (cov / denom).clamp(-1.0, 1.0)
}

/// Square correlation table over `data`'s columns, labeled by column on both
/// axes.
pub fn pairwise_correlation(data: &Table) -> Table {
    let m = data.n_cols();
    let columns: Vec<Vec<f64>> = (0..m).map(|j| data.column(j)).collect();

    let mut cells = vec![0.0; m * m];
    for i in 0..m {
        cells[i * m + i] = 1.0;
        for j in (i + 1)..m {
            let r = pearson(&columns[i], &columns[j]);
            cells[i * m + j] = r;
            cells[j * m + i] = r;
        }
    }
    debug!(
        "computed pairwise correlations for {} variables over {} observations",
        m,
        data.n_rows()
    );

    let labels = data.column_labels().to_vec();
    Table::from_flat(labels.clone(), labels, cells)
}
