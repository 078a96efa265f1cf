//! plot/ellipse.rs — Annotated ellipse rendering of a correlation matrix.
//!
//! One tilted ellipse per cell: full cell width, height growing with the
//! coefficient magnitude, tilted +45 degrees for positive and -45 degrees
//! for negative coefficients. Pure geometry and color mapping live here too
//! so they can be exercised without a drawing backend.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::{Deserialize, Serialize};

use crate::core::matrix::CorrelationMatrix;

/// Floor for the glyph height so a zero coefficient still draws a sliver
/// instead of a degenerate zero-height shape.
pub const MIN_GLYPH_HEIGHT: f64 = 0.05;

/// Fraction of the cell a glyph may occupy.
const CELL_FILL: f64 = 0.92;

/// Boundary samples per ellipse outline.
const ELLIPSE_SEGMENTS: usize = 64;

/// Per-cell shape descriptor in cell units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub width: f64,
    pub height: f64,
    pub angle_deg: f64,
}

/// Shape descriptor for one coefficient.
///
/// Height shrinks as the coefficient loses strength and bottoms out at
/// [`MIN_GLYPH_HEIGHT`]; the tilt follows the coefficient's sign, with an
/// exact zero drawn flat.
pub fn cell_glyph(c: f64) -> Glyph {
    let height = c.abs().max(MIN_GLYPH_HEIGHT);
    let angle_deg = if c > 0.0 {
        45.0
    } else if c < 0.0 {
        -45.0
    } else {
        0.0
    };
    Glyph {
        width: 1.0,
        height,
        angle_deg,
    }
}

/// Named diverging color scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScale {
    /// Red through white to blue.
    RdBu,
    /// Red through white to grey.
    RdGy,
}

impl ColorScale {
    /// Map a coefficient within the color limits to an RGB color.
    pub fn color(&self, value: f64, lo: f64, hi: f64) -> RGBColor {
        let t = if hi > lo {
            ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
        } else {
            0.5
        };
        match self {
            ColorScale::RdBu => diverging(t, (178, 24, 43), (247, 247, 247), (33, 102, 172)),
            ColorScale::RdGy => diverging(t, (178, 24, 43), (255, 255, 255), (77, 77, 77)),
        }
    }
}

/// Piecewise-linear low → mid → high ramp over t in [0, 1].
fn diverging(t: f64, low: (u8, u8, u8), mid: (u8, u8, u8), high: (u8, u8, u8)) -> RGBColor {
    let (from, to, s) = if t < 0.5 {
        (low, mid, t * 2.0)
    } else {
        (mid, high, (t - 0.5) * 2.0)
    };
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * s).round() as u8;
    RGBColor(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

/// Rendering options for [`ellipse_plot`].
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseStyle {
    pub cmap: ColorScale,
    /// Fixed color limits; `None` spans the data's own min/max.
    pub clim: Option<(f64, f64)>,
    pub width_px: u32,
    pub height_px: u32,
    /// Print the coefficient value in each cell.
    pub annotate: bool,
}

impl Default for EllipseStyle {
    fn default() -> Self {
        Self {
            cmap: ColorScale::RdBu,
            clim: Some((-1.0, 1.0)),
            width_px: 900,
            height_px: 900,
            annotate: true,
        }
    }
}

/// Color limits actually used: configured ones, or the data's span.
pub fn color_limits(matrix: &CorrelationMatrix, style: &EllipseStyle) -> (f64, f64) {
    style.clim.unwrap_or_else(|| {
        let lo = matrix.cells().iter().copied().fold(f64::INFINITY, f64::min);
        let hi = matrix
            .cells()
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        (lo, hi)
    })
}

/// Boundary polygon of one cell's ellipse, centered at (cx, cy) in plot
/// coordinates.
fn glyph_outline(glyph: &Glyph, cx: f64, cy: f64) -> Vec<(f64, f64)> {
    let a = glyph.width * CELL_FILL / 2.0;
    let b = glyph.height * CELL_FILL / 2.0;
    let theta = glyph.angle_deg.to_radians();
    let (sin_t, cos_t) = theta.sin_cos();
    (0..ELLIPSE_SEGMENTS)
        .map(|k| {
            let phi = 2.0 * std::f64::consts::PI * k as f64 / ELLIPSE_SEGMENTS as f64;
            let x = a * phi.cos();
            let y = b * phi.sin();
            (cx + x * cos_t - y * sin_t, cy + x * sin_t + y * cos_t)
        })
        .collect()
}

/// Render the matrix as an annotated ellipse grid PNG.
///
/// Rows run top to bottom and columns left to right in label order, with the
/// labels drawn along the left and top edges.
pub fn ellipse_plot(
    matrix: &CorrelationMatrix,
    style: &EllipseStyle,
    out_path: &Path,
) -> Result<(), Box<dyn Error>> {
    if matrix.is_empty() {
        return Err("cannot plot an empty correlation matrix".into());
    }
    let n = matrix.len();
    let nf = n as f64;
    let (lo, hi) = color_limits(matrix, style);

    let root = BitMapBackend::new(out_path, (style.width_px, style.height_px)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .build_cartesian_2d(-1.2f64..nf, -0.5f64..(nf + 0.7))?;

    let label_font = ("sans-serif", 18)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let row_font = ("sans-serif", 18)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Right, VPos::Center));
    let annot_font = ("sans-serif", 13)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));

    // Row 0 sits at the top of the grid.
    let y_of = |i: usize| (n - 1 - i) as f64;

    for (j, label) in matrix.labels().iter().enumerate() {
        chart.draw_series(std::iter::once(Text::new(
            label.clone(),
            (j as f64, nf - 0.2),
            label_font.clone(),
        )))?;
    }
    for (i, label) in matrix.labels().iter().enumerate() {
        chart.draw_series(std::iter::once(Text::new(
            label.clone(),
            (-0.7, y_of(i)),
            row_font.clone(),
        )))?;
    }

    for i in 0..n {
        for j in 0..n {
            let c = matrix.get(i, j);
            let glyph = cell_glyph(c);
            let outline = glyph_outline(&glyph, j as f64, y_of(i));
            let fill = style.cmap.color(c, lo, hi);
            chart.draw_series(std::iter::once(Polygon::new(outline, fill.filled())))?;
            if style.annotate {
                chart.draw_series(std::iter::once(Text::new(
                    format!("{c:.2}"),
                    (j as f64, y_of(i)),
                    annot_font.clone(),
                )))?;
            }
        }
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_follows_sign_and_magnitude() {
        let pos = cell_glyph(0.8);
        assert_eq!(pos.angle_deg, 45.0);
        assert!((pos.height - 0.8).abs() < 1e-12);
        assert_eq!(pos.width, 1.0);

        let neg = cell_glyph(-0.8);
        assert_eq!(neg.angle_deg, -45.0);
        assert!((neg.height - 0.8).abs() < 1e-12);
    }

    #[test]
    fn zero_coefficient_is_floored_flat() {
        let zero = cell_glyph(0.0);
        assert_eq!(zero.angle_deg, 0.0);
        assert_eq!(zero.height, MIN_GLYPH_HEIGHT);
    }

    #[test]
    fn unit_coefficient_fills_the_cell() {
        assert_eq!(cell_glyph(1.0).height, 1.0);
        assert_eq!(cell_glyph(-1.0).height, 1.0);
    }

    #[test]
    fn color_scale_hits_endpoints_and_midpoint() {
        let lo = ColorScale::RdBu.color(-1.0, -1.0, 1.0);
        assert_eq!(lo, RGBColor(178, 24, 43));
        let mid = ColorScale::RdBu.color(0.0, -1.0, 1.0);
        assert_eq!(mid, RGBColor(247, 247, 247));
        let hi = ColorScale::RdBu.color(1.0, -1.0, 1.0);
        assert_eq!(hi, RGBColor(33, 102, 172));
    }

    #[test]
    fn degenerate_limits_map_to_midpoint() {
        let c = ColorScale::RdGy.color(1.0, 1.0, 1.0);
        assert_eq!(c, RGBColor(255, 255, 255));
    }

    #[test]
    fn outline_is_centered_on_the_cell() {
        let outline = glyph_outline(&cell_glyph(0.5), 2.0, 3.0);
        assert_eq!(outline.len(), ELLIPSE_SEGMENTS);
        let (sx, sy) = outline
            .iter()
            .fold((0.0, 0.0), |(sx, sy), (x, y)| (sx + x, sy + y));
        let k = ELLIPSE_SEGMENTS as f64;
        assert!((sx / k - 2.0).abs() < 1e-9);
        assert!((sy / k - 3.0).abs() < 1e-9);
    }
}
