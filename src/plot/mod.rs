//! Presentation layer: rendering a finished correlation matrix.

pub mod ellipse;
