use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::extract::ExtractOptions;
use crate::plot::ellipse::{ColorScale, EllipseStyle};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    #[serde(default = "ExtractConfig::default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub skip_negatives: bool,
    #[serde(default = "ExtractConfig::default_sort")]
    pub sort: bool,
}

impl ExtractConfig {
    fn default_threshold() -> f64 {
        0.75
    }
    fn default_sort() -> bool {
        true
    }

    pub fn options(&self) -> ExtractOptions {
        ExtractOptions {
            threshold: self.threshold,
            skip_negatives: self.skip_negatives,
            sort: self.sort,
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
            skip_negatives: false,
            sort: Self::default_sort(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default = "PlotConfig::default_cmap")]
    pub cmap: ColorScale,
    /// Fixed color limits as `[lo, hi]`; omit for automatic limits.
    #[serde(default = "PlotConfig::default_clim")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clim: Option<(f64, f64)>,
    #[serde(default = "PlotConfig::default_width_px")]
    pub width_px: u32,
    #[serde(default = "PlotConfig::default_height_px")]
    pub height_px: u32,
    #[serde(default = "PlotConfig::default_annotate")]
    pub annotate: bool,
}

impl PlotConfig {
    fn default_cmap() -> ColorScale {
        ColorScale::RdBu
    }
    fn default_clim() -> Option<(f64, f64)> {
        Some((-1.0, 1.0))
    }
    fn default_width_px() -> u32 {
        900
    }
    fn default_height_px() -> u32 {
        900
    }
    fn default_annotate() -> bool {
        true
    }

    pub fn style(&self) -> EllipseStyle {
        EllipseStyle {
            cmap: self.cmap,
            clim: self.clim,
            width_px: self.width_px,
            height_px: self.height_px,
            annotate: self.annotate,
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            cmap: Self::default_cmap(),
            clim: Self::default_clim(),
            width_px: Self::default_width_px(),
            height_px: Self::default_height_px(),
            annotate: Self::default_annotate(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub plot: PlotConfig,
}

impl AppConfig {
    /// Load config from `path`, falling back to defaults on parse errors.
    /// When the file does not exist, write the defaults as a commented
    /// template so the knobs are discoverable.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    eprintln!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write commented defaults and return them.
        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                let mut commented = String::new();
                for line in text.lines() {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        commented.push('\n');
                    } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
                        commented.push_str(line);
                        commented.push('\n');
                    } else {
                        commented.push_str("# ");
                        commented.push_str(line);
                        commented.push('\n');
                    }
                }
                if let Err(err) = fs::write(path_obj, commented) {
                    eprintln!("Failed to write default config to {path}: {err}");
                }
            }
            Err(_) => {
                eprintln!("Failed to serialize default config; continuing with defaults");
            }
        }
        default_cfg
    }
}
