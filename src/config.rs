use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::DEFAULT_HIT_RADIUS;
use crate::raster::WHITE;
use crate::rasterizer::DEFAULT_DOT_INTERVAL;

pub const DEFAULT_BACKGROUND: u32 = 0x00AA_AAAA;

/// Editor settings, read from JSON. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Raster width in pixels.
    pub width: usize,
    /// Raster height in pixels.
    pub height: usize,
    /// Clear color, 0xRRGGBB.
    pub background: u32,
    /// Color for lines that carry no color of their own, 0xRRGGBB.
    pub line_color: u32,
    /// Distance within which a press grabs a polygon vertex.
    pub hit_radius: i32,
    /// Dotted lines keep one sample out of this many.
    pub dot_interval: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: DEFAULT_BACKGROUND,
            line_color: WHITE,
            hit_radius: DEFAULT_HIT_RADIUS,
            dot_interval: DEFAULT_DOT_INTERVAL,
        }
    }
}

impl EditorConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid {
                field: if self.width == 0 { "width" } else { "height" },
                reason: "raster dimensions must be non-zero".to_string(),
            });
        }
        if self.dot_interval == 0 {
            return Err(ConfigError::Invalid {
                field: "dot_interval",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.hit_radius < 0 {
            return Err(ConfigError::Invalid {
                field: "hit_radius",
                reason: format!("{} is negative", self.hit_radius),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: EditorConfig = serde_json::from_str(r#"{ "width": 320, "hit_radius": 10 }"#).unwrap();
        assert_eq!(config.width, 320);
        assert_eq!(config.hit_radius, 10);
        assert_eq!(config.height, 600);
        assert_eq!(config.background, DEFAULT_BACKGROUND);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_height = EditorConfig { height: 0, ..EditorConfig::default() };
        assert!(matches!(
            zero_height.validate(),
            Err(ConfigError::Invalid { field: "height", .. })
        ));

        let no_dots = EditorConfig { dot_interval: 0, ..EditorConfig::default() };
        assert!(matches!(
            no_dots.validate(),
            Err(ConfigError::Invalid { field: "dot_interval", .. })
        ));

        let negative = EditorConfig { hit_radius: -1, ..EditorConfig::default() };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = EditorConfig::load("/nonexistent/line_sketch.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!("line_sketch_config_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "dot_interval": 3 }"#).unwrap();
        let config = EditorConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.dot_interval, 3);
    }

    #[test]
    fn test_load_reports_parse_error() {
        let path = std::env::temp_dir().join(format!("line_sketch_bad_{}.json", std::process::id()));
        std::fs::write(&path, "{ width: ").unwrap();
        let err = EditorConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
