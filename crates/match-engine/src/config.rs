//! Game Configuration
//!
//! Everything that is fixed for the lifetime of a page: the pair catalog,
//! connector style, cosmetic offsets and verdict messages.

use serde::Deserialize;

use crate::catalog::{default_pairs, Pair, PairCatalog};
use crate::error::ConfigError;

pub const DEFAULT_IMAGE_DIR: &str = "images";
pub const DEFAULT_LINE_COLOR: &str = "#636569";
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
pub const DEFAULT_SUCCESS_MESSAGE: &str = "¡Correcto! Has hecho todas las relaciones correctamente.";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Algunas relaciones no son correctas. Intenta de nuevo.";

/// Static widget configuration (missing JSON fields take defaults)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub pairs: Vec<Pair>,
    pub image_dir: String,
    pub line_color: String,
    pub line_width: f64,
    /// Half-open `[min, max)` range for the random top margin, in px
    pub offset_range_px: [f64; 2],
    pub success_message: String,
    pub failure_message: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pairs: default_pairs(),
            image_dir: DEFAULT_IMAGE_DIR.to_string(),
            line_color: DEFAULT_LINE_COLOR.to_string(),
            line_width: DEFAULT_LINE_WIDTH,
            offset_range_px: [10.0, 40.0],
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let [min, max] = self.offset_range_px;
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ConfigError::InvalidOffsetRange);
        }
        self.catalog().map(|_| ())
    }

    pub fn catalog(&self) -> Result<PairCatalog, ConfigError> {
        PairCatalog::new(self.pairs.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.catalog().unwrap(), PairCatalog::reference());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r##"{ "line_color": "#ff0000" }"##).unwrap();
        assert_eq!(config.line_color, "#ff0000");
        assert_eq!(config.line_width, DEFAULT_LINE_WIDTH);
        assert_eq!(config.pairs.len(), 3);
    }

    #[test]
    fn test_custom_pairs() {
        let json = r#"{ "pairs": [ { "left": "A", "right": "1" }, { "left": "B", "right": "2" } ] }"#;
        let config = GameConfig::from_json(json).unwrap();
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("B", "2"));
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(GameConfig::from_json("not json"), Err(ConfigError::Parse(_))));
        assert_eq!(
            GameConfig::from_json(r#"{ "pairs": [] }"#),
            Err(ConfigError::EmptyCatalog)
        );
        assert_eq!(
            GameConfig::from_json(r#"{ "offset_range_px": [40.0, 10.0] }"#),
            Err(ConfigError::InvalidOffsetRange)
        );
    }
}
