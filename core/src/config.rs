use std::fmt;

use serde::Deserialize;

pub const DEFAULT_CATEGORY: &str = "animation";
pub const DEFAULT_BACK_TO_TOP_ANCHOR: &str = "skills";
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_FADE_IN_DELAY_MS: u32 = 10;
pub const DEFAULT_MOBILE_BREAKPOINT_PX: f64 = 992.0;
pub const DEFAULT_INERTIA_LERP: f64 = 0.1;
pub const DEFAULT_CURSOR_EASE: f64 = 0.15;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub reveal_threshold: f64,
    pub fade_in_delay_ms: u32,
    pub default_category: String,
    pub mobile_breakpoint_px: f64,
    pub back_to_top_anchor: String,
    pub smooth_scroll: bool,
    pub inertia_lerp: f64,
    pub fetch_vimeo_thumbnails: bool,
    pub cursor_ease: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            fade_in_delay_ms: DEFAULT_FADE_IN_DELAY_MS,
            default_category: DEFAULT_CATEGORY.to_string(),
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            back_to_top_anchor: DEFAULT_BACK_TO_TOP_ANCHOR.to_string(),
            smooth_scroll: true,
            inertia_lerp: DEFAULT_INERTIA_LERP,
            fetch_vimeo_thumbnails: true,
            cursor_ease: DEFAULT_CURSOR_EASE,
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        let config: PageConfig =
            serde_json::from_str(trimmed).map_err(|err| ConfigError::Json(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::OutOfRange {
                field: "reveal_threshold",
                value: self.reveal_threshold,
            });
        }
        if !(self.inertia_lerp > 0.0 && self.inertia_lerp <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "inertia_lerp",
                value: self.inertia_lerp,
            });
        }
        if !(self.cursor_ease > 0.0 && self.cursor_ease <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "cursor_ease",
                value: self.cursor_ease,
            });
        }
        if !(self.mobile_breakpoint_px >= 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "mobile_breakpoint_px",
                value: self.mobile_breakpoint_px,
            });
        }
        if self.default_category.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "default_category",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Json(String),
    OutOfRange { field: &'static str, value: f64 },
    Empty { field: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Json(message) => write!(f, "invalid config json: {message}"),
            ConfigError::OutOfRange { field, value } => {
                write!(f, "{field} out of range: {value}")
            }
            ConfigError::Empty { field } => write!(f, "{field} must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}
