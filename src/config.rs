//! Viewer options.
//!
//! Options are set by name through `setoption name <id> value <x>`, the
//! same way engine options are set over a line protocol.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionError {
    #[error("unknown option '{0}'")]
    Unknown(String),

    #[error("option '{name}' needs a value")]
    MissingValue { name: String },

    #[error("invalid value '{value}' for option '{name}'")]
    InvalidValue { name: String, value: String },
}

/// Rendering and playback settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Available drawing area in pixels.
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Perpendicular shift for a river drawn over an already-taken one.
    pub parallel_offset: f64,
    /// Autoplay tick period.
    pub autoplay_interval_ms: u64,
    pub river_width: f64,
    pub claim_width: f64,
    /// Width of the edges produced by the latest applied move.
    pub latest_width: f64,
    pub site_radius: f64,
    pub mine_radius: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            parallel_offset: 3.0,
            autoplay_interval_ms: 50,
            river_width: 1.0,
            claim_width: 2.0,
            latest_width: 5.0,
            site_radius: 3.0,
            mine_radius: 6.0,
        }
    }
}

impl ViewerConfig {
    /// Updates one option by name. Names match case-insensitively.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        let value = value.ok_or_else(|| OptionError::MissingValue { name: name.to_string() })?;
        match name.to_ascii_lowercase().as_str() {
            "viewportwidth" => self.viewport_width = parse_positive(name, value)?,
            "viewportheight" => self.viewport_height = parse_positive(name, value)?,
            "paralleloffset" => self.parallel_offset = parse_positive(name, value)?,
            "riverwidth" => self.river_width = parse_positive(name, value)?,
            "claimwidth" => self.claim_width = parse_positive(name, value)?,
            "latestwidth" => self.latest_width = parse_positive(name, value)?,
            "siteradius" => self.site_radius = parse_positive(name, value)?,
            "mineradius" => self.mine_radius = parse_positive(name, value)?,
            "autoplayinterval" => {
                self.autoplay_interval_ms = value.parse().map_err(|_| invalid(name, value))?
            }
            _ => return Err(OptionError::Unknown(name.to_string())),
        }
        Ok(())
    }
}

fn parse_positive(name: &str, value: &str) -> Result<f64, OptionError> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(invalid(name, value)),
    }
}

fn invalid(name: &str, value: &str) -> OptionError {
    OptionError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    }
}
