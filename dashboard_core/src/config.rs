//! Dashboard configuration.
//!
//! Every field has a default reproducing the stock Sunkist OS screen, so a
//! config file only needs the keys it wants to change.

use crate::{
    button::ButtonIcon, error::DashboardError, particles::ParticleConfig, status::StatusConfig,
    types::finite_range,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound on `log.max_lines` accepted from a config file.
pub const MAX_LOG_LINES: usize = 1_000;
/// Upper bound on `particles.count` accepted from a config file.
pub const MAX_PARTICLES: usize = 1_000_000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Sunkist OS - GUI Placeholder".into(),
            width: 1600.0,
            height: 900.0,
        }
    }
}

/// Static header/footer text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub title: String,
    pub title_size: f32,
    /// Distance from the top edge to the title center
    pub title_y: f32,
    pub status: String,
    pub status_size: f32,
    pub clock_size: f32,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            title: "Sunkist OS".into(),
            title_size: 80.0,
            title_y: 100.0,
            status: "System Status: Nominal".into(),
            status_size: 16.0,
            clock_size: 18.0,
        }
    }
}

/// Vertical column of icon buttons.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Top-left corner of the first button
    pub origin: [f32; 2],
    /// Vertical distance between button tops
    pub spacing: f32,
    pub size: f32,
    /// One entry per button
    pub icons: Vec<ButtonIcon>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            origin: [20.0, 100.0],
            spacing: 80.0,
            size: 60.0,
            icons: vec![ButtonIcon::Dot; 5],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub max_lines: usize,
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub line_height: f32,
    pub font_size: f32,
    /// A status line is appended once more than this many seconds have
    /// accumulated since the previous one
    pub interval_secs: f32,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            max_lines: 15,
            position: [1180.0, 50.0],
            size: [400.0, 340.0],
            line_height: 20.0,
            font_size: 14.0,
            interval_secs: 1.5,
        }
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub window: WindowConfig,
    pub text: TextConfig,
    pub particles: ParticleConfig,
    pub sidebar: SidebarConfig,
    pub log: LogConfig,
    pub status: StatusConfig,
}

impl DashboardConfig {
    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, DashboardError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DashboardError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&raw).map_err(|source| DashboardError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        tracing::info!(path = %path.display(), "Loaded dashboard config");
        Ok(config)
    }

    /// Load `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, DashboardError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        self.particles.validate()?;
        if self.particles.count > MAX_PARTICLES {
            return Err(DashboardError::InvalidConfig(format!(
                "particles: count {} exceeds {MAX_PARTICLES}",
                self.particles.count
            )));
        }
        if self.log.max_lines > MAX_LOG_LINES {
            return Err(DashboardError::InvalidConfig(format!(
                "log: max_lines {} exceeds {MAX_LOG_LINES}",
                self.log.max_lines
            )));
        }
        if !(self.log.interval_secs > 0.0) {
            return Err(DashboardError::InvalidConfig(
                "log: interval_secs must be positive".into(),
            ));
        }
        if !(finite_range(self.status.temp_min, self.status.temp_max)
            && self.status.temp_min <= self.status.temp_max)
        {
            return Err(DashboardError::InvalidConfig(format!(
                "status: temperature range [{}, {}] is not ordered",
                self.status.temp_min, self.status.temp_max
            )));
        }
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(DashboardError::InvalidConfig(
                "window: width and height must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let cfg: DashboardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, DashboardConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg: DashboardConfig = serde_json::from_str(
            r#"{ "log": { "max_lines": 4 }, "particles": { "count": 10 },
                 "sidebar": { "icons": ["dot", { "glyph": "S" }] } }"#,
        )
        .unwrap();
        assert_eq!(cfg.log.max_lines, 4);
        assert_eq!(cfg.log.interval_secs, 1.5);
        assert_eq!(cfg.particles.count, 10);
        assert_eq!(cfg.particles.lifetime_max, 7.0);
        assert_eq!(
            cfg.sidebar.icons,
            vec![ButtonIcon::Dot, ButtonIcon::Glyph("S".into())]
        );
    }

    #[test]
    fn json_round_trip_of_defaults() {
        let cfg = DashboardConfig::default();
        let back: DashboardConfig = serde_json::from_str(&cfg.to_json_pretty().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn validate_rejects_zero_log_interval() {
        let mut cfg = DashboardConfig::default();
        cfg.log.interval_secs = 0.0;
        assert!(matches!(cfg.validate(), Err(DashboardError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_oversized_pools() {
        let cfg: DashboardConfig =
            serde_json::from_str(r#"{ "log": { "max_lines": 18446744073709551615 } }"#).unwrap();
        assert!(matches!(cfg.validate(), Err(DashboardError::InvalidConfig(_))));

        let mut cfg = DashboardConfig::default();
        cfg.particles.count = MAX_PARTICLES + 1;
        assert!(matches!(cfg.validate(), Err(DashboardError::InvalidConfig(_))));

        cfg.particles.count = MAX_PARTICLES;
        cfg.log.max_lines = MAX_LOG_LINES;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_nan_temperature() {
        let mut cfg = DashboardConfig::default();
        cfg.status.temp_min = f32::NAN;
        assert!(matches!(cfg.validate(), Err(DashboardError::InvalidConfig(_))));

        let mut cfg = DashboardConfig::default();
        cfg.status.temp_max = f32::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_overflowing_float_ranges() {
        // 1e39 does not fit in an f32 and parses as infinity
        let cfg: DashboardConfig =
            serde_json::from_str(r#"{ "particles": { "lifetime_max": 1e39 } }"#).unwrap();
        assert!(cfg.particles.lifetime_max.is_infinite());
        assert!(matches!(cfg.validate(), Err(DashboardError::InvalidConfig(_))));

        let cfg: DashboardConfig =
            serde_json::from_str(r#"{ "status": { "temp_min": -3e38, "temp_max": 3e38 } }"#)
                .unwrap();
        assert!(matches!(cfg.validate(), Err(DashboardError::InvalidConfig(_))));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = DashboardConfig::load(Path::new("/nonexistent/sunkist.json")).unwrap_err();
        assert!(matches!(err, DashboardError::ConfigRead { .. }));
    }

    #[test]
    fn load_reports_malformed_json() {
        let path = std::env::temp_dir().join(format!("sunkist-bad-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let err = DashboardConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, DashboardError::ConfigParse { .. }));
    }

    #[test]
    fn load_or_default_without_path() {
        assert_eq!(
            DashboardConfig::load_or_default(None).unwrap(),
            DashboardConfig::default()
        );
    }
}
