use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub autoplay: AutoplayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
            motion: MotionConfig::default(),
            autoplay: AutoplayConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Compact/embedded mode: the carousel lives inside a scrollable page,
    /// scroll capture and autoplay are active. Full/hero mode disables both.
    #[serde(default = "default_true")]
    pub compact: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            compact: default_true(),
        }
    }
}

/// Gesture and transition tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Committed transition duration in milliseconds. The animation lock is
    /// held for exactly this long.
    #[serde(default = "default_transition_duration")]
    pub transition_duration_ms: u64,
    /// Fraction of the viewport width a drag must cover to commit a slide
    /// change instead of rolling back
    #[serde(default = "default_commit_threshold")]
    pub commit_threshold: f64,
    /// Easing function for the glide into place
    #[serde(default)]
    pub easing: EasingType,
    /// Frames per second while a transition is playing
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            transition_duration_ms: default_transition_duration(),
            commit_threshold: default_commit_threshold(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoplayConfig {
    /// Autoplay advance period in milliseconds (0 = disabled)
    #[serde(default = "default_autoplay_interval")]
    pub interval_ms: u64,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_autoplay_interval(),
        }
    }
}

/// Easing function selector for the settle animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// No interpolation, jump at the end
    None,
    Linear,
    Cubic,
    Quintic,
    #[serde(rename = "ease-out")]
    EaseOut,
}

impl Default for EasingType {
    fn default() -> Self {
        EasingType::Cubic
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_transition_duration() -> u64 {
    750
}

fn default_commit_threshold() -> f64 {
    0.2
}

fn default_animation_fps() -> u16 {
    60
}

fn default_autoplay_interval() -> u64 {
    3000
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/slidewheel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("slidewheel")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.motion.transition_duration_ms, 750);
        assert!((config.motion.commit_threshold - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.motion.easing, EasingType::Cubic);
        assert_eq!(config.autoplay.interval_ms, 3000);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(config.ui.compact);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [motion]
            transition_duration_ms = 300
            easing = "quintic"
            "#,
        )
        .unwrap();
        assert_eq!(config.motion.transition_duration_ms, 300);
        assert_eq!(config.motion.easing, EasingType::Quintic);
        // Untouched sections keep their defaults
        assert_eq!(config.autoplay.interval_ms, 3000);
        assert!((config.motion.commit_threshold - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_easing_roundtrip() {
        let config = AppConfig {
            motion: MotionConfig {
                easing: EasingType::EaseOut,
                ..Default::default()
            },
            ..Default::default()
        };
        let serialized = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.motion.easing, EasingType::EaseOut);
    }
}
