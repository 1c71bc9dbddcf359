//! Menu transition animation configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest accepted open or hide animation, in seconds.
pub const MAX_ANIMATION_SECS: f64 = 5.0;

/// Spring animation parameters for opening and hiding the menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Open animation duration in seconds (valid range: 0.0-5.0).
    pub open_duration: f64,
    /// Hide animation duration in seconds (valid range: 0.0-5.0).
    pub hide_duration: f64,
    /// Spring damping ratio (valid range: 0.0-1.0).
    pub damping_ratio: f64,
    /// Initial spring velocity (valid range: 0.0-10.0).
    pub initial_spring_velocity: f64,
    /// Dim the content with a shadow overlay while the menu is open.
    pub shadow_enabled: bool,
    /// Overlay alpha when fully open (valid range: 0.0-1.0).
    pub shadow_alpha: f64,
}

impl AnimationConfig {
    /// Animation length for opening or hiding, clamped to
    /// `0..=MAX_ANIMATION_SECS`. NaN yields zero.
    pub fn duration(&self, opening: bool) -> Duration {
        let secs = if opening {
            self.open_duration
        } else {
            self.hide_duration
        };
        Duration::try_from_secs_f64(secs.clamp(0.0, MAX_ANIMATION_SECS)).unwrap_or(Duration::ZERO)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            open_duration: 0.4,
            hide_duration: 0.4,
            damping_ratio: 1.0,
            initial_spring_velocity: 1.0,
            shadow_enabled: true,
            shadow_alpha: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_config_defaults() {
        let config = AnimationConfig::default();
        assert!((config.open_duration - 0.4).abs() < f64::EPSILON);
        assert!((config.hide_duration - 0.4).abs() < f64::EPSILON);
        assert!((config.damping_ratio - 1.0).abs() < f64::EPSILON);
        assert!(config.shadow_enabled);
        assert!((config.shadow_alpha - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn duration_picks_direction() {
        let config = AnimationConfig {
            open_duration: 0.25,
            hide_duration: 0.5,
            ..AnimationConfig::default()
        };
        assert_eq!(config.duration(true), Duration::from_millis(250));
        assert_eq!(config.duration(false), Duration::from_millis(500));
    }

    #[test]
    fn duration_clamps_out_of_range_values() {
        let config = AnimationConfig {
            open_duration: f64::INFINITY,
            hide_duration: 1e300,
            ..AnimationConfig::default()
        };
        assert_eq!(config.duration(true), Duration::from_secs(5));
        assert_eq!(config.duration(false), Duration::from_secs(5));

        let config = AnimationConfig {
            open_duration: f64::NAN,
            hide_duration: -2.0,
            ..AnimationConfig::default()
        };
        assert_eq!(config.duration(true), Duration::ZERO);
        assert_eq!(config.duration(false), Duration::ZERO);
    }

    #[test]
    fn animation_config_partial_toml() {
        let toml_str = r#"
open_duration = 0.3
shadow_alpha = 0.5
"#;
        let config: AnimationConfig = toml::from_str(toml_str).unwrap();
        assert!((config.open_duration - 0.3).abs() < f64::EPSILON);
        assert!((config.shadow_alpha - 0.5).abs() < f64::EPSILON);
        // Defaults preserved
        assert!((config.hide_duration - 0.4).abs() < f64::EPSILON);
        assert!(config.shadow_enabled);
    }
}
