// Settings module
// User-tunable configuration, stored as TOML

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::time_slot::Granularity;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("{field} must be a positive number of pixels, got {value}")]
    NonPositiveHeight { field: &'static str, value: f32 },
    #[error("Swipe threshold must be zero or positive, got {0}")]
    NegativeSwipeThreshold(f32),
}

/// Which day view the window shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayViewKind {
    /// Quarter-hour rows with slot selection and an add-event panel
    Simple,
    /// Half-hour rows with draggable, resizable events
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    System,
    Light,
    Dark,
}

/// What submitting the add-event panel does to the existing events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddEventPolicy {
    /// Keep existing events and add the new one
    Append,
    /// Discard every existing event, leaving only the new one
    Replace,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleViewSettings {
    pub granularity: Granularity,
    pub row_height: f32,
}

impl Default for SimpleViewSettings {
    fn default() -> Self {
        Self {
            granularity: Granularity::Quarter,
            row_height: 44.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractiveViewSettings {
    pub granularity: Granularity,
    pub slot_height: f32,
}

impl Default for InteractiveViewSettings {
    fn default() -> Self {
        Self {
            granularity: Granularity::Half,
            slot_height: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_view: DayViewKind,
    pub theme: ThemePreference,
    /// Horizontal travel (px) a touch must cover to count as a swipe
    pub swipe_threshold: f32,
    pub add_event_policy: AddEventPolicy,
    /// Discard drag/resize results whose end is not after their start
    pub enforce_valid_duration: bool,
    pub simple: SimpleViewSettings,
    pub interactive: InteractiveViewSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_view: DayViewKind::Interactive,
            theme: ThemePreference::System,
            swipe_threshold: 50.0,
            add_event_policy: AddEventPolicy::Append,
            enforce_valid_duration: true,
            simple: SimpleViewSettings::default(),
            interactive: InteractiveViewSettings::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        let heights = [
            ("simple.row_height", self.simple.row_height),
            ("interactive.slot_height", self.interactive.slot_height),
        ];
        for (field, value) in heights {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::NonPositiveHeight { field, value });
            }
        }

        if !(self.swipe_threshold >= 0.0) {
            return Err(SettingsError::NegativeSwipeThreshold(self.swipe_threshold));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.simple.granularity, Granularity::Quarter);
        assert_eq!(settings.interactive.granularity, Granularity::Half);
        assert_eq!(settings.interactive.slot_height, 30.0);
        assert_eq!(settings.swipe_threshold, 50.0);
    }

    #[test]
    fn test_zero_slot_height_rejected() {
        let mut settings = Settings::default();
        settings.interactive.slot_height = 0.0;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::NonPositiveHeight {
                field: "interactive.slot_height",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_swipe_threshold_rejected() {
        let mut settings = Settings::default();
        settings.swipe_threshold = -1.0;
        assert_eq!(
            settings.validate(),
            Err(SettingsError::NegativeSwipeThreshold(-1.0))
        );
    }
}
