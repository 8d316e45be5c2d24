//! Theme module for the egui day view
//!
//! Defines the CalendarTheme structure, resolves the configured theme
//! preference, and parses event colors.

use egui::Color32;

use crate::models::settings::ThemePreference;

/// A calendar theme defining all colors used in the application
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Time grid background color
    pub calendar_background: Color32,

    /// Highlight for today / the selected slot
    pub today_background: Color32,

    /// Accent border color
    pub today_border: Color32,

    /// Regular row background color
    pub day_background: Color32,

    /// Row border color
    pub day_border: Color32,

    /// Primary text color (headings, titles)
    pub text_primary: Color32,

    /// Secondary text color (slot labels)
    pub text_secondary: Color32,

    /// Fallback fill for events without a color
    pub event_default: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            calendar_background: Color32::from_rgb(255, 255, 255),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(220, 220, 220),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            event_default: Color32::from_rgb(100, 150, 200),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            calendar_background: Color32::from_rgb(40, 40, 40),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(40, 40, 40),
            day_border: Color32::from_rgb(60, 60, 60),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            event_default: Color32::from_rgb(80, 120, 170),
        }
    }

    /// Pick the theme for a preference, asking the OS when set to `System`
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        visuals.widgets.noninteractive.bg_fill = self.day_background;
        visuals.widgets.inactive.bg_fill = self.day_background;
        visuals.widgets.hovered.bg_fill = self.today_background;
        visuals.widgets.active.bg_fill = self.today_background;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }

    /// Fill color for an event, falling back to the theme default
    pub fn event_color(&self, hex: Option<&str>) -> Color32 {
        hex.and_then(|hex| Self::hex_to_color(hex).ok())
            .unwrap_or(self.event_default)
    }

    /// Parse `#RRGGBB` or `#RGB` to Color32
    pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
        let hex = hex.trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err("Invalid hex color".to_string());
        }
        let expanded: String = match hex.len() {
            6 => hex.to_string(),
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err("Hex color must be 3 or 6 characters".to_string()),
        };

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16).map_err(|_| "Invalid hex color".to_string())
        };
        Ok(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color() {
        let result = CalendarTheme::hex_to_color("#FF8040").unwrap();
        assert_eq!(result, Color32::from_rgb(255, 128, 64));

        let result2 = CalendarTheme::hex_to_color("FF8040").unwrap();
        assert_eq!(result2, Color32::from_rgb(255, 128, 64));
    }

    #[test]
    fn test_short_hex_to_color() {
        let result = CalendarTheme::hex_to_color("#F84").unwrap();
        assert_eq!(result, Color32::from_rgb(255, 136, 68));
    }

    #[test]
    fn test_bad_hex() {
        assert!(CalendarTheme::hex_to_color("#GG0000").is_err());
        assert!(CalendarTheme::hex_to_color("#12345").is_err());
    }

    #[test]
    fn test_event_color_fallback() {
        let theme = CalendarTheme::light();
        assert_eq!(theme.event_color(None), theme.event_default);
        assert_eq!(theme.event_color(Some("red")), theme.event_default);
        assert_eq!(
            theme.event_color(Some("#000000")),
            Color32::from_rgb(0, 0, 0)
        );
    }

    #[test]
    fn test_light_theme() {
        let theme = CalendarTheme::light();
        assert!(!theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(245, 245, 245));
    }

    #[test]
    fn test_dark_theme() {
        let theme = CalendarTheme::dark();
        assert!(theme.is_dark);
        assert_eq!(
            CalendarTheme::for_preference(ThemePreference::Dark),
            theme
        );
    }
}
