use super::state::AppState;
use super::DayViewApp;
use crate::models::settings::Settings;
use crate::ui_egui::theme::CalendarTheme;
use chrono::Local;

impl DayViewApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let active_theme = CalendarTheme::for_preference(settings.theme);
        active_theme.apply_to_context(&cc.egui_ctx);
        log::info!(
            "Using {} theme ({:?} preference)",
            if active_theme.is_dark { "dark" } else { "light" },
            settings.theme
        );

        let state = AppState::new(&settings);
        Self {
            current_date: Local::now().date_naive(),
            active_theme,
            state,
        }
    }
}
