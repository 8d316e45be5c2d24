mod lifecycle;
mod navigation;
mod shortcuts;
mod state;

use self::state::AppState;
use crate::models::settings::DayViewKind;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::day_view::DayView;
use crate::ui_egui::views::interactive_day_view::InteractiveDayView;
use chrono::{Local, NaiveDate};
use egui_extras::DatePickerButton;

pub struct DayViewApp {
    current_date: NaiveDate,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
    /// Per-view state and activation-scoped resources
    state: AppState,
}

impl eframe::App for DayViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(direction) = self.state.poll_swipe(ctx) {
            self.navigate_swipe(direction);
        }
        self.handle_keyboard_shortcuts(ctx);

        egui::TopBottomPanel::top("day_view_header")
            .frame(
                egui::Frame::none()
                    .fill(self.active_theme.app_background)
                    .inner_margin(egui::Margin::symmetric(12.0, 8.0)),
            )
            .show(ctx, |ui| self.render_header(ui));

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.active_theme.calendar_background)
                    .inner_margin(egui::Margin::same(8.0)),
            )
            .show(ctx, |ui| match self.state.current_view() {
                DayViewKind::Simple => DayView::show(
                    ui,
                    &mut self.state.simple,
                    self.current_date,
                    &self.active_theme,
                ),
                DayViewKind::Interactive => InteractiveDayView::show(
                    ui,
                    &mut self.state.interactive,
                    self.current_date,
                    &self.active_theme,
                ),
            });
    }
}

impl DayViewApp {
    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("◀").on_hover_text("Previous day").clicked() {
                self.navigate_previous();
            }
            ui.label(
                egui::RichText::new(self.current_date.format("%a %b %d %Y").to_string())
                    .strong()
                    .size(16.0),
            );
            if ui.button("▶").on_hover_text("Next day").clicked() {
                self.navigate_next();
            }

            ui.add(DatePickerButton::new(&mut self.current_date).id_source("day_view_date"));

            let is_today = self.current_date == Local::now().date_naive();
            if ui.add_enabled(!is_today, egui::Button::new("Today")).clicked() {
                self.jump_to_today();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut view = self.state.current_view();
                ui.selectable_value(&mut view, DayViewKind::Interactive, "Interactive");
                ui.selectable_value(&mut view, DayViewKind::Simple, "Simple");
                if view != self.state.current_view() {
                    self.state.switch_to(view);
                }
            });
        });
    }
}
