use chrono::{Local, NaiveDate};
use egui::{Color32, Margin, Pos2, Rect, Stroke, Vec2};

use crate::models::event::Event;

pub mod day_view;
pub mod interactive_day_view;
pub(crate) mod palette;

use self::palette::DayStripPalette;

/// Width of the time label column left of every row
pub const TIME_GUTTER: f32 = 55.0;

/// Day name, date and a "Today" badge above the time grid
pub(crate) fn render_day_header(ui: &mut egui::Ui, date: NaiveDate, palette: &DayStripPalette) {
    let is_today = date == Local::now().date_naive();
    let day_name = date.format("%A").to_string();
    let date_label = date.format("%B %d, %Y").to_string();

    let header_frame = egui::Frame::none()
        .fill(palette.strip_bg)
        .rounding(egui::Rounding::same(12.0))
        .stroke(Stroke::new(1.0, palette.strip_border))
        .inner_margin(Margin::symmetric(16.0, 12.0));

    let header_response = header_frame.show(ui, |strip_ui| {
        strip_ui.horizontal(|row_ui| {
            row_ui.vertical(|text_ui| {
                let heading_color = if is_today {
                    palette.today_text
                } else {
                    palette.text
                };
                text_ui.label(
                    egui::RichText::new(&day_name)
                        .size(24.0)
                        .color(heading_color)
                        .strong(),
                );
                text_ui.label(egui::RichText::new(&date_label).size(14.0).color(palette.text));
            });

            let remaining_width = row_ui.available_width();
            row_ui.with_layout(
                egui::Layout::right_to_left(egui::Align::Center),
                |today_ui| {
                    today_ui.set_width(remaining_width);
                    if is_today {
                        egui::Frame::none()
                            .fill(palette.badge_bg)
                            .rounding(egui::Rounding::same(10.0))
                            .inner_margin(Margin::symmetric(12.0, 6.0))
                            .show(today_ui, |badge_ui| {
                                badge_ui.label(
                                    egui::RichText::new("Today")
                                        .color(palette.badge_text)
                                        .size(12.0)
                                        .strong(),
                                );
                            });
                    }
                },
            );
        });
    });

    let header_rect = header_response.response.rect;
    ui.painter().hline(
        header_rect.x_range(),
        header_rect.bottom(),
        Stroke::new(1.0, palette.accent_line),
    );
    ui.add_space(8.0);
}

/// Paint an event with a darker accent bar, its time range and title.
pub(crate) fn paint_event_block(
    ui: &egui::Ui,
    rect: Rect,
    event: &Event,
    color: Color32,
    text_color: Color32,
) {
    ui.painter().rect_filled(rect, 2.0, color);

    let bar_rect = Rect::from_min_size(rect.min, Vec2::new(4.0, rect.height()));
    ui.painter()
        .rect_filled(bar_rect, 2.0, color.linear_multiply(0.7));

    let text_left = bar_rect.right() + 5.0;
    let text_width = (rect.right() - text_left - 4.0).max(0.0);

    // Time range only when there is room for two lines
    let title_top = if rect.height() >= 30.0 {
        ui.painter().text(
            Pos2::new(text_left, rect.top() + 2.0),
            egui::Align2::LEFT_TOP,
            event.time_range_label(),
            egui::FontId::proportional(10.0),
            text_color,
        );
        rect.top() + 14.0
    } else {
        rect.top() + 1.0
    };

    let layout_job = egui::text::LayoutJob::simple_singleline(
        event.title.clone(),
        egui::FontId::proportional(13.0),
        text_color,
    );
    let galley = ui.fonts(|f| f.layout_job(layout_job));
    let clip = Rect::from_min_size(
        Pos2::new(text_left, rect.top()),
        Vec2::new(text_width, rect.height()),
    );
    ui.painter()
        .with_clip_rect(clip)
        .galley(Pos2::new(text_left, title_top), galley, text_color);
}

/// Lighter strip marking rows an event continues through
pub(crate) fn paint_event_continuation(ui: &egui::Ui, rect: Rect, color: Color32) {
    let bar_rect = Rect::from_min_size(rect.min, Vec2::new(4.0, rect.height()));
    ui.painter().rect_filled(bar_rect, 2.0, color);

    let bg_rect = Rect::from_min_max(Pos2::new(bar_rect.right() + 5.0, rect.top()), rect.max);
    ui.painter()
        .rect_filled(bg_rect, 2.0, color.linear_multiply(0.3));
}
