// Event Resize Glue
//
// Bottom-edge handle for changing an event's end time. The handle is a
// strip along the bottom of the event block with its own drag sense, so a
// press on it resizes instead of moving the event.

use egui::{Color32, CursorIcon, Pos2, Rect, Response, Stroke, Vec2};

use crate::models::event::Event;
use crate::models::time_slot::TimeSlot;
use crate::services::gesture::{GestureTracker, Reschedule};
use crate::services::layout::SlotGeometry;

/// Height of the handle hit area
pub const HANDLE_SIZE: f32 = 8.0;
/// Visual size of the handle circle
pub const HANDLE_VISUAL_SIZE: f32 = 6.0;

/// Hit area of the bottom handle for an event drawn in `event_rect`.
///
/// Short blocks give the handle at most half their height so the body
/// stays grabbable.
pub fn bottom_handle_rect(event_rect: Rect) -> Rect {
    let zone_height = HANDLE_SIZE.min(event_rect.height() / 2.0);
    Rect::from_min_size(
        Pos2::new(event_rect.left(), event_rect.bottom() - zone_height),
        Vec2::new(event_rect.width(), zone_height),
    )
}

/// Draw the bar and grip circle of a bottom handle.
pub fn draw_handle(ui: &egui::Ui, handle: Rect, hovered: bool, color: Color32) {
    let bar_width = handle.width().min(40.0);
    let bar_y = handle.bottom() - 2.0;
    let center = Pos2::new(handle.center().x, handle.center().y);

    ui.painter().line_segment(
        [
            Pos2::new(center.x - bar_width / 2.0, bar_y),
            Pos2::new(center.x + bar_width / 2.0, bar_y),
        ],
        Stroke::new(
            if hovered { 3.0 } else { 2.0 },
            if hovered {
                Color32::WHITE
            } else {
                Color32::from_rgba_unmultiplied(255, 255, 255, 180)
            },
        ),
    );

    let radius = if hovered {
        HANDLE_VISUAL_SIZE / 2.0 + 2.0
    } else {
        HANDLE_VISUAL_SIZE / 2.0
    };
    ui.painter().circle_filled(
        center,
        radius,
        if hovered {
            Color32::WHITE
        } else {
            Color32::from_rgba_unmultiplied(255, 255, 255, 220)
        },
    );
    ui.painter().circle_stroke(
        center,
        radius,
        Stroke::new(if hovered { 2.0 } else { 1.5 }, color.linear_multiply(0.8)),
    );
}

/// Feed one frame of the handle's drag response into the tracker.
///
/// Returns the new end time once the handle is released.
pub fn handle_event_resize(
    ui: &egui::Ui,
    response: &Response,
    event: &Event,
    tracker: &mut GestureTracker,
    geometry: &SlotGeometry,
    slots: &[TimeSlot],
) -> Option<Reschedule> {
    if response.drag_started() {
        if let Some(pos) = super::drag::pointer_pos(ui, response) {
            tracker.begin_resize(event.id, pos.y);
        }
    }

    if response.hovered() || tracker.state(event.id).is_resizing() {
        ui.ctx().set_cursor_icon(CursorIcon::ResizeVertical);
    }

    if response.drag_stopped() {
        let release_y = super::drag::pointer_pos(ui, response)
            .map(|pos| pos.y)
            .or_else(|| tracker.state(event.id).origin_y())?;
        return tracker.finish_resize(event, release_y, geometry, slots);
    }

    None
}
