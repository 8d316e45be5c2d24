// Event Drag Glue
//
// Translates egui drag responses on event blocks into GestureTracker
// transitions and resolves the row under the pointer as the drop target.

use egui::{CursorIcon, Pos2, Rect, Response, Stroke, Vec2};

use crate::models::event::Event;
use crate::models::time_slot::TimeSlot;
use crate::services::gesture::{resolve_drop, DragPayload, DropTarget, GestureTracker, Reschedule};
use crate::services::layout::SlotGeometry;
use crate::ui_egui::views::palette::TimeGridPalette;

/// Screen rects of the slot rows laid out this frame
#[derive(Debug, Default)]
pub struct RowLayout {
    rows: Vec<(TimeSlot, Rect)>,
    /// Visible part of the scroll area; rows outside it are not targets
    clip: Option<Rect>,
}

impl RowLayout {
    /// Layout whose rows only accept the pointer inside `clip`
    pub fn clipped(clip: Rect) -> Self {
        Self {
            rows: Vec::new(),
            clip: Some(clip),
        }
    }

    pub fn push(&mut self, slot: TimeSlot, rect: Rect) {
        self.rows.push((slot, rect));
    }

    /// Top edge of the first row, the origin for grid offsets
    pub fn grid_top(&self) -> Option<f32> {
        self.rows.first().map(|(_, rect)| rect.top())
    }

    pub fn rect_for(&self, index: usize) -> Option<Rect> {
        self.rows.get(index).map(|(_, rect)| *rect)
    }

    /// Row under `pos`, as a drop target. Anything else, including a row
    /// scrolled out of view, carries no slot.
    pub fn drop_target(&self, pos: Option<Pos2>) -> DropTarget {
        pos.filter(|pos| self.clip.map_or(true, |clip| clip.contains(*pos)))
            .and_then(|pos| {
                self.rows
                    .iter()
                    .find(|(_, rect)| rect.contains(pos))
                    .map(|(slot, rect)| DropTarget::on_slot(*slot, pos.y - rect.top()))
            })
            .unwrap_or_else(DropTarget::outside)
    }
}

/// Pointer position for a response, falling back to the latest known one
/// on the release frame.
pub fn pointer_pos(ui: &egui::Ui, response: &Response) -> Option<Pos2> {
    response
        .interact_pointer_pos()
        .or_else(|| ui.input(|i| i.pointer.latest_pos()))
}

/// Feed one frame of the event body's drag response into the tracker.
///
/// Returns the new times when a drag ended over a slot row.
pub fn handle_event_drag(
    ui: &egui::Ui,
    response: &Response,
    event: &Event,
    tracker: &mut GestureTracker,
    rows: &RowLayout,
    geometry: &SlotGeometry,
    slots: &[TimeSlot],
) -> Option<Reschedule> {
    if response.drag_started() {
        if let Some(pos) = pointer_pos(ui, response) {
            tracker.begin_drag(DragPayload::new(event.id), pos.y);
        }
    }

    if tracker.state(event.id).is_dragging() {
        ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        ui.ctx().request_repaint();
    } else if response.hovered() {
        ui.ctx().set_cursor_icon(CursorIcon::Grab);
    }

    if response.drag_stopped() {
        let target = rows.drop_target(pointer_pos(ui, response));
        return tracker.finish_drag(event, &target, geometry, slots);
    }

    None
}

/// Highlight where a dragged event would land if released now
pub(crate) fn paint_drop_preview(
    ui: &egui::Ui,
    event: &Event,
    rows: &RowLayout,
    geometry: &SlotGeometry,
    slots: &[TimeSlot],
    palette: &TimeGridPalette,
) {
    let pointer = ui.input(|i| i.pointer.hover_pos());
    let target = rows.drop_target(pointer);
    let Some((start, end)) = resolve_drop(event, &target, geometry, slots) else {
        return;
    };

    let (Some(first), Some(top)) = (
        slots.iter().position(|slot| slot.time == start),
        rows.grid_top(),
    ) else {
        return;
    };
    let Some(row_rect) = rows.rect_for(first) else {
        return;
    };

    let height = geometry.duration_pixels(start, end).max(geometry.slot_height * 0.5);
    let preview = Rect::from_min_size(
        Pos2::new(row_rect.left() + super::views::TIME_GUTTER, top + geometry.offset_for_time(start)),
        Vec2::new(row_rect.width() - super::views::TIME_GUTTER - 4.0, height),
    )
    .shrink2(Vec2::new(3.0, 2.0));

    ui.painter().rect_filled(preview, 2.0, palette.drop_fill);
    ui.painter()
        .rect_stroke(preview, 2.0, Stroke::new(1.5, palette.drop_stroke));
}
