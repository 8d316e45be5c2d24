use chrono::NaiveDate;
use egui::{Id, Pos2, Rect, Sense, Stroke, Vec2};

use super::palette::{DayStripPalette, TimeGridPalette};
use super::{paint_event_block, render_day_header, TIME_GUTTER};
use crate::models::event::{Event, EventDraft};
use crate::models::settings::{AddEventPolicy, Settings};
use crate::models::time_slot::{generate_time_slots, TimeSlot};
use crate::services::event::EventService;
use crate::services::gesture::{resolve_resize, GestureState, GestureTracker, Reschedule};
use crate::services::layout::SlotGeometry;
use crate::ui_egui::dialogs::add_event::{
    render_add_event_dialog, AddEventDialogResult, AddEventDialogState, AddEventMode,
};
use crate::ui_egui::drag::{handle_event_drag, paint_drop_preview, pointer_pos, RowLayout};
use crate::ui_egui::panel::ModalPanel;
use crate::ui_egui::resize::{bottom_handle_rect, draw_handle, handle_event_resize};
use crate::ui_egui::theme::CalendarTheme;

/// Horizontal shift applied per overlapping earlier event
const OVERLAP_INDENT: f32 = 14.0;
/// Events never render shorter than this, whatever their duration
const MIN_BLOCK_HEIGHT: f32 = 6.0;

/// Half-hour grid whose events can be moved and resized with the pointer.
pub struct InteractiveDayViewState {
    pub events: EventService,
    pub tracker: GestureTracker,
    slots: Vec<TimeSlot>,
    geometry: SlotGeometry,
    policy: AddEventPolicy,
    add_dialog: AddEventDialogState,
    panel: ModalPanel,
}

impl InteractiveDayViewState {
    pub fn new(settings: &Settings) -> Self {
        let geometry = SlotGeometry::new(
            settings.interactive.granularity,
            settings.interactive.slot_height,
        );
        Self {
            events: EventService::with_sample_events()
                .enforce_valid_duration(settings.enforce_valid_duration),
            tracker: GestureTracker::new(),
            slots: generate_time_slots(geometry.granularity),
            geometry,
            policy: settings.add_event_policy,
            add_dialog: AddEventDialogState::new(AddEventMode::TitleOnly),
            panel: ModalPanel::new("interactive_day_view_add_event"),
        }
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn geometry(&self) -> &SlotGeometry {
        &self.geometry
    }

    /// Write a finished gesture back into the event collection.
    ///
    /// Rejected ranges are logged and leave the event untouched.
    pub fn apply(&mut self, reschedule: Reschedule) -> bool {
        match self
            .events
            .reschedule(reschedule.event_id, reschedule.start, reschedule.end)
        {
            Ok(true) => {
                log::info!(
                    "Event {} now {}-{}",
                    reschedule.event_id,
                    reschedule.start.format("%H:%M"),
                    reschedule.end.format("%H:%M")
                );
                true
            }
            Ok(false) => {
                log::warn!("Gesture finished on unknown event {}", reschedule.event_id);
                false
            }
            Err(err) => {
                log::warn!("{:#}", err);
                false
            }
        }
    }

    /// Open the title-only panel for an empty row
    pub fn open_quick_add(&mut self, slot: TimeSlot) {
        self.add_dialog.open_for_slot(slot, self.geometry.granularity);
    }

    pub fn is_add_panel_open(&self) -> bool {
        self.add_dialog.open
    }

    pub fn submit(&mut self, draft: EventDraft) -> anyhow::Result<i64> {
        match self.events.add(draft, self.policy) {
            Ok(id) => {
                self.add_dialog.close();
                Ok(id)
            }
            Err(err) => {
                log::warn!("Failed to add event: {:#}", err);
                self.add_dialog.error_message = Some(format!("{:#}", err));
                Err(err)
            }
        }
    }

    /// Abandon unfinished gestures; called when the view stops being active.
    pub fn deactivate(&mut self) -> usize {
        self.tracker.cancel_all()
    }
}

/// How many earlier events in `events` overlap the one at `index`
fn overlap_depth(events: &[Event], index: usize) -> usize {
    let event = &events[index];
    events[..index]
        .iter()
        .filter(|other| other.start < event.end && event.start < other.end)
        .count()
}

pub struct InteractiveDayView;

impl InteractiveDayView {
    pub fn show(
        ui: &mut egui::Ui,
        state: &mut InteractiveDayViewState,
        date: NaiveDate,
        theme: &CalendarTheme,
    ) {
        render_day_header(ui, date, &DayStripPalette::from_theme(theme));

        let palette = TimeGridPalette::from_theme(theme);
        let mut quick_add = None;
        let mut finished = Vec::new();

        egui::ScrollArea::vertical()
            .id_source("interactive_day_view_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 0.0;

                let rows = Self::render_rows(ui, state, &palette, &mut quick_add);
                Self::render_events(ui, state, &rows, theme, &palette, &mut finished);
            });

        for reschedule in finished {
            state.apply(reschedule);
        }

        if !state.add_dialog.open
            && state.tracker.active().is_some()
            && ui.input(|i| i.key_pressed(egui::Key::Escape))
        {
            state.tracker.cancel_all();
        }

        if let Some(slot) = quick_add {
            state.open_quick_add(slot);
        }

        if let AddEventDialogResult::Submitted(draft) =
            render_add_event_dialog(ui.ctx(), &state.panel, &mut state.add_dialog)
        {
            // A rejected draft keeps the panel open with its error shown
            if let Ok(id) = state.submit(draft) {
                log::debug!("Quick-added event {}", id);
            }
        }
    }

    fn render_rows(
        ui: &mut egui::Ui,
        state: &InteractiveDayViewState,
        palette: &TimeGridPalette,
        quick_add: &mut Option<TimeSlot>,
    ) -> RowLayout {
        let mut rows = RowLayout::clipped(ui.clip_rect());
        let gesture_active = state.tracker.active().is_some();

        for slot in &state.slots {
            let desired_size = Vec2::new(ui.available_width(), state.geometry.slot_height);
            let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click());
            let is_hour_start = slot.is_hour_start();

            ui.painter().rect_filled(
                rect,
                0.0,
                if is_hour_start {
                    palette.hour_bg
                } else {
                    palette.regular_bg
                },
            );
            ui.painter().line_segment(
                [rect.left_top(), rect.right_top()],
                Stroke::new(
                    1.0,
                    if is_hour_start {
                        palette.hour_line
                    } else {
                        palette.slot_line
                    },
                ),
            );
            ui.painter().vline(
                rect.left() + TIME_GUTTER - 5.0,
                rect.y_range(),
                Stroke::new(1.0, palette.divider),
            );
            ui.painter().text(
                Pos2::new(rect.left() + TIME_GUTTER - 10.0, rect.center().y),
                egui::Align2::RIGHT_CENTER,
                slot.label(),
                egui::FontId::proportional(if is_hour_start { 12.0 } else { 10.0 }),
                palette.label,
            );

            let occupied = !state.events.events_in_slot(slot.time).is_empty();
            if response.hovered() && !occupied && !gesture_active {
                ui.painter().rect_filled(rect, 0.0, palette.hover_overlay);
            }
            if response.clicked() && !occupied && !gesture_active {
                *quick_add = Some(*slot);
            }

            rows.push(*slot, rect);
        }

        rows
    }

    fn render_events(
        ui: &mut egui::Ui,
        state: &mut InteractiveDayViewState,
        rows: &RowLayout,
        theme: &CalendarTheme,
        palette: &TimeGridPalette,
        finished: &mut Vec<Reschedule>,
    ) {
        let (Some(grid_top), Some(first_row)) = (rows.grid_top(), rows.rect_for(0)) else {
            return;
        };
        let geometry = state.geometry;
        let events = state.events.list();
        let tracker = &mut state.tracker;

        for (index, event) in events.iter().enumerate() {
            let indent = overlap_depth(events, index) as f32 * OVERLAP_INDENT;
            let left = first_row.left() + TIME_GUTTER + indent;
            let width = (first_row.right() - 6.0 - left).max(24.0);
            let height = geometry
                .duration_pixels(event.start, event.end)
                .max(MIN_BLOCK_HEIGHT);
            let rect = Rect::from_min_size(
                Pos2::new(left, grid_top + geometry.offset_for_time(event.start) + 1.0),
                Vec2::new(width, height - 2.0),
            );

            let color = theme.event_color(event.color.as_deref());
            let gesture = tracker.state(event.id);
            let fill = if gesture.is_dragging() {
                color.linear_multiply(0.5)
            } else {
                color
            };
            paint_event_block(ui, rect, event, fill, palette.event_text);

            let body = ui.interact(rect, Id::new(("day_event", event.id)), Sense::drag());
            if let Some(reschedule) =
                handle_event_drag(ui, &body, event, tracker, rows, &geometry, &state.slots)
            {
                finished.push(reschedule);
            }

            let handle_rect = bottom_handle_rect(rect);
            let handle = ui.interact(
                handle_rect,
                Id::new(("day_event_resize", event.id)),
                Sense::drag(),
            );
            if handle.hovered() || body.hovered() || gesture.is_resizing() {
                draw_handle(ui, handle_rect, handle.hovered(), color);
            }
            if let Some(reschedule) =
                handle_event_resize(ui, &handle, event, tracker, &geometry, &state.slots)
            {
                finished.push(reschedule);
            }

            match tracker.state(event.id) {
                GestureState::Dragging { .. } => {
                    paint_drop_preview(ui, event, rows, &geometry, &state.slots, palette);
                }
                GestureState::Resizing { origin_y } => {
                    Self::paint_resize_preview(
                        ui,
                        &body,
                        event,
                        origin_y,
                        rect,
                        &geometry,
                        &state.slots,
                        palette,
                    );
                }
                GestureState::Idle => {}
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn paint_resize_preview(
        ui: &egui::Ui,
        response: &egui::Response,
        event: &Event,
        origin_y: f32,
        rect: Rect,
        geometry: &SlotGeometry,
        slots: &[TimeSlot],
        palette: &TimeGridPalette,
    ) {
        let Some(pointer) = pointer_pos(ui, response) else {
            return;
        };
        let Some(end) = resolve_resize(event, origin_y, pointer.y, geometry, slots) else {
            return;
        };

        let height = geometry.duration_pixels(event.start, end).max(MIN_BLOCK_HEIGHT);
        let preview = Rect::from_min_size(rect.min, Vec2::new(rect.width(), height - 2.0));
        ui.painter().rect_filled(preview, 2.0, palette.drop_fill);
        ui.painter()
            .rect_stroke(preview, 2.0, Stroke::new(1.5, palette.drop_stroke));
        ui.painter().text(
            Pos2::new(preview.right() - 4.0, preview.bottom() - 2.0),
            egui::Align2::RIGHT_BOTTOM,
            end.format("%H:%M").to_string(),
            egui::FontId::proportional(10.0),
            palette.drop_stroke,
        );
    }
}
