use chrono::NaiveDate;
use egui::{Pos2, Rect, Sense, Stroke, Vec2};

use super::palette::{DayStripPalette, TimeGridPalette};
use super::{paint_event_block, paint_event_continuation, render_day_header, TIME_GUTTER};
use crate::models::event::EventDraft;
use crate::models::settings::{AddEventPolicy, Settings};
use crate::models::time_slot::{generate_time_slots, Granularity, TimeSlot};
use crate::services::event::EventService;
use crate::ui_egui::dialogs::add_event::{
    render_add_event_dialog, AddEventDialogResult, AddEventDialogState, AddEventMode,
};
use crate::ui_egui::panel::ModalPanel;
use crate::ui_egui::theme::CalendarTheme;

/// Width of the "Add Event" trigger on the selected row
const ADD_BUTTON_WIDTH: f32 = 96.0;

/// Quarter-hour list with a single selectable slot and an add-event panel.
pub struct DayViewState {
    pub events: EventService,
    slots: Vec<TimeSlot>,
    granularity: Granularity,
    row_height: f32,
    selected_slot: Option<TimeSlot>,
    policy: AddEventPolicy,
    add_dialog: AddEventDialogState,
    panel: ModalPanel,
}

impl DayViewState {
    pub fn new(settings: &Settings) -> Self {
        let granularity = settings.simple.granularity;
        Self {
            events: EventService::with_sample_events(),
            slots: generate_time_slots(granularity),
            granularity,
            row_height: settings.simple.row_height,
            selected_slot: None,
            policy: settings.add_event_policy,
            add_dialog: AddEventDialogState::new(AddEventMode::TitleAndTimes),
            panel: ModalPanel::new("day_view_add_event"),
        }
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn selected_slot(&self) -> Option<TimeSlot> {
        self.selected_slot
    }

    /// Select `slot`, replacing any previous selection
    pub fn select_slot(&mut self, slot: TimeSlot) {
        self.selected_slot = Some(slot);
    }

    pub fn is_add_panel_open(&self) -> bool {
        self.add_dialog.open
    }

    /// Open the add-event panel for the selected slot.
    ///
    /// Returns `false` when nothing is selected.
    pub fn open_add_panel(&mut self) -> bool {
        let Some(slot) = self.selected_slot else {
            return false;
        };
        self.add_dialog.open_for_slot(slot, self.granularity);
        true
    }

    /// Store a validated draft and close the panel.
    ///
    /// On failure the panel stays open with the error shown and the event
    /// collection is left as it was.
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
}

pub struct DayView;

impl DayView {
    pub fn show(ui: &mut egui::Ui, state: &mut DayViewState, date: NaiveDate, theme: &CalendarTheme) {
        render_day_header(ui, date, &DayStripPalette::from_theme(theme));

        let palette = TimeGridPalette::from_theme(theme);
        let mut clicked_slot = None;
        let mut add_requested = false;

        egui::ScrollArea::vertical()
            .id_source("day_view_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 0.0;
                for slot in &state.slots {
                    let selected = state.selected_slot == Some(*slot);
                    let (clicked, add) =
                        Self::render_time_slot(ui, &*state, slot, selected, theme, &palette);
                    if clicked {
                        clicked_slot = Some(*slot);
                    }
                    add_requested |= add;
                }
            });

        if let Some(slot) = clicked_slot {
            state.select_slot(slot);
        }
        if add_requested {
            state.open_add_panel();
        }

        if let AddEventDialogResult::Submitted(draft) =
            render_add_event_dialog(ui.ctx(), &state.panel, &mut state.add_dialog)
        {
            // A rejected draft keeps the panel open with its error shown
            if let Ok(id) = state.submit(draft) {
                log::debug!("Simple view added event {}", id);
            }
        }
    }

    /// Draw one row. Returns whether the row was clicked and whether its
    /// "Add Event" trigger was pressed.
    fn render_time_slot(
        ui: &mut egui::Ui,
        state: &DayViewState,
        slot: &TimeSlot,
        selected: bool,
        theme: &CalendarTheme,
        palette: &TimeGridPalette,
    ) -> (bool, bool) {
        let desired_size = Vec2::new(ui.available_width(), state.row_height);
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click());
        let is_hour_start = slot.is_hour_start();

        let bg_color = if selected {
            palette.selected_bg
        } else if is_hour_start {
            palette.hour_bg
        } else {
            palette.regular_bg
        };
        ui.painter().rect_filled(rect, 0.0, bg_color);
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

        if is_hour_start {
            ui.painter().text(
                Pos2::new(rect.left() + TIME_GUTTER - 10.0, rect.top() + 4.0),
                egui::Align2::RIGHT_TOP,
                slot.label(),
                egui::FontId::proportional(12.0),
                palette.label,
            );
        }

        if response.hovered() && !selected {
            ui.painter().rect_filled(rect, 0.0, palette.hover_overlay);
        }

        let content = Rect::from_min_max(
            Pos2::new(rect.left() + TIME_GUTTER, rect.top() + 2.0),
            Pos2::new(rect.right() - 5.0, rect.bottom() - 2.0),
        );

        let starting = state.events.starting_in_slot(slot, state.granularity);
        for event in state.events.events_in_slot(slot.time) {
            if !starting.iter().any(|s| s.id == event.id) {
                paint_event_continuation(ui, content, theme.event_color(event.color.as_deref()));
            }
        }
        for event in &starting {
            paint_event_block(
                ui,
                content,
                event,
                theme.event_color(event.color.as_deref()),
                palette.event_text,
            );
        }

        let mut add_clicked = false;
        if selected {
            let button_rect = Rect::from_center_size(
                Pos2::new(rect.right() - ADD_BUTTON_WIDTH / 2.0 - 8.0, rect.center().y),
                Vec2::new(ADD_BUTTON_WIDTH, (state.row_height - 12.0).max(18.0)),
            );
            let button = ui.interact(
                button_rect,
                ui.id().with(("day_view_add", slot.index)),
                Sense::click(),
            );
            let visuals = ui.style().interact(&button);
            ui.painter().rect(
                button_rect,
                visuals.rounding,
                visuals.weak_bg_fill,
                visuals.bg_stroke,
            );
            ui.painter().text(
                button_rect.center(),
                egui::Align2::CENTER_CENTER,
                "Add Event",
                egui::FontId::proportional(13.0),
                visuals.text_color(),
            );
            add_clicked = button.clicked();
        }

        (response.clicked(), add_clicked)
    }
}
