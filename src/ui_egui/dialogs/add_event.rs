use egui::{Color32, RichText};

use crate::models::event::EventDraft;
use crate::models::time_slot::{format_hhmm, Granularity, TimeSlot};
use crate::ui_egui::panel::{ModalPanel, PanelAction, PanelContent};

/// Which inputs the add-event panel asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddEventMode {
    /// Title plus free-form start and end times
    TitleAndTimes,
    /// Title only; the event covers the selected slot
    TitleOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddEventDialogResult {
    None,
    Submitted(EventDraft),
    Cancelled,
}

pub struct AddEventDialogState {
    pub open: bool,
    pub mode: AddEventMode,
    pub slot: Option<TimeSlot>,
    pub title: String,
    pub start: String,
    pub end: String,
    pub error_message: Option<String>,
    submit_requested: bool,
}

impl AddEventDialogState {
    pub fn new(mode: AddEventMode) -> Self {
        Self {
            open: false,
            mode,
            slot: None,
            title: String::new(),
            start: String::new(),
            end: String::new(),
            error_message: None,
            submit_requested: false,
        }
    }

    /// Open the panel with times pre-filled from `slot`
    pub fn open_for_slot(&mut self, slot: TimeSlot, granularity: Granularity) {
        self.open = true;
        self.slot = Some(slot);
        self.title.clear();
        self.start = slot.label();
        self.end = format_hhmm(slot.end_time(granularity));
        self.error_message = None;
        self.submit_requested = false;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.error_message = None;
        self.submit_requested = false;
    }

    pub fn can_submit(&self) -> bool {
        match self.mode {
            AddEventMode::TitleOnly => !self.title.trim().is_empty(),
            AddEventMode::TitleAndTimes => true,
        }
    }

    /// Validate the current inputs into a draft
    pub fn draft(&self) -> Result<EventDraft, String> {
        EventDraft::from_inputs(&self.title, &self.start, &self.end).map_err(|e| e.to_string())
    }
}

impl PanelContent for AddEventDialogState {
    fn header(&mut self, ui: &mut egui::Ui) {
        ui.heading("Add Event");
        if let Some(slot) = self.slot {
            ui.label(
                RichText::new(format!("Adding event for {}", slot))
                    .color(ui.visuals().weak_text_color()),
            );
        }
    }

    fn body(&mut self, ui: &mut egui::Ui) {
        if let Some(ref error) = self.error_message {
            ui.colored_label(Color32::RED, RichText::new(error).strong());
            ui.add_space(4.0);
        }

        let title_response = ui.add(
            egui::TextEdit::singleline(&mut self.title)
                .hint_text("Event Title")
                .desired_width(f32::INFINITY),
        );
        if title_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.submit_requested = true;
        }

        if self.mode == AddEventMode::TitleAndTimes {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label("Start");
                ui.add(
                    egui::TextEdit::singleline(&mut self.start)
                        .hint_text("HH:MM")
                        .desired_width(70.0),
                );
                ui.add_space(12.0);
                ui.label("End");
                ui.add(
                    egui::TextEdit::singleline(&mut self.end)
                        .hint_text("HH:MM")
                        .desired_width(70.0),
                );
            });
        }
    }

    fn footer(&mut self, ui: &mut egui::Ui) -> Option<PanelAction> {
        let mut action = None;
        if std::mem::take(&mut self.submit_requested) && self.can_submit() {
            action = Some(PanelAction::Submit);
        }

        ui.horizontal(|ui| {
            let submit = ui.add_enabled(self.can_submit(), egui::Button::new("Add Event"));
            if submit.clicked() {
                action = Some(PanelAction::Submit);
            }
            if ui.button("Cancel").clicked() {
                action = Some(PanelAction::Close);
            }
        });

        action
    }
}

/// Draw the add-event panel and report what the user did.
///
/// Invalid input keeps the panel open with an error message; nothing is
/// handed back to the caller in that case.
pub fn render_add_event_dialog(
    ctx: &egui::Context,
    panel: &ModalPanel,
    state: &mut AddEventDialogState,
) -> AddEventDialogResult {
    match panel.show(ctx, state.open, state) {
        Some(PanelAction::Submit) => match state.draft() {
            Ok(draft) => AddEventDialogResult::Submitted(draft),
            Err(err) => {
                log::warn!("Rejected new event: {}", err);
                state.error_message = Some(err);
                AddEventDialogResult::None
            }
        },
        Some(PanelAction::Close) => {
            state.close();
            AddEventDialogResult::Cancelled
        }
        None => AddEventDialogResult::None,
    }
}
