//! Slide-up modal panel.
//!
//! The panel rises from the bottom edge of the window over a dimmed scrim.
//! Clicking the scrim or pressing Escape asks the owner to close it; the
//! owner keeps the open/closed flag.

use egui::{Align2, Color32, Id, Order, Sense, Vec2};

const SLIDE_SECONDS: f32 = 0.18;
const MAX_WIDTH: f32 = 520.0;
/// Distance the sheet travels while sliding in
const SLIDE_DISTANCE: f32 = 320.0;

/// What the user asked the panel to do this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Submit,
    Close,
}

/// Content rendered into the three regions of a [`ModalPanel`].
pub trait PanelContent {
    fn header(&mut self, ui: &mut egui::Ui);
    fn body(&mut self, ui: &mut egui::Ui);
    fn footer(&mut self, ui: &mut egui::Ui) -> Option<PanelAction>;
}

pub struct ModalPanel {
    id: Id,
}

impl ModalPanel {
    pub fn new(id_source: impl std::hash::Hash) -> Self {
        Self {
            id: Id::new(id_source),
        }
    }

    /// Draw the panel while `open` (or while it is still sliding out).
    pub fn show(
        &self,
        ctx: &egui::Context,
        open: bool,
        content: &mut impl PanelContent,
    ) -> Option<PanelAction> {
        let shown = ctx.animate_bool_with_time(self.id, open, SLIDE_SECONDS);
        if shown <= 0.0 {
            return None;
        }

        let mut action = None;
        let screen = ctx.screen_rect();

        egui::Area::new(self.id.with("scrim"))
            .order(Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let alpha = (shown * 110.0) as u8;
                let response = ui.allocate_rect(screen, Sense::click());
                ui.painter()
                    .rect_filled(screen, 0.0, Color32::from_black_alpha(alpha));
                if open && response.clicked() {
                    action = Some(PanelAction::Close);
                }
            });

        let width = screen.width().min(MAX_WIDTH);
        egui::Area::new(self.id.with("sheet"))
            .order(Order::Foreground)
            .anchor(
                Align2::CENTER_BOTTOM,
                Vec2::new(0.0, (1.0 - shown) * SLIDE_DISTANCE),
            )
            .show(ctx, |ui| {
                egui::Frame::window(ui.style())
                    .rounding(egui::Rounding {
                        nw: 12.0,
                        ne: 12.0,
                        sw: 0.0,
                        se: 0.0,
                    })
                    .show(ui, |ui| {
                        ui.set_width(width);
                        content.header(ui);
                        ui.separator();
                        content.body(ui);
                        ui.add_space(8.0);
                        if let Some(footer_action) = content.footer(ui) {
                            action = Some(footer_action);
                        }
                    });
            });

        if open && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            action = Some(PanelAction::Close);
        }

        // Ignore input while sliding out
        if open {
            action
        } else {
            None
        }
    }
}
