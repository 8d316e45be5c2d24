use super::DayViewApp;

impl DayViewApp {
    /// Left/Right step one day, unless a panel or text field has the keyboard
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        if self.state.panel_open() || ctx.memory(|mem| mem.focused().is_some()) {
            return;
        }

        let (previous, next) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
            )
        });
        if previous {
            self.navigate_previous();
        }
        if next {
            self.navigate_next();
        }
    }
}
