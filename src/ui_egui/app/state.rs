use crate::models::settings::{DayViewKind, Settings};
use crate::services::swipe::SwipeDirection;
use crate::ui_egui::swipe::SwipeSubscription;
use crate::ui_egui::views::day_view::DayViewState;
use crate::ui_egui::views::interactive_day_view::InteractiveDayViewState;

/// Per-view state plus the resources tied to whichever view is active.
///
/// Event collections live for the whole session. Gesture state and the
/// swipe listener only exist while their view is the active one.
pub struct AppState {
    current_view: DayViewKind,
    pub simple: DayViewState,
    pub interactive: InteractiveDayViewState,
    swipe: Option<SwipeSubscription>,
    swipe_threshold: f32,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let mut state = Self {
            current_view: settings.default_view,
            simple: DayViewState::new(settings),
            interactive: InteractiveDayViewState::new(settings),
            swipe: None,
            swipe_threshold: settings.swipe_threshold,
        };
        state.activate(settings.default_view);
        state
    }

    pub fn current_view(&self) -> DayViewKind {
        self.current_view
    }

    /// Make `view` the active view, releasing what the previous one held
    pub fn switch_to(&mut self, view: DayViewKind) {
        if view == self.current_view {
            return;
        }
        self.deactivate(self.current_view);
        self.current_view = view;
        self.activate(view);
    }

    fn activate(&mut self, view: DayViewKind) {
        log::debug!("Activating {:?} day view", view);
        if view == DayViewKind::Simple {
            self.swipe = Some(SwipeSubscription::acquire(self.swipe_threshold));
        }
    }

    fn deactivate(&mut self, view: DayViewKind) {
        match view {
            DayViewKind::Simple => self.swipe = None,
            DayViewKind::Interactive => {
                self.interactive.deactivate();
            }
        }
    }

    pub fn is_swipe_active(&self) -> bool {
        self.swipe.is_some()
    }

    pub fn poll_swipe(&mut self, ctx: &egui::Context) -> Option<SwipeDirection> {
        self.swipe.as_mut().and_then(|swipe| swipe.poll(ctx))
    }

    /// Whether a modal panel currently owns keyboard input
    pub fn panel_open(&self) -> bool {
        self.simple.is_add_panel_open() || self.interactive.is_add_panel_open()
    }
}
