mod app;
pub mod dialogs;
pub mod drag;
pub mod panel;
pub mod resize;
pub mod swipe;
pub mod theme;
pub mod views;

pub use app::DayViewApp;
