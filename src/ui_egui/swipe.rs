//! Touch swipe subscription for the simple day view.
//!
//! A subscription exists only while the simple view is active.
//! Dropping it stops swipe recognition; no touch state outlives it.

use egui::{Event as InputEvent, TouchPhase};

use crate::services::swipe::{SwipeDetector, SwipeDirection};

#[derive(Debug)]
pub struct SwipeSubscription {
    detector: SwipeDetector,
}

impl SwipeSubscription {
    pub fn acquire(threshold: f32) -> Self {
        log::debug!("Swipe listener attached (threshold {}px)", threshold);
        Self {
            detector: SwipeDetector::new(threshold),
        }
    }

    /// Consume this frame's touch input and report a completed swipe.
    pub fn poll(&mut self, ctx: &egui::Context) -> Option<SwipeDirection> {
        let touches: Vec<(TouchPhase, f32)> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    InputEvent::Touch { phase, pos, .. } => Some((*phase, pos.x)),
                    _ => None,
                })
                .collect()
        });

        let mut swipe = None;
        for (phase, x) in touches {
            match phase {
                TouchPhase::Start => self.detector.touch_start(x),
                TouchPhase::End => {
                    if let Some(direction) = self.detector.touch_end(x) {
                        log::debug!("Swipe {:?}", direction);
                        swipe = Some(direction);
                    }
                }
                TouchPhase::Cancel => self.detector.reset(),
                TouchPhase::Move => {}
            }
        }
        swipe
    }
}

impl Drop for SwipeSubscription {
    fn drop(&mut self) {
        log::debug!("Swipe listener released");
    }
}
