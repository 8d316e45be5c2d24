//! Horizontal swipe recognition for day-to-day navigation.

/// Day navigation requested by a swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right to left
    Next,
    /// Finger moved left to right
    Previous,
}

/// Tracks one touch from start to end and classifies it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeDetector {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeDetector {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finish the touch; travel beyond the threshold in either direction
    /// yields a swipe. A touch end without a matching start is ignored.
    pub fn touch_end(&mut self, x: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;

        if x < start - self.threshold {
            Some(SwipeDirection::Next)
        } else if x > start + self.threshold {
            Some(SwipeDirection::Previous)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.start_x = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}
