use crate::pad::ButtonMask;

/// Returns the buttons that are down in `current` but were up in `previous`.
///
/// Rising edges only: a button held across frames produces no repeated
/// signal.
pub fn rising_edges(current: ButtonMask, previous: ButtonMask) -> ButtonMask {
    current & (current ^ previous)
}

/// One frame of retained button state for rising-edge detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    previous: ButtonMask,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's mask. Returns the buttons pressed this frame and
    /// retains `current` for the next call.
    pub fn update(&mut self, current: ButtonMask) -> ButtonMask {
        let pressed = rising_edges(current, self.previous);
        self.previous = current;
        pressed
    }

    /// Forget the retained mask, so the next frame sees every held button as
    /// a fresh press.
    pub fn reset(&mut self) {
        self.previous = 0;
    }
}
