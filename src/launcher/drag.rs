//! Frameless window dragging by manual pointer-delta tracking.

use eframe::egui::{Pos2, Vec2};

/// Drag gesture state owned by the title bar.
///
/// `anchor` is the offset between the pointer and the window's top-left
/// corner at press time. It exists only between press and release.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    anchor: Option<Vec2>,
}

impl DragState {
    /// Primary button pressed on the title bar.
    pub fn begin(&mut self, pointer: Pos2, window_top_left: Pos2) {
        self.anchor = Some(pointer - window_top_left);
    }

    /// Pointer moved. Returns the new window top-left, or `None` when no drag
    /// is active.
    pub fn update(&self, pointer: Pos2) -> Option<Pos2> {
        self.anchor.map(|offset| pointer - offset)
    }

    /// Primary button released.
    pub fn end(&mut self) {
        self.anchor = None;
    }

    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, vec2};

    #[test]
    fn window_follows_pointer_delta() {
        let mut drag = DragState::default();
        let p0 = pos2(250.0, 115.0);
        let w0 = pos2(200.0, 100.0);
        drag.begin(p0, w0);

        // Intermediate moves do not accumulate; only the latest pointer counts.
        for p in [pos2(900.0, 10.0), pos2(-40.0, 300.0), pos2(251.0, 116.0)] {
            drag.update(p);
        }
        let p1 = pos2(400.0, 300.0);
        assert_eq!(drag.update(p1), Some(w0 + (p1 - p0)));
        assert_eq!(drag.update(p1), Some(pos2(350.0, 285.0)));
    }

    #[test]
    fn move_without_press_is_ignored() {
        let drag = DragState::default();
        assert!(!drag.is_active());
        assert_eq!(drag.update(pos2(10.0, 10.0)), None);
    }

    #[test]
    fn release_clears_the_anchor() {
        let mut drag = DragState::default();
        drag.begin(pos2(5.0, 5.0), pos2(0.0, 0.0));
        assert!(drag.is_active());
        drag.end();
        assert_eq!(drag.update(pos2(50.0, 50.0)), None);

        // A fresh press takes a fresh anchor.
        drag.begin(pos2(10.0, 20.0), pos2(100.0, 100.0));
        assert_eq!(drag.update(pos2(10.0, 20.0)), Some(pos2(100.0, 100.0)));
        assert_eq!(
            drag.update(pos2(10.0, 20.0) + vec2(3.0, -4.0)),
            Some(pos2(103.0, 96.0))
        );
    }
}
