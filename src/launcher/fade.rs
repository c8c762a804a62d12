//! One-shot opacity fade-in driven by the egui frame clock.

/// Fade-in duration in seconds.
pub const FADE_IN_SECS: f64 = 0.5;

/// Linear 0 → 1 opacity ramp.
///
/// The clock starts on the first [`FadeIn::opacity_at`] call, i.e. the first
/// rendered frame. There is no way to restart or cancel it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeIn {
    start: Option<f64>,
    duration: f64,
}

impl Default for FadeIn {
    fn default() -> Self {
        Self::new(FADE_IN_SECS)
    }
}

impl FadeIn {
    pub fn new(duration: f64) -> Self {
        Self {
            start: None,
            duration,
        }
    }

    /// Opacity at time `now` (seconds, as reported by `egui::InputState::time`).
    pub fn opacity_at(&mut self, now: f64) -> f32 {
        let start = *self.start.get_or_insert(now);
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - start) / self.duration).clamp(0.0, 1.0) as f32
    }

    /// Whether the ramp has reached full opacity. False before the first frame.
    pub fn is_finished(&self, now: f64) -> bool {
        self.start
            .is_some_and(|start| now - start >= self.duration)
    }

    #[allow(dead_code)]
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramps_from_zero_to_one_over_the_duration() {
        let mut fade = FadeIn::default();
        assert_eq!(fade.duration(), 0.5);
        assert_eq!(fade.opacity_at(10.0), 0.0);
        assert!(!fade.is_finished(10.0));
        assert!((fade.opacity_at(10.25) - 0.5).abs() < 1e-6);
        assert_eq!(fade.opacity_at(10.5), 1.0);
        assert!(fade.is_finished(10.5));
        assert_eq!(fade.opacity_at(99.0), 1.0);
    }

    #[test]
    fn not_finished_before_first_frame() {
        let fade = FadeIn::default();
        assert!(!fade.is_finished(1000.0));
    }

    #[test]
    fn zero_duration_is_fully_opaque() {
        let mut fade = FadeIn::new(0.0);
        assert_eq!(fade.opacity_at(3.0), 1.0);
    }
}
