//! Easing curves and a dt-driven tween.

use std::f32::consts::PI;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    QuadOut,
    #[default]
    CubicOut,
    CubicInOut,
    SineInOut,
    BackIn,
    Power2Out,
}

impl Easing {
    /// Maps linear progress `t` in [0, 1] to eased progress. Ends are exact.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t).powi(2),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::BackIn => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                C3 * t * t * t - C1 * t * t
            }
            // gsap's power2.out is a cubic ease-out
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Interpolates `from` → `to` over `duration` as time is fed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    easing: Easing,
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
}

impl Tween {
    pub fn new(easing: Easing, from: f32, to: f32, duration: Duration) -> Self {
        Self {
            easing,
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Advances by `dt` and returns the current value.
    pub fn apply(&mut self, dt: Duration) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::QuadOut,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::SineInOut,
        Easing::BackIn,
        Easing::Power2Out,
    ];

    #[test]
    fn curves_hit_both_ends() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-5, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-5, "{easing:?} at 1");
        }
    }

    #[test]
    fn out_curves_lead_linear() {
        assert!(Easing::CubicOut.apply(0.25) > 0.25);
        assert!(Easing::QuadOut.apply(0.5) > 0.5);
        assert!(Easing::BackIn.apply(0.2) < 0.0);
    }

    #[test]
    fn tween_clamps_at_target() {
        let mut tween = Tween::new(Easing::Linear, 2.0, 4.0, Duration::from_millis(400));
        assert!((tween.apply(Duration::from_millis(100)) - 2.5).abs() < 1e-5);
        assert!(!tween.is_finished());
        assert_eq!(tween.apply(Duration::from_secs(3)), 4.0);
        assert!(tween.is_finished());
        tween.reset();
        assert_eq!(tween.value(), 2.0);
    }

    #[test]
    fn zero_length_tween_is_already_done() {
        let tween = Tween::new(Easing::CubicOut, 0.0, 1.0, Duration::ZERO);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 1.0);
    }
}
