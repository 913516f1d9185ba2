use crate::traits::Lerp;
use std::f64::consts::PI;

/// Easing curves over normalized time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    /// Accelerates through the first half, decelerates symmetrically through the second
    EaseInOutQuad,
    EaseInOutCubic,
    EaseInOutSine,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0)
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseInQuad => t * t,
            EasingFunction::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            EasingFunction::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            EasingFunction::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            EasingFunction::EaseInOutSine => -(((PI * t).cos() - 1.0) / 2.0),
        }
    }
}

/// Main interpolation utilities
pub struct Interpolation;

impl Interpolation {
    /// Linear interpolation between two f64 values
    pub fn linear(start: f64, end: f64, t: f64) -> f64 {
        start.lerp(&end, t)
    }

    /// Interpolation with easing function
    pub fn ease(start: f64, end: f64, t: f64, easing: EasingFunction) -> f64 {
        Self::linear(start, end, easing.apply(t))
    }
}
