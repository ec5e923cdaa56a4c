//! The spring curve used for unfold/fold transitions.
//!
//! The curve is a critically damped spring (damping ratio 1): it approaches
//! its target as fast as possible without overshooting. The natural frequency
//! is derived from the duration so that the residual displacement at the end
//! of the duration is below one thousandth, at which point the curve snaps to
//! exactly 1.0.

use std::time::Duration;

/// `ω·T` at which `(1 + ω·T)·e^(−ω·T)` drops below 1e-3.
const SETTLE_OMEGA_T: f32 = 9.2334;

/// A critically damped spring with a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spring {
    duration: Duration,
}

impl Spring {
    /// The spring every unfold button animates with: 0.5 s, damping ratio 1.
    pub const UNFOLD: Self = Self {
        duration: Duration::from_millis(500),
    };

    /// Get the spring's duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Eased progress (0.0 to 1.0) after `elapsed` time.
    ///
    /// Monotonically non-decreasing; exactly 0.0 at the start and exactly 1.0
    /// from the end of the duration on.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return 1.0;
        }

        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let omega_t = SETTLE_OMEGA_T * t;
        (1.0 - (1.0 + omega_t) * (-omega_t).exp()).clamp(0.0, 1.0)
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::UNFOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        let spring = Spring::UNFOLD;
        assert_eq!(spring.progress(Duration::ZERO), 0.0);
        assert_eq!(spring.progress(Duration::from_millis(500)), 1.0);
        assert_eq!(spring.progress(Duration::from_secs(3)), 1.0);
    }

    #[test]
    fn test_monotonic_without_overshoot() {
        let spring = Spring::UNFOLD;
        let mut last = 0.0;
        for ms in 0..=500 {
            let p = spring.progress(Duration::from_millis(ms));
            assert!(p >= last, "progress decreased at {ms}ms");
            assert!(p <= 1.0);
            last = p;
        }
    }

    #[test]
    fn test_mostly_settled_by_half_time() {
        // A critically damped spring covers most of the distance early.
        let p = Spring::UNFOLD.progress(Duration::from_millis(250));
        assert!(p > 0.9, "got {p}");
    }

    #[test]
    fn test_nearly_settled_before_snap() {
        let p = Spring::UNFOLD.progress(Duration::from_millis(499));
        assert!(1.0 - p < 2e-3, "got {p}");
    }
}
