//! Transition types and state management.
//!
//! A [`Transition`] animates a value from a start snapshot to a target along
//! a [`Spring`]. The clock starts on the first [`sample`](Transition::sample),
//! so a transition created between two frames begins at the next frame.

use std::time::{Duration, Instant};

use super::spring::Spring;
use crate::types::{Color, Rect, lerp};

/// Values that can be blended between two states.
pub trait Interpolate: Clone {
    /// Blend from `self` (at `t == 0`) to `target` (at `t == 1`).
    fn interpolate(&self, target: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, target: &Self, t: f32) -> Self {
        lerp(*self, *target, t)
    }
}

impl Interpolate for Rect {
    fn interpolate(&self, target: &Self, t: f32) -> Self {
        self.lerp(*target, t)
    }
}

impl Interpolate for Color {
    fn interpolate(&self, target: &Self, t: f32) -> Self {
        self.lerp(*target, t)
    }
}

/// Current state of a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionState<P> {
    /// Transition is running.
    Running {
        /// Eased progress from 0.0 to 1.0.
        progress: f32,
        /// The blended value at this progress.
        value: P,
    },
    /// The transition reached its target; the value is the exact target.
    Finished(P),
}

impl<P> TransitionState<P> {
    /// Check if the transition is still in progress.
    pub fn is_running(&self) -> bool {
        matches!(self, TransitionState::Running { .. })
    }

    /// The value at this state.
    pub fn value(&self) -> &P {
        match self {
            TransitionState::Running { value, .. } => value,
            TransitionState::Finished(value) => value,
        }
    }

    /// Take the value at this state.
    pub fn into_value(self) -> P {
        match self {
            TransitionState::Running { value, .. } => value,
            TransitionState::Finished(value) => value,
        }
    }
}

/// A spring animation between two snapshots of a value.
#[derive(Debug, Clone)]
pub struct Transition<P> {
    from: P,
    to: P,
    spring: Spring,
    /// When the first frame was sampled.
    started_at: Option<Instant>,
}

impl<P: Interpolate> Transition<P> {
    /// Create a transition that has not sampled its first frame yet.
    pub fn new(from: P, to: P, spring: Spring) -> Self {
        Self {
            from,
            to,
            spring,
            started_at: None,
        }
    }

    /// The value the transition ends at.
    #[inline]
    pub fn target(&self) -> &P {
        &self.to
    }

    /// The value the transition starts from.
    #[inline]
    pub fn origin(&self) -> &P {
        &self.from
    }

    /// Whether the first frame has been sampled.
    #[inline]
    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Time spent so far at `now`.
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.started_at
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default()
    }

    /// Sample the transition at `now`.
    ///
    /// The first call fixes the start time.
    pub fn sample(&mut self, now: Instant) -> TransitionState<P> {
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started_at);

        if elapsed >= self.spring.duration() {
            return TransitionState::Finished(self.to.clone());
        }

        let progress = self.spring.progress(elapsed);
        TransitionState::Running {
            progress,
            value: self.from.interpolate(&self.to, progress),
        }
    }
}
