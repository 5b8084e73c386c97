//! Producers of advance requests: the autoplay timer, direct controls and
//! swipe gestures. None of them touch slider state; they only build requests.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::SWIPE_THRESHOLD;
use crate::timer::{Scheduler, TimerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    pub fn delta(self) -> i64 {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Step(Direction),
    Goto(usize),
}

/// Where a request came from. Only non-timer triggers re-arm autoplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Timer,
    Manual,
    Gesture,
}

impl Trigger {
    pub fn is_interaction(self) -> bool {
        !matches!(self, Trigger::Timer)
    }
}

/// Navigation controls a page exposes: arrow buttons and dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Next,
    Prev,
    Dot(usize),
}

impl From<Control> for Request {
    fn from(control: Control) -> Self {
        match control {
            Control::Next => Request::Step(Direction::Forward),
            Control::Prev => Request::Step(Direction::Backward),
            Control::Dot(index) => Request::Goto(index),
        }
    }
}

/// Which way along the tracked axis counts as "next".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForwardSense {
    /// Dragging toward smaller coordinates (a left or upward swipe) advances.
    #[default]
    Negative,
    Positive,
}

/// Turns one pointer's travel along an axis into at most one direction.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    threshold: f32,
    forward: ForwardSense,
    start: Option<f32>,
    last: f32,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD, ForwardSense::default())
    }
}

impl GestureTracker {
    pub fn new(threshold: f32, forward: ForwardSense) -> Self {
        Self {
            threshold,
            forward,
            start: None,
            last: 0.0,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn press(&mut self, position: f32) {
        self.start = Some(position);
        self.last = position;
    }

    pub fn drag(&mut self, position: f32) {
        if self.start.is_some() {
            self.last = position;
        }
    }

    /// Signed travel since press, positive when moving forward.
    pub fn travel(&self) -> f32 {
        let Some(start) = self.start else {
            return 0.0;
        };
        match self.forward {
            ForwardSense::Negative => start - self.last,
            ForwardSense::Positive => self.last - start,
        }
    }

    /// Ends the gesture. Travel must strictly exceed the threshold.
    pub fn release(&mut self) -> Option<Direction> {
        if self.start.is_none() {
            return None;
        }
        let travel = self.travel();
        self.start = None;
        if travel.abs() <= self.threshold {
            return None;
        }
        Some(if travel > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        })
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}

/// Fixed-period autoplay that restarts, rather than stacks, when re-armed.
#[derive(Debug, Clone, Default)]
pub struct AutoAdvance {
    period: Option<Duration>,
    handle: Option<TimerId>,
}

impl AutoAdvance {
    /// `None` or a zero period disables autoplay entirely.
    pub fn new(period: Option<Duration>) -> Self {
        Self {
            period: period.filter(|period| !period.is_zero()),
            handle: None,
        }
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    pub fn arm<K>(&mut self, timers: &mut Scheduler<K>, kind: K) {
        self.cancel(timers);
        if let Some(period) = self.period {
            self.handle = Some(timers.schedule(period, kind));
        }
    }

    pub fn rearm<K>(&mut self, timers: &mut Scheduler<K>, kind: K) {
        if self.handle.is_some() {
            self.arm(timers, kind);
        }
    }

    pub fn cancel<K>(&mut self, timers: &mut Scheduler<K>) {
        if let Some(handle) = self.handle.take() {
            timers.cancel(handle);
        }
    }

    /// Clears the handle of a timer that just fired.
    pub fn fired(&mut self, id: TimerId) -> bool {
        if self.handle == Some(id) {
            self.handle = None;
            true
        } else {
            false
        }
    }

    pub fn next_fire<K>(&self, timers: &Scheduler<K>) -> Option<Duration> {
        self.handle.and_then(|handle| timers.deadline(handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_drag_emits_nothing() {
        let mut gesture = GestureTracker::default();
        gesture.press(400.0);
        gesture.drag(370.0);
        assert_eq!(gesture.release(), None);
        assert!(!gesture.is_tracking());
    }

    #[test]
    fn long_drag_emits_one_direction() {
        let mut gesture = GestureTracker::default();
        gesture.press(400.0);
        gesture.drag(340.0);
        assert_eq!(gesture.release(), Some(Direction::Forward));
        assert_eq!(gesture.release(), None);

        gesture.press(100.0);
        gesture.drag(220.0);
        assert_eq!(gesture.release(), Some(Direction::Backward));
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut gesture = GestureTracker::new(50.0, ForwardSense::Positive);
        gesture.press(0.0);
        gesture.drag(50.0);
        assert_eq!(gesture.release(), None);
        gesture.press(0.0);
        gesture.drag(50.5);
        assert_eq!(gesture.release(), Some(Direction::Forward));
    }

    #[test]
    fn drag_without_press_is_ignored() {
        let mut gesture = GestureTracker::default();
        gesture.drag(10.0);
        assert_eq!(gesture.travel(), 0.0);
        assert_eq!(gesture.release(), None);
    }

    #[test]
    fn controls_map_to_requests() {
        assert_eq!(Request::from(Control::Next), Request::Step(Direction::Forward));
        assert_eq!(Request::from(Control::Prev), Request::Step(Direction::Backward));
        assert_eq!(Request::from(Control::Dot(3)), Request::Goto(3));
    }

    #[test]
    fn rearm_restarts_instead_of_stacking() {
        let mut timers = Scheduler::new();
        let mut autoplay = AutoAdvance::new(Some(Duration::from_millis(5_000)));
        autoplay.arm(&mut timers, ());
        timers.advance_to(Duration::from_millis(1_000));
        autoplay.rearm(&mut timers, ());

        assert_eq!(timers.len(), 1);
        assert_eq!(autoplay.next_fire(&timers), Some(Duration::from_millis(6_000)));
    }

    #[test]
    fn disabled_autoplay_never_schedules() {
        let mut timers: Scheduler<()> = Scheduler::new();
        let mut autoplay = AutoAdvance::new(None);
        autoplay.arm(&mut timers, ());
        assert!(!autoplay.is_armed());
        assert!(timers.is_empty());
    }
}
