//! The visual half of a slide change. The slider tells a `Transform` when a
//! transition begins and how much time passes; it never waits on it.

use std::time::Duration;

use crate::ease::{Easing, Tween};
use crate::layout::{Layout, Placement, relative_position};
use crate::trigger::Trigger;

/// One accepted index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    /// Signed distance travelled, in slides.
    pub delta: i64,
    pub duration: Duration,
    pub trigger: Trigger,
}

#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("no render target bound for slide {0}")]
    MissingTarget(usize),
    #[error("render targets cover {bound} slides but the set has {len}")]
    LengthMismatch { bound: usize, len: usize },
}

pub trait Transform {
    fn begin(&mut self, transition: &Transition, len: usize) -> Result<(), TransformError>;
    fn update(&mut self, dt: Duration);
    /// Snaps to rest with `active` in focus.
    fn settle(&mut self, active: usize, len: usize);
}

/// A transform with nothing to draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl Transform for Headless {
    fn begin(&mut self, _transition: &Transition, _len: usize) -> Result<(), TransformError> {
        Ok(())
    }

    fn update(&mut self, _dt: Duration) {}

    fn settle(&mut self, _active: usize, _len: usize) {}
}

/// Tweens a focus position and lays every slide out around it.
#[derive(Debug, Clone)]
pub struct LayoutTransform<L> {
    layout: L,
    easing: Easing,
    wrap: bool,
    focus: f32,
    tween: Option<Tween>,
    placements: Vec<Placement>,
}

impl<L: Layout> LayoutTransform<L> {
    pub fn new(layout: L, easing: Easing, wrap: bool) -> Self {
        Self {
            layout,
            easing,
            wrap,
            focus: 0.0,
            tween: None,
            placements: Vec::new(),
        }
    }

    pub fn focus(&self) -> f32 {
        self.focus
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn is_animating(&self) -> bool {
        self.tween.as_ref().is_some_and(|tween| !tween.is_finished())
    }

    fn relayout(&mut self) {
        let len = self.placements.len();
        for (index, placement) in self.placements.iter_mut().enumerate() {
            let relative = relative_position(index, self.focus, len, self.wrap);
            *placement = self.layout.place(relative, len);
        }
    }
}

impl<L: Layout> Transform for LayoutTransform<L> {
    fn begin(&mut self, transition: &Transition, len: usize) -> Result<(), TransformError> {
        if self.placements.len() != len {
            return Err(TransformError::LengthMismatch {
                bound: self.placements.len(),
                len,
            });
        }
        let from = transition.from as f32;
        self.focus = from;
        self.tween = Some(Tween::new(
            self.easing,
            from,
            from + transition.delta as f32,
            transition.duration,
        ));
        Ok(())
    }

    fn update(&mut self, dt: Duration) {
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        self.focus = tween.apply(dt);
        self.relayout();
    }

    fn settle(&mut self, active: usize, len: usize) {
        self.tween = None;
        self.focus = active as f32;
        self.placements.resize(len, Placement::default());
        self.relayout();
    }
}
