//! Where each slide sits for a given (possibly fractional) focus position.

use serde::{Deserialize, Serialize};

use crate::constants::{CARD_GAP, CARD_WIDTH, RADIAL_RADIUS};

/// Visual pose of one slide. `offset_x` is in logical px except for
/// `SlideLayout`, which uses viewport widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub offset_x: f32,
    pub depth: f32,
    pub scale: f32,
    pub opacity: f32,
    pub rotation: f32,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            depth: 0.0,
            scale: 1.0,
            opacity: 1.0,
            rotation: 0.0,
        }
    }
}

pub trait Layout {
    /// `relative` is the slide's signed distance from the focus, in slides.
    fn place(&self, relative: f32, len: usize) -> Placement;
}

/// Signed distance of `index` from `focus`. With `wrap`, the result is the
/// shortest way around the ring, in `[-len/2, len/2)`.
pub fn relative_position(index: usize, focus: f32, len: usize, wrap: bool) -> f32 {
    let raw = index as f32 - focus;
    if !wrap || len == 0 {
        return raw;
    }
    let n = len as f32;
    (raw + n / 2.0).rem_euclid(n) - n / 2.0
}

/// Hero slider: slides stack in place and crossfade.
#[derive(Debug, Clone, Copy, Default)]
pub struct FadeLayout;

impl Layout for FadeLayout {
    fn place(&self, relative: f32, _len: usize) -> Placement {
        Placement {
            opacity: (1.0 - relative.abs()).clamp(0.0, 1.0),
            ..Placement::default()
        }
    }
}

/// Video slider: full-width panels pushed sideways.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlideLayout;

impl Layout for SlideLayout {
    fn place(&self, relative: f32, _len: usize) -> Placement {
        Placement {
            offset_x: relative,
            opacity: if relative.abs() < 1.0 { 1.0 } else { 0.0 },
            ..Placement::default()
        }
    }
}

/// Team strip: fixed-pitch cards in a row.
#[derive(Debug, Clone, Copy)]
pub struct StripLayout {
    pub pitch: f32,
}

impl Default for StripLayout {
    fn default() -> Self {
        Self {
            pitch: CARD_WIDTH + CARD_GAP,
        }
    }
}

impl Layout for StripLayout {
    fn place(&self, relative: f32, _len: usize) -> Placement {
        Placement {
            offset_x: relative * self.pitch,
            ..Placement::default()
        }
    }
}

/// Services carousel: slides on a ring, `360 / len` degrees apart.
#[derive(Debug, Clone, Copy)]
pub struct RadialLayout {
    pub radius: f32,
}

impl Default for RadialLayout {
    fn default() -> Self {
        Self {
            radius: RADIAL_RADIUS,
        }
    }
}

impl Layout for RadialLayout {
    fn place(&self, relative: f32, len: usize) -> Placement {
        if len == 0 {
            return Placement::default();
        }
        let angle = relative * (360.0 / len as f32);
        let radians = angle.to_radians();
        // depth is 1 at the front of the ring and -1 at the back
        let depth = radians.cos();
        Placement {
            offset_x: self.radius * radians.sin(),
            depth,
            scale: 0.6 + 0.4 * (depth + 1.0) / 2.0,
            opacity: 0.25 + 0.75 * (depth + 1.0) / 2.0,
            rotation: angle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    #[default]
    Fade,
    Slide,
    Strip,
    Radial,
}

/// Runtime-selected layout, for hosts that pick one from configuration.
#[derive(Debug, Clone, Copy)]
pub enum AnyLayout {
    Fade(FadeLayout),
    Slide(SlideLayout),
    Strip(StripLayout),
    Radial(RadialLayout),
}

impl From<LayoutKind> for AnyLayout {
    fn from(kind: LayoutKind) -> Self {
        match kind {
            LayoutKind::Fade => AnyLayout::Fade(FadeLayout),
            LayoutKind::Slide => AnyLayout::Slide(SlideLayout),
            LayoutKind::Strip => AnyLayout::Strip(StripLayout::default()),
            LayoutKind::Radial => AnyLayout::Radial(RadialLayout::default()),
        }
    }
}

impl Layout for AnyLayout {
    fn place(&self, relative: f32, len: usize) -> Placement {
        match self {
            AnyLayout::Fade(layout) => layout.place(relative, len),
            AnyLayout::Slide(layout) => layout.place(relative, len),
            AnyLayout::Strip(layout) => layout.place(relative, len),
            AnyLayout::Radial(layout) => layout.place(relative, len),
        }
    }
}
