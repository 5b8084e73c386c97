//! Carousel - one slider engine for every carousel on a page
//!
//! Core modules:
//! - `slider`: index/guard state machine, autoplay and gesture wiring
//! - `trigger`: timer, control and swipe adapters that produce requests
//! - `timer`: cancellable deadlines on a host-driven clock
//! - `transform`: the visual side of a transition, injected by the host
//! - `layout` / `ease`: slide placement and easing curves
//! - `playback`: best-effort media control for video slides
//! - `config`: defaults plus TOML overrides

pub mod config;
pub mod constants;
pub mod ease;
pub mod error;
pub mod layout;
pub mod playback;
pub mod slide;
pub mod slider;
pub mod state;
pub mod timer;
pub mod transform;
pub mod trigger;

pub use config::{Bounds, SliderConfig, visible_for_width};
pub use error::{Error, Result};
pub use slide::{Slide, SlideSet};
pub use slider::{Advance, Ignored, Slider, SliderEvent};
pub use state::{Phase, SliderState, SliderView};
pub use transform::{Headless, LayoutTransform, Transform, TransformError, Transition};
pub use trigger::{Control, Direction, Request, Trigger};
