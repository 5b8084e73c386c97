//! Slider settings. Defaults come from `constants`; a TOML file may
//! override any of them.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::ease::Easing;
use crate::error::{Error, Result};
use crate::layout::LayoutKind;
use crate::slide::Slide;
use crate::trigger::ForwardSense;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Bounds {
    /// Steps wrap around both ends.
    #[default]
    Cycle,
    /// A strip showing `visible` slides at once; stops at either edge.
    Window { visible: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub autoplay: bool,
    /// Autoplay period in milliseconds.
    pub auto_advance_ms: u64,
    pub transition_ms: u64,
    pub swipe_threshold: f32,
    pub forward: ForwardSense,
    pub easing: Easing,
    pub layout: LayoutKind,
    pub bounds: Bounds,
    pub shuffle: bool,
    pub slides: Vec<Slide>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            auto_advance_ms: AUTO_ADVANCE_PERIOD.as_millis() as u64,
            transition_ms: TRANSITION_DURATION.as_millis() as u64,
            swipe_threshold: SWIPE_THRESHOLD,
            forward: ForwardSense::default(),
            easing: Easing::default(),
            layout: LayoutKind::default(),
            bounds: Bounds::default(),
            shuffle: false,
            slides: Vec::new(),
        }
    }
}

impl SliderConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        log::debug!("Loaded slider config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: SliderConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.autoplay && self.auto_advance_ms == 0 {
            return Err(Error::Invalid("auto_advance_ms must be > 0".into()));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(Error::Invalid(format!(
                "swipe_threshold must be finite and >= 0, got {}",
                self.swipe_threshold
            )));
        }
        if let Bounds::Window { visible: 0 } = self.bounds {
            return Err(Error::Invalid("window must show at least one slide".into()));
        }
        Ok(())
    }

    pub fn auto_advance(&self) -> Option<Duration> {
        self.autoplay.then(|| Duration::from_millis(self.auto_advance_ms))
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn wraps(&self) -> bool {
        self.bounds == Bounds::Cycle
    }
}

/// Cards a strip shows at a viewport width, using the site's breakpoints.
pub fn visible_for_width(width: f32) -> usize {
    BREAKPOINTS
        .iter()
        .find(|(max_width, _)| width <= *max_width)
        .map_or(WIDE_VISIBLE_CARDS, |(_, visible)| *visible)
}
