//! Best-effort media control for sliders whose slides are videos.
//!
//! Browsers and media backends may refuse to start playback until the user
//! has interacted with the page. A refused play is logged and remembered,
//! then retried on the next gesture. None of this feeds back into the slider.

use crate::slider::SliderEvent;

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("playback blocked until user interaction")]
    Blocked,
    #[error("no media bound for slide {0}")]
    Missing(usize),
    #[error("media backend error: {0}")]
    Backend(String),
}

pub trait MediaSink {
    fn play(&mut self, index: usize) -> Result<(), MediaError>;
    fn pause(&mut self, index: usize);
    fn set_muted(&mut self, index: usize, muted: bool);
}

#[derive(Debug)]
pub struct Playback<M> {
    sink: M,
    muted: bool,
    playing: Option<usize>,
    awaiting_gesture: Option<usize>,
}

impl<M: MediaSink> Playback<M> {
    /// Starts muted, as autoplaying video must.
    pub fn new(sink: M) -> Self {
        Self {
            sink,
            muted: true,
            playing: None,
            awaiting_gesture: None,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn playing(&self) -> Option<usize> {
        self.playing
    }

    pub fn is_awaiting_gesture(&self) -> bool {
        self.awaiting_gesture.is_some()
    }

    pub fn sink(&self) -> &M {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut M {
        &mut self.sink
    }

    /// Plays the slide that is active when the slider mounts.
    pub fn start(&mut self, active: usize) {
        self.switch_to(active);
    }

    pub fn handle(&mut self, event: &SliderEvent) {
        if let SliderEvent::Completed { index, .. } = event {
            self.switch_to(*index);
        }
    }

    pub fn toggle_mute(&mut self, active: usize) -> bool {
        self.muted = !self.muted;
        self.sink.set_muted(active, self.muted);
        log::debug!("Slide {active} muted: {}", self.muted);
        self.muted
    }

    /// Retries a play the backend refused earlier.
    pub fn resume_on_gesture(&mut self) {
        if let Some(index) = self.awaiting_gesture.take() {
            self.switch_to(index);
        }
    }

    fn switch_to(&mut self, index: usize) {
        if let Some(previous) = self.playing.take() {
            if previous != index {
                self.sink.pause(previous);
            }
        }
        self.sink.set_muted(index, self.muted);
        match self.sink.play(index) {
            Ok(()) => {
                self.playing = Some(index);
                self.awaiting_gesture = None;
            }
            Err(err) => {
                log::warn!("Could not play slide {index}: {err}");
                self.awaiting_gesture = Some(index);
            }
        }
    }
}
