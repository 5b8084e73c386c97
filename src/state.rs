use std::time::Duration;

/// Phase of the index/guard machine.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Phase {
    #[default]
    Idle,          // Showing the active slide, ready for a request
    Transitioning, // An index change is visually in flight
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SliderState {
    pub active_index: usize,
    pub phase: Phase,
    /// Clock time of the last accepted manual or gesture request.
    pub last_interaction: Option<Duration>,
}

impl SliderState {
    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }
}

/// What a host needs to render navigation chrome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderView {
    pub active_index: usize,
    pub is_transitioning: bool,
    pub len: usize,
    pub dots: usize,
    pub progress: f32,
}
