//! The index/guard state machine shared by every slider on the site.
//!
//! Requests from the timer, the controls and the gesture tracker all land in
//! [`Slider::request_advance`]. While a transition is in flight every request
//! is dropped, so whichever request is accepted first wins.

use std::time::Duration;

use crate::config::{Bounds, SliderConfig};
use crate::slide::{Slide, SlideSet};
use crate::state::{Phase, SliderState, SliderView};
use crate::timer::{Scheduler, TimerId};
use crate::transform::{Transform, Transition};
use crate::trigger::{AutoAdvance, Control, Direction, GestureTracker, Request, Trigger};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    AutoAdvance,
    Completion,
}

/// Why a request did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    Busy,
    Empty,
    OutOfRange,
    Unchanged,
    AtEdge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Accepted(Transition),
    Ignored(Ignored),
}

impl Advance {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Advance::Accepted(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderEvent {
    Started(Transition),
    Completed { index: usize, transition: Transition },
}

pub struct Slider<T> {
    catalog: SlideSet,
    slides: SlideSet,
    state: SliderState,
    bounds: Bounds,
    transition_duration: Duration,
    timers: Scheduler<Task>,
    autoplay: AutoAdvance,
    in_flight: Option<(TimerId, Transition)>,
    gesture: GestureTracker,
    transform: T,
    events: Vec<SliderEvent>,
}

impl<T: Transform> Slider<T> {
    pub fn mount(slides: SlideSet, config: &SliderConfig, transform: T) -> Self {
        let mut slider = Self {
            catalog: slides.clone(),
            slides,
            state: SliderState::default(),
            bounds: config.bounds,
            transition_duration: config.transition(),
            timers: Scheduler::new(),
            autoplay: AutoAdvance::new(config.auto_advance()),
            in_flight: None,
            gesture: GestureTracker::new(config.swipe_threshold, config.forward),
            transform,
            events: Vec::new(),
        };
        slider.transform.settle(0, slider.slides.len());
        slider.sync_autoplay();
        log::debug!(
            "Mounted slider with {} slides (autoplay: {:?})",
            slider.slides.len(),
            slider.autoplay.period()
        );
        slider
    }

    /// Single entry point for every index change.
    pub fn request_advance(&mut self, request: Request, trigger: Trigger) -> Advance {
        if self.state.is_transitioning() {
            log::trace!("Dropped {request:?} from {trigger:?}: transition in flight");
            return Advance::Ignored(Ignored::Busy);
        }
        let (to, delta) = match self.resolve(request) {
            Ok(target) => target,
            Err(reason) => {
                log::trace!("Dropped {request:?} from {trigger:?}: {reason:?}");
                return Advance::Ignored(reason);
            }
        };

        let transition = Transition {
            from: self.state.active_index,
            to,
            delta,
            duration: self.transition_duration,
            trigger,
        };

        if trigger.is_interaction() {
            self.state.last_interaction = Some(self.timers.now());
            self.autoplay.rearm(&mut self.timers, Task::AutoAdvance);
        }

        self.events.push(SliderEvent::Started(transition));
        match self.transform.begin(&transition, self.slides.len()) {
            Ok(()) => {
                self.state.phase = Phase::Transitioning;
                let id = self.timers.schedule(transition.duration, Task::Completion);
                self.in_flight = Some((id, transition));
                log::debug!(
                    "Transition {} -> {} ({trigger:?}, {:?})",
                    transition.from,
                    transition.to,
                    transition.duration
                );
            }
            Err(err) => {
                // A broken render target must not wedge the machine.
                log::warn!(
                    "Transform failed for {} -> {}: {err}; completing instantly",
                    transition.from,
                    transition.to
                );
                self.finish(transition);
            }
        }
        Advance::Accepted(transition)
    }

    /// Advances the clock by `dt`, fires due timers in order and returns
    /// everything that happened since the last call.
    pub fn tick(&mut self, dt: Duration) -> Vec<SliderEvent> {
        let until = self.timers.now() + dt;
        loop {
            let before = self.timers.now();
            let Some((id, task)) = self.timers.pop_due(until) else {
                break;
            };
            let elapsed = self.timers.now() - before;
            self.feed_transform(elapsed);
            match task {
                Task::Completion => {
                    if let Some((flight, transition)) = self.in_flight {
                        if flight == id {
                            self.finish(transition);
                        }
                    }
                }
                Task::AutoAdvance => {
                    if self.autoplay.fired(id) {
                        self.autoplay.arm(&mut self.timers, Task::AutoAdvance);
                        let request = self.autoplay_request();
                        self.request_advance(request, Trigger::Timer);
                    }
                }
            }
        }
        let before = self.timers.now();
        self.timers.advance_to(until);
        self.feed_transform(until - before);
        std::mem::take(&mut self.events)
    }

    pub fn next(&mut self) -> Advance {
        self.control(Control::Next)
    }

    pub fn prev(&mut self) -> Advance {
        self.control(Control::Prev)
    }

    pub fn go_to(&mut self, index: usize) -> Advance {
        self.control(Control::Dot(index))
    }

    pub fn control(&mut self, control: Control) -> Advance {
        self.request_advance(control.into(), Trigger::Manual)
    }

    pub fn swipe(&mut self, direction: Direction) -> Advance {
        self.request_advance(Request::Step(direction), Trigger::Gesture)
    }

    pub fn pointer_down(&mut self, position: f32) {
        self.gesture.press(position);
    }

    pub fn pointer_move(&mut self, position: f32) {
        self.gesture.drag(position);
    }

    /// Ends a drag; `None` when it was too short to count as a swipe.
    pub fn pointer_up(&mut self) -> Option<Advance> {
        let direction = self.gesture.release()?;
        Some(self.swipe(direction))
    }

    pub fn pointer_cancel(&mut self) {
        self.gesture.cancel();
    }

    /// Swaps the slide set, keeping the active index in range.
    pub fn replace_slides(&mut self, slides: SlideSet) {
        self.catalog = slides.clone();
        self.slides = slides;
        let active = self.clamp(self.state.active_index);
        self.reseat(active);
    }

    /// Shows one category of the catalog and returns to the first slide.
    pub fn filter(&mut self, category: Option<&str>) {
        self.slides = self.catalog.filter_by_category(category);
        log::debug!("Filter {category:?}: {} slides", self.slides.len());
        self.reseat(0);
    }

    /// Changes how many slides a window-bounded strip shows at once.
    /// A transition whose target stays in range keeps running.
    pub fn set_window(&mut self, visible: usize) {
        let Bounds::Window { visible: current } = &mut self.bounds else {
            return;
        };
        *current = visible.max(1);
        let active = self.clamp(self.state.active_index);
        let out_of_range = match self.in_flight {
            Some((_, transition)) => self.clamp(transition.to) != transition.to,
            None => active != self.state.active_index,
        };
        if out_of_range {
            self.reseat(active);
        } else {
            self.sync_autoplay();
        }
    }

    /// Tears the slider down. Pending autoplay and completion timers are
    /// cancelled and the final view is returned.
    pub fn unmount(mut self) -> SliderView {
        self.shutdown();
        log::debug!("Unmounted slider at index {}", self.state.active_index);
        self.view()
    }

    pub fn view(&self) -> SliderView {
        let max = self.max_index();
        SliderView {
            active_index: self.state.active_index,
            is_transitioning: self.state.is_transitioning(),
            len: self.slides.len(),
            dots: max.map_or(0, |max| max + 1),
            progress: match max {
                Some(max) if max > 0 => self.state.active_index as f32 / max as f32,
                _ => 1.0,
            },
        }
    }

    pub fn state(&self) -> &SliderState {
        &self.state
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn active_slide(&self) -> Option<&Slide> {
        self.slides.get(self.state.active_index)
    }

    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    pub fn catalog(&self) -> &SlideSet {
        &self.catalog
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn next_auto_advance(&self) -> Option<Duration> {
        self.autoplay.next_fire(&self.timers)
    }

    fn max_index(&self) -> Option<usize> {
        let len = self.slides.len();
        if len == 0 {
            return None;
        }
        Some(match self.bounds {
            Bounds::Cycle => len - 1,
            Bounds::Window { visible } => len.saturating_sub(visible),
        })
    }

    fn clamp(&self, index: usize) -> usize {
        self.max_index().map_or(0, |max| index.min(max))
    }

    fn resolve(&self, request: Request) -> Result<(usize, i64), Ignored> {
        let max = self.max_index().ok_or(Ignored::Empty)?;
        let len = self.slides.len() as i64;
        let active = self.state.active_index as i64;

        let (to, delta) = match (request, self.bounds) {
            (Request::Step(direction), Bounds::Cycle) => {
                let delta = direction.delta();
                ((active + delta).rem_euclid(len), delta)
            }
            (Request::Step(direction), Bounds::Window { .. }) => {
                let to = active + direction.delta();
                if to < 0 || to > max as i64 {
                    return Err(Ignored::AtEdge);
                }
                (to, direction.delta())
            }
            (Request::Goto(index), _) if index > max => return Err(Ignored::OutOfRange),
            (Request::Goto(index), Bounds::Cycle) => {
                let forward = (index as i64 - active).rem_euclid(len);
                let delta = if forward * 2 > len { forward - len } else { forward };
                (index as i64, delta)
            }
            (Request::Goto(index), Bounds::Window { .. }) => (index as i64, index as i64 - active),
        };

        if to == active {
            return Err(Ignored::Unchanged);
        }
        Ok((to as usize, delta))
    }

    fn finish(&mut self, transition: Transition) {
        self.in_flight = None;
        self.state.active_index = transition.to;
        self.state.phase = Phase::Idle;
        self.transform.settle(transition.to, self.slides.len());
        self.events.push(SliderEvent::Completed {
            index: transition.to,
            transition,
        });
    }

    /// Jumps to `active` without a transition, abandoning any in flight.
    /// Autoplay restarts its countdown from here.
    fn reseat(&mut self, active: usize) {
        if let Some((id, _)) = self.in_flight.take() {
            self.timers.cancel(id);
        }
        self.state.phase = Phase::Idle;
        self.state.active_index = active;
        self.transform.settle(active, self.slides.len());
        self.autoplay.cancel(&mut self.timers);
        self.sync_autoplay();
    }

    /// Autoplay only runs when there is somewhere to go. An armed timer is
    /// left alone.
    fn sync_autoplay(&mut self) {
        if self.max_index().is_some_and(|max| max > 0) {
            if !self.autoplay.is_armed() {
                self.autoplay.arm(&mut self.timers, Task::AutoAdvance);
            }
        } else {
            self.autoplay.cancel(&mut self.timers);
        }
    }

    /// A window-bounded strip rewinds to the start once autoplay reaches
    /// the last position.
    fn autoplay_request(&self) -> Request {
        match self.bounds {
            Bounds::Window { .. } if self.max_index() == Some(self.state.active_index) => {
                Request::Goto(0)
            }
            _ => Request::Step(Direction::Forward),
        }
    }

    fn shutdown(&mut self) {
        self.autoplay.cancel(&mut self.timers);
        self.timers.cancel_all();
        self.in_flight = None;
    }

    fn feed_transform(&mut self, dt: Duration) {
        if self.state.is_transitioning() && !dt.is_zero() {
            self.transform.update(dt);
        }
    }
}
