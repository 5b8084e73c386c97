// Behavioural tests for the slider through its public API.

use std::time::Duration;

use carousel::ease::Easing;
use carousel::layout::FadeLayout;
use carousel::{
    Advance, Bounds, Direction, Headless, Ignored, LayoutTransform, Request, Slide, SlideSet, Slider,
    SliderConfig, SliderEvent, Transform, TransformError, Transition, Trigger,
};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn slides(n: usize) -> SlideSet {
    (0..n).map(|i| Slide::new(format!("slide {i}"))).collect()
}

fn config(autoplay_ms: Option<u64>, transition_ms: u64) -> SliderConfig {
    SliderConfig {
        autoplay: autoplay_ms.is_some(),
        auto_advance_ms: autoplay_ms.unwrap_or(0),
        transition_ms,
        ..SliderConfig::default()
    }
}

/// Counts calls so tests can check the completion contract.
#[derive(Default)]
struct Counting {
    begins: usize,
    settles: Vec<usize>,
    updated: Duration,
}

impl Transform for Counting {
    fn begin(&mut self, _transition: &Transition, _len: usize) -> Result<(), TransformError> {
        self.begins += 1;
        Ok(())
    }

    fn update(&mut self, dt: Duration) {
        self.updated += dt;
    }

    fn settle(&mut self, active: usize, _len: usize) {
        self.settles.push(active);
    }
}

/// A render surface whose targets have gone missing.
struct Broken;

impl Transform for Broken {
    fn begin(&mut self, transition: &Transition, _len: usize) -> Result<(), TransformError> {
        Err(TransformError::MissingTarget(transition.to))
    }

    fn update(&mut self, _dt: Duration) {}

    fn settle(&mut self, _active: usize, _len: usize) {}
}

fn completed(events: &[SliderEvent]) -> Vec<usize> {
    events
        .iter()
        .filter_map(|e| match e {
            SliderEvent::Completed { index, .. } => Some(*index),
            SliderEvent::Started(_) => None,
        })
        .collect()
}

#[test]
fn stepping_forward_n_times_returns_home() {
    for n in 1..=7 {
        let mut slider = Slider::mount(slides(n), &config(None, 300), Headless);
        for _ in 0..n {
            slider.request_advance(Request::Step(Direction::Forward), Trigger::Manual);
            slider.tick(ms(300));
        }
        assert_eq!(slider.active_index(), 0, "n = {n}");
    }
}

#[test]
fn forward_then_back() {
    let mut slider = Slider::mount(slides(3), &config(None, 400), Headless);
    slider.next();
    slider.tick(ms(400));
    assert_eq!(slider.active_index(), 1);
    slider.prev();
    slider.tick(ms(400));
    assert_eq!(slider.active_index(), 0);
}

#[test]
fn forward_from_last_wraps() {
    let mut slider = Slider::mount(slides(3), &config(None, 400), Headless);
    slider.go_to(2);
    slider.tick(ms(400));
    assert!(matches!(slider.next(), Advance::Accepted(t) if t.to == 0 && t.delta == 1));
    slider.tick(ms(400));
    assert_eq!(slider.active_index(), 0);
}

#[test]
fn transition_flag_spans_exactly_the_duration() {
    let mut slider = Slider::mount(slides(3), &config(None, 500), Headless);
    assert!(!slider.is_transitioning());
    slider.next();
    assert!(slider.is_transitioning());

    let events = slider.tick(ms(499));
    assert!(slider.is_transitioning());
    assert_eq!(slider.active_index(), 0);
    assert!(completed(&events).is_empty());

    let events = slider.tick(ms(1));
    assert!(!slider.is_transitioning());
    assert_eq!(completed(&events), [1]);
}

#[test]
fn completion_fires_once_per_accepted_request() {
    let mut slider = Slider::mount(slides(4), &config(None, 200), Counting::default());
    slider.next();
    slider.next();
    slider.swipe(Direction::Backward);
    let mut events = slider.tick(ms(50));
    events.extend(slider.tick(ms(1_000)));
    assert_eq!(completed(&events), [1]);
    assert_eq!(slider.transform().begins, 1);
    // mount, then the one completion
    assert_eq!(slider.transform().settles, [0, 1]);
    assert_eq!(slider.transform().updated, ms(200));
}

#[test]
fn busy_requests_leave_the_timer_alone() {
    let mut slider = Slider::mount(slides(3), &config(Some(5_000), 500), Headless);
    slider.tick(ms(1_000));
    slider.next();
    assert_eq!(slider.next_auto_advance(), Some(ms(6_000)));

    slider.tick(ms(200));
    assert_eq!(slider.go_to(2), Advance::Ignored(Ignored::Busy));
    assert_eq!(slider.next_auto_advance(), Some(ms(6_000)));
    assert_eq!(slider.state().last_interaction, Some(ms(1_000)));
}

#[test]
fn manual_request_restarts_autoplay() {
    let mut slider = Slider::mount(slides(3), &config(Some(5_000), 500), Headless);
    slider.tick(ms(1_000));
    assert!(slider.go_to(2).is_accepted());

    let events = slider.tick(ms(4_999));
    assert_eq!(completed(&events), [2]);
    assert_eq!(slider.active_index(), 2);

    let events = slider.tick(ms(1));
    assert!(matches!(
        events.as_slice(),
        [SliderEvent::Started(t)] if t.trigger == Trigger::Timer && t.to == 0
    ));
    assert_eq!(slider.now(), ms(6_000));
}

#[test]
fn autoplay_keeps_its_period() {
    let mut slider = Slider::mount(slides(3), &config(Some(1_000), 100), Headless);
    let mut landed = Vec::new();
    for _ in 0..35 {
        landed.extend(completed(&slider.tick(ms(100))));
    }
    assert_eq!(landed, [1, 2, 0]);
}

#[test]
fn autoplay_drops_while_a_swipe_is_in_flight() {
    // transitions outlast the period, so the timer lands mid-swipe
    let mut slider = Slider::mount(slides(4), &config(Some(1_000), 1_500), Headless);
    slider.tick(ms(500));
    assert!(slider.swipe(Direction::Forward).is_accepted());
    assert_eq!(slider.next_auto_advance(), Some(ms(1_500)));

    let events = slider.tick(ms(1_000));
    assert!(events.iter().all(|e| !matches!(e, SliderEvent::Started(t) if t.trigger == Trigger::Timer)));
    assert_eq!(slider.active_index(), 0);
    assert_eq!(slider.next_auto_advance(), Some(ms(2_500)));

    let events = slider.tick(ms(500));
    assert_eq!(completed(&events), [1]);
    assert!(!slider.is_transitioning());
}

#[test]
fn swipe_threshold() {
    let mut slider = Slider::mount(slides(3), &config(None, 100), Headless);
    slider.pointer_down(300.0);
    slider.pointer_move(270.0);
    assert_eq!(slider.pointer_up(), None);
    assert!(!slider.is_transitioning());

    slider.pointer_down(300.0);
    slider.pointer_move(240.0);
    let advance = slider.pointer_up();
    assert!(matches!(
        advance,
        Some(Advance::Accepted(t)) if t.delta == 1 && t.trigger == Trigger::Gesture
    ));
    slider.tick(ms(100));
    assert_eq!(slider.active_index(), 1);
}

#[test]
fn empty_set_is_inert() {
    let mut slider = Slider::mount(slides(0), &config(Some(5_000), 500), Headless);
    assert_eq!(slider.next_auto_advance(), None);
    assert_eq!(slider.next(), Advance::Ignored(Ignored::Empty));
    assert_eq!(slider.go_to(0), Advance::Ignored(Ignored::Empty));
    assert_eq!(slider.swipe(Direction::Backward), Advance::Ignored(Ignored::Empty));
    assert!(slider.tick(ms(60_000)).is_empty());
    assert_eq!(slider.active_index(), 0);
    assert_eq!(slider.view().dots, 0);
}

#[test]
fn broken_transform_completes_instantly() {
    let mut slider = Slider::mount(slides(3), &config(None, 500), Broken);
    assert!(slider.next().is_accepted());
    assert!(!slider.is_transitioning());
    assert_eq!(slider.active_index(), 1);

    let events = slider.tick(Duration::ZERO);
    assert_eq!(completed(&events), [1]);
    assert!(slider.next().is_accepted());
    assert_eq!(slider.active_index(), 2);
}

#[test]
fn unmount_reports_the_final_view() {
    let mut slider = Slider::mount(slides(3), &config(Some(5_000), 500), Headless);
    slider.next();
    let view = slider.unmount();
    assert_eq!(view.active_index, 0);
    assert_eq!(view.len, 3);
}

#[test]
fn autoplay_rewinds_a_window_at_its_last_position() {
    let config = SliderConfig {
        bounds: Bounds::Window { visible: 3 },
        ..config(Some(1_000), 500)
    };
    let mut slider = Slider::mount(slides(5), &config, Headless);

    let events = slider.tick(ms(10_000));
    assert_eq!(completed(&events), [1, 2, 0, 1, 2, 0, 1, 2, 0]);
    assert_eq!(slider.next_auto_advance(), Some(ms(11_000)));
}

#[test]
fn layout_transform_follows_the_slider() {
    let transform = LayoutTransform::new(FadeLayout, Easing::Linear, true);
    let mut slider = Slider::mount(slides(3), &config(None, 400), transform);
    assert_eq!(slider.transform().placements()[0].opacity, 1.0);

    slider.next();
    slider.tick(ms(100));
    let fading = slider.transform().placements()[0].opacity;
    assert!((fading - 0.75).abs() < 1e-4, "got {fading}");

    slider.tick(ms(300));
    let opacities: Vec<f32> = slider.transform().placements().iter().map(|p| p.opacity).collect();
    assert_eq!(opacities, [0.0, 1.0, 0.0]);
}

#[test]
fn config_file_round_trip() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!("carousel-test-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r#"
        auto_advance_ms = 3000
        transition_ms = 250
        layout = "radial"

        [[slides]]
        title = "DIVINE ARCHITECTURE"
        tags = ["Sacred Geometry", "Hidden Truths"]

        [[slides]]
        title = "FORGOTTEN REALM"
        "#,
    )?;
    let config = SliderConfig::load(&path)?;
    std::fs::remove_file(&path)?;

    let set = SlideSet::new(config.slides.clone());
    let slider = Slider::mount(set, &config, Headless);
    assert_eq!(slider.next_auto_advance(), Some(ms(3_000)));
    assert_eq!(slider.active_slide().map(|s| s.title.as_str()), Some("DIVINE ARCHITECTURE"));
    Ok(())
}

#[test]
fn missing_config_file_reports_its_path() {
    let err = SliderConfig::load(std::path::Path::new("/nonexistent/carousel.toml")).unwrap_err();
    assert!(err.to_string().contains("carousel.toml"));
}
