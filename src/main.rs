use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;
use raylib::prelude::*;

use carousel::constants::*;
use carousel::layout::{AnyLayout, LayoutKind};
use carousel::playback::Playback;
use carousel::{
    Bounds, Control, LayoutTransform, Slide, SlideSet, Slider, SliderConfig, visible_for_width,
};

mod viewer;

use crate::viewer::StillSink;
use crate::viewer::render::{draw_chrome, draw_slides, hit_dot};
use crate::viewer::texture_loader::{load_slide_textures, load_sorted_image_paths};

#[derive(Parser, Debug)]
#[command(about = "Interactive carousel viewer")]
struct Args {
    /// Directory of images, one slide each (sorted by file name)
    image_directory: Option<PathBuf>,

    /// TOML file with slider settings and optional [[slides]]
    #[arg(long)]
    config: Option<PathBuf>,

    /// fade, slide, strip or radial
    #[arg(long, value_parser = parse_layout)]
    layout: Option<LayoutKind>,

    /// Autoplay period in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Duration of one slide change in milliseconds
    #[arg(long)]
    transition_ms: Option<u64>,

    #[arg(long)]
    no_autoplay: bool,

    /// Show slides in random order
    #[arg(long)]
    shuffle: bool,

    /// Stop at the ends instead of wrapping, showing as many cards as fit
    #[arg(long)]
    window: bool,
}

fn parse_layout(value: &str) -> Result<LayoutKind, String> {
    match value.to_lowercase().as_str() {
        "fade" => Ok(LayoutKind::Fade),
        "slide" => Ok(LayoutKind::Slide),
        "strip" => Ok(LayoutKind::Strip),
        "radial" => Ok(LayoutKind::Radial),
        other => Err(format!("unknown layout '{other}'")),
    }
}

fn build_config(args: &Args) -> anyhow::Result<SliderConfig> {
    let mut config = match &args.config {
        Some(path) => SliderConfig::load(path)?,
        None => SliderConfig::default(),
    };
    if let Some(layout) = args.layout {
        config.layout = layout;
    }
    if let Some(interval) = args.interval_ms {
        config.auto_advance_ms = interval;
    }
    if let Some(transition) = args.transition_ms {
        config.transition_ms = transition;
    }
    if args.no_autoplay {
        config.autoplay = false;
    }
    if args.shuffle {
        config.shuffle = true;
    }
    if args.window {
        config.bounds = Bounds::Window {
            visible: visible_for_width((RENDER_WIDTH / 2) as f32),
        };
    }
    config.validate()?;
    Ok(config)
}

fn build_slides(args: &Args, config: &SliderConfig) -> anyhow::Result<SlideSet> {
    let slides = match &args.image_directory {
        Some(dir) => load_sorted_image_paths(dir)?
            .into_iter()
            .map(|path| {
                let title = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Slide::new(title).with_media(path)
            })
            .collect::<SlideSet>(),
        None if !config.slides.is_empty() => SlideSet::new(config.slides.clone()),
        None => bail!("Nothing to show: pass an image directory or a config with [[slides]]"),
    };
    Ok(if config.shuffle {
        slides.shuffled(&mut rand::rng())
    } else {
        slides
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = build_config(&args).context("Invalid slider configuration")?;
    let slides = build_slides(&args, &config)?;
    log::info!("Loaded {} slides, layout {:?}", slides.len(), config.layout);

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let textures = load_slide_textures(&mut rl, &thread, &slides);

    let transform =
        LayoutTransform::new(AnyLayout::from(config.layout), config.easing, config.wraps());
    let mut slider = Slider::mount(slides.clone(), &config, transform);
    let mut playback = Playback::new(StillSink::new(slides.clone()));
    playback.start(slider.active_index());

    // "all" first, then each category in the catalog
    let filters: Vec<Option<String>> = std::iter::once(None)
        .chain(slides.categories().into_iter().map(|c| Some(c.to_string())))
        .collect();
    let mut filter_index = 0;

    let number_keys = [
        KeyboardKey::KEY_ONE,
        KeyboardKey::KEY_TWO,
        KeyboardKey::KEY_THREE,
        KeyboardKey::KEY_FOUR,
        KeyboardKey::KEY_FIVE,
        KeyboardKey::KEY_SIX,
        KeyboardKey::KEY_SEVEN,
        KeyboardKey::KEY_EIGHT,
        KeyboardKey::KEY_NINE,
    ];

    let mut last_width = rl.get_screen_width();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let screen = Vector2::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);

        // 1. Viewport changes shrink or grow a strip's window
        if rl.get_screen_width() != last_width {
            last_width = rl.get_screen_width();
            slider.set_window(visible_for_width(screen.x));
        }

        // 2. Keyboard
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            slider.control(Control::Next);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            slider.control(Control::Prev);
        }
        for (i, key) in number_keys.iter().enumerate() {
            if rl.is_key_pressed(*key) {
                slider.control(Control::Dot(i));
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_M) {
            playback.toggle_mute(slider.active_index());
        }
        if rl.is_key_pressed(KeyboardKey::KEY_F) && filters.len() > 1 {
            filter_index = (filter_index + 1) % filters.len();
            slider.filter(filters[filter_index].as_deref());
            playback.sink_mut().set_slides(slider.slides().clone());
            playback.start(slider.active_index());
        }

        // 3. Pointer: dots take clicks, everything else is a drag
        let mouse = rl.get_mouse_position();
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            playback.resume_on_gesture();
            match hit_dot(mouse, slider.view().dots, screen) {
                Some(dot) => {
                    slider.go_to(dot);
                }
                None => slider.pointer_down(mouse.x),
            }
        }
        if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
            slider.pointer_move(mouse.x);
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            slider.pointer_up();
        }

        // 4. Timers and transitions
        let dt = Duration::from_secs_f32(rl.get_frame_time());
        for event in slider.tick(dt) {
            playback.handle(&event);
        }

        // 5. Draw
        let view = slider.view();
        let caption = slider.active_slide().map(|slide| slide.title.clone());
        let status = format!(
            "{}/{}  filter: {}  {}",
            view.active_index + 1,
            view.len,
            filters[filter_index].as_deref().unwrap_or("all"),
            if playback.is_muted() { "muted" } else { "sound" },
        );

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        draw_slides(
            &mut d,
            config.layout,
            slider.slides(),
            slider.transform().placements(),
            &textures,
        );
        draw_chrome(&mut d, &view, caption.as_deref(), &status);
    }

    let view = slider.unmount();
    log::info!("Closed on slide {} of {}", view.active_index + 1, view.len);
    Ok(())
}
