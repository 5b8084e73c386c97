use std::collections::HashMap;
use std::path::PathBuf;

use raylib::prelude::*;

use carousel::constants::{CARD_GAP, CARD_WIDTH, RENDER_WIDTH};
use carousel::layout::{LayoutKind, Placement};
use carousel::{SlideSet, SliderView};

const DOT_RADIUS: f32 = 6.0;
const DOT_SPACING: f32 = 24.0;
const DOT_MARGIN: f32 = 40.0;

/// Screen-space centre of navigation dot `index`.
pub fn dot_center(index: usize, dots: usize, screen: Vector2) -> Vector2 {
    let first = screen.x * 0.5 - (dots.saturating_sub(1) as f32) * DOT_SPACING * 0.5;
    Vector2::new(first + index as f32 * DOT_SPACING, screen.y - DOT_MARGIN)
}

/// Dot under `point`, if any.
pub fn hit_dot(point: Vector2, dots: usize, screen: Vector2) -> Option<usize> {
    (0..dots).find(|&i| {
        let center = dot_center(i, dots, screen);
        (point.x - center.x).hypot(point.y - center.y) <= DOT_RADIUS * 2.0
    })
}

/// Base scale that fits a texture into the slot a layout gives each slide.
fn fit_scale(kind: LayoutKind, texture: &Texture2D, screen: Vector2) -> f32 {
    let (w, h) = (texture.width() as f32, texture.height() as f32);
    let (max_w, max_h) = match kind {
        LayoutKind::Fade | LayoutKind::Slide => (screen.x * 0.9, screen.y * 0.9),
        LayoutKind::Strip => (CARD_WIDTH * screen.x / RENDER_WIDTH as f32, screen.y * 0.5),
        LayoutKind::Radial => (screen.x * 0.3, screen.y * 0.5),
    };
    (max_w / w).min(max_h / h)
}

fn slot_center(kind: LayoutKind, placement: &Placement, screen: Vector2) -> Vector2 {
    let px = screen.x / RENDER_WIDTH as f32;
    let x = match kind {
        LayoutKind::Slide => screen.x * (0.5 + placement.offset_x),
        // strip cards hang off the left edge, the focus card first
        LayoutKind::Strip => (CARD_GAP + CARD_WIDTH * 0.5 + placement.offset_x) * px,
        LayoutKind::Fade | LayoutKind::Radial => screen.x * 0.5 + placement.offset_x * px,
    };
    Vector2::new(x, screen.y * 0.5)
}

pub fn draw_slides(
    d: &mut RaylibDrawHandle,
    kind: LayoutKind,
    slides: &SlideSet,
    placements: &[Placement],
    textures: &HashMap<PathBuf, Texture2D>,
) {
    let screen = Vector2::new(d.get_screen_width() as f32, d.get_screen_height() as f32);

    // back to front, so the ring's far side is covered by its near side
    let mut order: Vec<usize> = (0..placements.len().min(slides.len())).collect();
    order.sort_by(|a, b| placements[*a].depth.total_cmp(&placements[*b].depth));

    for index in order {
        let placement = &placements[index];
        if placement.opacity <= 0.0 {
            continue;
        }
        let Some(slide) = slides.get(index) else {
            continue;
        };
        let center = slot_center(kind, placement, screen);
        let tint = Color::WHITE.fade(placement.opacity);

        match slide.media.as_ref().and_then(|media| textures.get(media)) {
            Some(texture) => {
                let scale = fit_scale(kind, texture, screen) * placement.scale;
                // fake the ring's yaw by squeezing horizontally
                let squeeze = placement.rotation.to_radians().cos().abs().max(0.3);
                let w = texture.width() as f32 * scale * squeeze;
                let h = texture.height() as f32 * scale;
                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
                    Rectangle::new(center.x, center.y, w, h),
                    Vector2::new(w * 0.5, h * 0.5),
                    0.0,
                    tint,
                );
            }
            None => {
                let w = 300.0 * placement.scale;
                let h = 200.0 * placement.scale;
                d.draw_rectangle_lines(
                    (center.x - w * 0.5) as i32,
                    (center.y - h * 0.5) as i32,
                    w as i32,
                    h as i32,
                    tint,
                );
                d.draw_text(
                    &slide.title,
                    (center.x - w * 0.5) as i32 + 10,
                    center.y as i32 - 10,
                    20,
                    tint,
                );
            }
        }
    }
}

pub fn draw_chrome(d: &mut RaylibDrawHandle, view: &SliderView, caption: Option<&str>, status: &str) {
    let screen = Vector2::new(d.get_screen_width() as f32, d.get_screen_height() as f32);

    for i in 0..view.dots {
        let center = dot_center(i, view.dots, screen);
        let color = if i == view.active_index { Color::GOLD } else { Color::GRAY };
        d.draw_circle(center.x as i32, center.y as i32, DOT_RADIUS, color);
    }

    // progress bar along the bottom edge
    let bar = screen.x * view.progress;
    d.draw_rectangle(0, screen.y as i32 - 4, bar as i32, 4, Color::GOLD);

    if let Some(caption) = caption {
        d.draw_text(caption, 20, 20, 30, Color::WHITE);
    }
    d.draw_text(status, 20, screen.y as i32 - 30, 16, Color::LIGHTGRAY);
}
