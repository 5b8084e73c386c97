use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1920;           // Width of the viewer window (logical px)
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the viewer window (logical px)
pub const FPS: u32 = 60;                      // Frames per second

pub const TRANSITION_DURATION: Duration = Duration::from_millis(500); // One slide change
pub const AUTO_ADVANCE_PERIOD: Duration = Duration::from_millis(5000); // Time each slide is shown
pub const SWIPE_THRESHOLD: f32 = 50.0;        // Minimum drag distance for a swipe (logical px)

pub const CARD_WIDTH: f32 = 220.0;            // Team strip card width (px)
pub const CARD_GAP: f32 = 15.0;               // Team strip gap between cards (px)
pub const RADIAL_RADIUS: f32 = 600.0;         // Services carousel ring radius (px)

// Viewport breakpoints for the number of cards a strip shows at once
pub const BREAKPOINTS: [(f32, usize); 3] = [(600.0, 1), (900.0, 2), (1200.0, 3)];
pub const WIDE_VISIBLE_CARDS: usize = 5;
