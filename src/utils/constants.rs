use crate::rendering::color::Color32;

pub const WIN_TITLE: &str = "My island has happened";

/// window dimensions in pixels
pub const VIEWPORT_WIDTH: u32 = 640;
pub const VIEWPORT_HEIGHT: u32 = 640;

/// side length of one map tile in pixels
pub const TILE_SIZE: f32 = 32.0;

/// the frame time all per-frame speeds are tuned for (60 fps)
pub const FRAMETIME: f32 = 1.0 / 60.0;

pub const DEFAULT_FPS_CAP: f64 = 60.0;

/// clear color of the screen, everything that is not ground is water
pub const WATER_COLOR: Color32 = Color32::from_rgb(0, 153, 255);

/// gameplay timings and limits
pub mod tuning {
    use super::FRAMETIME;

    /// seconds between two tile moves while an arrow key is held
    pub const INPUT_DELAY: f32 = 0.1;
    /// seconds the jump needs to recharge
    pub const JUMP_DELAY: f32 = 8.0;
    /// remaining recharge time after picking a flower
    pub const FLOWER_RECHARGE: f32 = 0.01;
    /// camera zoom at the top of a jump
    pub const JUMP_ZOOM_MAX: f32 = 13.0;
    /// seconds from take-off to the top of the jump
    pub const JUMP_TIME: f32 = 1.0;
    /// zoom change per reference frame
    pub const ZOOM_SPEED: f32 = (JUMP_ZOOM_MAX - 1.0) / (JUMP_TIME / FRAMETIME);
    /// seconds between two sinking rings
    pub const SINK_DELAY: f32 = 1.0;
    /// player alpha lost per reference frame while drowning
    pub const DROWN_FADE: f32 = 0.02;
    /// screen column/row at which the view scrolls along
    pub const SCROLL_HIGH: i32 = 17;
    pub const SCROLL_LOW: i32 = 2;
}
