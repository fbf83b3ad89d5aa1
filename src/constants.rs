pub const WINDOW_WIDTH: i32 = 1280;             // Initial window width
pub const WINDOW_HEIGHT: i32 = 720;             // Initial window height
pub const FPS: u32 = 60;                        // Target frames per second

pub const MAX_FRAME_DT: f32 = 0.05;             // Cap on per-frame dt after tab-out / stalls (seconds)

pub const LOADING_DELAY: f32 = 1.2;             // Veil duration before a panel transition fires (seconds)
pub const WORD_INTERVAL: f32 = 0.22;            // Typewriter delay between revealed words (seconds)

pub const CLOUD_BAND_WIDTH: f32 = 70.0;         // One puff per this many pixels of width
pub const MIN_CLOUD_PUFFS: usize = 18;          // Floor on the puff population
pub const RAIN_CELL_AREA: f32 = 12_000.0;       // One drop per this many square pixels

pub const FIRST_STRIKE_MIN: f32 = 2.0;          // Threshold range for the very first strike (seconds)
pub const FIRST_STRIKE_MAX: f32 = 10.0;
pub const RESTRIKE_MIN: f32 = 2.5;              // Threshold range for every later strike (seconds)
pub const RESTRIKE_MAX: f32 = 11.5;
pub const FLASH_DURATION: f32 = 0.09;           // Flash overlay falls back to zero within this (seconds)

pub const CREDITS_SPEED: f32 = 42.0;            // Credits roll scroll speed (pixels per second)
pub const CREDITS_LINE_HEIGHT: f32 = 34.0;      // Vertical spacing between credits lines (pixels)
