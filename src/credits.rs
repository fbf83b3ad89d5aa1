use raylib::prelude::*;

use crate::constants::{CREDITS_LINE_HEIGHT, CREDITS_SPEED};
use crate::palette;
use crate::palette::Theme;

/// Credits text scrolling up from below the panel. Every entry into the
/// outro restarts the roll from the bottom.
pub struct CreditsRoll {
    lines: Vec<String>,
    offset: f32,
    rolling: bool,
}

impl CreditsRoll {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
            offset: 0.0,
            rolling: false,
        }
    }

    pub fn restart(&mut self) {
        self.offset = 0.0;
        self.rolling = true;
    }

    pub fn tick(&mut self, dt: f32, screen_height: f32) {
        if !self.rolling {
            return;
        }
        self.offset += CREDITS_SPEED * dt;
        // Stop once the last line has cleared the top.
        let travel = screen_height + self.lines.len() as f32 * CREDITS_LINE_HEIGHT;
        if self.offset >= travel {
            self.rolling = false;
        }
    }

    pub fn is_rolling(&self) -> bool {
        self.rolling
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, width: f32, height: f32, theme: Theme) {
        if !self.rolling {
            return;
        }
        let ink = palette::ink(theme);
        for (i, line) in self.lines.iter().enumerate() {
            let y = height - self.offset + i as f32 * CREDITS_LINE_HEIGHT;
            if y < -CREDITS_LINE_HEIGHT || y > height {
                continue;
            }
            let x = width * 0.5 - line.len() as f32 * 5.5;
            d.draw_text(line, x as i32, y as i32, 22, ink);
        }
    }
}
