use raylib::prelude::*;

use crate::palette;
use crate::palette::Theme;

/// A "video-like" surface. Decoding is out of scope; the sequencer only
/// needs something it can pause when the panel goes away.
pub struct Media {
    pub playing: bool,
}

impl Media {
    pub fn new() -> Self {
        Self { playing: false }
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }
}

pub struct NextControl {
    pub target: usize,
    pub label: &'static str,
}

/// One full-screen slide of the presentation.
pub struct Panel {
    pub index: usize,
    pub title: &'static str,
    pub text: Option<&'static str>,
    pub media: Option<Media>,
    pub next: Option<NextControl>,
    pub active: bool,
}

impl Panel {
    pub fn new(index: usize, title: &'static str) -> Self {
        Self {
            index,
            title,
            text: None,
            media: None,
            next: None,
            active: false,
        }
    }

    pub fn with_text(mut self, text: &'static str) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_media(mut self) -> Self {
        self.media = Some(Media::new());
        self
    }

    pub fn with_next(mut self, target: usize, label: &'static str) -> Self {
        self.next = Some(NextControl { target, label });
        self
    }
}

// --- Screen layout, shared by drawing and click hit-testing ---

pub fn card_rect(width: f32, height: f32) -> Rectangle {
    Rectangle::new(width * 0.12, height * 0.14, width * 0.76, height * 0.66)
}

pub fn media_rect(width: f32, height: f32) -> Rectangle {
    let card = card_rect(width, height);
    Rectangle::new(
        card.x + card.width * 0.55,
        card.y + card.height * 0.18,
        card.width * 0.38,
        card.height * 0.55,
    )
}

pub fn next_button_rect(width: f32, height: f32) -> Rectangle {
    Rectangle::new(width - 190.0, height - 80.0, 150.0, 44.0)
}

pub fn theme_toggle_rect(width: f32) -> Rectangle {
    Rectangle::new(width - 96.0, 24.0, 72.0, 30.0)
}

impl Panel {
    /// Panel chrome: card, title, the typewriter's current text, the media
    /// placeholder and the next control. `body` is whatever the typewriter
    /// has revealed so far.
    pub fn draw(&self, d: &mut RaylibDrawHandle, body: &str, width: f32, height: f32, theme: Theme) {
        if !self.active {
            return;
        }
        let ink = palette::ink(theme);
        let card = card_rect(width, height);

        d.draw_rectangle_rec(card, palette::card(theme));
        d.draw_text(
            self.title,
            (card.x + 28.0) as i32,
            (card.y + 24.0) as i32,
            34,
            ink,
        );

        if self.text.is_some() {
            let mut y = card.y + 86.0;
            for line in body.split('\n') {
                d.draw_text(line, (card.x + 28.0) as i32, y as i32, 20, ink);
                y += 26.0;
            }
        }

        if let Some(media) = &self.media {
            let frame = media_rect(width, height);
            d.draw_rectangle_rec(frame, Color::new(0, 0, 0, 200));
            d.draw_rectangle_lines_ex(frame, 2.0, ink);
            let tag = if media.playing { "playing" } else { "click to play" };
            d.draw_text(
                tag,
                (frame.x + 12.0) as i32,
                (frame.y + frame.height - 30.0) as i32,
                18,
                Color::new(235, 242, 250, 255),
            );
        }

        if let Some(next) = &self.next {
            let button = next_button_rect(width, height);
            d.draw_rectangle_rec(button, ink);
            d.draw_text(
                next.label,
                (button.x + 18.0) as i32,
                (button.y + 12.0) as i32,
                20,
                palette::card(theme),
            );
        }
    }
}
