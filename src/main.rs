use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::*;

mod audio;
mod constants;
mod content;
mod credits;
mod deck;
mod loading;
mod palette;
mod panel;
mod typewriter;
mod weather;

use crate::audio::Thunder;
use crate::constants::*;
use crate::content::{INTRO_PANEL, OUTRO_PANEL};
use crate::credits::CreditsRoll;
use crate::deck::Deck;
use crate::loading::{GatePolicy, LoadingGate};
use crate::palette::{Palette, Theme};
use crate::weather::engine::WeatherEngine;

#[derive(Parser)]
#[command(author, version, about = "A storm-themed panel presentation")]
struct Args {
    /// WAV played once when the intro panel first appears
    #[arg(long)]
    thunder: Option<PathBuf>,

    /// Seed for the weather randomness (OS entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Start in the light theme
    #[arg(long)]
    light: bool,

    /// What a click during the loading veil does
    #[arg(long, value_enum, default_value_t = GatePolicy::Ignore)]
    gate_policy: GatePolicy,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Stormshow")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // Audio is optional end to end: no device or no file means silence.
    let device = audio::open_device();
    let mut thunder = Thunder::load(device.as_ref(), args.thunder.as_deref());

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut theme = if args.light { Theme::Light } else { Theme::Dark };

    let width = rl.get_screen_width() as f32;
    let height = rl.get_screen_height() as f32;
    let mut weather = WeatherEngine::new(width, height, &mut rng);

    let mut deck = Deck::new(
        content::build_panels(),
        INTRO_PANEL,
        OUTRO_PANEL,
        CreditsRoll::new(content::CREDITS),
    );
    let mut gate = LoadingGate::new(LOADING_DELAY, args.gate_policy);

    // Straight to the intro, no veil.
    deck.activate(INTRO_PANEL, &mut thunder);

    while !rl.window_should_close() {
        let dt = rl.get_frame_time().min(MAX_FRAME_DT);
        let width = rl.get_screen_width() as f32;
        let height = rl.get_screen_height() as f32;

        if rl.is_window_resized() {
            weather.resize(width, height, &mut rng);
        }

        // --- Input ---
        if rl.is_key_pressed(KeyboardKey::KEY_T) {
            theme = theme.toggled();
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let mouse = rl.get_mouse_position();
            if panel::theme_toggle_rect(width).check_collision_point_rec(mouse) {
                theme = theme.toggled();
            } else if let Some(current) = deck.current_panel_mut() {
                if current.next.is_some()
                    && panel::next_button_rect(width, height).check_collision_point_rec(mouse)
                {
                    let target = current.next.as_ref().map(|n| n.target);
                    if let Some(target) = target {
                        gate.request(target);
                    }
                } else if current.media.is_some()
                    && panel::media_rect(width, height).check_collision_point_rec(mouse)
                {
                    if let Some(media) = current.media.as_mut() {
                        media.toggle();
                    }
                }
            }
        }

        // --- Update ---
        if let Some(target) = gate.tick(dt) {
            deck.activate(target, &mut thunder);
        }
        deck.tick(dt, height);

        let colors = Palette::of(theme);
        let bolt = weather.update(dt, &mut rng);

        // --- Draw ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        weather.draw(&mut d, &colors, bolt.as_ref());

        if let Some(current) = deck.current_panel() {
            current.draw(&mut d, deck.typed_text(), width, height, theme);
        }
        if deck.showing_outro() {
            deck.credits().draw(&mut d, width, height, theme);
        }

        // Flash overlay above the scene, below the veil.
        let flash = weather.flash_opacity();
        if flash > 0.0 {
            d.draw_rectangle(
                0,
                0,
                width as i32,
                height as i32,
                Color::new(255, 255, 255, (flash * 230.0) as u8),
            );
        }

        if gate.veil_visible() {
            d.draw_rectangle(0, 0, width as i32, height as i32, Color::new(0, 0, 0, 215));
            d.draw_text(
                "a moment...",
                (width * 0.5 - 62.0) as i32,
                (height * 0.5 - 12.0) as i32,
                24,
                Color::new(235, 242, 250, 255),
            );
        }

        draw_theme_toggle(&mut d, theme, width);
    }

    Ok(())
}

fn draw_theme_toggle(d: &mut RaylibDrawHandle, theme: Theme, width: f32) {
    let rect = panel::theme_toggle_rect(width);
    let ink = palette::ink(theme);
    d.draw_rectangle_lines_ex(rect, 2.0, ink);
    let knob_x = match theme {
        Theme::Dark => rect.x + 5.0,
        Theme::Light => rect.x + rect.width - 25.0,
    };
    d.draw_rectangle(knob_x as i32, (rect.y + 5.0) as i32, 20, 20, ink);
}
