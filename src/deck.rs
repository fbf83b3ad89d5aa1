use log::warn;

use crate::audio::IntroSound;
use crate::credits::CreditsRoll;
use crate::panel::Panel;
use crate::typewriter::Typewriter;

/// All mutable presentation state in one place: the panel set, the current
/// index, the one-shot intro flag, the live typewriter and the credits.
/// Exactly one panel is active after any activation.
pub struct Deck {
    panels: Vec<Panel>,
    current: usize,
    intro_panel: usize,
    outro_panel: usize,
    intro_played: bool,
    typewriter: Option<Typewriter>,
    credits: CreditsRoll,
}

impl Deck {
    pub fn new(panels: Vec<Panel>, intro_panel: usize, outro_panel: usize, credits: CreditsRoll) -> Self {
        Self {
            panels,
            current: 0,
            intro_panel,
            outro_panel,
            intro_played: false,
            typewriter: None,
            credits,
        }
    }

    /// Make `target` the only active panel.
    ///
    /// Side effects, in order: pause media on everything being deactivated,
    /// activate the target, start a fresh typewriter over its text payload,
    /// fire the intro sound on the first intro activation (failure is
    /// logged, never surfaced), restart the credits on the outro. An
    /// unknown target is a logged no-op.
    pub fn activate(&mut self, target: usize, intro: &mut dyn IntroSound) {
        let Some(slot) = self.panels.iter().position(|p| p.index == target) else {
            warn!("ignoring transition to unknown panel {}", target);
            return;
        };

        for panel in &mut self.panels {
            panel.active = false;
            if let Some(media) = panel.media.as_mut() {
                media.pause();
            }
        }

        let panel = &mut self.panels[slot];
        panel.active = true;
        self.current = target;

        match panel.text {
            Some(text) => {
                let mut tw = Typewriter::new(text, target);
                tw.start();
                self.typewriter = Some(tw);
            }
            None => self.typewriter = None,
        }

        if target == self.intro_panel && !self.intro_played {
            if let Err(e) = intro.play_from_start() {
                warn!("intro sound blocked: {}", e);
            }
            // Latched whether or not playback actually started.
            self.intro_played = true;
        }

        if target == self.outro_panel {
            self.credits.restart();
        }
    }

    pub fn tick(&mut self, dt: f32, screen_height: f32) {
        if let Some(tw) = self.typewriter.as_mut() {
            if tw.panel() == self.current {
                tw.tick(dt);
            } else {
                // Superseded instance; never let it write into a panel
                // that is no longer showing.
                self.typewriter = None;
            }
        }
        self.credits.tick(dt, screen_height);
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_panel(&self) -> Option<&Panel> {
        self.panels.iter().find(|p| p.active)
    }

    pub fn current_panel_mut(&mut self) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| p.active)
    }

    /// What the typewriter has revealed so far for the current panel.
    pub fn typed_text(&self) -> &str {
        self.typewriter
            .as_ref()
            .filter(|tw| tw.panel() == self.current)
            .map(Typewriter::rendered)
            .unwrap_or("")
    }

    pub fn credits(&self) -> &CreditsRoll {
        &self.credits
    }

    pub fn showing_outro(&self) -> bool {
        self.current == self.outro_panel
    }

    #[cfg(test)]
    fn panels(&self) -> &[Panel] {
        &self.panels
    }
}
