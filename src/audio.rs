use std::path::Path;

use anyhow::Result;
use log::warn;
use raylib::prelude::*;

/// Seam between the panel sequencer and the platform's sound output.
/// Playback is fallible and the sequencer swallows the failure, so a
/// blocked or missing sound never stalls a transition.
pub trait IntroSound {
    fn play_from_start(&mut self) -> Result<()>;
}

/// The one-shot thunderclap for the intro panel, backed by an optional
/// raylib sound. Missing device or missing file degrades to silence.
pub struct Thunder<'aud> {
    sound: Option<Sound<'aud>>,
}

impl<'aud> Thunder<'aud> {
    pub fn load(device: Option<&'aud RaylibAudio>, path: Option<&Path>) -> Thunder<'aud> {
        let sound = match (device, path) {
            (Some(device), Some(path)) => match device.new_sound(&path.to_string_lossy()) {
                Ok(sound) => Some(sound),
                Err(e) => {
                    warn!("could not load intro sound {:?}: {}", path, e);
                    None
                }
            },
            (None, Some(path)) => {
                warn!("no audio device, intro sound {:?} will stay silent", path);
                None
            }
            _ => None,
        };
        Thunder { sound }
    }
}

impl IntroSound for Thunder<'_> {
    fn play_from_start(&mut self) -> Result<()> {
        if let Some(sound) = &self.sound {
            sound.stop();
            sound.play();
        }
        Ok(())
    }
}

/// Open the audio device, degrading to None (silence) when the backend
/// refuses to start.
pub fn open_device() -> Option<RaylibAudio> {
    match RaylibAudio::init_audio_device() {
        Ok(device) => Some(device),
        Err(e) => {
            warn!("audio device unavailable: {}", e);
            None
        }
    }
}
