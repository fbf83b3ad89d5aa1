use rand::Rng;
use raylib::prelude::*;

use crate::palette::Palette;
use crate::weather::clouds::{CloudPuff, make_clouds};
use crate::weather::lightning::{Bolt, Flash, Lightning};
use crate::weather::rain::{RainDrop, make_rain};

/// The continuous ambient layer: sky, clouds, rain, lightning. Ticked every
/// frame for the whole life of the window, independent of panel state.
pub struct WeatherEngine {
    width: f32,
    height: f32,
    puffs: Vec<CloudPuff>,
    drops: Vec<RainDrop>,
    lightning: Lightning,
    flash: Flash,
}

impl WeatherEngine {
    pub fn new(width: f32, height: f32, rng: &mut impl Rng) -> Self {
        Self {
            width,
            height,
            puffs: make_clouds(width, height, rng),
            drops: make_rain(width, height, rng),
            lightning: Lightning::new(rng),
            flash: Flash::new(),
        }
    }

    /// Regenerate both particle populations from the new dimensions.
    /// Wholesale replacement, never partial repair.
    pub fn resize(&mut self, width: f32, height: f32, rng: &mut impl Rng) {
        self.width = width;
        self.height = height;
        self.puffs = make_clouds(width, height, rng);
        self.drops = make_rain(width, height, rng);
    }

    /// Advance everything by `dt` (already capped by the caller). Yields
    /// the bolt on strike frames so the draw pass can paint it.
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) -> Option<Bolt> {
        for puff in &mut self.puffs {
            puff.advance(dt, self.width);
        }
        for drop in &mut self.drops {
            drop.advance(dt, self.width, self.height, rng);
        }

        self.flash.tick(dt);
        match self.lightning.tick(dt, self.width, self.height, rng) {
            Some(bolt) => {
                self.flash.trigger();
                Some(bolt)
            }
            None => None,
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, palette: &Palette, bolt: Option<&Bolt>) {
        // Sky
        d.draw_rectangle_gradient_v(
            0,
            0,
            self.width as i32,
            self.height as i32,
            palette.sky_top,
            palette.sky_bottom,
        );

        // Clouds
        for puff in &self.puffs {
            puff.draw(d, palette.cloud);
        }

        // Rain
        for drop in &self.drops {
            drop.draw(d, palette.rain);
        }

        // Bolt, additive so overlapping strokes brighten.
        if let Some(bolt) = bolt {
            let mut blend = d.begin_blend_mode(BlendMode::BLEND_ADDITIVE);
            for run in &bolt.runs {
                for pair in run.windows(2) {
                    blend.draw_line_ex(pair[0], pair[1], 2.2, palette.bolt);
                }
            }
        }
    }

    pub fn flash_opacity(&self) -> f32 {
        self.flash.opacity()
    }

    #[cfg(test)]
    fn population(&self) -> (usize, usize) {
        (self.puffs.len(), self.drops.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FIRST_STRIKE_MAX, FLASH_DURATION, MIN_CLOUD_PUFFS};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_resize_regenerates_both_populations() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut weather = WeatherEngine::new(1280.0, 720.0, &mut rng);
        assert_eq!(weather.population(), (18, 76));

        weather.resize(2560.0, 1440.0, &mut rng);
        assert_eq!(weather.population(), (36, 307));

        weather.resize(640.0, 360.0, &mut rng);
        assert_eq!(weather.population(), (MIN_CLOUD_PUFFS, 19));
    }

    #[test]
    fn test_strike_raises_flash_then_clears() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut weather = WeatherEngine::new(1280.0, 720.0, &mut rng);

        // Force the first threshold to elapse in one tick.
        let bolt = weather.update(FIRST_STRIKE_MAX, &mut rng);
        assert!(bolt.is_some());
        assert_eq!(weather.flash_opacity(), 1.0);

        weather.update(FLASH_DURATION, &mut rng);
        assert_eq!(weather.flash_opacity(), 0.0);
    }

    #[test]
    fn test_quiet_frames_yield_no_bolt() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut weather = WeatherEngine::new(1280.0, 720.0, &mut rng);
        assert!(weather.update(0.016, &mut rng).is_none());
        assert_eq!(weather.flash_opacity(), 0.0);
    }
}
