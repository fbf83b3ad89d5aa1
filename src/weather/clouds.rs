use rand::Rng;
use raylib::prelude::*;

use crate::constants::{CLOUD_BAND_WIDTH, MIN_CLOUD_PUFFS};

/// One cloud particle, a soft gradient disk drifting leftward.
pub struct CloudPuff {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub drift: f32, // pixels per second, leftward
}

/// Population scales with width, one puff per band, never fewer than the
/// floor. Regenerated wholesale on resize.
pub fn make_clouds(width: f32, height: f32, rng: &mut impl Rng) -> Vec<CloudPuff> {
    let count = ((width / CLOUD_BAND_WIDTH) as usize).max(MIN_CLOUD_PUFFS);
    (0..count)
        .map(|_| CloudPuff {
            x: rng.random_range(0.0..width),
            y: rng.random_range(0.0..height * 0.6),
            radius: rng.random_range(80.0..260.0),
            drift: rng.random_range(9.0..30.0),
        })
        .collect()
}

impl CloudPuff {
    pub fn advance(&mut self, dt: f32, width: f32) {
        self.x -= self.drift * dt;
        // Wrap once fully off-screen left.
        if self.x < -self.radius * 1.5 {
            self.x = width + self.radius * 1.5;
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, color: Color) {
        d.draw_circle_gradient(self.x as i32, self.y as i32, self.radius, color, Color::BLANK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_population_scales_with_width() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(make_clouds(700.0, 500.0, &mut rng).len(), MIN_CLOUD_PUFFS);
        assert_eq!(make_clouds(2100.0, 500.0, &mut rng).len(), 30);

        let mut previous = 0;
        for width in [300.0, 900.0, 1600.0, 2800.0] {
            let count = make_clouds(width, 500.0, &mut rng).len();
            assert!(count >= previous);
            previous = count;
        }
    }

    #[test]
    fn test_puffs_spawn_in_upper_sky() {
        let mut rng = StdRng::seed_from_u64(7);
        for puff in make_clouds(1280.0, 720.0, &mut rng) {
            assert!(puff.y >= 0.0 && puff.y < 720.0 * 0.6);
            assert!(puff.radius >= 80.0 && puff.radius < 260.0);
            assert!(puff.drift > 0.0);
        }
    }

    #[test]
    fn test_drift_wraps_to_right_edge() {
        let mut puff = CloudPuff {
            x: 0.0,
            y: 100.0,
            radius: 100.0,
            drift: 20.0,
        };
        // Drift well past the cull margin.
        for _ in 0..600 {
            puff.advance(0.016, 1280.0);
        }
        assert!(puff.x > -150.0);
        assert!(puff.x <= 1280.0 + 150.0);
    }
}
