use rand::Rng;
use raylib::prelude::*;

use crate::constants::RAIN_CELL_AREA;

/// One rain streak: near-constant leftward drift, randomized fall speed.
pub struct RainDrop {
    pub x: f32,
    pub y: f32,
    pub len: f32,
    pub vx: f32, // pixels per second
    pub vy: f32,
}

/// Population scales with area. Regenerated wholesale on resize.
pub fn make_rain(width: f32, height: f32, rng: &mut impl Rng) -> Vec<RainDrop> {
    let count = (width * height / RAIN_CELL_AREA) as usize;
    (0..count)
        .map(|_| RainDrop {
            x: rng.random_range(0.0..width),
            y: rng.random_range(0.0..height),
            len: rng.random_range(8.0..24.0),
            vx: -120.0,
            vy: rng.random_range(1080.0..1920.0),
        })
        .collect()
}

impl RainDrop {
    pub fn advance(&mut self, dt: f32, width: f32, height: f32, rng: &mut impl Rng) {
        self.x += self.vx * dt;
        self.y += self.vy * dt;
        // Fell below the bottom or drifted past the left edge: respawn just
        // above the top, biased rightward so the drift carries it back in.
        if self.y > height + 20.0 || self.x < -20.0 {
            self.x = rng.random_range(0.0..width) + 40.0;
            self.y = -20.0;
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, color: Color) {
        // The streak leans with the horizontal drift.
        let lean = self.vx * 0.013;
        d.draw_line_ex(
            Vector2::new(self.x, self.y),
            Vector2::new(self.x + lean, self.y - self.len),
            1.2,
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_population_scales_with_area() {
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(make_rain(1200.0, 600.0, &mut rng).len(), 60);
        assert_eq!(make_rain(2400.0, 600.0, &mut rng).len(), 120);

        let mut previous = 0;
        for (w, h) in [(320.0, 240.0), (800.0, 600.0), (1920.0, 1080.0)] {
            let count = make_rain(w, h, &mut rng).len();
            assert!(count >= previous);
            previous = count;
        }
    }

    #[test]
    fn test_fall_speeds_within_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for drop in make_rain(1280.0, 720.0, &mut rng) {
            assert_eq!(drop.vx, -120.0);
            assert!(drop.vy >= 1080.0 && drop.vy < 1920.0);
            assert!(drop.len >= 8.0 && drop.len < 24.0);
        }
    }

    #[test]
    fn test_respawns_above_top_after_falling_out() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut drop = RainDrop {
            x: 600.0,
            y: 719.0,
            len: 10.0,
            vx: -120.0,
            vy: 1200.0,
        };
        drop.advance(0.05, 1280.0, 720.0, &mut rng);
        assert_eq!(drop.y, -20.0);
        assert!(drop.x >= 40.0);
    }

    #[test]
    fn test_respawns_after_drifting_off_left() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut drop = RainDrop {
            x: -19.0,
            y: 100.0,
            len: 10.0,
            vx: -120.0,
            vy: 1200.0,
        };
        drop.advance(0.05, 1280.0, 720.0, &mut rng);
        assert_eq!(drop.y, -20.0);
    }
}
