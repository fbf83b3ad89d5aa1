use rand::Rng;
use raylib::prelude::*;

use crate::constants::{
    FIRST_STRIKE_MAX, FIRST_STRIKE_MIN, FLASH_DURATION, RESTRIKE_MAX, RESTRIKE_MIN,
};

/// A procedurally generated bolt path: one or more disconnected polyline
/// runs stepping from above the top edge down to the bottom.
pub struct Bolt {
    pub runs: Vec<Vec<Vector2>>,
}

impl Bolt {
    pub fn generate(width: f32, height: f32, rng: &mut impl Rng) -> Bolt {
        let segments = rng.random_range(12..22);
        let step = height / segments as f32;
        let mut x = rng.random_range(0.0..width);
        let mut y = -20.0;

        let mut runs = Vec::new();
        let mut run = vec![Vector2::new(x, y)];
        for _ in 0..segments {
            x += rng.random_range(-25.0..25.0);
            y += step;
            run.push(Vector2::new(x, y));
            // Occasionally lift the pen so the stroke breaks into a fork.
            if rng.random_bool(0.18) {
                runs.push(std::mem::replace(&mut run, vec![Vector2::new(x, y)]));
            }
        }
        runs.push(run);
        Bolt { runs }
    }
}

/// Elapsed-time accumulator with a randomized strike threshold. The very
/// first threshold is drawn from a different range than re-strikes.
pub struct Lightning {
    since_strike: f32,
    next_strike: f32,
}

impl Lightning {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            since_strike: 0.0,
            next_strike: rng.random_range(FIRST_STRIKE_MIN..FIRST_STRIKE_MAX),
        }
    }

    /// Accumulates elapsed time; on reaching the threshold, yields a bolt
    /// and re-arms with a fresh threshold.
    pub fn tick(&mut self, dt: f32, width: f32, height: f32, rng: &mut impl Rng) -> Option<Bolt> {
        self.since_strike += dt;
        if self.since_strike < self.next_strike {
            return None;
        }
        let bolt = Bolt::generate(width, height, rng);
        self.since_strike = 0.0;
        self.next_strike = rng.random_range(RESTRIKE_MIN..RESTRIKE_MAX);
        Some(bolt)
    }
}

/// The full-screen flash overlay. Opacity snaps to full on a strike and
/// falls back to zero within the flash duration, re-strike or not.
pub struct Flash {
    opacity: f32,
    remaining: f32,
}

impl Flash {
    pub fn new() -> Self {
        Self {
            opacity: 0.0,
            remaining: 0.0,
        }
    }

    pub fn trigger(&mut self) {
        self.opacity = 1.0;
        self.remaining = FLASH_DURATION;
    }

    pub fn tick(&mut self, dt: f32) {
        if self.remaining <= 0.0 {
            return;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.opacity = 0.0;
            self.remaining = 0.0;
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_first_threshold_in_documented_range() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let lightning = Lightning::new(&mut rng);
            assert!(lightning.next_strike >= FIRST_STRIKE_MIN);
            assert!(lightning.next_strike < FIRST_STRIKE_MAX);
        }
    }

    #[test]
    fn test_no_strike_before_threshold() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut lightning = Lightning::new(&mut rng);
        assert!(lightning.tick(FIRST_STRIKE_MIN * 0.5, 1280.0, 720.0, &mut rng).is_none());
    }

    #[test]
    fn test_strike_resets_and_rearms_in_restrike_range() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut lightning = Lightning::new(&mut rng);
            let bolt = lightning.tick(FIRST_STRIKE_MAX, 1280.0, 720.0, &mut rng);
            assert!(bolt.is_some());
            assert_eq!(lightning.since_strike, 0.0);
            assert!(lightning.next_strike >= RESTRIKE_MIN);
            assert!(lightning.next_strike < RESTRIKE_MAX);
        }
    }

    #[test]
    fn test_bolt_shape_within_documented_bounds() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let bolt = Bolt::generate(1280.0, 720.0, &mut rng);

            assert!(!bolt.runs.is_empty());
            let first = bolt.runs[0][0];
            assert!(first.x >= 0.0 && first.x < 1280.0);
            assert_eq!(first.y, -20.0);

            // Total downward steps across all runs is the segment count.
            let steps: usize = bolt.runs.iter().map(|run| run.len() - 1).sum();
            assert!((12..22).contains(&steps));

            let step = 720.0 / steps as f32;
            for run in &bolt.runs {
                for pair in run.windows(2) {
                    assert!((pair[1].y - pair[0].y - step).abs() < 0.001);
                    assert!((pair[1].x - pair[0].x).abs() <= 25.0);
                }
            }

            // The last point reached the bottom edge region.
            let deepest = bolt
                .runs
                .iter()
                .flat_map(|run| run.iter())
                .fold(f32::MIN, |acc, p| acc.max(p.y));
            assert!((deepest - (720.0 - 20.0)).abs() < 0.001);
        }
    }

    #[test]
    fn test_bolt_generation_is_deterministic_per_seed() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let bolt_a = Bolt::generate(1280.0, 720.0, &mut a);
        let bolt_b = Bolt::generate(1280.0, 720.0, &mut b);
        assert_eq!(bolt_a.runs.len(), bolt_b.runs.len());
        for (run_a, run_b) in bolt_a.runs.iter().zip(&bolt_b.runs) {
            assert_eq!(run_a, run_b);
        }
    }

    #[test]
    fn test_flash_clears_within_duration() {
        let mut flash = Flash::new();
        flash.trigger();
        assert_eq!(flash.opacity(), 1.0);
        flash.tick(FLASH_DURATION * 0.5);
        assert_eq!(flash.opacity(), 1.0);
        flash.tick(FLASH_DURATION * 0.5);
        assert_eq!(flash.opacity(), 0.0);
    }

    #[test]
    fn test_retrigger_restarts_the_window() {
        let mut flash = Flash::new();
        flash.trigger();
        flash.tick(FLASH_DURATION * 0.8);
        flash.trigger();
        flash.tick(FLASH_DURATION * 0.8);
        assert_eq!(flash.opacity(), 1.0);
        flash.tick(FLASH_DURATION * 0.3);
        assert_eq!(flash.opacity(), 0.0);
    }
}
