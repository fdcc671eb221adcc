//! Procedural ground
//!
//! The ground is a row of fixed-width segments with random gaps. After each
//! segment there is a `gap_chance` of skipping ahead by a gap between one
//! segment width and `max_jump_gap`, so every gap stays jumpable. The first
//! `safe_start` pixels of a run never get gaps.

use rand::Rng;

use crate::config::PlatformConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct PlatformGenerator {
    segment_width: f32,
    max_jump_gap: f32,
    gap_chance: f64,
    /// x where the next segment would start
    last_x: f32,
}

impl PlatformGenerator {
    pub fn new(config: &PlatformConfig) -> Self {
        Self {
            segment_width: config.segment.0,
            max_jump_gap: config.max_jump_gap.max(config.segment.0),
            gap_chance: config.gap_chance,
            last_x: 0.0,
        }
    }

    pub fn last_x(&self) -> f32 {
        self.last_x
    }

    /// Left edges of new segments from `last_x` up to `until`.
    /// Gaps are only allowed once x has passed `safe_until`.
    pub fn fill<R: Rng + ?Sized>(&mut self, until: f32, safe_until: f32, rng: &mut R) -> Vec<f32> {
        let mut segments = Vec::new();
        let mut x = self.last_x;

        while x < until {
            segments.push(x);
            x += self.segment_width;

            if x > safe_until && rng.gen::<f64>() < self.gap_chance {
                x += self.gap(rng);
            }
        }

        self.last_x = x;
        segments
    }

    /// Opening stretch of a run, with the safe zone honoured
    pub fn generate_initial<R: Rng + ?Sized>(&mut self, config: &PlatformConfig, rng: &mut R) -> Vec<f32> {
        self.last_x = 0.0;
        self.fill(config.initial_extent, config.safe_start, rng)
    }

    /// Another `chunk` pixels past the current end
    pub fn generate_more<R: Rng + ?Sized>(&mut self, chunk: f32, rng: &mut R) -> Vec<f32> {
        let until = self.last_x + chunk;
        self.fill(until, f32::NEG_INFINITY, rng)
    }

    /// Should another chunk be streamed in for a player at `player_x`?
    pub fn needs_more(&self, player_x: f32, lookahead: f32) -> bool {
        player_x > self.last_x - lookahead
    }

    fn gap<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let span = self.max_jump_gap - self.segment_width;
        (rng.gen::<f32>() * span + self.segment_width).floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn gaps(segments: &[f32], width: f32) -> Vec<f32> {
        segments
            .windows(2)
            .map(|w| w[1] - w[0] - width)
            .filter(|gap| *gap > 0.0)
            .collect()
    }

    #[test]
    fn test_safe_zone_is_solid() {
        let config = PlatformConfig::default();
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut generator = PlatformGenerator::new(&config);
            let segments = generator.generate_initial(&config, &mut rng);

            // Segments at 0, 128, 256, 384 are back to back; 384 + 128 = 512 > 400
            assert_eq!(&segments[..4], &[0.0, 128.0, 256.0, 384.0]);
            assert!(generator.last_x() >= config.initial_extent);
        }
    }

    #[test]
    fn test_gaps_are_jumpable() {
        let config = PlatformConfig::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let mut generator = PlatformGenerator::new(&config);
        let mut segments = generator.generate_initial(&config, &mut rng);
        for _ in 0..50 {
            segments.extend(generator.generate_more(config.chunk, &mut rng));
        }

        let found = gaps(&segments, config.segment.0);
        assert!(!found.is_empty());
        for gap in found {
            assert!((128.0..250.0).contains(&gap), "gap {} out of range", gap);
        }
    }

    #[test]
    fn test_no_gaps_when_chance_is_zero() {
        let config = PlatformConfig { gap_chance: 0.0, ..Default::default() };
        let mut rng = SmallRng::seed_from_u64(1);
        let mut generator = PlatformGenerator::new(&config);
        let segments = generator.generate_initial(&config, &mut rng);

        assert_eq!(segments.len(), 16);
        assert_eq!(generator.last_x(), 2048.0);
    }

    #[test]
    fn test_streaming_continues_from_last_x() {
        let config = PlatformConfig { gap_chance: 0.0, ..Default::default() };
        let mut rng = SmallRng::seed_from_u64(1);
        let mut generator = PlatformGenerator::new(&config);
        generator.generate_initial(&config, &mut rng);

        assert!(!generator.needs_more(1000.0, config.lookahead));
        assert!(generator.needs_more(1049.0, config.lookahead));

        let more = generator.generate_more(config.chunk, &mut rng);
        assert_eq!(more.first(), Some(&2048.0));
        assert!(generator.last_x() >= 3048.0);
    }
}
