//! Property tweens
//!
//! A `Tween` is a linear interpolation of one float over time, with the
//! two knobs the game needs: `yoyo` (play back to the start after reaching
//! the end) and a repeat count. The owner advances it and reads `value()`.

/// How many extra cycles to play after the first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Count(u32),
    Forever,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: f64,
    elapsed_ms: f64,
    yoyo: bool,
    repeat: Repeat,
}

impl Tween {
    /// One-shot tween from `from` to `to`
    pub fn new(from: f32, to: f32, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(1.0),
            elapsed_ms: 0.0,
            yoyo: false,
            repeat: Repeat::Count(0),
        }
    }

    pub fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Length of one cycle (forward, plus back when yoyo)
    fn cycle_ms(&self) -> f64 {
        if self.yoyo { self.duration_ms * 2.0 } else { self.duration_ms }
    }

    fn total_ms(&self) -> Option<f64> {
        match self.repeat {
            Repeat::Count(n) => Some(self.cycle_ms() * (n as f64 + 1.0)),
            Repeat::Forever => None,
        }
    }

    pub fn advance(&mut self, dt_ms: f64) {
        self.elapsed_ms += dt_ms;
        if let Some(total) = self.total_ms() {
            self.elapsed_ms = self.elapsed_ms.min(total);
        } else {
            // Keep the clock small so precision does not drift on long runs
            self.elapsed_ms %= self.cycle_ms();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.total_ms().is_some_and(|total| self.elapsed_ms >= total)
    }

    /// Normalized progress through the current cycle, already folded for yoyo
    fn phase(&self) -> f32 {
        if self.is_finished() {
            return if self.yoyo { 0.0 } else { 1.0 };
        }
        let t = (self.elapsed_ms % self.cycle_ms()) / self.duration_ms;
        if t <= 1.0 { t as f32 } else { (2.0 - t) as f32 }
    }

    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.phase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_one_shot_reaches_end_and_finishes() {
        let mut tween = Tween::new(100.0, 50.0, 1000.0);
        tween.advance(500.0);
        assert!(approx(tween.value(), 75.0));
        assert!(!tween.is_finished());

        tween.advance(600.0);
        assert!(tween.is_finished());
        assert!(approx(tween.value(), 50.0));
    }

    #[test]
    fn test_yoyo_returns_to_start() {
        let mut tween = Tween::new(0.0, -20.0, 1000.0).yoyo();
        tween.advance(1000.0);
        assert!(approx(tween.value(), -20.0));
        tween.advance(500.0);
        assert!(approx(tween.value(), -10.0));
        tween.advance(500.0);
        assert!(tween.is_finished());
        assert!(approx(tween.value(), 0.0));
    }

    #[test]
    fn test_forever_never_finishes() {
        let mut spin = Tween::new(0.0, 360.0, 500.0).repeat(Repeat::Forever);
        spin.advance(10_250.0);
        assert!(!spin.is_finished());
        assert!(approx(spin.value(), 180.0));
    }
}
