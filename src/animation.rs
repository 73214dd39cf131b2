//! Small timing helpers behind the rotating and counting widgets.

/// Index after `current` in a carousel of `len` items, wrapping around.
pub fn cycle(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Linear count-up from zero to `target` over a fixed number of ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    target: f64,
    steps: u32,
    tick: u32,
}

impl CountUp {
    pub fn new(target: f64, steps: u32) -> Self {
        Self { target, steps: steps.max(1), tick: 0 }
    }

    /// Milliseconds between ticks so the count finishes in `duration_ms`.
    pub fn tick_interval(duration_ms: u32, steps: u32) -> u32 {
        duration_ms / steps.max(1)
    }

    /// Advances one tick and returns the new value. Lands exactly on the
    /// target on the last tick.
    pub fn advance(&mut self) -> f64 {
        if self.tick < self.steps {
            self.tick += 1;
        }
        self.value()
    }

    pub fn value(&self) -> f64 {
        if self.is_done() {
            self.target
        } else {
            self.target * f64::from(self.tick) / f64::from(self.steps)
        }
    }

    pub fn is_done(&self) -> bool {
        self.tick >= self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps() {
        assert_eq!(cycle(0, 6), 1);
        assert_eq!(cycle(5, 6), 0);
        assert_eq!(cycle(3, 0), 0);
    }

    #[test]
    fn count_up_reaches_target_exactly() {
        let mut counter = CountUp::new(99.9, 60);
        let mut last = 0.0;
        for _ in 0..60 {
            let value = counter.advance();
            assert!(value >= last);
            last = value;
        }
        assert!(counter.is_done());
        assert_eq!(counter.value(), 99.9);
        assert_eq!(counter.advance(), 99.9);
    }

    #[test]
    fn count_up_halfway() {
        let mut counter = CountUp::new(50.0, 60);
        for _ in 0..30 {
            counter.advance();
        }
        assert_eq!(counter.value(), 25.0);
    }

    #[test]
    fn tick_interval_spreads_duration() {
        assert_eq!(CountUp::tick_interval(2_000, 60), 33);
        assert_eq!(CountUp::tick_interval(2_000, 0), 2_000);
    }
}
