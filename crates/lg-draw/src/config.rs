//! Configuration for lottery draws and grouping runs.

use std::time::Duration;

use crate::grouping::GroupMethod;

/// Timing of the reveal animation that precedes a lottery result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawTiming {
    /// Total length of the reveal.
    pub total: Duration,
    /// Time between preview updates.
    pub interval: Duration,
}

impl Default for DrawTiming {
    fn default() -> Self {
        Self {
            total: Duration::from_millis(2000),
            interval: Duration::from_millis(50),
        }
    }
}

impl DrawTiming {
    /// The interval used for stepping, never shorter than one millisecond.
    pub fn step(&self) -> Duration {
        self.interval.max(Duration::from_millis(1))
    }

    /// Number of ticks in one full reveal (at least 1).
    pub fn ticks(&self) -> u32 {
        let step = self.step().as_millis();
        let total = self.total.as_millis();
        u32::try_from(total.div_ceil(step)).unwrap_or(u32::MAX).max(1)
    }
}

/// Configuration for a lottery session.
#[derive(Debug, Clone, Default)]
pub struct LotteryConfig {
    /// Whether a past winner may win again.
    pub allow_repeats: bool,
    /// Reveal timing.
    pub timing: DrawTiming,
}

impl LotteryConfig {
    /// Allow or forbid repeat winners.
    pub fn with_allow_repeats(mut self, allow: bool) -> Self {
        self.allow_repeats = allow;
        self
    }

    /// Set the reveal timing.
    pub fn with_timing(mut self, timing: DrawTiming) -> Self {
        self.timing = timing;
        self
    }
}

/// Configuration for a grouping run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingConfig {
    /// How the roster is divided.
    pub method: GroupMethod,
    /// Group size or group count, depending on `method` (at least 1).
    pub value: usize,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            method: GroupMethod::BySize,
            value: 3,
        }
    }
}

impl GroupingConfig {
    /// Set the grouping method.
    pub fn with_method(mut self, method: GroupMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the size or count (clamped to at least 1).
    pub fn with_value(mut self, value: usize) -> Self {
        self.value = value.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing() {
        let t = DrawTiming::default();
        assert_eq!(t.total, Duration::from_millis(2000));
        assert_eq!(t.interval, Duration::from_millis(50));
        assert_eq!(t.ticks(), 40);
    }

    #[test]
    fn zero_interval_still_steps() {
        let t = DrawTiming {
            total: Duration::from_millis(5),
            interval: Duration::ZERO,
        };
        assert_eq!(t.step(), Duration::from_millis(1));
        assert_eq!(t.ticks(), 5);
    }

    #[test]
    fn zero_total_is_one_tick() {
        let t = DrawTiming {
            total: Duration::ZERO,
            interval: Duration::from_millis(50),
        };
        assert_eq!(t.ticks(), 1);
    }

    #[test]
    fn lottery_builder() {
        let cfg = LotteryConfig::default().with_allow_repeats(true);
        assert!(cfg.allow_repeats);
        assert_eq!(cfg.timing, DrawTiming::default());
    }

    #[test]
    fn grouping_defaults_and_clamp() {
        let cfg = GroupingConfig::default();
        assert_eq!(cfg.method, GroupMethod::BySize);
        assert_eq!(cfg.value, 3);
        let cfg = cfg.with_method(GroupMethod::ByCount).with_value(0);
        assert_eq!(cfg.method, GroupMethod::ByCount);
        assert_eq!(cfg.value, 1);
    }
}
