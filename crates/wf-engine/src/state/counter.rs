//! Bounded resource counters (hull, morale, gold, prestige, ...).
//!
//! A counter is a clamped integer with a floor and an optional ceiling.
//! Counters may also carry a failure threshold, which makes them part of
//! the player's liveness check.

use std::fmt;

/// A named integer resource clamped between `min` and `max`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    /// Stable key used by deltas and score terms.
    pub key: String,
    /// Display label used in summaries.
    pub label: String,
    /// Current value.
    pub current: i32,
    /// Minimum value.
    pub min: i32,
    /// Maximum value, or `None` for a floor-only counter.
    pub max: Option<i32>,
    /// The player fails once this counter drops to or below the threshold.
    pub fails_at: Option<i32>,
}

impl Counter {
    /// Create a counter bounded to `[min, max]`, clamping the starting value.
    pub fn bounded(
        key: impl Into<String>,
        label: impl Into<String>,
        current: i32,
        min: i32,
        max: i32,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            current: current.clamp(min, max),
            min,
            max: Some(max),
            fails_at: None,
        }
    }

    /// Create a counter with a floor and no ceiling.
    pub fn floor_only(
        key: impl Into<String>,
        label: impl Into<String>,
        current: i32,
        min: i32,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            current: current.max(min),
            min,
            max: None,
            fails_at: None,
        }
    }

    /// Mark this counter as required for liveness.
    pub fn required(mut self, fails_at: i32) -> Self {
        self.fails_at = Some(fails_at);
        self
    }

    /// Adjust by a delta, clamping to bounds. Returns the new value.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        let raw = self.current.saturating_add(delta);
        self.current = match self.max {
            Some(max) => raw.clamp(self.min, max),
            None => raw.max(self.min),
        };
        self.current
    }

    /// Returns true if the counter is at its floor.
    pub fn is_empty(&self) -> bool {
        self.current <= self.min
    }

    /// Returns true if the counter is at its ceiling. Floor-only counters are never full.
    pub fn is_full(&self) -> bool {
        self.max.is_some_and(|max| self.current >= max)
    }

    /// Returns true if this counter has crossed its failure threshold.
    pub fn has_failed(&self) -> bool {
        self.fails_at.is_some_and(|threshold| self.current <= threshold)
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}: {}/{}", self.label, self.current, max),
            None => write!(f, "{}: {}", self.label, self.current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_clamps_initial() {
        let c = Counter::bounded("hull", "Hull", 100, 0, 10);
        assert_eq!(c.current, 10);
        assert!(c.is_full());
    }

    #[test]
    fn adjust_clamps_to_max() {
        let mut c = Counter::bounded("ammo", "Ammo", 8, 0, 12);
        assert_eq!(c.adjust(10), 12);
        assert_eq!(c.adjust(3), 12);
    }

    #[test]
    fn adjust_clamps_to_min() {
        let mut c = Counter::bounded("fuel", "Fuel", 2, 0, 10);
        assert_eq!(c.adjust(-5), 0);
        assert!(c.is_empty());
    }

    #[test]
    fn floor_only_has_no_ceiling() {
        let mut c = Counter::floor_only("wealth", "Wealth", 6, 0);
        assert_eq!(c.adjust(1000), 1006);
        assert!(!c.is_full());
        assert_eq!(c.adjust(-2000), 0);
    }

    #[test]
    fn adjust_saturates_instead_of_overflowing() {
        let mut c = Counter::floor_only("wealth", "Wealth", i32::MAX - 1, 0);
        assert_eq!(c.adjust(i32::MAX), i32::MAX);
    }

    #[test]
    fn failure_threshold() {
        let mut c = Counter::bounded("health", "Health", 2, 0, 15).required(0);
        assert!(!c.has_failed());
        c.adjust(-2);
        assert!(c.has_failed());

        let unrequired = Counter::bounded("gold", "Gold", 0, 0, 99);
        assert!(!unrequired.has_failed());
    }

    #[test]
    fn display() {
        assert_eq!(
            Counter::bounded("hull", "Hull", 7, 0, 10).to_string(),
            "Hull: 7/10"
        );
        assert_eq!(
            Counter::floor_only("prestige", "Prestige", 3, 0).to_string(),
            "Prestige: 3"
        );
    }
}
