//! Weighted scores computed from player state.

use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;

use super::condition::Condition;
use crate::state::PlayerState;

/// A counter contributing to a score, divided (rounding down) by `divisor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Counter key.
    pub counter: String,
    /// Divisor applied to the counter's value. Always at least 1.
    pub divisor: i32,
}

/// Fixed points awarded when a condition holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bonus {
    /// Gate for the bonus.
    pub condition: Condition,
    /// Points added when the condition holds.
    pub points: i32,
}

/// The breakdown of an evaluated score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Sum of the counter terms.
    pub base: i32,
    /// Sum of the bonuses that applied.
    pub bonus: i32,
    /// Random roll, or 0 when the rule has none.
    pub roll: i32,
    /// `(base + bonus) / divisor + roll`.
    pub total: i32,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (base {}, bonus {}, roll {})",
            self.total, self.base, self.bonus, self.roll
        )
    }
}

/// How to compute a score from player state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRule {
    terms: Vec<Term>,
    bonuses: Vec<Bonus>,
    divisor: i32,
    roll: Option<RangeInclusive<i32>>,
}

impl Default for ScoreRule {
    fn default() -> Self {
        Self {
            terms: Vec::new(),
            bonuses: Vec::new(),
            divisor: 1,
            roll: None,
        }
    }
}

impl ScoreRule {
    /// Create an empty rule that always scores 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a counter at full weight.
    pub fn counter(self, key: impl Into<String>) -> Self {
        self.counter_over(key, 1)
    }

    /// Add a counter divided by `divisor`, rounding down.
    pub fn counter_over(mut self, key: impl Into<String>, divisor: i32) -> Self {
        self.terms.push(Term {
            counter: key.into(),
            divisor: divisor.max(1),
        });
        self
    }

    /// Add points when `condition` holds.
    pub fn bonus(mut self, condition: Condition, points: i32) -> Self {
        self.bonuses.push(Bonus { condition, points });
        self
    }

    /// Divide the summed terms and bonuses by `divisor` before the roll is added.
    pub fn divided_by(mut self, divisor: i32) -> Self {
        self.divisor = divisor.max(1);
        self
    }

    /// Add a uniform roll from the inclusive range.
    pub fn with_roll(mut self, range: RangeInclusive<i32>) -> Self {
        self.roll = Some(range);
        self
    }

    /// Sum of counter terms.
    pub fn base(&self, state: &PlayerState) -> i32 {
        self.terms
            .iter()
            .map(|t| state.value(&t.counter).div_euclid(t.divisor))
            .fold(0, i32::saturating_add)
    }

    /// Sum of applicable bonuses.
    pub fn bonus_points(&self, state: &PlayerState) -> i32 {
        self.bonuses
            .iter()
            .filter(|b| b.condition.evaluate(state))
            .map(|b| b.points)
            .fold(0, i32::saturating_add)
    }

    /// Evaluate the rule, drawing the roll (if any) from `rng`.
    pub fn evaluate<R: Rng>(&self, state: &PlayerState, rng: &mut R) -> Score {
        let roll = self
            .roll
            .as_ref()
            .map_or(0, |range| rng.random_range(range.clone()));
        self.with_fixed_roll(state, roll)
    }

    /// Evaluate the rule with a predetermined roll.
    pub fn with_fixed_roll(&self, state: &PlayerState, roll: i32) -> Score {
        let base = self.base(state);
        let bonus = self.bonus_points(state);
        Score {
            base,
            bonus,
            roll,
            total: base
                .saturating_add(bonus)
                .div_euclid(self.divisor)
                .saturating_add(roll),
        }
    }
}
