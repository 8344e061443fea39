//! Descending threshold tables mapping a score to an ending.

use crate::error::{EngineError, EngineResult};

/// One tier of an [`OutcomeTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier<T> {
    /// Minimum score for this tier.
    pub threshold: i32,
    /// The ending selected by this tier.
    pub payload: T,
}

/// Ordered tiers with strictly descending thresholds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeTable<T> {
    tiers: Vec<Tier<T>>,
}

impl<T> OutcomeTable<T> {
    /// Start building a table. Tiers are added from highest to lowest.
    pub fn builder() -> OutcomeTableBuilder<T> {
        OutcomeTableBuilder { tiers: Vec::new() }
    }

    /// Tiers from highest threshold to lowest.
    pub fn tiers(&self) -> &[Tier<T>] {
        &self.tiers
    }

    /// Index of the first tier whose threshold `score` meets or exceeds.
    pub fn position(&self, score: i32) -> Option<usize> {
        self.tiers.iter().position(|tier| score >= tier.threshold)
    }

    /// The ending selected by `score`, or `None` if it is below every tier.
    pub fn resolve(&self, score: i32) -> Option<&T> {
        self.position(score).map(|index| &self.tiers[index].payload)
    }
}

/// Builder for [`OutcomeTable`].
#[derive(Debug, Clone)]
pub struct OutcomeTableBuilder<T> {
    tiers: Vec<Tier<T>>,
}

impl<T> OutcomeTableBuilder<T> {
    /// Add a tier selected by scores of at least `threshold`.
    pub fn tier(mut self, threshold: i32, payload: T) -> Self {
        self.tiers.push(Tier { threshold, payload });
        self
    }

    /// Add a catch-all tier that every remaining score selects.
    pub fn otherwise(self, payload: T) -> Self {
        self.tier(i32::MIN, payload)
    }

    /// Finish the table, checking that thresholds strictly descend.
    pub fn build(self) -> EngineResult<OutcomeTable<T>> {
        if self.tiers.is_empty() {
            return Err(EngineError::EmptyOutcomeTable);
        }
        for pair in self.tiers.windows(2) {
            if pair[1].threshold >= pair[0].threshold {
                return Err(EngineError::ThresholdOrder {
                    previous: pair[0].threshold,
                    next: pair[1].threshold,
                });
            }
        }
        Ok(OutcomeTable { tiers: self.tiers })
    }
}
