//! Player state management.

use std::collections::BTreeSet;

use super::counter::Counter;

/// Labels used when rendering the item list in [`PlayerState::summary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLabels {
    /// Heading for the acquired item list.
    pub items: String,
    /// Shown in place of the list when no items are held.
    pub empty: String,
}

impl Default for SummaryLabels {
    fn default() -> Self {
        Self {
            items: "Items".to_string(),
            empty: "none".to_string(),
        }
    }
}

/// The player's state for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// The protagonist's name.
    pub name: String,
    /// Identifier of the archetype chosen at setup.
    pub archetype: String,
    counters: Vec<Counter>,
    items: BTreeSet<String>,
    labels: SummaryLabels,
}

impl PlayerState {
    /// Create a new player with no counters and no items.
    pub fn new(name: impl Into<String>, archetype: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            archetype: archetype.into(),
            counters: Vec::new(),
            items: BTreeSet::new(),
            labels: SummaryLabels::default(),
        }
    }

    /// Add a counter. Counters render in the order they were added.
    pub fn with_counter(mut self, counter: Counter) -> Self {
        self.counters.push(counter);
        self
    }

    /// Set the labels used for the item list in summaries.
    pub fn with_summary_labels(mut self, labels: SummaryLabels) -> Self {
        self.labels = labels;
        self
    }

    /// All counters in declaration order.
    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    /// Look up a counter by key.
    pub fn counter(&self, key: &str) -> Option<&Counter> {
        self.counters.iter().find(|c| c.key == key)
    }

    /// Current value of a counter, or 0 if the state does not carry it.
    pub fn value(&self, key: &str) -> i32 {
        self.counter(key).map_or(0, |c| c.current)
    }

    /// Apply named deltas to one or more counters.
    ///
    /// Every result is clamped to its counter's bounds. Keys the state does
    /// not carry are skipped.
    pub fn adjust<'a>(&mut self, deltas: impl IntoIterator<Item = (&'a str, i32)>) {
        for (key, delta) in deltas {
            match self.counters.iter_mut().find(|c| c.key == key) {
                Some(counter) => {
                    counter.adjust(delta);
                }
                None => log::warn!("ignoring delta {delta:+} for unknown counter {key:?}"),
            }
        }
    }

    /// Check if the player holds an item.
    pub fn has_item(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    /// Add an item. Adding an item twice has no effect.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.insert(item.into());
    }

    /// Remove an item. Returns whether it was held.
    pub fn remove_item(&mut self, item: &str) -> bool {
        self.items.remove(item)
    }

    /// Held items in lexicographic order.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Returns true while no liveness-required counter has crossed its threshold.
    pub fn is_alive(&self) -> bool {
        !self.counters.iter().any(Counter::has_failed)
    }

    /// Returns true once the player can no longer continue.
    pub fn is_grounded(&self) -> bool {
        !self.is_alive()
    }

    /// Render all counters followed by the sorted item list.
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = self.counters.iter().map(ToString::to_string).collect();
        parts.push(format!("{}: {}", self.labels.items, self.item_list()));
        parts.join(", ")
    }

    /// Held items joined with commas, or the empty label.
    pub fn item_list(&self) -> String {
        if self.items.is_empty() {
            self.labels.empty.clone()
        } else {
            self.items().collect::<Vec<_>>().join(", ")
        }
    }
}
