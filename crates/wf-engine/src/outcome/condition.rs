//! Conditions evaluated against player state.

use std::ops::Not;

use crate::state::PlayerState;

/// A predicate over [`PlayerState`] used to gate score bonuses and
/// state-dependent narration or menus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Condition {
    /// The player holds an item.
    HasItem(String),
    /// The player chose a specific archetype.
    Archetype(String),
    /// A counter is at or above a value.
    AtLeast {
        /// Counter key.
        counter: String,
        /// Minimum value.
        value: i32,
    },
    /// Logical NOT.
    Not(Box<Condition>),
    /// Logical AND.
    All(Vec<Condition>),
    /// Logical OR.
    Any(Vec<Condition>),
    /// Always true.
    #[default]
    Always,
}

impl Condition {
    /// Shorthand for [`Condition::HasItem`].
    pub fn has_item(item: impl Into<String>) -> Self {
        Self::HasItem(item.into())
    }

    /// Shorthand for [`Condition::Archetype`].
    pub fn archetype(id: impl Into<String>) -> Self {
        Self::Archetype(id.into())
    }

    /// Shorthand for [`Condition::AtLeast`].
    pub fn at_least(counter: impl Into<String>, value: i32) -> Self {
        Self::AtLeast {
            counter: counter.into(),
            value,
        }
    }

    /// Evaluate the condition.
    pub fn evaluate(&self, state: &PlayerState) -> bool {
        match self {
            Condition::HasItem(item) => state.has_item(item),
            Condition::Archetype(id) => state.archetype == *id,
            Condition::AtLeast { counter, value } => state
                .counter(counter)
                .is_some_and(|c| c.current >= *value),
            Condition::Not(inner) => !inner.evaluate(state),
            Condition::All(conditions) => conditions.iter().all(|c| c.evaluate(state)),
            Condition::Any(conditions) => conditions.iter().any(|c| c.evaluate(state)),
            Condition::Always => true,
        }
    }
}

impl Not for Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        match self {
            Condition::Not(inner) => *inner,
            other => Condition::Not(Box::new(other)),
        }
    }
}
