//! Outcome resolution: turn accumulated state into one of several endings.
//!
//! A [`ScoreRule`] sums selected counters, adds fixed bonuses gated on
//! [`Condition`]s, and optionally adds a bounded random roll. An
//! [`OutcomeTable`] then maps the score to a tier by checking descending
//! thresholds; the first threshold the score meets wins.

mod condition;
mod score;
mod table;

pub use condition::Condition;
pub use score::{Bonus, Score, ScoreRule, Term};
pub use table::{OutcomeTable, OutcomeTableBuilder, Tier};
