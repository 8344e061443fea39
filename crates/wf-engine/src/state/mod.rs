//! Player state: bounded counters, acquired items, and the liveness check.

mod counter;
mod player;

pub use counter::Counter;
pub use player::{PlayerState, SummaryLabels};
