//! Vehicle availability scenario generation.
//!
//! Enumerates every subset of present vehicles under independent,
//! identically distributed per-vehicle absences, with exact probabilities.
//! Intermediate probability mass can be watched through a
//! [`ProbabilityObserver`] without affecting the result.

mod generator;
mod observer;

pub use generator::{absence_level_mass, binomial, truncation_deficit, ScenarioGenerator};
pub use observer::{LogObserver, NoopObserver, ProbabilityObserver};
