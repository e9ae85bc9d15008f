//! Exercise form analysis: one rule per exercise, rep counting on top.

pub mod analyzer;
pub mod burpee;
pub mod kind;
pub mod lunge;
pub mod metrics;
pub mod plank;
pub mod push_up;
pub mod reps;
pub mod squat;

#[cfg(test)]
pub(crate) mod fixtures;

pub use analyzer::{analyze, classify_frame, ExerciseAnalyzer};
pub use kind::{Difficulty, ExerciseInfo, ExerciseKind, UnknownExercise, CATALOG};
pub use metrics::{Classification, ExerciseMetrics, FormStatus, Phase};
pub use reps::RepCounter;
