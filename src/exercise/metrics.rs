use serde::{Deserialize, Serialize};

/// Where in a repetition the body currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Up,
    Down,
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    Correct,
    Incorrect,
    Adjusting,
}

pub const MAX_ACCURACY: u8 = 100;

/// Feedback shown before a usable pose has been seen
pub const OUT_OF_VIEW_FEEDBACK: &str = "Position yourself in the camera view to begin";

const INITIAL_ACCURACY: u8 = 85;

/// Verdict of one exercise rule on one pose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub phase: Phase,
    pub status: FormStatus,
    pub form_accuracy: u8,
    pub feedback: &'static str,
}

impl Classification {
    pub fn new(phase: Phase, status: FormStatus, form_accuracy: u8, feedback: &'static str) -> Self {
        Self {
            phase,
            status,
            form_accuracy: form_accuracy.min(MAX_ACCURACY),
            feedback,
        }
    }

    /// Verdict for a frame whose required landmarks were not all seen.
    /// Keeps the phase so no rep can be counted from it.
    pub fn out_of_view(phase: Phase, form_accuracy: u8) -> Self {
        Self::new(phase, FormStatus::Adjusting, form_accuracy, OUT_OF_VIEW_FEEDBACK)
    }
}

/// Per-session exercise state, updated once per frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseMetrics {
    pub rep_count: u32,
    /// Percentage, 0..=100
    pub form_accuracy: u8,
    pub feedback: String,
    pub status: FormStatus,
    pub phase: Phase,
}

impl Default for ExerciseMetrics {
    fn default() -> Self {
        Self {
            rep_count: 0,
            form_accuracy: INITIAL_ACCURACY,
            feedback: OUT_OF_VIEW_FEEDBACK.to_string(),
            status: FormStatus::Adjusting,
            phase: Phase::Up,
        }
    }
}
