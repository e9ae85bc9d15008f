use super::metrics::{Classification, FormStatus, Phase};
use crate::pose::{KeypointIndex, Pose};

pub const REQUIRED: [KeypointIndex; 3] = [
    KeypointIndex::LeftShoulder,
    KeypointIndex::LeftHip,
    KeypointIndex::LeftAnkle,
];

const ALIGN_PERFECT: f32 = 30.0;
const ALIGN_GOOD: f32 = 60.0;

/// Planks are held, so the phase is always `Hold` and never counts a rep
pub fn classify(pose: &Pose) -> Classification {
    let shoulder = pose.get(KeypointIndex::LeftShoulder).y;
    let hip = pose.get(KeypointIndex::LeftHip).y;
    let ankle = pose.get(KeypointIndex::LeftAnkle).y;

    let alignment = (shoulder - hip).abs() + (hip - ankle).abs();

    if alignment < ALIGN_PERFECT {
        Classification::new(
            Phase::Hold,
            FormStatus::Correct,
            95,
            "Perfect plank! Keep holding this position.",
        )
    } else if alignment < ALIGN_GOOD {
        Classification::new(
            Phase::Hold,
            FormStatus::Adjusting,
            80,
            "Good form, but try to keep your body straighter.",
        )
    } else {
        Classification::new(
            Phase::Hold,
            FormStatus::Incorrect,
            65,
            "Engage your core and align your body from head to heels.",
        )
    }
}
