use super::metrics::{Classification, FormStatus, Phase};
use crate::pose::{KeypointIndex, Pose};

pub const REQUIRED: [KeypointIndex; 3] = [
    KeypointIndex::LeftShoulder,
    KeypointIndex::LeftHip,
    KeypointIndex::LeftWrist,
];

const PLANK_BODY: f32 = 50.0;
const PLANK_HANDS: f32 = 100.0;
const JUMP_BODY: f32 = 100.0;

/// Offsets are signed here: which body part is above the other matters
pub fn classify(pose: &Pose) -> Classification {
    let shoulder = pose.get(KeypointIndex::LeftShoulder).y;
    let hip = pose.get(KeypointIndex::LeftHip).y;
    let hand = pose.get(KeypointIndex::LeftWrist).y;

    let body = shoulder - hip;
    let hands = hand - shoulder;

    if body.abs() < PLANK_BODY && hands > PLANK_HANDS {
        Classification::new(
            Phase::Down,
            FormStatus::Correct,
            90,
            "Good plank position! Now jump your feet back in.",
        )
    } else if body > JUMP_BODY {
        Classification::new(
            Phase::Up,
            FormStatus::Correct,
            95,
            "Jump up with your arms overhead!",
        )
    } else {
        Classification::new(
            Phase::Down,
            FormStatus::Adjusting,
            75,
            "Drop into plank position, then jump back up.",
        )
    }
}
