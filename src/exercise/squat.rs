use super::metrics::{Classification, FormStatus, Phase};
use crate::pose::{KeypointIndex, Pose};

pub const REQUIRED: [KeypointIndex; 3] = [
    KeypointIndex::LeftHip,
    KeypointIndex::LeftKnee,
    KeypointIndex::LeftAnkle,
];

const DEPTH_DOWN: f32 = 80.0;
const KNEE_TOLERANCE: f32 = 40.0;

pub fn classify(pose: &Pose) -> Classification {
    let hip = pose.get(KeypointIndex::LeftHip).y;
    let knee = pose.get(KeypointIndex::LeftKnee).y;
    let ankle = pose.get(KeypointIndex::LeftAnkle).y;

    let depth = (hip - knee).abs();
    let knee_alignment = (knee - ankle).abs();

    if depth <= DEPTH_DOWN {
        return Classification::new(
            Phase::Up,
            FormStatus::Adjusting,
            80,
            "Lower down until your thighs are parallel to the ground.",
        );
    }

    if knee_alignment < KNEE_TOLERANCE {
        Classification::new(
            Phase::Down,
            FormStatus::Correct,
            95,
            "Excellent depth! Drive through your heels to stand up.",
        )
    } else {
        Classification::new(
            Phase::Down,
            FormStatus::Incorrect,
            70,
            "Keep your knees aligned over your toes.",
        )
    }
}
