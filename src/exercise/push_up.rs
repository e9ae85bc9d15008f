use super::metrics::{Classification, FormStatus, Phase};
use crate::pose::{KeypointIndex, Pose};

pub const REQUIRED: [KeypointIndex; 3] = [
    KeypointIndex::LeftShoulder,
    KeypointIndex::LeftWrist,
    KeypointIndex::LeftHip,
];

/// Shoulder-to-wrist drop (px) past which the chest is considered lowered
const ARM_DOWN: f32 = 100.0;
/// Shoulder-to-hip offset (px) tolerated at the bottom
const ALIGN_DOWN: f32 = 50.0;
/// Shoulder-to-hip offset (px) tolerated at the top
const ALIGN_UP: f32 = 30.0;

pub fn classify(pose: &Pose) -> Classification {
    let shoulder = pose.get(KeypointIndex::LeftShoulder).y;
    let wrist = pose.get(KeypointIndex::LeftWrist).y;
    let hip = pose.get(KeypointIndex::LeftHip).y;

    let arm = (shoulder - wrist).abs();
    let alignment = (shoulder - hip).abs();

    if arm > ARM_DOWN {
        if alignment < ALIGN_DOWN {
            Classification::new(
                Phase::Down,
                FormStatus::Correct,
                95,
                "Great form! Keep your body straight and push back up.",
            )
        } else {
            Classification::new(
                Phase::Down,
                FormStatus::Incorrect,
                65,
                "Keep your hips aligned with your shoulders.",
            )
        }
    } else if alignment < ALIGN_UP {
        Classification::new(
            Phase::Up,
            FormStatus::Correct,
            90,
            "Perfect starting position! Lower your chest to the ground.",
        )
    } else {
        Classification::new(
            Phase::Up,
            FormStatus::Adjusting,
            70,
            "Straighten your body and engage your core.",
        )
    }
}
