use crate::pose::{Keypoint, KeypointIndex, Pose};

pub const FIXTURE_CONFIDENCE: f32 = 0.9;

/// Confident pose with every landmark at y = 0 except the given overrides
pub fn pose_with_y(overrides: &[(KeypointIndex, f32)]) -> Pose {
    let mut pose = Pose::new(
        [Keypoint::new(0.0, 0.0, FIXTURE_CONFIDENCE); KeypointIndex::COUNT],
        FIXTURE_CONFIDENCE,
    );
    for &(idx, y) in overrides {
        pose.keypoints[idx as usize].y = y;
    }
    pose
}

/// Push-up bottom with a straight body
pub fn push_up_down() -> Pose {
    pose_with_y(&[
        (KeypointIndex::LeftShoulder, 200.0),
        (KeypointIndex::LeftWrist, 320.0),
        (KeypointIndex::LeftHip, 230.0),
    ])
}

/// Push-up top with a straight body
pub fn push_up_up() -> Pose {
    pose_with_y(&[
        (KeypointIndex::LeftShoulder, 200.0),
        (KeypointIndex::LeftWrist, 260.0),
        (KeypointIndex::LeftHip, 210.0),
    ])
}
