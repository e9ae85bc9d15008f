use super::keypoint::{KeypointIndex, Pose};

/// Bone connections (start, end) for overlay drawing
pub const SKELETON_CONNECTIONS: [(KeypointIndex, KeypointIndex); 13] = [
    // head
    (KeypointIndex::Head, KeypointIndex::LeftShoulder),
    (KeypointIndex::Head, KeypointIndex::RightShoulder),
    // arms
    (KeypointIndex::LeftShoulder, KeypointIndex::LeftElbow),
    (KeypointIndex::RightShoulder, KeypointIndex::RightElbow),
    (KeypointIndex::LeftElbow, KeypointIndex::LeftWrist),
    (KeypointIndex::RightElbow, KeypointIndex::RightWrist),
    // torso
    (KeypointIndex::LeftShoulder, KeypointIndex::LeftHip),
    (KeypointIndex::RightShoulder, KeypointIndex::RightHip),
    (KeypointIndex::LeftHip, KeypointIndex::RightHip),
    // legs
    (KeypointIndex::LeftHip, KeypointIndex::LeftKnee),
    (KeypointIndex::RightHip, KeypointIndex::RightKnee),
    (KeypointIndex::LeftKnee, KeypointIndex::LeftAnkle),
    (KeypointIndex::RightKnee, KeypointIndex::RightAnkle),
];

/// Overlay cut-off used when no other threshold is configured
pub const DRAW_CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Connections whose both ends are strictly above `threshold`
pub fn visible_bones(pose: &Pose, threshold: f32) -> Vec<(KeypointIndex, KeypointIndex)> {
    SKELETON_CONNECTIONS
        .iter()
        .copied()
        .filter(|&(a, b)| pose.get(a).confidence > threshold && pose.get(b).confidence > threshold)
        .collect()
}
