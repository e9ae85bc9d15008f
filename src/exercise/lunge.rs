use super::metrics::{Classification, FormStatus, Phase};
use crate::pose::{KeypointIndex, Pose};

pub const REQUIRED: [KeypointIndex; 3] = [
    KeypointIndex::LeftKnee,
    KeypointIndex::RightKnee,
    KeypointIndex::LeftHip,
];

const DEPTH_DOWN: f32 = 100.0;
const KNEE_BALANCE: f32 = 30.0;

pub fn classify(pose: &Pose) -> Classification {
    let left_knee = pose.get(KeypointIndex::LeftKnee).y;
    let right_knee = pose.get(KeypointIndex::RightKnee).y;
    let hip = pose.get(KeypointIndex::LeftHip).y;

    // the higher knee in frame is the one with the smaller y
    let depth = (left_knee.min(right_knee) - hip).abs();
    let balance = (left_knee - right_knee).abs();

    if depth <= DEPTH_DOWN {
        return Classification::new(
            Phase::Up,
            FormStatus::Adjusting,
            80,
            "Step forward and lower into a deeper lunge.",
        );
    }

    if balance < KNEE_BALANCE {
        Classification::new(
            Phase::Down,
            FormStatus::Correct,
            95,
            "Great lunge depth! Push back to starting position.",
        )
    } else {
        Classification::new(
            Phase::Down,
            FormStatus::Incorrect,
            70,
            "Keep both knees at 90-degree angles.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::fixtures::pose_with_y;
    use crate::pose::KeypointIndex::*;

    #[test]
    fn test_shallow() {
        let pose = pose_with_y(&[(LeftHip, 300.0), (LeftKnee, 380.0), (RightKnee, 390.0)]);
        let c = classify(&pose);
        assert_eq!(c.phase, Phase::Up);
        assert_eq!(c.form_accuracy, 80);
    }

    #[test]
    fn test_deep_and_balanced() {
        let pose = pose_with_y(&[(LeftHip, 200.0), (LeftKnee, 320.0), (RightKnee, 340.0)]);
        let c = classify(&pose);
        assert_eq!(c.phase, Phase::Down);
        assert_eq!(c.status, FormStatus::Correct);
        assert_eq!(c.form_accuracy, 95);
    }

    #[test]
    fn test_deep_and_unbalanced() {
        let pose = pose_with_y(&[(LeftHip, 200.0), (LeftKnee, 320.0), (RightKnee, 380.0)]);
        let c = classify(&pose);
        assert_eq!(c.phase, Phase::Down);
        assert_eq!(c.status, FormStatus::Incorrect);
        assert_eq!(c.feedback, "Keep both knees at 90-degree angles.");
    }

    #[test]
    fn test_depth_uses_higher_knee() {
        // right knee is higher; depth = |310 - 200| = 110
        let pose = pose_with_y(&[(LeftHip, 200.0), (LeftKnee, 500.0), (RightKnee, 310.0)]);
        assert_eq!(classify(&pose).phase, Phase::Down);
    }
}
