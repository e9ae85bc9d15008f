use serde::{Deserialize, Serialize};

/// The 13 body landmarks delivered by a pose source, in wire order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum KeypointIndex {
    Head = 0,
    LeftShoulder = 1,
    RightShoulder = 2,
    LeftElbow = 3,
    RightElbow = 4,
    LeftWrist = 5,
    RightWrist = 6,
    LeftHip = 7,
    RightHip = 8,
    LeftKnee = 9,
    RightKnee = 10,
    LeftAnkle = 11,
    RightAnkle = 12,
}

impl KeypointIndex {
    pub const COUNT: usize = 13;

    pub const ALL: [KeypointIndex; Self::COUNT] = [
        Self::Head,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A single landmark
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Keypoint {
    /// Horizontal position in frame pixels
    pub x: f32,
    /// Vertical position in frame pixels, growing downwards
    pub y: f32,
    /// Confidence score (0.0..=1.0)
    pub confidence: f32,
}

impl Keypoint {
    pub fn new(x: f32, y: f32, confidence: f32) -> Self {
        Self { x, y, confidence }
    }

    /// Whether the confidence reaches the threshold
    pub fn is_valid(&self, threshold: f32) -> bool {
        self.confidence >= threshold
    }

    /// Non-finite components read as 0, like an absent landmark
    pub fn sanitized(&self) -> Self {
        let finite = |v: f32| if v.is_finite() { v } else { 0.0 };
        Self::new(finite(self.x), finite(self.y), finite(self.confidence))
    }
}

/// One frame's worth of landmarks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub keypoints: [Keypoint; KeypointIndex::COUNT],
    /// Overall detection score
    pub score: f32,
}

impl Pose {
    pub fn new(keypoints: [Keypoint; KeypointIndex::COUNT], score: f32) -> Self {
        Self { keypoints, score }
    }

    /// Builds a pose from a possibly incomplete landmark list.
    ///
    /// Landmarks past the end of `keypoints` are filled with the zero
    /// keypoint, so their coordinates read as 0 and their confidence as 0.
    /// Extra entries are ignored.
    pub fn from_slice(keypoints: &[Keypoint], score: f32) -> Self {
        let mut full = [Keypoint::default(); KeypointIndex::COUNT];
        for (slot, kp) in full.iter_mut().zip(keypoints) {
            *slot = *kp;
        }
        Self::new(full, score)
    }

    /// Landmark at `index` with non-finite values zeroed
    pub fn get(&self, index: KeypointIndex) -> Keypoint {
        self.keypoints[index as usize].sanitized()
    }

    /// Copy of the pose with every landmark sanitized
    pub fn sanitized(&self) -> Self {
        let mut pose = self.clone();
        for kp in pose.keypoints.iter_mut() {
            *kp = kp.sanitized();
        }
        pose
    }

    /// Mean confidence over all landmarks
    pub fn average_confidence(&self) -> f32 {
        let sum: f32 = self.keypoints.iter().map(|k| k.confidence).sum();
        sum / KeypointIndex::COUNT as f32
    }

    /// Landmarks from `required` whose confidence is below `threshold`
    pub fn missing(&self, required: &[KeypointIndex], threshold: f32) -> Vec<KeypointIndex> {
        required
            .iter()
            .copied()
            .filter(|&idx| !self.get(idx).is_valid(threshold))
            .collect()
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            keypoints: [Keypoint::default(); KeypointIndex::COUNT],
            score: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypoint_index_count() {
        assert_eq!(KeypointIndex::COUNT, 13);
        assert_eq!(KeypointIndex::ALL.len(), KeypointIndex::COUNT);
    }

    #[test]
    fn test_keypoint_index_from_index() {
        assert_eq!(KeypointIndex::from_index(0), Some(KeypointIndex::Head));
        assert_eq!(KeypointIndex::from_index(7), Some(KeypointIndex::LeftHip));
        assert_eq!(KeypointIndex::from_index(12), Some(KeypointIndex::RightAnkle));
        assert_eq!(KeypointIndex::from_index(13), None);
    }

    #[test]
    fn test_index_order_matches_discriminant() {
        for (i, idx) in KeypointIndex::ALL.iter().enumerate() {
            assert_eq!(*idx as usize, i);
        }
    }

    #[test]
    fn test_keypoint_is_valid() {
        let kp = Keypoint::new(10.0, 20.0, 0.7);
        assert!(kp.is_valid(0.5));
        assert!(kp.is_valid(0.7));
        assert!(!kp.is_valid(0.8));
    }

    #[test]
    fn test_pose_get() {
        let mut keypoints = [Keypoint::default(); KeypointIndex::COUNT];
        keypoints[KeypointIndex::LeftWrist as usize] = Keypoint::new(192.0, 264.0, 0.75);

        let pose = Pose::new(keypoints, 0.8);
        let wrist = pose.get(KeypointIndex::LeftWrist);
        assert_eq!(wrist.x, 192.0);
        assert_eq!(wrist.y, 264.0);
        assert_eq!(wrist.confidence, 0.75);
    }

    #[test]
    fn test_pose_from_short_slice_fills_zero() {
        let pose = Pose::from_slice(&[Keypoint::new(1.0, 2.0, 0.9); 3], 0.5);
        assert_eq!(pose.get(KeypointIndex::RightShoulder).y, 2.0);
        assert_eq!(pose.get(KeypointIndex::LeftElbow), Keypoint::default());
        assert_eq!(pose.get(KeypointIndex::RightAnkle), Keypoint::default());
    }

    #[test]
    fn test_non_finite_reads_as_zero() {
        let mut pose = Pose::from_slice(&[Keypoint::new(1.0, 2.0, 0.9); 13], 0.5);
        pose.keypoints[KeypointIndex::LeftWrist as usize] = Keypoint::new(f32::NAN, f32::INFINITY, f32::NAN);
        assert_eq!(pose.get(KeypointIndex::LeftWrist), Keypoint::default());
        assert_eq!(pose.missing(&[KeypointIndex::LeftWrist], 0.0), Vec::new());
        assert_eq!(pose.missing(&[KeypointIndex::LeftWrist], 0.3), vec![KeypointIndex::LeftWrist]);
        assert!(pose.sanitized().keypoints.iter().all(|k| k.y.is_finite()));
    }

    #[test]
    fn test_pose_from_long_slice_truncates() {
        let pose = Pose::from_slice(&[Keypoint::new(1.0, 1.0, 1.0); 20], 1.0);
        assert!(pose.keypoints.iter().all(|k| k.confidence == 1.0));
    }

    #[test]
    fn test_pose_average_confidence() {
        let pose = Pose::new([Keypoint::new(0.0, 0.0, 0.5); KeypointIndex::COUNT], 0.5);
        assert!((pose.average_confidence() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_pose_missing() {
        let mut pose = Pose::new([Keypoint::new(0.0, 0.0, 0.9); KeypointIndex::COUNT], 0.9);
        pose.keypoints[KeypointIndex::LeftKnee as usize].confidence = 0.1;
        let required = [KeypointIndex::LeftHip, KeypointIndex::LeftKnee];
        assert_eq!(pose.missing(&required, 0.3), vec![KeypointIndex::LeftKnee]);
        assert!(pose.missing(&required, 0.0).is_empty());
    }
}
