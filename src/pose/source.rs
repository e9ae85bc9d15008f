use super::keypoint::{Keypoint, KeypointIndex, Pose};

/// Supplies one pose per frame
pub trait PoseSource {
    fn produce_frame(&mut self) -> Pose;
}

/// Relative (x, y, confidence) of each landmark in the synthetic skeleton,
/// indexed by `KeypointIndex`
const SYNTHETIC_LAYOUT: [(f32, f32, f32); KeypointIndex::COUNT] = [
    (0.50, 0.15, 0.90),
    (0.40, 0.25, 0.85),
    (0.60, 0.25, 0.85),
    (0.35, 0.40, 0.80),
    (0.65, 0.40, 0.80),
    (0.30, 0.55, 0.75),
    (0.70, 0.55, 0.75),
    (0.45, 0.60, 0.90),
    (0.55, 0.60, 0.90),
    (0.43, 0.80, 0.85),
    (0.57, 0.80, 0.85),
    (0.41, 0.95, 0.80),
    (0.59, 0.95, 0.80),
];

const SYNTHETIC_SCORE: f32 = 0.85;

/// Stand-in for a pose estimation model.
///
/// Emits the same upright skeleton scaled to the frame size on every call.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticPoseSource {
    width: u32,
    height: u32,
}

impl SyntheticPoseSource {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl PoseSource for SyntheticPoseSource {
    fn produce_frame(&mut self) -> Pose {
        let w = self.width as f32;
        let h = self.height as f32;
        let keypoints = SYNTHETIC_LAYOUT.map(|(rx, ry, c)| Keypoint::new(rx * w, ry * h, c));
        Pose::new(keypoints, SYNTHETIC_SCORE)
    }
}

/// Replays a fixed list of poses, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedPoseSource {
    frames: Vec<Pose>,
    cursor: usize,
}

impl ScriptedPoseSource {
    pub fn new(frames: Vec<Pose>) -> Self {
        Self { frames, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl PoseSource for ScriptedPoseSource {
    /// An empty script yields the zero pose
    fn produce_frame(&mut self) -> Pose {
        if self.frames.is_empty() {
            return Pose::default();
        }
        let pose = self.frames[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.frames.len();
        pose
    }
}
