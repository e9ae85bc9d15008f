use super::keypoint::{Keypoint, Pose};

/// EMA filter over keypoint positions
///
/// Position: per-component EMA weighted by `alpha`
/// Confidence: passed through from the newest frame
pub struct KeypointSmoother {
    alpha: f32,
    prev: Option<Pose>,
}

impl KeypointSmoother {
    /// `alpha` is clamped to (0, 1]; 1.0 disables smoothing
    pub fn new(alpha: f32) -> Self {
        let alpha = if alpha.is_finite() { alpha.clamp(f32::EPSILON, 1.0) } else { 1.0 };
        Self { alpha, prev: None }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn apply(&mut self, pose: &Pose) -> Pose {
        let pose = &pose.sanitized();
        if self.alpha >= 1.0 || self.prev.is_none() {
            self.prev = Some(pose.clone());
            return pose.clone();
        }

        let a = self.alpha;
        let mut result = pose.clone();
        if let Some(prev) = &self.prev {
            for (out, old) in result.keypoints.iter_mut().zip(prev.keypoints.iter()) {
                *out = Keypoint::new(
                    a * out.x + (1.0 - a) * old.x,
                    a * out.y + (1.0 - a) * old.y,
                    out.confidence,
                );
            }
        }

        self.prev = Some(result.clone());
        result
    }

    pub fn reset(&mut self) {
        self.prev = None;
    }
}
