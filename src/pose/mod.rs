pub mod keypoint;
pub mod skeleton;
pub mod smooth;
pub mod source;

pub use keypoint::{Keypoint, KeypointIndex, Pose};
pub use skeleton::{visible_bones, SKELETON_CONNECTIONS};
pub use smooth::KeypointSmoother;
pub use source::{PoseSource, ScriptedPoseSource, SyntheticPoseSource};
