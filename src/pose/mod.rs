pub mod angles;
pub mod landmark;

pub use angles::{joint_angle, HeadOrientation, JointAngles};
pub use landmark::{Landmark, LandmarkIndex, PersonLandmarks, PoseResult};
