//! Definitions for the ROS 2 `geometry_msgs` package, as far as odometry needs them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Point,
    pub orientation: Quaternion,
}

/// Velocity in free space broken into its linear and angular parts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Twist {
    pub linear: Vector3,
    pub angular: Vector3,
}

/// A pose with its uncertainty.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseWithCovariance {
    pub pose: Pose,

    /// Row-major 6x6 covariance of `(x, y, z, rot_x, rot_y, rot_z)`.
    ///
    /// Always 36 entries on the wire. Kept as a `Vec` so that messages built in
    /// process can be checked for length instead of trusted.
    #[serde(with = "crate::definitions::covariance")]
    pub covariance: Vec<f64>,
}

/// A twist with its uncertainty.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwistWithCovariance {
    pub twist: Twist,

    /// Row-major 6x6 covariance, see [`PoseWithCovariance::covariance`].
    #[serde(with = "crate::definitions::covariance")]
    pub covariance: Vec<f64>,
}
