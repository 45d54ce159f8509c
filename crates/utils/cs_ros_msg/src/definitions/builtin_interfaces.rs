//! Definitions for the ROS 2 `builtin_interfaces` package.

use serde::{Deserialize, Serialize};

/// A point in ROS time.
///
/// `nanosec` is always added to `sec`, so `-1.7 s` is `{ sec: -2, nanosec: 300_000_000 }`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Time {
    pub sec: i32,
    pub nanosec: u32,
}

impl Time {
    pub fn as_secs_f64(&self) -> f64 {
        f64::from(self.sec) + f64::from(self.nanosec) * 1e-9
    }
}
