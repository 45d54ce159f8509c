//! Definitions for the ROS 2 `std_msgs` package.

use serde::{Deserialize, Serialize};

use super::builtin_interfaces::Time;

/// Standard metadata for higher-level stamped data types.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Acquisition time of the data.
    pub stamp: Time,

    /// The coordinate frame this data is associated with.
    pub frame_id: String,
}
