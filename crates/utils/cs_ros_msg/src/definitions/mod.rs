//! ROS 2 message definitions, in `.msg` field order.
//!
//! Based on <https://github.com/ros2/common_interfaces> and
//! <https://github.com/ros2/rcl_interfaces>.

pub mod builtin_interfaces;
pub mod covariance;
pub mod geometry_msgs;
pub mod nav_msgs;
pub mod std_msgs;
