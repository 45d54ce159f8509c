//! Typed ROS 2 messages for the odometry stream, and the CDR framing they travel in.
//!
//! Only the message types reachable from `nav_msgs/msg/Odometry` are defined.
//! Field order follows the `.msg` definitions exactly, since CDR has no field names
//! on the wire.

pub mod cdr;
pub mod definitions;

pub use cdr::{CdrError, RepresentationIdentifier};
pub use definitions::nav_msgs::Odometry;
