//! Mapping a ROS 2 topic onto a zenoh key expression.
//!
//! How topics show up in zenoh depends on what puts them there.

/// Which ROS 2 to zenoh bridge the odometry arrives through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyExprStyle {
    /// Native `rmw_zenoh`: `<domain>/<topic>/<dds type>/<type hash>`.
    RmwZenoh { domain_id: u32 },

    /// `zenoh-bridge-ros2dds`: the topic name without its leading slash.
    Ros2DdsBridge,

    /// `zenoh-bridge-dds`: the DDS topic name, `rt/<topic>`.
    DdsBridge,
}

impl Default for KeyExprStyle {
    fn default() -> Self {
        Self::RmwZenoh { domain_id: 0 }
    }
}

impl KeyExprStyle {
    /// The key expression that `topic` of type `ros_type` is published on.
    pub fn key_expr(&self, topic: &str, ros_type: &str) -> String {
        let topic = topic.trim_start_matches('/');
        match self {
            Self::RmwZenoh { domain_id } => {
                // The trailing wildcard matches any type hash, so we do not have to compute it.
                format!("{domain_id}/{topic}/{}/**", dds_type_name(ros_type))
            }
            Self::Ros2DdsBridge => topic.to_owned(),
            Self::DdsBridge => format!("rt/{topic}"),
        }
    }
}

/// `nav_msgs/msg/Odometry` -> `nav_msgs::msg::dds_::Odometry_`
pub fn dds_type_name(ros_type: &str) -> String {
    match ros_type.rsplit_once('/') {
        Some((namespace, name)) => format!("{}::dds_::{name}_", namespace.replace('/', "::")),
        None => format!("{ros_type}_"),
    }
}
