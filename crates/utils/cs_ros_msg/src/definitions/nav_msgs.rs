//! Definitions for the ROS 2 `nav_msgs` package.

use serde::{Deserialize, Serialize};

use super::geometry_msgs::{PoseWithCovariance, TwistWithCovariance};
use super::std_msgs::Header;

/// An estimate of a position and velocity in free space.
///
/// The pose is in the frame given by `header.frame_id`,
/// the twist in the frame given by `child_frame_id`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Odometry {
    pub header: Header,
    pub child_frame_id: String,
    pub pose: PoseWithCovariance,
    pub twist: TwistWithCovariance,
}

impl Odometry {
    /// The fully qualified ROS 2 type name.
    pub const TYPE_NAME: &'static str = "nav_msgs/msg/Odometry";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdr::{RepresentationIdentifier, encode_message, try_decode_message};
    use crate::definitions::builtin_interfaces::Time;

    fn odometry() -> Odometry {
        let mut msg = Odometry {
            header: Header {
                stamp: Time {
                    sec: 1_700_000_000,
                    nanosec: 250,
                },
                frame_id: "odom".to_owned(),
            },
            child_frame_id: "base_link".to_owned(),
            ..Default::default()
        };
        msg.pose.pose.position.x = 1.5;
        msg.pose.pose.orientation.w = 1.0;
        msg.pose.covariance = (0..36_i32).map(f64::from).collect();
        msg.twist.twist.linear.x = 0.25;
        msg.twist.covariance = vec![0.01; 36];
        msg
    }

    #[test]
    fn survives_both_byte_orders() {
        let msg = odometry();
        for representation in [
            RepresentationIdentifier::CdrLittleEndian,
            RepresentationIdentifier::CdrBigEndian,
        ] {
            let payload = encode_message(&msg, representation).unwrap();
            let decoded: Odometry = try_decode_message(&payload).unwrap();
            similar_asserts::assert_eq!(decoded, msg);
        }
    }

    #[test]
    fn covariance_sits_at_a_fixed_offset() {
        // header: 8 (stamp) + 4 (len) + 5 ("odom\0") -> 17, pad to 20,
        // child_frame_id: 4 (len) + 10 ("base_link\0") -> 34, pad to 40,
        // pose: 7 * 8 -> 96, then the covariance.
        let payload = encode_message(&odometry(), RepresentationIdentifier::CdrLittleEndian)
            .unwrap();
        let body = &payload[4..];
        let entry_7 = f64::from_le_bytes(body[96 + 7 * 8..96 + 8 * 8].try_into().unwrap());
        assert_eq!(entry_7, 7.0);
    }

    #[test]
    fn truncated_covariance_does_not_decode() {
        let payload =
            encode_message(&odometry(), RepresentationIdentifier::CdrLittleEndian).unwrap();
        let truncated = &payload[..4 + 96 + 5 * 8];
        assert!(try_decode_message::<Odometry>(truncated).is_err());
    }

    #[test]
    fn covariance_of_the_wrong_length_does_not_encode() {
        for len in [7, 40] {
            let mut msg = odometry();
            msg.pose.covariance = vec![1.0; len];
            assert!(
                encode_message(&msg, RepresentationIdentifier::CdrLittleEndian).is_err(),
                "pose covariance of {len} entries"
            );

            let mut msg = odometry();
            msg.twist.covariance = vec![1.0; len];
            assert!(
                encode_message(&msg, RepresentationIdentifier::CdrBigEndian).is_err(),
                "twist covariance of {len} entries"
            );
        }
    }
}
