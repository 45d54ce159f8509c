//! The receiving side of covscope.
//!
//! A [`Collector`] turns each delivered odometry message into a [`ScalarSnapshot`]
//! and stores it in a [`SnapshotSlot`], overwriting whatever was there.
//! The slot is the only thing shared with the plotting side.
//!
//! [`OdometrySubscription`] wires a [`Collector`] to a zenoh subscriber.

mod collector;
mod key_expr;
mod snapshot;
mod subscription;

pub use collector::{Collector, CollectorError, MIN_COVARIANCE_LEN, VALUE_A_INDEX, VALUE_B_INDEX};
pub use key_expr::{KeyExprStyle, dds_type_name};
pub use snapshot::{CollectorStats, ScalarSnapshot, SnapshotSlot};
pub use subscription::{OdometrySubscription, SessionMode, SubscribeError, SubscriberConfig};

/// The topic we listen on. Not configurable.
pub const ODOMETRY_TOPIC: &str = "/Odometry";

/// Identity this process presents itself under.
pub const NODE_NAME: &str = "covariance_plotter";
