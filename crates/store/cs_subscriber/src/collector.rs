use cs_ros_msg::{CdrError, Odometry, cdr};

use crate::snapshot::{ScalarSnapshot, SnapshotSlot};

/// Index into `pose.covariance` that feeds [`ScalarSnapshot::value_a`].
pub const VALUE_A_INDEX: usize = 0;

/// Index into `pose.covariance` that feeds [`ScalarSnapshot::value_b`].
pub const VALUE_B_INDEX: usize = 7;

/// Shortest covariance we can read both values from.
pub const MIN_COVARIANCE_LEN: usize = VALUE_B_INDEX + 1;

#[derive(thiserror::Error, Debug)]
pub enum CollectorError {
    #[error("covariance has {len} entries, need at least {MIN_COVARIANCE_LEN}")]
    MalformedMessage { len: usize },

    #[error("failed to decode odometry: {0}")]
    Decode(#[from] CdrError),
}

impl ScalarSnapshot {
    /// Read the two tracked entries out of a flattened covariance matrix.
    pub fn from_covariance(covariance: &[f64]) -> Result<Self, CollectorError> {
        match (covariance.get(VALUE_A_INDEX), covariance.get(VALUE_B_INDEX)) {
            (Some(&value_a), Some(&value_b)) => Ok(Self { value_a, value_b }),
            _ => Err(CollectorError::MalformedMessage {
                len: covariance.len(),
            }),
        }
    }
}

/// Writes every accepted message into a [`SnapshotSlot`].
///
/// A failed delivery leaves the slot as it was and only bumps the rejected count.
#[derive(Clone, Debug)]
pub struct Collector {
    slot: SnapshotSlot,
}

impl Collector {
    pub fn new(slot: SnapshotSlot) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> &SnapshotSlot {
        &self.slot
    }

    /// Replace the current snapshot with the values from `msg`.
    pub fn on_message(&self, msg: &Odometry) -> Result<ScalarSnapshot, CollectorError> {
        match ScalarSnapshot::from_covariance(&msg.pose.covariance) {
            Ok(snapshot) => {
                self.slot.store(snapshot);
                Ok(snapshot)
            }
            Err(err) => {
                self.slot.record_rejected();
                Err(err)
            }
        }
    }

    /// Decode an encapsulated CDR `Odometry` and hand it to [`Self::on_message`].
    pub fn on_payload(&self, payload: &[u8]) -> Result<ScalarSnapshot, CollectorError> {
        let msg = match cdr::try_decode_message::<Odometry>(payload) {
            Ok(msg) => msg,
            Err(err) => {
                self.slot.record_rejected();
                return Err(err.into());
            }
        };

        cs_log::trace!(
            "Odometry in {:?} at {:.3}s",
            msg.header.frame_id,
            msg.header.stamp.as_secs_f64()
        );

        self.on_message(&msg)
    }
}
