use cs_log::ResultExt as _;
use cs_ros_msg::Odometry;
use zenoh::Wait as _;
use zenoh::sample::Sample;

use crate::key_expr::KeyExprStyle;
use crate::{Collector, NODE_NAME, ODOMETRY_TOPIC};

type ZenohError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(thiserror::Error, Debug)]
pub enum SubscribeError {
    #[error("invalid zenoh configuration for {key:?}: {reason}")]
    Config { key: &'static str, reason: String },

    #[error("failed to open a zenoh session")]
    Open(#[source] ZenohError),

    #[error("failed to subscribe to {key_expr:?}")]
    Declare {
        key_expr: String,

        #[source]
        source: ZenohError,
    },

    #[error("failed to unsubscribe from {key_expr:?}")]
    Undeclare {
        key_expr: String,

        #[source]
        source: ZenohError,
    },

    #[error("failed to shut down the zenoh session")]
    Close(#[source] ZenohError),
}

/// Whether the zenoh session joins the network as a peer or goes through a router.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    #[default]
    Peer,
    Client,
}

impl SessionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Peer => "peer",
            Self::Client => "client",
        }
    }
}

/// How to reach the odometry topic. The topic itself is fixed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubscriberConfig {
    pub key_style: KeyExprStyle,
    pub mode: SessionMode,

    /// Zenoh endpoints to connect to, e.g. `tcp/192.168.1.10:7447`.
    ///
    /// Empty means rely on scouting.
    pub connect: Vec<String>,
}

impl SubscriberConfig {
    pub fn key_expr(&self) -> String {
        self.key_style.key_expr(ODOMETRY_TOPIC, Odometry::TYPE_NAME)
    }

    /// The zenoh configuration entries we override, as `(key, json5 value)`.
    fn config_entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![(
            "mode",
            serde_json::Value::from(self.mode.as_str()).to_string(),
        )];
        if !self.connect.is_empty() {
            entries.push((
                "connect/endpoints",
                serde_json::Value::from(self.connect.clone()).to_string(),
            ));
        }
        entries
    }

    fn zenoh_config(&self) -> Result<zenoh::Config, SubscribeError> {
        let mut config = zenoh::Config::default();
        for (key, value) in self.config_entries() {
            config
                .insert_json5(key, &value)
                .map_err(|err| SubscribeError::Config {
                    key,
                    reason: err.to_string(),
                })?;
        }
        Ok(config)
    }
}

/// A live subscription feeding a [`Collector`].
///
/// Messages are delivered on zenoh's own threads. Dropping this stops delivery.
pub struct OdometrySubscription {
    // Declared before the session so it is dropped first.
    subscriber: zenoh::pubsub::Subscriber<()>,
    session: zenoh::Session,
    key_expr: String,
}

impl OdometrySubscription {
    pub fn declare(config: &SubscriberConfig, collector: Collector) -> Result<Self, SubscribeError> {
        Self::declare_with(config.zenoh_config()?, config.key_expr(), collector)
    }

    fn declare_with(
        zenoh_config: zenoh::Config,
        key_expr: String,
        collector: Collector,
    ) -> Result<Self, SubscribeError> {
        let session = zenoh::open(zenoh_config)
            .wait()
            .map_err(|err| SubscribeError::Open(err.into()))?;

        cs_log::info!(
            "{NODE_NAME} subscribing to {ODOMETRY_TOPIC} ({}) on {key_expr:?}",
            Odometry::TYPE_NAME
        );

        let subscriber = session
            .declare_subscriber(key_expr.clone())
            .callback(move |sample: Sample| {
                // A bad message costs one point of history, nothing more.
                collector
                    .on_payload(&sample.payload().to_bytes())
                    .warn_on_err_once(format_args!("Dropped message on {}", sample.key_expr()));
            })
            .wait()
            .map_err(|err| SubscribeError::Declare {
                key_expr: key_expr.clone(),
                source: err.into(),
            })?;

        Ok(Self {
            subscriber,
            session,
            key_expr,
        })
    }

    pub fn key_expr(&self) -> &str {
        &self.key_expr
    }

    /// Undeclare the subscriber and close the session, reporting any failure.
    pub fn close(self) -> Result<(), SubscribeError> {
        let Self {
            subscriber,
            session,
            key_expr,
        } = self;

        subscriber
            .undeclare()
            .wait()
            .map_err(|err| SubscribeError::Undeclare {
                key_expr,
                source: err.into(),
            })?;
        session
            .close()
            .wait()
            .map_err(|err| SubscribeError::Close(err.into()))
    }
}

impl std::fmt::Debug for OdometrySubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OdometrySubscription")
            .field("key_expr", &self.key_expr)
            .finish_non_exhaustive()
    }
}
