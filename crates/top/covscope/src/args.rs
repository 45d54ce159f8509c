use std::num::{NonZeroU64, NonZeroUsize};
use std::time::Duration;

use cs_plot::HistoryLimit;
use cs_subscriber::{KeyExprStyle, SessionMode, SubscriberConfig};

/// Plot `pose.covariance[0]` and `pose.covariance[7]` of `/Odometry` as they arrive.
#[derive(Debug, Clone, clap::Parser)]
#[clap(author, version, about)]
pub struct Args {
    /// How often to take a sample, in milliseconds.
    #[clap(long, default_value = "500")]
    pub interval_ms: NonZeroU64,

    /// Keep only the newest N samples per plot.
    ///
    /// Without this, history grows for as long as the window is open.
    #[clap(long)]
    pub max_samples: Option<NonZeroUsize>,

    /// Which ROS 2 to zenoh bridge publishes the topic.
    #[clap(long, value_enum, default_value_t = KeyStyle::RmwZenoh)]
    pub key_style: KeyStyle,

    /// ROS domain, used with `--key-style rmw-zenoh`.
    #[clap(long, default_value_t = 0)]
    pub domain_id: u32,

    /// Zenoh session mode.
    #[clap(long, value_enum, default_value_t = Mode::Peer)]
    pub mode: Mode,

    /// Zenoh endpoint to connect to, e.g. `tcp/192.168.1.10:7447`. May be repeated.
    #[clap(long, value_name = "ENDPOINT")]
    pub connect: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KeyStyle {
    /// Native `rmw_zenoh`.
    RmwZenoh,

    /// `zenoh-bridge-ros2dds`.
    #[value(name = "ros2dds")]
    Ros2Dds,

    /// `zenoh-bridge-dds`.
    Dds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    Peer,
    Client,
}

impl Args {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.get())
    }

    pub fn history_limit(&self) -> HistoryLimit {
        HistoryLimit::from(self.max_samples)
    }

    pub fn subscriber_config(&self) -> SubscriberConfig {
        let key_style = match self.key_style {
            KeyStyle::RmwZenoh => KeyExprStyle::RmwZenoh {
                domain_id: self.domain_id,
            },
            KeyStyle::Ros2Dds => KeyExprStyle::Ros2DdsBridge,
            KeyStyle::Dds => KeyExprStyle::DdsBridge,
        };
        let mode = match self.mode {
            Mode::Peer => SessionMode::Peer,
            Mode::Client => SessionMode::Client,
        };

        SubscriberConfig {
            key_style,
            mode,
            connect: self.connect.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory as _, Parser as _};

    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("covscope").chain(args.iter().copied()))
    }

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = parse(&[]).unwrap();

        assert_eq!(args.interval(), Duration::from_millis(500));
        assert_eq!(args.history_limit(), HistoryLimit::Unbounded);
        similar_asserts::assert_eq!(args.subscriber_config(), SubscriberConfig::default());
    }

    #[test]
    fn all_flags() {
        let args = parse(&[
            "--interval-ms",
            "100",
            "--max-samples",
            "600",
            "--key-style",
            "rmw-zenoh",
            "--domain-id",
            "7",
            "--mode",
            "client",
            "--connect",
            "tcp/10.0.0.1:7447",
            "--connect",
            "tcp/10.0.0.2:7447",
        ])
        .unwrap();

        assert_eq!(args.interval(), Duration::from_millis(100));
        assert_eq!(
            args.history_limit(),
            HistoryLimit::from(NonZeroUsize::new(600))
        );
        similar_asserts::assert_eq!(
            args.subscriber_config(),
            SubscriberConfig {
                key_style: KeyExprStyle::RmwZenoh { domain_id: 7 },
                mode: SessionMode::Client,
                connect: vec!["tcp/10.0.0.1:7447".to_owned(), "tcp/10.0.0.2:7447".to_owned()],
            }
        );
    }

    #[test]
    fn bridge_key_styles() {
        let ros2dds = parse(&["--key-style", "ros2dds"]).unwrap();
        assert_eq!(
            ros2dds.subscriber_config().key_style,
            KeyExprStyle::Ros2DdsBridge
        );

        let dds = parse(&["--key-style", "dds"]).unwrap();
        assert_eq!(dds.subscriber_config().key_style, KeyExprStyle::DdsBridge);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse(&["--interval-ms", "0"]).is_err());
        assert!(parse(&["--max-samples", "0"]).is_err());
        assert!(parse(&["--key-style", "fastdds"]).is_err());
        assert!(parse(&["--mode", "router"]).is_err());
    }
}
