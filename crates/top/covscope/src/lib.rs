//! `covscope`: a live plot of two odometry pose covariance entries.
//!
//! Subscribes to `/Odometry` over zenoh and shows `pose.covariance[0]` and
//! `pose.covariance[7]` as two line plots that grow by one point per tick.

pub mod args;

use anyhow::Context as _;
use cs_log::ResultExt as _;
use cs_plot::{CovarianceApp, Renderer, TickTimer};
use cs_subscriber::{Collector, NODE_NAME, OdometrySubscription, SnapshotSlot};

pub use args::Args;

/// Subscribe, open the window, and block until it is closed.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let slot = SnapshotSlot::new();
    let subscription =
        OdometrySubscription::declare(&args.subscriber_config(), Collector::new(slot.clone()))
            .context("Failed to subscribe to odometry")?;

    cs_log::info!(
        "Sampling every {:?}, history {:?}",
        args.interval(),
        args.history_limit()
    );

    let app = CovarianceApp::new(
        slot,
        Renderer::new(args.history_limit()),
        TickTimer::new(args.interval()),
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_app_id(NODE_NAME)
            .with_inner_size([1200.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        NODE_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
    .context("Window failed");

    subscription.close().ok_or_log_error();

    result
}
