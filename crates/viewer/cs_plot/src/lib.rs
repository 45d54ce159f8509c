//! Two live line plots of the collected covariance values.
//!
//! The [`Renderer`] samples a [`cs_subscriber::SnapshotSlot`] whenever the
//! [`TickTimer`] says so and appends the values to two [`PlotSeries`];
//! [`CovarianceApp`] draws them side by side.

mod app;
mod renderer;
mod series;
mod tick_timer;

pub use app::CovarianceApp;
pub use renderer::{Renderer, SampleIndex};
pub use series::{HistoryLimit, PlotSeries};
pub use tick_timer::TickTimer;

/// How often a sample is taken unless configured otherwise.
pub const DEFAULT_TICK_INTERVAL: std::time::Duration = std::time::Duration::from_millis(500);
