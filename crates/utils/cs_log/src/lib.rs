//! Text logging for covscope.
//!
//! * `trace`: per-message chatter from the subscription callback
//! * `debug`: things that might be useful when debugging
//! * `info`: things that we want to show to users
//! * `warn`: problems that we can recover from, like a malformed message
//! * `error`: problems that lead to loss of functionality
//!
//! Use the `*_once` macros for anything that can fire on every delivery,
//! so a misbehaving publisher does not flood the terminal.

mod result_extensions;
mod setup;

pub use log::{Level, LevelFilter, debug, error, info, log_enabled, trace, warn};

// The `log_once` macros expand to `log::` paths, so users of these need `log` in scope.
pub use log_once::{debug_once, error_once, info_once, log_once, trace_once, warn_once};

pub use result_extensions::ResultExt;
pub use setup::{log_filter, setup_logging};
