//! Function to set up logging in binaries.

/// Crates that are too loud on `info` and `debug` for a live monitor.
///
/// Filter directives match by prefix, so `zenoh` also covers `zenoh_transport` etc.
const LOUD_CRATES: [&str; 6] = [
    // zenoh reports every scouting round and transport event:
    "zenoh",
    // The graphics and windowing stack:
    "naga",
    "wgpu",
    "winit",
    "sctk",
    "calloop",
];

/// The filter used by [`setup_logging`].
///
/// Starts from `RUST_LOG` (or `info` if unset) and clamps [`LOUD_CRATES`] to `warn`,
/// unless `RUST_LOG` already mentions them.
pub fn log_filter() -> String {
    filter_from(std::env::var("RUST_LOG").ok())
}

fn filter_from(rust_log: Option<String>) -> String {
    let rust_log = rust_log
        .filter(|rust_log| !rust_log.trim().is_empty())
        .unwrap_or_else(|| "info".to_owned());

    // Anything after `/` is a message regex, not part of the directives.
    let (directives, regex) = match rust_log.split_once('/') {
        Some((directives, regex)) => (directives, Some(regex)),
        None => (rust_log.as_str(), None),
    };

    let mut filter = directives.to_owned();
    for loud_crate in LOUD_CRATES {
        if !names_target(directives, loud_crate) {
            filter.push_str(&format!(",{loud_crate}=warn"));
        }
    }

    if let Some(regex) = regex {
        filter.push('/');
        filter.push_str(regex);
    }

    filter
}

/// Does `directives` have one for exactly `target`, with or without a level?
fn names_target(directives: &str, target: &str) -> bool {
    directives.split(',').any(|directive| {
        let name = directive.split('=').next().unwrap_or_default();
        name.trim() == target
    })
}

/// Direct calls using the `log` crate to stderr. Control with `RUST_LOG=debug` etc.
///
/// Calling this more than once is harmless; only the first call installs a logger.
pub fn setup_logging() {
    let filter = log_filter();

    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&filter);

    if let Err(err) = builder.try_init() {
        log::debug!("Logging was already set up: {err}");
    }
}
