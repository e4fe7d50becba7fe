//! BTerm - a small terminal configured from a key file.
//!
//! Main entry point: loads `btermrc`, applies it to the terminal model and
//! keeps the two in sync while the file is edited.

use anyhow::Context;
use once_cell::sync::Lazy;
use settings::ConfigWatcher;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Instant;
use terminal::{apply_config, Terminal};
use tracing::{debug, info, warn};

/// Application startup time for performance monitoring
static STARTUP_TIME: Lazy<Instant> = Lazy::new(Instant::now);

/// Check if debug mode is enabled via environment variable.
fn is_debug_mode() -> bool {
    std::env::var("BTERM_DEBUG").is_ok()
}

/// Log filter used when `RUST_LOG` is not set.
fn default_filter(debug: bool) -> &'static str {
    // In debug mode, enable trace logging for our crates
    if debug {
        "bterm=trace,settings=trace,terminal=trace,theme=trace,info"
    } else {
        "bterm=info,settings=info,terminal=info,theme=info,warn"
    }
}

/// Initialize the logging system.
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_filter = default_filter(is_debug_mode());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_line_number(true))
        .with(filter)
        .init();

    if is_debug_mode() {
        info!(
            "BTerm v{} starting up (DEBUG MODE ENABLED)",
            env!("CARGO_PKG_VERSION")
        );
        info!("Set RUST_LOG for custom log levels, e.g. RUST_LOG=settings=trace");
    } else {
        info!("BTerm v{} starting up", env!("CARGO_PKG_VERSION"));
    }
}

/// Resolve the key file, honouring a config dir override (`BTERM_CONFIG_DIR`),
/// and create a commented default on first launch.
fn init_paths(config_dir: Option<OsString>) -> PathBuf {
    if let Some(dir) = config_dir {
        bterm_paths::set_config_dir(PathBuf::from(dir));
    }
    let path = settings::config_path();

    // A read-only config dir is not fatal; defaults still apply.
    if let Err(e) = settings::ensure_config_file(&path)
        .with_context(|| format!("Could not create default config at {:?}", path))
    {
        warn!("{:#}", e);
    }

    debug!("Config file: {:?}", path);
    path
}

/// Configure the terminal, then follow the key file until watching stops.
/// Nothing here ends the process early: every failure falls back to defaults.
fn run() {
    let path = init_paths(std::env::var_os("BTERM_CONFIG_DIR"));

    let mut watcher = ConfigWatcher::spawn_or_static(&path);

    let mut term = Terminal::new();
    apply_config(&mut term, &watcher.load_initial());
    info!(
        "Terminal configured in {:?}: font '{}', scale {}, {} scrollback lines",
        STARTUP_TIME.elapsed(),
        term.font(),
        term.font_scale(),
        term.scrollback_lines()
    );

    if !watcher.is_live() {
        return;
    }

    let reloads = watcher.run(|document| {
        apply_config(&mut term, document);
    });

    info!("Config watch ended after {} reloads", reloads);
}

fn main() {
    let _ = *STARTUP_TIME;

    init_logging();
    run();
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    use tracing_subscriber::EnvFilter;

    #[test_case(false ; "normal")]
    #[test_case(true ; "debug")]
    fn default_filter_covers_every_crate(debug: bool) {
        let filter = default_filter(debug);
        for target in ["bterm", "settings", "terminal", "theme"] {
            assert!(
                filter.contains(&format!("{}=", target)),
                "filter '{}' is missing {}",
                filter,
                target
            );
        }
        assert!(EnvFilter::try_new(filter).is_ok());
    }

    // The only test in this binary that resolves the config dir.
    #[test]
    fn config_dir_override_is_used_and_seeded() {
        let dir = tempfile::tempdir().unwrap();
        let path = init_paths(Some(dir.path().as_os_str().to_owned()));

        assert_eq!(path, dir.path().join("btermrc"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            settings::DEFAULT_CONFIG
        );
    }
}
