mod app_state;
mod cli;

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use dotfield_common::Theme;
use dotfield_config::{toml_loader, DotfieldConfig, ReloadManager};

const DEFAULT_LOG_DIRECTIVE: &str = "dotfield=info";

/// The config file to load and watch: the CLI override, or the platform
/// default (created from the template when missing).
fn resolve_config_path(args: &cli::Args) -> Option<PathBuf> {
    if let Some(ref path) = args.config {
        return Some(PathBuf::from(path));
    }
    let path = toml_loader::default_config_path().ok()?;
    if !path.exists() {
        if let Err(e) = toml_loader::create_default_config(&path) {
            eprintln!("dotfield: could not create default config: {e}");
            return None;
        }
    }
    Some(path)
}

/// `--log-level` wins, then `[logging] level` from the config file.
fn log_directive(args: &cli::Args, config_path: Option<&PathBuf>) -> String {
    if let Some(ref level) = args.log_level {
        return level.clone();
    }
    config_path
        .and_then(|p| toml_loader::load_from_path(p).ok())
        .map(|c| c.logging.level.directive().to_string())
        .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string())
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse() {
        Ok(d) => filter.add_directive(d),
        Err(_) => match DEFAULT_LOG_DIRECTIVE.parse() {
            Ok(d) => filter.add_directive(d),
            Err(_) => filter,
        },
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let args = cli::parse();
    let config_path = resolve_config_path(&args);

    init_logging(&log_directive(&args, config_path.as_ref()));
    tracing::info!("Dotfield v{} starting...", env!("CARGO_PKG_VERSION"));

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("dotfield-worker")
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {e}");
            return;
        }
    };

    let (config, config_rx) = match config_path {
        Some(path) => {
            tracing::info!("Using config: {}", path.display());
            let _guard = runtime.enter();
            let (config, rx) = ReloadManager::start(path);
            (config, Some(rx))
        }
        None => {
            tracing::warn!("No config path available, using defaults without live reload");
            (DotfieldConfig::default(), None)
        }
    };

    let theme = args
        .theme
        .as_deref()
        .map(Theme::from_signal)
        .unwrap_or_else(|| config.theme.theme());
    tracing::info!("Config loaded (theme: {theme})");

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return;
        }
    };
    let mut app =
        app_state::DotfieldApp::new(config, config_rx, runtime, theme, args.simulate_hand);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
