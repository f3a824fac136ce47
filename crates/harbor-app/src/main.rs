mod app_state;
mod cli;

use std::path::Path;
use std::sync::Arc;

use harbor_config::HarborConfig;
use harbor_webview::SystemHost;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};
use winit::event_loop::EventLoop;

type FilterHandle = reload::Handle<EnvFilter, Registry>;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("Harbor crashed: {info}");
        default_hook(info);
    }));
}

fn env_filter(directive: &str) -> EnvFilter {
    let directive = directive
        .parse::<Directive>()
        .unwrap_or_else(|_| Directive::from(LevelFilter::INFO));
    EnvFilter::from_default_env().add_directive(directive)
}

/// Start logging with `directive`. The filter can be swapped later through
/// the returned handle, once the config's level is known.
fn init_logging(directive: &str) -> FilterHandle {
    let (filter, handle) = reload::Layer::new(env_filter(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
    handle
}

fn main() {
    let args = cli::parse();

    // Log with the default level until the config is read.
    let filter = init_logging(&args.log_directive(&HarborConfig::default()));
    install_panic_hook();

    tracing::info!("Harbor v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }

    let mut config = match harbor_config::load_config(args.config.as_deref().map(Path::new)) {
        Ok((config, None)) => config,
        Ok((config, Some(e))) => {
            tracing::warn!("Invalid config sections reset to defaults: {e}");
            config
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            HarborConfig::default()
        }
    };

    if let Err(e) = filter.reload(env_filter(&args.log_directive(&config))) {
        tracing::warn!("Failed to apply configured log level: {e}");
    }

    args.apply(&mut config);
    tracing::info!(
        assets_dir = %config.webview.assets_dir,
        entry = %config.webview.entry,
        policy = ?config.navigation.policy,
        "Config loaded"
    );

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::HarborApp::new(config, Arc::new(SystemHost));

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }

    if let Some(e) = app.startup_error() {
        tracing::error!("Startup failed: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
