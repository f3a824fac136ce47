use clap::Parser;
use harbor_common::MatchPolicy;
use harbor_config::HarborConfig;

/// Harbor: a native window hosting a bundled web app.
#[derive(Parser, Debug)]
#[command(name = "harbor", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error) or a full filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory holding the bundled assets.
    #[arg(long)]
    pub assets_dir: Option<String>,

    /// Entry document, relative to the assets directory.
    #[arg(long)]
    pub entry: Option<String>,

    /// Treat only real `file:` URLs as local instead of any URL containing `file://`.
    #[arg(long)]
    pub strict_scheme: bool,
}

impl Args {
    /// Overlay command-line values on the loaded config.
    pub fn apply(&self, config: &mut HarborConfig) {
        if let Some(dir) = &self.assets_dir {
            config.webview.assets_dir = dir.clone();
        }
        if let Some(entry) = &self.entry {
            config.webview.entry = entry.clone();
        }
        if self.strict_scheme {
            config.navigation.policy = MatchPolicy::Scheme;
        }
    }

    /// `EnvFilter` directive: `--log-level`, else the config's level.
    pub fn log_directive(&self, config: &HarborConfig) -> String {
        match self.log_level.as_deref() {
            Some(level) if level.contains('=') => level.to_string(),
            Some(level) => format!("harbor={level}"),
            None => config.logging.level.directive(),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
