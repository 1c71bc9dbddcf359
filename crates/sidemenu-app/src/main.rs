mod cli;
mod demo;
mod host;

use std::io::Write;
use std::path::Path;

use sidemenu_common::types::{LayoutDirection, Rect};
use sidemenu_common::SideMenuError;
use sidemenu_config::SideMenuConfig;
use tracing_subscriber::EnvFilter;

/// Load the config named on the command line, or the platform default.
///
/// An explicit `--config` that cannot be read is an error; a broken
/// default config falls back to built-in defaults.
fn load_config(args: &cli::Args) -> sidemenu_common::Result<SideMenuConfig> {
    let mut config = match args.config {
        Some(ref path) => {
            tracing::info!("Using config override: {path}");
            sidemenu_config::toml_loader::load_from_path(Path::new(path))?
        }
        None => sidemenu_config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            SideMenuConfig::default()
        }),
    };
    if let Some(position) = args.position {
        config.position = position.into();
    }
    if let Some(direction) = args.direction {
        config.direction = direction.into();
    }
    Ok(config)
}

fn run(args: &cli::Args) -> sidemenu_common::Result<()> {
    let config = load_config(args)?;
    let mut stdout = std::io::stdout().lock();
    if args.print_config {
        writeln!(stdout, "{}", sidemenu_config::config_to_json(&config))?;
        return Ok(());
    }
    tracing::info!(
        "Config loaded (position: {:?}, direction: {:?}, width: {})",
        config.position,
        config.direction,
        config.menu_width
    );

    let layout = if args.rtl {
        LayoutDirection::RightToLeft
    } else {
        LayoutDirection::LeftToRight
    };
    let mut session = demo::Session::new(config, layout);
    session.run(Rect::new(0.0, 0.0, 375.0, 812.0))?;

    let state = serde_json::to_string(&session.controller().state())
        .map_err(|e| SideMenuError::Other(format!("failed to serialize final state: {e}")))?;
    writeln!(stdout, "{state}")?;
    Ok(())
}

fn main() {
    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("sidemenu=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "sidemenu=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("sidemenu v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args) {
        tracing::error!("Session failed: {e}");
        std::process::exit(1);
    }
    tracing::info!("Session complete");
}
