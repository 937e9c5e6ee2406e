// File: src/context.rs
// Purpose: Shared setup for commands: configuration, logging and the route table

use anyhow::{Context, Result};
use dataview_router::{app_routes, Config, LoggingConfig, RouteFile, RouteTable};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn load_config(path: &Path) -> Result<Config> {
    Config::load(path)
}

/// Installs the stderr subscriber; RUST_LOG wins over flags and config
pub fn init_logging(verbose: u8, config: &LoggingConfig) {
    let level = match verbose {
        0 => config.level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Picks the route table: `--routes`, then `routing.routes_file`, then the built-in table
///
/// A relative `routing.routes_file` is taken from the config file's directory;
/// `--routes` is taken as given. Components are carried as their names so
/// every source looks the same.
pub fn load_table(
    config: &Config,
    config_path: &Path,
    routes_override: Option<&Path>,
) -> Result<Arc<RouteTable<String>>> {
    let routes_file = routes_override.map(Path::to_path_buf).or_else(|| {
        config
            .routing
            .routes_file
            .as_deref()
            .map(|file| relative_to_config(config_path, Path::new(file)))
    });

    let table = match routes_file {
        Some(path) => {
            debug!("Loading routes from {:?}", path);
            RouteFile::load(&path)?.into_table(&config.routing)?
        }
        None => {
            debug!("Using built-in application routes");
            app_routes()
                .context("Built-in route table is invalid")?
                .map_components(|page| page.to_string())
                .with_config(&config.routing)
        }
    };

    Ok(Arc::new(table))
}

fn relative_to_config(config_path: &Path, file: &Path) -> PathBuf {
    match config_path.parent() {
        Some(dir) if file.is_relative() => dir.join(file),
        _ => file.to_path_buf(),
    }
}
