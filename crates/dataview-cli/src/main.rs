mod commands;
mod context;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dataview")]
#[command(version, about = "Dataview CLI - inspect and exercise the application route table", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "dataview.toml")]
    config: PathBuf,

    /// Route file to use instead of the built-in table
    #[arg(short, long, global = true)]
    routes: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every route as a tree
    Routes,

    /// Resolve a path to its route chain and params
    Resolve {
        /// Path, optionally with ?query and #hash
        path: String,

        /// Print the match as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a URL from a route name
    Url {
        /// Route name
        name: String,

        /// Route parameter as key=value (repeatable)
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Validate a route file
    Check {
        /// TOML route file
        file: PathBuf,
    },

    /// Replay navigation steps and print view transitions
    Navigate {
        /// Paths to push, or :back / :forward
        #[arg(required = true)]
        steps: Vec<String>,
    },
}

/// Parses `key=value` into a pair; the value may be empty
fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, _)) if key.is_empty() => Err(format!("missing parameter name in '{}'", raw)),
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected key=value, got '{}'", raw)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = context::load_config(&cli.config)?;
    context::init_logging(cli.verbose, &config.logging);

    match cli.command {
        Commands::Routes => {
            let table = context::load_table(&config, &cli.config, cli.routes.as_deref())?;
            commands::routes::execute(&table)?;
        }
        Commands::Resolve { path, json } => {
            let table = context::load_table(&config, &cli.config, cli.routes.as_deref())?;
            commands::resolve::execute(&table, &path, json)?;
        }
        Commands::Url { name, params } => {
            let table = context::load_table(&config, &cli.config, cli.routes.as_deref())?;
            commands::url::execute(&table, &name, params)?;
        }
        Commands::Check { file } => {
            commands::check::execute(&file, &config.routing)?;
        }
        Commands::Navigate { steps } => {
            let table = context::load_table(&config, &cli.config, cli.routes.as_deref())?;
            commands::navigate::execute(table, &steps)?;
        }
    }

    Ok(())
}
