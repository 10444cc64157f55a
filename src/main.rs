//! Outlet router command-line front end.
//!
//! ```text
//! outlet-router --config routes.toml match /foo/1/bar/2?tab=info
//! outlet-router --config routes.toml link bar -p bar=3 --after /foo/1/bar/2
//! outlet-router --config routes.toml outlets
//! outlet-router --config routes.toml check
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use outlet_router::config::validation::validate_routes;
use outlet_router::config::{load_config, LogFormat};
use outlet_router::observability::init_logging;
use outlet_router::{Params, Router};

#[derive(Parser)]
#[command(name = "outlet-router")]
#[command(about = "Match paths against an outlet route tree and generate links", long_about = None)]
struct Cli {
    /// Route configuration file (TOML).
    #[arg(short, long)]
    config: PathBuf,

    /// Override the configured log format.
    #[arg(long, value_enum)]
    log_format: Option<CliLogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum CliLogFormat {
    Pretty,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Match a path and print every outlet's result
    Match {
        path: String,
    },
    /// Generate a link to an outlet
    Link {
        outlet: String,
        /// Parameter override, `name=value` (repeatable)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
        /// Navigate here first so its params act as defaults
        #[arg(long)]
        after: Option<String>,
        /// Leave unresolved placeholders in the output instead of failing
        #[arg(long)]
        lenient: bool,
    },
    /// List every outlet with its path template
    Outlets,
    /// Report configuration issues
    Check,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = load_config(&cli.config)?;

    if let Some(format) = cli.log_format {
        config.observability.log_format = match format {
            CliLogFormat::Pretty => LogFormat::Pretty,
            CliLogFormat::Json => LogFormat::Json,
        };
    }
    init_logging(&config.observability)?;

    tracing::debug!(config = ?cli.config, "outlet-router starting");

    match cli.command {
        Commands::Match { path } => {
            let mut router = Router::from_config(&config);
            router.set_path(&path);
            println!("{}", serde_json::to_string_pretty(&*router.snapshot())?);
        }
        Commands::Link {
            outlet,
            params,
            after,
            lenient,
        } => {
            let mut router = Router::from_config(&config);
            if let Some(path) = after {
                router.set_path(&path);
            }
            let params: Params = params.into_iter().collect();

            if lenient {
                match router.link_lenient(&outlet, &params) {
                    Some(link) => println!("{link}"),
                    None => {
                        eprintln!("Error: Unknown outlet: {outlet}");
                        return Ok(ExitCode::FAILURE);
                    }
                }
            } else {
                println!("{}", router.resolve_link(&outlet, &params)?);
            }
        }
        Commands::Outlets => {
            let router = Router::from_config(&config);
            let outlets: Vec<_> = router
                .tree()
                .nodes()
                .map(|node| {
                    json!({
                        "outlet": node.outlet,
                        "path": node.full_path,
                        "params": node.full_param_names,
                        "default": router.default_outlet() == Some(node.outlet.as_str()),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&outlets)?);
        }
        Commands::Check => {
            let errors = validate_routes(&config.routes);
            if errors.is_empty() {
                println!("OK: {} routes", count(&config.routes));
            } else {
                for error in &errors {
                    println!("{error}");
                }
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn count(routes: &[outlet_router::RouteConfig]) -> usize {
    routes.iter().map(|r| 1 + count(&r.children)).sum()
}
