//! CLI for chartloc: point chart dependencies at a local deployments checkout.

mod localize;

use anyhow::Result;
use clap::Parser;
use chartloc_core::config;
use std::path::PathBuf;

use localize::{run_localize, LocalizeArgs};

/// Rewrite `repository` of local charts in a Chart.yaml to `file://` paths.
#[derive(Debug, Parser)]
#[command(name = "chartloc", version)]
#[command(
    about = "Rewrite Chart.yaml dependencies to local file:// paths for testing",
    long_about = None
)]
pub struct Cli {
    /// Path to the Chart.yaml to rewrite.
    pub chart: PathBuf,

    /// Deployments dir, as seen from the Chart.yaml (e.g. ../../deployments).
    pub deployments_dir: String,

    /// Config file to use instead of ~/.config/chartloc/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Extra rewrite NAME=LOCATION; repeatable, wins over configured charts.
    #[arg(long = "set", value_name = "NAME=LOCATION", value_parser = parse_assignment)]
    pub overrides: Vec<(String, String)>,

    /// Write the result here instead of overwriting the chart.
    #[arg(short, long, value_name = "PATH", conflicts_with = "dry_run")]
    pub output: Option<PathBuf>,

    /// Print the rewritten chart to stdout; do not write any file.
    #[arg(long)]
    pub dry_run: bool,
}

/// `name=location`, split on the first `=`. Both sides must be non-empty.
fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (name, location) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=LOCATION, got {s:?}"))?;
    let name = name.trim();
    if name.is_empty() || location.is_empty() {
        return Err(format!("expected NAME=LOCATION, got {s:?}"));
    }
    Ok((name.to_string(), location.to_string()))
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        run_localize(&cfg, LocalizeArgs::from(cli))
    }
}
