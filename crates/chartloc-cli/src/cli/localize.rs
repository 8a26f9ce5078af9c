//! The rewrite itself: build the map, localize the chart, report.

use anyhow::{Context, Result};
use chartloc_core::chart_file;
use chartloc_core::config::ChartlocConfig;
use chartloc_core::local_paths;
use chartloc_core::rewrite::RewriteMap;
use std::io::{self, Write};
use std::path::PathBuf;

use super::Cli;

pub struct LocalizeArgs {
    pub chart: PathBuf,
    pub deployments_dir: String,
    pub overrides: Vec<(String, String)>,
    pub output: Option<PathBuf>,
    pub dry_run: bool,
}

impl From<Cli> for LocalizeArgs {
    fn from(cli: Cli) -> Self {
        Self {
            chart: cli.chart,
            deployments_dir: cli.deployments_dir,
            overrides: cli.overrides,
            output: cli.output,
            dry_run: cli.dry_run,
        }
    }
}

/// Configured local charts first, then `--set` overrides on top.
pub fn build_rewrites(cfg: &ChartlocConfig, args: &LocalizeArgs) -> RewriteMap {
    let mut rewrites = local_paths::rewrite_map(&args.deployments_dir, &cfg.local_charts);
    rewrites.extend(args.overrides.iter().cloned());
    rewrites
}

pub fn run_localize(cfg: &ChartlocConfig, args: LocalizeArgs) -> Result<()> {
    run_localize_to(cfg, args, &mut io::stdout().lock())
}

/// Same as [`run_localize`], printing the dry-run YAML or the summary to `out`.
pub fn run_localize_to(
    cfg: &ChartlocConfig,
    args: LocalizeArgs,
    out: &mut impl Write,
) -> Result<()> {
    let rewrites = build_rewrites(cfg, &args);
    tracing::debug!("rewrite map: {:?}", rewrites);

    if args.dry_run {
        let localized = chart_file::localize(&args.chart, &rewrites)?;
        let yaml = localized.to_yaml()?;
        write!(out, "{yaml}").context("write to stdout")?;
        out.flush().context("write to stdout")?;
        return Ok(());
    }

    let output = args.output.as_deref().unwrap_or(&args.chart);
    let localized = chart_file::localize_file(&args.chart, output, &rewrites)
        .with_context(|| format!("localize {}", args.chart.display()))?;

    writeln!(
        out,
        "Rewrote {} of {} dependencies in {}",
        localized.rewritten.len(),
        localized.total(),
        output.display()
    )
    .context("write to stdout")?;
    for name in &localized.rewritten {
        if let Some(location) = rewrites.get(name) {
            writeln!(out, "  {name} -> {location}").context("write to stdout")?;
        }
    }
    Ok(())
}
