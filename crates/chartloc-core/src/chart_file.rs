//! Read, rewrite and write `Chart.yaml` files.
//!
//! The whole document is parsed, rewritten and serialized in memory before
//! anything touches the output path. The output is then replaced through a
//! temp file next to the real file (symlinks are followed), so a failure
//! leaves the old file intact. An existing file keeps its permissions.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::chart::Chart;
use crate::error::ChartError;
use crate::rewrite::{self, RewriteMap};

/// Result of rewriting one chart in memory.
#[derive(Debug, Clone)]
pub struct Localized {
    pub chart: Chart,
    /// Names of the dependencies whose location was replaced, in chart order.
    pub rewritten: Vec<String>,
}

impl Localized {
    pub fn total(&self) -> usize {
        self.chart.dependencies.len()
    }

    pub fn to_yaml(&self) -> Result<String, ChartError> {
        to_yaml(&self.chart)
    }
}

pub fn parse_chart(text: &str, path: &Path) -> Result<Chart, ChartError> {
    serde_yaml::from_str(text).map_err(|source| ChartError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_chart(path: &Path) -> Result<Chart, ChartError> {
    let text = fs::read_to_string(path).map_err(|source| ChartError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_chart(&text, path)
}

pub fn to_yaml(chart: &Chart) -> Result<String, ChartError> {
    serde_yaml::to_string(chart).map_err(ChartError::Serialize)
}

/// Serialize `chart` and atomically replace `path` with it.
pub fn write_chart(path: &Path, chart: &Chart) -> Result<(), ChartError> {
    let yaml = to_yaml(chart)?;
    replace_file(path, yaml.as_bytes())
}

fn replace_file(path: &Path, contents: &[u8]) -> Result<(), ChartError> {
    let write_err = |source| ChartError::Write {
        path: path.to_path_buf(),
        source,
    };
    // An existing target is written through symlinks and keeps its mode.
    let (target, permissions) = match fs::canonicalize(path) {
        Ok(real) => {
            let permissions = fs::metadata(&real).map_err(write_err)?.permissions();
            (real, Some(permissions))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => (path.to_path_buf(), None),
        Err(e) => return Err(write_err(e)),
    };
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let mut tmp = NamedTempFile::new_in(&dir).map_err(write_err)?;
    tmp.write_all(contents).map_err(write_err)?;
    if let Some(permissions) = permissions {
        tmp.as_file().set_permissions(permissions).map_err(write_err)?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(&target).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Read and parse `input`, then apply `rewrites`. Nothing is written.
pub fn localize(input: &Path, rewrites: &RewriteMap) -> Result<Localized, ChartError> {
    let chart = read_chart(input)?;
    let rewritten = rewrite::matched_names(&chart, rewrites)
        .into_iter()
        .map(String::from)
        .collect();
    Ok(Localized {
        chart: rewrite::transform(&chart, rewrites),
        rewritten,
    })
}

/// Rewrite `input` and store the result at `output` (which may be `input`).
pub fn localize_file(
    input: &Path,
    output: &Path,
    rewrites: &RewriteMap,
) -> Result<Localized, ChartError> {
    let localized = localize(input, rewrites)?;
    for dep in &localized.chart.dependencies {
        if rewrites.contains_key(&dep.name) {
            tracing::debug!(dependency = %dep.name, location = %dep.location, "rewrote dependency");
        }
    }
    write_chart(output, &localized.chart)?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        rewritten = localized.rewritten.len(),
        total = localized.total(),
        "chart localized"
    );
    Ok(localized)
}
