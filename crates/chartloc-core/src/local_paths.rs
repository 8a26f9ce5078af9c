//! Build the rewrite map that points charts at a local deployments checkout.

use crate::config::LocalChart;
use crate::rewrite::RewriteMap;

/// `file://{deployments_dir}/{subdir}/`, without doubling slashes at the seams.
pub fn local_location(deployments_dir: &str, subdir: &str) -> String {
    let dir = deployments_dir.trim_end_matches('/');
    let subdir = subdir.trim_matches('/');
    if subdir.is_empty() {
        format!("file://{dir}/")
    } else {
        format!("file://{dir}/{subdir}/")
    }
}

/// One rewrite per configured local chart, all rooted at `deployments_dir`.
/// A later entry with the same name wins.
pub fn rewrite_map(deployments_dir: &str, charts: &[LocalChart]) -> RewriteMap {
    charts
        .iter()
        .map(|c| (c.name.clone(), local_location(deployments_dir, &c.subdir)))
        .collect()
}
