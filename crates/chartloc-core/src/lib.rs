pub mod config;
pub mod logging;

pub mod chart;
pub mod chart_file;
pub mod error;
pub mod local_paths;
pub mod rewrite;
