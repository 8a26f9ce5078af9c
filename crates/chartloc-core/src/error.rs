//! Error type for reading, parsing and writing chart descriptors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading or storing a `Chart.yaml`.
///
/// `Parse` doubles as the malformed-input condition: a document that is valid
/// YAML but lacks `dependencies`, or has an entry without `name` or
/// `repository`, is rejected here rather than later during the rewrite.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("read chart {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed chart {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("serialize chart")]
    Serialize(#[source] serde_yaml::Error),

    #[error("write chart {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ChartError {
    /// True when the input was readable but did not have the chart shape.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ChartError::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_includes_path_and_source_is_kept() {
        let err = ChartError::Read {
            path: PathBuf::from("/tmp/Chart.yaml"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "read chart /tmp/Chart.yaml");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("gone"));
        assert!(!err.is_malformed());
    }

    #[test]
    fn parse_error_is_malformed() {
        let source = serde_yaml::from_str::<u32>("not a number").unwrap_err();
        let err = ChartError::Parse {
            path: PathBuf::from("Chart.yaml"),
            source,
        };
        assert!(err.is_malformed());
        assert_eq!(err.to_string(), "malformed chart Chart.yaml");
    }
}
