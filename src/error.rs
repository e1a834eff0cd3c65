//! Error type shared by every module of the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort preparing the model input.
///
/// Input-format and I/O variants carry the offending path (and line) so a
/// failed run can be diagnosed without re-running it.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: missing header line", .path.display())]
    MissingHeader { path: PathBuf },
    #[error("{}:{line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
    #[error("{}: no node records after the header", .path.display())]
    EmptyNodeFile { path: PathBuf },
    #[error("unsupported geography `{0}` (expected MANHATTAN or EUCLIDEAN)")]
    InvalidGeography(String),
    #[error("absence probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
    #[error("node sequence has {0} elements, at least 2 depot replicas are required")]
    TooFewNodes(usize),
    #[error("node ids must be 0..n in sequence order, found {found} at position {position}")]
    NonContiguousNodes { position: usize, found: usize },
    #[error("node sequence has no customers between the depot replicas")]
    NoCustomers,
    #[error("number of vehicles must be at least 1")]
    NoVehicles,
    #[error("failed to parse settings {}: {source}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("settings have no section `{0}`")]
    MissingSection(String),
    #[error("invalid settings section `{key}`: {source}")]
    Section {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize model input: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_mentions_location() {
        let err = Error::Parse {
            path: PathBuf::from("nodes.txt"),
            line: 4,
            message: "expected at least 3 fields, found 2".into(),
        };
        assert_eq!(
            err.to_string(),
            "nodes.txt:4: expected at least 3 fields, found 2"
        );
    }

    #[test]
    fn test_geography_error_mentions_value() {
        let err = Error::InvalidGeography("OTHER".into());
        assert!(err.to_string().contains("`OTHER`"));
    }
}
