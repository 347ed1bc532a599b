//! Crate-level error types.

use std::fmt;

/// Errors produced by the molexhibit crate.
#[derive(Debug)]
pub enum ExhibitError {
    /// DNA helix generation parameters that cannot produce a helix.
    InvalidHelix(String),
    /// Integer bond order outside 1..=3.
    InvalidBondOrder(u8),
    /// A molecule whose atom ids, bond references, or counts are
    /// inconsistent.
    InvalidMolecule(String),
    /// Registry lookup for an id that is not registered.
    UnknownMolecule(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// JSON export failure.
    Serialize(String),
}

impl fmt::Display for ExhibitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHelix(msg) => {
                write!(f, "invalid helix parameters: {msg}")
            }
            Self::InvalidBondOrder(order) => {
                write!(f, "invalid bond order {order} (expected 1, 2 or 3)")
            }
            Self::InvalidMolecule(msg) => write!(f, "invalid molecule: {msg}"),
            Self::UnknownMolecule(id) => write!(f, "unknown molecule '{id}'"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Serialize(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for ExhibitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExhibitError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ExhibitError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        let err = ExhibitError::InvalidHelix("turns must be positive".into());
        assert_eq!(
            err.to_string(),
            "invalid helix parameters: turns must be positive"
        );
        assert_eq!(
            ExhibitError::InvalidBondOrder(4).to_string(),
            "invalid bond order 4 (expected 1, 2 or 3)"
        );
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error;
        let err: ExhibitError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
        assert!(ExhibitError::UnknownMolecule("x".into()).source().is_none());
    }
}
