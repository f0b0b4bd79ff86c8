//! Pipeline error types.

use thiserror::Error;

/// Serialization pipeline errors.
///
/// The pipeline performs no I/O, so the only failures are contract
/// violations on the input. Degraded data (missing layout, unparseable
/// numeric attributes, iframe budget overruns) produces degraded output,
/// never an error.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// The supplied root is not a document or element node.
    #[error("invalid root node: expected a document or element, got {kind}")]
    InvalidRoot { kind: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_root_display() {
        let err = SerializeError::InvalidRoot { kind: "#text" };
        let display = err.to_string();
        assert!(display.contains("invalid root"));
        assert!(display.contains("#text"));
    }
}
