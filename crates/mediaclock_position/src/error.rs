// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for position mapping and configuration.

/// Error raised by checked position operations and config I/O
#[derive(Debug, thiserror::Error)]
pub enum PositionError {
    /// Upper bound is below the lower bound
    #[error("Inverted bounds: upper {upper} is below lower {lower}")]
    InvertedBounds {
        /// Lower bound as given
        lower: f64,
        /// Upper bound as given
        upper: f64,
    },

    /// A NaN reached a checked operation
    #[error("Value is not a number")]
    NotANumber,

    /// Stop offset precedes start offset
    #[error("Negative media duration: stop {stop} is before start {start}")]
    NegativeDuration {
        /// In-media start offset
        start: f64,
        /// In-media stop offset
        stop: f64,
    },

    /// Config file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config document is not valid RON for a position
    #[error("Parse error: {0}")]
    Parse(String),

    /// Config could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PositionError::InvertedBounds { lower: 3.0, upper: 2.0 };
        assert_eq!(err.to_string(), "Inverted bounds: upper 2 is below lower 3");

        let err = PositionError::NegativeDuration { start: 4.1, stop: 0.0 };
        assert_eq!(err.to_string(), "Negative media duration: stop 0 is before start 4.1");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PositionError = io.into();
        assert!(matches!(err, PositionError::Io(_)));
    }
}
