//! Crate-level error types.

use std::fmt;

/// Errors produced by the spinview crate.
#[derive(Debug)]
pub enum SpinError {
    /// A ring was requested with fewer than two frames.
    InvalidConfiguration {
        /// The rejected frame count.
        total_frames: usize,
    },
    /// A frame index outside `1..=total_frames` was addressed.
    IndexOutOfRange {
        /// The rejected 1-based index.
        index: usize,
        /// Size of the ring it was checked against.
        total_frames: usize,
    },
    /// Options parsed but failed validation.
    InvalidOptions(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Pointer trace (JSON) parsing failure.
    TraceParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for SpinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { total_frames } => write!(
                f,
                "invalid configuration: a frame ring needs at least 2 \
                 frames, got {total_frames}"
            ),
            Self::IndexOutOfRange {
                index,
                total_frames,
            } => write!(
                f,
                "frame index {index} out of range (expected 1..={total_frames})"
            ),
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::TraceParse(msg) => write!(f, "trace parse error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for SpinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SpinError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let err = SpinError::IndexOutOfRange {
            index: 33,
            total_frames: 32,
        };
        assert_eq!(
            err.to_string(),
            "frame index 33 out of range (expected 1..=32)"
        );

        let err = SpinError::InvalidConfiguration { total_frames: 1 };
        assert!(err.to_string().contains("got 1"));
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error;

        let err = SpinError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(err.source().is_some());
        assert!(SpinError::OptionsParse("bad".into()).source().is_none());
    }
}
