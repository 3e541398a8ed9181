//! Unified error types for slidesmith operations.
//!
//! One error enum covers the whole crate: deck validation failures surface
//! through the same type as writer and I/O failures, so callers match on a
//! single taxonomy.

use thiserror::Error;

/// Main error type for slidesmith operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A color token was not found in the style registry
    #[error("unknown color token '{0}'")]
    UnknownToken(String),

    /// A progress bar fraction lies outside [0, 1]
    #[error("progress fraction {0} is outside [0, 1]")]
    InvalidFraction(f64),

    /// A block frame extends past the page edges
    #[error(
        "frame {width}x{height} at ({x}, {y}) extends outside the {page_width}x{page_height} EMU page"
    )]
    OutOfBounds {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        page_width: i64,
        page_height: i64,
    },

    /// A slide failed to compose; carries the zero-based slide index
    #[error("slide {slide}: {source}")]
    Composition {
        slide: usize,
        source: Box<Error>,
    },

    /// Malformed color value (e.g. a bad hex string)
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    YamlError(String),
}

impl Error {
    /// Wrap an error with the index of the slide it occurred on.
    pub(crate) fn at_slide(self, slide: usize) -> Self {
        Self::Composition {
            slide,
            source: Box::new(self),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Self::ZipError(err.to_string())
    }
}

/// Result type for slidesmith operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::UnknownToken("not-a-color".to_string());
        assert_eq!(err.to_string(), "unknown color token 'not-a-color'");

        let err = Error::InvalidFraction(1.5);
        assert_eq!(err.to_string(), "progress fraction 1.5 is outside [0, 1]");
    }

    #[test]
    fn test_composition_wrapping() {
        let err = Error::UnknownToken("mystery".to_string()).at_slide(3);
        match &err {
            Error::Composition { slide, source } => {
                assert_eq!(*slide, 3);
                assert!(matches!(**source, Error::UnknownToken(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "slide 3: unknown color token 'mystery'");
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;

        let err = Error::InvalidFraction(-0.2).at_slide(0);
        let source = err.source().unwrap();
        assert_eq!(
            source.to_string(),
            "progress fraction -0.2 is outside [0, 1]"
        );
    }
}
