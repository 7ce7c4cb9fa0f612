//! Error handling for Panelcut
//!
//! Expected geometric situations (a line that misses a panel, a cut that
//! would leave a sliver) are not errors: the engine reports them as empty
//! or `None` results. The types here cover malformed input only:
//! - Geometry errors (invalid polygons)
//! - I/O and other failures surfaced by the outer layers
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised when constructing geometry from untrusted data, such as an
/// imported coordinate list.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A polygon needs at least three vertices
    #[error("Polygon needs at least 3 points, got {count}")]
    TooFewPoints {
        /// Number of points supplied.
        count: usize,
    },

    /// A vertex has a NaN or infinite coordinate
    #[error("Polygon point {index} is not finite")]
    NonFinite {
        /// Index of the offending point.
        index: usize,
    },
}

/// Main error type for Panelcut
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_error_display() {
        let err = GeometryError::TooFewPoints { count: 2 };
        assert_eq!(err.to_string(), "Polygon needs at least 3 points, got 2");

        let err = GeometryError::NonFinite { index: 4 };
        assert_eq!(err.to_string(), "Polygon point 4 is not finite");
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = GeometryError::TooFewPoints { count: 0 }.into();
        assert!(err.is_geometry_error());

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_geometry_error());

        assert_eq!(Error::other("boom").to_string(), "boom");
    }
}
