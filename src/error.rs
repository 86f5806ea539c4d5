//! Error types for the grid engine and pattern codec

use thiserror::Error;

/// Failures surfaced by the grid engine, the RLE codec and the session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// Width or height is not a positive integer
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: i64, height: i64 },

    /// Coordinate outside `[0, width) x [0, height)`
    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    /// Missing size header or unrecognized token in an RLE body
    #[error("malformed pattern: {0}")]
    MalformedPattern(String),
}

/// Result alias used across the engine
pub type Result<T> = std::result::Result<T, LifeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LifeError::OutOfBounds { x: -1, y: 0, width: 3, height: 3 };
        assert_eq!(err.to_string(), "coordinates (-1, 0) out of bounds for 3x3 grid");

        let err = LifeError::MalformedPattern("character 'q' not recognised".to_string());
        assert!(err.to_string().contains("'q'"));
    }

    #[test]
    fn test_converts_into_anyhow() {
        fn fails() -> anyhow::Result<()> {
            Err(LifeError::InvalidDimension { width: 0, height: 4 })?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(err.downcast_ref::<LifeError>().is_some());
    }
}
