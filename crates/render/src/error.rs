//! Error types for ethcal-render.

/// Error type for all fallible operations in the ethcal-render crate.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Returned when a [`RenderConfig`](crate::RenderConfig) fails validation.
    #[error("invalid render config: {reason}")]
    InvalidConfig {
        /// Description of the rejected setting.
        reason: String,
    },

    /// Returned when formatting into the output buffer fails.
    #[error("formatting failed")]
    Format(#[from] std::fmt::Error),

    /// Returned when writing the rendered calendar fails.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_config() {
        let err = RenderError::InvalidConfig {
            reason: "cell_width must be at least 3, got 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid render config: cell_width must be at least 3, got 2"
        );
    }

    #[test]
    fn error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: RenderError = io.into();
        assert!(matches!(err, RenderError::Io(_)));
        assert_eq!(err.to_string(), "write failed: pipe closed");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<RenderError>();
    }
}
