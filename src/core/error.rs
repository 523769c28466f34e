//! Error types for the log handler

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A record could not be rendered; nothing was written
    #[error("failed to render log record with {renderer}: {source}")]
    Render {
        renderer: String,
        #[source]
        source: Box<LoggerError>,
    },

    /// Output stream error, passed through untouched
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization or configuration decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed strftime pattern
    #[error("invalid timestamp format '{format}'")]
    TimestampFormat { format: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Wrap an error raised while rendering with the renderer's name
    pub fn render(renderer: impl Into<String>, source: LoggerError) -> Self {
        LoggerError::Render {
            renderer: renderer.into(),
            source: Box::new(source),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a timestamp format error
    pub fn timestamp_format(format: impl Into<String>) -> Self {
        LoggerError::TimestampFormat {
            format: format.into(),
        }
    }

    /// True for errors raised by the output stream rather than by rendering
    pub fn is_io(&self) -> bool {
        matches!(self, LoggerError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("HandlerOptions", "unknown format");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::timestamp_format("%Q");
        assert!(matches!(err, LoggerError::TimestampFormat { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("HandlerOptions", "unknown format");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for HandlerOptions: unknown format"
        );

        let err = LoggerError::render("pretty", LoggerError::timestamp_format("%Q"));
        assert_eq!(
            err.to_string(),
            "failed to render log record with pretty: invalid timestamp format '%Q'"
        );
    }

    #[test]
    fn test_render_error_keeps_source() {
        let err = LoggerError::render("json", LoggerError::timestamp_format("%Q"));
        let source = err.source().expect("render error has a source");
        assert_eq!(source.to_string(), "invalid timestamp format '%Q'");
        assert!(!err.is_io());
    }

    #[test]
    fn test_io_error_is_transparent() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::from(io_err);

        assert!(err.is_io());
        assert_eq!(err.to_string(), "pipe closed");
    }
}
