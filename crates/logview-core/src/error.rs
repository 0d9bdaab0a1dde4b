//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Live Stream Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Live stream transport error: {message}")]
    Transport { message: String },

    // ─────────────────────────────────────────────────────────────
    // HTTP Collaborator Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Request failed: {message}")]
    Fetch { message: String },

    #[error("Server responded with HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Server reported an error: {message}")]
    Server { message: String },

    // ─────────────────────────────────────────────────────────────
    // User Input Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No log file selected")]
    NoFileSelected,

    #[error("Invalid page size: {value}")]
    InvalidPageSize { value: String },

    #[error("Invalid page number: {value} (expected 1..={total_pages})")]
    InvalidPageNumber { value: String, total_pages: u32 },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid server URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_page_size(value: impl ToString) -> Self {
        Self::InvalidPageSize {
            value: value.to_string(),
        }
    }

    pub fn invalid_page_number(value: impl ToString, total_pages: u32) -> Self {
        Self::InvalidPageNumber {
            value: value.to_string(),
            total_pages,
        }
    }

    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Rejected user input that never reached the network.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::NoFileSelected | Error::InvalidPageSize { .. } | Error::InvalidPageNumber { .. }
        )
    }

    /// Failures of the HTTP collaborators (config, files, content).
    ///
    /// Malformed payloads and `{ "error": ... }` bodies are treated like
    /// transport-level fetch failures.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Error::Fetch { .. }
                | Error::HttpStatus { .. }
                | Error::MalformedResponse { .. }
                | Error::Server { .. }
                | Error::Json(_)
        )
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Transport { .. } | Error::ChannelClosed)
            || self.is_fetch_failure()
            || self.is_invalid_input()
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::TerminalInit(_) | Error::InvalidUrl { .. } | Error::Config { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::transport("connection refused");
        assert_eq!(
            err.to_string(),
            "Live stream transport error: connection refused"
        );

        let err = Error::HttpStatus { status: 404 };
        assert_eq!(err.to_string(), "Server responded with HTTP 404");

        let err = Error::NoFileSelected;
        assert!(err.to_string().contains("No log file selected"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_invalid_page_number_mentions_range() {
        let err = Error::invalid_page_number(9, 4);
        let text = err.to_string();
        assert!(text.contains('9'));
        assert!(text.contains("1..=4"));
    }

    #[test]
    fn test_invalid_input_classification() {
        assert!(Error::NoFileSelected.is_invalid_input());
        assert!(Error::invalid_page_size("abc").is_invalid_input());
        assert!(Error::invalid_page_number(0, 3).is_invalid_input());
        assert!(!Error::fetch("timeout").is_invalid_input());
    }

    #[test]
    fn test_fetch_failure_classification() {
        assert!(Error::fetch("timeout").is_fetch_failure());
        assert!(Error::HttpStatus { status: 500 }.is_fetch_failure());
        assert!(Error::malformed("logs is not an array").is_fetch_failure());
        assert!(Error::server("file missing").is_fetch_failure());
        assert!(!Error::transport("closed").is_fetch_failure());
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::TerminalInit("no tty".to_string()).is_fatal());
        assert!(Error::invalid_url("nope", "relative URL without a base").is_fatal());
        assert!(!Error::transport("closed").is_fatal());
        assert!(!Error::NoFileSelected.is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::transport("reset by peer").is_recoverable());
        assert!(Error::fetch("timeout").is_recoverable());
        assert!(Error::invalid_page_size(0).is_recoverable());
        assert!(!Error::TerminalInit("no tty".to_string()).is_recoverable());
    }
}
