//! Error type shared by every pricewatch crate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {message}")]
    Terminal { message: String },

    /// The request never got an HTTP answer (refused, reset, timed out)
    #[error("Request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    /// Non-2xx answer; `message` is the backend's `error` text when it sent one
    #[error("Backend rejected {endpoint} ({status}): {message}")]
    Backend {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// 2xx answer whose body is not the expected shape
    #[error("Unexpected response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    #[error("Invalid server URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Form input rejected before any request
    #[error("{message}")]
    Validation { message: String },

    #[error("Save the token and chat id first.")]
    MissingCredentials,

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn transport(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    pub fn backend(endpoint: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::Backend {
            endpoint: endpoint.into(),
            status,
            message: message.into(),
        }
    }

    pub fn decode(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Raised before any request leaves the client
    pub fn is_local(&self) -> bool {
        matches!(self, Error::Validation { .. } | Error::MissingCredentials)
    }

    /// The backend answered, or was unreachable; retrying later may succeed
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. } | Error::Backend { .. } | Error::Decode { .. }
        )
    }
}

/// Log an error with a short description on its way up
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {}", context.into(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_and_backend_display() {
        let err = Error::transport("/api/actions", "connection refused");
        assert_eq!(
            err.to_string(),
            "Request to /api/actions failed: connection refused"
        );

        let err = Error::backend("/api/add", 400, "symbol es obligatorio");
        assert_eq!(
            err.to_string(),
            "Backend rejected /api/add (400): symbol es obligatorio"
        );
    }

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = Error::validation("Ticker is required.");
        assert_eq!(err.to_string(), "Ticker is required.");
    }

    #[test]
    fn test_io_conversion() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_local_and_remote_are_disjoint() {
        let errors = [
            Error::validation("x"),
            Error::MissingCredentials,
            Error::transport("/api/logs", "reset"),
            Error::backend("/api/update", 404, "No existe la acción"),
            Error::decode("/api/logs", "expected array"),
            Error::config("unwritable"),
        ];
        for err in &errors {
            assert!(!(err.is_local() && err.is_remote()), "{:?}", err);
        }
        assert!(errors[0].is_local() && errors[1].is_local());
        assert!(errors[2].is_remote() && errors[3].is_remote() && errors[4].is_remote());
        assert!(!errors[5].is_local() && !errors[5].is_remote());
    }

    #[test]
    fn test_context_keeps_the_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("drawing frame").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
