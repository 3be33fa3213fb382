//! Status-line notices

use std::time::{Duration, Instant};

use pricewatch_core::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A short message shown in the status bar until it expires or is replaced
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    pub created_at: Instant,
}

impl Notice {
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            created_at: Instant::now(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, text)
    }

    /// Local problems (bad input, missing credentials) warn; the rest are errors
    pub fn from_error(err: &Error) -> Self {
        if err.is_local() {
            Self::warning(err.to_string())
        } else {
            Self::error(err.to_string())
        }
    }

    pub fn is_expired(&self, timeout: Duration) -> bool {
        self.created_at.elapsed() >= timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_error_levels() {
        let notice = Notice::from_error(&Error::validation("bad"));
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.text, "bad");

        let notice = Notice::from_error(&Error::MissingCredentials);
        assert_eq!(notice.level, NoticeLevel::Warning);

        let notice = Notice::from_error(&Error::transport("/api/logs", "refused"));
        assert_eq!(notice.level, NoticeLevel::Error);
    }

    #[test]
    fn test_expiry() {
        let notice = Notice::info("saved");
        assert!(!notice.is_expired(Duration::from_secs(60)));
        assert!(notice.is_expired(Duration::ZERO));
    }
}
