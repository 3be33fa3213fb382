//! Backend activity log feed
//!
//! The feed is an ordered list of opaque lines. The client never sorts,
//! dedupes or trims it; it only joins the lines for display. Lines written by
//! the backend usually start with a `[YYYY-MM-DD HH:MM] ` stamp, which
//! [`LogLine::parse`] splits off so the view can style it.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::Deserialize;

const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

static STAMP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(\d{4}-\d{2}-\d{2} \d{2}:\d{2})\] ?").expect("Invalid log stamp regex")
});

/// Ordered log lines exactly as served by `GET /api/logs`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LogFeed(pub Vec<String>);

impl LogFeed {
    pub fn new(lines: Vec<String>) -> Self {
        Self(lines)
    }

    /// Newline-joined text of the whole feed
    pub fn render_text(&self) -> String {
        self.0.join("\n")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Latest valid stamp among the entries, wherever it sits in the feed
    pub fn latest_stamp(&self) -> Option<NaiveDateTime> {
        self.lines()
            .filter_map(|line| LogLine::parse(line).timestamp())
            .max()
    }
}

impl From<Vec<String>> for LogFeed {
    fn from(lines: Vec<String>) -> Self {
        Self(lines)
    }
}

/// Kind of event a log line reports, judged by its leading marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTone {
    /// Upper threshold crossed
    AlertUp,
    /// Lower threshold crossed
    AlertDown,
    /// Something failed on the backend
    Failure,
    Plain,
}

/// A log line split into its optional stamp and body, for display only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLine<'a> {
    /// Raw stamp text without brackets
    pub stamp: Option<&'a str>,
    pub body: &'a str,
}

impl<'a> LogLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        match STAMP_PATTERN.captures(line) {
            Some(caps) => {
                let whole = caps.get(0).map_or(0, |m| m.end());
                Self {
                    stamp: caps.get(1).map(|m| m.as_str()),
                    body: &line[whole..],
                }
            }
            None => Self {
                stamp: None,
                body: line,
            },
        }
    }

    /// Parsed stamp, when present and a valid calendar time
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.stamp
            .and_then(|s| NaiveDateTime::parse_from_str(s, STAMP_FORMAT).ok())
    }

    pub fn tone(&self) -> LogTone {
        let body = self.body.trim_start();
        if body.starts_with('📈') {
            LogTone::AlertUp
        } else if body.starts_with('📉') {
            LogTone::AlertDown
        } else if body.starts_with("Error") {
            LogTone::Failure
        } else {
            LogTone::Plain
        }
    }
}
