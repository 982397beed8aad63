//! Batch parse reporting.
//!
//! Collects the outcome of parsing many identifiers so callers (and the
//! `locale-parse` binary) can summarize or serialize them in one place.

use crate::locale::{parse_locale, Locale, LocaleError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An identifier that parsed successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accepted {
    pub input: String,
    pub locale: Locale,
}

/// An identifier that was rejected, with the rendered reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejected {
    pub input: String,
    pub error: String,
}

/// Report containing accepted and rejected identifiers, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    /// Identifiers that parsed into a locale
    pub accepted: Vec<Accepted>,

    /// Identifiers that were rejected
    pub rejected: Vec<Rejected>,
}

impl ParseReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            accepted: Vec::new(),
            rejected: Vec::new(),
        }
    }

    /// Parse every identifier in `inputs` into a fresh report.
    pub fn parse_all<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = Self::new();
        for input in inputs {
            let input = input.as_ref();
            report.record(input, parse_locale(Some(input)));
        }
        report
    }

    /// Record the outcome of parsing `input`.
    ///
    /// A `None` locale (absent input) is recorded as the empty locale.
    pub fn record(&mut self, input: &str, result: Result<Option<Locale>, LocaleError>) {
        match result {
            Ok(locale) => self.accepted.push(Accepted {
                input: input.to_string(),
                locale: locale.unwrap_or_default(),
            }),
            Err(e) => {
                debug!("Rejected locale '{}': {}", input, e);
                self.rejected.push(Rejected {
                    input: input.to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    /// Total number of identifiers recorded
    pub fn len(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the report has any rejections
    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }

    /// Check if the report is clean (no rejections)
    pub fn is_clean(&self) -> bool {
        !self.has_rejections()
    }
}

impl Default for ParseReport {
    fn default() -> Self {
        Self::new()
    }
}
