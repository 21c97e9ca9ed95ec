//! Filter accepting events whose message matches a pattern

use crate::core::{DispatchError, Filter, FilterRef, LogEvent, Result};
use regex::Regex;
use serde_json::Value;

pub struct RegexFilter {
    pattern: Regex,
}

impl RegexFilter {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// Build from plugin options: a bare pattern string or an object with a
    /// `regex` key; an invalid pattern is an invalid argument
    pub fn from_options(options: &Value) -> Result<Self> {
        let raw = match options {
            Value::Object(map) => map.get("regex").ok_or_else(|| {
                DispatchError::invalid_argument("regex filter requires a 'regex' option")
            })?,
            other => other,
        };

        let pattern = raw.as_str().ok_or_else(|| {
            DispatchError::invalid_argument("regex pattern must be a string")
        })?;
        let pattern = Regex::new(pattern).map_err(|e| {
            DispatchError::invalid_argument(format!("invalid regex pattern: {}", e))
        })?;
        Ok(Self::new(pattern))
    }
}

impl Filter for RegexFilter {
    fn accept(&self, event: &LogEvent) -> bool {
        self.pattern.is_match(&event.message)
    }
}

impl From<RegexFilter> for FilterRef {
    fn from(filter: RegexFilter) -> Self {
        FilterRef::from_filter(filter)
    }
}
