//! Event construction and input validation
//!
//! The builder is the crate's dynamic-input boundary: messages and extra
//! attributes arrive as `serde_json::Value` and are either normalized into
//! the canonical [`LogEvent`] shape or rejected with a typed error. Nothing
//! past this point ever re-validates an event.

use super::error::{DispatchError, Result};
use super::event::{FieldValue, LogEvent};
use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub struct EventBuilder {
    clock: Clock,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            clock: Box::new(Utc::now),
        }
    }

    /// Replace the ambient clock, primarily a test seam
    pub fn with_clock(clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        Self {
            clock: Box::new(clock),
        }
    }

    /// Validate and normalize one logging call into an immutable event
    pub fn build(&self, level: Severity, message: Value, extra: Value) -> Result<LogEvent> {
        let message = normalize_message(message)?;
        let extra = normalize_extra(extra)?;

        Ok(LogEvent {
            timestamp: (self.clock)(),
            level,
            message: sanitize_message(&message),
            extra,
        })
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Accepts a string, or a sequence of scalar values joined with a space
fn normalize_message(message: Value) -> Result<String> {
    match message {
        Value::String(s) => Ok(s),
        Value::Array(parts) => {
            let mut rendered = Vec::with_capacity(parts.len());
            for part in parts {
                match part {
                    Value::String(s) => rendered.push(s),
                    Value::Number(n) => rendered.push(n.to_string()),
                    Value::Bool(b) => rendered.push(b.to_string()),
                    other => {
                        return Err(DispatchError::invalid_argument(format!(
                            "message sequence may only contain scalar values, got {}",
                            json_type_name(&other)
                        )))
                    }
                }
            }
            Ok(rendered.join(" "))
        }
        other => Err(DispatchError::invalid_argument(format!(
            "message must be a string or a sequence of scalars, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Accepts any string-keyed object and converts it key by key
fn normalize_extra(extra: Value) -> Result<HashMap<String, FieldValue>> {
    match extra {
        Value::Object(map) => Ok(map
            .iter()
            .map(|(key, value)| (key.clone(), FieldValue::from_json(value)))
            .collect()),
        other => Err(DispatchError::invalid_argument(format!(
            "extra must be a string-keyed map, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Escape line breaks and tabs so one event stays on one rendered line
fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
