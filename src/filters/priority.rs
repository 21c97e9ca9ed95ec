//! Filter accepting events at or above a severity threshold

use crate::core::{DispatchError, Filter, FilterRef, LogEvent, Result, Severity};
use serde_json::Value;

pub struct PriorityFilter {
    threshold: Severity,
}

impl PriorityFilter {
    pub fn new(threshold: Severity) -> Self {
        Self { threshold }
    }

    /// Build from plugin options
    ///
    /// Accepts either a bare threshold or an object with a `priority` key;
    /// the threshold itself may be a numeric level or a severity name.
    pub fn from_options(options: &Value) -> Result<Self> {
        let raw = match options {
            Value::Object(map) => map.get("priority").ok_or_else(|| {
                DispatchError::invalid_argument("priority filter requires a 'priority' option")
            })?,
            other => other,
        };

        let threshold = match raw {
            Value::Number(n) => {
                let n = n
                    .as_u64()
                    .and_then(|n| u8::try_from(n).ok())
                    .ok_or_else(|| {
                        DispatchError::invalid_argument(format!(
                            "unparseable priority threshold {}",
                            n
                        ))
                    })?;
                Severity::try_from(n)?
            }
            Value::String(s) => s.parse::<Severity>().or_else(|_| {
                s.parse::<u8>()
                    .map_err(|_| {
                        DispatchError::invalid_argument(format!(
                            "unparseable priority threshold '{}'",
                            s
                        ))
                    })
                    .and_then(Severity::try_from)
            })?,
            other => {
                return Err(DispatchError::invalid_argument(format!(
                    "priority threshold must be a severity level, got {:?}",
                    other
                )))
            }
        };

        Ok(Self::new(threshold))
    }
}

impl Filter for PriorityFilter {
    fn accept(&self, event: &LogEvent) -> bool {
        event.level.meets(self.threshold)
    }
}

impl From<PriorityFilter> for FilterRef {
    fn from(filter: PriorityFilter) -> Self {
        FilterRef::from_filter(filter)
    }
}
