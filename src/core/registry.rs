//! Plugin registries and name resolution
//!
//! Two independent registries exist, one for writers and one for filters.
//! Each maps a case-insensitive short name to a factory, ships with default
//! entries, and can be extended by the hosting application before any
//! resolution occurs. The writer registry is held per logger; the filter
//! registry is a process-wide default shared by every filter chain.

use super::error::{DispatchError, Result};
use super::event_builder::json_type_name;
use super::filter::Filter;
use super::writer::Writer;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;

/// A reference to a plugin: a registered name, an already-built instance, or
/// an arbitrary value from a dynamic boundary (rejected at resolution)
pub enum PluginRef<T: ?Sized> {
    Name(String),
    Instance(Box<T>),
    Other(Value),
}

pub type WriterRef = PluginRef<dyn Writer>;
pub type FilterRef = PluginRef<dyn Filter>;

impl<T: ?Sized> From<&str> for PluginRef<T> {
    fn from(name: &str) -> Self {
        PluginRef::Name(name.to_string())
    }
}

impl<T: ?Sized> From<String> for PluginRef<T> {
    fn from(name: String) -> Self {
        PluginRef::Name(name)
    }
}

impl<T: ?Sized> From<Box<T>> for PluginRef<T> {
    fn from(instance: Box<T>) -> Self {
        PluginRef::Instance(instance)
    }
}

impl<T: ?Sized> From<Value> for PluginRef<T> {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => PluginRef::Name(name),
            other => PluginRef::Other(other),
        }
    }
}

impl WriterRef {
    pub fn from_writer<W: Writer + 'static>(writer: W) -> Self {
        PluginRef::Instance(Box::new(writer))
    }
}

impl FilterRef {
    pub fn from_filter<F: Filter + 'static>(filter: F) -> Self {
        PluginRef::Instance(Box::new(filter))
    }
}

type PluginFactory<T> = Box<dyn Fn(&Value) -> Result<Box<T>> + Send + Sync>;

pub struct PluginRegistry<T: ?Sized> {
    kind: &'static str,
    capability: &'static str,
    factories: HashMap<String, PluginFactory<T>>,
}

impl<T: ?Sized> PluginRegistry<T> {
    pub fn new(kind: &'static str, capability: &'static str) -> Self {
        Self {
            kind,
            capability,
            factories: HashMap::new(),
        }
    }

    /// Register a factory under a case-insensitive name, replacing any
    /// previous entry
    pub fn register(
        &mut self,
        name: &str,
        factory: impl Fn(&Value) -> Result<Box<T>> + Send + Sync + 'static,
    ) {
        self.factories
            .insert(name.to_ascii_lowercase(), Box::new(factory));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&name.to_ascii_lowercase())
    }

    /// Construct a fresh instance from a registered factory
    pub fn get(&self, name: &str, options: &Value) -> Result<Box<T>> {
        let factory = self
            .factories
            .get(&name.to_ascii_lowercase())
            .ok_or_else(|| DispatchError::unknown_plugin(self.kind, name))?;
        factory(options)
    }

    /// Resolve a plugin reference into an instance
    ///
    /// Instances pass through unchanged, names go through [`get`](Self::get),
    /// and anything else is a typed rejection naming the required capability.
    pub fn resolve(&self, reference: PluginRef<T>, options: &Value) -> Result<Box<T>> {
        match reference {
            PluginRef::Instance(instance) => Ok(instance),
            PluginRef::Name(name) => self.get(&name, options),
            PluginRef::Other(value) => Err(DispatchError::invalid_argument(format!(
                "{} must implement the {} capability, got {}",
                self.kind,
                self.capability,
                json_type_name(&value)
            ))),
        }
    }
}

pub type WriterRegistry = PluginRegistry<dyn Writer>;
pub type FilterRegistry = PluginRegistry<dyn Filter>;

impl WriterRegistry {
    /// Registry pre-seeded with the built-in writers
    pub fn with_defaults() -> Self {
        let mut registry = PluginRegistry::new("writer", "Writer");
        registry.register("mock", |_options| {
            Ok(Box::new(crate::writers::MockWriter::new()) as Box<dyn Writer>)
        });
        registry.register("null", |_options| {
            Ok(Box::new(crate::writers::NullWriter::new()) as Box<dyn Writer>)
        });
        registry
    }
}

impl FilterRegistry {
    /// Registry pre-seeded with the built-in filters
    pub fn with_defaults() -> Self {
        let mut registry = PluginRegistry::new("filter", "Filter");
        registry.register("mock", |_options| {
            Ok(Box::new(crate::filters::MockFilter::new()) as Box<dyn Filter>)
        });
        registry.register("priority", |options| {
            Ok(Box::new(crate::filters::PriorityFilter::from_options(options)?) as Box<dyn Filter>)
        });
        registry.register("regex", |options| {
            Ok(Box::new(crate::filters::RegexFilter::from_options(options)?) as Box<dyn Filter>)
        });
        registry
    }
}

static FILTER_PLUGINS: Lazy<RwLock<FilterRegistry>> =
    Lazy::new(|| RwLock::new(FilterRegistry::with_defaults()));

/// Process-wide filter registry consulted by every filter chain
pub fn filter_plugins() -> &'static RwLock<FilterRegistry> {
    &FILTER_PLUGINS
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = WriterRegistry::with_defaults();
        assert!(registry.contains("MOCK"));
        let writer = registry.get("Mock", &Value::Null).unwrap();
        assert_eq!(writer.name(), "mock");
    }

    #[test]
    fn test_unknown_plugin() {
        let registry = WriterRegistry::with_defaults();
        let err = registry.get("syslog", &Value::Null).err().unwrap();
        assert!(matches!(err, DispatchError::UnknownPlugin { .. }));
        assert!(err.to_string().contains("syslog"));
    }

    #[test]
    fn test_instance_passes_through() {
        let registry = WriterRegistry::with_defaults();
        let writer = registry
            .resolve(
                WriterRef::from_writer(crate::writers::NullWriter::new()),
                &Value::Null,
            )
            .unwrap();
        assert_eq!(writer.name(), "null");
    }

    #[test]
    fn test_non_capability_value_is_rejected() {
        let registry = WriterRegistry::with_defaults();
        for value in [json!({}), json!(10)] {
            let err = registry
                .resolve(WriterRef::from(value), &Value::Null)
                .err()
                .unwrap();
            assert!(err.to_string().contains("must implement the Writer capability"));
        }
    }

    #[test]
    fn test_repeated_resolution_yields_fresh_instances() {
        let registry = FilterRegistry::with_defaults();
        let low = registry
            .get("priority", &json!({"priority": "debug"}))
            .unwrap();
        let high = registry
            .get("priority", &json!({"priority": "err"}))
            .unwrap();

        let builder = crate::core::EventBuilder::new();
        let event = builder
            .build(crate::core::Severity::Info, json!("independent"), json!({}))
            .unwrap();
        assert!(low.accept(&event));
        assert!(!high.accept(&event));
    }

    #[test]
    fn test_caller_extension() {
        let mut registry = FilterRegistry::with_defaults();
        registry.register("everything", |_options| {
            Ok(Box::new(crate::filters::MockFilter::new()) as Box<dyn Filter>)
        });
        assert!(registry.contains("everything"));
    }
}
