//! Process-wide panic-hook bridge
//!
//! Converts each panic into a log call against a designated logger, then
//! hands the panic to the hook that was active before registration. The
//! bridge never suppresses the panic itself, and errors raised by the logger
//! inside the hook are discarded rather than recursed. When the panic comes
//! from a writer mid-dispatch the queue lock is still held, so the hook skips
//! delivery for that panic instead of blocking on its own logger.

use super::logger::Logger;
use super::severity::Severity;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::panic::{self, PanicHookInfo};
use std::sync::Arc;

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static>;

// Some(previous hook) while the bridge is installed. At most one bridge
// handler exists per process; registration while installed is a no-op.
static PREVIOUS_HOOK: Lazy<Mutex<Option<PanicHook>>> = Lazy::new(|| Mutex::new(None));

/// Install the bridge; returns `false` if one is already installed
pub fn register(logger: Arc<Logger>) -> bool {
    let mut previous = PREVIOUS_HOOK.lock();
    if previous.is_some() {
        return false;
    }
    *previous = Some(panic::take_hook());
    drop(previous);

    panic::set_hook(Box::new(move |info| {
        // log_nonblocking, not log_with: the panic may originate inside one
        // of this logger's writers, with the queue lock still held
        let _ = logger.log_nonblocking(Severity::Crit, describe(info), location_extra(info));
        if let Some(hook) = PREVIOUS_HOOK.lock().as_ref() {
            hook(info);
        }
    }));
    true
}

/// Remove the bridge and restore the captured hook verbatim; returns `false`
/// if no bridge is installed
pub fn unregister() -> bool {
    let restored = PREVIOUS_HOOK.lock().take();
    match restored {
        Some(hook) => {
            panic::set_hook(hook);
            true
        }
        None => false,
    }
}

fn describe(info: &PanicHookInfo<'_>) -> String {
    if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}

fn location_extra(info: &PanicHookInfo<'_>) -> Value {
    let mut extra = Map::new();
    if let Some(location) = info.location() {
        extra.insert("file".to_string(), Value::from(location.file()));
        extra.insert("line".to_string(), Value::from(location.line()));
    }
    Value::Object(extra)
}
