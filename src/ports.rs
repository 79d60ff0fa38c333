//! Interface definitions for the engine's external collaborators
//!
//! The controller never touches storage or the router directly; both are
//! injected so hosts can swap implementations and tests can observe
//! behavior without global state.

use std::collections::HashMap;

/// Synchronous key-value store for UI preferences.
///
/// Implementations degrade rather than fail: a broken backend should
/// behave like an empty store, since the preference is cosmetic.
pub trait PreferenceStore {
    /// Read the stored value for `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`. Best-effort; errors are swallowed by
    /// the implementation.
    fn set(&mut self, key: &str, value: &str);
}

/// Sink for navigation commands emitted when a leaf is activated.
///
/// The host's router owns URL matching and history; the engine only
/// hands over a target path and expects nothing back.
pub trait NavigationSink {
    fn navigate(&mut self, target: &str);
}

/// In-memory store for tests and stateless runs
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
