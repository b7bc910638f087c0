// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persistent key/value settings for the inspector frontend.

use alloc::string::String;

use hashbrown::HashMap;

/// Storage for frontend settings such as dock side or the last selected panel.
///
/// Hosts usually back this with their own preferences store. Keys and values
/// are opaque strings chosen by the frontend.
pub trait SettingsStore {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

/// A [`SettingsStore`] that keeps everything in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl MemorySettings {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes every stored value.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(existing) = self.values.get_mut(key) {
            existing.clear();
            existing.push_str(value);
        } else {
            self.values.insert(key.into(), value.into());
        }
    }
}
