//! Project option storage.
//!
//! The host owns per-project options; the notifier reads them through
//! [`OptionStore`] and turns them into a typed [`NotificationConfig`] for each
//! event.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{keys, HipchatOptions, NotificationConfig};

/// Read access to per-project option values
pub trait OptionStore: Send + Sync {
    fn get_option(&self, project: &str, key: &str) -> Option<Value>;
}

/// Option store held in memory
#[derive(Debug, Default)]
pub struct InMemoryOptionStore {
    options: RwLock<HashMap<String, HashMap<String, Value>>>,
}

impl InMemoryOptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a single option for a project
    pub fn set_option(&self, project: &str, key: &str, value: Value) -> AppResult<()> {
        let mut options = self
            .options
            .write()
            .map_err(|_| AppError::Internal("Option store lock poisoned".to_string()))?;

        options
            .entry(project.to_string())
            .or_default()
            .insert(key.to_string(), value);

        Ok(())
    }

    /// Replaces all HipChat options of a project
    pub fn set_options(&self, project: &str, input: &HipchatOptions) -> AppResult<()> {
        let mut values = HashMap::new();
        values.insert(keys::TOKEN.to_string(), Value::from(input.token.as_str()));
        values.insert(keys::ROOM.to_string(), Value::from(input.room.as_str()));
        values.insert(keys::NOTIFY.to_string(), Value::from(input.notify));
        values.insert(
            keys::INCLUDE_PROJECT_NAME.to_string(),
            Value::from(input.include_project_name),
        );
        if let Some(ref endpoint) = input.endpoint {
            values.insert(keys::ENDPOINT.to_string(), Value::from(endpoint.as_str()));
        }

        let mut options = self
            .options
            .write()
            .map_err(|_| AppError::Internal("Option store lock poisoned".to_string()))?;
        options.insert(project.to_string(), values);

        Ok(())
    }
}

impl OptionStore for InMemoryOptionStore {
    fn get_option(&self, project: &str, key: &str) -> Option<Value> {
        let options = self.options.read().ok()?;
        options.get(project)?.get(key).cloned()
    }
}

impl NotificationConfig {
    /// Reads a project's options into a delivery config.
    ///
    /// Missing flags are false and a missing or blank endpoint falls back to
    /// the installation default.
    pub fn from_store(store: &dyn OptionStore, project: &str, defaults: &Config) -> Self {
        let endpoint = string_option(store, project, keys::ENDPOINT)
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| defaults.default_endpoint.clone());

        Self {
            endpoint,
            auth_token: string_option(store, project, keys::TOKEN).unwrap_or_default(),
            room_id: string_option(store, project, keys::ROOM).unwrap_or_default(),
            notify: bool_option(store, project, keys::NOTIFY),
            include_project_name: bool_option(store, project, keys::INCLUDE_PROJECT_NAME),
            timeout: defaults.timeout,
        }
    }
}

fn string_option(store: &dyn OptionStore, project: &str, key: &str) -> Option<String> {
    match store.get_option(project, key)? {
        Value::String(s) => Some(s),
        // Room IDs are often saved as numbers
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn bool_option(store: &dyn OptionStore, project: &str, key: &str) -> bool {
    match store.get_option(project, key) {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => matches!(s.to_lowercase().as_str(), "true" | "1" | "on"),
        Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
        _ => false,
    }
}
