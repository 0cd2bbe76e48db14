//! Per-project HipChat options and the typed delivery configuration built from them.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

/// Option keys as stored by the host for each project
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const ROOM: &str = "room";
    pub const NOTIFY: &str = "notify";
    pub const INCLUDE_PROJECT_NAME: &str = "include_project_name";
    pub const ENDPOINT: &str = "endpoint";
}

// =============================================================================
// HipChat Options DTO
// =============================================================================

/// HipChat options as submitted for a project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HipchatOptions {
    /// HipChat API v2 token
    #[serde(default)]
    pub token: String,
    /// Room name or ID
    #[serde(default)]
    pub room: String,
    /// Notify message in chat window
    #[serde(default)]
    pub notify: bool,
    /// Include project name in message
    #[serde(default)]
    pub include_project_name: bool,
    /// Custom API endpoint to send notifications to
    #[serde(default)]
    pub endpoint: Option<String>,
}

// =============================================================================
// Notification Config
// =============================================================================

/// Delivery configuration for a single event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    /// URL template with a `{room}` (or legacy `%s`) placeholder
    pub endpoint: String,
    pub auth_token: String,
    pub room_id: String,
    pub notify: bool,
    pub include_project_name: bool,
    pub timeout: Duration,
}

impl NotificationConfig {
    /// Creates a config with default endpoint, flags and timeout
    pub fn new(auth_token: impl Into<String>, room_id: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            auth_token: auth_token.into(),
            room_id: room_id.into(),
            notify: false,
            include_project_name: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Both token and room must be set before anything is sent
    pub fn is_configured(&self) -> bool {
        !self.auth_token.is_empty() && !self.room_id.is_empty()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_notify(mut self, notify: bool) -> Self {
        self.notify = notify;
        self
    }

    pub fn with_project_name(mut self, include_project_name: bool) -> Self {
        self.include_project_name = include_project_name;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
