//! Chat message models and the HipChat request body.

use serde::{Deserialize, Serialize};

/// Message format sent with every notification
pub const MESSAGE_FORMAT_HTML: &str = "html";

// =============================================================================
// Color
// =============================================================================

/// Background color of a HipChat notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Green,
    Purple,
}

impl Color {
    /// Maps a severity level to its color.
    ///
    /// The level is normalized to uppercase first; unknown levels are purple.
    pub fn for_level(level: &str) -> Self {
        match level.to_uppercase().as_str() {
            "ALERT" | "ERROR" => Color::Red,
            "WARNING" => Color::Yellow,
            "INFO" => Color::Green,
            "DEBUG" => Color::Purple,
            _ => Color::Purple,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Yellow => write!(f, "yellow"),
            Color::Green => write!(f, "green"),
            Color::Purple => write!(f, "purple"),
        }
    }
}

// =============================================================================
// Chat Message
// =============================================================================

/// A formatted message ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    html_body: String,
    color: Color,
    notify: bool,
}

impl ChatMessage {
    pub fn new(html_body: String, color: Color, notify: bool) -> Self {
        Self {
            html_body,
            color,
            notify,
        }
    }

    /// Returns the same message with the notify flag set
    pub fn with_notify(self, notify: bool) -> Self {
        Self { notify, ..self }
    }

    pub fn html_body(&self) -> &str {
        &self.html_body
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn notify(&self) -> bool {
        self.notify
    }

    /// Builds the JSON request body for this message
    pub fn to_payload(&self) -> NotificationPayload {
        NotificationPayload {
            message: self.html_body.clone(),
            notify: self.notify,
            color: self.color,
            message_format: MESSAGE_FORMAT_HTML.to_string(),
        }
    }
}

// =============================================================================
// Request Body
// =============================================================================

/// JSON body of a room notification request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub message: String,
    pub notify: bool,
    pub color: Color,
    pub message_format: String,
}

// =============================================================================
// Delivery Outcome
// =============================================================================

/// Classified result of a delivery attempt that received an HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// HTTP 204
    Success,
    /// HTTP 401: the token was not accepted for the room
    AuthRejected,
    /// Any other status
    DeliveryFailed(u16),
}

impl DeliveryOutcome {
    pub fn from_status(status: u16) -> Self {
        match status {
            204 => DeliveryOutcome::Success,
            401 => DeliveryOutcome::AuthRejected,
            code => DeliveryOutcome::DeliveryFailed(code),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DeliveryOutcome::Success)
    }
}
