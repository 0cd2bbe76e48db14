//! HipChat notification delivery.
//!
//! This module formats events into HTML chat messages and posts them to a
//! HipChat room. The HTTP transport and the failure log are injected through
//! traits so that delivery can be exercised without a network.

pub mod hipchat;
pub mod message;
pub mod transport;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::models::{AlertContext, IssueContext};

pub use hipchat::{build_url, HipchatNotifier};
pub use message::{build, escape_html};
pub use transport::ReqwestTransport;

// =============================================================================
// Outgoing Request
// =============================================================================

/// A fully built notification request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingRequest {
    /// Endpoint with room substituted and `auth_token` appended
    pub url: String,
    /// Serialized JSON body
    pub body: Vec<u8>,
    pub timeout: Duration,
}

// =============================================================================
// Transport Trait
// =============================================================================

/// Sends a JSON POST and reports the response status code.
///
/// Implementations must apply `request.timeout` to each call individually.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, request: &OutgoingRequest) -> Result<u16, TransportError>;
}

// =============================================================================
// Delivery Logger
// =============================================================================

/// Sink for delivery failures
pub trait DeliveryLogger: Send + Sync {
    fn error(&self, message: &str);
}

/// Forwards delivery failures to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDeliveryLogger;

impl DeliveryLogger for LogDeliveryLogger {
    fn error(&self, message: &str) {
        log::error!(target: "hipchat", "{}", message);
    }
}

// =============================================================================
// Event Hooks
// =============================================================================

/// Entry points called by the host event system.
///
/// Delivery is best-effort: implementations log failures and never report
/// them back to the host.
#[async_trait]
pub trait NotificationHooks: Send + Sync {
    /// An alert occurred in a project
    async fn on_alert(&self, alert: &AlertContext);

    /// A notify-worthy event occurred for an issue
    async fn on_issue_event(&self, issue: &IssueContext);
}
