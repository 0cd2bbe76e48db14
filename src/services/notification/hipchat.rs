//! HipChat room notification dispatcher.
//!
//! Posts a [`ChatMessage`] to the room notification endpoint and classifies
//! the response status. Transport errors are returned to the caller.

use std::sync::Arc;

use super::{DeliveryLogger, LogDeliveryLogger, OutgoingRequest, Transport};
use crate::config::has_room_placeholder;
use crate::error::{AppError, AppResult};
use crate::models::{ChatMessage, DeliveryOutcome, HipchatOptions, NotificationConfig};

/// HipChat notification dispatcher
#[derive(Clone)]
pub struct HipchatNotifier {
    transport: Arc<dyn Transport>,
    logger: Arc<dyn DeliveryLogger>,
}

impl HipchatNotifier {
    /// Creates a notifier that logs failures through the `log` facade
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_logger(transport, Arc::new(LogDeliveryLogger))
    }

    pub fn with_logger(transport: Arc<dyn Transport>, logger: Arc<dyn DeliveryLogger>) -> Self {
        Self { transport, logger }
    }

    pub fn logger(&self) -> &dyn DeliveryLogger {
        self.logger.as_ref()
    }

    /// Sends one message. No retries are attempted.
    ///
    /// Returns `AppError::NotConfigured` without issuing a request when the
    /// token or room is empty, and `AppError::Validation` when the endpoint
    /// has no room placeholder.
    pub async fn send(
        &self,
        message: &ChatMessage,
        config: &NotificationConfig,
    ) -> AppResult<DeliveryOutcome> {
        if !config.is_configured() {
            return Err(AppError::NotConfigured);
        }

        // The token must never be posted to an endpoint without a room
        if !has_room_placeholder(&config.endpoint) {
            return Err(AppError::Validation(format!(
                "Endpoint '{}' has no {{room}} placeholder",
                config.endpoint
            )));
        }

        let request = Self::build_request(message, config)?;
        let status = self.transport.post_json(&request).await?;
        let outcome = DeliveryOutcome::from_status(status);

        match outcome {
            DeliveryOutcome::Success => {}
            DeliveryOutcome::AuthRejected => {
                self.logger.error("Security token not accepted for supplied room ID");
            }
            DeliveryOutcome::DeliveryFailed(code) => {
                self.logger.error(&format!(
                    "Event could not be sent to HipChat (HTTP {})",
                    code
                ));
            }
        }

        Ok(outcome)
    }

    fn build_request(
        message: &ChatMessage,
        config: &NotificationConfig,
    ) -> AppResult<OutgoingRequest> {
        let body = serde_json::to_vec(&message.to_payload())
            .map_err(|e| AppError::Internal(format!("Failed to serialize payload: {}", e)))?;

        Ok(OutgoingRequest {
            url: build_url(&config.endpoint, &config.room_id, &config.auth_token),
            body,
            timeout: config.timeout,
        })
    }

    /// Validate a project's HipChat options
    ///
    /// Called before options are saved for a project.
    pub fn validate_config(&self, config: &serde_json::Value) -> AppResult<()> {
        let options: HipchatOptions = serde_json::from_value(config.clone())
            .map_err(|e| AppError::Validation(format!("Invalid HipChat options: {}", e)))?;

        if options.token.trim().is_empty() {
            return Err(AppError::Validation(
                "HipChat API token is required".to_string(),
            ));
        }

        if options.room.trim().is_empty() {
            return Err(AppError::Validation(
                "HipChat room name or ID is required".to_string(),
            ));
        }

        let endpoint = match options.endpoint.as_deref().map(str::trim) {
            Some(endpoint) if !endpoint.is_empty() => endpoint,
            _ => return Ok(()),
        };

        if !has_room_placeholder(endpoint) {
            return Err(AppError::Validation(
                "Custom endpoint must contain a {room} placeholder".to_string(),
            ));
        }

        let parsed_url = url::Url::parse(&build_url(endpoint, "room", "token"))
            .map_err(|_| AppError::Validation("Invalid custom endpoint format".to_string()))?;

        if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
            return Err(AppError::Validation(
                "Custom endpoint must use HTTP or HTTPS".to_string(),
            ));
        }

        Ok(())
    }
}

/// Substitutes the room into the endpoint template and appends the token.
///
/// Both values are percent-encoded. Every `{room}` is replaced; `%s` is only
/// used when the template has no `{room}`.
pub fn build_url(endpoint: &str, room: &str, token: &str) -> String {
    let room = urlencoding::encode(room);
    let base = if endpoint.contains("{room}") {
        endpoint.replace("{room}", &room)
    } else {
        endpoint.replace("%s", &room)
    };
    let separator = if base.contains('?') { '&' } else { '?' };

    format!(
        "{}{}auth_token={}",
        base,
        separator,
        urlencoding::encode(token)
    )
}
