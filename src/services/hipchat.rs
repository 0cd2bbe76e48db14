//! HipChat service: the event hooks called by the host.
//!
//! For every event this service:
//! - reads the project's options fresh from the option store
//! - skips projects without a token or room
//! - builds the message and dispatches it once

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{AlertContext, DeliveryOutcome, EventContext, IssueContext, NotificationConfig};
use crate::services::notification::{message, HipchatNotifier, NotificationHooks};
use crate::services::options::OptionStore;

#[derive(Clone)]
pub struct HipchatService {
    store: Arc<dyn OptionStore>,
    notifier: HipchatNotifier,
    config: Config,
}

impl HipchatService {
    pub fn new(store: Arc<dyn OptionStore>, notifier: HipchatNotifier, config: Config) -> Self {
        Self {
            store,
            notifier,
            config,
        }
    }

    /// Loads the delivery configuration for a project
    pub fn project_config(&self, project: &str) -> NotificationConfig {
        NotificationConfig::from_store(self.store.as_ref(), project, &self.config)
    }

    /// A project is configured once both token and room are set
    pub fn is_configured(&self, project: &str) -> bool {
        self.project_config(project).is_configured()
    }

    /// Builds and sends the notification for an event.
    ///
    /// Returns `Ok(None)` when the project is not configured; nothing is sent
    /// in that case.
    pub async fn notify(&self, context: &EventContext) -> AppResult<Option<DeliveryOutcome>> {
        let project = context.project_name();
        let config = self.project_config(project);

        if !config.is_configured() {
            log::debug!("HipChat not configured for project {}, skipping", project);
            return Ok(None);
        }

        let message =
            message::build(context, config.include_project_name).with_notify(config.notify);
        let outcome = self.notifier.send(&message, &config).await?;

        if outcome.is_success() {
            log::debug!("HipChat notification sent for project {}", project);
        }

        Ok(Some(outcome))
    }

    async fn notify_and_log(&self, context: EventContext) {
        if let Err(e) = self.notify(&context).await {
            self.notifier.logger().error(&format!(
                "Failed to send HipChat notification for project {}: {}",
                context.project_name(),
                e
            ));
        }
    }
}

#[async_trait]
impl NotificationHooks for HipchatService {
    async fn on_alert(&self, alert: &AlertContext) {
        self.notify_and_log(EventContext::Alert(alert.clone())).await;
    }

    async fn on_issue_event(&self, issue: &IssueContext) {
        self.notify_and_log(EventContext::Issue(issue.clone())).await;
    }
}
