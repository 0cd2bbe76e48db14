//! Event contexts handed to the notifier by the host event system.

/// A project-level alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertContext {
    pub project_name: String,
    pub message: String,
    /// Absolute URL to the alert, produced by the host
    pub url: String,
}

/// An error occurrence grouped under a tracked issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueContext {
    pub project_name: String,
    /// Severity level as displayed by the host (e.g. "error", "Warning")
    pub level: String,
    pub error_text: String,
    /// URL to the issue in the dashboard
    pub url: String,
}

/// The event being notified; exactly one variant exists per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventContext {
    Alert(AlertContext),
    Issue(IssueContext),
}

impl EventContext {
    pub fn project_name(&self) -> &str {
        match self {
            EventContext::Alert(alert) => &alert.project_name,
            EventContext::Issue(issue) => &issue.project_name,
        }
    }
}

impl From<AlertContext> for EventContext {
    fn from(alert: AlertContext) -> Self {
        EventContext::Alert(alert)
    }
}

impl From<IssueContext> for EventContext {
    fn from(issue: IssueContext) -> Self {
        EventContext::Issue(issue)
    }
}
