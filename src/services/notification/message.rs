//! Message builder.
//!
//! Turns an event into the HTML body shown in the room. Every user-controlled
//! field goes through [`escape_html`]; alert URLs come from the host and are
//! inserted as-is.

use crate::models::{AlertContext, ChatMessage, Color, EventContext, IssueContext};

/// Builds the chat message for an event.
///
/// The returned message has `notify` unset; callers attach it from the
/// project configuration with [`ChatMessage::with_notify`].
pub fn build(context: &EventContext, include_project_name: bool) -> ChatMessage {
    match context {
        EventContext::Alert(alert) => build_alert(alert, include_project_name),
        EventContext::Issue(issue) => build_issue(issue, include_project_name),
    }
}

/// `[ALERT] <strong>Project</strong> message https://...`
pub fn build_alert(alert: &AlertContext, include_project_name: bool) -> ChatMessage {
    let body = format!(
        "[ALERT]{} {} {}",
        project_segment(&alert.project_name, include_project_name),
        escape_html(&alert.message),
        alert.url
    );

    ChatMessage::new(body, Color::Red, false)
}

/// `[ERROR] <strong>Project</strong> text [<a href="...">view</a>]`
pub fn build_issue(issue: &IssueContext, include_project_name: bool) -> ChatMessage {
    let level = issue.level.to_uppercase();
    let body = format!(
        "[{}]{} {} [<a href=\"{}\">view</a>]",
        escape_html(&level),
        project_segment(&issue.project_name, include_project_name),
        escape_html(&issue.error_text),
        escape_html(&issue.url)
    );

    ChatMessage::new(body, Color::for_level(&level), false)
}

fn project_segment(project_name: &str, include: bool) -> String {
    if include {
        format!(" <strong>{}</strong>", escape_html(project_name))
    } else {
        String::new()
    }
}

/// Escapes HTML-significant characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
