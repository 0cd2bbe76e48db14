pub mod event;
pub mod message;
pub mod options;

pub use event::{AlertContext, EventContext, IssueContext};
pub use message::{ChatMessage, Color, DeliveryOutcome, NotificationPayload, MESSAGE_FORMAT_HTML};
pub use options::{keys, HipchatOptions, NotificationConfig};
