pub mod hipchat;
pub mod notification;
pub mod options;

pub use hipchat::HipchatService;
pub use notification::{
    DeliveryLogger, HipchatNotifier, LogDeliveryLogger, NotificationHooks, OutgoingRequest,
    ReqwestTransport, Transport,
};
pub use options::{InMemoryOptionStore, OptionStore};
