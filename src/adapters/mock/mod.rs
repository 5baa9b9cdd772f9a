pub mod notification_service;
pub mod user_service;

pub use notification_service::{NotificationService, SentNotification};
pub use user_service::UserService;
