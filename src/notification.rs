//! Notification module for hyfi
//!
//! Displays transient messages such as config warnings and copy confirmations.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, NotificationType};
