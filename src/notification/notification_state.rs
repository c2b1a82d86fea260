//! Notification state management
//!
//! Provides structures for displaying transient notifications in the UI.

use ratatui::style::Color;
use std::time::{Duration, Instant};

/// Notification type - determines style and duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Info (gray) - short duration (1.5s) - for confirmations like "Copied selection!"
    #[default]
    Info,
    /// Warning (yellow) - long duration (10s) - for warnings like invalid config
    Warning,
}

impl NotificationType {
    fn duration(self) -> Duration {
        match self {
            NotificationType::Info => Duration::from_millis(1500),
            NotificationType::Warning => Duration::from_secs(10),
        }
    }

    fn style(self) -> NotificationStyle {
        match self {
            NotificationType::Info => NotificationStyle {
                fg: Color::White,
                bg: Color::DarkGray,
                border: Color::Gray,
            },
            NotificationType::Warning => NotificationStyle {
                fg: Color::Black,
                bg: Color::Yellow,
                border: Color::Yellow,
            },
        }
    }
}

/// Style configuration for a notification
#[derive(Debug, Clone)]
pub struct NotificationStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

/// A single notification with message, timing, and style
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub style: NotificationStyle,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn with_type(message: &str, notification_type: NotificationType) -> Self {
        Self {
            message: message.to_string(),
            style: notification_type.style(),
            notification_type,
            created_at: Instant::now(),
            duration: notification_type.duration(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// Notification state manager for the application
///
/// Expiry is checked on render, so nothing fires once the app is gone.
#[derive(Debug, Default)]
pub struct NotificationState {
    pub current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an info notification (gray, 1.5s)
    pub fn show(&mut self, message: &str) {
        self.current = Some(Notification::with_type(message, NotificationType::Info));
    }

    /// Show a warning notification (yellow, 10s)
    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Notification::with_type(message, NotificationType::Warning));
    }

    /// Clear expired notification, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(ref notif) = self.current
            && notif.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }
}
