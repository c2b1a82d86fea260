//! Notification rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

/// Render the notification overlay in the top-right corner of the frame
///
/// Called after the main UI so the notification appears on top.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };

    let width = notif.message.chars().count() as u16 + 4;
    let height = 3;
    let frame_area = frame.area();
    let margin = 1;

    let area = Rect {
        x: frame_area.width.saturating_sub(width + margin),
        y: margin,
        width: width.min(frame_area.width.saturating_sub(margin * 2)),
        height: height.min(frame_area.height.saturating_sub(margin * 2)),
    };

    if area.width < 5 || area.height < 3 {
        return;
    }

    popup::clear_area(frame, area);

    let style = &notif.style;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}
