//! Vertical scrollbar for scrollable lists

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

/// Render a vertical scrollbar on the right border of the given area
///
/// Nothing is drawn when the content fits the viewport.
pub fn render_vertical_scrollbar_styled(
    frame: &mut Frame,
    area: Rect,
    total_items: usize,
    viewport_size: usize,
    scroll_offset: usize,
    color: Color,
) {
    if total_items <= viewport_size || viewport_size == 0 {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(color))
        .track_style(Style::default().fg(color));

    // Ratatui positions the thumb against content_length - 1, so pass max_scroll + 1
    // to let the thumb reach the bottom at max scroll.
    let max_scroll = total_items.saturating_sub(viewport_size);
    let mut state = ScrollbarState::new(max_scroll + 1)
        .position(scroll_offset.min(max_scroll))
        .viewport_content_length(viewport_size);

    frame.render_stateful_widget(scrollbar, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_string(total: usize, viewport: usize, offset: usize) -> String {
        let mut terminal = Terminal::new(TestBackend::new(5, 10)).unwrap();
        terminal
            .draw(|frame| {
                render_vertical_scrollbar_styled(
                    frame,
                    Rect::new(0, 0, 5, 10),
                    total,
                    viewport,
                    offset,
                    Color::White,
                );
            })
            .unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_not_rendered_when_content_fits() {
        let output = render_to_string(5, 10, 0);
        assert!(!output.contains('█'));
    }

    #[test]
    fn test_rendered_when_content_exceeds_viewport() {
        let output = render_to_string(30, 10, 0);
        assert!(output.contains('█'));
    }

    #[test]
    fn test_zero_viewport_renders_nothing() {
        let output = render_to_string(30, 0, 0);
        assert!(!output.contains('█'));
    }
}
