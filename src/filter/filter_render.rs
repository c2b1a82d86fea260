use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::filter_state::FilterState;
use super::focus::FocusTarget;
use crate::theme;
use crate::widgets::{popup, scrollbar};

/// Columns taken by the checkbox (or single-mode mark) in front of each label
pub const CHECKBOX_WIDTH: u16 = 4;

const TRIGGER_HEIGHT: u16 = 3;
const TRIGGER_MIN_WIDTH: u16 = 24;
const MENU_MIN_WIDTH: u16 = 36;
const MAX_VISIBLE_ROWS: usize = 12;
const SEARCH_HEIGHT: u16 = 3;
const TOOLBAR_HEIGHT: u16 = 1;
const APPLY_LABEL: &str = " Apply ";
const CANCEL_LABEL: &str = " Cancel ";

/// Screen areas of the open menu, used for mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuRegions {
    pub menu: Rect,
    pub search: Option<Rect>,
    /// Inner area of the option list, one terminal row per option
    pub list: Rect,
    pub apply: Option<Rect>,
    pub cancel: Option<Rect>,
}

/// Render the toggle control showing the committed value
pub fn render_trigger(state: &FilterState, title: &str, frame: &mut Frame, area: Rect) -> Rect {
    let summary = state.summary();
    let arrow = if state.is_open() { "▴" } else { "▾" };
    let content_width = summary.chars().count() + title.chars().count() + 8;
    let trigger_area = Rect {
        x: area.x,
        y: area.y,
        width: clamp_to_u16(content_width)
            .max(TRIGGER_MIN_WIDTH)
            .min(area.width),
        height: TRIGGER_HEIGHT.min(area.height),
    };

    let border = if state.is_open() {
        theme::trigger::BORDER_EXPANDED
    } else {
        theme::trigger::BORDER
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", summary), Style::default().fg(theme::trigger::LABEL)),
        Span::styled(arrow, Style::default().fg(theme::trigger::ARROW)),
    ]);

    let trigger = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", title),
                Style::default().fg(theme::trigger::TITLE),
            ))
            .border_style(Style::default().fg(border)),
    );

    frame.render_widget(trigger, trigger_area);
    trigger_area
}

/// Render the list of committed identifiers below the trigger
pub fn render_committed(state: &FilterState, frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = if state.committed().is_empty() {
        vec![Line::from(Span::styled(
            " Nothing selected",
            Style::default().fg(theme::trigger::SELECTION_EMPTY),
        ))]
    } else {
        state
            .committed()
            .iter()
            .map(|value| {
                Line::from(Span::styled(
                    format!(" {}", value),
                    Style::default().fg(theme::trigger::SELECTION_ITEM),
                ))
            })
            .collect()
    };

    let pane = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Selected ({}) ", state.committed().len()))
            .border_style(Style::default().fg(theme::trigger::SELECTION_BORDER)),
    );
    frame.render_widget(pane, area);
}

/// Compute where the menu opens below the trigger
pub fn menu_area(state: &FilterState, trigger: Rect, frame_area: Rect) -> Rect {
    let longest_label = state
        .options()
        .iter()
        .map(|option| option.label.chars().count())
        .max()
        .unwrap_or(0);

    let width = clamp_to_u16(longest_label + CHECKBOX_WIDTH as usize + 4).max(MENU_MIN_WIDTH);

    let rows = state.options().len().clamp(1, MAX_VISIBLE_ROWS) as u16;
    let mut height = rows + 2;
    if state.searchable() {
        height += SEARCH_HEIGHT;
    }
    if state.mode().requires_apply() {
        height += TOOLBAR_HEIGHT;
    }

    popup::popup_below_anchor(trigger, width, height, frame_area)
}

/// Render the open menu anchored below the trigger
pub fn render_menu(
    state: &mut FilterState,
    frame: &mut Frame,
    trigger: Rect,
    frame_area: Rect,
) -> MenuRegions {
    let area = menu_area(state, trigger, frame_area);
    popup::clear_area(frame, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::menu::BACKGROUND)),
        area,
    );

    let search_height = if state.searchable() { SEARCH_HEIGHT } else { 0 };
    let toolbar_height = if state.mode().requires_apply() {
        TOOLBAR_HEIGHT
    } else {
        0
    };

    let layout = Layout::vertical([
        Constraint::Length(search_height),
        Constraint::Min(0),
        Constraint::Length(toolbar_height),
    ])
    .split(area);

    let search = if state.searchable() {
        render_search(state, frame, layout[0]);
        Some(layout[0])
    } else {
        None
    };

    let list = render_list(state, frame, layout[1]);

    let (apply, cancel) = if state.mode().requires_apply() {
        render_toolbar(frame, layout[2])
    } else {
        (None, None)
    };

    MenuRegions {
        menu: area,
        search,
        list,
        apply,
        cancel,
    }
}

fn render_search(state: &mut FilterState, frame: &mut Frame, area: Rect) {
    let textarea = state.search_textarea_mut();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::menu::SEARCH_BORDER))
            .style(Style::default().bg(theme::menu::BACKGROUND)),
    );
    textarea.set_style(
        Style::default()
            .fg(theme::menu::SEARCH_TEXT)
            .bg(theme::menu::BACKGROUND),
    );
    frame.render_widget(&*textarea, area);
}

fn render_list(state: &mut FilterState, frame: &mut Frame, area: Rect) -> Rect {
    let inner = popup::inset_rect(area, 1, 1);
    state.set_visible_count(inner.height as usize);

    let title = if state.mode().is_multiple() {
        format!(
            " {}/{} selected ",
            state.checked_option_count(),
            state.options().len()
        )
    } else {
        format!(" {} options ", state.visible_len())
    };

    let lines = build_rows(state, inner.width);
    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, Style::default().fg(theme::menu::COUNT)))
            .border_style(Style::default().fg(theme::menu::BORDER))
            .style(Style::default().bg(theme::menu::BACKGROUND)),
    );
    frame.render_widget(list, area);

    scrollbar::render_vertical_scrollbar_styled(
        frame,
        area,
        state.visible_len(),
        state.visible_count(),
        state.scroll_offset(),
        theme::menu::BORDER,
    );

    inner
}

fn build_rows(state: &FilterState, width: u16) -> Vec<Line<'static>> {
    if state.visible_len() == 0 {
        return vec![Line::from(Span::styled(
            " No matching options",
            Style::default().fg(theme::menu::EMPTY),
        ))];
    }

    let label_width = width.saturating_sub(CHECKBOX_WIDTH + 1) as usize;
    let focus = state.focus();
    let multiple = state.mode().is_multiple();

    state
        .visible_options()
        .enumerate()
        .skip(state.scroll_offset())
        .take(state.visible_count())
        .map(|(i, option)| {
            let checked = state.is_checked(&option.value);
            let row_focused = focus == FocusTarget::Row(i);

            let mark = if multiple {
                let text = if checked { "[x]" } else { "[ ]" };
                let style = if focus == FocusTarget::Checkbox(i) {
                    theme::menu::CHECKBOX_FOCUSED
                } else if checked {
                    Style::default().fg(theme::menu::CHECKBOX_CHECKED)
                } else {
                    Style::default().fg(theme::menu::CHECKBOX)
                };
                Span::styled(text, style)
            } else {
                let text = if checked { " ✓ " } else { "   " };
                Span::styled(text, Style::default().fg(theme::menu::SINGLE_MARK))
            };

            let label_style = if row_focused {
                Style::default()
                    .fg(theme::menu::ROW_FOCUSED_FG)
                    .bg(theme::menu::ROW_FOCUSED_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::menu::ROW_TEXT)
            };

            Line::from(vec![
                mark,
                Span::raw(" "),
                Span::styled(
                    format!(" {:<width$}", truncate_label(&option.label, label_width), width = label_width),
                    label_style,
                ),
            ])
        })
        .collect()
}

fn render_toolbar(frame: &mut Frame, area: Rect) -> (Option<Rect>, Option<Rect>) {
    if area.height == 0 {
        return (None, None);
    }

    let apply_width = APPLY_LABEL.chars().count() as u16;
    let cancel_width = CANCEL_LABEL.chars().count() as u16;
    let apply_x = area.right().saturating_sub(apply_width + 1);
    let cancel_x = apply_x.saturating_sub(cancel_width + 1);

    if cancel_x < area.x {
        return (None, None);
    }

    let apply = Rect::new(apply_x, area.y, apply_width, 1);
    let cancel = Rect::new(cancel_x, area.y, cancel_width, 1);

    frame.render_widget(
        Paragraph::new(CANCEL_LABEL).style(theme::menu::CANCEL_BUTTON),
        cancel,
    );
    frame.render_widget(
        Paragraph::new(APPLY_LABEL).style(theme::menu::APPLY_BUTTON),
        apply,
    );

    (Some(apply), Some(cancel))
}

/// Render the key hint line for the current filter state
pub fn render_hints(state: &FilterState, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    if state.is_multi_key_held() {
        spans.push(Span::styled(" MULTI ", theme::menu::MULTI_INDICATOR));
    }

    let hints: &[(&str, &str)] = if !state.is_open() {
        &[
            ("[Enter]", " Open  "),
            ("[Ctrl+Y]", " Copy  "),
            ("[q]", " Done  "),
            ("[Ctrl+C]", " Abort"),
        ]
    } else if state.mode().is_multiple() {
        &[
            ("[↑/↓]", " Navigate  "),
            ("[→]", " Checkbox  "),
            ("[Enter]", " Pick  "),
            ("[Ctrl+S]", " Apply  "),
            ("[Esc]", " Cancel"),
        ]
    } else if state.mode().requires_apply() {
        &[
            ("[↑/↓]", " Navigate  "),
            ("[Enter]", " Select  "),
            ("[Ctrl+S]", " Apply  "),
            ("[Esc]", " Cancel"),
        ]
    } else {
        &[
            ("[↑/↓]", " Navigate  "),
            ("[Enter]", " Pick  "),
            ("[Esc]", " Close"),
        ]
    };

    spans.push(Span::raw(" "));
    for (key, description) in hints {
        spans.push(Span::styled(*key, Style::default().fg(theme::hints::KEY)));
        spans.push(Span::styled(
            *description,
            Style::default().fg(theme::hints::DESCRIPTION),
        ));
    }

    let widget = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(theme::hints::BACKGROUND));
    frame.render_widget(widget, area);
}

fn clamp_to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn truncate_label(label: &str, max_width: usize) -> String {
    if label.chars().count() <= max_width {
        return label.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut truncated: String = label.chars().take(max_width - 1).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
#[path = "filter_render_tests.rs"]
mod filter_render_tests;
