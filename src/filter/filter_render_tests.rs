use super::*;
use crate::filter::{FilterProps, FocusDirection, SelectionMode};
use crate::options::FilterOption;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn create_state(mode: SelectionMode, searchable: bool, value: &[&str]) -> FilterState {
    FilterState::new(&FilterProps {
        options: vec![
            FilterOption::new("one", "Option One"),
            FilterOption::new("two", "Option Two"),
            FilterOption::new("three", "Option Three"),
        ],
        value: value.iter().map(|v| v.to_string()).collect(),
        mode,
        searchable,
    })
}

fn render_to_string(state: &mut FilterState, width: u16, height: u16) -> (String, Option<MenuRegions>) {
    let mut terminal = create_test_terminal(width, height);
    let mut regions = None;
    terminal
        .draw(|f| {
            let area = f.area();
            let trigger = render_trigger(state, "Project", f, area);
            if state.is_open() {
                regions = Some(render_menu(state, f, trigger, area));
            }
        })
        .unwrap();
    (terminal.backend().to_string(), regions)
}

#[test]
fn test_trigger_shows_summary_and_title() {
    let mut state = create_state(SelectionMode::Multiple, true, &["two"]);
    let (output, regions) = render_to_string(&mut state, 60, 20);

    assert!(output.contains("Project"));
    assert!(output.contains("Option Two"));
    assert!(output.contains("▾"));
    assert!(regions.is_none());
}

#[test]
fn test_trigger_shows_all_when_empty() {
    let mut state = create_state(SelectionMode::Multiple, true, &[]);
    let (output, _) = render_to_string(&mut state, 60, 20);
    assert!(output.contains("All"));
}

#[test]
fn test_open_menu_lists_rows_with_checkboxes() {
    let mut state = create_state(SelectionMode::Multiple, true, &["one"]);
    state.open();
    let (output, regions) = render_to_string(&mut state, 60, 24);

    assert!(output.contains("▴"));
    assert!(output.contains("[x]"));
    assert!(output.contains("[ ]"));
    assert!(output.contains("Option One"));
    assert!(output.contains("Option Three"));
    assert!(output.contains("1/3 selected"));
    assert!(output.contains("Apply"));
    assert!(output.contains("Cancel"));

    let regions = regions.unwrap();
    assert!(regions.search.is_some());
    assert!(regions.apply.is_some());
    assert!(regions.cancel.is_some());
}

#[test]
fn test_search_placeholder_shown() {
    let mut state = create_state(SelectionMode::Multiple, true, &[]);
    state.open();
    let (output, _) = render_to_string(&mut state, 60, 24);
    assert!(output.contains("Search…"));
}

#[test]
fn test_single_mode_has_no_checkboxes_or_toolbar() {
    let mut state = create_state(SelectionMode::Single { commit_on_select: true }, false, &["two"]);
    state.open();
    let (output, regions) = render_to_string(&mut state, 60, 24);

    assert!(!output.contains("[x]"));
    assert!(!output.contains("[ ]"));
    assert!(output.contains("✓"));
    assert!(!output.contains("Apply"));

    let regions = regions.unwrap();
    assert!(regions.search.is_none());
    assert!(regions.apply.is_none());
}

#[test]
fn test_list_region_has_one_line_per_row() {
    let mut state = create_state(SelectionMode::Multiple, true, &[]);
    state.open();
    let (_, regions) = render_to_string(&mut state, 60, 24);

    let regions = regions.unwrap();
    assert_eq!(regions.list.height, 3);
    assert_eq!(regions.list.y, regions.menu.y + SEARCH_HEIGHT + 1);
    assert_eq!(state.visible_count(), 3);
}

#[test]
fn test_no_matching_options_message() {
    let mut state = create_state(SelectionMode::Multiple, true, &[]);
    state.open();
    state.search("zzz");
    let (output, _) = render_to_string(&mut state, 60, 24);
    assert!(output.contains("No matching options"));
}

#[test]
fn test_hints_change_with_state() {
    let mut state = create_state(SelectionMode::Multiple, true, &[]);
    let mut terminal = create_test_terminal(100, 1);

    terminal
        .draw(|f| render_hints(&state, f, f.area()))
        .unwrap();
    assert!(terminal.backend().to_string().contains("Open"));

    state.open();
    state.move_focus(FocusDirection::IntoCheckbox);
    state.modifier_key_down();
    terminal
        .draw(|f| render_hints(&state, f, f.area()))
        .unwrap();
    let output = terminal.backend().to_string();
    assert!(output.contains("MULTI"));
    assert!(output.contains("Ctrl+S"));
}

#[test]
fn test_menu_area_clamped_to_frame() {
    let state = create_state(SelectionMode::Multiple, true, &[]);
    let trigger = Rect::new(0, 0, 24, 3);
    let area = menu_area(&state, trigger, Rect::new(0, 0, 20, 6));

    assert_eq!(area.y, 3);
    assert_eq!(area.width, 20);
    assert_eq!(area.height, 3);
}

#[test]
fn test_menu_area_with_very_long_label_saturates() {
    let mut state = FilterState::new(&FilterProps {
        options: vec![FilterOption::plain("x".repeat(65_530))],
        value: Vec::new(),
        mode: SelectionMode::Multiple,
        searchable: true,
    });

    let area = menu_area(&state, Rect::new(0, 0, 24, 3), Rect::new(0, 0, 80, 24));
    assert_eq!(area.width, 80);

    state.open();
    let (output, regions) = render_to_string(&mut state, 80, 24);
    assert!(output.contains('…'));
    assert_eq!(regions.unwrap().menu.width, 80);
}

#[test]
fn test_trigger_with_very_long_title_fits_area() {
    let state = create_state(SelectionMode::Multiple, true, &["one"]);
    let title = "t".repeat(70_000);
    let mut terminal = create_test_terminal(40, 3);
    let mut trigger = Rect::default();
    terminal
        .draw(|f| trigger = render_trigger(&state, &title, f, f.area()))
        .unwrap();

    assert_eq!(trigger.width, 40);
}

#[test]
fn test_truncate_label() {
    assert_eq!(truncate_label("Option One", 20), "Option One");
    assert_eq!(truncate_label("Option One", 7), "Option…");
    assert_eq!(truncate_label("Option One", 0), "");
}
