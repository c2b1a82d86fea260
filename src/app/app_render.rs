use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::app_state::App;
use crate::filter::filter_render;
use crate::notification::render_notification;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (trigger_area, pane_area, hints_area) = (layout[0], layout[1], layout[2]);

        let trigger_rect =
            filter_render::render_trigger(&self.filter, &self.title, frame, trigger_area);
        self.layout_regions.trigger = Some(trigger_rect);

        filter_render::render_committed(&self.filter, frame, pane_area);
        self.layout_regions.selection_pane = Some(pane_area);

        filter_render::render_hints(&self.filter, frame, hints_area);

        if self.filter.is_open() {
            // The menu may overlap the selection pane but never the hint line
            let menu_bounds = Rect {
                height: frame.area().height.saturating_sub(hints_area.height),
                ..frame.area()
            };
            let regions =
                filter_render::render_menu(&mut self.filter, frame, trigger_rect, menu_bounds);
            self.layout_regions.set_menu(regions);
        }

        render_notification(frame, &mut self.notification);
    }
}
