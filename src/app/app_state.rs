use crate::config::{ClipboardBackend, Config, ModifierKey};
use crate::filter::{CloseReason, FilterProps, FilterState};
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;

const DEFAULT_TITLE: &str = "Filter";

/// How the committed selection is printed on exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One identifier per line
    Lines,
    /// A JSON array of identifiers
    Json,
}

/// Owner of the committed selection and host of one filter
pub struct App {
    pub props: FilterProps,
    pub filter: FilterState,
    pub title: String,
    pub notification: NotificationState,
    pub layout_regions: LayoutRegions,
    pub clipboard_backend: ClipboardBackend,
    pub modifier: ModifierKey,
    pub close_on_focus_lost: bool,
    pub json_output: bool,
    pub output_mode: Option<OutputMode>,
    pub should_quit: bool,
    /// Number of change notifications received from the filter
    pub change_count: usize,
    pub needs_render: bool,
}

impl App {
    pub fn new(props: FilterProps, config: &Config) -> Self {
        let filter = FilterState::new(&props);

        Self {
            props,
            filter,
            title: DEFAULT_TITLE.to_string(),
            notification: NotificationState::new(),
            layout_regions: LayoutRegions::new(),
            clipboard_backend: config.clipboard.backend,
            modifier: config.filter.modifier,
            close_on_focus_lost: config.filter.close_on_focus_lost,
            json_output: false,
            output_mode: None,
            should_quit: false,
            change_count: 0,
            needs_render: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_json_output(mut self, json_output: bool) -> Self {
        self.json_output = json_output;
        self
    }

    /// Receive a change notification from the filter
    ///
    /// The new selection becomes the committed value and is re-supplied to the filter.
    pub fn on_change(&mut self, change: Option<Vec<String>>) {
        let Some(value) = change else {
            return;
        };

        #[cfg(debug_assertions)]
        log::debug!("Selection changed: {:?}", value);

        let message = match value.len() {
            0 => "Selection cleared".to_string(),
            1 => "Applied 1 selection".to_string(),
            n => format!("Applied {} selections", n),
        };
        self.notification.show(&message);

        self.props.value = value.clone();
        self.filter.set_value(value);
        self.change_count += 1;
    }

    /// Finish and print the committed selection
    pub fn quit(&mut self) {
        self.filter.close(CloseReason::Unmount);
        self.output_mode = Some(if self.json_output {
            OutputMode::Json
        } else {
            OutputMode::Lines
        });
        self.should_quit = true;
    }

    /// Finish without printing anything
    pub fn abort(&mut self) {
        self.filter.close(CloseReason::Unmount);
        self.output_mode = None;
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output_mode(&self) -> Option<OutputMode> {
        self.output_mode
    }

    pub fn committed_value(&self) -> &[String] {
        &self.props.value
    }

    /// Text printed to stdout after the terminal is restored
    pub fn format_output(&self) -> Result<Option<String>, serde_json::Error> {
        match self.output_mode {
            Some(OutputMode::Lines) => Ok(Some(self.props.value.join("\n"))),
            Some(OutputMode::Json) => serde_json::to_string(&self.props.value).map(Some),
            None => Ok(None),
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    /// Render when something changed or a notification is on screen and may expire
    pub fn should_render(&self) -> bool {
        self.needs_render || self.notification.current().is_some()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
