use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;
use super::mouse_events;
use crate::clipboard;
use crate::filter::filter_events;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            let event = event::read()?;
            self.handle_event(event);
        }
        Ok(())
    }

    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                // Release events only arrive with keyboard enhancement, and only the
                // modifier cares about them.
                if filter_events::handle_modifier_key(self, key_event) {
                    self.mark_dirty();
                    return;
                }
                // Held keys arrive as Repeat once keyboard enhancement is enabled
                if matches!(key_event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    self.handle_key_event(key_event);
                    self.mark_dirty();
                }
            }
            Event::Mouse(mouse_event) => {
                mouse_events::handle_mouse_event(self, mouse_event);
                self.mark_dirty();
            }
            Event::FocusLost => {
                filter_events::handle_focus_lost(self);
                self.mark_dirty();
            }
            Event::Paste(text) => {
                filter_events::handle_paste(self, &text);
                self.mark_dirty();
            }
            Event::Resize(_, _) => self.mark_dirty(),
            Event::FocusGained => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.abort();
            return;
        }

        if !self.filter.is_open()
            && clipboard::clipboard_events::handle_clipboard_key(self, key, self.clipboard_backend)
        {
            return;
        }

        if filter_events::handle_filter_key(self, key) {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
