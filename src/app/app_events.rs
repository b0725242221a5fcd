use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;
use tui_textarea::Input;

use super::app_state::App;
use crate::host::SearchHost;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Every executed query counts as a successful search for the terminal host.
const TERMINAL_RESULT_COUNT: usize = 1;

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_paste_event(&mut self, text: String) {
        // Single-line query box
        let text = text.replace(['\r', '\n'], " ");
        self.input.insert_str(&text);
        self.selected = None;
        self.refresh_feed();
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,

            // Navigation: down moves away from the query box
            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_previous(),

            KeyCode::Enter => self.execute_selection_or_query(),

            KeyCode::Delete => self.remove_selected(),
            KeyCode::Char('d') if ctrl => self.remove_selected(),

            // Let TextArea handle all other input (chars, backspace, left/right arrows, etc.)
            _ => {
                if self.input.input(Input::from(key)) {
                    self.selected = None;
                    self.refresh_feed();
                }
            }
        }
    }

    fn select_next(&mut self) {
        let count = self.selectable_queries().len();
        if count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(idx) => (idx + 1).min(count - 1),
        });
        self.mark_dirty();
    }

    fn select_previous(&mut self) {
        self.selected = match self.selected {
            None | Some(0) => None,
            Some(idx) => Some(idx - 1),
        };
        self.mark_dirty();
    }

    fn execute_selection_or_query(&mut self) {
        if let Some(query) = self.selected_query() {
            self.recent.on_history_click(&query, &mut self.host);
            self.should_quit = true;
            return;
        }

        let query = self.query().trim().to_string();
        if query.is_empty() {
            return;
        }

        self.host.execute_query(&query);
        self.recent.on_query_success(&query, TERMINAL_RESULT_COUNT);
        self.should_quit = true;
    }

    fn remove_selected(&mut self) {
        let Some(query) = self.selected_query() else {
            return;
        };

        self.recent.on_remove_click(&query);
        if self.feed.is_some() {
            self.refresh_feed();
        }

        let remaining = self.selectable_queries().len();
        self.selected = match self.selected {
            _ if remaining == 0 => None,
            Some(idx) => Some(idx.min(remaining - 1)),
            None => None,
        };
        self.mark_dirty();
    }
}
