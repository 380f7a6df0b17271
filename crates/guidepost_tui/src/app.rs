//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use guidepost_core::{Guide, GuideKind};
use guidepost_error::NavigationError;
use guidepost_navigator::{NavCommand, StepNavigator, Transition};
use std::sync::Arc;
use tracing::{debug, instrument};

/// TUI application state.
pub struct App {
    /// Navigation engine for the loaded guide
    pub navigator: StepNavigator,
    /// Highlighted row of the hub menu
    pub hub_cursor: usize,
    /// Whether the current step's info panel is open
    pub show_info: bool,
    /// Status message shown in the status bar
    pub status_message: String,
    /// First visible line of the step body
    pub scroll: u16,
    /// Largest useful scroll offset, recorded by the last draw
    pub max_scroll: u16,
    /// Height of the step body at the last draw
    pub page_height: u16,
    /// Set when the app should exit
    pub should_quit: bool,
}

impl App {
    /// Create an app for a guide.
    ///
    /// Decks open on their first slide; guides open on the hub.
    pub fn new(guide: Arc<Guide>) -> Self {
        let mut navigator = StepNavigator::new(guide);
        navigator.start();
        let status_message = if navigator.state().is_in_hub() {
            "Pick a section".to_string()
        } else {
            String::new()
        };

        Self {
            navigator,
            hub_cursor: 0,
            show_info: false,
            status_message,
            scroll: 0,
            max_scroll: 0,
            page_height: 0,
            should_quit: false,
        }
    }

    /// Enter a section directly, skipping the hub.
    pub fn enter_section(&mut self, section_id: &str) -> Result<(), NavigationError> {
        let transition = self.navigator.try_select_section(section_id)?;
        self.after_transition(&transition);
        Ok(())
    }

    /// Returns true if the loaded guide is a linear deck.
    pub fn is_deck(&self) -> bool {
        *self.navigator.guide().kind() == GuideKind::Deck
    }

    /// Handle a key event.
    ///
    /// Only key presses are acted on. Repeat and release events are dropped
    /// so one physical press moves exactly one step.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if let KeyCode::Char('q') = key.code {
            self.should_quit = true;
            return;
        }

        if self.navigator.state().is_in_hub() {
            self.handle_hub_key(key.code);
        } else {
            self.handle_step_key(key.code);
        }
    }

    fn handle_hub_key(&mut self, code: KeyCode) {
        let sections = self.navigator.guide().sections().len();
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.hub_cursor = self.hub_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.hub_cursor + 1 < sections {
                    self.hub_cursor += 1;
                }
            }
            KeyCode::Enter => self.apply(NavCommand::Choose(self.hub_cursor)),
            KeyCode::Char(c) => {
                if let Some(n) = choice_number(c) {
                    self.apply(NavCommand::Choose(n));
                }
            }
            KeyCode::Esc => self.status_message = "Press q to quit".to_string(),
            _ => {}
        }
    }

    fn handle_step_key(&mut self, code: KeyCode) {
        let command = match code {
            KeyCode::Right | KeyCode::Char('l') => NavCommand::Forward,
            KeyCode::Enter => NavCommand::Confirm,
            KeyCode::Left | KeyCode::Char('h') => NavCommand::Back,
            KeyCode::Esc => NavCommand::Exit,
            KeyCode::Down | KeyCode::Char('j') => return self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => return self.scroll_by(-1),
            KeyCode::PageDown => return self.scroll_page(1),
            KeyCode::PageUp => return self.scroll_page(-1),
            KeyCode::Home => {
                self.scroll = 0;
                return;
            }
            KeyCode::End => {
                self.scroll = self.max_scroll;
                return;
            }
            KeyCode::Char('i') => {
                self.toggle_info();
                return;
            }
            KeyCode::Char(c) => match choice_number(c) {
                Some(n) => NavCommand::Choose(n),
                None => return,
            },
            _ => return,
        };
        self.apply(command);
    }

    /// Send a command to the navigator and update view state.
    pub fn apply(&mut self, command: NavCommand) {
        if self.is_deck() && command == NavCommand::Exit {
            debug!("Leaving deck");
            self.should_quit = true;
            return;
        }

        if let Some(transition) = self.navigator.dispatch(command) {
            self.after_transition(&transition);
        }
    }

    /// Record the step body's size after a draw and clamp the scroll offset.
    pub fn set_viewport(&mut self, page_height: u16, max_scroll: u16) {
        self.page_height = page_height;
        self.max_scroll = max_scroll;
        self.scroll = self.scroll.min(max_scroll);
    }

    fn scroll_by(&mut self, delta: i32) {
        self.scroll = if delta < 0 {
            self.scroll.saturating_sub(delta.unsigned_abs() as u16)
        } else {
            self.scroll.saturating_add(delta as u16).min(self.max_scroll)
        };
    }

    fn scroll_page(&mut self, direction: i32) {
        let page = i32::from(self.page_height.saturating_sub(1).max(1));
        self.scroll_by(direction.signum() * page);
    }

    fn after_transition(&mut self, transition: &Transition) {
        self.show_info = false;
        self.scroll = 0;
        self.max_scroll = 0;

        if self.navigator.state().is_in_hub() {
            // Finishing a deck has nowhere else to go
            if self.is_deck() {
                self.should_quit = true;
                return;
            }
            if let Some(from) = transition.from() {
                let guide = self.navigator.guide();
                if let Some(index) = guide
                    .sections()
                    .iter()
                    .position(|s| s.id() == from.section())
                {
                    self.hub_cursor = index;
                }
            }
            self.status_message = "Back at the hub".to_string();
            return;
        }

        self.status_message = match self.navigator.progress() {
            Some(progress) => format!("Step {} of {}", progress.index + 1, progress.total),
            None => String::new(),
        };
    }

    fn toggle_info(&mut self) {
        let has_panel = self
            .navigator
            .current_step()
            .is_some_and(|step| step.info_panel().is_some());
        if has_panel {
            self.show_info = !self.show_info;
        } else {
            self.status_message = "No info panel on this step".to_string();
        }
    }
}

/// Maps `'1'..='9'` to a zero-based index.
fn choice_number(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(d @ 1..=9) => Some(d as usize - 1),
        _ => None,
    }
}
