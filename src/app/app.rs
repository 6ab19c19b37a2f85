use crossterm::event::{KeyCode, KeyEvent};

use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::input;
use crate::reading::{format_reading_time, reading_time_secs, Phase, Player, ReaderConfig};

const HELP_TEXT: &str = "type text to read it | @file loads a file | @@ loads the clipboard | :q quits";

/// Words of dimmed context shown either side of the current word.
const CONTEXT_WINDOW: usize = 2;

/// Application core: outer mode machine plus the playback engine.
///
/// Key presses and deck commands are translated here; the player only ever
/// sees its own public operations.
pub struct App {
    mode: AppMode,
    pub player: Player,
    input_buffer: String,
    status: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(ReaderConfig::default())
    }

    pub fn with_config(config: ReaderConfig) -> Self {
        Self {
            mode: AppMode::Command,
            player: Player::new(config),
            input_buffer: String::new(),
            status: Some(HELP_TEXT.to_string()),
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ReadText(text) => self.start_reading(&text),
            AppEvent::LoadFile(path) => match input::load_file(&path) {
                Ok(text) => self.start_reading(&text),
                Err(err) => self.status = Some(err.to_string()),
            },
            AppEvent::LoadClipboard => match input::clipboard::load() {
                Ok(text) => self.start_reading(&text),
                Err(err) => self.status = Some(err.to_string()),
            },
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::Help => self.status = Some(HELP_TEXT.to_string()),
            AppEvent::Warning(message) => self.status = Some(message),
            AppEvent::InvalidCommand(cmd) => {
                self.status = Some(format!("unknown command: {cmd} (:h for help)"));
            }
            AppEvent::None => {}
        }
    }

    /// Loads `text` into the player and switches to the reading screen.
    ///
    /// Text that tokenizes to nothing keeps the app on the command deck.
    pub fn start_reading(&mut self, text: &str) {
        self.player.load_text(text);
        if self.player.phase() == Phase::Empty {
            self.status = Some("nothing to read in that input".to_string());
            return;
        }
        let secs = reading_time_secs(self.player.word_count(), self.player.wpm());
        self.status = Some(format!(
            "{} words, about {} at {} WPM",
            self.player.word_count(),
            format_reading_time(secs),
            self.player.wpm()
        ));
        self.mode = AppMode::Reading;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            AppMode::Command => self.handle_command_key(key),
            AppMode::Reading => self.handle_reading_key(key),
            AppMode::Quit => {}
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Esc => self.input_buffer.clear(),
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.input_buffer);
                let command = crate::ui::parse_command(&line);
                let event = crate::ui::command_to_app_event(command);
                self.handle_event(event);
            }
            _ => {}
        }
    }

    fn handle_reading_key(&mut self, key: KeyEvent) {
        let step = self.player.config().wpm_step as i32;
        match key.code {
            KeyCode::Char(' ') => self.player.toggle(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.player.restart(),
            KeyCode::Up => self.player.adjust_wpm(step),
            KeyCode::Down => self.player.adjust_wpm(-step),
            KeyCode::Right => self.player.skip_forward(),
            KeyCode::Left => self.player.skip_backward(),
            KeyCode::Char('g') => self.player.go_to_index(0),
            KeyCode::Char('G') => {
                let last = self.player.word_count().saturating_sub(1);
                self.player.go_to_index(last);
            }
            KeyCode::Char(c @ '1'..='9') => self.select_preset(c as usize - '1' as usize),
            KeyCode::Esc | KeyCode::Char('q') => {
                self.player.reset();
                self.status = Some(HELP_TEXT.to_string());
                self.mode = AppMode::Command;
            }
            _ => {}
        }
    }

    fn select_preset(&mut self, slot: usize) {
        if let Some(&wpm) = self.player.config().wpm_presets.get(slot) {
            self.player.set_wpm(wpm);
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        match self.mode {
            AppMode::Reading => RenderState::from_player(
                self.mode,
                &self.player,
                CONTEXT_WINDOW,
                self.status.clone(),
            ),
            _ => RenderState::empty(self.mode, self.input_buffer.clone(), self.status.clone()),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
