use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Terminal,
};

use crate::app::{App, AppMode, RenderState};
use crate::ui::render::{
    render_context_left, render_context_right, render_key_hints, render_progress_bar,
    render_progress_counts, render_prompt, render_speed_row, render_status_line,
    render_word_display,
};
use crate::ui::terminal_guard::TerminalGuard;

const RENDER_TICK: Duration = Duration::from_millis(1000 / 60);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Main event loop.
    ///
    /// The poll timeout is the time until the player's next tick deadline
    /// (capped at the render cadence), so key presses mid-interval never
    /// stretch a word's display time. On timeout expiry the player ticks if
    /// its deadline has actually passed.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let mut last_render = Instant::now() - RENDER_TICK;

        loop {
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            let now = Instant::now();
            let poll_timeout = app
                .player
                .next_tick_in(now)
                .map_or(RENDER_TICK, |until_tick| until_tick.min(RENDER_TICK));

            match event::poll(poll_timeout) {
                Ok(true) => {
                    if let Event::Key(key) = event::read()? {
                        if key.kind == KeyEventKind::Press {
                            app.handle_key(key);
                        }
                    }
                }
                Ok(false) => {
                    app.player.tick_if_due(Instant::now());
                }
                Err(e) => return Err(e),
            }

            if last_render.elapsed() >= RENDER_TICK {
                self.render_frame(app)?;
                last_render = Instant::now();
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.get_render_state();

        self.terminal.draw(|frame| {
            match state.mode {
                AppMode::Reading => draw_reader(frame, &state),
                _ => draw_command_deck(frame, &state),
            };
        })?;

        Ok(())
    }
}

fn draw_reader(frame: &mut ratatui::Frame<'_>, state: &RenderState) {
    let area = frame.area();

    // Word row in the vertical middle, chrome stacked underneath
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1), // word row
            Constraint::Min(1),
            Constraint::Length(1), // progress bar
            Constraint::Length(1), // counts
            Constraint::Length(1), // speed row
            Constraint::Length(1), // hints
            Constraint::Length(1), // status
        ])
        .split(area);

    let word_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(crate::ui::render::WORD_COLUMN_WIDTH as u16),
            Constraint::Percentage(40),
        ])
        .split(rows[1]);

    frame.render_widget(render_context_left(&state.context_left), word_row[0]);
    frame.render_widget(
        render_word_display(state.current_word.as_deref(), state.phase),
        word_row[1],
    );
    frame.render_widget(render_context_right(&state.context_right), word_row[2]);

    frame.render_widget(render_progress_bar(state.progress), rows[3]);
    frame.render_widget(
        render_progress_counts(state.current_index, state.total_words, state.progress),
        rows[4],
    );
    frame.render_widget(render_speed_row(state.wpm, &state.wpm_presets), rows[5]);
    frame.render_widget(render_key_hints(state.phase), rows[6]);
    frame.render_widget(render_status_line(state.status.as_deref()), rows[7]);
}

fn draw_command_deck(frame: &mut ratatui::Frame<'_>, state: &RenderState) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1), // title
            Constraint::Length(1),
            Constraint::Length(1), // prompt
            Constraint::Min(1),
            Constraint::Length(1), // status
        ])
        .split(area);

    let title = Paragraph::new("quickread — RSVP speed reader")
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(title, rows[1]);

    frame.render_widget(render_prompt(&state.input_buffer), rows[3]);
    frame.render_widget(render_status_line(state.status.as_deref()), rows[5]);
}
