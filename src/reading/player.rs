use std::time::{Duration, Instant};

use super::config::ReaderConfig;
use super::timer::{wpm_to_millis, TickTimer};
use super::tokenize::tokenize;

/// Where the player is in its lifecycle.
///
/// Derived from the player's fields rather than stored, so it can never
/// drift out of sync with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No words loaded
    Empty,
    /// Words loaded, timer idle, a current word exists
    Ready,
    /// Timer armed, words advancing
    Playing,
    /// Index one past the last word; resuming restarts from the top
    Completed,
}

/// RSVP playback engine: word sequence, cursor, pacing and the tick timer.
///
/// State is mutated only through these methods; every operation is total and
/// touches nothing beyond the player's own fields. `is_playing` is defined
/// as "the timer handle exists", which makes "at most one active timer" a
/// structural guarantee instead of a convention: pause, restart, reset,
/// reload and completion all drop the handle, and a rate change while
/// playing replaces it wholesale.
pub struct Player {
    words: Vec<String>,
    current_index: usize,
    wpm: u32,
    timer: Option<TickTimer>,
    config: ReaderConfig,
}

impl Player {
    pub fn new(config: ReaderConfig) -> Self {
        Self {
            words: Vec::new(),
            current_index: 0,
            wpm: config.default_wpm,
            timer: None,
            config,
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Replaces the word sequence with the tokenization of `text`.
    ///
    /// Stops playback and rewinds to the first word. Whitespace-only text
    /// degrades to an empty sequence, after which every other operation is a
    /// safe no-op.
    pub fn load_text(&mut self, text: &str) {
        self.timer = None;
        self.words = tokenize(text);
        self.current_index = 0;
    }

    /// Arms the tick timer at the current WPM interval.
    ///
    /// No-op on an empty sequence or when already playing. Playing again
    /// after completion rewinds to the first word.
    pub fn play(&mut self) {
        if self.words.is_empty() || self.timer.is_some() {
            return;
        }
        if self.current_index >= self.words.len() {
            self.current_index = 0;
        }
        self.timer = Some(TickTimer::arm(self.tick_interval()));
    }

    /// Stops the timer; the cursor stays where it is.
    pub fn pause(&mut self) {
        self.timer = None;
    }

    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Back to the first word, not playing. Valid from any phase.
    pub fn restart(&mut self) {
        self.timer = None;
        self.current_index = 0;
    }

    /// Clears everything back to the freshly-constructed state.
    pub fn reset(&mut self) {
        self.timer = None;
        self.words.clear();
        self.current_index = 0;
    }

    /// Sets the rate, clamped to the configured range.
    ///
    /// While playing, the old timer is replaced by a fresh one at the new
    /// interval: the tick phase restarts, no partial-tick carryover, still
    /// exactly one timer.
    pub fn set_wpm(&mut self, wpm: u32) {
        let range = &self.config.wpm_range;
        self.wpm = wpm.clamp(*range.start(), *range.end());
        if self.timer.is_some() {
            self.timer = Some(TickTimer::arm(self.tick_interval()));
        }
    }

    /// Relative rate change (the keyboard speed-up/speed-down path).
    pub fn adjust_wpm(&mut self, delta: i32) {
        let target = i64::from(self.wpm) + i64::from(delta);
        self.set_wpm(target.clamp(0, i64::from(u32::MAX)) as u32);
    }

    /// Jumps ahead by the configured skip distance, clamped to the last word.
    /// Never touches the timer.
    pub fn skip_forward(&mut self) {
        if self.words.is_empty() {
            return;
        }
        let distance = self.config.skip_words;
        self.current_index = (self.current_index + distance).min(self.words.len() - 1);
    }

    /// Jumps back by the configured skip distance, clamped to the first word.
    /// Never touches the timer.
    pub fn skip_backward(&mut self) {
        self.current_index = self.current_index.saturating_sub(self.config.skip_words);
    }

    /// Moves the cursor to `index`, clamped to the valid word range.
    /// No-op on an empty sequence; never touches the timer.
    pub fn go_to_index(&mut self, index: usize) {
        if self.words.is_empty() {
            return;
        }
        self.current_index = index.min(self.words.len() - 1);
    }

    /// One scheduler firing: advance the cursor by a single word.
    ///
    /// Advancing past the last word parks the cursor one past the end (the
    /// completion encoding `is_complete` is derived from) and drops the
    /// timer. No-op unless playing.
    pub fn tick(&mut self) {
        if self.timer.is_none() {
            return;
        }
        let next = self.current_index + 1;
        if next >= self.words.len() {
            self.current_index = self.words.len();
            self.timer = None;
        } else {
            self.current_index = next;
        }
    }

    /// Ticks once if the timer deadline has passed, rearming for the next
    /// firing. Returns whether a tick happened.
    pub fn tick_if_due(&mut self, now: Instant) -> bool {
        let due = self.timer.is_some_and(|timer| timer.is_due(now));
        if due {
            if let Some(timer) = self.timer.as_mut() {
                timer.rearm();
            }
            self.tick();
        }
        due
    }

    /// Poll timeout for the event loop: time until the next tick, `None`
    /// when not playing.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.timer.map(|timer| timer.time_remaining(now))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(wpm_to_millis(self.wpm))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The word under the cursor; `None` when empty or completed.
    pub fn current_word(&self) -> Option<&str> {
        self.words.get(self.current_index).map(String::as_str)
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    pub fn is_complete(&self) -> bool {
        !self.words.is_empty() && self.current_index >= self.words.len()
    }

    /// Fraction of the sequence behind the cursor, as a percentage.
    /// Presentation layers clamp the displayed value to 100.
    pub fn progress(&self) -> f64 {
        if self.words.is_empty() {
            0.0
        } else {
            (self.current_index as f64 / self.words.len() as f64) * 100.0
        }
    }

    pub fn phase(&self) -> Phase {
        if self.words.is_empty() {
            Phase::Empty
        } else if self.timer.is_some() {
            Phase::Playing
        } else if self.current_index >= self.words.len() {
            Phase::Completed
        } else {
            Phase::Ready
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(ReaderConfig::default())
    }
}
