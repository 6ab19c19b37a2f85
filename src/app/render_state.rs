use crate::app::mode::AppMode;
use crate::reading::{Phase, Player};

/// Immutable snapshot of everything the UI needs for one frame.
pub struct RenderState {
    pub mode: AppMode,
    pub phase: Phase,
    pub current_word: Option<String>,
    pub context_left: Vec<String>,
    pub context_right: Vec<String>,
    pub current_index: usize,
    pub total_words: usize,
    pub wpm: u32,
    pub wpm_presets: Vec<u32>,
    /// Percentage, already clamped to [0, 100] for display
    pub progress: f64,
    pub input_buffer: String,
    pub status: Option<String>,
}

impl RenderState {
    /// Snapshot for the command deck, where no words are loaded.
    pub fn empty(mode: AppMode, input_buffer: String, status: Option<String>) -> Self {
        Self {
            mode,
            phase: Phase::Empty,
            current_word: None,
            context_left: vec![],
            context_right: vec![],
            current_index: 0,
            total_words: 0,
            wpm: 0,
            wpm_presets: vec![],
            progress: 0.0,
            input_buffer,
            status,
        }
    }

    /// Snapshot of a loaded player, with `context_window` words of dimmed
    /// context either side of the cursor.
    pub fn from_player(
        mode: AppMode,
        player: &Player,
        context_window: usize,
        status: Option<String>,
    ) -> Self {
        let words = player.words();
        let current = player.current_index();
        let total = words.len();

        let start = current.saturating_sub(context_window);
        let left_end = current.min(total);
        let context_left = words[start..left_end].to_vec();

        // At completion the cursor sits one past the end; no right context
        let context_right = if current < total {
            let end = (current + context_window + 1).min(total);
            words[current + 1..end].to_vec()
        } else {
            vec![]
        };

        Self {
            mode,
            phase: player.phase(),
            current_word: player.current_word().map(str::to_string),
            context_left,
            context_right,
            current_index: current,
            total_words: total,
            wpm: player.wpm(),
            wpm_presets: player.config().wpm_presets.clone(),
            progress: player.progress().min(100.0),
            input_buffer: String::new(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::ReaderConfig;

    fn player_with(text: &str) -> Player {
        let mut player = Player::new(ReaderConfig::default());
        player.load_text(text);
        player
    }

    #[test]
    fn test_empty_snapshot() {
        let state = RenderState::empty(AppMode::Command, "> ".to_string(), None);
        assert_eq!(state.mode, AppMode::Command);
        assert_eq!(state.current_word, None);
        assert_eq!(state.total_words, 0);
        assert_eq!(state.progress, 0.0);
    }

    #[test]
    fn test_context_windows_around_cursor() {
        let mut player = player_with("a b c d e f g");
        player.go_to_index(3);
        let state = RenderState::from_player(AppMode::Reading, &player, 2, None);
        assert_eq!(state.current_word.as_deref(), Some("d"));
        assert_eq!(state.context_left, vec!["b", "c"]);
        assert_eq!(state.context_right, vec!["e", "f"]);
    }

    #[test]
    fn test_context_clipped_at_sequence_start() {
        let player = player_with("a b c d");
        let state = RenderState::from_player(AppMode::Reading, &player, 3, None);
        assert!(state.context_left.is_empty());
        assert_eq!(state.context_right, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_snapshot_at_completion() {
        let mut player = player_with("a b");
        player.play();
        player.tick();
        player.tick();
        let state = RenderState::from_player(AppMode::Reading, &player, 2, None);
        assert_eq!(state.current_word, None);
        assert_eq!(state.phase, Phase::Completed);
        assert!(state.context_right.is_empty());
        assert_eq!(state.context_left, vec!["a", "b"]);
        assert_eq!(state.progress, 100.0);
    }
}
