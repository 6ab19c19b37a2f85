use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::reading::Phase;
use crate::ui::theme::colors;

/// Column the current word is centered inside.
pub const WORD_COLUMN_WIDTH: usize = 30;

const PROGRESS_BAR_CELLS: usize = 20;

/// The big center word. Shows "Done!" once the sequence completes and a
/// blank card while nothing is loaded.
pub fn render_word_display(word: Option<&str>, phase: Phase) -> Paragraph<'static> {
    let (text, style) = match (phase, word) {
        (Phase::Completed, _) => (
            "Done!".to_string(),
            Style::default()
                .fg(colors::accent())
                .add_modifier(Modifier::BOLD),
        ),
        (_, Some(word)) => (
            word.to_string(),
            Style::default()
                .fg(colors::text())
                .add_modifier(Modifier::BOLD),
        ),
        (_, None) => (String::new(), Style::default().fg(colors::dimmed())),
    };

    // Manual centering keeps the word steady as its width changes
    let pad = WORD_COLUMN_WIDTH.saturating_sub(text.width()) / 2;
    let mut spans = vec![Span::raw(" ".repeat(pad))];
    spans.push(Span::styled(text, style));

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .style(Style::default().bg(colors::background()))
}

pub fn render_context_left(words: &[String]) -> Paragraph<'static> {
    Paragraph::new(words.join(" ")).alignment(Alignment::Right).style(
        Style::default()
            .fg(colors::dimmed())
            .bg(colors::background()),
    )
}

pub fn render_context_right(words: &[String]) -> Paragraph<'static> {
    Paragraph::new(words.join(" ")).alignment(Alignment::Left).style(
        Style::default()
            .fg(colors::dimmed())
            .bg(colors::background()),
    )
}

/// Thin progress bar; `progress` is a percentage already clamped to 100.
pub fn render_progress_bar(progress: f64) -> Line<'static> {
    let filled = ((progress / 100.0) * PROGRESS_BAR_CELLS as f64) as usize;
    let filled = filled.min(PROGRESS_BAR_CELLS);

    let mut spans = Vec::with_capacity(PROGRESS_BAR_CELLS);
    for _ in 0..filled {
        spans.push(Span::styled("─", Style::default().fg(colors::accent())));
    }
    for _ in filled..PROGRESS_BAR_CELLS {
        spans.push(Span::styled("─", Style::default().fg(colors::dimmed())));
    }

    Line::from(spans).alignment(Alignment::Center)
}

/// "12 / 240  5%" counter under the progress bar.
pub fn render_progress_counts(current_index: usize, total_words: usize, progress: f64) -> Line<'static> {
    let position = if total_words == 0 {
        0
    } else {
        (current_index + 1).min(total_words)
    };
    let text = format!(
        "{} / {}  {}%",
        position,
        total_words,
        progress.round() as u64
    );
    Line::from(Span::styled(text, Style::default().fg(colors::dimmed())))
        .alignment(Alignment::Center)
}

/// WPM readout plus the numbered preset row, active preset highlighted.
pub fn render_speed_row(wpm: u32, presets: &[u32]) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{} WPM ", wpm),
        Style::default()
            .fg(colors::text())
            .add_modifier(Modifier::BOLD),
    )];

    for (slot, &preset) in presets.iter().enumerate() {
        let style = if preset == wpm {
            Style::default()
                .fg(colors::accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::dimmed())
        };
        spans.push(Span::styled(format!(" [{}] {}", slot + 1, preset), style));
    }

    Line::from(spans).alignment(Alignment::Center)
}

pub fn render_status_line(status: Option<&str>) -> Line<'static> {
    Line::from(Span::styled(
        status.unwrap_or("").to_string(),
        Style::default().fg(colors::dimmed()),
    ))
    .alignment(Alignment::Center)
}

/// Keymap reminder shown on the reading screen.
pub fn render_key_hints(phase: Phase) -> Line<'static> {
    let hints = match phase {
        Phase::Playing => "space pause | up/down speed | left/right skip | esc back",
        Phase::Completed => "space read again | r restart | esc back",
        _ => "space play | r restart | up/down speed | left/right skip | esc back",
    };
    Line::from(Span::styled(
        hints.to_string(),
        Style::default().fg(colors::dimmed()),
    ))
    .alignment(Alignment::Center)
}

/// The command deck prompt line.
pub fn render_prompt(input_buffer: &str) -> Paragraph<'static> {
    let spans = vec![
        Span::styled("> ", Style::default().fg(colors::accent())),
        Span::styled(input_buffer.to_string(), Style::default().fg(colors::text())),
        Span::styled("█", Style::default().fg(colors::dimmed())),
    ];
    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .style(Style::default().bg(colors::background()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_display_handles_missing_word() {
        // Must not panic on empty/completed phases
        let _ = render_word_display(None, Phase::Empty);
        let _ = render_word_display(None, Phase::Completed);
        let _ = render_word_display(Some("hello"), Phase::Playing);
    }

    #[test]
    fn test_progress_counts_empty_sequence() {
        let line = render_progress_counts(0, 0, 0.0);
        assert_eq!(line.spans[0].content, "0 / 0  0%");
    }

    #[test]
    fn test_progress_counts_at_completion() {
        // Cursor sits one past the end; position display stays at total
        let line = render_progress_counts(4, 4, 100.0);
        assert_eq!(line.spans[0].content, "4 / 4  100%");
    }

    #[test]
    fn test_speed_row_highlights_active_preset() {
        let line = render_speed_row(300, &[200, 300, 500, 700]);
        // WPM readout plus one span per preset
        assert_eq!(line.spans.len(), 5);
        assert!(line.spans[2].content.contains("300"));
    }
}
