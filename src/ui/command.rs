//! Command-deck input parsing.
//!
//! The deck accepts:
//! - `:q` or `:quit` → quit
//! - `:h` or `:help` → help
//! - `@path/to/file.txt` → load a file
//! - `@@` → load the clipboard
//! - anything else non-empty → literal text to read

use crate::app::AppEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    LoadFile(String),
    LoadClipboard,
    ReadText(String),
    Unknown(String),
    Empty,
}

/// Parse one line of command-deck input.
pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Command::Empty;
    }

    if let Some(cmd) = trimmed.strip_prefix(':') {
        match cmd {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            _ => Command::Unknown(trimmed.to_string()),
        }
    } else if let Some(rest) = trimmed.strip_prefix('@') {
        let path = rest.trim();
        if path.is_empty() || path == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(path.to_string())
        }
    } else {
        // Bare input is the text itself, same as pasting into the box
        Command::ReadText(input.to_string())
    }
}

/// Translation layer between deck input and the App core.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::ReadText(text) => AppEvent::ReadText(text),
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
        Command::Empty => AppEvent::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_command(":h"), Command::Help);
        assert_eq!(parse_command(":help"), Command::Help);
    }

    #[test]
    fn test_parse_load_file() {
        assert_eq!(
            parse_command("@notes.txt"),
            Command::LoadFile("notes.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_file_with_spaces() {
        assert_eq!(
            parse_command("@  notes.txt"),
            Command::LoadFile("notes.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_clipboard() {
        assert_eq!(parse_command("@@"), Command::LoadClipboard);
    }

    #[test]
    fn test_parse_bare_text_reads_it() {
        assert_eq!(
            parse_command("the quick brown fox"),
            Command::ReadText("the quick brown fox".to_string())
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command("   "), Command::Empty);
    }

    #[test]
    fn test_parse_unknown_colon_command() {
        assert!(matches!(parse_command(":frobnicate"), Command::Unknown(_)));
    }

    #[test]
    fn test_command_to_app_event_quit() {
        assert_eq!(command_to_app_event(Command::Quit), AppEvent::Quit);
    }

    #[test]
    fn test_command_to_app_event_read_text() {
        let event = command_to_app_event(Command::ReadText("hello".to_string()));
        assert_eq!(event, AppEvent::ReadText("hello".to_string()));
    }

    #[test]
    fn test_command_to_app_event_empty_is_none() {
        assert_eq!(command_to_app_event(Command::Empty), AppEvent::None);
    }

    #[test]
    fn test_command_to_app_event_unknown() {
        let event = command_to_app_event(Command::Unknown(":xyz".to_string()));
        assert!(matches!(event, AppEvent::InvalidCommand(_)));
    }
}
