/// Application events produced by the command deck.
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    /// Literal text typed or pasted into the deck
    ReadText(String),
    LoadFile(String),
    LoadClipboard,
    Quit,
    Help,
    Warning(String),
    InvalidCommand(String),
    None,
}
