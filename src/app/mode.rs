/// Outer application modes.
///
/// Playing/paused/completed are not modes: they live inside the player as
/// its phase. `Command` is the text-entry deck, `Reading` hosts the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Command,
    Reading,
    Quit,
}
