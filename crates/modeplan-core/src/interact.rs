/// Single-key input capability used by the interactive pause between stride
/// levels. The engine never touches a terminal itself; embedders provide an
/// implementation (the CLI wires one up through crossterm) or rely on
/// [`NoPrompt`] for headless runs.
pub trait KeyPrompt {
    /// Blocks until a key is pressed and returns it. `None` means no key
    /// source is available; the search then disables further interaction.
    fn wait_for_key(&mut self) -> Option<char>;
}

/// Headless stub: reports that no key source exists, which forces
/// interactive mode off.
pub struct NoPrompt;

impl KeyPrompt for NoPrompt {
    fn wait_for_key(&mut self) -> Option<char> {
        None
    }
}
