use crate::types::GameInput;

/// Everything the game loop reacts to, in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Fall tick; `epoch` identifies the timer run that produced it
    Tick { epoch: u64 },
    Input(GameInput),
    /// Terminal size changed
    Resize,
    Quit,
}
