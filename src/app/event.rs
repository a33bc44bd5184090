use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// One-second timer tick
    Tick,

    /// Periodic persistence of both lists
    AutoSave,
}
