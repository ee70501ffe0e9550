/// Discrete commands resolved from key input.
///
/// The key-to-command mapping lives at the device boundary; a key that
/// resolves to no command never produces an event at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stop the scheduler and exit cleanly.
    Quit,
    /// Return every cell to `Ready`.
    Reset,
    /// Seed a 2x2 firing block at the grid center.
    StampBlock,
    /// Seed two firing pairs offset left and right of center.
    StampHorizontalPair,
    /// Seed two firing pairs offset above and below center.
    StampVerticalPair,
}

/// Events the scheduler drains once per iteration.
///
/// Raw device events are decoded into this tagged form exactly once at
/// ingestion; field access only ever happens after the tag has matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Pointer position in grid coordinates. May lie outside the grid;
    /// the input adapter discards out-of-range positions.
    PointerMove { x: i32, y: i32 },
    /// A recognized key command.
    Command(Command),
    /// The presenter finished reading the last requested frame.
    PresentationComplete,
    /// Close request from the environment (window close, ctrl-c).
    WindowClose,
}
