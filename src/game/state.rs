//! Game state types.

/// Round phase.
///
/// Tracked for the caller's benefit; the session does not refuse
/// operations based on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No live hand. Entered at start-up and after each draw.
    #[default]
    AwaitingDeal,
    /// Five cards are dealt and the player is choosing holds.
    AwaitingDraw,
}
