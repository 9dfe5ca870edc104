//! Game-state machines.
//!
//! Each mode is a plain transition function over its own state: an event
//! comes in, the state advances, and the outcome says what happened. The
//! rendering layer observes the state; it never owns game logic.

pub mod classic;
pub mod neighbors;

pub use classic::{ClassicGame, ClassicStatus};
pub use neighbors::{NeighborsGame, NeighborsStatus};

/// What happened to a resolved guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Counted toward the found set.
    Correct,
    /// Recorded as a miss.
    Incorrect,
    /// Already in the found or missed set; nothing changed.
    AlreadyGuessed,
    /// The mode was not accepting guesses; nothing changed.
    Ignored,
}
