//! Session layer: routes resolved input into the active mode.
//!
//! All state transitions happen synchronously on the caller's thread, one
//! discrete event at a time. The session owns the world snapshot, both game
//! states, and the RNG used for target selection; the rendering layer reads
//! the games through the accessors and never mutates them directly.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::country::CountryId;
use crate::game::{ClassicGame, GuessOutcome, NeighborsGame};
use crate::world::World;

/// Which game consumes resolved guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Classic,
    Neighbors,
}

/// What the session did with a piece of raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The input resolved to no country; nothing was recorded. Callers
    /// leave the input field as-is — this is not an error.
    Unrecognized,
    /// The input resolved and the active mode processed it. Callers clear
    /// the input field.
    Guess {
        country: CountryId,
        outcome: GuessOutcome,
    },
}

/// One player's session: world snapshot plus per-mode game state.
pub struct Session {
    world: World,
    mode: Mode,
    classic: ClassicGame,
    neighbors: NeighborsGame,
    rng: SmallRng,
}

impl Session {
    pub fn new(world: World) -> Session {
        Session::with_rng(world, SmallRng::from_entropy())
    }

    /// Deterministic construction for tests and replays.
    pub fn with_seed(world: World, seed: u64) -> Session {
        Session::with_rng(world, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(world: World, rng: SmallRng) -> Session {
        Session {
            world,
            mode: Mode::Classic,
            classic: ClassicGame::new(),
            neighbors: NeighborsGame::new(),
            rng,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches the active mode. The inactive mode's state is kept.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Starts (or restarts) a Classic round.
    pub fn start_classic(&mut self) {
        self.classic.start();
    }

    /// Starts (or skips to) a fresh Neighbors round.
    pub fn start_round(&mut self) -> Option<CountryId> {
        self.neighbors.start_round(self.world.adjacency(), &mut self.rng)
    }

    /// Gives up the current Classic round.
    pub fn give_up(&mut self) {
        self.classic.give_up();
    }

    /// Toggles the Neighbors-mode hard-mode display flag.
    pub fn toggle_hard_mode(&mut self) {
        self.neighbors.toggle_hard_mode();
    }

    /// Feeds one piece of free-text input through the resolver and into the
    /// active mode.
    pub fn submit(&mut self, raw: &str) -> InputOutcome {
        let Some(country) = self.world.resolve(raw) else {
            return InputOutcome::Unrecognized;
        };
        let outcome = match self.mode {
            Mode::Classic => self.classic.guess(country),
            Mode::Neighbors => self.neighbors.guess(country),
        };
        InputOutcome::Guess { country, outcome }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn classic(&self) -> &ClassicGame {
        &self.classic
    }

    pub fn neighbors(&self) -> &NeighborsGame {
        &self.neighbors
    }
}
