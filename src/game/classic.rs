//! Classic mode: name every country in the world.
//!
//! `Idle -> Playing -> Complete`. Every resolved guess is correct by
//! definition (the resolver only yields canonical countries); the round
//! ends when all 197 are found or the player gives up, at which point the
//! remaining countries are revealed and the clock freezes.

use std::time::{Duration, Instant};

use crate::country::{self, CountryId, COUNTRY_COUNT};

use super::GuessOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassicStatus {
    Idle,
    Playing,
    Complete,
}

/// State for one Classic round.
#[derive(Debug, Clone)]
pub struct ClassicGame {
    status: ClassicStatus,
    found: Vec<CountryId>,
    revealed: Vec<CountryId>,
    started: Option<Instant>,
    final_time: Option<Duration>,
}

impl ClassicGame {
    pub fn new() -> ClassicGame {
        ClassicGame {
            status: ClassicStatus::Idle,
            found: Vec::new(),
            revealed: Vec::new(),
            started: None,
            final_time: None,
        }
    }

    /// Begins a fresh round, clearing any previous one.
    pub fn start(&mut self) {
        self.status = ClassicStatus::Playing;
        self.found.clear();
        self.revealed.clear();
        self.started = Some(Instant::now());
        self.final_time = None;
    }

    /// Records a resolved country. Idempotent on repeats; completing the
    /// full set finishes the round.
    pub fn guess(&mut self, id: CountryId) -> GuessOutcome {
        if self.status != ClassicStatus::Playing {
            return GuessOutcome::Ignored;
        }
        if self.found.contains(&id) {
            return GuessOutcome::AlreadyGuessed;
        }
        self.found.push(id);
        if self.found.len() == COUNTRY_COUNT {
            self.finish();
        }
        GuessOutcome::Correct
    }

    /// Ends the round early, revealing everything not yet found.
    pub fn give_up(&mut self) {
        if self.status != ClassicStatus::Playing {
            return;
        }
        for id in country::all() {
            if !self.found.contains(&id) {
                self.revealed.push(id);
            }
        }
        self.finish();
    }

    fn finish(&mut self) {
        self.final_time = self.started.map(|started| started.elapsed());
        self.status = ClassicStatus::Complete;
    }

    pub fn status(&self) -> ClassicStatus {
        self.status
    }

    /// Countries the player found, in the order they were guessed.
    pub fn found(&self) -> &[CountryId] {
        &self.found
    }

    /// Countries revealed by giving up, distinct from player finds.
    pub fn revealed(&self) -> &[CountryId] {
        &self.revealed
    }

    pub fn is_found(&self, id: CountryId) -> bool {
        self.found.contains(&id)
    }

    pub fn remaining(&self) -> usize {
        COUNTRY_COUNT - self.found.len()
    }

    /// Time spent in the round: zero before the first start, running while
    /// playing, frozen once complete.
    pub fn elapsed(&self) -> Duration {
        match (self.final_time, self.started) {
            (Some(done), _) => done,
            (None, Some(started)) => started.elapsed(),
            (None, None) => Duration::ZERO,
        }
    }
}

impl Default for ClassicGame {
    fn default() -> Self {
        ClassicGame::new()
    }
}
