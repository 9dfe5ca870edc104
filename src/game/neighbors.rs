//! Neighbors mode: name every country bordering a random target.
//!
//! `Idle -> Playing -> Won`, with `start_round` usable from any state to
//! skip to a fresh target. Targets are drawn uniformly from canonical
//! countries with at least two neighbors. The win counter lives on the
//! game value, survives every round and skip, and only resets with the
//! process.

use std::collections::BTreeSet;

use rand::Rng;

use crate::adjacency::AdjacencyMap;
use crate::country::CountryId;

use super::GuessOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborsStatus {
    Idle,
    Playing,
    Won,
}

/// State for the Neighbors mode, spanning rounds.
#[derive(Debug, Clone)]
pub struct NeighborsGame {
    status: NeighborsStatus,
    target: Option<CountryId>,
    target_borders: BTreeSet<String>,
    found: Vec<CountryId>,
    missed: Vec<CountryId>,
    hard_mode: bool,
    wins: u32,
}

impl NeighborsGame {
    pub fn new() -> NeighborsGame {
        NeighborsGame {
            status: NeighborsStatus::Idle,
            target: None,
            target_borders: BTreeSet::new(),
            found: Vec::new(),
            missed: Vec::new(),
            hard_mode: false,
            wins: 0,
        }
    }

    /// Starts a fresh round with a uniformly random eligible target,
    /// clearing the found and missed sets. Allowed from any state, which is
    /// also how skip/next works. Returns the chosen target, or `None` when
    /// the map offers no country with two or more neighbors.
    pub fn start_round<R: Rng>(
        &mut self,
        map: &AdjacencyMap,
        rng: &mut R,
    ) -> Option<CountryId> {
        let targets = map.playable_targets();
        let Some(&target) = targets.get(rng.gen_range(0..targets.len().max(1))) else {
            log::warn!("no playable neighbors-mode targets in adjacency map");
            self.status = NeighborsStatus::Idle;
            self.target = None;
            self.target_borders.clear();
            self.found.clear();
            self.missed.clear();
            return None;
        };
        self.target = Some(target);
        self.target_borders = map
            .neighbors(target.name())
            .cloned()
            .unwrap_or_default();
        self.found.clear();
        self.missed.clear();
        self.status = NeighborsStatus::Playing;
        Some(target)
    }

    /// Records a resolved guess against the current target.
    ///
    /// No-op outside `Playing` or when the guess was already recorded
    /// either way; a guess is never both found and missed. Finding the last
    /// neighbor wins the round and bumps the win counter.
    pub fn guess(&mut self, id: CountryId) -> GuessOutcome {
        if self.status != NeighborsStatus::Playing || self.target.is_none() {
            return GuessOutcome::Ignored;
        }
        if self.found.contains(&id) || self.missed.contains(&id) {
            return GuessOutcome::AlreadyGuessed;
        }
        if self.target_borders.contains(id.name()) {
            self.found.push(id);
            if self.found.len() == self.target_borders.len() {
                self.status = NeighborsStatus::Won;
                self.wins += 1;
            }
            GuessOutcome::Correct
        } else {
            self.missed.push(id);
            GuessOutcome::Incorrect
        }
    }

    /// Display-only: hides the target's name in the UI. No effect on logic.
    pub fn toggle_hard_mode(&mut self) {
        self.hard_mode = !self.hard_mode;
    }

    pub fn status(&self) -> NeighborsStatus {
        self.status
    }

    pub fn target(&self) -> Option<CountryId> {
        self.target
    }

    /// The current target's neighbor set, by display name.
    pub fn target_borders(&self) -> &BTreeSet<String> {
        &self.target_borders
    }

    /// Correct guesses, in the order they were made.
    pub fn found(&self) -> &[CountryId] {
        &self.found
    }

    /// Wrong guesses, in the order they were made.
    pub fn missed(&self) -> &[CountryId] {
        &self.missed
    }

    pub fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    /// Rounds won since the game value was created.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Neighbors still to find in the current round.
    pub fn remaining(&self) -> usize {
        self.target_borders.len() - self.found.len()
    }
}

impl Default for NeighborsGame {
    fn default() -> Self {
        NeighborsGame::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Topology;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn id(name: &str) -> CountryId {
        CountryId::from_name(name).unwrap()
    }

    /// France borders Spain, Italy, Belgium; each of those borders France
    /// plus one other, so every canonical name here is an eligible target.
    fn map() -> AdjacencyMap {
        let json = r#"{
            "type": "Topology",
            "objects": {
                "countries": {
                    "type": "GeometryCollection",
                    "geometries": [
                        {"type": "Polygon", "arcs": [[0, 1, 2]], "properties": {"name": "France"}},
                        {"type": "Polygon", "arcs": [[-1, 3]], "properties": {"name": "Spain"}},
                        {"type": "Polygon", "arcs": [[-2, 4]], "properties": {"name": "Italy"}},
                        {"type": "Polygon", "arcs": [[-3, -4, -5, 5]], "properties": {"name": "Belgium"}},
                        {"type": "Polygon", "arcs": [[6]], "properties": {"name": "Iceland"}}
                    ]
                }
            },
            "arcs": [
                [[0.0, 0.0], [1.0, 0.0]],
                [[1.0, 0.0], [1.0, 1.0]],
                [[1.0, 1.0], [0.0, 1.0]],
                [[0.0, 1.0], [0.0, 0.0]],
                [[0.0, 0.0], [2.0, 2.0]],
                [[2.0, 2.0], [3.0, 3.0]],
                [[5.0, 5.0], [6.0, 6.0]]
            ]
        }"#;
        AdjacencyMap::build(&Topology::from_json(json).unwrap()).unwrap()
    }

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    fn start_with_target(game: &mut NeighborsGame, map: &AdjacencyMap, name: &str) {
        let mut rng = rng();
        for _ in 0..200 {
            if game.start_round(map, &mut rng) == Some(id(name)) {
                return;
            }
        }
        panic!("never drew target {name}");
    }

    #[test]
    fn targets_always_have_two_or_more_neighbors() {
        let map = map();
        let mut game = NeighborsGame::new();
        let mut rng = rng();
        for _ in 0..100 {
            let target = game.start_round(&map, &mut rng).unwrap();
            let neighbors = map.neighbors(target.name()).unwrap();
            assert!(neighbors.len() >= 2, "{} has too few neighbors", target.name());
        }
    }

    #[test]
    fn guess_before_round_is_ignored() {
        let mut game = NeighborsGame::new();
        assert_eq!(game.guess(id("Spain")), GuessOutcome::Ignored);
    }

    #[test]
    fn correct_and_incorrect_guesses_are_partitioned() {
        let map = map();
        let mut game = NeighborsGame::new();
        start_with_target(&mut game, &map, "France");

        assert_eq!(game.guess(id("Spain")), GuessOutcome::Correct);
        assert_eq!(game.guess(id("Brazil")), GuessOutcome::Incorrect);
        assert_eq!(game.found(), &[id("Spain")]);
        assert_eq!(game.missed(), &[id("Brazil")]);

        // Neither list accepts a repeat of the other.
        assert_eq!(game.guess(id("Spain")), GuessOutcome::AlreadyGuessed);
        assert_eq!(game.guess(id("Brazil")), GuessOutcome::AlreadyGuessed);
        assert_eq!(game.found().len(), 1);
        assert_eq!(game.missed().len(), 1);
    }

    #[test]
    fn finding_every_neighbor_wins_and_counts() {
        let map = map();
        let mut game = NeighborsGame::new();
        start_with_target(&mut game, &map, "France");
        assert_eq!(game.remaining(), 3);

        game.guess(id("Spain"));
        game.guess(id("Italy"));
        assert_eq!(game.status(), NeighborsStatus::Playing);
        game.guess(id("Belgium"));
        assert_eq!(game.status(), NeighborsStatus::Won);
        assert_eq!(game.wins(), 1);
        assert_eq!(game.remaining(), 0);

        // Guesses after the win are ignored.
        assert_eq!(game.guess(id("Germany")), GuessOutcome::Ignored);
        assert_eq!(game.wins(), 1);
    }

    #[test]
    fn wins_survive_skips_and_new_rounds() {
        let map = map();
        let mut game = NeighborsGame::new();
        start_with_target(&mut game, &map, "Spain");
        game.guess(id("France"));
        game.guess(id("Belgium"));
        assert_eq!(game.status(), NeighborsStatus::Won);
        assert_eq!(game.wins(), 1);

        let mut rng = rng();
        game.start_round(&map, &mut rng);
        assert_eq!(game.status(), NeighborsStatus::Playing);
        assert!(game.found().is_empty());
        assert!(game.missed().is_empty());
        assert_eq!(game.wins(), 1);
    }

    #[test]
    fn skip_mid_round_resets_progress() {
        let map = map();
        let mut game = NeighborsGame::new();
        start_with_target(&mut game, &map, "France");
        game.guess(id("Spain"));
        game.guess(id("Brazil"));

        let mut rng = rng();
        game.start_round(&map, &mut rng);
        assert!(game.found().is_empty());
        assert!(game.missed().is_empty());
        assert_eq!(game.status(), NeighborsStatus::Playing);
        assert_eq!(game.wins(), 0);
    }

    #[test]
    fn hard_mode_is_display_only() {
        let map = map();
        let mut game = NeighborsGame::new();
        start_with_target(&mut game, &map, "France");
        assert!(!game.hard_mode());
        game.toggle_hard_mode();
        assert!(game.hard_mode());
        assert_eq!(game.guess(id("Spain")), GuessOutcome::Correct);
        game.toggle_hard_mode();
        assert!(!game.hard_mode());
    }
}
