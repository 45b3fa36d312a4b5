//! In-memory game repository with safe concurrent access.

use crate::door::{Door, DoorContent};
use crate::error::GameError;
use crate::game::{Game, GameId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Number of doors in every game.
const DOORS_PER_GAME: u32 = 3;

/// Creates, stores, and retrieves games for the lifetime of the process.
///
/// Game ids and door ids each come from their own atomic counter, so no game
/// id collides under concurrent creation and no door id repeats anywhere in
/// the process. The games map sits behind a single mutex held only for the
/// duration of an insert, lookup, or delete; it is never held while a game's
/// internal lock is held.
#[derive(Debug)]
pub struct GameRepository {
    games: Mutex<HashMap<GameId, Arc<Game>>>,
    game_ids: AtomicU32,
    door_ids: AtomicU32,
    rng: Mutex<StdRng>,
}

impl GameRepository {
    /// Creates a repository whose winner draw is seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a repository with an injected generator.
    ///
    /// Intended for tests that need a reproducible winner draw; production
    /// callers should stick with [`GameRepository::new`].
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            games: Mutex::new(HashMap::new()),
            game_ids: AtomicU32::new(0),
            door_ids: AtomicU32::new(0),
            rng: Mutex::new(rng),
        }
    }

    /// Builds and stores a fresh game, returning a shared handle to it.
    ///
    /// The winning door is drawn uniformly from the three positions.
    #[instrument(skip(self))]
    pub fn create(&self) -> Arc<Game> {
        let id = self.game_ids.fetch_add(1, Ordering::Relaxed);
        let game = Arc::new(Game::new(id, self.create_doors()));

        self.games.lock().unwrap().insert(id, Arc::clone(&game));

        info!(game_id = id, "Created new game");
        game
    }

    /// Returns the game with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] if no such game is stored.
    #[instrument(skip(self))]
    pub fn retrieve(&self, id: GameId) -> Result<Arc<Game>, GameError> {
        let games = self.games.lock().unwrap();
        match games.get(&id) {
            Some(game) => Ok(Arc::clone(game)),
            None => {
                debug!(game_id = id, "Game not found");
                Err(GameError::GameNotFound { game_id: id })
            }
        }
    }

    /// Deletes the game with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] if no such game is stored.
    #[instrument(skip(self))]
    pub fn remove(&self, id: GameId) -> Result<(), GameError> {
        match self.games.lock().unwrap().remove(&id) {
            Some(_) => {
                info!(game_id = id, "Removed game");
                Ok(())
            }
            None => {
                warn!(game_id = id, "Cannot remove unknown game");
                Err(GameError::GameNotFound { game_id: id })
            }
        }
    }

    /// Three fresh doors with the prize behind a uniformly drawn position.
    fn create_doors(&self) -> Vec<Door> {
        let winner = self.rng.lock().unwrap().random_range(0..DOORS_PER_GAME);
        (0..DOORS_PER_GAME)
            .map(|position| {
                let content = if position == winner {
                    DoorContent::Bicycle
                } else {
                    DoorContent::SmallFurryAnimal
                };
                Door::new(self.door_ids.fetch_add(1, Ordering::Relaxed), content)
            })
            .collect()
    }
}

impl Default for GameRepository {
    fn default() -> Self {
        Self::new()
    }
}
