//! Game state machine coordinating three doors.

use crate::door::{Door, DoorContent, DoorId, DoorSnapshot, DoorStatus};
use crate::error::{GameError, TransitionKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use strum::{Display, EnumString};
use tracing::{info, instrument, warn};

/// Unique identifier for a game.
pub type GameId = u32;

/// Progression of a game through its four states.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Waiting for the player's first pick.
    AwaitingInitialSelection,
    /// Hint door revealed, waiting for the player to commit.
    AwaitingFinalSelection,
    /// Terminal: the final door hid the prize.
    Won,
    /// Terminal: the final door hid a losing prize.
    Lost,
}

/// One playthrough: exactly three doors plus the game-level status.
///
/// The status mutex doubles as the game's coordinating lock. [`Game::select`]
/// and [`Game::open`] hold it for their whole duration, so each transition is
/// atomic across the game status and every door status it touches; a
/// concurrent caller on the same game either runs first or observes the
/// already-advanced status and fails.
#[derive(Debug)]
pub struct Game {
    id: GameId,
    doors: HashMap<DoorId, Door>,
    status: Mutex<GameStatus>,
}

impl Game {
    /// Creates a game in its initial state owning the given doors.
    pub(crate) fn new(id: GameId, doors: Vec<Door>) -> Self {
        Self {
            id,
            doors: doors.into_iter().map(|door| (door.id(), door)).collect(),
            status: Mutex::new(GameStatus::AwaitingInitialSelection),
        }
    }

    /// Returns the game identifier.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Returns the current game status.
    pub fn status(&self) -> GameStatus {
        *self.status.lock().unwrap()
    }

    /// Returns a snapshot of one door.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DoorNotFound`] if no door with that id belongs to
    /// this game.
    pub fn door(&self, door_id: DoorId) -> Result<DoorSnapshot, GameError> {
        Ok(self.door_ref(door_id)?.snapshot())
    }

    /// Returns a defensive snapshot of all doors, ordered by door id.
    pub fn doors(&self) -> Vec<DoorSnapshot> {
        let mut snapshots: Vec<_> = self.doors.values().map(Door::snapshot).collect();
        snapshots.sort_by_key(|snapshot| *snapshot.id());
        snapshots
    }

    /// The player's first pick: marks the door selected, reveals the hint
    /// door, and advances to [`GameStatus::AwaitingFinalSelection`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalTransition`] unless the game is awaiting
    /// its initial selection, and [`GameError::DoorNotFound`] if the door id
    /// is unknown.
    #[instrument(skip(self), fields(game_id = self.id))]
    pub fn select(&self, door_id: DoorId) -> Result<(), GameError> {
        let mut status = self.status.lock().unwrap();

        if *status != GameStatus::AwaitingInitialSelection {
            warn!(current = %*status, "Rejected initial selection");
            return Err(GameError::IllegalTransition {
                game_id: self.id,
                kind: TransitionKind::Game {
                    current: *status,
                    target: GameStatus::AwaitingFinalSelection,
                },
            });
        }

        // The door is guaranteed closed here: this branch runs once per game.
        self.door_ref(door_id)?.set_status(DoorStatus::Selected);

        self.open_hint_door();

        *status = GameStatus::AwaitingFinalSelection;
        info!(door_id, "Initial selection made, hint door revealed");

        Ok(())
    }

    /// The player's final pick: opens the door and resolves the game to
    /// [`GameStatus::Won`] or [`GameStatus::Lost`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalTransition`] unless the game is awaiting
    /// its final selection, or if the door is already open (the hint door
    /// cannot be re-opened), and [`GameError::DoorNotFound`] if the door id
    /// is unknown.
    #[instrument(skip(self), fields(game_id = self.id))]
    pub fn open(&self, door_id: DoorId) -> Result<(), GameError> {
        let mut status = self.status.lock().unwrap();

        if *status != GameStatus::AwaitingFinalSelection {
            warn!(current = %*status, "Rejected final selection");
            return Err(GameError::IllegalTransition {
                game_id: self.id,
                kind: TransitionKind::Game {
                    current: *status,
                    target: GameStatus::Won,
                },
            });
        }

        let door = self.door_ref(door_id)?;
        if door.status() == DoorStatus::Open {
            warn!(door_id, "Attempted to open an already-open door");
            return Err(GameError::IllegalTransition {
                game_id: self.id,
                kind: TransitionKind::Door {
                    door_id,
                    status: DoorStatus::Open,
                },
            });
        }

        door.set_status(DoorStatus::Open);

        *status = if door.content() == DoorContent::Bicycle {
            GameStatus::Won
        } else {
            GameStatus::Lost
        };
        info!(door_id, outcome = %*status, "Final door opened");

        Ok(())
    }

    fn door_ref(&self, door_id: DoorId) -> Result<&Door, GameError> {
        self.doors.get(&door_id).ok_or(GameError::DoorNotFound {
            game_id: self.id,
            door_id,
        })
    }

    /// Opens the hint door: a still-closed door hiding a losing prize.
    ///
    /// Caller must hold the game lock. The 3-door/1-winner invariant
    /// guarantees a candidate exists after the initial selection; its
    /// absence is a defect, not a caller error.
    fn open_hint_door(&self) {
        self.doors
            .values()
            .find(|door| {
                door.status() == DoorStatus::Closed
                    && door.peek_content() == DoorContent::SmallFurryAnimal
            })
            .expect("a closed losing door must exist after the initial selection")
            .set_status(DoorStatus::Open);
    }
}
