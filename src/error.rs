//! Error types for game and repository operations.

use crate::door::{DoorId, DoorStatus};
use crate::game::{GameId, GameStatus};
use derive_more::{Display, Error};

/// What an illegal transition was attempting when it was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TransitionKind {
    /// A game-level operation ran while the game was in the wrong state.
    #[display("game is {current}, cannot advance to {target}")]
    Game {
        /// Status the game held when the operation arrived.
        current: GameStatus,
        /// Status the operation was trying to reach.
        target: GameStatus,
    },
    /// A final selection tried to re-open an already-open door.
    #[display("door {door_id} is already {status}")]
    Door {
        /// The door the operation referenced.
        door_id: DoorId,
        /// Status that door already held.
        status: DoorStatus,
    },
}

/// Failures surfaced by game and repository operations.
///
/// These represent caller misuse or lost races, never transient faults:
/// they are returned synchronously and nothing is retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Repository lookup or removal referenced an unknown game id.
    #[display("game {game_id} does not exist")]
    GameNotFound {
        /// The unknown game id.
        game_id: GameId,
    },
    /// A game operation referenced a door that does not belong to the game.
    #[display("door {door_id} does not exist in game {game_id}")]
    DoorNotFound {
        /// The game the operation ran against.
        game_id: GameId,
        /// The unknown door id.
        door_id: DoorId,
    },
    /// An operation arrived while the state machine forbids it.
    #[display("illegal transition in game {game_id}: {kind}")]
    IllegalTransition {
        /// The game the operation ran against.
        game_id: GameId,
        /// What was attempted and what stood in the way.
        kind: TransitionKind,
    },
}
