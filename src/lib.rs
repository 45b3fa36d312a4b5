//! Monty Hall game engine with concurrent in-memory sessions.
//!
//! A player picks one of three doors, the game reveals a non-winning "hint"
//! door, the player commits to a final door, and the game resolves to won or
//! lost. Many games can be played concurrently by independent callers.
//!
//! # Architecture
//!
//! - **Door**: lockable content/status pair; content stays hidden until open
//! - **Game**: the four-state machine, atomic across its doors under one lock
//! - **Repository**: concurrent in-memory store with unique id assignment
//!
//! Transport and wire rendering are external collaborators: the crate exposes
//! plain operations and typed failures, nothing HTTP-shaped.
//!
//! # Example
//!
//! ```
//! use monty_hall::{DoorStatus, GameRepository, GameStatus};
//!
//! let repository = GameRepository::new();
//! let game = repository.create();
//!
//! // First pick: the hint door opens automatically.
//! let first_pick = *game.doors()[0].id();
//! game.select(first_pick)?;
//! assert_eq!(game.status(), GameStatus::AwaitingFinalSelection);
//!
//! // Switch to the remaining closed door and resolve the game.
//! let final_pick = *game
//!     .doors()
//!     .iter()
//!     .find(|door| *door.status() == DoorStatus::Closed)
//!     .unwrap()
//!     .id();
//! game.open(final_pick)?;
//! assert!(matches!(game.status(), GameStatus::Won | GameStatus::Lost));
//! # Ok::<(), monty_hall::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod door;
mod error;
mod game;
mod repository;

// Crate-level exports - doors
pub use door::{Door, DoorContent, DoorId, DoorSnapshot, DoorStatus};

// Crate-level exports - errors
pub use error::{GameError, TransitionKind};

// Crate-level exports - game state machine
pub use game::{Game, GameId, GameStatus};

// Crate-level exports - repository
pub use repository::GameRepository;
