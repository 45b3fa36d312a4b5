//! Tests for the wire-facing surface the transport layer consumes:
//! canonical enum names, snapshot rendering, and error messages.

use monty_hall::{
    DoorContent, DoorStatus, GameError, GameRepository, GameStatus, TransitionKind,
};
use serde_json::json;

#[test]
fn statuses_and_contents_use_canonical_wire_names() {
    assert_eq!(serde_json::to_value(DoorStatus::Closed).unwrap(), json!("CLOSED"));
    assert_eq!(serde_json::to_value(DoorStatus::Selected).unwrap(), json!("SELECTED"));
    assert_eq!(serde_json::to_value(DoorStatus::Open).unwrap(), json!("OPEN"));

    assert_eq!(serde_json::to_value(DoorContent::Bicycle).unwrap(), json!("BICYCLE"));
    assert_eq!(
        serde_json::to_value(DoorContent::SmallFurryAnimal).unwrap(),
        json!("SMALL_FURRY_ANIMAL")
    );
    assert_eq!(serde_json::to_value(DoorContent::Unknown).unwrap(), json!("UNKNOWN"));

    assert_eq!(
        serde_json::to_value(GameStatus::AwaitingInitialSelection).unwrap(),
        json!("AWAITING_INITIAL_SELECTION")
    );
    assert_eq!(
        serde_json::to_value(GameStatus::AwaitingFinalSelection).unwrap(),
        json!("AWAITING_FINAL_SELECTION")
    );
    assert_eq!(serde_json::to_value(GameStatus::Won).unwrap(), json!("WON"));
    assert_eq!(serde_json::to_value(GameStatus::Lost).unwrap(), json!("LOST"));
}

#[test]
fn wire_names_parse_back_into_statuses() {
    // The transport layer maps an inbound `status` field onto an operation.
    assert_eq!("SELECTED".parse(), Ok(DoorStatus::Selected));
    assert_eq!("OPEN".parse(), Ok(DoorStatus::Open));
    assert_eq!("CLOSED".parse(), Ok(DoorStatus::Closed));
    assert!("AJAR".parse::<DoorStatus>().is_err());

    assert_eq!(
        serde_json::from_value::<GameStatus>(json!("WON")).unwrap(),
        GameStatus::Won
    );
}

#[test]
fn snapshots_render_with_disclosure_applied() {
    let repository = GameRepository::new();
    let game = repository.create();

    let rendered = serde_json::to_value(game.doors()).unwrap();
    let doors = rendered.as_array().unwrap();
    assert_eq!(doors.len(), 3);
    for door in doors {
        assert!(door.get("id").is_some());
        assert_eq!(door["status"], json!("CLOSED"));
        assert_eq!(door["content"], json!("UNKNOWN"));
    }
}

#[test]
fn error_messages_carry_their_context() {
    assert_eq!(
        GameError::GameNotFound { game_id: 3 }.to_string(),
        "game 3 does not exist"
    );
    assert_eq!(
        GameError::DoorNotFound {
            game_id: 3,
            door_id: 12,
        }
        .to_string(),
        "door 12 does not exist in game 3"
    );
    assert_eq!(
        GameError::IllegalTransition {
            game_id: 3,
            kind: TransitionKind::Game {
                current: GameStatus::Won,
                target: GameStatus::AwaitingFinalSelection,
            },
        }
        .to_string(),
        "illegal transition in game 3: game is WON, cannot advance to AWAITING_FINAL_SELECTION"
    );
    assert_eq!(
        GameError::IllegalTransition {
            game_id: 3,
            kind: TransitionKind::Door {
                door_id: 12,
                status: DoorStatus::Open,
            },
        }
        .to_string(),
        "illegal transition in game 3: door 12 is already OPEN"
    );
}
