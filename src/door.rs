//! Doors: the smallest unit of game state.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use strum::{Display, EnumString};

/// Unique identifier for a door.
pub type DoorId = u32;

/// What lies behind a door.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DoorContent {
    /// The winning prize.
    Bicycle,
    /// A losing prize.
    SmallFurryAnimal,
    /// Sentinel returned while the true content must not be disclosed.
    Unknown,
}

/// Disclosure status of a door.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DoorStatus {
    /// Not yet selected or opened.
    Closed,
    /// The player's first-round pick.
    Selected,
    /// Terminal: the door discloses its content.
    Open,
}

/// A single door: immutable content, lock-guarded status.
///
/// The true content is visible through [`Door::content`] only once the door
/// is open. Transition validation lives in the owning game, not here.
#[derive(Debug)]
pub struct Door {
    id: DoorId,
    content: DoorContent,
    status: Mutex<DoorStatus>,
}

impl Door {
    /// Creates a closed door hiding the given content.
    pub(crate) fn new(id: DoorId, content: DoorContent) -> Self {
        Self {
            id,
            content,
            status: Mutex::new(DoorStatus::Closed),
        }
    }

    /// Returns the door identifier.
    pub fn id(&self) -> DoorId {
        self.id
    }

    /// Returns the current status.
    pub fn status(&self) -> DoorStatus {
        *self.status.lock().unwrap()
    }

    /// Returns the content, or [`DoorContent::Unknown`] unless the door is open.
    pub fn content(&self) -> DoorContent {
        let status = self.status.lock().unwrap();
        if *status == DoorStatus::Open {
            self.content
        } else {
            DoorContent::Unknown
        }
    }

    /// Returns a point-in-time view with status and disclosed content taken
    /// under a single lock acquisition.
    pub fn snapshot(&self) -> DoorSnapshot {
        let status = *self.status.lock().unwrap();
        let content = if status == DoorStatus::Open {
            self.content
        } else {
            DoorContent::Unknown
        };
        DoorSnapshot {
            id: self.id,
            status,
            content,
        }
    }

    /// True content regardless of status. Content is immutable, so no lock
    /// is taken. Reserved for the owning game's hint-reveal rule.
    pub(crate) fn peek_content(&self) -> DoorContent {
        self.content
    }

    /// Overwrites the status unconditionally. The owning game validates
    /// transitions before calling this.
    pub(crate) fn set_status(&self, status: DoorStatus) {
        *self.status.lock().unwrap() = status;
    }
}

/// Point-in-time view of a door, safe to hand to external callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct DoorSnapshot {
    /// Door identifier.
    id: DoorId,
    /// Status at the instant of the snapshot.
    status: DoorStatus,
    /// Disclosed content ([`DoorContent::Unknown`] unless the door was open).
    content: DoorContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_door_starts_closed() {
        let door = Door::new(4, DoorContent::Bicycle);
        assert_eq!(door.id(), 4);
        assert_eq!(door.status(), DoorStatus::Closed);
    }

    #[test]
    fn content_is_hidden_until_open() {
        let door = Door::new(0, DoorContent::Bicycle);
        assert_eq!(door.content(), DoorContent::Unknown);

        door.set_status(DoorStatus::Selected);
        assert_eq!(door.content(), DoorContent::Unknown);

        door.set_status(DoorStatus::Open);
        assert_eq!(door.content(), DoorContent::Bicycle);
    }

    #[test]
    fn peek_bypasses_disclosure() {
        let door = Door::new(1, DoorContent::SmallFurryAnimal);
        assert_eq!(door.peek_content(), DoorContent::SmallFurryAnimal);
        assert_eq!(door.content(), DoorContent::Unknown);
    }

    #[test]
    fn snapshot_is_consistent_with_disclosure() {
        let door = Door::new(2, DoorContent::SmallFurryAnimal);

        let snap = door.snapshot();
        assert_eq!(*snap.id(), 2);
        assert_eq!(*snap.status(), DoorStatus::Closed);
        assert_eq!(*snap.content(), DoorContent::Unknown);

        door.set_status(DoorStatus::Open);
        let snap = door.snapshot();
        assert_eq!(*snap.status(), DoorStatus::Open);
        assert_eq!(*snap.content(), DoorContent::SmallFurryAnimal);
    }
}
