//! Room types used for endpoint resolution.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::floor::FloorId;
use super::waypoint::WaypointId;

/// Unique identifier for a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(i64);

impl RoomId {
    /// Create a new RoomId.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner id.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RoomId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A room as seen by the resolver.
///
/// Rooms are not graph vertices; they carry no coordinates of their own.
/// A room with an explicit `waypoint` routes directly to it, everything
/// else goes through the nearest-waypoint fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: RoomId,
    /// Floor the room is on, if assigned.
    pub floor: Option<FloorId>,
    /// Explicitly assigned entry waypoint, if any.
    pub waypoint: Option<WaypointId>,
    /// Display name, matched against waypoint labels during resolution.
    pub name: Option<String>,
}

impl Room {
    /// Create a room with no floor, waypoint, or name.
    pub fn new(id: RoomId) -> Self {
        Self {
            id,
            floor: None,
            waypoint: None,
            name: None,
        }
    }

    /// Set the floor.
    pub fn with_floor(mut self, floor: FloorId) -> Self {
        self.floor = Some(floor);
        self
    }

    /// Set the explicit entry waypoint.
    pub fn with_waypoint(mut self, waypoint: impl Into<WaypointId>) -> Self {
        self.waypoint = Some(waypoint.into());
        self
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_builder() {
        let room = Room::new(RoomId::new(7))
            .with_floor(FloorId::new(2))
            .with_name("206-B block");
        assert_eq!(room.id.as_i64(), 7);
        assert_eq!(room.floor, Some(FloorId::new(2)));
        assert!(room.waypoint.is_none());
    }
}
