//! Waypoint types for the routing graph.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::floor::FloorId;

/// Unique identifier for a waypoint.
///
/// Wraps the stable string id assigned by the map editor and implements
/// `Ord` for deterministic ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WaypointId(String);

impl WaypointId {
    /// Create a new WaypointId.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WaypointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WaypointId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for WaypointId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Semantic kind of a waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaypointKind {
    /// Corridor point with no attached place.
    Hallway,
    /// Entry point of a room.
    Room,
    /// Stairwell landing.
    Stairs,
    /// Elevator door.
    Elevator,
    /// Building entrance.
    Entrance,
}

impl WaypointKind {
    /// Parse kind from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hallway" => Some(Self::Hallway),
            "room" => Some(Self::Room),
            "stairs" => Some(Self::Stairs),
            "elevator" => Some(Self::Elevator),
            "entrance" => Some(Self::Entrance),
            _ => None,
        }
    }

    /// Whether this kind carries people between floors.
    pub fn is_vertical_transit(&self) -> bool {
        matches!(self, Self::Stairs | Self::Elevator)
    }
}

impl Default for WaypointKind {
    fn default() -> Self {
        Self::Hallway
    }
}

impl fmt::Display for WaypointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hallway => write!(f, "hallway"),
            Self::Room => write!(f, "room"),
            Self::Stairs => write!(f, "stairs"),
            Self::Elevator => write!(f, "elevator"),
            Self::Entrance => write!(f, "entrance"),
        }
    }
}

/// A navigable point on a floor plan.
///
/// Coordinates are pixels on the floor's image; `linked_waypoint` is only
/// meaningful for stairs/elevator kinds and names the counterpart point on
/// another floor. Dangling links are tolerated and skipped at graph build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Unique waypoint identifier.
    pub id: WaypointId,
    /// Floor this waypoint sits on.
    pub floor: FloorId,
    /// X coordinate on the floor image.
    pub x: i32,
    /// Y coordinate on the floor image.
    pub y: i32,
    /// Semantic kind.
    pub kind: WaypointKind,
    /// Optional display name.
    pub label: Option<String>,
    /// Vertical link to the matching waypoint on another floor.
    pub linked_waypoint: Option<WaypointId>,
}

impl Waypoint {
    /// Create a new waypoint with no label and no vertical link.
    pub fn new(id: impl Into<WaypointId>, floor: FloorId, x: i32, y: i32, kind: WaypointKind) -> Self {
        Self {
            id: id.into(),
            floor,
            x,
            y,
            kind,
            label: None,
            linked_waypoint: None,
        }
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the vertical link target.
    pub fn with_link(mut self, target: impl Into<WaypointId>) -> Self {
        self.linked_waypoint = Some(target.into());
        self
    }

    /// Planar position as floats.
    pub fn position(&self) -> (f64, f64) {
        (f64::from(self.x), f64::from(self.y))
    }

    /// Planar Euclidean distance to another waypoint, ignoring floors.
    pub fn distance_to(&self, other: &Waypoint) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        dx.hypot(dy)
    }
}
