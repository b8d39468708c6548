//! Room-to-waypoint resolution.
//!
//! Rooms carry no coordinates, so a room without an explicitly assigned
//! waypoint needs a fallback entry point into the graph. The fallback
//! only ever considers room-kind waypoints on the room's own floor.

use crate::snapshot::MapSnapshot;
use crate::types::{Floor, RoomId, Waypoint, WaypointId, WaypointKind};

/// Resolve the graph entry point for a room.
///
/// Order of preference:
/// 1. the room's explicitly assigned waypoint,
/// 2. among room-kind waypoints on the room's floor, those whose label
///    matches the room name (case-insensitive, trimmed),
/// 3. the full candidate set when no label matches.
///
/// The winner is the candidate nearest the floor's image center (or the
/// candidates' centroid when dimensions are unknown); distance ties go
/// to the lowest waypoint id. Returns `None` when the room is unknown,
/// has no floor, or the floor has no room-kind waypoints.
pub fn room_entry_waypoint(snapshot: &MapSnapshot, room_id: RoomId) -> Option<WaypointId> {
    let room = snapshot.room(room_id)?;

    if let Some(assigned) = &room.waypoint {
        return Some(assigned.clone());
    }

    let floor_id = room.floor?;
    let candidates: Vec<&Waypoint> = snapshot
        .waypoints()
        .filter(|wp| wp.floor == floor_id && wp.kind == WaypointKind::Room)
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let room_name = normalize(room.name.as_deref());
    let labeled: Vec<&Waypoint> = candidates
        .iter()
        .copied()
        .filter(|wp| normalize(wp.label.as_deref()) == room_name)
        .collect();
    let pool = if labeled.is_empty() { candidates } else { labeled };

    let (tx, ty) = snapshot
        .floor(floor_id)
        .and_then(Floor::center)
        .unwrap_or_else(|| centroid(&pool));

    pool.into_iter()
        .min_by(|a, b| {
            distance_to(a, tx, ty)
                .total_cmp(&distance_to(b, tx, ty))
                .then_with(|| a.id.cmp(&b.id))
        })
        .map(|wp| wp.id.clone())
}

fn normalize(value: Option<&str>) -> String {
    value.unwrap_or("").trim().to_lowercase()
}

fn distance_to(wp: &Waypoint, tx: f64, ty: f64) -> f64 {
    let (x, y) = wp.position();
    (x - tx).hypot(y - ty)
}

/// Arithmetic mean of the candidates' coordinates.
fn centroid(pool: &[&Waypoint]) -> (f64, f64) {
    let n = pool.len() as f64;
    let (sx, sy) = pool.iter().fold((0.0, 0.0), |(sx, sy), wp| {
        let (x, y) = wp.position();
        (sx + x, sy + y)
    });
    (sx / n, sy / n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FloorId, Room};

    fn room_wp(id: &str, floor: i64, x: i32, y: i32) -> Waypoint {
        Waypoint::new(id, FloorId::new(floor), x, y, WaypointKind::Room)
    }

    #[test]
    fn test_explicit_assignment_wins() {
        let mut snapshot = MapSnapshot::new();
        snapshot.add_room(Room::new(RoomId::new(1)).with_waypoint("wp1"));

        // No floor, no waypoints in the snapshot at all: the explicit
        // assignment is returned without touching the fallback logic.
        assert_eq!(
            room_entry_waypoint(&snapshot, RoomId::new(1)),
            Some(WaypointId::new("wp1"))
        );
    }

    #[test]
    fn test_unknown_room() {
        let snapshot = MapSnapshot::new();
        assert_eq!(room_entry_waypoint(&snapshot, RoomId::new(99)), None);
    }

    #[test]
    fn test_room_without_floor() {
        let mut snapshot = MapSnapshot::new();
        snapshot.add_room(Room::new(RoomId::new(1)).with_name("106-B block"));
        assert_eq!(room_entry_waypoint(&snapshot, RoomId::new(1)), None);
    }

    #[test]
    fn test_no_room_waypoints_on_floor() {
        let mut snapshot = MapSnapshot::new();
        snapshot.add_waypoint(Waypoint::new(
            "hall",
            FloorId::new(1),
            0,
            0,
            WaypointKind::Hallway,
        ));
        snapshot.add_room(Room::new(RoomId::new(1)).with_floor(FloorId::new(1)));

        assert_eq!(room_entry_waypoint(&snapshot, RoomId::new(1)), None);
    }

    #[test]
    fn test_label_match_beats_proximity() {
        let mut snapshot = MapSnapshot::new();
        snapshot.add_floor(Floor::new(FloorId::new(1)).with_image_size(100, 100));
        // "near" sits on the image center, "far" carries the matching label.
        snapshot.add_waypoint(room_wp("near", 1, 50, 50));
        snapshot.add_waypoint(room_wp("far", 1, 90, 90).with_label("  106-B BLOCK "));
        snapshot.add_room(
            Room::new(RoomId::new(1))
                .with_floor(FloorId::new(1))
                .with_name("106-b block"),
        );

        assert_eq!(
            room_entry_waypoint(&snapshot, RoomId::new(1)),
            Some(WaypointId::new("far"))
        );
    }

    #[test]
    fn test_nearest_to_floor_center() {
        let mut snapshot = MapSnapshot::new();
        snapshot.add_floor(Floor::new(FloorId::new(1)).with_image_size(100, 100));
        snapshot.add_waypoint(room_wp("corner", 1, 5, 5));
        snapshot.add_waypoint(room_wp("middle", 1, 45, 55));
        snapshot.add_room(
            Room::new(RoomId::new(1))
                .with_floor(FloorId::new(1))
                .with_name("unlisted"),
        );

        assert_eq!(
            room_entry_waypoint(&snapshot, RoomId::new(1)),
            Some(WaypointId::new("middle"))
        );
    }

    #[test]
    fn test_centroid_fallback_without_floor_dimensions() {
        let mut snapshot = MapSnapshot::new();
        // Floor record missing entirely: target is the candidate centroid.
        snapshot.add_waypoint(room_wp("a", 1, 0, 0));
        snapshot.add_waypoint(room_wp("b", 1, 10, 0));
        snapshot.add_waypoint(room_wp("c", 1, 98, 0));
        snapshot.add_room(
            Room::new(RoomId::new(1))
                .with_floor(FloorId::new(1))
                .with_name("unlisted"),
        );

        // Centroid x = 36: "b" at 10 is nearest.
        assert_eq!(
            room_entry_waypoint(&snapshot, RoomId::new(1)),
            Some(WaypointId::new("b"))
        );
    }
}
