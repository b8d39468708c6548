//! Immutable map snapshot consumed by the routing engine.
//!
//! The owning data layer reads waypoints, connections, rooms, and floors
//! out of storage and hands the engine one consistent snapshot. The
//! engine never mutates it and never reads anything else. Uses BTreeMap
//! for deterministic iteration order.

use std::collections::BTreeMap;

use crate::types::{Connection, Floor, FloorId, Room, RoomId, Waypoint, WaypointId};

/// Read-only collection of everything the engine needs for one session.
#[derive(Debug, Clone, Default)]
pub struct MapSnapshot {
    /// Waypoints by id.
    waypoints: BTreeMap<WaypointId, Waypoint>,
    /// All connections, in insertion order.
    connections: Vec<Connection>,
    /// Rooms by id.
    rooms: BTreeMap<RoomId, Room>,
    /// Floors by id.
    floors: BTreeMap<FloorId, Floor>,
}

impl MapSnapshot {
    /// Create a new empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a waypoint to the snapshot.
    pub fn add_waypoint(&mut self, waypoint: Waypoint) {
        self.waypoints.insert(waypoint.id.clone(), waypoint);
    }

    /// Add a connection to the snapshot.
    pub fn add_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    /// Add a room to the snapshot.
    pub fn add_room(&mut self, room: Room) {
        self.rooms.insert(room.id, room);
    }

    /// Add a floor to the snapshot.
    pub fn add_floor(&mut self, floor: Floor) {
        self.floors.insert(floor.id, floor);
    }

    /// Look up a waypoint by id.
    pub fn waypoint(&self, id: &WaypointId) -> Option<&Waypoint> {
        self.waypoints.get(id)
    }

    /// Look up a room by id.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// Look up a floor by id.
    pub fn floor(&self, id: FloorId) -> Option<&Floor> {
        self.floors.get(&id)
    }

    /// All waypoints, ordered by id.
    pub fn waypoints(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.values()
    }

    /// All connections.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Number of waypoints.
    pub fn num_waypoints(&self) -> usize {
        self.waypoints.len()
    }

    /// Number of connections.
    pub fn num_connections(&self) -> usize {
        self.connections.len()
    }
}
