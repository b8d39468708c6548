//! High-level routing facade.
//!
//! The router owns one built graph against one snapshot and serves any
//! number of queries. Callers that hold raw waypoint ids can use
//! [`RouteGraph::find_path`] directly; the router adds endpoint
//! resolution (waypoint or room), request-level errors, and instruction
//! annotation.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::graph::RouteGraph;
use crate::instructions::annotate;
use crate::policy::CostPolicy;
use crate::resolver::room_entry_waypoint;
use crate::snapshot::MapSnapshot;
use crate::types::{RoomId, RoutePath, WaypointId};

/// Error type for route requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Start endpoint could not be resolved to a known waypoint.
    #[error("start point not found: {0}")]
    StartNotFound(EndpointRef),
    /// Destination endpoint could not be resolved to a known waypoint.
    #[error("destination not found: {0}")]
    EndNotFound(EndpointRef),
    /// No traversable route exists between the resolved endpoints.
    #[error("no route from {from} to {to}")]
    NoRoute {
        /// Resolved start waypoint.
        from: WaypointId,
        /// Resolved destination waypoint.
        to: WaypointId,
    },
}

/// A route endpoint as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointRef {
    /// A waypoint named directly.
    Waypoint(WaypointId),
    /// A room, resolved through its assigned or nearest waypoint.
    Room(RoomId),
}

impl EndpointRef {
    /// Endpoint naming a waypoint directly.
    pub fn waypoint(id: impl Into<WaypointId>) -> Self {
        Self::Waypoint(id.into())
    }

    /// Endpoint naming a room.
    pub fn room(id: impl Into<RoomId>) -> Self {
        Self::Room(id.into())
    }
}

impl fmt::Display for EndpointRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Waypoint(id) => write!(f, "waypoint {id}"),
            Self::Room(id) => write!(f, "room {id}"),
        }
    }
}

/// A route request between two endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Where the walker starts.
    pub start: EndpointRef,
    /// Where the walker is headed.
    pub end: EndpointRef,
}

impl RouteRequest {
    /// Create a request between two endpoints.
    pub fn between(start: EndpointRef, end: EndpointRef) -> Self {
        Self { start, end }
    }
}

/// Routing facade: one snapshot, one graph, many queries.
pub struct Router {
    snapshot: Arc<MapSnapshot>,
    graph: RouteGraph,
}

impl Router {
    /// Build a router against a snapshot. The graph is constructed here,
    /// once; refresh stale data by constructing a new router.
    pub fn new(snapshot: Arc<MapSnapshot>, policy: CostPolicy) -> Self {
        let graph = RouteGraph::build(&snapshot, policy);
        Self { snapshot, graph }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    /// The snapshot this router was built against.
    pub fn snapshot(&self) -> &MapSnapshot {
        &self.snapshot
    }

    /// Resolve an endpoint reference to a waypoint id known to the graph.
    pub fn resolve(&self, endpoint: &EndpointRef) -> Option<WaypointId> {
        match endpoint {
            EndpointRef::Waypoint(id) => self.graph.contains(id).then(|| id.clone()),
            EndpointRef::Room(room_id) => room_entry_waypoint(&self.snapshot, *room_id),
        }
    }

    /// Serve a route request: resolve both endpoints, search, annotate.
    pub fn route(&self, request: &RouteRequest) -> Result<RoutePath, RouteError> {
        let start = self
            .resolve(&request.start)
            .ok_or_else(|| RouteError::StartNotFound(request.start.clone()))?;
        let end = self
            .resolve(&request.end)
            .ok_or_else(|| RouteError::EndNotFound(request.end.clone()))?;

        let path = self.graph.find_path(&start, &end);
        if !path.is_reachable() {
            return Err(RouteError::NoRoute {
                from: start,
                to: end,
            });
        }

        tracing::debug!(
            start = %start,
            end = %end,
            steps = path.len(),
            distance = path.total_distance,
            "route computed"
        );
        Ok(annotate(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Connection, FloorId, Instruction, Room, Waypoint, WaypointKind};

    fn snapshot() -> Arc<MapSnapshot> {
        let mut snapshot = MapSnapshot::new();
        snapshot.add_waypoint(Waypoint::new(
            "entrance",
            FloorId::new(1),
            0,
            0,
            WaypointKind::Entrance,
        ));
        snapshot.add_waypoint(Waypoint::new(
            "hall",
            FloorId::new(1),
            10,
            0,
            WaypointKind::Hallway,
        ));
        snapshot.add_waypoint(
            Waypoint::new("room_106", FloorId::new(1), 20, 0, WaypointKind::Room)
                .with_label("106-B block"),
        );
        snapshot.add_connection(Connection::new("entrance", "hall", 10.0));
        snapshot.add_connection(Connection::new("hall", "room_106", 10.0));
        snapshot.add_room(
            Room::new(RoomId::new(1))
                .with_floor(FloorId::new(1))
                .with_name("106-B block"),
        );
        Arc::new(snapshot)
    }

    #[test]
    fn test_route_by_waypoint_and_room() {
        let router = Router::new(snapshot(), CostPolicy::default());
        let request = RouteRequest::between(
            EndpointRef::waypoint("entrance"),
            EndpointRef::room(RoomId::new(1)),
        );

        let path = router.route(&request).unwrap();
        assert_eq!(path.total_distance, 20.0);
        assert_eq!(path.steps[0].instruction, Some(Instruction::Start));
        assert_eq!(path.steps[2].instruction, Some(Instruction::Arrive));
    }

    #[test]
    fn test_unknown_start_is_an_error() {
        let router = Router::new(snapshot(), CostPolicy::default());
        let request = RouteRequest::between(
            EndpointRef::waypoint("ghost"),
            EndpointRef::waypoint("hall"),
        );

        assert_eq!(
            router.route(&request),
            Err(RouteError::StartNotFound(EndpointRef::waypoint("ghost")))
        );
    }

    #[test]
    fn test_unresolvable_room_is_an_error() {
        let router = Router::new(snapshot(), CostPolicy::default());
        let request = RouteRequest::between(
            EndpointRef::waypoint("entrance"),
            EndpointRef::room(RoomId::new(42)),
        );

        assert_eq!(
            router.route(&request),
            Err(RouteError::EndNotFound(EndpointRef::room(RoomId::new(42))))
        );
    }

    #[test]
    fn test_disconnected_endpoints_are_an_error() {
        let mut snapshot = MapSnapshot::clone(&snapshot());
        snapshot.add_waypoint(Waypoint::new(
            "island",
            FloorId::new(1),
            500,
            500,
            WaypointKind::Room,
        ));
        let router = Router::new(Arc::new(snapshot), CostPolicy::default());

        let request = RouteRequest::between(
            EndpointRef::waypoint("entrance"),
            EndpointRef::waypoint("island"),
        );
        assert!(matches!(
            router.route(&request),
            Err(RouteError::NoRoute { .. })
        ));
    }
}
