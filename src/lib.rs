//! # wayfinder
//!
//! Indoor route finding over multi-floor waypoint graphs.
//!
//! The engine answers one question:
//!
//! > Given two points in a building, what is the cheapest walkable path,
//! > and how do you describe it to a human?
//!
//! ## Core Contract
//!
//! 1. Build a weighted adjacency graph once from an immutable map snapshot
//! 2. A* search with a floor-aware heuristic and deterministic tie-breaks
//! 3. Annotate the winning path with turn-by-turn instructions
//!
//! ## Architecture
//!
//! ```text
//! RouteRequest → Router → RouteGraph (A* + heuristic) → RoutePath → annotate
//!                   ↓
//!             MapSnapshot (waypoints / connections / rooms / floors)
//! ```
//!
//! ## Failure Semantics
//!
//! The core fails soft: unknown endpoints and disconnected goals yield an
//! empty path with infinite cost, dangling references shrink the graph
//! instead of breaking the build, and an unresolvable room is `None`.
//! Hard errors exist only at the [`Router`] request boundary.
//!
//! ## Determinism
//!
//! - Snapshot and graph storage iterate in waypoint-id order
//! - Frontier ties break on the lowest waypoint id
//! - Same snapshot + same policy + same endpoints → identical route

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod graph;
pub mod instructions;
pub mod policy;
pub mod resolver;
pub mod room_name;
pub mod router;
pub mod search;
pub mod snapshot;
pub mod types;

// Re-exports
pub use types::{Connection, Floor, FloorId, Room, RoomId, Waypoint, WaypointId, WaypointKind};
pub use types::{Instruction, TransitMode, TurnDirection, VerticalDirection};
pub use types::{PathStep, RoutePath};

pub use graph::RouteGraph;
pub use instructions::annotate;
pub use policy::CostPolicy;
pub use resolver::room_entry_waypoint;
pub use room_name::RoomName;
pub use router::{EndpointRef, RouteError, RouteRequest, Router};
pub use snapshot::MapSnapshot;
