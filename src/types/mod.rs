//! Core types for the routing engine.

pub mod connection;
pub mod floor;
pub mod instruction;
pub mod path;
pub mod room;
pub mod waypoint;

pub use connection::Connection;
pub use floor::{Floor, FloorId};
pub use instruction::{Instruction, TransitMode, TurnDirection, VerticalDirection};
pub use path::{PathStep, RoutePath};
pub use room::{Room, RoomId};
pub use waypoint::{Waypoint, WaypointId, WaypointKind};
