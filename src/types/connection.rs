//! Connection types for the routing graph.

use serde::{Deserialize, Serialize};

use super::waypoint::WaypointId;

/// An undirected walkable segment between two waypoints.
///
/// `distance` is the physical path length in the same unit as waypoint
/// coordinates. Positivity is enforced by the owning data layer; the
/// engine only ever adds it to accumulated costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// One endpoint.
    pub from: WaypointId,
    /// The other endpoint.
    pub to: WaypointId,
    /// Physical length of the segment.
    pub distance: f64,
}

impl Connection {
    /// Create a new connection.
    pub fn new(from: impl Into<WaypointId>, to: impl Into<WaypointId>, distance: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_endpoints() {
        let conn = Connection::new("a", "b", 12.5);
        assert_eq!(conn.from.as_str(), "a");
        assert_eq!(conn.to.as_str(), "b");
        assert_eq!(conn.distance, 12.5);
    }
}
