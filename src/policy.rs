//! Cost policy for graph construction and search.

use serde::{Deserialize, Serialize};

use crate::types::WaypointKind;

/// Tunable costs applied while building the graph and running A*.
///
/// ## Parameters
///
/// - `stairs_cost`: fixed weight of a stair link between floors
/// - `elevator_cost`: fixed weight of an elevator link between floors
/// - `floor_penalty`: heuristic surcharge per floor of separation
/// - `max_expansions`: cap on A* node expansions, `None` = unbounded
///
/// The default `floor_penalty` (100) exceeds both transit costs, which
/// makes the heuristic overestimate across floors. That steers routes
/// toward the fewest floor changes at the cost of strict shortest-path
/// optimality in multi-floor buildings. Use [`CostPolicy::admissible`]
/// when optimality matters more than floor-change aesthetics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostPolicy {
    /// Fixed cost of traversing a stair link.
    pub stairs_cost: f64,
    /// Fixed cost of traversing an elevator link.
    pub elevator_cost: f64,
    /// Heuristic penalty per floor of separation.
    pub floor_penalty: f64,
    /// Maximum A* expansions before the search gives up with
    /// "no path found". `None` leaves the search unbounded.
    pub max_expansions: Option<usize>,
}

impl CostPolicy {
    /// Policy with a true lower-bound heuristic: the per-floor penalty is
    /// the cheapest possible transit cost, so A* keeps its optimality
    /// guarantee across floors.
    pub fn admissible() -> Self {
        let default = Self::default();
        let floor_penalty = default.stairs_cost.min(default.elevator_cost);
        Self {
            floor_penalty,
            ..default
        }
    }

    /// Cap the number of A* expansions.
    pub fn with_max_expansions(mut self, cap: usize) -> Self {
        self.max_expansions = Some(cap);
        self
    }

    /// Cost of the vertical link originating at a waypoint of the given
    /// kind. `None` for kinds that do not carry people between floors.
    pub fn transit_cost(&self, kind: WaypointKind) -> Option<f64> {
        match kind {
            WaypointKind::Stairs => Some(self.stairs_cost),
            WaypointKind::Elevator => Some(self.elevator_cost),
            _ => None,
        }
    }
}

impl Default for CostPolicy {
    fn default() -> Self {
        Self {
            stairs_cost: 50.0,
            elevator_cost: 30.0,
            floor_penalty: 100.0,
            max_expansions: None,
        }
    }
}
