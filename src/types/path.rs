//! Route result types.

use serde::{Deserialize, Serialize};

use super::floor::FloorId;
use super::instruction::Instruction;
use super::waypoint::{Waypoint, WaypointId, WaypointKind};

/// One step along a computed route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    /// Waypoint visited at this step.
    pub waypoint: WaypointId,
    /// Floor the step is on.
    pub floor: FloorId,
    /// X coordinate on the floor image.
    pub x: i32,
    /// Y coordinate on the floor image.
    pub y: i32,
    /// Kind of the underlying waypoint.
    pub kind: WaypointKind,
    /// Display label of the underlying waypoint.
    pub label: Option<String>,
    /// Instruction for this step, filled in by the annotation pass.
    pub instruction: Option<Instruction>,
}

impl PathStep {
    /// Materialize a step from a waypoint record, with no instruction.
    pub fn from_waypoint(waypoint: &Waypoint) -> Self {
        Self {
            waypoint: waypoint.id.clone(),
            floor: waypoint.floor,
            x: waypoint.x,
            y: waypoint.y,
            kind: waypoint.kind,
            label: waypoint.label.clone(),
            instruction: None,
        }
    }

    /// Planar position as floats.
    pub fn position(&self) -> (f64, f64) {
        (f64::from(self.x), f64::from(self.y))
    }
}

/// A computed route: ordered steps plus accumulated cost.
///
/// An unreachable or unknown endpoint yields the `unreachable()` sentinel
/// (no steps, infinite distance) rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    /// Steps in start-to-end order.
    pub steps: Vec<PathStep>,
    /// Total accumulated edge cost, `+inf` when no path exists.
    pub total_distance: f64,
}

impl RoutePath {
    /// Sentinel for "no path found": empty steps, infinite distance.
    pub fn unreachable() -> Self {
        Self {
            steps: Vec::new(),
            total_distance: f64::INFINITY,
        }
    }

    /// Whether a path was found.
    pub fn is_reachable(&self) -> bool {
        self.total_distance.is_finite()
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the path has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of floor transitions along the route.
    pub fn floor_changes(&self) -> usize {
        self.steps
            .windows(2)
            .filter(|pair| pair[0].floor != pair[1].floor)
            .count()
    }

    /// Estimated walking time in minutes at the given speed
    /// (coordinate units per minute). `None` for unreachable routes or a
    /// non-positive speed.
    pub fn estimated_minutes(&self, units_per_minute: f64) -> Option<f64> {
        if !self.is_reachable() || units_per_minute <= 0.0 {
            return None;
        }
        Some(self.total_distance / units_per_minute)
    }
}
