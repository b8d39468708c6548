//! Floor types for the routing graph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Floor identifier.
///
/// This is the stable id assigned by the map editor, not an ordinal level
/// number; the heuristic only ever looks at the absolute difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FloorId(i64);

impl FloorId {
    /// Create a new FloorId.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner id.
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Absolute floor difference to another floor.
    pub fn gap(&self, other: FloorId) -> u64 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for FloorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for FloorId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Floor plan metadata.
///
/// Only the image dimensions matter to the engine; they provide the
/// fallback target point when resolving a room without a waypoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    /// Floor identifier.
    pub id: FloorId,
    /// Width of the floor image in pixels, if known.
    pub image_width: Option<u32>,
    /// Height of the floor image in pixels, if known.
    pub image_height: Option<u32>,
}

impl Floor {
    /// Create a floor with unknown image dimensions.
    pub fn new(id: FloorId) -> Self {
        Self {
            id,
            image_width: None,
            image_height: None,
        }
    }

    /// Set the image dimensions.
    pub fn with_image_size(mut self, width: u32, height: u32) -> Self {
        self.image_width = Some(width);
        self.image_height = Some(height);
        self
    }

    /// Center of the floor image, when both dimensions are known and non-zero.
    pub fn center(&self) -> Option<(f64, f64)> {
        match (self.image_width, self.image_height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => {
                Some((f64::from(w) / 2.0, f64::from(h) / 2.0))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_gap() {
        assert_eq!(FloorId::new(1).gap(FloorId::new(4)), 3);
        assert_eq!(FloorId::new(4).gap(FloorId::new(1)), 3);
        assert_eq!(FloorId::new(2).gap(FloorId::new(2)), 0);
    }

    #[test]
    fn test_center_requires_both_dimensions() {
        let floor = Floor::new(FloorId::new(1));
        assert_eq!(floor.center(), None);

        let sized = Floor::new(FloorId::new(1)).with_image_size(800, 600);
        assert_eq!(sized.center(), Some((400.0, 300.0)));
    }

    #[test]
    fn test_center_rejects_zero_dimensions() {
        let degenerate = Floor::new(FloorId::new(1)).with_image_size(0, 600);
        assert_eq!(degenerate.center(), None);
    }
}
