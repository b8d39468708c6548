//! Adjacency graph built from a map snapshot.
//!
//! `RouteGraph` is the explicit build phase of the engine's two-phase
//! API: build once against a snapshot, query any number of times. Stale
//! data is handled by building a new graph, never by mutating this one.

use std::collections::BTreeMap;

use crate::policy::CostPolicy;
use crate::snapshot::MapSnapshot;
use crate::types::{Waypoint, WaypointId};

/// Weighted adjacency structure over all waypoints in a snapshot.
///
/// Every waypoint id in the snapshot is a key, even when it has no
/// edges. Connections referencing unknown waypoints and vertical links
/// with dangling targets are skipped at build time; the effective graph
/// simply shrinks instead of the build failing.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    /// Waypoint id -> (neighbor id, edge weight) list.
    adjacency: BTreeMap<WaypointId, Vec<(WaypointId, f64)>>,
    /// Waypoint id -> full record.
    waypoints: BTreeMap<WaypointId, Waypoint>,
    /// Costs used for vertical links and the heuristic.
    policy: CostPolicy,
}

impl RouteGraph {
    /// Build the adjacency structure from a snapshot.
    pub fn build(snapshot: &MapSnapshot, policy: CostPolicy) -> Self {
        let waypoints: BTreeMap<WaypointId, Waypoint> = snapshot
            .waypoints()
            .map(|wp| (wp.id.clone(), wp.clone()))
            .collect();

        let mut adjacency: BTreeMap<WaypointId, Vec<(WaypointId, f64)>> = waypoints
            .keys()
            .map(|id| (id.clone(), Vec::new()))
            .collect();

        // Connections are always bidirectional.
        let mut dangling_connections = 0usize;
        for conn in snapshot.connections() {
            if !adjacency.contains_key(&conn.from) || !adjacency.contains_key(&conn.to) {
                dangling_connections += 1;
                continue;
            }
            if let Some(neighbors) = adjacency.get_mut(&conn.from) {
                neighbors.push((conn.to.clone(), conn.distance));
            }
            if let Some(neighbors) = adjacency.get_mut(&conn.to) {
                neighbors.push((conn.from.clone(), conn.distance));
            }
        }

        // Synthetic edges for stairs/elevator links, weighted by transit
        // kind rather than physical distance.
        let mut dangling_links = 0usize;
        for wp in waypoints.values() {
            let Some(cost) = policy.transit_cost(wp.kind) else {
                continue;
            };
            let Some(target) = &wp.linked_waypoint else {
                continue;
            };
            if !adjacency.contains_key(target) {
                dangling_links += 1;
                continue;
            }
            if let Some(neighbors) = adjacency.get_mut(&wp.id) {
                neighbors.push((target.clone(), cost));
            }
            if let Some(neighbors) = adjacency.get_mut(target) {
                neighbors.push((wp.id.clone(), cost));
            }
        }

        if dangling_connections > 0 || dangling_links > 0 {
            tracing::warn!(
                dangling_connections,
                dangling_links,
                "skipped edges referencing unknown waypoints"
            );
        }
        tracing::debug!(
            waypoints = waypoints.len(),
            connections = snapshot.num_connections(),
            "route graph built"
        );

        Self {
            adjacency,
            waypoints,
            policy,
        }
    }

    /// Whether the graph knows this waypoint id.
    pub fn contains(&self, id: &WaypointId) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Look up a waypoint record.
    pub fn waypoint(&self, id: &WaypointId) -> Option<&Waypoint> {
        self.waypoints.get(id)
    }

    /// Neighbors of a waypoint with their edge weights. Empty for
    /// isolated or unknown ids.
    pub fn neighbors(&self, id: &WaypointId) -> &[(WaypointId, f64)] {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of waypoints in the graph.
    pub fn num_waypoints(&self) -> usize {
        self.waypoints.len()
    }

    /// The cost policy this graph was built with.
    pub fn policy(&self) -> &CostPolicy {
        &self.policy
    }

    /// Estimated remaining cost between two waypoints.
    ///
    /// Same floor: planar Euclidean distance. Different floors: planar
    /// distance plus `floor_penalty` per floor of separation. Unknown
    /// ids estimate to `+inf`, which deprioritizes the branch entirely.
    pub fn heuristic(&self, from: &WaypointId, to: &WaypointId) -> f64 {
        let (Some(a), Some(b)) = (self.waypoints.get(from), self.waypoints.get(to)) else {
            return f64::INFINITY;
        };

        let planar = a.distance_to(b);
        if a.floor == b.floor {
            planar
        } else {
            planar + self.policy.floor_penalty * a.floor.gap(b.floor) as f64
        }
    }
}
