//! A* search over the route graph.
//!
//! Search nodes live in a per-query arena with parent stored as an
//! index, so reconstruction is a plain index walk and nothing outlives
//! the call.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::graph::RouteGraph;
use crate::types::{PathStep, RoutePath, WaypointId};

/// Search node in the per-query arena.
#[derive(Debug)]
struct SearchNode {
    /// Waypoint this node visits.
    waypoint: WaypointId,
    /// Accumulated cost from the start.
    g_score: f64,
    /// Arena index of the predecessor node.
    parent: Option<usize>,
}

/// Frontier entry, ordered so `BinaryHeap` pops the lowest `f_score`.
///
/// Ties break on waypoint id (lowest first) so results are stable across
/// runs and platforms.
#[derive(Debug)]
struct FrontierEntry {
    /// Estimated total cost through this node.
    f_score: f64,
    /// Arena index of the node.
    node: usize,
    /// Waypoint id, duplicated here for tie-breaking.
    waypoint: WaypointId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the min f_score.
        match other.f_score.partial_cmp(&self.f_score) {
            Some(Ordering::Equal) | None => other.waypoint.cmp(&self.waypoint),
            Some(ord) => ord,
        }
    }
}

impl RouteGraph {
    /// Find the cheapest path between two waypoints.
    ///
    /// Soft failure semantics: an unknown endpoint or an exhausted
    /// frontier yields [`RoutePath::unreachable`] rather than an error,
    /// and `start == end` yields a single-step path of cost zero.
    pub fn find_path(&self, start: &WaypointId, end: &WaypointId) -> RoutePath {
        if !self.contains(start) || !self.contains(end) {
            return RoutePath::unreachable();
        }

        if start == end {
            let Some(wp) = self.waypoint(start) else {
                return RoutePath::unreachable();
            };
            return RoutePath {
                steps: vec![PathStep::from_waypoint(wp)],
                total_distance: 0.0,
            };
        }

        let mut arena: Vec<SearchNode> = vec![SearchNode {
            waypoint: start.clone(),
            g_score: 0.0,
            parent: None,
        }];
        let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        frontier.push(FrontierEntry {
            f_score: self.heuristic(start, end),
            node: 0,
            waypoint: start.clone(),
        });

        let mut best_g: HashMap<WaypointId, f64> = HashMap::new();
        best_g.insert(start.clone(), 0.0);
        let mut closed: HashSet<WaypointId> = HashSet::new();
        let mut expansions = 0usize;

        while let Some(entry) = frontier.pop() {
            let current_id = arena[entry.node].waypoint.clone();
            let current_g = arena[entry.node].g_score;

            if current_id == *end {
                return self.reconstruct(&arena, entry.node);
            }

            // Stale duplicate from an earlier relaxation.
            if !closed.insert(current_id.clone()) {
                continue;
            }

            if let Some(cap) = self.policy().max_expansions {
                expansions += 1;
                if expansions > cap {
                    tracing::debug!(cap, "expansion cap reached, giving up");
                    break;
                }
            }

            for (neighbor, cost) in self.neighbors(&current_id) {
                if self.waypoint(neighbor).is_none() || closed.contains(neighbor) {
                    continue;
                }

                let tentative = current_g + cost;
                if best_g.get(neighbor).is_some_and(|&g| tentative >= g) {
                    continue;
                }
                best_g.insert(neighbor.clone(), tentative);

                arena.push(SearchNode {
                    waypoint: neighbor.clone(),
                    g_score: tentative,
                    parent: Some(entry.node),
                });
                frontier.push(FrontierEntry {
                    f_score: tentative + self.heuristic(neighbor, end),
                    node: arena.len() - 1,
                    waypoint: neighbor.clone(),
                });
            }
        }

        RoutePath::unreachable()
    }

    /// Materialize the parent chain into a start-to-end step list.
    fn reconstruct(&self, arena: &[SearchNode], terminal: usize) -> RoutePath {
        let total_distance = arena[terminal].g_score;
        let mut steps = Vec::new();

        let mut cursor = Some(terminal);
        while let Some(index) = cursor {
            let node = &arena[index];
            if let Some(wp) = self.waypoint(&node.waypoint) {
                steps.push(PathStep::from_waypoint(wp));
            }
            cursor = node.parent;
        }
        steps.reverse();

        RoutePath {
            steps,
            total_distance,
        }
    }
}
