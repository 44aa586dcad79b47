use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::flight::{AirportCode, FlightId};
use crate::graph::FlightGraph;

/// Cheapest path through the route graph: the flights to take, in order,
/// plus the exact cost accumulated by the search.
#[derive(Debug, Clone, PartialEq)]
pub struct CheapestPath {
    pub legs: Vec<FlightId>,
    pub total_cost: f64,
}

impl CheapestPath {
    /// Number of flights in the path.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }
}

/// Find the minimum-total-cost flight sequence between two airports.
///
/// Dijkstra's algorithm over non-negative edge weights. A node is finalised
/// once popped at its minimal cost, so cycles and self-loop flights cannot
/// cause repeated relaxation. The predecessor map stores the *edge* taken
/// into each node, not just the previous node, because parallel flights
/// between the same airports must stay distinguishable.
///
/// Tie-break: a relaxation only replaces an existing best on a strictly
/// smaller cost, so among cost-equal alternatives the first one discovered
/// wins; together with the heap ordering on airport code this makes the
/// result deterministic for a given snapshot order.
///
/// A degenerate query (`origin == destination`) has no route: a route must
/// contain at least one flight.
pub fn find_cheapest_path(
    graph: &FlightGraph,
    origin: &str,
    destination: &str,
) -> Option<CheapestPath> {
    if origin == destination {
        return None;
    }
    if !graph.contains(origin) || !graph.contains(destination) {
        return None;
    }

    let mut best: HashMap<AirportCode, f64> = HashMap::new();
    let mut parents: HashMap<AirportCode, ParentEdge> = HashMap::new();
    let mut queue = BinaryHeap::new();

    best.insert(origin.to_string(), 0.0);
    queue.push(QueueEntry::new(origin.to_string(), 0.0));

    while let Some(entry) = queue.pop() {
        let settled = best.get(&entry.node).copied().unwrap_or(f64::INFINITY);
        if entry.cost.0 > settled {
            // Stale heap entry; this node was already finalised cheaper.
            continue;
        }

        if entry.node == destination {
            let legs = reconstruct_legs(&parents, origin, destination);
            return Some(CheapestPath {
                legs,
                total_cost: settled,
            });
        }

        for edge in graph.neighbours(&entry.node) {
            let candidate = settled + edge.cost;
            if candidate < best.get(&edge.target).copied().unwrap_or(f64::INFINITY) {
                best.insert(edge.target.clone(), candidate);
                parents.insert(
                    edge.target.clone(),
                    ParentEdge {
                        from: entry.node.clone(),
                        flight: edge.flight,
                    },
                );
                queue.push(QueueEntry::new(edge.target.clone(), candidate));
            }
        }
    }

    None
}

/// Edge taken to reach a node on its best-known path.
#[derive(Debug, Clone)]
struct ParentEdge {
    from: AirportCode,
    flight: FlightId,
}

fn reconstruct_legs(
    parents: &HashMap<AirportCode, ParentEdge>,
    origin: &str,
    destination: &str,
) -> Vec<FlightId> {
    let mut legs = Vec::new();
    let mut current = destination;
    while current != origin {
        let Some(parent) = parents.get(current) else {
            break;
        };
        legs.push(parent.flight);
        current = &parent.from;
    }
    legs.reverse();
    legs
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: AirportCode,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: AirportCode, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
