use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::error::SolveError;
use crate::maze::{Maze, Node};
use crate::solvers::{SearchResult, check_endpoint, reconstruct_path};

/// A frontier entry ordered by f-score. The node is part of the ordering
/// only to keep it total; any tie order is acceptable.
struct FrontierNode {
    f_score: f64,
    node: Node,
}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for FrontierNode {}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_score
            .total_cmp(&other.f_score)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Unified weighted search: expands the frontier cell with minimum
/// f = g + weight * manhattan(cell, goal). `weight` 0 is Dijkstra's
/// algorithm, 1 is A*; larger weights trade optimality for speed.
///
/// A cell is re-admitted to the frontier whenever a cheaper g-score is
/// found for it, even after it was already expanded; with `weight` above 1
/// the inflated heuristic is inadmissible and correctness depends on this.
/// Stale heap entries are skipped on extraction instead of being removed
/// in place.
///
/// # Panics
/// If `weight` is negative.
pub fn weighted_a_star(
    maze: &Maze,
    start: Node,
    goal: Node,
    weight: f64,
) -> Result<SearchResult, SolveError> {
    assert!(weight >= 0.0, "heuristic weight must be non-negative");
    check_endpoint(maze, start)?;
    check_endpoint(maze, goal)?;

    let mut g_scores: HashMap<Node, f64> = HashMap::from([(start, 0.0)]);
    let mut move_map: HashMap<Node, Node> = HashMap::new();
    let mut frontier: BinaryHeap<Reverse<FrontierNode>> = BinaryHeap::new();
    frontier.push(Reverse(FrontierNode {
        f_score: weight * maze.manhattan_distance(start, goal) as f64,
        node: start,
    }));

    while let Some(Reverse(FrontierNode { f_score, node })) = frontier.pop() {
        if node == goal {
            return Ok(SearchResult {
                path: reconstruct_path(&move_map, goal),
                costs: g_scores,
            });
        }

        let g_score = g_scores[&node];
        // Skip entries made stale by a later, cheaper admission of the cell
        if f_score > g_score + weight * maze.manhattan_distance(node, goal) as f64 {
            continue;
        }

        for (direction, neighbor) in maze.neighbors(node) {
            if maze.is_wall(node, direction) {
                continue;
            }
            let candidate = g_score + maze.edge_cost(node, direction);
            if candidate < g_scores.get(&neighbor).copied().unwrap_or(f64::INFINITY) {
                g_scores.insert(neighbor, candidate);
                move_map.insert(neighbor, node);
                frontier.push(Reverse(FrontierNode {
                    f_score: candidate + weight * maze.manhattan_distance(neighbor, goal) as f64,
                    node: neighbor,
                }));
            }
        }
    }

    Err(SolveError::PathNotFound { start, goal })
}

/// Dijkstra's algorithm: weighted search with the heuristic disabled.
pub fn dijkstra(maze: &Maze, start: Node, goal: Node) -> Result<SearchResult, SolveError> {
    weighted_a_star(maze, start, goal, 0.0)
}

/// A*: weighted search with the Manhattan heuristic at full weight.
pub fn a_star(maze: &Maze, start: Node, goal: Node) -> Result<SearchResult, SolveError> {
    weighted_a_star(maze, start, goal, 1.0)
}

/// Cost map of a goal-less Dijkstra sweep over one connected component.
#[derive(Debug, Clone)]
pub struct DijkstraMap {
    /// Cheapest cost from the start, per reachable cell.
    pub costs: HashMap<Node, f64>,
    /// Predecessor links; feed to [`reconstruct_path`] for a route to any
    /// reached cell.
    pub moves: HashMap<Node, Node>,
}

impl DijkstraMap {
    /// The reachable cell with the highest path cost from the start. Useful
    /// for picking a distant finish on a freshly generated maze.
    pub fn farthest(&self) -> Option<(Node, f64)> {
        self.costs
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(&node, &cost)| (node, cost))
    }
}

/// Expands the whole connected component around `start` with no goal,
/// returning the cost of every reachable cell.
pub fn dijkstra_map(maze: &Maze, start: Node) -> Result<DijkstraMap, SolveError> {
    check_endpoint(maze, start)?;

    let mut costs: HashMap<Node, f64> = HashMap::from([(start, 0.0)]);
    let mut moves: HashMap<Node, Node> = HashMap::new();
    let mut frontier: BinaryHeap<Reverse<FrontierNode>> = BinaryHeap::new();
    frontier.push(Reverse(FrontierNode {
        f_score: 0.0,
        node: start,
    }));

    while let Some(Reverse(FrontierNode { f_score, node })) = frontier.pop() {
        let g_score = costs[&node];
        if f_score > g_score {
            continue;
        }
        for (direction, neighbor) in maze.neighbors(node) {
            if maze.is_wall(node, direction) {
                continue;
            }
            let candidate = g_score + maze.edge_cost(node, direction);
            if candidate < costs.get(&neighbor).copied().unwrap_or(f64::INFINITY) {
                costs.insert(neighbor, candidate);
                moves.insert(neighbor, node);
                frontier.push(Reverse(FrontierNode {
                    f_score: candidate,
                    node: neighbor,
                }));
            }
        }
    }

    Ok(DijkstraMap { costs, moves })
}
