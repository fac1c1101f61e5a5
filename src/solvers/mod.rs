use std::collections::HashMap;

mod bfs;
mod dfs;
mod weighted;

pub use bfs::breadth_first;
pub use dfs::{depth_first, depth_first_recursive};
pub use weighted::{DijkstraMap, a_star, dijkstra, dijkstra_map, weighted_a_star};

use crate::error::SolveError;
use crate::maze::{Maze, Node};

/// Result of a successful path query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best known cumulative cost from the start, per reached cell.
    pub costs: HashMap<Node, f64>,
    /// Route from start to goal, both inclusive.
    pub path: Vec<Node>,
}

pub enum Solver {
    Dijkstra,
    AStar,
    WeightedAStar(f64),
    Bfs,
    Dfs,
    DfsRecursive,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dijkstra => write!(f, "Dijkstra's Algorithm"),
            Solver::AStar => write!(f, "A* Search"),
            Solver::WeightedAStar(weight) => write!(f, "Weighted A* Search (weight {})", weight),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::DfsRecursive => write!(f, "Recursive Depth-First Search"),
        }
    }
}

/// Runs the selected search between two cells of a generated maze.
pub fn solve_maze(
    maze: &Maze,
    solver: Solver,
    start: Node,
    goal: Node,
) -> Result<SearchResult, SolveError> {
    tracing::info!("Searching {:?} -> {:?} using {}", start, goal, solver);
    match solver {
        Solver::Dijkstra => dijkstra(maze, start, goal),
        Solver::AStar => a_star(maze, start, goal),
        Solver::WeightedAStar(weight) => weighted_a_star(maze, start, goal, weight),
        Solver::Bfs => breadth_first(maze, start, goal),
        Solver::Dfs => depth_first(maze, start, goal),
        Solver::DfsRecursive => depth_first_recursive(maze, start, goal),
    }
}

/// Walks the move map from the goal back to the start (which has no
/// predecessor entry), then reverses. Pure: reconstructing twice from the
/// same map yields identical paths.
pub fn reconstruct_path(move_map: &HashMap<Node, Node>, goal: Node) -> Vec<Node> {
    let mut path = vec![goal];
    let mut node = goal;
    while let Some(&prev) = move_map.get(&node) {
        path.push(prev);
        node = prev;
    }
    path.reverse();
    path
}

/// Rejects search endpoints outside the grid.
fn check_endpoint(maze: &Maze, node: Node) -> Result<(), SolveError> {
    if maze.contains(node) {
        Ok(())
    } else {
        Err(SolveError::InvalidCoordinate(node))
    }
}
