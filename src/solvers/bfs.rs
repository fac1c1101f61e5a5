use std::collections::{HashMap, VecDeque};

use crate::error::SolveError;
use crate::maze::{Maze, Node};
use crate::solvers::{SearchResult, check_endpoint, reconstruct_path};

/// Breadth-first search. Cells are admitted once, on first discovery, and
/// the FIFO frontier minimizes edge count; that is the optimal path only
/// while every open edge costs the same.
pub fn breadth_first(maze: &Maze, start: Node, goal: Node) -> Result<SearchResult, SolveError> {
    check_endpoint(maze, start)?;
    check_endpoint(maze, goal)?;

    let mut queue: VecDeque<Node> = VecDeque::from([start]);
    let mut costs: HashMap<Node, f64> = HashMap::from([(start, 0.0)]);
    let mut move_map: HashMap<Node, Node> = HashMap::new();

    while let Some(node) = queue.pop_front() {
        if node == goal {
            return Ok(SearchResult {
                path: reconstruct_path(&move_map, goal),
                costs,
            });
        }
        let g_score = costs[&node];
        for (direction, neighbor) in maze.neighbors(node) {
            if maze.is_wall(node, direction) || costs.contains_key(&neighbor) {
                continue;
            }
            costs.insert(neighbor, g_score + maze.edge_cost(node, direction));
            move_map.insert(neighbor, node);
            queue.push_back(neighbor);
        }
    }

    Err(SolveError::PathNotFound { start, goal })
}
