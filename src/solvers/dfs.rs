use std::collections::HashMap;

use crate::error::SolveError;
use crate::maze::{Maze, Node};
use crate::solvers::{SearchResult, check_endpoint, reconstruct_path};

/// Iterative depth-first search with an explicit stack. Finds some path to
/// the goal, not necessarily a minimal one.
pub fn depth_first(maze: &Maze, start: Node, goal: Node) -> Result<SearchResult, SolveError> {
    check_endpoint(maze, start)?;
    check_endpoint(maze, goal)?;

    let mut stack = vec![start];
    let mut costs: HashMap<Node, f64> = HashMap::from([(start, 0.0)]);
    let mut move_map: HashMap<Node, Node> = HashMap::new();

    while let Some(node) = stack.pop() {
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
            stack.push(neighbor);
        }
    }

    Err(SolveError::PathNotFound { start, goal })
}

/// Recursive depth-first search. Unwinds as soon as the goal is first
/// reached, leaving the rest of the graph unexplored.
pub fn depth_first_recursive(
    maze: &Maze,
    start: Node,
    goal: Node,
) -> Result<SearchResult, SolveError> {
    check_endpoint(maze, start)?;
    check_endpoint(maze, goal)?;

    let mut costs: HashMap<Node, f64> = HashMap::from([(start, 0.0)]);
    let mut move_map: HashMap<Node, Node> = HashMap::new();

    if visit(maze, start, goal, &mut costs, &mut move_map) {
        Ok(SearchResult {
            path: reconstruct_path(&move_map, goal),
            costs,
        })
    } else {
        Err(SolveError::PathNotFound { start, goal })
    }
}

fn visit(
    maze: &Maze,
    node: Node,
    goal: Node,
    costs: &mut HashMap<Node, f64>,
    move_map: &mut HashMap<Node, Node>,
) -> bool {
    if node == goal {
        return true;
    }
    let g_score = costs[&node];
    for (direction, neighbor) in maze.neighbors(node) {
        if maze.is_wall(node, direction) || costs.contains_key(&neighbor) {
            continue;
        }
        costs.insert(neighbor, g_score + maze.edge_cost(node, direction));
        move_map.insert(neighbor, node);
        if visit(maze, neighbor, goal, costs, move_map) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::iterative_backtrack;
    use crate::solvers::test_util::assert_valid_path;

    #[test]
    fn test_both_variants_find_a_path() {
        let mut maze = Maze::new(6, 6);
        iterative_backtrack(&mut maze, 0.0, Some(17), None);
        for result in [
            depth_first(&maze, (0, 0), (5, 5)).unwrap(),
            depth_first_recursive(&maze, (0, 0), (5, 5)).unwrap(),
        ] {
            assert_eq!(result.path.first(), Some(&(0, 0)));
            assert_eq!(result.path.last(), Some(&(5, 5)));
            assert_valid_path(&maze, &result.path);
        }
    }

    #[test]
    fn test_variants_agree_on_a_spanning_tree() {
        // A perfect maze admits exactly one route between any two cells, so
        // every search must return it.
        let mut maze = Maze::new(5, 5);
        iterative_backtrack(&mut maze, 0.0, Some(29), None);
        let iterative = depth_first(&maze, (4, 0), (0, 4)).unwrap();
        let recursive = depth_first_recursive(&maze, (4, 0), (0, 4)).unwrap();
        assert_eq!(iterative.path, recursive.path);
    }

    #[test]
    fn test_dfs_reports_no_path_on_all_wall_grid() {
        let maze = Maze::new(3, 3);
        for result in [
            depth_first(&maze, (0, 0), (2, 2)),
            depth_first_recursive(&maze, (0, 0), (2, 2)),
        ] {
            assert_eq!(
                result,
                Err(SolveError::PathNotFound {
                    start: (0, 0),
                    goal: (2, 2)
                })
            );
        }
    }
}
