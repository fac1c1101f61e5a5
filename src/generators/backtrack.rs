use std::sync::mpsc::Sender;

use rand::{Rng, seq::SliceRandom};

use crate::generators::{MoveEvent, get_rng, notify};
use crate::maze::{Direction, Maze, Node};

/// Carves a maze by randomized depth-first traversal with an explicit stack.
///
/// From a random start cell, the four directions are shuffled and scanned for
/// the first neighbour that is unvisited or, with probability `loop_chance`,
/// already visited (opening a loop). On success the current cell is pushed
/// and the walk moves on; otherwise it backtracks by popping the stack. At
/// `loop_chance` 0 this yields a spanning tree with long, winding corridors.
///
/// # Panics
/// If `loop_chance` is outside `[0, 1]`.
pub fn iterative_backtrack(
    maze: &mut Maze,
    loop_chance: f64,
    seed: Option<u64>,
    events: Option<&Sender<MoveEvent>>,
) {
    assert!(
        (0.0..=1.0).contains(&loop_chance),
        "loop chance must be within [0, 1]"
    );

    let mut rng = get_rng(seed);
    let mut current = maze.random_node(&mut rng);
    let mut stack = vec![current];
    let mut directions = Direction::ALL;
    notify(events, MoveEvent::Visit(current));

    while !stack.is_empty() {
        tracing::debug!("Visiting node: {:?}", current);
        directions.shuffle(&mut rng);

        let next = directions.into_iter().find_map(|direction| {
            let dest = direction.step(current);
            if !maze.contains(dest) {
                return None;
            }
            // Unvisited, or a chance loop back into the carved region
            if is_unvisited(maze, dest) || rng.random::<f64>() < loop_chance {
                Some((direction, dest))
            } else {
                None
            }
        });

        match next {
            Some((direction, dest)) => {
                maze.remove_wall(current, direction);
                stack.push(current);
                current = dest;
                notify(events, MoveEvent::Visit(dest));
            }
            None => {
                notify(events, MoveEvent::Complete(current));
                if let Some(node) = stack.pop() {
                    current = node;
                }
            }
        }
    }
}

/// A cell is unvisited while none of its edges has been opened.
fn is_unvisited(maze: &Maze, node: Node) -> bool {
    Direction::ALL
        .into_iter()
        .all(|direction| maze.is_wall(node, direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_util::{is_connected, open_edge_count};

    #[test]
    fn test_backtrack_spans_the_grid() {
        let mut maze = Maze::new(5, 5);
        iterative_backtrack(&mut maze, 0.0, Some(42), None);
        assert_eq!(open_edge_count(&maze), 24);
        assert!(is_connected(&maze));
    }

    #[test]
    fn test_backtrack_keeps_wall_symmetry() {
        let mut maze = Maze::new(6, 6);
        iterative_backtrack(&mut maze, 0.2, Some(8), None);
        for row in 0..6 {
            for col in 0..6 {
                for direction in Direction::ALL {
                    let dest = direction.step((row, col));
                    if maze.contains(dest) {
                        assert_eq!(
                            maze.is_wall((row, col), direction),
                            maze.is_wall(dest, direction.flip()),
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_backtrack_loop_chance_adds_edges() {
        let mut maze = Maze::new(6, 6);
        iterative_backtrack(&mut maze, 0.5, Some(42), None);
        assert!(open_edge_count(&maze) > 35);
        assert!(is_connected(&maze));
    }

    #[test]
    fn test_backtrack_handles_single_cell_grid() {
        let mut maze = Maze::new(1, 1);
        iterative_backtrack(&mut maze, 0.0, Some(0), None);
        assert_eq!(open_edge_count(&maze), 0);
    }

    #[test]
    #[should_panic]
    fn test_backtrack_rejects_bad_loop_chance() {
        iterative_backtrack(&mut Maze::new(2, 2), 1.5, Some(0), None);
    }
}
