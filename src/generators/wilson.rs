use std::collections::{HashMap, HashSet};
use std::sync::mpsc::Sender;

use rand::Rng;
use rand_set::RandSetDefault;

use crate::generators::{MoveEvent, get_rng, notify};
use crate::maze::{Direction, Maze, Node};

/// Carves a maze by Wilson's algorithm.
///
/// Repeatedly picks a random unvisited cell and walks from it with uniformly
/// random steps, ignoring walls, until the walk touches the carved tree. Only
/// each cell's last exit direction is remembered, so revisited segments of
/// the walk are erased; following the surviving directions from the root
/// commits the loop-erased path. Of the generators here this is the only one
/// that samples exactly uniformly over all spanning trees of the grid.
///
/// `loop_chance` applies as a final pass that opens each remaining interior
/// wall independently with that probability.
///
/// # Panics
/// If `loop_chance` is outside `[0, 1]`.
pub fn wilson(
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
    let mut unvisited = (0..maze.rows())
        .flat_map(|row| (0..maze.cols()).map(move |col| (row, col)))
        .collect::<RandSetDefault<Node>>();
    let mut visited: HashSet<Node> = HashSet::new();

    let first = maze.random_node(&mut rng);
    unvisited.remove(&first);
    visited.insert(first);
    notify(events, MoveEvent::Complete(first));

    while let Some(&root) = unvisited.get_rand() {
        // Random walk from the root until it touches the tree. Only the last
        // exit direction of each cell survives, which erases the walk's loops.
        let mut walk: HashMap<Node, Direction> = HashMap::new();
        let mut node = root;
        while !visited.contains(&node) {
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            let dest = direction.step(node);
            if !maze.contains(dest) {
                continue;
            }
            walk.insert(node, direction);
            notify(events, MoveEvent::Visit(node));
            node = dest;
        }

        // Commit the loop-erased path from the root to the point of contact
        let mut node = root;
        while !visited.contains(&node) {
            let direction = walk[&node];
            maze.remove_wall(node, direction);
            visited.insert(node);
            unvisited.remove(&node);
            notify(events, MoveEvent::Complete(node));
            node = direction.step(node);
        }
    }

    if loop_chance > 0.0 {
        braid(maze, loop_chance, &mut rng);
    }
}

/// Opens each remaining interior wall independently, adding loops to an
/// otherwise perfect maze.
fn braid<R: Rng>(maze: &mut Maze, loop_chance: f64, rng: &mut R) {
    for row in 0..maze.rows() {
        for col in 0..maze.cols() {
            for direction in [Direction::South, Direction::East] {
                let node = (row, col);
                let dest = direction.step(node);
                if maze.contains(dest)
                    && maze.is_wall(node, direction)
                    && rng.random::<f64>() < loop_chance
                {
                    maze.remove_wall(node, direction);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::generators::test_util::{is_connected, open_edge_count};

    #[test]
    fn test_wilson_spans_the_grid() {
        let mut maze = Maze::new(4, 4);
        wilson(&mut maze, 0.0, Some(11), None);
        assert_eq!(open_edge_count(&maze), 15);
        assert!(is_connected(&maze));
    }

    #[test]
    fn test_wilson_full_braid_opens_every_interior_wall() {
        let mut maze = Maze::new(5, 4);
        wilson(&mut maze, 1.0, Some(11), None);
        // A 5x4 grid has 4*4 + 5*3 interior edges
        assert_eq!(open_edge_count(&maze), 31);
    }

    #[test]
    fn test_wilson_samples_spanning_trees_uniformly() {
        // The 2x2 grid is a single 4-cycle, so it has exactly four spanning
        // trees, one per choice of closed edge.
        let mut counts: HashMap<(Node, Direction), usize> = HashMap::new();
        for _ in 0..400 {
            let mut maze = Maze::new(2, 2);
            wilson(&mut maze, 0.0, None, None);
            *counts.entry(closed_interior_edge(&maze)).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 4);
        for (&edge, &count) in &counts {
            assert!(
                (60..=140).contains(&count),
                "tree with closed edge {:?} sampled {} times out of 400",
                edge,
                count
            );
        }
    }

    fn closed_interior_edge(maze: &Maze) -> (Node, Direction) {
        for node in [(0, 0), (0, 1), (1, 0)] {
            for direction in [Direction::South, Direction::East] {
                if maze.contains(direction.step(node)) && maze.is_wall(node, direction) {
                    return (node, direction);
                }
            }
        }
        panic!("a 2x2 spanning tree must leave exactly one interior wall");
    }
}
