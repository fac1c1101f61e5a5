use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::sync::mpsc::Sender;

use rand::Rng;

use crate::generators::{MoveEvent, get_rng, notify};
use crate::maze::{Direction, Maze, Node};

/// A candidate edge on the frontier, ordered by its random weight.
struct FrontierEdge {
    weight: f64,
    node: Node,
    direction: Direction,
}

impl PartialEq for FrontierEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for FrontierEdge {}

impl PartialOrd for FrontierEdge {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEdge {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

/// Carves a maze by randomized Prim's algorithm.
///
/// Starting from one random cell, every outgoing edge joins a frontier heap
/// under a fresh uniform weight. The minimum-weight edge is repeatedly
/// extracted: edges into the carved region are discarded (or opened as loops
/// with probability `loop_chance`), all others are opened and the destination
/// contributes its own freshly weighted edges. The result is a
/// minimum-random-weight spanning tree with shorter, bushier corridors than
/// backtracking produces.
///
/// # Panics
/// If `loop_chance` is outside `[0, 1]`.
pub fn randomized_prim(
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
    let start = maze.random_node(&mut rng);
    let mut visited: HashSet<Node> = HashSet::from([start]);
    let mut frontier: BinaryHeap<Reverse<FrontierEdge>> = BinaryHeap::new();

    notify(events, MoveEvent::Visit(start));
    push_candidates(maze, start, &mut frontier, &mut rng);
    notify(events, MoveEvent::Complete(start));

    while let Some(Reverse(edge)) = frontier.pop() {
        let dest = edge.direction.step(edge.node);
        if visited.contains(&dest) {
            // A chance loop back into the carved region
            if maze.is_wall(edge.node, edge.direction) && rng.random::<f64>() < loop_chance {
                maze.remove_wall(edge.node, edge.direction);
            }
            continue;
        }

        maze.remove_wall(edge.node, edge.direction);
        visited.insert(dest);
        notify(events, MoveEvent::Visit(dest));
        push_candidates(maze, dest, &mut frontier, &mut rng);
        notify(events, MoveEvent::Complete(dest));
    }
}

/// Enqueues every outgoing edge of `node` under a fresh random weight.
fn push_candidates<R: Rng>(
    maze: &Maze,
    node: Node,
    frontier: &mut BinaryHeap<Reverse<FrontierEdge>>,
    rng: &mut R,
) {
    for (direction, _) in maze.neighbors(node) {
        frontier.push(Reverse(FrontierEdge {
            weight: rng.random(),
            node,
            direction,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_util::{is_connected, open_edge_count};

    #[test]
    fn test_prim_spans_the_grid() {
        let mut maze = Maze::new(6, 6);
        randomized_prim(&mut maze, 0.0, Some(9), None);
        assert_eq!(open_edge_count(&maze), 35);
        assert!(is_connected(&maze));
    }

    #[test]
    fn test_prim_loop_chance_adds_edges() {
        let mut maze = Maze::new(6, 6);
        randomized_prim(&mut maze, 0.5, Some(9), None);
        assert!(open_edge_count(&maze) > 35);
        assert!(is_connected(&maze));
    }

    #[test]
    fn test_frontier_extracts_minimum_weight_first() {
        let mut heap: BinaryHeap<Reverse<FrontierEdge>> = BinaryHeap::new();
        for weight in [0.7, 0.1, 0.4] {
            heap.push(Reverse(FrontierEdge {
                weight,
                node: (0, 0),
                direction: Direction::East,
            }));
        }
        let order: Vec<f64> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.weight)).collect();
        assert_eq!(order, vec![0.1, 0.4, 0.7]);
    }

    #[test]
    #[should_panic]
    fn test_prim_rejects_bad_loop_chance() {
        randomized_prim(&mut Maze::new(2, 2), -0.1, Some(0), None);
    }
}
