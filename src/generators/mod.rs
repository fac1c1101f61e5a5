use std::sync::mpsc::Sender;

use rand::{SeedableRng, rngs::StdRng};

mod backtrack;
mod prim;
mod wilson;

pub use backtrack::iterative_backtrack;
pub use prim::randomized_prim;
pub use wilson::wilson;

use crate::maze::{Maze, Node};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// A carve-progress event, emitted in order so an external consumer can
/// animate generation step by step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEvent {
    /// The algorithm stepped into a cell.
    Visit(Node),
    /// The algorithm finished working on a cell.
    Complete(Node),
}

/// Sends an event to the sink, if one is attached. A dropped receiver never
/// aborts generation.
fn notify(events: Option<&Sender<MoveEvent>>, event: MoveEvent) {
    if let Some(tx) = events {
        let _ = tx.send(event);
    }
}

pub enum Generator {
    IterBacktrack,
    Prim,
    Wilson,
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::IterBacktrack => write!(f, "Iterative Backtracking"),
            Generator::Prim => write!(f, "Randomized Prim's Algorithm"),
            Generator::Wilson => write!(f, "Wilson's Algorithm"),
        }
    }
}

/// Carves a maze into `maze` with the selected algorithm. `loop_chance` is
/// the probability of opening extra loop edges (0 produces a perfect maze),
/// `seed` fixes the random sequence, and `events` receives the carve log.
pub fn generate_maze(
    maze: &mut Maze,
    generator: Generator,
    loop_chance: f64,
    seed: Option<u64>,
    events: Option<&Sender<MoveEvent>>,
) {
    tracing::info!(
        "Generating {}x{} maze using {}",
        maze.rows(),
        maze.cols(),
        generator
    );
    match generator {
        Generator::IterBacktrack => iterative_backtrack(maze, loop_chance, seed, events),
        Generator::Prim => randomized_prim(maze, loop_chance, seed, events),
        Generator::Wilson => wilson(maze, loop_chance, seed, events),
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use std::collections::HashSet;

    use crate::maze::{Direction, Maze, Node};

    /// Counts open edges, undirected.
    pub fn open_edge_count(maze: &Maze) -> usize {
        let mut count = 0;
        for row in 0..maze.rows() {
            for col in 0..maze.cols() {
                for direction in [Direction::South, Direction::East] {
                    let dest = direction.step((row, col));
                    if maze.contains(dest) && !maze.is_wall((row, col), direction) {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// Checks every cell is reachable from (0, 0) through open edges.
    pub fn is_connected(maze: &Maze) -> bool {
        let mut seen: HashSet<Node> = HashSet::from([(0, 0)]);
        let mut stack: Vec<Node> = vec![(0, 0)];
        while let Some(node) = stack.pop() {
            for (direction, dest) in maze.neighbors(node) {
                if !maze.is_wall(node, direction) && seen.insert(dest) {
                    stack.push(dest);
                }
            }
        }
        seen.len() == maze.rows() as usize * maze.cols() as usize
    }
}
