mod direction;

use rand::Rng;

pub use direction::Direction;

/// A cell coordinate as (row, column).
pub type Node = (u16, u16);

/// Cost an edge takes on when its wall is removed.
pub const OPEN_COST: f64 = 1.0;
/// Sentinel cost of a walled edge.
pub const WALL_COST: f64 = f64::INFINITY;

/// A rectangular grid graph with a per-direction edge cost for every cell.
///
/// Every edge starts as a wall. Generation opens edges through
/// [`Maze::remove_wall`], which keeps the two half-edges of a passage in
/// sync; afterwards the graph is read-only for pathfinding and rendering.
pub struct Maze {
    /// Edge costs, four layers per cell in [`Direction`] order.
    costs: Box<[f64]>,
    rows: u16,
    cols: u16,
}

impl Maze {
    /// Creates a maze of the given dimensions with every edge walled.
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn new(rows: u16, cols: u16) -> Self {
        assert!(
            rows >= 1 && cols >= 1,
            "maze dimensions must be at least 1x1"
        );
        let costs = vec![WALL_COST; rows as usize * cols as usize * 4].into_boxed_slice();
        Maze { costs, rows, cols }
    }

    /// Returns the number of rows in the maze.
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Returns the number of columns in the maze.
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Checks if the given node is within the bounds of the maze.
    pub fn contains(&self, node: Node) -> bool {
        node.0 < self.rows && node.1 < self.cols
    }

    fn cost_index(&self, node: Node, direction: Direction) -> usize {
        if !self.contains(node) {
            panic!("The given coordinate is out of bounds");
        }
        (node.0 as usize * self.cols as usize + node.1 as usize) * 4 + direction.layer()
    }

    /// Cost of the edge leaving `node` in `direction`: [`OPEN_COST`] for an
    /// open passage, [`WALL_COST`] for a wall.
    ///
    /// # Panics
    /// If `node` is out of bounds.
    pub fn edge_cost(&self, node: Node, direction: Direction) -> f64 {
        self.costs[self.cost_index(node, direction)]
    }

    /// Checks if the edge leaving `node` in `direction` is a wall. Edges
    /// leaving the grid always read as walls.
    pub fn is_wall(&self, node: Node, direction: Direction) -> bool {
        self.edge_cost(node, direction).is_infinite()
    }

    /// Removes the wall between `node` and its neighbour in `direction`,
    /// opening both half-edges of the passage atomically. Removing a wall
    /// toward a destination outside the grid is ignored, so boundary edges
    /// stay walled. Safe to call on an already-open edge.
    ///
    /// # Panics
    /// If `node` is out of bounds.
    pub fn remove_wall(&mut self, node: Node, direction: Direction) {
        let forward = self.cost_index(node, direction);
        let dest = direction.step(node);
        if !self.contains(dest) {
            tracing::debug!(
                "Ignoring wall removal from {:?} toward off-grid {:?}",
                node,
                dest
            );
            return;
        }
        self.costs[forward] = OPEN_COST;
        let backward = self.cost_index(dest, direction.flip());
        self.costs[backward] = OPEN_COST;
    }

    /// Enumerates the topological neighbours of `node`: every direction whose
    /// destination is a valid coordinate, regardless of wall state. Callers
    /// filter by edge cost when they need traversability.
    pub fn neighbors(&self, node: Node) -> impl Iterator<Item = (Direction, Node)> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |direction| (direction, direction.step(node)))
            .filter(|&(_, dest)| self.contains(dest))
    }

    /// Samples a node uniformly from the valid coordinate set.
    pub fn random_node<R: Rng + ?Sized>(&self, rng: &mut R) -> Node {
        (
            rng.random_range(0..self.rows),
            rng.random_range(0..self.cols),
        )
    }

    /// Sum of absolute row and column deltas, the admissible heuristic for
    /// weighted search. Out-of-grid input is logged and the arithmetic runs
    /// regardless; this is not a validation path.
    pub fn manhattan_distance(&self, a: Node, b: Node) -> u32 {
        if !self.contains(a) || !self.contains(b) {
            tracing::warn!("Invalid node input: {:?}, {:?}", a, b);
        }
        a.0.abs_diff(b.0) as u32 + a.1.abs_diff(b.1) as u32
    }
}
