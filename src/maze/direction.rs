use super::Node;

/// One of the four compass directions an edge can leave a cell in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    West,
    South,
    East,
}

impl Direction {
    /// All directions, in the fixed order generation algorithms shuffle from.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];

    /// The opposite direction. Flipping twice yields the original.
    pub fn flip(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
        }
    }

    /// Layer of this direction in a cell's cost-table entry.
    pub(crate) fn layer(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::West => 1,
            Direction::South => 2,
            Direction::East => 3,
        }
    }

    /// Applies this direction's unit delta to a node. Pure arithmetic: the
    /// result is not bounds-checked and callers must validate it.
    ///
    /// NOTE: This way of handling underflow/overflow is overflow-safe.
    /// Stepping north or west from row/column 0 wraps to u16::MAX, which no
    /// bounds check ever accepts. Stepping south or east saturates at
    /// u16::MAX, which is likewise never a valid index (the largest dimension
    /// numerically possible is u16::MAX, so the largest valid index is
    /// u16::MAX - 1).
    pub fn step(self, node: Node) -> Node {
        let (row, col) = node;
        match self {
            Direction::North => (row.wrapping_sub(1), col),
            Direction::West => (row, col.wrapping_sub(1)),
            Direction::South => (row.saturating_add(1), col),
            Direction::East => (row, col.saturating_add(1)),
        }
    }
}
