/// The two checker colours of a standard game.
///
/// Any `PartialEq` type can identify a player on a [`Board`](super::Board); this is the one
/// used when nothing else is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Checker {
    /// First player, drawn as `x`.
    Player1,
    /// Second player, drawn as `o`.
    Player2,
}

impl Checker {
    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Self::Player1 => Self::Player2,
            Self::Player2 => Self::Player1,
        }
    }

    /// Character used when printing a board.
    pub fn symbol(self) -> char {
        match self {
            Self::Player1 => 'x',
            Self::Player2 => 'o',
        }
    }
}

impl std::fmt::Display for Checker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player1 => write!(f, "Player 1"),
            Self::Player2 => write!(f, "Player 2"),
        }
    }
}

/// A place on a board: 0-based slot (`x`, left to right) and row (`y`, top to bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Place {
    /// Slot (column) index.
    pub x: usize,
    /// Place (row) index.
    pub y: usize,
}

impl Place {
    /// Create a new place.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The place `(x + dx, y + dy)`, or `None` if either index would go negative.
    /// The upper bound is the board's concern.
    pub(crate) fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add_signed(dx)?,
            self.y.checked_add_signed(dy)?,
        ))
    }
}

impl From<(usize, usize)> for Place {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Lines along which four checkers can connect, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `(1, 0)`
    Horizontal,
    /// `(0, 1)`
    Vertical,
    /// `(1, 1)`, the `\` diagonal.
    DiagonalDown,
    /// `(1, -1)`, the `/` diagonal.
    DiagonalUp,
}

impl Direction {
    /// All directions in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// Step `(dx, dy)` taken when walking forward along the line.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (1, 0),
            Self::Vertical => (0, 1),
            Self::DiagonalDown => (1, 1),
            Self::DiagonalUp => (1, -1),
        }
    }
}
