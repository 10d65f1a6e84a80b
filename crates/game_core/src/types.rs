use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}
impl Side {
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => f.write_str("WHITE"),
            Side::Black => f.write_str("BLACK"),
        }
    }
}

/// Compass direction on the board. North points toward row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];
    pub const ORTHOGONAL: [Direction; 4] = [Direction::N, Direction::S, Direction::E, Direction::W];
    pub const DIAGONAL: [Direction; 4] =
        [Direction::NE, Direction::NW, Direction::SE, Direction::SW];

    /// (row, col) offset of a single step.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::N => (-1, 0),
            Direction::S => (1, 0),
            Direction::E => (0, 1),
            Direction::W => (0, -1),
            Direction::NE => (-1, 1),
            Direction::NW => (-1, -1),
            Direction::SE => (1, 1),
            Direction::SW => (1, -1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::S => Direction::N,
            Direction::E => Direction::W,
            Direction::W => Direction::E,
            Direction::NE => Direction::SW,
            Direction::NW => Direction::SE,
            Direction::SE => Direction::NW,
            Direction::SW => Direction::NE,
        }
    }

    /// The two directions at right angles to an orthogonal direction.
    /// Diagonals have none.
    pub fn perpendicular(self) -> &'static [Direction] {
        match self {
            Direction::N | Direction::S => &[Direction::E, Direction::W],
            Direction::E | Direction::W => &[Direction::N, Direction::S],
            _ => &[],
        }
    }
}

/// A board space, addressed by row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// One step in `dir`, with no bounds check.
    pub fn offset(self, dir: Direction) -> Coord {
        let (dr, dc) = dir.delta();
        Coord::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Material value of an uncapturable piece. A side without one has lost.
pub const KING_VALUE: i32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Checker,
    CheckerKing,
}

/// How a piece kind turns its direction sets into moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRule {
    /// Repeats a step until blocked.
    Slide,
    /// A single step in each direction.
    Step,
    /// Two orthogonal steps then one perpendicular step.
    Leap,
    /// Forward pushes plus diagonal-only captures.
    Pawn,
    /// Diagonal steps plus chained jumps.
    Jump,
}

const ORTHO: &[Direction] = &Direction::ORTHOGONAL;
const DIAG: &[Direction] = &Direction::DIAGONAL;
const ALL: &[Direction] = &Direction::ALL;

impl PieceKind {
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => KING_VALUE,
            PieceKind::Checker => 1,
            PieceKind::CheckerKing => 2,
        }
    }

    pub fn rule(self) -> MoveRule {
        match self {
            PieceKind::Pawn => MoveRule::Pawn,
            PieceKind::Knight => MoveRule::Leap,
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => MoveRule::Slide,
            PieceKind::King => MoveRule::Step,
            PieceKind::Checker | PieceKind::CheckerKing => MoveRule::Jump,
        }
    }

    /// Kind that replaces this one on promotion. Fixed: pawns always become
    /// queens, checkers always become kings.
    pub fn promoted(self) -> Option<PieceKind> {
        match self {
            PieceKind::Pawn => Some(PieceKind::Queen),
            PieceKind::Checker => Some(PieceKind::CheckerKing),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind }
    }

    pub fn value(self) -> i32 {
        self.kind.value()
    }

    /// Movement directions. For pawns and men these depend on the side.
    pub fn directions(self) -> &'static [Direction] {
        match (self.kind, self.side) {
            (PieceKind::Pawn, Side::White) => &[Direction::N],
            (PieceKind::Pawn, Side::Black) => &[Direction::S],
            (PieceKind::Checker, Side::White) => &[Direction::NE, Direction::NW],
            (PieceKind::Checker, Side::Black) => &[Direction::SE, Direction::SW],
            (PieceKind::Rook, _) | (PieceKind::Knight, _) => ORTHO,
            (PieceKind::Bishop, _) | (PieceKind::CheckerKing, _) => DIAG,
            (PieceKind::Queen, _) | (PieceKind::King, _) => ALL,
        }
    }

    /// Directions in which the piece may capture. Only pawns differ from
    /// their movement directions.
    pub fn capture_directions(self) -> &'static [Direction] {
        match (self.kind, self.side) {
            (PieceKind::Pawn, Side::White) => &[Direction::NE, Direction::NW],
            (PieceKind::Pawn, Side::Black) => &[Direction::SE, Direction::SW],
            _ => self.directions(),
        }
    }

    /// The replacement piece after promotion, or the piece itself if it has
    /// nothing to promote to.
    pub fn promote(self) -> Piece {
        match self.kind.promoted() {
            Some(kind) => Piece::new(self.side, kind),
            None => self,
        }
    }

    pub fn symbol(self) -> char {
        match (self.side, self.kind) {
            (Side::White, PieceKind::Pawn) => '♙',
            (Side::White, PieceKind::Knight) => '♘',
            (Side::White, PieceKind::Bishop) => '♗',
            (Side::White, PieceKind::Rook) => '♖',
            (Side::White, PieceKind::Queen) => '♕',
            (Side::White, PieceKind::King) => '♔',
            (Side::White, PieceKind::Checker) => '⚆',
            (Side::White, PieceKind::CheckerKing) => '⚇',
            (Side::Black, PieceKind::Pawn) => '♟',
            (Side::Black, PieceKind::Knight) => '♞',
            (Side::Black, PieceKind::Bishop) => '♝',
            (Side::Black, PieceKind::Rook) => '♜',
            (Side::Black, PieceKind::Queen) => '♛',
            (Side::Black, PieceKind::King) => '♚',
            (Side::Black, PieceKind::Checker) => '⚈',
            (Side::Black, PieceKind::CheckerKing) => '⚉',
        }
    }
}
