use std::fmt;

/// One of the three pegs of the puzzle.
///
/// Invariant: can only represent a valid peg
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Peg {
    Left,
    Middle,
    Right,
}

impl Peg {
    pub const ALL: [Peg; 3] = [Peg::Left, Peg::Middle, Peg::Right];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Peg> {
        Peg::ALL.get(index).copied()
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Peg::Left => "left",
            Peg::Middle => "middle",
            Peg::Right => "right",
        };
        write!(f, "{name}")
    }
}

/// Relocation of the top disc of `src` to `dst`.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct Move {
    pub src: Peg,
    pub dst: Peg,
}

impl Move {
    pub fn new(src: Peg, dst: Peg) -> Move {
        Move { src, dst }
    }

    /// All 6 ordered (src, dst) pairs with distinct pegs.
    pub fn all() -> impl Iterator<Item = Move> {
        Peg::ALL.into_iter().flat_map(|src| {
            Peg::ALL
                .into_iter()
                .filter_map(move |dst| (src != dst).then_some(Move { src, dst }))
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.src, self.dst)
    }
}
