pub mod peg;
pub mod replay;

use std::collections::VecDeque;
use std::fmt;

use rustc_hash::FxHashSet;

use crate::peg::{Move, Peg};

pub const NR_PEGS: usize = 3;

/// Disc size. A larger value means a wider disc.
pub type Disc = u8;

/// A full arrangement of the discs across the three pegs.
///
/// Each peg stack is ordered bottom-to-top. Structural equality and hashing
/// make a `Configuration` directly usable as a visited-set key during the
/// search. The type itself does not enforce the size ordering on the stacks;
/// only legal moves preserve it, which is all the solver ever applies.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Configuration {
    pegs: [Vec<Disc>; NR_PEGS],
}

#[derive(thiserror::Error, PartialEq, Eq, Debug, Clone, Copy)]
pub enum IllegalMove {
    #[error("source and destination are both the {0} peg")]
    SamePeg(Peg),

    #[error("the {0} peg has no disc to move")]
    EmptySource(Peg),

    #[error("disc {disc} cannot rest on the smaller disc {onto}")]
    DiscTooLarge { disc: Disc, onto: Disc },
}

impl Configuration {
    /// The canonical initial arrangement: all discs on the left peg,
    /// largest at the bottom.
    pub fn start(nr_discs: Disc) -> Self {
        let mut pegs: [Vec<Disc>; NR_PEGS] = Default::default();
        pegs[Peg::Left.index()] = (1..=nr_discs).rev().collect();
        Self { pegs }
    }

    /// The goal arrangement: the same stack moved to the right peg.
    pub fn goal(nr_discs: Disc) -> Self {
        let mut pegs: [Vec<Disc>; NR_PEGS] = Default::default();
        pegs[Peg::Right.index()] = (1..=nr_discs).rev().collect();
        Self { pegs }
    }

    /// Build an arbitrary arrangement, each peg given bottom-to-top.
    pub fn from_pegs(pegs: [&[Disc]; NR_PEGS]) -> Self {
        Self {
            pegs: pegs.map(|stack| stack.to_vec()),
        }
    }

    /// The stack on the given peg, bottom-to-top.
    pub fn peg(&self, peg: Peg) -> &[Disc] {
        &self.pegs[peg.index()]
    }

    pub fn top(&self, peg: Peg) -> Option<Disc> {
        self.pegs[peg.index()].last().copied()
    }

    pub fn nr_discs(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }

    /// Check if the move is legal, and if yes, return the disc that it
    /// would relocate.
    pub fn check_move(&self, mv: Move) -> Result<Disc, IllegalMove> {
        if mv.src == mv.dst {
            return Err(IllegalMove::SamePeg(mv.src));
        }

        let disc = self
            .top(mv.src)
            .ok_or(IllegalMove::EmptySource(mv.src))?;

        match self.top(mv.dst) {
            Some(onto) if onto < disc => Err(IllegalMove::DiscTooLarge { disc, onto }),
            _ => Ok(disc),
        }
    }

    /// Produce the configuration resulting from the given move.
    ///
    /// Purely functional: the receiver is left untouched, an illegal move
    /// has no effect beyond the returned error.
    pub fn apply_move(&self, mv: Move) -> Result<Configuration, IllegalMove> {
        self.check_move(mv)?;

        let mut next = self.clone();
        let disc = next.pegs[mv.src.index()]
            .pop()
            .expect("check_move verified the source peg is non-empty");
        next.pegs[mv.dst.index()].push(disc);
        Ok(next)
    }

    /// All arrangements reachable by exactly one legal move, paired with
    /// that move.
    pub fn successors(&self) -> Vec<(Configuration, Move)> {
        Move::all()
            .filter_map(|mv| self.apply_move(mv).ok().map(|next| (next, mv)))
            .collect()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stack) in self.pegs.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            if stack.is_empty() {
                write!(f, "-")?;
            } else {
                for (j, disc) in stack.iter().enumerate() {
                    if j > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{disc}")?;
                }
            }
        }
        Ok(())
    }
}

pub enum SolveResult {
    Solved(Vec<Move>),
    Unsolvable,
}

/// Counters collected during a search run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SearchStats {
    /// Arrangements marked visited, bounded by 3^n for n discs since the
    /// search never revisits one.
    pub nr_visited: usize,
}

/// Find a shortest sequence of legal moves from `start` to `goal` by
/// breadth-first search over the arrangement graph.
///
/// The state space is bounded by 3^n arrangements for n discs, so the
/// search always terminates. `Unsolvable` can only come back for start and
/// goal arrangements that don't lie in the same reachable component, which
/// never happens for the canonical Hanoi endpoints.
pub fn solve(start: &Configuration, goal: &Configuration) -> SolveResult {
    solve_with_stats(start, goal).0
}

/// Like [`solve`], additionally reporting search counters.
pub fn solve_with_stats(
    start: &Configuration,
    goal: &Configuration,
) -> (SolveResult, SearchStats) {
    let mut frontier = VecDeque::new();
    frontier.push_back((start.clone(), Vec::new()));

    let mut visited = FxHashSet::default();
    visited.insert(start.clone());

    while let Some((configuration, path)) = frontier.pop_front() {
        if configuration == *goal {
            log::debug!(
                "found a {}-move solution after visiting {} arrangements",
                path.len(),
                visited.len()
            );
            let stats = SearchStats {
                nr_visited: visited.len(),
            };
            return (SolveResult::Solved(path), stats);
        }

        for (successor, mv) in configuration.successors() {
            if visited.insert(successor.clone()) {
                let mut next_path = path.clone();
                next_path.push(mv);
                frontier.push_back((successor, next_path));
            }
        }
    }

    log::debug!(
        "exhausted all {} reachable arrangements without finding the goal",
        visited.len()
    );
    let stats = SearchStats {
        nr_visited: visited.len(),
    };
    (SolveResult::Unsolvable, stats)
}
