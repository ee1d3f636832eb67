use crate::peg::Move;
use crate::{Configuration, IllegalMove};

/// Replays a solved plan one move at a time.
///
/// The driver owns its own live configuration, decoupled from whatever the
/// solver explored internally. Pacing between steps is left entirely to the
/// caller; stepping itself has no timing and no side effects.
#[derive(Clone, Debug)]
pub struct Replay {
    current: Configuration,
    plan: Vec<Move>,
    applied: usize,
}

impl Replay {
    pub fn new(start: Configuration, plan: Vec<Move>) -> Self {
        Self {
            current: start,
            plan,
            applied: 0,
        }
    }

    /// The configuration after the moves applied so far.
    pub fn current(&self) -> &Configuration {
        &self.current
    }

    /// Total number of moves in the plan.
    pub fn nr_moves(&self) -> usize {
        self.plan.len()
    }

    /// Number of moves applied so far.
    pub fn nr_applied(&self) -> usize {
        self.applied
    }

    pub fn is_finished(&self) -> bool {
        self.applied == self.plan.len()
    }

    /// Apply the next move of the plan, returning it, or `None` once the
    /// plan is exhausted.
    ///
    /// A plan produced by the solver can never contain an illegal step, so
    /// instead of skipping bad moves silently this propagates the error and
    /// leaves the configuration at the last consistent state.
    pub fn step(&mut self) -> Result<Option<Move>, IllegalMove> {
        let Some(&mv) = self.plan.get(self.applied) else {
            return Ok(None);
        };

        self.current = self.current.apply_move(mv)?;
        self.applied += 1;
        Ok(Some(mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peg::Peg;
    use crate::{SolveResult, solve};

    #[test]
    fn test_replay_reaches_goal() {
        let start = Configuration::start(3);
        let goal = Configuration::goal(3);
        let SolveResult::Solved(plan) = solve(&start, &goal) else {
            panic!("should be solvable");
        };

        let mut replay = Replay::new(start, plan);
        assert_eq!(replay.nr_moves(), 7);

        let mut frames = 0;
        while replay.step().unwrap().is_some() {
            frames += 1;
            assert_eq!(replay.nr_applied(), frames);
        }

        assert_eq!(frames, 7);
        assert!(replay.is_finished());
        assert_eq!(replay.current(), &goal);
    }

    #[test]
    fn test_empty_plan_is_immediately_finished() {
        let mut replay = Replay::new(Configuration::start(2), vec![]);
        assert!(replay.is_finished());
        assert_eq!(replay.step(), Ok(None));
        assert_eq!(replay.current(), &Configuration::start(2));
    }

    #[test]
    fn test_corrupt_plan_halts_with_an_error() {
        let plan = vec![Move::new(Peg::Middle, Peg::Right)];
        let mut replay = Replay::new(Configuration::start(1), plan);

        assert_eq!(
            replay.step(),
            Err(IllegalMove::EmptySource(Peg::Middle)),
        );
        // the configuration stays at the last consistent state
        assert_eq!(replay.current(), &Configuration::start(1));
        assert!(!replay.is_finished());
    }
}
