use std::thread;
use std::time::Duration;

use colored::Colorize;
use common::peg::{Move, Peg};
use common::replay::Replay;
use common::{Configuration, Disc, SolveResult, solve};

const STEP_DELAY: Duration = Duration::from_millis(500);

/// Horizontal space between two peg columns.
const GAP: usize = 2;

pub fn run(nr_discs: Disc) -> anyhow::Result<()> {
    let start = Configuration::start(nr_discs);
    let goal = Configuration::goal(nr_discs);

    let plan = match solve(&start, &goal) {
        SolveResult::Solved(plan) => plan,
        SolveResult::Unsolvable => {
            println!("{}", "no solution found".red());
            return Ok(());
        }
    };

    log::info!(
        "replaying a {}-move solution for {nr_discs} discs",
        plan.len()
    );

    let mut replay = Replay::new(start, plan);
    log::debug!("initial arrangement: {}", replay.current());
    println!("{}", render_frame(replay.current(), None));

    while let Some(mv) = replay.step()? {
        thread::sleep(STEP_DELAY);
        println!(
            "move {}/{}: {mv}",
            replay.nr_applied(),
            replay.nr_moves()
        );
        println!("{}", render_frame(replay.current(), Some(mv)));
    }

    println!("{}", "the towers of hanoi puzzle has been solved!".green());
    Ok(())
}

/// Draw the three pegs side by side as stacked `=` bars, one text row per
/// disc level plus a base line. The disc just moved is highlighted.
fn render_frame(configuration: &Configuration, last_move: Option<Move>) -> String {
    let widest = Peg::ALL
        .into_iter()
        .flat_map(|peg| configuration.peg(peg).iter().copied())
        .max()
        .unwrap_or(1) as usize;
    let cell_width = 2 * widest - 1;
    let height = configuration.nr_discs().max(1);

    let mut out = String::new();
    for level in (0..height).rev() {
        for (i, peg) in Peg::ALL.into_iter().enumerate() {
            if i > 0 {
                out.push_str(&" ".repeat(GAP));
            }

            let stack = configuration.peg(peg);
            match stack.get(level) {
                Some(&disc) => {
                    let moved = last_move
                        .is_some_and(|mv| peg == mv.dst && level == stack.len() - 1);
                    let bar = "=".repeat(2 * disc as usize - 1);
                    let bar = if moved {
                        bar.red().to_string()
                    } else {
                        bar
                    };
                    let pad = " ".repeat(widest - disc as usize);
                    out.push_str(&pad);
                    out.push_str(&bar);
                    out.push_str(&pad);
                }
                None => {
                    let pad = " ".repeat(widest - 1);
                    out.push_str(&pad);
                    out.push('|');
                    out.push_str(&pad);
                }
            }
        }
        out.push('\n');
    }

    out.push_str(&"-".repeat(3 * cell_width + 2 * GAP));
    out
}
