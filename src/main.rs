mod cli;

use anyhow::{Context, bail};
use common::Disc;

const DEFAULT_NR_DISCS: Disc = 4;

/// The search visits up to 3^n arrangements, keep the demo snappy.
const MAX_NR_DISCS: Disc = 10;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let nr_discs = parse_args(std::env::args().skip(1))?;
    cli::run(nr_discs)
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Disc> {
    let mut args = args.into_iter();

    let Some(raw) = args.next() else {
        return Ok(DEFAULT_NR_DISCS);
    };
    if args.next().is_some() {
        bail!("usage: hanoi [nr-discs]");
    }

    let nr_discs: Disc = raw
        .parse()
        .with_context(|| format!("disc count must be a positive integer, got {raw:?}"))?;
    if nr_discs == 0 {
        bail!("disc count must be at least 1");
    }
    if nr_discs > MAX_NR_DISCS {
        bail!("disc count must be at most {MAX_NR_DISCS}");
    }

    Ok(nr_discs)
}
