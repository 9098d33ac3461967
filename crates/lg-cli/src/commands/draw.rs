use std::io::Write;

use colored::Colorize;
use rand::rngs::StdRng;

use lg_core::{NameEntry, Roster};
use lg_draw::{DrawEvent, Lottery, LotteryConfig};

use super::RosterArgs;

pub fn run(
    args: &RosterArgs,
    count: usize,
    allow_repeats: bool,
    seed: Option<u64>,
    animate: bool,
) -> Result<(), String> {
    let roster = args.load()?;
    if roster.is_empty() {
        println!("{}", super::EMPTY_ROSTER_NOTICE);
        return Ok(());
    }

    let mut rng = super::make_rng(seed);
    let mut lottery = Lottery::new(LotteryConfig::default().with_allow_repeats(allow_repeats));

    for _ in 0..count {
        if !lottery.start_draw(&roster) {
            println!("  {}", "All names have been drawn.".yellow());
            break;
        }
        let winner = if animate {
            reveal(&mut lottery, &roster, &mut rng)
        } else {
            lottery.finish(&roster, &mut rng)
        };
        let Some(winner) = winner else {
            break;
        };
        println!(
            "  {} {}",
            format!("#{}", lottery.history().len()).dimmed(),
            winner.value.green().bold()
        );
    }

    println!();
    println!("  Winners ({}):", lottery.history().len());
    for (number, entry) in lottery.history().numbered() {
        println!("  {number:>4}. {}", entry.value);
    }
    println!();
    println!(
        "  pool: {} / {}",
        lottery.candidate_pool(&roster).len(),
        roster.len()
    );

    Ok(())
}

/// Tick the draw in real time, redrawing the preview on stderr.
fn reveal(lottery: &mut Lottery, roster: &Roster, rng: &mut StdRng) -> Option<NameEntry> {
    let interval = lottery.config().timing.step();
    let mut stderr = std::io::stderr();
    loop {
        match lottery.tick(roster, rng) {
            Some(DrawEvent::Winner(w)) => {
                eprint!("\r\x1b[2K");
                return Some(w);
            }
            Some(DrawEvent::Preview(p)) => {
                eprint!("\r\x1b[2K  {}", p.value.dimmed());
                stderr.flush().ok();
            }
            None if !lottery.is_drawing() => return None,
            None => {}
        }
        std::thread::sleep(interval);
    }
}
