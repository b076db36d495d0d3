//! raffle — end-to-end demo of the `tombola` bag.
//!
//! Runs a small charity raffle: every entrant holds as many tickets as
//! they bought (that's the ticket's multiplicity in the bag), late entries
//! are merged in with `union`, a disqualification empties one entrant's
//! tickets with `remove`, and winners are drawn without replacement from
//! a seeded `DrawRng` so the result is replayable.

use anyhow::Result;

use tombola::{Bag, DrawRng};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:             u64   = 42;
const RUNNER_UP_PRIZES: usize = 3;

// (entrant, tickets bought)
const ENTRIES: &[(&str, usize)] = &[
    ("ada", 4),
    ("grace", 2),
    ("edsger", 1),
    ("barbara", 3),
    ("donald", 2),
];

const LATE_ENTRIES: &[(&str, usize)] = &[("alan", 2), ("grace", 1)];

const DISQUALIFIED: &str = "donald";

// ── Helpers ───────────────────────────────────────────────────────────────────

fn tickets(entries: &[(&'static str, usize)]) -> Vec<&'static str> {
    let mut all = Vec::new();
    for &(name, count) in entries {
        for _ in 0..count {
            all.push(name);
        }
    }
    all
}

fn print_odds(bag: &Bag<&str>) {
    let total = bag.len();
    let mut rows: Vec<(&&str, usize)> = bag.counts().into_iter().collect();
    rows.sort();
    for (name, count) in rows {
        println!("  {name:<8} {count} tickets  ({:.0}%)", 100.0 * count as f64 / total as f64);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== raffle — tombola demo ===");
    println!("Seed: {SEED}");
    println!();

    // 1. Build the drum from the initial entries.
    let mut drum: Bag<&str> = tickets(ENTRIES).into_iter().collect();
    println!(
        "Drum filled: {} tickets from {} entrants",
        drum.len(),
        drum.to_set().len()
    );

    // 2. Merge the late entries.
    drum = drum.union(tickets(LATE_ENTRIES));
    println!("Late entries merged: {} tickets", drum.len());

    // 3. Disqualification removes every ticket of that entrant.
    let pulled = drum.remove(&DISQUALIFIED);
    println!("{DISQUALIFIED} disqualified: {pulled} tickets pulled");
    println!();

    println!("Final odds:");
    print_odds(&drum);
    println!();

    // 4. Grand prize: one uniform draw over all tickets.
    let mut rng = DrawRng::new(SEED);
    let grand = drum.pick_one(rng.inner())?;
    println!("Grand prize: {grand}");

    // One prize per entrant: the winner's remaining tickets leave the drum.
    drum.remove(&grand);

    // 5. Runner-up prizes, drawn without replacement from their own stream.
    let mut runner_rng = rng.child(1);
    let mut runners = drum.pick_many(RUNNER_UP_PRIZES, runner_rng.inner())?;
    runners.sort_unstable();
    println!("Runner-up prizes: {}", runners.join(", "));
    println!();

    // 6. Post-draw accounting over the remaining tickets.
    let unsold: usize = drum.iter().fold(0, |acc, _| acc + 1);
    println!(
        "Tickets left in the drum: {unsold} across {} entrants",
        drum.to_set().len()
    );

    Ok(())
}
