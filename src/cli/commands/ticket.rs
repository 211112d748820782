//! `bdkit ticket` implementation

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use tracing::debug;

use crate::config::KitConfig;
use crate::core::tickets::draw_ticket;

/// Execute the ticket command
pub fn run_ticket_command(
    min: i64,
    max: i64,
    quantity: i64,
    seed: Option<u64>,
    config: &KitConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let numbers = match seed {
        Some(seed) => {
            debug!("Drawing with seed {}", seed);
            draw_ticket(min, max, quantity, config.tickets, &mut StdRng::seed_from_u64(seed))
        }
        None => draw_ticket(min, max, quantity, config.tickets, &mut rand::rng()),
    };

    let line = numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "{}", line)?;
    Ok(())
}
