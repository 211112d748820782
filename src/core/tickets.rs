//! Lottery-style ticket draws: sorted unique numbers from a range

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Allowed bounds for a ticket range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketLimits {
    pub min_bound: i64,
    pub max_bound: i64,
}

impl Default for TicketLimits {
    fn default() -> Self {
        Self {
            min_bound: 1,
            max_bound: 1000,
        }
    }
}

/// Draw `quantity` distinct numbers from `[min, max]` using the default limits
pub fn get_numbers_ticket<R: Rng + ?Sized>(
    min: i64,
    max: i64,
    quantity: i64,
    rng: &mut R,
) -> Vec<i64> {
    draw_ticket(min, max, quantity, TicketLimits::default(), rng)
}

/// Draw `quantity` distinct numbers from `[min, max]`, sorted ascending.
///
/// Returns an empty list when the range falls outside `limits`, is inverted,
/// or cannot supply `quantity` distinct numbers.
pub fn draw_ticket<R: Rng + ?Sized>(
    min: i64,
    max: i64,
    quantity: i64,
    limits: TicketLimits,
    rng: &mut R,
) -> Vec<i64> {
    if min < limits.min_bound {
        debug!("min {} is below {}", min, limits.min_bound);
        return Vec::new();
    } else if max > limits.max_bound {
        debug!("max {} is above {}", max, limits.max_bound);
        return Vec::new();
    } else if min > max {
        debug!("min {} is greater than max {}", min, max);
        return Vec::new();
    }

    let Some(available) = max.checked_sub(min).and_then(|d| d.checked_add(1)) else {
        debug!("range {}..={} is too wide", min, max);
        return Vec::new();
    };
    if quantity < 1 || quantity > available {
        debug!("cannot draw {} numbers from {} available", quantity, available);
        return Vec::new();
    }
    let (Ok(length), Ok(amount)) = (usize::try_from(available), usize::try_from(quantity)) else {
        debug!("range {}..={} does not fit in memory indices", min, max);
        return Vec::new();
    };

    let mut numbers: Vec<i64> = rand::seq::index::sample(rng, length, amount)
        .into_iter()
        .map(|offset| min + offset as i64)
        .collect();
    numbers.sort_unstable();
    numbers
}
