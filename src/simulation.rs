use crate::error::{PfResult, PuttForgeError};
use crate::round::{RoundCard, HOLES_PER_ROUND};
use fastrand::Rng;
use std::ops::RangeInclusive;
use tracing::debug;

/// First-putt distances after hitting the green in regulation.
pub const GIR_DISTANCE_RANGE: RangeInclusive<u32> = 5..=35;
/// First-putt distances after a chip or pitch onto the green.
pub const SCRAMBLE_DISTANCE_RANGE: RangeInclusive<u32> = 3..=15;

pub fn rng_from_seed(seed: Option<u64>) -> Rng {
    if let Some(s) = seed {
        Rng::with_seed(s)
    } else {
        Rng::new()
    }
}

pub fn generate_putt_distance(rng: &mut Rng, gir: bool) -> u32 {
    if gir {
        rng.u32(GIR_DISTANCE_RANGE)
    } else {
        rng.u32(SCRAMBLE_DISTANCE_RANGE)
    }
}

/// Shuffles `gir_count` greens-in-regulation across 18 holes and draws a
/// first-putt distance for each. Putts are left for the player to fill in.
pub fn generate_round(rng: &mut Rng, gir_count: usize) -> PfResult<RoundCard> {
    if gir_count > HOLES_PER_ROUND {
        return Err(PuttForgeError::Validation(format!(
            "GIR count must be between 0 and {}, got {}",
            HOLES_PER_ROUND, gir_count
        )));
    }

    let mut flags = vec![true; gir_count];
    flags.resize(HOLES_PER_ROUND, false);
    rng.shuffle(&mut flags);

    let holes: Vec<(bool, u32)> = flags
        .into_iter()
        .map(|gir| (gir, generate_putt_distance(rng, gir)))
        .collect();

    debug!("Generated simulated round with {} GIRs", gir_count);
    RoundCard::simulated(&holes)
}
