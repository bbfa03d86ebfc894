use rand::Rng;

use crate::novelai::config::RANDOM_SEED_VALUE;

/// Uniform over `1..=u32::MAX`, never zero.
pub fn random_seed() -> u32 {
    rand::thread_rng().gen_range(1..=u32::MAX)
}

/// Turns a caller supplied seed into the wire seed. [`RANDOM_SEED_VALUE`]
/// picks a fresh random seed; anything outside `u32` becomes `0`.
pub fn resolve_seed(requested: i64) -> u32 {
    if requested == RANDOM_SEED_VALUE {
        return random_seed();
    }

    u32::try_from(requested).unwrap_or_else(|_| {
        tracing::warn!("seed {} is out of range, sending 0", requested);
        0
    })
}
