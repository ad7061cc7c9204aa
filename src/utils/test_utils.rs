use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::model::constants::RATING_BASE;

/// Seeded generator for reproducible simulations
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Generates `n_players` ratings spread evenly from `top` down to `bottom`.
pub fn generate_ratings(n_players: usize, top: f64, bottom: f64) -> Vec<f64> {
    if n_players < 2 {
        return vec![top; n_players];
    }

    let step = (top - bottom) / (n_players - 1) as f64;
    (0..n_players).map(|i| top - step * i as f64).collect()
}

/// Generates `n_players` ratings within ±`spread` of the base rating.
pub fn generate_random_ratings(n_players: usize, spread: f64, seed: u64) -> Vec<f64> {
    let mut rng = seeded_rng(seed);

    (0..n_players)
        .map(|_| RATING_BASE + rng.random_range(-spread..=spread))
        .collect()
}
