//! Race sampling shared by expectation estimates and ground truth simulation.
//!
//! A race is modelled as one Gaussian performance draw per slot, centred on the
//! slot's rating. Slots are then ranked by performance: rank 0 is the lowest
//! performance (last place) and rank `width - 1` is the highest (first place).

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::model::error::{ensure_finite, RatingError, Result};

/// Pads `ratings` on the right with `base` until it is `width` long.
///
/// The padding slots are phantom competitors of baseline skill, which keeps
/// every simulated race at a fixed width regardless of the real field size.
pub fn pad_field(ratings: &[f64], width: usize, base: f64) -> Result<Vec<f64>> {
    if ratings.is_empty() {
        return Err(RatingError::InvalidInput("at least one rating is required".to_string()));
    }

    if ratings.len() > width {
        return Err(RatingError::InvalidInput(format!(
            "maximum number of players is {}, got {}",
            width,
            ratings.len()
        )));
    }

    ensure_finite(ratings, "ratings")?;

    let mut field = Vec::with_capacity(width);
    field.extend_from_slice(ratings);
    field.resize(width, base);

    Ok(field)
}

/// Draws one performance per slot into `out`.
pub fn sample_performances<R: Rng + ?Sized>(field: &[f64], rating_var: f64, rng: &mut R, out: &mut Vec<f64>) {
    out.clear();
    out.extend(field.iter().map(|mu| {
        let z: f64 = StandardNormal.sample(rng);
        mu + rating_var * z
    }));
}

/// Ranks every slot by performance.
///
/// Column indices are stable-sorted by performance ascending, giving the slots
/// from last place to first. That permutation is then inverted so the result is
/// indexed by slot: `ranks[slot]` is the slot's position in the ascending order.
/// Equal performances keep column order, so the earlier column gets the lower
/// (worse) rank and the result is always a permutation of `0..width`.
pub fn placements(performances: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..performances.len()).collect();
    order.sort_by(|&a, &b| performances[a].total_cmp(&performances[b]));

    let mut ranks = vec![0; order.len()];
    for (rank, &slot) in order.iter().enumerate() {
        ranks[slot] = rank;
    }

    ranks
}

/// Simulates a single race over a full (already padded) field.
pub fn simulate_race<R: Rng + ?Sized>(field: &[f64], rating_var: f64, rng: &mut R) -> Vec<usize> {
    let mut performances = Vec::with_capacity(field.len());
    sample_performances(field, rating_var, rng, &mut performances);

    placements(&performances)
}
