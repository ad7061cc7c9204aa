use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::debug;

use crate::model::{
    config::EngineConfig,
    constants::SHARD_SIZE,
    error::{ensure_finite, RatingError, Result},
    placement::{pad_field, placements, sample_performances}
};

/// Monte Carlo estimate of the share of available points each player should earn.
///
/// The field is padded with baseline phantom players up to the points table
/// width, races are simulated from Gaussian performances and the points earned
/// by every slot are averaged over all races. Shares are fractions of the full
/// point pool of one race, so a field of equally rated players expects
/// `1 / width` each.
pub struct PointShareEstimator {
    config: EngineConfig
}

impl PointShareEstimator {
    pub fn new(config: EngineConfig) -> Result<PointShareEstimator> {
        config.validate()?;
        Ok(PointShareEstimator { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Expected point share of each real player, in the order given.
    pub fn estimate_point_share<R: Rng + ?Sized>(
        &self,
        ratings: &[f64],
        samples: usize,
        rng: &mut R
    ) -> Result<Vec<f64>> {
        let mut shares = self.estimate_field_share(ratings, samples, rng)?;
        shares.truncate(ratings.len());

        Ok(shares)
    }

    /// Expected point share of every slot in the padded field: the real players
    /// first, followed by the phantom slots.
    pub fn estimate_field_share<R: Rng + ?Sized>(
        &self,
        ratings: &[f64],
        samples: usize,
        rng: &mut R
    ) -> Result<Vec<f64>> {
        if samples == 0 {
            return Err(RatingError::InvalidInput("samples must be positive".to_string()));
        }

        let field = pad_field(ratings, self.config.field_width(), self.config.rating_base)?;
        let totals = self.point_totals(&field, samples, rng);

        let pool = samples as f64 * self.config.points.total() as f64;
        let shares: Vec<f64> = totals.iter().map(|t| *t as f64 / pool).collect();
        ensure_finite(&shares, "expected point share")?;

        debug!(
            players = ratings.len(),
            samples,
            "Estimated point share: {:?}",
            &shares[..ratings.len()]
        );

        Ok(shares)
    }

    /// Total points earned by each slot over `samples` simulated races.
    ///
    /// Rows are split into shards of [`SHARD_SIZE`]. Each shard's seed is drawn
    /// from `rng` up front, so the result only depends on `rng` and not on how
    /// rayon schedules the shards. Totals are integers, which keeps the
    /// reduction order irrelevant as well.
    fn point_totals<R: Rng + ?Sized>(&self, field: &[f64], samples: usize, rng: &mut R) -> Vec<u64> {
        let width = field.len();
        let points = self.config.points.points();
        let rating_var = self.config.rating_var;

        let n_shards = samples.div_ceil(SHARD_SIZE);
        let seeds: Vec<u64> = (0..n_shards).map(|_| rng.random()).collect();

        seeds
            .par_iter()
            .enumerate()
            .map(|(shard, seed)| {
                let rows = SHARD_SIZE.min(samples - shard * SHARD_SIZE);
                let mut shard_rng = ChaCha8Rng::seed_from_u64(*seed);
                let mut performances = Vec::with_capacity(width);
                let mut totals = vec![0u64; width];

                for _ in 0..rows {
                    sample_performances(field, rating_var, &mut shard_rng, &mut performances);
                    for (slot, rank) in placements(&performances).into_iter().enumerate() {
                        totals[slot] += points[rank] as u64;
                    }
                }

                totals
            })
            .reduce(
                || vec![0u64; width],
                |mut acc, totals| {
                    acc.iter_mut().zip(totals).for_each(|(a, t)| *a += t);
                    acc
                }
            )
    }
}

impl Default for PointShareEstimator {
    fn default() -> Self {
        PointShareEstimator {
            config: EngineConfig::default()
        }
    }
}

/// Estimates point shares with the default engine configuration.
pub fn estimate_point_share<R: Rng + ?Sized>(ratings: &[f64], samples: usize, rng: &mut R) -> Result<Vec<f64>> {
    PointShareEstimator::default().estimate_point_share(ratings, samples, rng)
}
