use serde::{Deserialize, Serialize};

use crate::model::{
    constants::{DEFAULT_SAMPLES, K_FACTOR, RACE_LENGTHS, RATING_BASE, RATING_VAR},
    error::{RatingError, Result},
    points_table::PointsTable
};

/// Tunable parameters of the rating engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Rating of a new player, and of every phantom slot used as padding
    pub rating_base: f64,
    /// Standard deviation of a player's race performance around their rating
    pub rating_var: f64,
    /// Scale applied to the gap between observed and expected point share
    pub k_factor: f64,
    /// Number of simulated races per estimate
    pub samples: usize,
    /// Points by rank. Its length is the simulated field width.
    pub points: PointsTable,
    /// Race counts the season driver picks from for each simulated event
    pub race_lengths: Vec<usize>
}

impl EngineConfig {
    /// Number of slots in every simulated race
    pub fn field_width(&self) -> usize {
        self.points.width()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.rating_base.is_finite() {
            return Err(RatingError::NumericDegeneracy(format!(
                "rating_base must be finite, got {}",
                self.rating_base
            )));
        }

        // A zero spread makes every simulated race a tie
        if !self.rating_var.is_finite() || self.rating_var <= 0.0 {
            return Err(RatingError::NumericDegeneracy(format!(
                "rating_var must be positive and finite, got {}",
                self.rating_var
            )));
        }

        if !self.k_factor.is_finite() || self.k_factor < 0.0 {
            return Err(RatingError::InvalidInput(format!(
                "k_factor must be non-negative and finite, got {}",
                self.k_factor
            )));
        }

        if self.samples == 0 {
            return Err(RatingError::InvalidInput("samples must be positive".to_string()));
        }

        if self.race_lengths.is_empty() || self.race_lengths.contains(&0) {
            return Err(RatingError::InvalidInput(format!(
                "race_lengths must be non-empty and positive, got {:?}",
                self.race_lengths
            )));
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rating_base: RATING_BASE,
            rating_var: RATING_VAR,
            k_factor: K_FACTOR,
            samples: DEFAULT_SAMPLES,
            points: PointsTable::default(),
            race_lengths: RACE_LENGTHS.to_vec()
        }
    }
}
