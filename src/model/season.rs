use rand::{seq::IndexedRandom, Rng};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use tracing::{debug, info};

use crate::{
    model::{
        adjustment::{apply_adjustments, calculate_adjustments},
        config::EngineConfig,
        error::{RatingError, Result},
        estimator::PointShareEstimator,
        observed::{add_points, EventResult},
        placement::{pad_field, simulate_race}
    },
    utils::progress_utils::progress_bar
};

/// Ratings after one simulated event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonStep {
    pub event: usize,
    pub races: usize,
    pub observed: Vec<f64>,
    pub expected: Vec<f64>,
    pub ratings: Vec<f64>,
    pub mean_abs_error: f64
}

/// Outcome of [`Season::run`], suitable for plotting rating convergence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonReport {
    pub true_ratings: Vec<f64>,
    pub final_ratings: Vec<f64>,
    pub initial_error: f64,
    pub final_error: f64,
    pub history: Vec<SeasonStep>
}

/// # Season simulation
///
/// Checks that the engine recovers known ratings. Every player starts at the
/// base rating and plays a series of events against a field whose real skill
/// is `true_ratings`.
///
/// For each event:
/// 1. Pick a race count from the configured race lengths.
/// 2. Simulate that many races from the TRUE ratings to get observed shares.
/// 3. Estimate expected shares from the BELIEVED ratings only.
/// 4. Move every believed rating by `races * k * (observed - expected)`.
///
/// Steps 2 and 3 share the race sampling primitive but are separate call
/// sites. The estimator never sees the true ratings.
pub struct Season {
    estimator: PointShareEstimator,
    true_ratings: Vec<f64>,
    true_field: Vec<f64>,
    ratings: Vec<f64>,
    history: Vec<SeasonStep>,
    show_progress: bool
}

impl Season {
    pub fn new(config: EngineConfig, true_ratings: Vec<f64>) -> Result<Season> {
        let true_field = pad_field(&true_ratings, config.field_width(), config.rating_base)?;
        let ratings = vec![config.rating_base; true_ratings.len()];
        let estimator = PointShareEstimator::new(config)?;

        Ok(Season {
            estimator,
            true_ratings,
            true_field,
            ratings,
            history: Vec::new(),
            show_progress: false
        })
    }

    pub fn with_progress(mut self, enabled: bool) -> Season {
        self.show_progress = enabled;
        self
    }

    /// Current believed ratings
    pub fn ratings(&self) -> &[f64] {
        &self.ratings
    }

    pub fn true_ratings(&self) -> &[f64] {
        &self.true_ratings
    }

    pub fn history(&self) -> &[SeasonStep] {
        &self.history
    }

    /// Mean absolute error of the starting ratings
    pub fn initial_error(&self) -> f64 {
        let base = self.estimator.config().rating_base;
        self.true_ratings.iter().map(|t| (t - base).abs()).mean()
    }

    /// Mean absolute error of the current believed ratings
    pub fn current_error(&self) -> f64 {
        mean_abs_error(&self.ratings, &self.true_ratings)
    }

    /// Simulates `races` races against the true ratings and tallies the
    /// points of every real player.
    pub fn simulate_event<R: Rng + ?Sized>(&self, races: usize, rng: &mut R) -> Result<EventResult> {
        if races == 0 {
            return Err(RatingError::InvalidInput("an event needs at least one race".to_string()));
        }

        let config = self.estimator.config();
        let mut points = vec![0u32; self.true_ratings.len()];

        for _ in 0..races {
            let ranks = simulate_race(&self.true_field, config.rating_var, rng);
            for (total, rank) in points.iter_mut().zip(ranks) {
                *total = add_points(*total, config.points.points_for_rank(rank).unwrap_or_default())?;
            }
        }

        Ok(EventResult { races, points })
    }

    /// Plays one event and updates the believed ratings. If any step fails the
    /// ratings are left untouched.
    pub fn play_event<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&SeasonStep> {
        let config = self.estimator.config();
        let races = *config
            .race_lengths
            .choose(rng)
            .ok_or_else(|| RatingError::InvalidInput("no race lengths configured".to_string()))?;

        let observed = self.simulate_event(races, rng)?.point_share(&config.points)?;
        let expected = self.estimator.estimate_point_share(&self.ratings, config.samples, rng)?;
        let adjustments = calculate_adjustments(&expected, &observed, config.k_factor)?;
        let ratings = apply_adjustments(&self.ratings, &adjustments, races as f64)?;

        let step = SeasonStep {
            event: self.history.len(),
            races,
            mean_abs_error: mean_abs_error(&ratings, &self.true_ratings),
            observed,
            expected,
            ratings: ratings.clone()
        };

        debug!(
            event = step.event,
            races,
            error = step.mean_abs_error,
            "Ratings after event: {:?}",
            step.ratings
        );

        self.ratings = ratings;
        self.history.push(step);

        Ok(&self.history[self.history.len() - 1])
    }

    /// Plays `events` events in sequence.
    pub fn run<R: Rng + ?Sized>(&mut self, events: usize, rng: &mut R) -> Result<SeasonReport> {
        info!(
            players = self.true_ratings.len(),
            events,
            "Simulating season against true ratings {:?}",
            self.true_ratings
        );

        let bar = progress_bar(events as u64, "Simulating events".to_string(), self.show_progress);
        for _ in 0..events {
            self.play_event(rng)?;

            if let Some(bar) = &bar {
                bar.inc(1);
            }
        }

        if let Some(bar) = bar {
            bar.finish_and_clear();
        }

        let report = SeasonReport {
            true_ratings: self.true_ratings.clone(),
            final_ratings: self.ratings.clone(),
            initial_error: self.initial_error(),
            final_error: self.current_error(),
            history: self.history.clone()
        };

        info!(
            initial_error = report.initial_error,
            final_error = report.final_error,
            "Season complete"
        );

        Ok(report)
    }
}

fn mean_abs_error(ratings: &[f64], truth: &[f64]) -> f64 {
    ratings.iter().zip(truth).map(|(r, t)| (r - t).abs()).mean()
}
