use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::{
    error::{ensure_finite, RatingError, Result},
    points_table::PointsTable
};

/// Points earned by each player over a completed event of one or more races.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResult {
    pub races: usize,
    pub points: Vec<u32>
}

impl EventResult {
    /// Builds an event from finishing positions, one vector per race.
    /// See [`points_from_positions`].
    pub fn from_positions(positions: &[Vec<usize>], table: &PointsTable) -> Result<EventResult> {
        Ok(EventResult {
            races: positions.len(),
            points: points_from_positions(positions, table)?
        })
    }

    pub fn point_share(&self, table: &PointsTable) -> Result<Vec<f64>> {
        observed_point_share(&self.points, self.races, table)
    }
}

/// Observed share of the available points per player: `points / (TOTAL * races)`.
pub fn observed_point_share(points: &[u32], races: usize, table: &PointsTable) -> Result<Vec<f64>> {
    if races == 0 {
        return Err(RatingError::InvalidInput("an event needs at least one race".to_string()));
    }

    if points.is_empty() {
        return Err(RatingError::InvalidInput("an event needs at least one player".to_string()));
    }

    let best = table.points_for_rank(table.width() - 1).unwrap_or_default() as u64;
    let max_points = best * races as u64;
    if let Some(p) = points.iter().find(|p| **p as u64 > max_points) {
        return Err(RatingError::InvalidInput(format!(
            "{} points cannot be earned in {} races (maximum {})",
            p, races, max_points
        )));
    }

    let pool = table.total() as f64 * races as f64;
    let shares: Vec<f64> = points.iter().map(|p| *p as f64 / pool).collect();
    ensure_finite(&shares, "observed point share")?;

    Ok(shares)
}

/// Totals points per player from finishing positions.
///
/// Each inner vector is one race and holds every player's 1-based finishing
/// position (1 = winner) in the same player order. Positions are over the
/// full field, so with 4 players in a 12 slot race valid positions are 1..=12.
pub fn points_from_positions(positions: &[Vec<usize>], table: &PointsTable) -> Result<Vec<u32>> {
    let width = table.width();
    let n_players = match positions.first() {
        Some(race) if !race.is_empty() => race.len(),
        _ => return Err(RatingError::InvalidInput("an event needs at least one race and player".to_string()))
    };

    let mut totals = vec![0u32; n_players];

    for (i, race) in positions.iter().enumerate() {
        if race.len() != n_players {
            return Err(RatingError::DimensionMismatch {
                expected: n_players,
                observed: race.len()
            });
        }

        if !race.iter().all_unique() {
            return Err(RatingError::InvalidInput(format!("race {} has duplicate positions: {:?}", i, race)));
        }

        for (total, position) in totals.iter_mut().zip(race) {
            if *position == 0 || *position > width {
                return Err(RatingError::InvalidInput(format!(
                    "race {} has position {} outside 1..={}",
                    i, position, width
                )));
            }

            // Position 1 is the best rank, width - 1
            let points = table.points_for_rank(width - position).unwrap_or_default();
            *total = add_points(*total, points)?;
        }
    }

    Ok(totals)
}

/// Adds one race's points to a running total, failing instead of wrapping.
pub(crate) fn add_points(total: u32, points: u32) -> Result<u32> {
    total.checked_add(points).ok_or_else(|| {
        RatingError::InvalidInput(format!(
            "points total overflows after adding {} to {}",
            points, total
        ))
    })
}

#[cfg(test)]
mod tests {
    use crate::model::{
        constants::TOTAL,
        error::RatingError,
        observed::{observed_point_share, points_from_positions, EventResult},
        points_table::PointsTable
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_single_race_share() {
        let table = PointsTable::default();
        let shares = observed_point_share(&[15, 1], 1, &table).unwrap();

        assert_abs_diff_eq!(shares[0], 15.0 / TOTAL as f64);
        assert_abs_diff_eq!(shares[1], 1.0 / TOTAL as f64);
    }

    #[test]
    fn test_multi_race_share_is_per_race_average() {
        let table = PointsTable::default();
        let shares = observed_point_share(&[60, 20], 4, &table).unwrap();

        assert_abs_diff_eq!(shares[0], 60.0 / (4.0 * TOTAL as f64));
        assert_abs_diff_eq!(shares[1], 20.0 / (4.0 * TOTAL as f64));
    }

    #[test]
    fn test_zero_races_is_invalid() {
        let result = observed_point_share(&[10], 0, &PointsTable::default());

        assert!(matches!(result, Err(RatingError::InvalidInput(_))));
    }

    #[test]
    fn test_impossible_points_are_invalid() {
        let result = observed_point_share(&[31], 2, &PointsTable::default());

        assert!(matches!(result, Err(RatingError::InvalidInput(_))));
    }

    #[test]
    fn test_points_from_positions() {
        let table = PointsTable::default();
        let positions = vec![vec![1, 2, 12], vec![3, 1, 11]];

        let points = points_from_positions(&positions, &table).unwrap();

        assert_eq!(points, vec![15 + 10, 12 + 15, 1 + 2]);
    }

    #[test]
    fn test_zero_points_share_is_zero() {
        let shares = observed_point_share(&[0, 0], 3, &PointsTable::default()).unwrap();

        assert_eq!(shares, vec![0.0, 0.0]);
    }

    #[test]
    fn test_points_from_positions_rejects_overflowing_total() {
        let table = PointsTable::new(vec![1, u32::MAX - 1]).unwrap();
        let result = points_from_positions(&[vec![1, 2], vec![1, 2]], &table);

        assert!(matches!(result, Err(RatingError::InvalidInput(_))));
    }

    #[test]
    fn test_points_from_positions_rejects_duplicates() {
        let result = points_from_positions(&[vec![1, 1]], &PointsTable::default());

        assert!(matches!(result, Err(RatingError::InvalidInput(_))));
    }

    #[test]
    fn test_points_from_positions_rejects_out_of_field() {
        let table = PointsTable::default();

        assert!(matches!(
            points_from_positions(&[vec![0, 2]], &table),
            Err(RatingError::InvalidInput(_))
        ));
        assert!(matches!(
            points_from_positions(&[vec![13, 2]], &table),
            Err(RatingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_points_from_positions_rejects_ragged_races() {
        let result = points_from_positions(&[vec![1, 2], vec![1]], &PointsTable::default());

        assert!(matches!(result, Err(RatingError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_points_from_positions_rejects_empty() {
        let result = points_from_positions(&[], &PointsTable::default());

        assert!(matches!(result, Err(RatingError::InvalidInput(_))));
    }

    #[test]
    fn test_event_result_share() {
        let table = PointsTable::default();
        let event = EventResult::from_positions(&[vec![1, 4], vec![2, 3]], &table).unwrap();

        assert_eq!(event.races, 2);
        assert_eq!(event.points, vec![15 + 12, 9 + 10]);

        let shares = event.point_share(&table).unwrap();
        assert_abs_diff_eq!(shares[0], 27.0 / (2.0 * TOTAL as f64));
        assert_abs_diff_eq!(shares[1], 19.0 / (2.0 * TOTAL as f64));
    }
}
