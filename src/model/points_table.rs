use serde::{Deserialize, Serialize};

use crate::model::{
    constants::{POINTS, TOTAL},
    error::{RatingError, Result}
};

/// Points awarded by finishing rank, where rank 0 is last place and the
/// final rank is first place. The table length is the simulated field width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct PointsTable {
    points: Vec<u32>,
    total: u32
}

impl PointsTable {
    /// Builds a table from points ordered last place to first place.
    /// Values must be strictly increasing so that every rank is distinguishable.
    pub fn new(points: Vec<u32>) -> Result<PointsTable> {
        if points.is_empty() {
            return Err(RatingError::InvalidInput("points table must not be empty".to_string()));
        }

        if let Some((i, pair)) = points.windows(2).enumerate().find(|(_, w)| w[0] >= w[1]) {
            return Err(RatingError::InvalidInput(format!(
                "points table must be strictly increasing, found {} then {} at ranks {} and {}",
                pair[0],
                pair[1],
                i,
                i + 1
            )));
        }

        let total = points
            .iter()
            .try_fold(0u32, |acc, p| acc.checked_add(*p))
            .ok_or_else(|| RatingError::InvalidInput("points table total overflows".to_string()))?;

        if total == 0 {
            return Err(RatingError::InvalidInput("points table must award some points".to_string()));
        }

        Ok(PointsTable { points, total })
    }

    /// Number of competitors in a simulated race.
    pub fn width(&self) -> usize {
        self.points.len()
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn points(&self) -> &[u32] {
        &self.points
    }

    /// Points for `rank`, or `None` if the rank is outside the field.
    pub fn points_for_rank(&self, rank: usize) -> Option<u32> {
        self.points.get(rank).copied()
    }

    /// Share earned by finishing last in every race.
    pub fn min_share(&self) -> f64 {
        self.points[0] as f64 / self.total as f64
    }

    /// Share earned by winning every race.
    pub fn max_share(&self) -> f64 {
        self.points[self.points.len() - 1] as f64 / self.total as f64
    }
}

impl Default for PointsTable {
    fn default() -> Self {
        PointsTable {
            points: POINTS.to_vec(),
            total: TOTAL
        }
    }
}

impl TryFrom<Vec<u32>> for PointsTable {
    type Error = RatingError;

    fn try_from(points: Vec<u32>) -> Result<Self> {
        PointsTable::new(points)
    }
}

impl From<PointsTable> for Vec<u32> {
    fn from(table: PointsTable) -> Self {
        table.points
    }
}
