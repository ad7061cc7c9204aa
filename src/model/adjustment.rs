use crate::model::error::{ensure_finite, RatingError, Result};

/// Rating change per player: `k * (observed - expected)`.
///
/// Vectors are matched by index only. A player who earns a larger share than
/// expected gains rating in proportion to the surprise.
pub fn calculate_adjustments(expected: &[f64], observed: &[f64], k: f64) -> Result<Vec<f64>> {
    ensure_same_len(expected.len(), observed.len())?;
    ensure_finite(expected, "expected point share")?;
    ensure_finite(observed, "observed point share")?;

    let adjustments: Vec<f64> = expected
        .iter()
        .zip(observed)
        .map(|(e, o)| k * (o - e))
        .collect();
    ensure_finite(&adjustments, "rating adjustments")?;

    Ok(adjustments)
}

/// Returns `ratings[i] + scale * adjustments[i]`.
///
/// Multi-race events pass the race count as `scale`, since the adjustment was
/// computed from per-race average shares. Either every rating is updated or an
/// error is returned; a non-finite result is never produced.
pub fn apply_adjustments(ratings: &[f64], adjustments: &[f64], scale: f64) -> Result<Vec<f64>> {
    ensure_same_len(ratings.len(), adjustments.len())?;

    let updated: Vec<f64> = ratings
        .iter()
        .zip(adjustments)
        .map(|(r, a)| r + scale * a)
        .collect();
    ensure_finite(&updated, "updated ratings")?;

    Ok(updated)
}

fn ensure_same_len(expected: usize, observed: usize) -> Result<()> {
    if expected != observed {
        return Err(RatingError::DimensionMismatch { expected, observed });
    }

    Ok(())
}
