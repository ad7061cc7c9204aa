//! Rating engine for multi-player races scored by a fixed points table.
//!
//! The flow of a scoring event:
//! 1. [`estimator::PointShareEstimator`] predicts each player's share of the
//!    available points from their current ratings.
//! 2. [`observed`] turns the event's actual results into observed shares.
//! 3. [`adjustment::calculate_adjustments`] converts the gap into rating deltas,
//!    which the caller applies to its stored ratings.
//!
//! [`season::Season`] chains these steps over simulated events to check that
//! ratings converge to known values.

pub mod adjustment;
pub mod config;
pub mod constants;
pub mod error;
pub mod estimator;
pub mod observed;
pub mod placement;
pub mod points_table;
pub mod season;

pub use adjustment::{apply_adjustments, calculate_adjustments};
pub use config::EngineConfig;
pub use error::{RatingError, Result};
pub use estimator::{estimate_point_share, PointShareEstimator};
pub use observed::{observed_point_share, points_from_positions, EventResult};
pub use points_table::PointsTable;
pub use season::{Season, SeasonReport, SeasonStep};
