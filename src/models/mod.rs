//! Entity model: players, match records and the squad aggregate.

pub mod ids;
pub mod player;
pub mod squad;
pub mod stats;


use std::collections::HashMap;

pub use ids::{MatchId, PlayerId};
pub use player::{Country, Player, Position};
pub use squad::Squad;
pub use stats::{Match, MatchStats, SelectionStatus, GAMEWEEKS};

/// Externally supplied expected points per player. Missing players count as 0.
pub type Projections = HashMap<PlayerId, f64>;

/// Per-player probability (0-1) of coming off the bench.
pub type SubProbabilities = HashMap<PlayerId, f64>;

/// Projected points for `id`, defaulting to 0.
pub fn projected_points(projections: &Projections, id: &PlayerId) -> f64 {
    projections.get(id).copied().unwrap_or(0.0)
}
