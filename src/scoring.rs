//! Fantasy points from match statistics.

use serde::{Deserialize, Serialize};

use crate::models::{MatchStats, Player, Position};
use crate::rules::ScoringRules;


/// Special roles that apply a points multiplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BonusRole {
    #[default]
    None,
    Captain,
    Supersub,
}

/// Points for one player in one match, before and after the role multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointsBreakdown {
    pub base_points: f64,
    pub multiplier: f64,
    pub final_points: f64,
    pub role: BonusRole,
}

/// Weighted sum over every counter in the record.
///
/// Forwards score the higher try value and are the only ones credited for
/// scrum wins. Metres count per whole 10 metres carried.
pub fn base_points(stats: &MatchStats, position: Position, rules: &ScoringRules) -> f64 {
    let count = |n: u32| n as i64;
    let is_forward = position == Position::Forward;

    let try_value = if is_forward {
        rules.try_forward
    } else {
        rules.try_back
    };

    let mut points: i64 = 0;
    points += count(stats.tries) * try_value as i64;
    points += count(stats.try_assists) * rules.try_assist as i64;
    points += count(stats.conversions) * rules.conversion as i64;
    points += count(stats.penalty_kicks) * rules.penalty_kick as i64;
    points += count(stats.drop_goals) * rules.drop_goal as i64;
    points += count(stats.defenders_beaten) * rules.defender_beaten as i64;
    points += count(stats.metres_carried / 10) * rules.per_ten_metres as i64;
    points += count(stats.fifty_22_kicks) * rules.fifty_22_kick as i64;
    points += count(stats.kicks_retained) * rules.kick_retained as i64;
    points += count(stats.offloads) * rules.offload as i64;
    if is_forward {
        points += count(stats.scrum_wins) * rules.scrum_win as i64;
    }

    points += count(stats.tackles) * rules.tackle as i64;
    points += count(stats.breakdown_steals) * rules.breakdown_steal as i64;
    points += count(stats.lineout_steals) * rules.lineout_steal as i64;
    points += count(stats.penalties_conceded) * rules.penalty_conceded as i64;

    if stats.player_of_match {
        points += rules.player_of_match as i64;
    }
    points += count(stats.yellow_cards) * rules.yellow_card as i64;
    points += count(stats.red_cards) * rules.red_card as i64;

    points as f64
}

/// Multiplier for a role. A supersub only earns the big multiplier when they
/// actually came off the bench; starting earns the penalty multiplier instead.
pub fn multiplier(role: BonusRole, was_substitute: bool, rules: &ScoringRules) -> f64 {
    match role {
        BonusRole::None => 1.0,
        BonusRole::Captain => rules.captain_multiplier,
        BonusRole::Supersub if was_substitute => rules.supersub_subbed_multiplier,
        BonusRole::Supersub => rules.supersub_started_multiplier,
    }
}

/// Full points breakdown for a record.
pub fn score(
    stats: &MatchStats,
    position: Position,
    role: BonusRole,
    rules: &ScoringRules,
) -> PointsBreakdown {
    let base_points = base_points(stats, position, rules);
    let multiplier = multiplier(role, stats.was_substitute(), rules);

    PointsBreakdown {
        base_points,
        multiplier,
        final_points: base_points * multiplier,
        role,
    }
}

/// Convenience wrapper taking the position from the player.
pub fn score_player(
    player: &Player,
    stats: &MatchStats,
    role: BonusRole,
    rules: &ScoringRules,
) -> PointsBreakdown {
    score(stats, player.position(), role, rules)
}
