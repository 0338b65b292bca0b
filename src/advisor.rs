//! Ranked recommendations: captaincy, supersub, value, transfers and
//! differentials.
//!
//! Every ranking is a pure function of the squad, pool and projections it is
//! given. Lists are sorted best-first (ties keep input order) and truncated
//! to the requested length.

use serde::Serialize;
use std::cmp::Ordering;

use crate::models::{projected_points, Player, Projections, Squad, SubProbabilities};
use crate::rules::Rules;
use crate::validation::{affordable_transfers, can_add, can_transfer};

#[cfg(test)]
mod tests;

/// Substitution probability assumed when none is known.
pub const DEFAULT_SUB_PROBABILITY: f64 = 0.5;

/// Default ownership threshold (percent) for differential picks.
pub const DEFAULT_DIFFERENTIAL_OWNERSHIP: f64 = 10.0;

/// A player with a ranking score and a human-readable justification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub player: Player,
    pub score: f64,
    pub reason: String,
}

/// A suggested one-for-one swap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferRecommendation {
    pub player_out: Player,
    pub player_in: Player,
    /// Points-per-star of the incoming player minus the outgoing one.
    pub value_gain: f64,
    pub reason: String,
}

/// Value metric: points per star. Zero for free (or invalid) prices.
pub fn points_per_star(points: f64, star_value: f64) -> f64 {
    if star_value <= 0.0 {
        return 0.0;
    }
    points / star_value
}

/// Ranks players against one set of projections and rules.
pub struct Advisor<'a> {
    projections: &'a Projections,
    rules: &'a Rules,
}

impl<'a> Advisor<'a> {
    pub fn new(projections: &'a Projections, rules: &'a Rules) -> Self {
        Self { projections, rules }
    }

    fn points(&self, player: &Player) -> f64 {
        projected_points(self.projections, player.id())
    }

    fn value(&self, player: &Player) -> f64 {
        points_per_star(self.points(player), player.star_value())
    }

    /// Captain candidates by doubled points. The current supersub is skipped
    /// since one player cannot hold both roles.
    pub fn captain_picks(&self, squad: &Squad, top_n: usize) -> Vec<Recommendation> {
        let multiplier = self.rules.scoring.captain_multiplier;

        let recommendations = squad
            .players()
            .iter()
            .filter(|p| !squad.is_supersub(p.id()))
            .map(|p| {
                let base = self.points(p);
                let captain_points = base * multiplier;
                Recommendation {
                    player: p.clone(),
                    score: captain_points,
                    reason: format!(
                        "Expected {:.1} pts as captain (+{:.1} from {}x multiplier)",
                        captain_points,
                        captain_points - base,
                        multiplier
                    ),
                }
            })
            .collect();

        best_first(recommendations, top_n)
    }

    /// Supersub candidates by expected points, weighting the bench and
    /// starting multipliers by each player's chance of coming on as a sub.
    pub fn supersub_picks(
        &self,
        squad: &Squad,
        sub_probability: Option<&SubProbabilities>,
        top_n: usize,
    ) -> Vec<Recommendation> {
        let scoring = &self.rules.scoring;

        let recommendations = squad
            .players()
            .iter()
            .filter(|p| !squad.is_captain(p.id()))
            .map(|p| {
                let prob = sub_probability
                    .and_then(|probs| probs.get(p.id()).copied())
                    .unwrap_or(DEFAULT_SUB_PROBABILITY)
                    .clamp(0.0, 1.0);
                let expected_multiplier = prob * scoring.supersub_subbed_multiplier
                    + (1.0 - prob) * scoring.supersub_started_multiplier;
                let expected_points = self.points(p) * expected_multiplier;

                Recommendation {
                    player: p.clone(),
                    score: expected_points,
                    reason: format!(
                        "Expected {:.1} pts ({:.0}% sub chance, {:.2}x avg)",
                        expected_points,
                        prob * 100.0,
                        expected_multiplier
                    ),
                }
            })
            .collect();

        best_first(recommendations, top_n)
    }

    /// Best points per star in the pool. With a squad, only players who
    /// could be added right now are considered.
    pub fn value_picks(
        &self,
        pool: &[Player],
        squad: Option<&Squad>,
        top_n: usize,
    ) -> Vec<Recommendation> {
        let recommendations = pool
            .iter()
            .filter(|p| self.can_join(squad, p))
            .filter_map(|p| {
                let value = self.value(p);
                (value > 0.0).then(|| Recommendation {
                    player: p.clone(),
                    score: value,
                    reason: value_reason(self.points(p), p.star_value(), value, ""),
                })
            })
            .collect();

        best_first(recommendations, top_n)
    }

    /// Squad members with the lowest points per star, weakest first.
    pub fn transfer_out_candidates(&self, squad: &Squad, top_n: usize) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = squad
            .players()
            .iter()
            .map(|p| {
                let role_note = if squad.is_captain(p.id()) {
                    " (current captain)"
                } else if squad.is_supersub(p.id()) {
                    " (current supersub)"
                } else {
                    ""
                };
                let value = self.value(p);
                Recommendation {
                    player: p.clone(),
                    score: value,
                    reason: value_reason(self.points(p), p.star_value(), value, role_note),
                }
            })
            .collect();

        recommendations.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
        recommendations.truncate(top_n);
        recommendations
    }

    /// Legal swaps that raise points per star, biggest gain first.
    pub fn transfer_suggestions(
        &self,
        squad: &Squad,
        pool: &[Player],
        top_n: usize,
    ) -> Vec<TransferRecommendation> {
        let squad_rules = &self.rules.squad;
        let mut suggestions = Vec::new();

        for player_out in squad.players() {
            let out_value = self.value(player_out);

            for player_in in affordable_transfers(squad, player_out, pool, squad_rules) {
                if !can_transfer(squad, player_out.id(), player_in, squad_rules).is_valid {
                    continue;
                }

                let in_value = self.value(player_in);
                let value_gain = in_value - out_value;
                if value_gain <= 0.0 {
                    continue;
                }

                suggestions.push(TransferRecommendation {
                    player_out: player_out.clone(),
                    player_in: player_in.clone(),
                    value_gain,
                    reason: format!(
                        "{} ({:.2} pts/★) → {} ({:.2} pts/★) = +{:.2} pts/★",
                        player_out.name(),
                        out_value,
                        player_in.name(),
                        in_value,
                        value_gain
                    ),
                });
            }
        }

        suggestions.sort_by(|a, b| {
            b.value_gain
                .partial_cmp(&a.value_gain)
                .unwrap_or(Ordering::Equal)
        });
        suggestions.truncate(top_n);
        suggestions
    }

    /// Low-ownership players with positive projections. The score grows with
    /// points and with how far ownership sits below `max_ownership`.
    pub fn differential_picks(
        &self,
        pool: &[Player],
        max_ownership: f64,
        squad: Option<&Squad>,
        top_n: usize,
    ) -> Vec<Recommendation> {
        if max_ownership <= 0.0 {
            return Vec::new();
        }

        let recommendations = pool
            .iter()
            .filter_map(|p| {
                let ownership = p.ownership_pct()?;
                if ownership >= max_ownership || !self.can_join(squad, p) {
                    return None;
                }

                let points = self.points(p);
                if points <= 0.0 {
                    return None;
                }

                let ownership_factor = (max_ownership - ownership) / max_ownership;
                Some(Recommendation {
                    player: p.clone(),
                    score: points * (1.0 + ownership_factor),
                    reason: format!("{:.1} pts, only {:.1}% owned", points, ownership),
                })
            })
            .collect();

        best_first(recommendations, top_n)
    }

    fn can_join(&self, squad: Option<&Squad>, player: &Player) -> bool {
        match squad {
            Some(squad) => {
                !squad.contains(player.id()) && can_add(squad, player, &self.rules.squad).is_valid
            }
            None => true,
        }
    }
}

fn value_reason(points: f64, star_value: f64, value: f64, note: &str) -> String {
    format!("{points:.1} pts / {star_value:.1}★ = {value:.2} pts/★{note}")
}

fn best_first(mut recommendations: Vec<Recommendation>, top_n: usize) -> Vec<Recommendation> {
    recommendations.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    recommendations.truncate(top_n);
    recommendations
}
