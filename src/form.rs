//! Recent-form tracking from match statistics.

use log::debug;
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{Match, MatchId, MatchStats, Player, PlayerId};
use crate::rules::ScoringRules;
use crate::scoring::base_points;


/// Direction of a player's recent scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormTrend {
    Improving,
    Stable,
    Declining,
}

impl FormTrend {
    /// Ranking weight applied to a player's average.
    pub fn weight(self) -> f64 {
        match self {
            FormTrend::Improving => 1.2,
            FormTrend::Stable => 1.0,
            FormTrend::Declining => 0.8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormTrend::Improving => "↑ improving",
            FormTrend::Stable => "→ stable",
            FormTrend::Declining => "↓ declining",
        }
    }
}

/// Base points over a player's most recent appearances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerForm {
    pub player_id: PlayerId,
    pub matches_played: usize,
    pub total_points: f64,
    pub average_points: f64,
    pub trend: FormTrend,
    /// Most recent first.
    pub recent_points: Vec<f64>,
}

impl PlayerForm {
    fn empty(player_id: &PlayerId) -> Self {
        Self {
            player_id: player_id.clone(),
            matches_played: 0,
            total_points: 0.0,
            average_points: 0.0,
            trend: FormTrend::Stable,
            recent_points: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormRecommendation {
    pub player: Player,
    pub form: PlayerForm,
    pub score: f64,
    pub reason: String,
}

/// How much history a form ranking looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormWindow {
    /// Appearances considered, most recent first.
    pub recent_matches: usize,
    /// Players with fewer appearances in the window are left out.
    pub min_matches: usize,
}

impl Default for FormWindow {
    fn default() -> Self {
        Self {
            recent_matches: 3,
            min_matches: 1,
        }
    }
}

impl FormWindow {
    /// Two appearances are the least that can show a trend.
    pub fn for_trends() -> Self {
        Self {
            min_matches: 2,
            ..Self::default()
        }
    }
}

/// Compare the average of the recent half of `points` (most recent first)
/// against the older half. A change smaller than 10% of the larger average
/// (or of 1 point) counts as stable.
pub fn form_trend(points: &[f64]) -> FormTrend {
    if points.len() < 2 {
        return FormTrend::Stable;
    }

    let (recent, older) = points.split_at(points.len() / 2);
    let recent_avg = recent.iter().sum::<f64>() / recent.len() as f64;
    let older_avg = older.iter().sum::<f64>() / older.len() as f64;

    let threshold = 0.1 * recent_avg.max(older_avg).max(1.0);

    if recent_avg > older_avg + threshold {
        FormTrend::Improving
    } else if recent_avg < older_avg - threshold {
        FormTrend::Declining
    } else {
        FormTrend::Stable
    }
}

/// Form of one player over their `recent_matches` latest appearances.
///
/// Only records where the player took the field and whose match is known
/// are used; unknown matches cannot be placed in time.
pub fn player_form(
    player: &Player,
    stats: &[MatchStats],
    matches: &[Match],
    recent_matches: usize,
    rules: &ScoringRules,
) -> PlayerForm {
    let lookup = match_lookup(matches);
    let records: Vec<&MatchStats> = stats
        .iter()
        .filter(|s| s.player_id == *player.id())
        .collect();
    form_from_records(player, records, &lookup, recent_matches, rules)
}

/// Players ranked by average points weighted by trend, best first.
pub fn form_rankings(
    players: &[Player],
    stats: &[MatchStats],
    matches: &[Match],
    window: &FormWindow,
    rules: &ScoringRules,
    top_n: usize,
) -> Vec<FormRecommendation> {
    let lookup = match_lookup(matches);

    let mut by_player: HashMap<&PlayerId, Vec<&MatchStats>> = HashMap::new();
    for record in stats {
        by_player.entry(&record.player_id).or_default().push(record);
    }

    let mut recommendations: Vec<FormRecommendation> = players
        .par_iter()
        .filter_map(|player| {
            let records = by_player.get(player.id()).cloned().unwrap_or_default();
            let form = form_from_records(player, records, &lookup, window.recent_matches, rules);
            if form.matches_played < window.min_matches {
                return None;
            }

            let score = form.average_points * form.trend.weight();
            let reason = format!(
                "{:.1} avg pts over {} matches ({})",
                form.average_points,
                form.matches_played,
                form.trend.label()
            );
            Some(FormRecommendation {
                player: player.clone(),
                form,
                score,
                reason,
            })
        })
        .collect();

    debug!(
        "Form computed for {} of {} players",
        recommendations.len(),
        players.len()
    );

    recommendations.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    recommendations.truncate(top_n);
    recommendations
}

/// Players trending upwards, best form first.
pub fn improving_players(
    players: &[Player],
    stats: &[MatchStats],
    matches: &[Match],
    window: &FormWindow,
    rules: &ScoringRules,
    top_n: usize,
) -> Vec<FormRecommendation> {
    with_trend(players, stats, matches, window, rules, FormTrend::Improving, top_n)
}

/// Players trending downwards, best form first. Useful when picking who to
/// transfer out.
pub fn declining_players(
    players: &[Player],
    stats: &[MatchStats],
    matches: &[Match],
    window: &FormWindow,
    rules: &ScoringRules,
    top_n: usize,
) -> Vec<FormRecommendation> {
    with_trend(players, stats, matches, window, rules, FormTrend::Declining, top_n)
}

fn with_trend(
    players: &[Player],
    stats: &[MatchStats],
    matches: &[Match],
    window: &FormWindow,
    rules: &ScoringRules,
    trend: FormTrend,
    top_n: usize,
) -> Vec<FormRecommendation> {
    form_rankings(players, stats, matches, window, rules, players.len())
        .into_iter()
        .filter(|r| r.form.trend == trend)
        .take(top_n)
        .collect()
}

fn match_lookup(matches: &[Match]) -> HashMap<&MatchId, &Match> {
    matches.iter().map(|m| (m.id(), m)).collect()
}

fn form_from_records(
    player: &Player,
    records: Vec<&MatchStats>,
    lookup: &HashMap<&MatchId, &Match>,
    recent_matches: usize,
    rules: &ScoringRules,
) -> PlayerForm {
    let mut dated: Vec<(u8, &MatchStats)> = records
        .into_iter()
        .filter(|s| s.played())
        .filter_map(|s| lookup.get(&s.match_id).map(|m| (m.gameweek(), s)))
        .collect();

    if dated.is_empty() {
        return PlayerForm::empty(player.id());
    }

    // Latest gameweek first; records from the same gameweek keep input order
    dated.sort_by(|a, b| b.0.cmp(&a.0));

    let recent_points: Vec<f64> = dated
        .into_iter()
        .take(recent_matches)
        .map(|(_, s)| base_points(s, player.position(), rules))
        .collect();

    let matches_played = recent_points.len();
    let total_points: f64 = recent_points.iter().sum();
    let average_points = if matches_played > 0 {
        total_points / matches_played as f64
    } else {
        0.0
    };

    PlayerForm {
        player_id: player.id().clone(),
        matches_played,
        total_points,
        average_points,
        trend: form_trend(&recent_points),
        recent_points,
    }
}
