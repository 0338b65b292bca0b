//! Match records and per-player match statistics.

use crate::error::{FantasyError, Result};
use crate::models::ids::{MatchId, PlayerId};
use serde::{Deserialize, Serialize};

/// Player selection status for a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStatus {
    Starter,
    Substitute,
    #[default]
    NotSelected,
}

/// Statistics for a single player in a single match.
///
/// Counters are unsigned, so a negative count cannot be built in code and a
/// negative count in input data fails deserialization.
///
/// ```rust
/// use six_nations_fantasy::{MatchStats, SelectionStatus};
///
/// let stats = MatchStats {
///     selection_status: SelectionStatus::Substitute,
///     tries: 1,
///     ..MatchStats::new("fra-dupont", "gw1-fra-ire")
/// };
/// assert!(stats.played());
/// assert!(stats.was_substitute());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    #[serde(default)]
    pub selection_status: SelectionStatus,

    // Attack
    #[serde(default)]
    pub tries: u32,
    #[serde(default)]
    pub try_assists: u32,
    #[serde(default)]
    pub conversions: u32,
    #[serde(default)]
    pub penalty_kicks: u32,
    #[serde(default)]
    pub drop_goals: u32,
    #[serde(default)]
    pub metres_carried: u32,
    #[serde(default)]
    pub defenders_beaten: u32,
    #[serde(default)]
    pub offloads: u32,
    #[serde(default)]
    pub fifty_22_kicks: u32,
    #[serde(default)]
    pub kicks_retained: u32,
    #[serde(default)]
    pub scrum_wins: u32,

    // Defence
    #[serde(default)]
    pub tackles: u32,
    #[serde(default)]
    pub breakdown_steals: u32,
    #[serde(default)]
    pub lineout_steals: u32,
    #[serde(default)]
    pub penalties_conceded: u32,

    #[serde(default)]
    pub yellow_cards: u32,
    #[serde(default)]
    pub red_cards: u32,

    #[serde(default)]
    pub player_of_match: bool,
}

impl MatchStats {
    /// An all-zero, not-selected record for the given player and match.
    pub fn new(player_id: impl Into<PlayerId>, match_id: impl Into<MatchId>) -> Self {
        Self {
            player_id: player_id.into(),
            match_id: match_id.into(),
            ..Self::default()
        }
    }

    pub fn played(&self) -> bool {
        self.selection_status != SelectionStatus::NotSelected
    }

    pub fn was_substitute(&self) -> bool {
        self.selection_status == SelectionStatus::Substitute
    }
}

/// Number of gameweeks in a championship.
pub const GAMEWEEKS: u8 = 5;

/// A championship fixture as delivered by the ingestion side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatchRecord")]
pub struct Match {
    id: MatchId,
    home_team: String,
    away_team: String,
    gameweek: u8,
    home_score: Option<u32>,
    away_score: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct MatchRecord {
    id: MatchId,
    home_team: String,
    away_team: String,
    gameweek: u8,
    #[serde(default)]
    home_score: Option<u32>,
    #[serde(default)]
    away_score: Option<u32>,
}

impl TryFrom<MatchRecord> for Match {
    type Error = FantasyError;

    fn try_from(r: MatchRecord) -> Result<Self> {
        let m = Match::new(r.id, r.home_team, r.away_team, r.gameweek)?;
        Ok(match (r.home_score, r.away_score) {
            (Some(home), Some(away)) => m.with_result(home, away),
            _ => m,
        })
    }
}

impl Match {
    pub fn new(
        id: impl Into<MatchId>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        gameweek: u8,
    ) -> Result<Self> {
        let id = id.into();
        if !(1..=GAMEWEEKS).contains(&gameweek) {
            return Err(FantasyError::InvalidMatch {
                id: id.to_string(),
                reason: format!("gameweek must be between 1 and {GAMEWEEKS}"),
            });
        }
        Ok(Self {
            id,
            home_team: home_team.into(),
            away_team: away_team.into(),
            gameweek,
            home_score: None,
            away_score: None,
        })
    }

    /// Record the final score.
    pub fn with_result(mut self, home_score: u32, away_score: u32) -> Self {
        self.home_score = Some(home_score);
        self.away_score = Some(away_score);
        self
    }

    pub fn id(&self) -> &MatchId {
        &self.id
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn gameweek(&self) -> u8 {
        self.gameweek
    }

    pub fn home_score(&self) -> Option<u32> {
        self.home_score
    }

    pub fn away_score(&self) -> Option<u32> {
        self.away_score
    }

    pub fn is_completed(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }
}
