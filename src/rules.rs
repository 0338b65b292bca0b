//! Game rules: squad constraints and scoring weights.
//!
//! The named constants are the official championship defaults. Everything the
//! engine consults at runtime goes through an immutable [`Rules`] value, so a
//! different rule set is a configuration change (see
//! [`load_rules`](crate::core::config::load_rules)), not a code change.

use crate::error::{FantasyError, Result};
use serde::{Deserialize, Serialize};

pub const MAX_BUDGET: f64 = 200.0;
pub const MAX_PER_COUNTRY: usize = 4;
pub const MIN_SQUAD_SIZE: usize = 15;
pub const MAX_SQUAD_SIZE: usize = 16;

pub const CAPTAIN_MULTIPLIER: f64 = 2.0;
pub const SUPERSUB_SUBBED_MULTIPLIER: f64 = 3.0;
pub const SUPERSUB_STARTED_MULTIPLIER: f64 = 0.5;

/// Squad-building constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquadRules {
    pub max_budget: f64,
    pub max_per_country: usize,
    pub min_squad_size: usize,
    pub max_squad_size: usize,
}

impl Default for SquadRules {
    fn default() -> Self {
        Self {
            max_budget: MAX_BUDGET,
            max_per_country: MAX_PER_COUNTRY,
            min_squad_size: MIN_SQUAD_SIZE,
            max_squad_size: MAX_SQUAD_SIZE,
        }
    }
}

/// Points per counted action, plus the role multipliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub try_back: i32,
    pub try_forward: i32,
    pub try_assist: i32,
    pub conversion: i32,
    pub penalty_kick: i32,
    pub drop_goal: i32,
    pub defender_beaten: i32,
    /// Awarded per whole 10 metres carried.
    pub per_ten_metres: i32,
    pub fifty_22_kick: i32,
    pub kick_retained: i32,
    pub offload: i32,
    /// Forwards only.
    pub scrum_win: i32,

    pub tackle: i32,
    pub breakdown_steal: i32,
    pub lineout_steal: i32,
    pub penalty_conceded: i32,

    pub player_of_match: i32,
    pub yellow_card: i32,
    pub red_card: i32,

    pub captain_multiplier: f64,
    pub supersub_subbed_multiplier: f64,
    pub supersub_started_multiplier: f64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            try_back: 10,
            try_forward: 15,
            try_assist: 4,
            conversion: 2,
            penalty_kick: 3,
            drop_goal: 5,
            defender_beaten: 2,
            per_ten_metres: 1,
            fifty_22_kick: 7,
            kick_retained: 2,
            offload: 2,
            scrum_win: 1,
            tackle: 1,
            breakdown_steal: 5,
            lineout_steal: 7,
            penalty_conceded: -1,
            player_of_match: 15,
            yellow_card: -5,
            red_card: -8,
            captain_multiplier: CAPTAIN_MULTIPLIER,
            supersub_subbed_multiplier: SUPERSUB_SUBBED_MULTIPLIER,
            supersub_started_multiplier: SUPERSUB_STARTED_MULTIPLIER,
        }
    }
}

/// Complete rule set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub squad: SquadRules,
    pub scoring: ScoringRules,
}

impl Rules {
    /// Reject rule sets the optimizer and validator cannot work with.
    pub fn validate(&self) -> Result<()> {
        let squad = &self.squad;
        if !squad.max_budget.is_finite() || squad.max_budget <= 0.0 {
            return Err(invalid("max_budget must be a positive number"));
        }
        if squad.max_per_country == 0 {
            return Err(invalid("max_per_country must be at least 1"));
        }
        if squad.min_squad_size == 0 || squad.min_squad_size > squad.max_squad_size {
            return Err(invalid("min_squad_size must be in 1..=max_squad_size"));
        }

        let scoring = &self.scoring;
        let multipliers = [
            scoring.captain_multiplier,
            scoring.supersub_subbed_multiplier,
            scoring.supersub_started_multiplier,
        ];
        if multipliers.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(invalid("multipliers must be non-negative"));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> FantasyError {
    FantasyError::InvalidRules {
        reason: reason.to_string(),
    }
}
