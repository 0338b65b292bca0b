//! Input files and the context shared by every command.

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{
    core::load_rules,
    error::FantasyError,
    models::{Match, MatchStats, Player, PlayerId, Projections, Squad, SubProbabilities},
    rules::{Rules, SquadRules},
};

/// Everything the ingestion side exports for one round of decisions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolData {
    pub players: Vec<Player>,
    #[serde(default)]
    pub projections: Projections,
    #[serde(default)]
    pub sub_probability: SubProbabilities,
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub stats: Vec<MatchStats>,
}

impl PoolData {
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Every player must be affordable under the active budget, which may be
    /// configured below the default ceiling players are built against.
    pub fn check_star_values(&self, rules: &SquadRules) -> crate::Result<()> {
        match self.players.iter().find(|p| p.star_value() > rules.max_budget) {
            Some(player) => Err(FantasyError::InvalidPlayer {
                id: player.id().to_string(),
                reason: format!(
                    "star_value {} exceeds the configured budget ({})",
                    player.star_value(),
                    rules.max_budget
                ),
            }),
            None => Ok(()),
        }
    }
}

/// A squad on disk: member ids plus role ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadFile {
    pub players: Vec<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captain: Option<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supersub: Option<PlayerId>,
}

impl From<&Squad> for SquadFile {
    fn from(squad: &Squad) -> Self {
        Self {
            players: squad.players().iter().map(|p| p.id().clone()).collect(),
            captain: squad.captain_id.clone(),
            supersub: squad.supersub_id.clone(),
        }
    }
}

/// Resolve a squad file against the pool.
///
/// Fails on ids missing from the pool and on duplicate members. Role ids are
/// copied as given, so a dangling or doubled-up role reaches the validator
/// as `INVALID_CAPTAIN`, `INVALID_SUPERSUB` or `CAPTAIN_IS_SUPERSUB`, the
/// same way budget and country breaches do.
pub fn build_squad(pool: &[Player], file: &SquadFile) -> crate::Result<Squad> {
    let mut squad = Squad::new();
    for id in &file.players {
        let player = pool
            .iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| FantasyError::UnknownPlayer { id: id.to_string() })?;
        squad.add_player(player.clone())?;
    }

    squad.captain_id = file.captain.clone();
    squad.supersub_id = file.supersub.clone();
    Ok(squad)
}

/// Read and deserialize a JSON file, naming `what` in any error.
pub fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} file {}", what, path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {} file {}", what, path.display()))
}

/// Rules and pool data loaded once per command
pub struct CommandContext {
    pub rules: Rules,
    pub pool: PoolData,
}

impl CommandContext {
    pub fn load(rules_path: Option<&Path>, data_path: &Path) -> Result<Self> {
        let rules = load_rules(rules_path).context("Failed to load rules")?;
        let pool: PoolData = read_json(data_path, "player pool")?;
        pool.check_star_values(&rules.squad)
            .with_context(|| format!("Invalid player pool {}", data_path.display()))?;
        log::info!(
            "Loaded {} players, {} projections, {} stat lines",
            pool.players.len(),
            pool.projections.len(),
            pool.stats.len()
        );
        Ok(Self { rules, pool })
    }

    pub fn load_squad(&self, path: &Path) -> Result<Squad> {
        let file: SquadFile = read_json(path, "squad")?;
        build_squad(&self.pool.players, &file)
            .with_context(|| format!("Invalid squad file {}", path.display()))
    }
}
