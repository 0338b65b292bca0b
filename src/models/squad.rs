//! The squad aggregate: members plus captain and supersub role ids.

use crate::error::{FantasyError, Result};
use crate::models::{
    ids::PlayerId,
    player::{Country, Player},
};
use crate::rules::SquadRules;
use serde::Serialize;
use std::collections::BTreeMap;

/// A fantasy squad selection.
///
/// The aggregate keeps its members distinct but otherwise stays permissive:
/// budget, size and country caps are reported by
/// [`validate_squad`](crate::validation::validate_squad), not enforced here.
/// Role ids are public so that exploratory states (including dangling ids)
/// can be represented and then validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Squad {
    players: Vec<Player>,
    pub captain_id: Option<PlayerId>,
    pub supersub_id: Option<PlayerId>,
}

impl Squad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Members in insertion order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Total star value of the squad.
    pub fn total_value(&self) -> f64 {
        self.players.iter().map(Player::star_value).sum()
    }

    /// Budget left under the rules' ceiling. Negative when over budget.
    pub fn budget_remaining(&self, rules: &SquadRules) -> f64 {
        rules.max_budget - self.total_value()
    }

    pub fn squad_size(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Has at least the minimum number of players.
    pub fn is_complete(&self, rules: &SquadRules) -> bool {
        self.squad_size() >= rules.min_squad_size
    }

    /// Members per country. Countries with no members are absent.
    pub fn country_counts(&self) -> BTreeMap<Country, usize> {
        let mut counts = BTreeMap::new();
        for p in &self.players {
            *counts.entry(p.country()).or_insert(0) += 1;
        }
        counts
    }

    /// Members from one country.
    pub fn country_count(&self, country: Country) -> usize {
        self.players.iter().filter(|p| p.country() == country).count()
    }

    pub fn get_player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn contains(&self, id: &PlayerId) -> bool {
        self.get_player(id).is_some()
    }

    /// The captain, if the captain id resolves to a member.
    pub fn captain(&self) -> Option<&Player> {
        self.captain_id.as_ref().and_then(|id| self.get_player(id))
    }

    /// The supersub, if the supersub id resolves to a member.
    pub fn supersub(&self) -> Option<&Player> {
        self.supersub_id.as_ref().and_then(|id| self.get_player(id))
    }

    pub fn is_captain(&self, id: &PlayerId) -> bool {
        self.captain_id.as_ref() == Some(id)
    }

    pub fn is_supersub(&self, id: &PlayerId) -> bool {
        self.supersub_id.as_ref() == Some(id)
    }

    pub fn add_player(&mut self, player: Player) -> Result<()> {
        if self.contains(player.id()) {
            return Err(FantasyError::DuplicatePlayer {
                id: player.id().to_string(),
            });
        }
        self.players.push(player);
        Ok(())
    }

    /// Remove a member, clearing any role it held.
    pub fn remove_player(&mut self, id: &PlayerId) -> Result<Player> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| FantasyError::PlayerNotFound { id: id.to_string() })?;

        let removed = self.players.remove(idx);
        if self.is_captain(id) {
            self.captain_id = None;
        }
        if self.is_supersub(id) {
            self.supersub_id = None;
        }
        Ok(removed)
    }

    pub fn set_captain(&mut self, id: &PlayerId) -> Result<()> {
        if !self.contains(id) {
            return Err(FantasyError::PlayerNotFound { id: id.to_string() });
        }
        self.captain_id = Some(id.clone());
        Ok(())
    }

    pub fn set_supersub(&mut self, id: &PlayerId) -> Result<()> {
        if !self.contains(id) {
            return Err(FantasyError::PlayerNotFound { id: id.to_string() });
        }
        if self.is_captain(id) {
            return Err(FantasyError::RoleConflict { id: id.to_string() });
        }
        self.supersub_id = Some(id.clone());
        Ok(())
    }

    pub fn clear_roles(&mut self) {
        self.captain_id = None;
        self.supersub_id = None;
    }
}
