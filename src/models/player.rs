//! Player (candidate) model: country, position class and star value.

use crate::error::{FantasyError, Result};
use crate::models::ids::PlayerId;
use crate::rules::MAX_BUDGET;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Six Nations participating countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(alias = "england", alias = "ENGLAND")]
    England,
    #[serde(alias = "france", alias = "FRANCE")]
    France,
    #[serde(alias = "ireland", alias = "IRELAND")]
    Ireland,
    #[serde(alias = "italy", alias = "ITALY")]
    Italy,
    #[serde(alias = "scotland", alias = "SCOTLAND")]
    Scotland,
    #[serde(alias = "wales", alias = "WALES")]
    Wales,
}

impl Country {
    pub const ALL: [Country; 6] = [
        Country::England,
        Country::France,
        Country::Ireland,
        Country::Italy,
        Country::Scotland,
        Country::Wales,
    ];

    /// Display name as used in fixture lists ("England", "France", ...).
    pub fn name(&self) -> &'static str {
        match self {
            Country::England => "England",
            Country::France => "France",
            Country::Ireland => "Ireland",
            Country::Italy => "Italy",
            Country::Scotland => "Scotland",
            Country::Wales => "Wales",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Country {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self> {
        Country::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FantasyError::InvalidCountry {
                country: s.to_string(),
            })
    }
}

/// Position class. Only selects the try tier and whether scrum wins count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[serde(alias = "front")]
    Forward,
    Back,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::Forward => "forward",
            Position::Back => "back",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "forward" | "front" | "fwd" | "f" => Ok(Position::Forward),
            "back" | "b" => Ok(Position::Back),
            _ => Err(FantasyError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

/// A selectable player.
///
/// Immutable once built. Every constructor (including deserialization) checks
/// that the star value lies in `0..=MAX_BUDGET` and that ownership, when
/// known, is a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlayerRecord")]
pub struct Player {
    id: PlayerId,
    name: String,
    country: Country,
    position: Position,
    star_value: f64,
    ownership_pct: Option<f64>,
}

/// Unchecked wire shape of a [`Player`].
#[derive(Debug, Deserialize)]
struct PlayerRecord {
    id: PlayerId,
    name: String,
    country: Country,
    position: Position,
    star_value: f64,
    #[serde(default)]
    ownership_pct: Option<f64>,
}

impl TryFrom<PlayerRecord> for Player {
    type Error = FantasyError;

    fn try_from(r: PlayerRecord) -> Result<Self> {
        let player = Player::new(r.id, r.name, r.country, r.position, r.star_value)?;
        match r.ownership_pct {
            Some(pct) => player.with_ownership(pct),
            None => Ok(player),
        }
    }
}

impl Player {
    pub fn new(
        id: impl Into<PlayerId>,
        name: impl Into<String>,
        country: Country,
        position: Position,
        star_value: f64,
    ) -> Result<Self> {
        let id = id.into();
        if !star_value.is_finite() || star_value < 0.0 {
            return Err(FantasyError::InvalidPlayer {
                id: id.to_string(),
                reason: "star_value cannot be negative".to_string(),
            });
        }
        if star_value > MAX_BUDGET {
            return Err(FantasyError::InvalidPlayer {
                id: id.to_string(),
                reason: format!("star_value cannot exceed total budget ({MAX_BUDGET})"),
            });
        }

        Ok(Self {
            id,
            name: name.into(),
            country,
            position,
            star_value,
            ownership_pct: None,
        })
    }

    /// Attach an ownership percentage (0-100).
    pub fn with_ownership(mut self, pct: f64) -> Result<Self> {
        if !(0.0..=100.0).contains(&pct) {
            return Err(FantasyError::InvalidPlayer {
                id: self.id.to_string(),
                reason: "ownership_pct must be between 0 and 100".to_string(),
            });
        }
        self.ownership_pct = Some(pct);
        Ok(self)
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> Country {
        self.country
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn star_value(&self) -> f64 {
        self.star_value
    }

    pub fn ownership_pct(&self) -> Option<f64> {
        self.ownership_pct
    }

    pub fn is_forward(&self) -> bool {
        self.position == Position::Forward
    }

    pub fn is_back(&self) -> bool {
        self.position == Position::Back
    }
}
