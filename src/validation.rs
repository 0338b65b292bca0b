//! Squad legality checks.
//!
//! Every check returns a [`ValidationResult`] instead of an error: callers are
//! expected to ask before they mutate a [`Squad`], and a failed check lists
//! every rule the action would break, not just the first.

use serde::Serialize;
use std::fmt;

use crate::models::{Country, Player, PlayerId, Squad};
use crate::rules::SquadRules;


/// Machine-readable reason a squad or action is illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    OverBudget,
    UnderMinSquad,
    OverMaxSquad,
    CountryLimit,
    InvalidCaptain,
    InvalidSupersub,
    CaptainIsSupersub,
    DuplicatePlayer,
    SquadFull,
    InsufficientBudget,
    PlayerNotFound,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::OverBudget => "OVER_BUDGET",
            ErrorCode::UnderMinSquad => "UNDER_MIN_SQUAD",
            ErrorCode::OverMaxSquad => "OVER_MAX_SQUAD",
            ErrorCode::CountryLimit => "COUNTRY_LIMIT",
            ErrorCode::InvalidCaptain => "INVALID_CAPTAIN",
            ErrorCode::InvalidSupersub => "INVALID_SUPERSUB",
            ErrorCode::CaptainIsSupersub => "CAPTAIN_IS_SUPERSUB",
            ErrorCode::DuplicatePlayer => "DUPLICATE_PLAYER",
            ErrorCode::SquadFull => "SQUAD_FULL",
            ErrorCode::InsufficientBudget => "INSUFFICIENT_BUDGET",
            ErrorCode::PlayerNotFound => "PLAYER_NOT_FOUND",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single broken rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub code: ErrorCode,
    pub message: String,
}

impl ValidationError {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Outcome of a check: blocking errors plus non-blocking warnings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn from_parts(errors: Vec<ValidationError>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    fn rejected(error: ValidationError) -> Self {
        Self::from_parts(vec![error], Vec::new())
    }

    pub fn has_error(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }
}

/// Check a whole squad against every rule.
pub fn validate_squad(squad: &Squad, rules: &SquadRules) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let total = squad.total_value();
    if total > rules.max_budget {
        errors.push(ValidationError::new(
            ErrorCode::OverBudget,
            format!("Team value ({total}) exceeds budget ({})", rules.max_budget),
        ));
    }

    let size = squad.squad_size();
    if size < rules.min_squad_size {
        errors.push(ValidationError::new(
            ErrorCode::UnderMinSquad,
            format!("Squad size ({size}) below minimum ({})", rules.min_squad_size),
        ));
    } else if size > rules.max_squad_size {
        errors.push(ValidationError::new(
            ErrorCode::OverMaxSquad,
            format!("Squad size ({size}) exceeds maximum ({})", rules.max_squad_size),
        ));
    }

    for (country, count) in squad.country_counts() {
        if count > rules.max_per_country {
            errors.push(ValidationError::new(
                ErrorCode::CountryLimit,
                format!(
                    "Too many players from {country} ({count}/{})",
                    rules.max_per_country
                ),
            ));
        }
    }

    if let Some(id) = &squad.captain_id {
        if squad.captain().is_none() {
            errors.push(ValidationError::new(
                ErrorCode::InvalidCaptain,
                format!("Captain {id} not in squad"),
            ));
        }
    }

    if let Some(id) = &squad.supersub_id {
        if squad.supersub().is_none() {
            errors.push(ValidationError::new(
                ErrorCode::InvalidSupersub,
                format!("Supersub {id} not in squad"),
            ));
        } else if squad.is_captain(id) {
            errors.push(ValidationError::new(
                ErrorCode::CaptainIsSupersub,
                "Captain cannot also be supersub",
            ));
        }
    }

    if !squad.is_complete(rules) {
        warnings.push(format!(
            "Incomplete squad ({size}/{}): points will be halved",
            rules.min_squad_size
        ));
    }
    if !squad.is_empty() {
        if squad.captain_id.is_none() {
            warnings.push("No captain selected: missing 2x multiplier".to_string());
        }
        if squad.supersub_id.is_none() {
            warnings.push("No supersub selected: missing potential 3x multiplier".to_string());
        }
    }

    ValidationResult::from_parts(errors, warnings)
}

/// Check whether `player` can join the squad.
pub fn can_add(squad: &Squad, player: &Player, rules: &SquadRules) -> ValidationResult {
    if squad.contains(player.id()) {
        return ValidationResult::rejected(ValidationError::new(
            ErrorCode::DuplicatePlayer,
            format!("Player {} is already in the squad", player.name()),
        ));
    }

    let mut errors = Vec::new();

    if squad.squad_size() >= rules.max_squad_size {
        errors.push(ValidationError::new(
            ErrorCode::SquadFull,
            format!("Squad is full ({} players)", rules.max_squad_size),
        ));
    }

    let new_total = squad.total_value() + player.star_value();
    if new_total > rules.max_budget {
        errors.push(ValidationError::new(
            ErrorCode::InsufficientBudget,
            format!(
                "Adding {} ({} stars) would exceed budget ({new_total}/{})",
                player.name(),
                player.star_value(),
                rules.max_budget
            ),
        ));
    }

    if squad.country_count(player.country()) >= rules.max_per_country {
        errors.push(ValidationError::new(
            ErrorCode::CountryLimit,
            format!(
                "Already have {} players from {}",
                rules.max_per_country,
                player.country()
            ),
        ));
    }

    ValidationResult::from_parts(errors, Vec::new())
}

/// Check whether a member can leave. Always allowed for members; losing a
/// role holder only produces a warning.
pub fn can_remove(squad: &Squad, player_id: &PlayerId) -> ValidationResult {
    let Some(player) = squad.get_player(player_id) else {
        return ValidationResult::rejected(not_found(player_id));
    };

    let mut warnings = Vec::new();
    if squad.is_captain(player_id) {
        warnings.push(format!(
            "Removing captain {}: will need new captain",
            player.name()
        ));
    }
    if squad.is_supersub(player_id) {
        warnings.push(format!(
            "Removing supersub {}: will need new supersub",
            player.name()
        ));
    }

    ValidationResult::from_parts(Vec::new(), warnings)
}

/// Check a one-for-one swap of `out_id` for `player_in`.
pub fn can_transfer(
    squad: &Squad,
    out_id: &PlayerId,
    player_in: &Player,
    rules: &SquadRules,
) -> ValidationResult {
    let Some(player_out) = squad.get_player(out_id) else {
        return ValidationResult::rejected(not_found(out_id));
    };

    if player_in.id() != out_id && squad.contains(player_in.id()) {
        return ValidationResult::rejected(ValidationError::new(
            ErrorCode::DuplicatePlayer,
            format!("Player {} is already in the squad", player_in.name()),
        ));
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let new_total = squad.total_value() - player_out.star_value() + player_in.star_value();
    if new_total > rules.max_budget {
        errors.push(ValidationError::new(
            ErrorCode::InsufficientBudget,
            format!(
                "Transfer would exceed budget ({new_total}/{})",
                rules.max_budget
            ),
        ));
    }

    // A same-country swap leaves the count unchanged.
    if player_in.country() != player_out.country()
        && squad.country_count(player_in.country()) >= rules.max_per_country
    {
        errors.push(ValidationError::new(
            ErrorCode::CountryLimit,
            format!(
                "Already have {} players from {}",
                rules.max_per_country,
                player_in.country()
            ),
        ));
    }

    if squad.is_captain(out_id) {
        warnings.push(format!(
            "Transferring out captain {}: will need new captain",
            player_out.name()
        ));
    }
    if squad.is_supersub(out_id) {
        warnings.push(format!(
            "Transferring out supersub {}: will need new supersub",
            player_out.name()
        ));
    }

    ValidationResult::from_parts(errors, warnings)
}

fn not_found(id: &PlayerId) -> ValidationError {
    ValidationError::new(
        ErrorCode::PlayerNotFound,
        format!("Player {id} is not in the squad"),
    )
}

/// Largest star value a new player may have right now (0 when over budget).
pub fn max_player_value(squad: &Squad, rules: &SquadRules) -> f64 {
    squad.budget_remaining(rules).max(0.0)
}

/// Further players the squad may take from `country`.
pub fn available_slots_for_country(squad: &Squad, country: Country, rules: &SquadRules) -> usize {
    rules.max_per_country.saturating_sub(squad.country_count(country))
}

/// Further players the squad may take before it is full.
pub fn squad_slots_remaining(squad: &Squad, rules: &SquadRules) -> usize {
    rules.max_squad_size.saturating_sub(squad.squad_size())
}

/// Largest star value a replacement for `player_out` may have.
pub fn transfer_budget(squad: &Squad, player_out: &Player, rules: &SquadRules) -> f64 {
    (squad.budget_remaining(rules) + player_out.star_value()).max(0.0)
}

/// Candidates from `pool` that could replace `player_out`: not already
/// members, affordable with the freed budget, and either from the same
/// country or from one still under its cap.
pub fn affordable_transfers<'a>(
    squad: &Squad,
    player_out: &Player,
    pool: &'a [Player],
    rules: &SquadRules,
) -> Vec<&'a Player> {
    let max_value = transfer_budget(squad, player_out, rules);

    pool.iter()
        .filter(|candidate| !squad.contains(candidate.id()))
        .filter(|candidate| candidate.star_value() <= max_value)
        .filter(|candidate| {
            candidate.country() == player_out.country()
                || available_slots_for_country(squad, candidate.country(), rules) > 0
        })
        .collect()
}
