//! Six Nations Fantasy Library
//!
//! Squad-building engine for Six Nations Fantasy rugby: scoring, rule
//! validation, automatic selection and ranked advice.
//!
//! ## Features
//!
//! - **Scoring**: Fantasy points from per-match statistics, with captain and supersub multipliers
//! - **Validation**: Budget, country, size and role checks with structured error codes
//! - **Auto-selection**: Greedy fill plus a single swap pass over projected points
//! - **Advice**: Captain, supersub, value, transfer and differential rankings
//! - **Form**: Recent-form trends from match history
//! - **Configurable Rules**: Override any scoring weight or squad limit from a JSON file
//!
//! ## Quick Start
//!
//! ```rust
//! use six_nations_fantasy::{
//!     optimizer::auto_select, validation::validate_squad, Country, Player, PlayerId,
//!     Position, Projections, Rules,
//! };
//!
//! # fn example() -> six_nations_fantasy::Result<()> {
//! let pool = vec![
//!     Player::new("fra-dupont", "Antoine Dupont", Country::France, Position::Back, 20.0)?,
//!     Player::new("ire-sheehan", "Dan Sheehan", Country::Ireland, Position::Forward, 14.0)?,
//! ];
//! let projections: Projections = [
//!     (PlayerId::new("fra-dupont"), 60.0),
//!     (PlayerId::new("ire-sheehan"), 28.0),
//! ]
//! .into_iter()
//! .collect();
//!
//! let rules = Rules::default();
//! let squad = auto_select(&pool, &projections, &rules.squad);
//! let result = validate_squad(&squad, &rules.squad);
//! assert!(!result.is_valid); // two players is not a full squad
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a rules override file instead of passing `--rules`:
//! ```bash
//! export SIX_NATIONS_RULES=~/fantasy/rules.json
//! ```

pub mod advisor;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod form;
pub mod models;
pub mod optimizer;
pub mod rules;
pub mod scoring;
pub mod validation;

// Re-export commonly used types
pub use error::{FantasyError, Result};
pub use models::{
    Country, Match, MatchId, MatchStats, Player, PlayerId, Position, Projections,
    SelectionStatus, Squad, SubProbabilities,
};
pub use rules::{Rules, ScoringRules, SquadRules};

pub const RULES_PATH_ENV_VAR: &str = "SIX_NATIONS_RULES";
