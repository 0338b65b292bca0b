//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{AdviceKind, TrendFilter};

/// Input and output arguments shared between commands
#[derive(Debug, Args)]
pub struct DataArgs {
    /// Player pool JSON: players, projections, sub probabilities, matches and stats.
    #[clap(long, short)]
    pub data: PathBuf,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
#[clap(
    name = "six-nations-fantasy",
    about = "Six Nations Fantasy squad builder and advisor",
    version
)]
pub struct FantasyCli {
    /// Rules override file (or set `SIX_NATIONS_RULES` env var).
    #[clap(long, global = true)]
    pub rules: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Pick a squad automatically from the pool's projections
    Select {
        #[clap(flatten)]
        data: DataArgs,

        /// Prefer likely substitutes (sub probability >= 0.5) for supersub.
        #[clap(long)]
        prefer_subs: bool,

        /// Save the selected squad as a squad file.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },

    /// Check a squad file against the rules
    Validate {
        #[clap(flatten)]
        data: DataArgs,

        /// Squad file: player ids plus optional captain and supersub.
        #[clap(long, short)]
        squad: PathBuf,
    },

    /// Ranked recommendations for captaincy, transfers and more
    Advise {
        /// What to recommend.
        #[clap(value_enum)]
        kind: AdviceKind,

        #[clap(flatten)]
        data: DataArgs,

        /// Squad file (required for captain, supersub and transfer advice).
        #[clap(long, short)]
        squad: Option<PathBuf>,

        /// Number of recommendations.
        #[clap(long, short = 'n', default_value_t = 5)]
        top: usize,

        /// Ownership threshold (percent) for differentials.
        #[clap(long, default_value_t = crate::advisor::DEFAULT_DIFFERENTIAL_OWNERSHIP)]
        max_ownership: f64,
    },

    /// Fantasy points for recorded match stats
    Score {
        #[clap(flatten)]
        data: DataArgs,

        /// Only score this gameweek.
        #[clap(long, short)]
        gameweek: Option<u8>,

        /// Score a squad, applying its captain and supersub multipliers.
        #[clap(long, short)]
        squad: Option<PathBuf>,
    },

    /// Players ranked by recent form
    Form {
        #[clap(flatten)]
        data: DataArgs,

        /// Only list players with this trend.
        #[clap(long, value_enum)]
        trend: Option<TrendFilter>,

        /// Appearances to consider, most recent first.
        #[clap(long, default_value_t = 3)]
        recent: usize,

        /// Minimum appearances in the window (defaults to 2 with --trend, else 1).
        #[clap(long)]
        min_matches: Option<usize>,

        /// Number of players to list.
        #[clap(long, short = 'n', default_value_t = 10)]
        top: usize,
    },

    /// Show the effective rule set
    Rules {
        /// Write the effective rules to the user config file.
        #[clap(long)]
        init: bool,

        /// Output as JSON.
        #[clap(long)]
        json: bool,
    },
}
