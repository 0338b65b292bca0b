//! Advisory command: captaincy, supersub, value, transfers and differentials

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::path::Path;

use super::CommandContext;
use crate::{
    advisor::{Advisor, Recommendation, TransferRecommendation},
    cli::types::AdviceKind,
    models::Squad,
};

/// Parameters for the advise command
#[derive(Debug, Clone)]
pub struct AdviseParams<'a> {
    pub kind: AdviceKind,
    pub rules_path: Option<&'a Path>,
    pub data_path: &'a Path,
    pub squad_path: Option<&'a Path>,
    pub top_n: usize,
    pub max_ownership: f64,
    pub as_json: bool,
}

/// Handle the advise command
pub fn handle_advise(params: AdviseParams<'_>) -> Result<()> {
    if params.kind.needs_squad() && params.squad_path.is_none() {
        bail!("`{}` advice needs a squad file (--squad)", params.kind);
    }

    let ctx = CommandContext::load(params.rules_path, params.data_path)?;
    let squad = params
        .squad_path
        .map(|path| ctx.load_squad(path))
        .transpose()?;

    let advisor = Advisor::new(&ctx.pool.projections, &ctx.rules);
    let pool = &ctx.pool.players;
    let squad = squad.as_ref();
    let top_n = params.top_n;

    let advice = match params.kind {
        AdviceKind::Captain => Advice::Picks(advisor.captain_picks(require(squad)?, top_n)),
        AdviceKind::Supersub => Advice::Picks(advisor.supersub_picks(
            require(squad)?,
            Some(&ctx.pool.sub_probability),
            top_n,
        )),
        AdviceKind::Value => Advice::Picks(advisor.value_picks(pool, squad, top_n)),
        AdviceKind::TransferOut => {
            Advice::Picks(advisor.transfer_out_candidates(require(squad)?, top_n))
        }
        AdviceKind::Transfers => {
            Advice::Transfers(advisor.transfer_suggestions(require(squad)?, pool, top_n))
        }
        AdviceKind::Differentials => Advice::Picks(advisor.differential_picks(
            pool,
            params.max_ownership,
            squad,
            top_n,
        )),
    };

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
        return Ok(());
    }

    match &advice {
        Advice::Picks(recommendations) => print_recommendations(params.kind, recommendations),
        Advice::Transfers(suggestions) => print_transfers(suggestions),
    }

    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Advice {
    Picks(Vec<Recommendation>),
    Transfers(Vec<TransferRecommendation>),
}

fn require(squad: Option<&Squad>) -> Result<&Squad> {
    squad.context("a squad file is required")
}

fn print_recommendations(kind: AdviceKind, recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        println!("No {} recommendations", kind);
        return;
    }

    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "{:>2}. {:<24} {:<9} {:>7.2}  {}",
            rank + 1,
            rec.player.name(),
            rec.player.country(),
            rec.score,
            rec.reason
        );
    }
}

fn print_transfers(suggestions: &[TransferRecommendation]) {
    if suggestions.is_empty() {
        println!("No transfers improve value");
        return;
    }

    for (rank, s) in suggestions.iter().enumerate() {
        println!("{:>2}. {}", rank + 1, s.reason);
    }
}
