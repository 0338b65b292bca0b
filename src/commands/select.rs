//! Automatic squad selection command

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

use super::{CommandContext, SquadFile};
use crate::{
    core::write_string,
    models::{projected_points, PlayerId, Squad},
    optimizer::{auto_select, auto_select_with_substitutes},
    validation::{validate_squad, ValidationResult},
};

/// Substitution probability at which a player counts as a likely sub.
pub const LIKELY_SUB_THRESHOLD: f64 = 0.5;

#[derive(Debug, Serialize)]
struct SelectOutput<'a> {
    squad: &'a Squad,
    projected_points: f64,
    validation: &'a ValidationResult,
}

/// Handle the select command
pub fn handle_select(
    rules_path: Option<&Path>,
    data_path: &Path,
    as_json: bool,
    prefer_subs: bool,
    output: Option<&Path>,
) -> Result<()> {
    let ctx = CommandContext::load(rules_path, data_path)?;
    let squad = select_squad(&ctx, prefer_subs);
    let validation = validate_squad(&squad, &ctx.rules.squad);
    let total = squad_projection(&ctx, &squad);

    if let Some(path) = output {
        let contents = serde_json::to_string_pretty(&SquadFile::from(&squad))?;
        write_string(path, &contents)
            .with_context(|| format!("Failed to write squad file {}", path.display()))?;
    }

    if as_json {
        let out = SelectOutput {
            squad: &squad,
            projected_points: total,
            validation: &validation,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "Selected {} players ({:.1}★ of {:.1}★)",
        squad.squad_size(),
        squad.total_value(),
        ctx.rules.squad.max_budget
    );
    for player in squad.players() {
        let role = if squad.is_captain(player.id()) {
            " [C]"
        } else if squad.is_supersub(player.id()) {
            " [S]"
        } else {
            ""
        };
        println!(
            "  {:<24} {:<9} {:<8} {:>5.1}★ {:>6.1} pts{}",
            player.name(),
            player.country(),
            player.position(),
            player.star_value(),
            projected_points(&ctx.pool.projections, player.id()),
            role
        );
    }
    println!("Projected total: {:.1} pts", total);
    print_validation(&validation);
    if let Some(path) = output {
        println!("Squad saved to {}", path.display());
    }

    Ok(())
}

fn select_squad(ctx: &CommandContext, prefer_subs: bool) -> Squad {
    let pool = &ctx.pool;
    if !prefer_subs {
        return auto_select(&pool.players, &pool.projections, &ctx.rules.squad);
    }

    let likely_subs: HashSet<PlayerId> = pool
        .sub_probability
        .iter()
        .filter(|(_, prob)| **prob >= LIKELY_SUB_THRESHOLD)
        .map(|(id, _)| id.clone())
        .collect();
    auto_select_with_substitutes(&pool.players, &pool.projections, &likely_subs, &ctx.rules.squad)
}

/// Projected squad total with the captain's multiplier applied.
pub fn squad_projection(ctx: &CommandContext, squad: &Squad) -> f64 {
    squad
        .players()
        .iter()
        .map(|p| {
            let points = projected_points(&ctx.pool.projections, p.id());
            if squad.is_captain(p.id()) {
                points * ctx.rules.scoring.captain_multiplier
            } else {
                points
            }
        })
        .sum()
}

/// Print errors and warnings from a validation result.
pub fn print_validation(result: &ValidationResult) {
    if result.is_valid {
        println!("✓ Squad is valid");
    } else {
        println!("✗ Squad is invalid");
    }
    for error in &result.errors {
        println!("  error: {}", error);
    }
    for warning in &result.warnings {
        println!("  warning: {}", warning);
    }
}
