//! Squad validation command

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use super::{select::print_validation, CommandContext};
use crate::models::Country;
use crate::validation::{
    available_slots_for_country, max_player_value, squad_slots_remaining, validate_squad,
    ValidationResult,
};

#[derive(Debug, Serialize)]
struct ValidateOutput {
    #[serde(flatten)]
    result: ValidationResult,
    total_value: f64,
    budget_remaining: f64,
    max_player_value: f64,
    slots_remaining: usize,
}

/// Handle the validate command
pub fn handle_validate(
    rules_path: Option<&Path>,
    data_path: &Path,
    squad_path: &Path,
    as_json: bool,
) -> Result<()> {
    let ctx = CommandContext::load(rules_path, data_path)?;
    let squad = ctx.load_squad(squad_path)?;
    let rules = &ctx.rules.squad;
    let result = validate_squad(&squad, rules);

    if as_json {
        let out = ValidateOutput {
            total_value: squad.total_value(),
            budget_remaining: squad.budget_remaining(rules),
            max_player_value: max_player_value(&squad, rules),
            slots_remaining: squad_slots_remaining(&squad, rules),
            result,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "{} players, {:.1}★ spent, {:.1}★ remaining",
        squad.squad_size(),
        squad.total_value(),
        squad.budget_remaining(rules)
    );
    let open: Vec<String> = Country::ALL
        .iter()
        .map(|c| format!("{} {}", c, available_slots_for_country(&squad, *c, rules)))
        .collect();
    println!("Open country slots: {}", open.join(", "));
    print_validation(&result);

    Ok(())
}
