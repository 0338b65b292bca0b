//! Show or initialize the rule set

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::{load_rules, rules_path, write_string};

/// Handle the rules command
pub fn handle_rules(rules_path_flag: Option<&Path>, init: bool, as_json: bool) -> Result<()> {
    let rules = load_rules(rules_path_flag).context("Failed to load rules")?;

    if init {
        let path = rules_path();
        let contents = serde_json::to_string_pretty(&rules)?;
        write_string(&path, &contents)
            .with_context(|| format!("Failed to write rules file {}", path.display()))?;
        println!("✓ Rules written to {}", path.display());
        return Ok(());
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    let squad = &rules.squad;
    println!(
        "Squad: {}-{} players, {:.1}★ budget, at most {} per country",
        squad.min_squad_size, squad.max_squad_size, squad.max_budget, squad.max_per_country
    );
    let scoring = &rules.scoring;
    println!(
        "Tries: {} (back) / {} (forward), assist {}, conversion {}, penalty {}, drop goal {}",
        scoring.try_back,
        scoring.try_forward,
        scoring.try_assist,
        scoring.conversion,
        scoring.penalty_kick,
        scoring.drop_goal
    );
    println!(
        "Captain x{}, supersub x{} off the bench / x{} when starting",
        scoring.captain_multiplier,
        scoring.supersub_subbed_multiplier,
        scoring.supersub_started_multiplier
    );

    Ok(())
}
