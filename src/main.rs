//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use six_nations_fantasy::{
    cli::{Commands, FantasyCli},
    commands::{
        advise::{handle_advise, AdviseParams},
        form::{handle_form, FormParams},
        rules::handle_rules,
        score::handle_score,
        select::handle_select,
        validate::handle_validate,
    },
};

/// Run the CLI.
fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let app = FantasyCli::parse();
    let rules = app.rules.as_deref();

    match app.command {
        Commands::Select {
            data,
            prefer_subs,
            output,
        } => handle_select(rules, &data.data, data.json, prefer_subs, output.as_deref())?,

        Commands::Validate { data, squad } => handle_validate(rules, &data.data, &squad, data.json)?,

        Commands::Advise {
            kind,
            data,
            squad,
            top,
            max_ownership,
        } => handle_advise(AdviseParams {
            kind,
            rules_path: rules,
            data_path: &data.data,
            squad_path: squad.as_deref(),
            top_n: top,
            max_ownership,
            as_json: data.json,
        })?,

        Commands::Score {
            data,
            gameweek,
            squad,
        } => handle_score(rules, &data.data, squad.as_deref(), gameweek, data.json)?,

        Commands::Form {
            data,
            trend,
            recent,
            min_matches,
            top,
        } => handle_form(FormParams {
            rules_path: rules,
            data_path: &data.data,
            trend,
            recent_matches: recent,
            min_matches,
            top_n: top,
            as_json: data.json,
        })?,

        Commands::Rules { init, json } => handle_rules(rules, init, json)?,
    }

    Ok(())
}
