//! Form rankings command

use anyhow::Result;
use std::path::Path;

use super::CommandContext;
use crate::{
    cli::types::TrendFilter,
    form::{declining_players, form_rankings, improving_players, FormTrend, FormWindow},
};

/// Parameters for the form command
#[derive(Debug, Clone)]
pub struct FormParams<'a> {
    pub rules_path: Option<&'a Path>,
    pub data_path: &'a Path,
    pub trend: Option<TrendFilter>,
    pub recent_matches: usize,
    pub min_matches: Option<usize>,
    pub top_n: usize,
    pub as_json: bool,
}

impl FormParams<'_> {
    /// Trend listings need two appearances unless told otherwise.
    pub fn window(&self) -> FormWindow {
        let base = if self.trend.is_some() {
            FormWindow::for_trends()
        } else {
            FormWindow::default()
        };
        FormWindow {
            recent_matches: self.recent_matches,
            min_matches: self.min_matches.unwrap_or(base.min_matches),
        }
    }
}

/// Handle the form command
pub fn handle_form(params: FormParams<'_>) -> Result<()> {
    let ctx = CommandContext::load(params.rules_path, params.data_path)?;
    let pool = &ctx.pool;
    let scoring = &ctx.rules.scoring;
    let window = params.window();

    let ranked = match params.trend.map(FormTrend::from) {
        Some(FormTrend::Improving) => improving_players(
            &pool.players,
            &pool.stats,
            &pool.matches,
            &window,
            scoring,
            params.top_n,
        ),
        Some(FormTrend::Declining) => declining_players(
            &pool.players,
            &pool.stats,
            &pool.matches,
            &window,
            scoring,
            params.top_n,
        ),
        _ => form_rankings(
            &pool.players,
            &pool.stats,
            &pool.matches,
            &window,
            scoring,
            params.top_n,
        ),
    };

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("No players with enough recent matches");
        return Ok(());
    }

    for (rank, rec) in ranked.iter().enumerate() {
        let recent: Vec<String> = rec
            .form
            .recent_points
            .iter()
            .map(|p| format!("{:.0}", p))
            .collect();
        println!(
            "{:>2}. {:<24} {:<9} {:>6.1}  {}  [{}]",
            rank + 1,
            rec.player.name(),
            rec.player.country(),
            rec.score,
            rec.reason,
            recent.join(", ")
        );
    }

    Ok(())
}
