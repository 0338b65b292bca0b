//! Score recorded match stats

use anyhow::Result;
use log::warn;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use super::CommandContext;
use crate::{
    models::{MatchId, PlayerId, Squad},
    scoring::{score_player, BonusRole, PointsBreakdown},
};

/// One scored stat line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredLine {
    pub player_id: PlayerId,
    pub name: String,
    pub match_id: MatchId,
    pub gameweek: Option<u8>,
    #[serde(flatten)]
    pub points: PointsBreakdown,
}

/// Score every stat line in the pool (or only the squad's, with roles),
/// optionally restricted to one gameweek. Best first.
pub fn score_lines(
    ctx: &CommandContext,
    gameweek: Option<u8>,
    squad: Option<&Squad>,
) -> Vec<ScoredLine> {
    let gameweeks: HashMap<&MatchId, u8> = ctx
        .pool
        .matches
        .iter()
        .map(|m| (m.id(), m.gameweek()))
        .collect();

    let mut lines: Vec<ScoredLine> = ctx
        .pool
        .stats
        .iter()
        .filter_map(|stats| {
            let match_gameweek = gameweeks.get(&stats.match_id).copied();
            if gameweek.is_some() && match_gameweek != gameweek {
                return None;
            }

            let (player, role) = match squad {
                Some(squad) => {
                    let player = squad.get_player(&stats.player_id)?;
                    let role = if squad.is_captain(player.id()) {
                        BonusRole::Captain
                    } else if squad.is_supersub(player.id()) {
                        BonusRole::Supersub
                    } else {
                        BonusRole::None
                    };
                    (player, role)
                }
                None => match ctx.pool.player(&stats.player_id) {
                    Some(player) => (player, BonusRole::None),
                    None => {
                        warn!("Stats for unknown player {} skipped", stats.player_id);
                        return None;
                    }
                },
            };

            Some(ScoredLine {
                player_id: player.id().clone(),
                name: player.name().to_string(),
                match_id: stats.match_id.clone(),
                gameweek: match_gameweek,
                points: score_player(player, stats, role, &ctx.rules.scoring),
            })
        })
        .collect();

    lines.sort_by(|a, b| {
        b.points
            .final_points
            .partial_cmp(&a.points.final_points)
            .unwrap_or(Ordering::Equal)
    });
    lines
}

/// Handle the score command
pub fn handle_score(
    rules_path: Option<&Path>,
    data_path: &Path,
    squad_path: Option<&Path>,
    gameweek: Option<u8>,
    as_json: bool,
) -> Result<()> {
    let ctx = CommandContext::load(rules_path, data_path)?;
    let squad = squad_path.map(|path| ctx.load_squad(path)).transpose()?;
    let lines = score_lines(&ctx, gameweek, squad.as_ref());

    if as_json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }

    if lines.is_empty() {
        println!("No stats to score");
        return Ok(());
    }

    for line in &lines {
        let role = match line.points.role {
            BonusRole::Captain => " [C]",
            BonusRole::Supersub => " [S]",
            BonusRole::None => "",
        };
        let gw = line
            .gameweek
            .map(|gw| format!("GW{}", gw))
            .unwrap_or_else(|| "GW?".to_string());
        println!(
            "{:<24} {:<4} {:<16} {:>6.1} x{:<4} = {:>6.1}{}",
            line.name,
            gw,
            line.match_id,
            line.points.base_points,
            line.points.multiplier,
            line.points.final_points,
            role
        );
    }

    let total: f64 = lines.iter().map(|l| l.points.final_points).sum();
    println!("Total: {:.1} pts", total);

    Ok(())
}
