//! End-to-end tests for the squad engine through the public API

use six_nations_fantasy::{
    advisor::Advisor,
    form::{form_rankings, FormWindow},
    models::projected_points,
    optimizer::auto_select,
    scoring::{score_player, BonusRole},
    validation::{can_add, can_transfer, validate_squad, ErrorCode},
    Country, Match, MatchStats, Player, PlayerId, Position, Projections, Rules,
    SelectionStatus, Squad,
};

/// Six players per country, 6-12 stars each, so any 15 fit the budget.
fn championship_pool() -> (Vec<Player>, Projections) {
    let mut pool = Vec::new();
    let mut projections = Projections::new();
    for (c, country) in Country::ALL.iter().enumerate() {
        for n in 0..6 {
            let i = c * 6 + n;
            let cost = 6.0 + (i % 7) as f64;
            let position = if n % 2 == 0 {
                Position::Forward
            } else {
                Position::Back
            };
            let id = format!("{}-{}", country.name().to_lowercase(), n);
            let player = Player::new(id.as_str(), format!("Player {i}"), *country, position, cost)
                .unwrap()
                .with_ownership((i * 3 % 50) as f64)
                .unwrap();
            projections.insert(PlayerId::new(id), cost * 2.0 + ((i * 7) % 11) as f64);
            pool.push(player);
        }
    }
    (pool, projections)
}

#[test]
fn test_auto_selected_squad_is_valid() {
    let (pool, projections) = championship_pool();
    let rules = Rules::default();

    let squad = auto_select(&pool, &projections, &rules.squad);
    let result = validate_squad(&squad, &rules.squad);

    assert!(result.is_valid, "{:?}", result.errors);
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    assert_eq!(squad.squad_size(), 15);
    assert!(squad.total_value() <= 200.0);
    assert!(squad.country_counts().values().all(|n| *n <= 4));
    assert_ne!(squad.captain_id, squad.supersub_id);
}

#[test]
fn test_top_captain_pick_is_best_projected_member() {
    let (pool, projections) = championship_pool();
    let rules = Rules::default();
    let squad = auto_select(&pool, &projections, &rules.squad);

    let picks = Advisor::new(&projections, &rules).captain_picks(&squad, 1);
    let best = squad
        .players()
        .iter()
        .filter(|p| !squad.is_supersub(p.id()))
        .map(|p| projected_points(&projections, p.id()))
        .fold(f64::MIN, f64::max);

    assert_eq!(picks.len(), 1);
    assert_eq!(picks[0].score, best * 2.0);
}

#[test]
fn test_applying_suggested_transfer_keeps_squad_valid() {
    let (pool, projections) = championship_pool();
    let rules = Rules::default();
    let mut squad = auto_select(&pool, &projections, &rules.squad);

    let suggestions = Advisor::new(&projections, &rules).transfer_suggestions(&squad, &pool, 10);
    for s in &suggestions {
        assert!(can_transfer(&squad, s.player_out.id(), &s.player_in, &rules.squad).is_valid);
        assert!(s.value_gain > 0.0);
    }

    if let Some(best) = suggestions.first() {
        squad.remove_player(best.player_out.id()).unwrap();
        squad.add_player(best.player_in.clone()).unwrap();
        let result = validate_squad(&squad, &rules.squad);
        assert!(result.is_valid, "{:?}", result.errors);
        assert_eq!(squad.squad_size(), 15);
    }
}

#[test]
fn test_rejected_add_leaves_squad_unchanged() {
    let rules = Rules::default();
    let mut squad = Squad::new();
    for n in 0..4 {
        let player = Player::new(
            format!("wal-{n}"),
            format!("Wales {n}"),
            Country::Wales,
            Position::Back,
            10.0,
        )
        .unwrap();
        squad.add_player(player).unwrap();
    }
    let before = squad.clone();

    let fifth = Player::new("wal-5", "Wales 5", Country::Wales, Position::Back, 5.0).unwrap();
    let check = can_add(&squad, &fifth, &rules.squad);

    assert!(!check.is_valid);
    assert!(check.has_error(ErrorCode::CountryLimit));
    assert_eq!(squad, before);
}

#[test]
fn test_matchday_scoring_with_roles() {
    let rules = Rules::default();
    let captain = Player::new("fra-9", "Scrum-half", Country::France, Position::Back, 20.0).unwrap();
    let bench = Player::new("ire-2", "Hooker", Country::Ireland, Position::Forward, 14.0).unwrap();

    let captain_stats = MatchStats {
        selection_status: SelectionStatus::Starter,
        tries: 2,
        try_assists: 1,
        metres_carried: 57,
        ..MatchStats::new("fra-9", "gw1-fra-ire")
    };
    let bench_stats = MatchStats {
        selection_status: SelectionStatus::Substitute,
        tries: 1,
        scrum_wins: 3,
        ..MatchStats::new("ire-2", "gw1-fra-ire")
    };

    // 2 * 10 + 4 + 57 / 10 = 29, doubled
    let c = score_player(&captain, &captain_stats, BonusRole::Captain, &rules.scoring);
    assert_eq!(c.base_points, 29.0);
    assert_eq!(c.final_points, 58.0);

    // 15 + 3 = 18, tripled off the bench
    let s = score_player(&bench, &bench_stats, BonusRole::Supersub, &rules.scoring);
    assert_eq!(s.base_points, 18.0);
    assert_eq!(s.final_points, 54.0);
}

#[test]
fn test_form_over_a_championship() {
    let rules = Rules::default();
    let player = Player::new("sco-10", "Fly-half", Country::Scotland, Position::Back, 16.0).unwrap();
    let matches: Vec<Match> = (1..=5)
        .map(|gw| Match::new(format!("gw{gw}"), "Scotland", "Italy", gw).unwrap())
        .collect();
    let stats: Vec<MatchStats> = (1..=5u32)
        .map(|gw| MatchStats {
            selection_status: SelectionStatus::Starter,
            conversions: gw,
            ..MatchStats::new("sco-10", format!("gw{gw}"))
        })
        .collect();

    let ranked = form_rankings(
        &[player],
        &stats,
        &matches,
        &FormWindow::default(),
        &rules.scoring,
        5,
    );

    assert_eq!(ranked.len(), 1);
    // last three gameweeks: 10, 8, 6 conversion points
    assert_eq!(ranked[0].form.recent_points, vec![10.0, 8.0, 6.0]);
}

#[test]
fn test_squad_serializes_role_ids() {
    let (pool, projections) = championship_pool();
    let rules = Rules::default();
    let squad = auto_select(&pool, &projections, &rules.squad);

    let value = serde_json::to_value(&squad).unwrap();
    assert_eq!(value["players"].as_array().unwrap().len(), 15);
    assert_eq!(
        value["captain_id"].as_str(),
        squad.captain_id.as_ref().map(|id| id.as_str())
    );
}
