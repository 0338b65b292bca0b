//! Unit tests for the advisory rankings

use super::*;
use crate::models::{Country, PlayerId, Position};
use std::collections::HashMap;

fn player(id: &str, country: Country, cost: f64) -> Player {
    Player::new(id, format!("Player {id}"), country, Position::Back, cost).unwrap()
}

fn projections(entries: &[(&str, f64)]) -> Projections {
    entries
        .iter()
        .map(|(id, points)| (PlayerId::new(*id), *points))
        .collect()
}

/// Five players from five countries.
/// Points per star: a 3.0, b 3.0, c 4.0, d 2.0, e 2.0.
fn five_player_squad() -> (Squad, Projections) {
    let mut squad = Squad::new();
    squad.add_player(player("a", Country::England, 15.0)).unwrap();
    squad.add_player(player("b", Country::France, 12.0)).unwrap();
    squad.add_player(player("c", Country::Ireland, 8.0)).unwrap();
    squad.add_player(player("d", Country::Italy, 10.0)).unwrap();
    squad.add_player(player("e", Country::Scotland, 11.0)).unwrap();

    let projections = projections(&[
        ("a", 45.0),
        ("b", 36.0),
        ("c", 32.0),
        ("d", 20.0),
        ("e", 22.0),
    ]);
    (squad, projections)
}

fn ids(recommendations: &[Recommendation]) -> Vec<&str> {
    recommendations.iter().map(|r| r.player.id().as_str()).collect()
}

#[cfg(test)]
mod points_per_star_tests {
    use super::*;

    #[test]
    fn test_points_per_star() {
        assert_eq!(points_per_star(45.0, 15.0), 3.0);
        assert_eq!(points_per_star(0.0, 10.0), 0.0);
    }

    #[test]
    fn test_free_or_negative_cost_is_zero() {
        assert_eq!(points_per_star(30.0, 0.0), 0.0);
        assert_eq!(points_per_star(30.0, -5.0), 0.0);
    }
}

#[cfg(test)]
mod captain_tests {
    use super::*;

    #[test]
    fn test_top_captain_doubles_projection() {
        let (squad, projections) = five_player_squad();
        let rules = Rules::default();
        let picks = Advisor::new(&projections, &rules).captain_picks(&squad, 3);

        assert_eq!(ids(&picks), vec!["a", "b", "c"]);
        assert_eq!(picks[0].score, 90.0);
        assert!(picks[0].reason.contains("90.0"));
    }

    #[test]
    fn test_supersub_is_not_a_captain_candidate() {
        let (mut squad, projections) = five_player_squad();
        squad.set_supersub(&PlayerId::new("a")).unwrap();
        let rules = Rules::default();
        let picks = Advisor::new(&projections, &rules).captain_picks(&squad, 5);

        assert_eq!(picks.len(), 4);
        assert_eq!(picks[0].player.id().as_str(), "b");
    }

    #[test]
    fn test_empty_squad_gives_no_picks() {
        let projections = Projections::new();
        let rules = Rules::default();
        let picks = Advisor::new(&projections, &rules).captain_picks(&Squad::new(), 5);
        assert!(picks.is_empty());
    }

    #[test]
    fn test_uses_configured_multiplier() {
        let (squad, projections) = five_player_squad();
        let mut rules = Rules::default();
        rules.scoring.captain_multiplier = 3.0;
        let picks = Advisor::new(&projections, &rules).captain_picks(&squad, 1);
        assert_eq!(picks[0].score, 135.0);
    }
}

#[cfg(test)]
mod supersub_tests {
    use super::*;

    fn bench() -> (Squad, Projections) {
        let mut squad = Squad::new();
        squad.add_player(player("sure", Country::Wales, 10.0)).unwrap();
        squad.add_player(player("never", Country::Italy, 10.0)).unwrap();
        squad.add_player(player("maybe", Country::France, 10.0)).unwrap();
        let projections = projections(&[("sure", 10.0), ("never", 10.0), ("maybe", 10.0)]);
        (squad, projections)
    }

    #[test]
    fn test_expected_multiplier_weights_sub_probability() {
        let (squad, projections) = bench();
        let probs: SubProbabilities = HashMap::from([
            (PlayerId::new("sure"), 1.0),
            (PlayerId::new("never"), 0.0),
        ]);
        let rules = Rules::default();
        let picks = Advisor::new(&projections, &rules).supersub_picks(&squad, Some(&probs), 3);

        // "maybe" falls back to a 50% chance: 10 * (0.5 * 3.0 + 0.5 * 0.5)
        assert_eq!(ids(&picks), vec!["sure", "maybe", "never"]);
        assert_eq!(picks[0].score, 30.0);
        assert_eq!(picks[1].score, 17.5);
        assert_eq!(picks[2].score, 5.0);
    }

    #[test]
    fn test_without_probabilities_everyone_gets_default() {
        let (squad, projections) = bench();
        let rules = Rules::default();
        let picks = Advisor::new(&projections, &rules).supersub_picks(&squad, None, 3);
        assert!(picks.iter().all(|p| p.score == 17.5));
        assert_eq!(ids(&picks), vec!["sure", "never", "maybe"]);
    }

    #[test]
    fn test_captain_is_excluded() {
        let (mut squad, projections) = bench();
        squad.set_captain(&PlayerId::new("sure")).unwrap();
        let rules = Rules::default();
        let picks = Advisor::new(&projections, &rules).supersub_picks(&squad, None, 3);
        assert!(!ids(&picks).contains(&"sure"));
    }
}

#[cfg(test)]
mod value_tests {
    use super::*;

    #[test]
    fn test_ranks_by_points_per_star_and_drops_zero_value() {
        let pool = vec![
            player("cheap", Country::Wales, 5.0),
            player("pricey", Country::England, 20.0),
            player("idle", Country::Italy, 5.0),
        ];
        let projections = projections(&[("cheap", 25.0), ("pricey", 40.0)]);
        let rules = Rules::default();
        let picks = Advisor::new(&projections, &rules).value_picks(&pool, None, 10);

        assert_eq!(ids(&picks), vec!["cheap", "pricey"]);
        assert_eq!(picks[0].score, 5.0);
        assert_eq!(picks[1].score, 2.0);
    }

    #[test]
    fn test_with_squad_only_addable_players_are_listed() {
        let mut squad = Squad::new();
        for n in 0..4 {
            squad
                .add_player(player(&format!("eng{n}"), Country::England, 10.0))
                .unwrap();
        }
        let mut pool = squad.players().to_vec();
        pool.push(player("eng_extra", Country::England, 5.0));
        pool.push(player("wal", Country::Wales, 5.0));

        let projections = projections(&[
            ("eng0", 50.0),
            ("eng_extra", 50.0),
            ("wal", 10.0),
        ]);
        let rules = Rules::default();
        let picks = Advisor::new(&projections, &rules).value_picks(&pool, Some(&squad), 10);

        assert_eq!(ids(&picks), vec!["wal"]);
    }

    #[test]
    fn test_truncates_to_top_n() {
        let pool: Vec<Player> = (0..6)
            .map(|n| player(&format!("p{n}"), Country::Scotland, 10.0))
            .collect();
        let projections: Projections = (0..6)
            .map(|n| (PlayerId::new(format!("p{n}")), 10.0 + n as f64))
            .collect();
        let rules = Rules::default();
        let picks = Advisor::new(&projections, &rules).value_picks(&pool, None, 2);
        assert_eq!(ids(&picks), vec!["p5", "p4"]);
    }
}

#[cfg(test)]
mod transfer_tests {
    use super::*;

    #[test]
    fn test_transfer_out_orders_weakest_value_first() {
        let (squad, projections) = five_player_squad();
        let rules = Rules::default();
        let picks = Advisor::new(&projections, &rules).transfer_out_candidates(&squad, 5);

        assert_eq!(ids(&picks), vec!["d", "e", "a", "b", "c"]);
        let scores: Vec<f64> = picks.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![2.0, 2.0, 3.0, 3.0, 4.0]);
    }

    #[test]
    fn test_transfer_out_annotates_roles() {
        let (mut squad, projections) = five_player_squad();
        squad.set_captain(&PlayerId::new("d")).unwrap();
        squad.set_supersub(&PlayerId::new("e")).unwrap();
        let rules = Rules::default();
        let picks = Advisor::new(&projections, &rules).transfer_out_candidates(&squad, 2);

        assert!(picks[0].reason.ends_with("(current captain)"));
        assert!(picks[1].reason.ends_with("(current supersub)"));
    }

    #[test]
    fn test_suggestions_rank_by_value_gain() {
        let (squad, mut projections) = five_player_squad();
        projections.insert(PlayerId::new("f"), 40.0);
        let mut pool = squad.players().to_vec();
        pool.push(player("f", Country::Wales, 10.0));

        let rules = Rules::default();
        let suggestions = Advisor::new(&projections, &rules).transfer_suggestions(&squad, &pool, 3);

        let outs: Vec<&str> = suggestions
            .iter()
            .map(|s| s.player_out.id().as_str())
            .collect();
        assert_eq!(outs, vec!["d", "e", "a"]);
        assert!(suggestions.iter().all(|s| s.player_in.id().as_str() == "f"));
        assert_eq!(suggestions[0].value_gain, 2.0);
        assert_eq!(suggestions[2].value_gain, 1.0);
    }

    #[test]
    fn test_suggestions_only_improve_and_stay_legal() {
        let (squad, mut projections) = five_player_squad();
        let mut pool = squad.players().to_vec();
        let extras = [
            ("w1", Country::Wales, 9.0, 30.0),
            ("w2", Country::Wales, 30.0, 60.0),
            ("i1", Country::Italy, 6.0, 6.0),
            ("s1", Country::Scotland, 190.0, 900.0),
        ];
        for (id, country, cost, points) in extras {
            pool.push(player(id, country, cost));
            projections.insert(PlayerId::new(id), points);
        }

        let rules = Rules::default();
        let advisor = Advisor::new(&projections, &rules);
        let suggestions = advisor.transfer_suggestions(&squad, &pool, 50);

        assert!(!suggestions.is_empty());
        for s in &suggestions {
            let out_value = points_per_star(
                projected_points(&projections, s.player_out.id()),
                s.player_out.star_value(),
            );
            let in_value = points_per_star(
                projected_points(&projections, s.player_in.id()),
                s.player_in.star_value(),
            );
            assert!(s.value_gain > 0.0);
            assert!(in_value > out_value);
            assert!(!squad.contains(s.player_in.id()));
            assert!(
                can_transfer(&squad, s.player_out.id(), &s.player_in, &rules.squad).is_valid
            );
        }
        // s1 needs 190 stars but at most 144 + 15 can be freed
        assert!(suggestions.iter().all(|s| s.player_in.id().as_str() != "s1"));
        assert!(suggestions
            .windows(2)
            .all(|w| w[0].value_gain >= w[1].value_gain));
    }

    #[test]
    fn test_no_suggestions_without_gain() {
        let (squad, projections) = five_player_squad();
        let pool = squad.players().to_vec();
        let rules = Rules::default();
        let suggestions = Advisor::new(&projections, &rules).transfer_suggestions(&squad, &pool, 5);
        assert!(suggestions.is_empty());
    }
}

#[cfg(test)]
mod differential_tests {
    use super::*;

    fn owned(id: &str, country: Country, pct: f64) -> Player {
        player(id, country, 10.0).with_ownership(pct).unwrap()
    }

    #[test]
    fn test_scores_low_ownership_higher() {
        let pool = vec![
            owned("rare", Country::Wales, 5.0),
            owned("popular", Country::England, 12.0),
            player("unknown", Country::France, 10.0),
            owned("idle", Country::Italy, 0.0),
            owned("ghost", Country::Ireland, 0.0),
        ];
        let projections = projections(&[
            ("rare", 20.0),
            ("popular", 50.0),
            ("unknown", 50.0),
            ("ghost", 10.0),
        ]);
        let rules = Rules::default();
        let picks = Advisor::new(&projections, &rules).differential_picks(
            &pool,
            DEFAULT_DIFFERENTIAL_OWNERSHIP,
            None,
            10,
        );

        assert_eq!(ids(&picks), vec!["rare", "ghost"]);
        assert_eq!(picks[0].score, 30.0);
        assert_eq!(picks[1].score, 20.0);
        assert!(picks[0].reason.contains("5.0% owned"));
    }

    #[test]
    fn test_excludes_squad_members() {
        let mut squad = Squad::new();
        squad.add_player(owned("rare", Country::Wales, 5.0)).unwrap();
        let pool = vec![
            owned("rare", Country::Wales, 5.0),
            owned("other", Country::Italy, 1.0),
        ];
        let projections = projections(&[("rare", 20.0), ("other", 5.0)]);
        let rules = Rules::default();
        let picks =
            Advisor::new(&projections, &rules).differential_picks(&pool, 10.0, Some(&squad), 10);
        assert_eq!(ids(&picks), vec!["other"]);
    }

    #[test]
    fn test_non_positive_threshold_gives_nothing() {
        let pool = vec![owned("rare", Country::Wales, 0.0)];
        let projections = projections(&[("rare", 20.0)]);
        let rules = Rules::default();
        let picks = Advisor::new(&projections, &rules).differential_picks(&pool, 0.0, None, 10);
        assert!(picks.is_empty());
    }
}
