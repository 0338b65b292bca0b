//! Automatic squad selection.
//!
//! A deterministic three-phase heuristic:
//!
//! 1. **Greedy fill** - admit the best projected players that still fit the
//!    budget and country caps until the squad reaches the minimum size.
//! 2. **Swap improvement** - walk the squad from its weakest member upwards
//!    once, replacing each member with the best unselected player that scores
//!    strictly more and fits the budget that member would free.
//! 3. **Fill remainder** - top up with affordable players if the squad is
//!    still short.
//!
//! The result is a good squad, not a provably optimal one. Ties keep pool
//! order, so callers wanting reproducible output should pass a pool in a
//! stable order (e.g. sorted by id).

use log::{debug, info, warn};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use crate::models::{projected_points, Country, Player, PlayerId, Projections, Squad};
use crate::rules::SquadRules;


/// Select a squad maximizing projected points under `rules`.
///
/// Never fails: when the pool cannot support a full squad the returned squad
/// is simply short, which [`validate_squad`](crate::validation::validate_squad)
/// reports.
pub fn auto_select(pool: &[Player], projections: &Projections, rules: &SquadRules) -> Squad {
    let selection = select(pool, projections, rules);
    let mut squad = selection.into_squad();
    assign_roles(&mut squad, projections, None);
    squad
}

/// Like [`auto_select`], but picks the supersub from the caller's set of
/// players likely to start on the bench, falling back to the default choice
/// when no member is in the set.
pub fn auto_select_with_substitutes(
    pool: &[Player],
    projections: &Projections,
    likely_subs: &HashSet<PlayerId>,
    rules: &SquadRules,
) -> Squad {
    let selection = select(pool, projections, rules);
    let mut squad = selection.into_squad();
    assign_roles(&mut squad, projections, Some(likely_subs));
    squad
}

/// Working state for the optimizer, kept separate from [`Squad`] so the
/// country counts and total are maintained incrementally.
struct Selection<'a> {
    rules: &'a SquadRules,
    members: Vec<&'a Player>,
    selected: HashSet<&'a PlayerId>,
    country_counts: BTreeMap<Country, usize>,
    total_value: f64,
}

impl<'a> Selection<'a> {
    fn new(rules: &'a SquadRules) -> Self {
        Self {
            rules,
            members: Vec::new(),
            selected: HashSet::new(),
            country_counts: BTreeMap::new(),
            total_value: 0.0,
        }
    }

    fn len(&self) -> usize {
        self.members.len()
    }

    fn is_short(&self) -> bool {
        self.len() < self.rules.min_squad_size
    }

    fn contains(&self, id: &PlayerId) -> bool {
        self.selected.contains(id)
    }

    fn country_count(&self, country: Country) -> usize {
        self.country_counts.get(&country).copied().unwrap_or(0)
    }

    fn country_has_room(&self, country: Country) -> bool {
        self.country_count(country) < self.rules.max_per_country
    }

    fn can_admit(&self, player: &Player) -> bool {
        !self.contains(player.id())
            && self.total_value + player.star_value() <= self.rules.max_budget
            && self.country_has_room(player.country())
    }

    fn admit(&mut self, player: &'a Player) {
        self.members.push(player);
        self.selected.insert(player.id());
        *self.country_counts.entry(player.country()).or_insert(0) += 1;
        self.total_value += player.star_value();
    }

    fn release(&mut self, id: &PlayerId) -> Option<&'a Player> {
        let idx = self.members.iter().position(|p| p.id() == id)?;
        let player = self.members.remove(idx);
        self.selected.remove(player.id());
        if let Some(count) = self.country_counts.get_mut(&player.country()) {
            *count = count.saturating_sub(1);
        }
        self.total_value -= player.star_value();
        Some(player)
    }

    /// Greedily admit players from `ranked` until the minimum size is met.
    fn fill(&mut self, ranked: &[(&'a Player, f64)]) {
        for (player, _) in ranked {
            if !self.is_short() {
                break;
            }
            if self.can_admit(player) {
                self.admit(*player);
            }
        }
    }

    /// One pass of first-improvement swaps, weakest member first. Players
    /// swapped in are not revisited.
    fn improve(&mut self, ranked: &[(&'a Player, f64)], projections: &Projections) {
        let mut by_points: Vec<(&'a Player, f64)> = self
            .members
            .iter()
            .map(|p| (*p, projected_points(projections, p.id())))
            .collect();
        by_points.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

        for (current, current_points) in by_points {
            let freed_budget = self.rules.max_budget - self.total_value + current.star_value();

            let upgrade = ranked.iter().find(|(candidate, points)| {
                *points > current_points
                    && !self.contains(candidate.id())
                    && candidate.star_value() <= freed_budget
                    && (candidate.country() == current.country()
                        || self.country_has_room(candidate.country()))
            });

            if let Some((candidate, points)) = upgrade {
                debug!(
                    "swap {} ({:.1} pts) -> {} ({:.1} pts)",
                    current.id(),
                    current_points,
                    candidate.id(),
                    points
                );
                self.release(current.id());
                self.admit(*candidate);
            }
        }
    }

    fn into_squad(self) -> Squad {
        let mut squad = Squad::new();
        for player in self.members {
            if let Err(e) = squad.add_player(player.clone()) {
                warn!("skipping selected player: {}", e);
            }
        }
        squad
    }
}

fn select<'a>(
    pool: &'a [Player],
    projections: &Projections,
    rules: &'a SquadRules,
) -> Selection<'a> {
    let mut ranked: Vec<(&Player, f64)> = pool
        .iter()
        .map(|p| (p, projected_points(projections, p.id())))
        .filter(|(_, points)| *points > 0.0)
        .collect();
    // Stable sort: equal projections keep pool order
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut selection = Selection::new(rules);

    selection.fill(&ranked);
    debug!(
        "greedy fill: {} players, {:.1} stars",
        selection.len(),
        selection.total_value
    );

    selection.improve(&ranked, projections);
    debug!(
        "swap improvement: {} players, {:.1} stars",
        selection.len(),
        selection.total_value
    );

    if selection.is_short() {
        selection.fill(&ranked);
        debug!("fill remainder: {} players", selection.len());
    }

    if selection.is_short() {
        warn!(
            "pool supports only {} of {} required players",
            selection.len(),
            rules.min_squad_size
        );
    } else {
        info!(
            "selected {} players for {:.1} stars from a pool of {}",
            selection.len(),
            selection.total_value,
            pool.len()
        );
    }

    selection
}

/// Captain is the best projected member; supersub the best of the rest,
/// preferring likely substitutes when a set is given. Ties go to the member
/// listed first.
fn assign_roles(
    squad: &mut Squad,
    projections: &Projections,
    likely_subs: Option<&HashSet<PlayerId>>,
) {
    let best = |filter: &dyn Fn(&Player) -> bool| -> Option<PlayerId> {
        squad
            .players()
            .iter()
            .filter(|p| filter(*p))
            .map(|p| (p, projected_points(projections, p.id())))
            .reduce(|best, next| if next.1 > best.1 { next } else { best })
            .map(|(p, _)| p.id().clone())
    };

    let Some(captain) = best(&|_| true) else {
        return;
    };

    let supersub = likely_subs
        .and_then(|subs| best(&|p| p.id() != &captain && subs.contains(p.id())))
        .or_else(|| best(&|p| p.id() != &captain));

    squad.captain_id = Some(captain);
    squad.supersub_id = supersub;
}
