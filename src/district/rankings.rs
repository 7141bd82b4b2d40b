use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, instrument};

use crate::district::event_points::calculate_event_points;
use crate::district::values::PointValues;
use crate::model::{
    DistrictRankingTeamTotal, DistrictRankings, Event, EventDistrictPoints,
    Team, TeamAtEventDistrictPoints, TeamKey,
};

/// Regular events that count toward a team's season total.
const COUNTED_EVENTS: usize = 2;

const BACK_TO_BACK_YEAR: u16 = 2022;

fn count_event(
    total: &mut DistrictRankingTeamTotal,
    event: &Event,
    points: &TeamAtEventDistrictPoints,
) {
    total.event_points.push((event.key.clone(), *points));
    total.point_total += points.total();

    let tiebreakers = &mut total.tiebreakers;
    tiebreakers.total_playoff_points += points.elim_points;
    tiebreakers.best_playoff_points = tiebreakers.best_playoff_points.max(points.elim_points);
    tiebreakers.total_alliance_points += points.alliance_points;
    tiebreakers.best_alliance_points = tiebreakers.best_alliance_points.max(points.alliance_points);
    tiebreakers.total_qual_points += points.qual_points;
}

/// Bonus for young teams. The pandemic seasons widened the rookie cohorts.
pub(crate) fn rookie_bonus(values: &PointValues, year: u16, rookie_year: Option<u16>) -> u32 {
    let Some(rookie_year) = rookie_year else {
        return 0;
    };
    let full = values.rookie_bonus;
    let half = values.second_year_bonus;
    match (year, rookie_year) {
        (2022, 2021 | 2022) => full,
        (2022, 2020) => half,
        (2023, 2023) => full,
        (2023, 2021 | 2022) => half,
        (2022 | 2023, _) => 0,
        (year, rookie_year) if rookie_year == year => full,
        (year, rookie_year) if year.checked_sub(1) == Some(rookie_year) => half,
        _ => 0,
    }
}

/// Two single-day events on consecutive days.
fn back_to_back(first: &Event, second: &Event) -> bool {
    first.is_single_day()
        && second.is_single_day()
        && second
            .start_date
            .signed_duration_since(first.start_date)
            .num_days()
            .abs()
            == 1
}

/// Season ranking from already computed per-event points.
///
/// Events are taken in the order given: a team's first two events count, and
/// district championships always count.
#[instrument(skip_all, fields(year = year, events = events.len(), teams = teams.len()))]
pub(crate) fn aggregate_rankings(
    values: &PointValues,
    events: &[(&Event, EventDistrictPoints)],
    teams: &[Team],
    year: u16,
) -> DistrictRankings {
    let mut attendance: BTreeMap<&TeamKey, Vec<&Event>> = BTreeMap::new();
    let mut totals: BTreeMap<TeamKey, DistrictRankingTeamTotal> = BTreeMap::new();

    for &(event, ref points) in events {
        for team in points.teams() {
            let attended = attendance.entry(team).or_default();
            attended.push(event);
            if attended.len() > COUNTED_EVENTS && !event.event_type.is_district_cmp() {
                continue;
            }

            let total = totals.entry(team.clone()).or_default();
            if let Some(team_points) = points.points.get(team) {
                count_event(total, event, team_points);
            }
            if let Some(tiebreakers) = points.tiebreakers.get(team) {
                total.qual_scores.merge(&tiebreakers.highest_qual_scores);
            }
        }
    }

    for team in teams {
        let bonus = rookie_bonus(values, year, team.rookie_year);
        if bonus > 0 {
            let total = totals.entry(team.key.clone()).or_default();
            total.rookie_bonus = bonus;
            total.point_total += bonus;
        }
    }

    if year == BACK_TO_BACK_YEAR {
        for (team, attended) in &attendance {
            if let [first, second, ..] = attended.as_slice() {
                if back_to_back(first, second) {
                    let total = totals.entry((*team).clone()).or_default();
                    total.other_bonus += values.back_to_back_bonus;
                    total.point_total += values.back_to_back_bonus;
                }
            }
        }
    }

    let roster: BTreeSet<&str> = teams.iter().map(|t| t.key.as_str()).collect();
    let mut ranked: Vec<(TeamKey, DistrictRankingTeamTotal)> = totals
        .into_iter()
        .filter(|(team, _)| roster.contains(team.as_str()))
        .collect();
    ranked.sort_by(|(_, a), (_, b)| {
        b.point_total
            .cmp(&a.point_total)
            .then_with(|| b.tiebreakers.cmp(&a.tiebreakers))
            .then_with(|| b.qual_scores.cmp(&a.qual_scores))
    });

    debug!(ranked = ranked.len(), "calculated district rankings");
    DistrictRankings::new(ranked)
}

pub(crate) fn calculate_rankings(
    values: &PointValues,
    events: &[Event],
    teams: &[Team],
    year: u16,
) -> DistrictRankings {
    let event_points: Vec<(&Event, EventDistrictPoints)> = events
        .iter()
        .map(|event| (event, calculate_event_points(values, event)))
        .collect();
    aggregate_rankings(values, &event_points, teams, year)
}
