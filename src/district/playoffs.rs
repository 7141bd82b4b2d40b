use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;
use tracing::debug;

use crate::district::rules::ElimRule;
use crate::district::{ceil_points, values::PointValues};
use crate::error::{DistrictError, Result};
use crate::model::{
    AllianceColor, AllianceSelection, CompLevel, Event, EventDistrictPoints, Match, PlayoffType,
    TeamKey,
};

/// Series clinch at this many wins.
const SERIES_WINS: u32 = 2;

/// Playoff matches in play order.
fn playoff_matches(event: &Event) -> Vec<&Match> {
    event
        .matches
        .iter()
        .filter(|m| m.comp_level.is_playoff())
        .sorted_by_key(|m| (m.comp_level, m.set_number, m.match_number))
        .collect()
}

fn level_value(values: &PointValues, level: CompLevel, year: u16) -> f64 {
    match level {
        CompLevel::Qm => 0.0,
        CompLevel::Ef | CompLevel::Qf => values.qf_win.get(year),
        CompLevel::Sf => values.sf_win.get(year),
        CompLevel::F => values.f_win.get(year),
    }
}

/// Win bookkeeping for one best-of-3 series.
#[derive(Debug, Default)]
struct Series {
    wins: BTreeMap<AllianceColor, u32>,
    appearances: BTreeMap<AllianceColor, Vec<TeamKey>>,
}

impl Series {
    /// Records a win and returns the teams that earn points for it.
    ///
    /// Nothing is earned until the colour clinches; at the clinch every
    /// recorded winning appearance earns, afterwards only the match's teams.
    fn record_win(&mut self, color: AllianceColor, teams: &[TeamKey]) -> Vec<TeamKey> {
        let wins = self.wins.entry(color).or_insert(0);
        *wins += 1;
        let appearances = self.appearances.entry(color).or_default();
        appearances.extend(teams.iter().cloned());

        match (*wins).cmp(&SERIES_WINS) {
            std::cmp::Ordering::Less => vec![],
            std::cmp::Ordering::Equal => appearances.clone(),
            std::cmp::Ordering::Greater => teams.to_vec(),
        }
    }
}

/// Best-of-3 series points for every match at the given levels.
fn series_points<'a>(
    values: &PointValues,
    year: u16,
    matches: impl IntoIterator<Item = &'a Match>,
    multiplier: u32,
    points: &mut EventDistrictPoints,
) {
    let mut series: BTreeMap<(CompLevel, u32), Series> = BTreeMap::new();
    for m in matches {
        let Some(color) = m.winning_alliance() else {
            continue;
        };
        let earned = series
            .entry((m.comp_level, m.set_number))
            .or_default()
            .record_win(color, &m.alliance(color).teams);
        let value = ceil_points(level_value(values, m.comp_level, year)) * multiplier;
        for team in earned {
            points.team_mut(&team).elim_points += value;
        }
    }
}

/// Average-score brackets: advancing from a level earns the per-match value
/// for each match the team played at that level.
fn advancement_points(
    values: &PointValues,
    event: &Event,
    matches: &[&Match],
    multiplier: u32,
    points: &mut EventDistrictPoints,
) {
    let mut played: BTreeMap<CompLevel, BTreeMap<&TeamKey, u32>> = BTreeMap::new();
    for m in matches.iter().copied().filter(|m| m.has_been_played()) {
        let counts = played.entry(m.comp_level).or_default();
        for team in m.teams() {
            *counts.entry(team).or_insert(0) += 1;
        }
    }

    for (from, to) in [(CompLevel::Qf, CompLevel::Sf), (CompLevel::Sf, CompLevel::F)] {
        let advanced: BTreeSet<&TeamKey> = matches
            .iter()
            .copied()
            .filter(|m| m.comp_level == to)
            .flat_map(|m| m.teams())
            .collect();
        let Some(counts) = played.get(&from) else {
            continue;
        };
        let value = level_value(values, from, event.year);
        for team in advanced {
            if let Some(&count) = counts.get(team) {
                points.team_mut(team).elim_points += ceil_points(value * count as f64) * multiplier;
            }
        }
    }

    series_points(
        values,
        event.year,
        matches.iter().copied().filter(|m| m.comp_level == CompLevel::F),
        multiplier,
        points,
    );
}

/// Double-elimination brackets before 2023: every bracket win earns points,
/// finals are a best-of-3 series.
fn double_elim_win_points(
    values: &PointValues,
    event: &Event,
    matches: &[&Match],
    multiplier: u32,
    points: &mut EventDistrictPoints,
) {
    let value = ceil_points(values.double_elim_win) * multiplier;
    for m in matches.iter().copied().filter(|m| m.comp_level != CompLevel::F) {
        if let Some(color) = m.winning_alliance() {
            for team in &m.alliance(color).teams {
                points.team_mut(team).elim_points += value;
            }
        }
    }
    series_points(
        values,
        event.year,
        matches.iter().copied().filter(|m| m.comp_level == CompLevel::F),
        multiplier,
        points,
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Winner,
    Finalist,
    Third,
    Fourth,
}

/// Bracket sets whose loser is eliminated in fourth and third place.
fn elimination_sets(playoff_type: PlayoffType) -> (u32, u32) {
    match playoff_type {
        PlayoffType::DoubleElim4Team => (4, 5),
        _ => (12, 13),
    }
}

fn find_alliance(
    event: &Event,
    selections: &[AllianceSelection],
    m: &Match,
    color: AllianceColor,
) -> Result<usize> {
    m.alliance(color)
        .teams
        .iter()
        .find_map(|team| selections.iter().position(|a| a.contains(team)))
        .ok_or_else(|| DistrictError::UnknownAlliance {
            event_key: event.key.clone(),
            match_key: m.short_key(),
        })
}

/// Double-elimination placement points. Each team gets its alliance's
/// placement points scaled by the share of the alliance's matches it played.
fn double_elim_placement_points(
    values: &PointValues,
    event: &Event,
    matches: &[&Match],
    multiplier: u32,
    points: &mut EventDistrictPoints,
) -> Result<()> {
    let selections = event
        .alliance_selections
        .as_deref()
        .ok_or_else(|| DistrictError::MissingAllianceSelections {
            event_key: event.key.clone(),
        })?;
    let (fourth_set, third_set) = elimination_sets(event.playoff_type);

    let mut alliance_matches: BTreeMap<usize, u32> = BTreeMap::new();
    let mut team_matches: BTreeMap<usize, BTreeMap<&TeamKey, u32>> = BTreeMap::new();
    let mut finals_wins: BTreeMap<usize, u32> = BTreeMap::new();
    let mut placements: BTreeMap<usize, Placement> = BTreeMap::new();

    for m in matches.iter().copied() {
        let Some(winner) = m.winning_alliance() else {
            continue;
        };
        let winning = find_alliance(event, selections, m, winner)?;
        let losing = find_alliance(event, selections, m, winner.opponent())?;

        for (alliance, color) in [(winning, winner), (losing, winner.opponent())] {
            *alliance_matches.entry(alliance).or_insert(0) += 1;
            let counts = team_matches.entry(alliance).or_default();
            for team in &m.alliance(color).teams {
                *counts.entry(team).or_insert(0) += 1;
            }
        }

        if m.comp_level == CompLevel::F {
            let wins = finals_wins.entry(winning).or_insert(0);
            *wins += 1;
            if *wins == SERIES_WINS {
                placements.insert(winning, Placement::Winner);
                placements.insert(losing, Placement::Finalist);
            }
        } else if m.set_number == fourth_set {
            placements.insert(losing, Placement::Fourth);
        } else if m.set_number == third_set {
            placements.insert(losing, Placement::Third);
        }
    }

    let table = values.double_elim_placement;
    for (alliance, placement) in placements {
        let base = match placement {
            Placement::Winner => table.winner,
            Placement::Finalist => table.finalist,
            Placement::Third => table.third,
            Placement::Fourth => table.fourth,
        };
        let played = alliance_matches.get(&alliance).copied().unwrap_or(0);
        for (team, &count) in team_matches.get(&alliance).into_iter().flatten() {
            let share = if played == 0 {
                0.0
            } else {
                count as f64 / played as f64
            };
            points.team_mut(team).elim_points += ceil_points(base as f64 * share) * multiplier;
        }
    }
    Ok(())
}

/// Elimination points by the rule the event's year and format select.
pub(crate) fn elim_points(
    values: &PointValues,
    event: &Event,
    rule: ElimRule,
    multiplier: u32,
    points: &mut EventDistrictPoints,
) -> Result<()> {
    let matches = playoff_matches(event);
    debug!(event = %event.key, ?rule, matches = matches.len(), "computing elimination points");
    match rule {
        ElimRule::SeriesWins => {
            series_points(values, event.year, matches, multiplier, points);
            Ok(())
        }
        ElimRule::Advancement => {
            advancement_points(values, event, &matches, multiplier, points);
            Ok(())
        }
        ElimRule::DoubleElimWins => {
            double_elim_win_points(values, event, &matches, multiplier, points);
            Ok(())
        }
        ElimRule::DoubleElimPlacement => {
            double_elim_placement_points(values, event, &matches, multiplier, points)
        }
    }
}
