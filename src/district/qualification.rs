use tracing::debug;

use crate::district::{ceil_points, values::PointValues};
use crate::error::{DistrictError, Result};
use crate::model::{AllianceColor, CompLevel, Event, EventDistrictPoints, Match};
use crate::stats::inv_erf;

fn played_quals(event: &Event) -> impl Iterator<Item = &Match> {
    event
        .matches
        .iter()
        .filter(|m| m.comp_level == CompLevel::Qm && m.has_been_played())
}

/// Fixed points per qualification win, smaller fixed points for a tie.
pub(crate) fn win_loss_tie_points(
    values: &PointValues,
    event: &Event,
    multiplier: u32,
    points: &mut EventDistrictPoints,
) {
    for m in played_quals(event) {
        match m.winning_alliance() {
            Some(color) => {
                for team in &m.alliance(color).teams {
                    points.team_mut(team).qual_points += values.match_win * multiplier;
                }
            }
            None => {
                for color in AllianceColor::BOTH {
                    for team in &m.alliance(color).teams {
                        points.team_mut(team).qual_points += values.match_tie * multiplier;
                    }
                }
            }
        }
    }
}

/// Points for finishing at `rank` (1-based) out of `team_count` teams.
///
/// Maps ranks onto a normal-like curve: first place gets
/// `qual_offset + qual_spread`, the middle of the field `qual_offset`.
pub(crate) fn rank_points(values: &PointValues, rank: usize, team_count: usize) -> u32 {
    if team_count == 0 || rank == 0 || rank > team_count {
        return 0;
    }
    let n = team_count as f64;
    let r = rank as f64;
    let alpha = values.qual_alpha;

    let x = (n - 2.0 * r + 2.0) / (alpha * n);
    let scale = values.qual_spread / inv_erf(1.0 / alpha);
    ceil_points(inv_erf(x) * scale + values.qual_offset)
}

/// Rank-based qualification points. Fails when the event published no rankings.
pub(crate) fn rank_based_points(
    values: &PointValues,
    event: &Event,
    multiplier: u32,
    points: &mut EventDistrictPoints,
) -> Result<()> {
    let rankings = event
        .rankings
        .as_ref()
        .filter(|r| !r.is_empty())
        .ok_or_else(|| DistrictError::MissingRankings {
            event_key: event.key.clone(),
        })?;

    let team_count = rankings.len();
    for (i, team) in rankings.iter().enumerate() {
        points.team_mut(team).qual_points += rank_points(values, i + 1, team_count) * multiplier;
    }
    debug!(event = %event.key, team_count, "assigned rank-based qualification points");
    Ok(())
}

/// Qualification wins and best alliance scores, for every year.
pub(crate) fn tiebreakers(event: &Event, points: &mut EventDistrictPoints) {
    for m in played_quals(event) {
        let winner = m.winning_alliance();
        for color in AllianceColor::BOTH {
            let alliance = m.alliance(color);
            let Some(score) = alliance.score else {
                continue;
            };
            for team in &alliance.teams {
                let tiebreaker = points.tiebreaker_mut(team);
                tiebreaker.highest_qual_scores.push(score);
                if winner == Some(color) {
                    tiebreaker.qual_wins += 1;
                }
            }
        }
    }
}
