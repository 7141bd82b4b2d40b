use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::TeamKey;

/// How many qualification scores are kept for tiebreaking.
pub const TOP_SCORE_COUNT: usize = 3;

/// The highest qualification alliance scores a team was part of, descending.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopScores(Vec<i32>);

impl TopScores {
    pub fn push(&mut self, score: i32) {
        let pos = self.0.partition_point(|&s| s >= score);
        if pos < TOP_SCORE_COUNT {
            self.0.insert(pos, score);
            self.0.truncate(TOP_SCORE_COUNT);
        }
    }

    /// Keeps the largest scores of both collections.
    pub fn merge(&mut self, other: &TopScores) {
        self.0 = self
            .0
            .iter()
            .chain(other.0.iter())
            .copied()
            .k_largest(TOP_SCORE_COUNT)
            .collect();
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }
}

impl FromIterator<i32> for TopScores {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self(iter.into_iter().k_largest(TOP_SCORE_COUNT).collect())
    }
}

/// District points one team earned at one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAtEventDistrictPoints {
    pub qual_points: u32,
    pub elim_points: u32,
    pub alliance_points: u32,
    pub award_points: u32,
}

impl TeamAtEventDistrictPoints {
    pub fn total(&self) -> u32 {
        self.qual_points + self.elim_points + self.alliance_points + self.award_points
    }
}

/// Per-event statistics used to break ties that points alone cannot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAtEventDistrictPointTiebreakers {
    pub qual_wins: u32,
    pub highest_qual_scores: TopScores,
}

/// District points for every team that attended one event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDistrictPoints {
    pub points: BTreeMap<TeamKey, TeamAtEventDistrictPoints>,
    pub tiebreakers: BTreeMap<TeamKey, TeamAtEventDistrictPointTiebreakers>,
}

impl EventDistrictPoints {
    pub(crate) fn team_mut(&mut self, team: &str) -> &mut TeamAtEventDistrictPoints {
        self.points.entry(team.to_string()).or_default()
    }

    pub(crate) fn tiebreaker_mut(
        &mut self,
        team: &str,
    ) -> &mut TeamAtEventDistrictPointTiebreakers {
        self.tiebreakers.entry(team.to_string()).or_default()
    }

    /// Every team present in either map, in key order.
    pub fn teams(&self) -> impl Iterator<Item = &TeamKey> {
        self.points
            .keys()
            .merge(self.tiebreakers.keys())
            .dedup()
    }
}

/// Season tiebreakers, compared field by field with higher values ranking first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct DistrictTiebreakers {
    pub total_playoff_points: u32,
    pub best_playoff_points: u32,
    pub total_alliance_points: u32,
    pub best_alliance_points: u32,
    pub total_qual_points: u32,
}

/// A team's season standing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictRankingTeamTotal {
    pub event_points: Vec<(String, TeamAtEventDistrictPoints)>,
    pub point_total: u32,
    pub tiebreakers: DistrictTiebreakers,
    pub qual_scores: TopScores,
    pub rookie_bonus: u32,
    pub other_bonus: u32,
}

/// The ordered season ranking, best team first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistrictRankings(Vec<(TeamKey, DistrictRankingTeamTotal)>);

impl DistrictRankings {
    pub(crate) fn new(ranked: Vec<(TeamKey, DistrictRankingTeamTotal)>) -> Self {
        Self(ranked)
    }

    pub fn get(&self, team: &str) -> Option<&DistrictRankingTeamTotal> {
        self.0.iter().find(|(key, _)| key == team).map(|(_, t)| t)
    }

    /// Zero-based position of `team` in the ranking.
    pub fn position(&self, team: &str) -> Option<usize> {
        self.0.iter().position(|(key, _)| key == team)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TeamKey, &DistrictRankingTeamTotal)> {
        self.0.iter().map(|(k, t)| (k, t))
    }

    pub fn keys(&self) -> impl Iterator<Item = &TeamKey> {
        self.0.iter().map(|(k, _)| k)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for DistrictRankings {
    type Item = (TeamKey, DistrictRankingTeamTotal);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
