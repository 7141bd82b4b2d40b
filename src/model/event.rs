use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use super::award::Award;
use super::r#match::Match;
use super::TeamKey;

/// Classification of an event within the season.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Regional,
    District,
    DistrictCmp,
    DistrictCmpDivision,
    CmpDivision,
    CmpFinals,
    Offseason,
    Preseason,
    Unlabeled,
}

impl EventType {
    /// District championships (whole or split into divisions).
    pub fn is_district_cmp(self) -> bool {
        matches!(self, EventType::DistrictCmp | EventType::DistrictCmpDivision)
    }

    /// Official season events, as opposed to offseason or unlabeled ones.
    pub fn is_season_event(self) -> bool {
        !matches!(
            self,
            EventType::Offseason | EventType::Preseason | EventType::Unlabeled
        )
    }
}

/// The playoff bracket format an event used.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PlayoffType {
    #[default]
    Bracket8Team,
    Bracket16Team,
    Bracket4Team,
    AvgScore8Team,
    DoubleElim8Team,
    DoubleElim4Team,
    RoundRobin6Team,
    Custom,
}

impl PlayoffType {
    pub fn is_double_elim(self) -> bool {
        matches!(self, PlayoffType::DoubleElim8Team | PlayoffType::DoubleElim4Team)
    }
}

/// One alliance formed during alliance selection, captain first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllianceSelection {
    pub picks: Vec<TeamKey>,
    #[serde(default)]
    pub backup: Option<TeamKey>,
}

impl AllianceSelection {
    pub fn new<I, S>(picks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TeamKey>,
    {
        Self {
            picks: picks.into_iter().map(Into::into).collect(),
            backup: None,
        }
    }

    /// Whether `team` played for this alliance, backup robots included.
    pub fn contains(&self, team: &str) -> bool {
        self.picks.iter().any(|t| t == team) || self.backup.as_deref() == Some(team)
    }
}

/// A single event with its results already resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub key: String,
    pub year: u16,
    pub event_type: EventType,
    #[serde(default)]
    pub playoff_type: PlayoffType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub alliance_selections: Option<Vec<AllianceSelection>>,
    /// Team keys in qualification ranking order, rank 1 first.
    #[serde(default)]
    pub rankings: Option<Vec<TeamKey>>,
    /// Keys of the division sub-events of a split championship.
    #[serde(default)]
    pub divisions: Vec<String>,
}

impl Event {
    pub fn has_divisions(&self) -> bool {
        !self.divisions.is_empty()
    }

    pub fn is_single_day(&self) -> bool {
        self.start_date == self.end_date
    }
}
