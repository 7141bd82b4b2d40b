use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use super::TeamKey;

/// The stage of the competition a match belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CompLevel {
    Qm,
    Ef,
    Qf,
    Sf,
    F,
}

impl CompLevel {
    pub fn is_playoff(self) -> bool {
        self != CompLevel::Qm
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AllianceColor {
    Red,
    Blue,
}

impl AllianceColor {
    pub const BOTH: [AllianceColor; 2] = [AllianceColor::Red, AllianceColor::Blue];

    pub fn opponent(self) -> Self {
        match self {
            AllianceColor::Red => AllianceColor::Blue,
            AllianceColor::Blue => AllianceColor::Red,
        }
    }
}

/// One side of a match. `score` is absent until the match is played.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchAlliance {
    pub teams: Vec<TeamKey>,
    #[serde(default)]
    pub score: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchAlliances {
    pub red: MatchAlliance,
    pub blue: MatchAlliance,
}

/// A single match of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub comp_level: CompLevel,
    pub set_number: u32,
    pub match_number: u32,
    pub alliances: MatchAlliances,
}

impl Match {
    pub fn alliance(&self, color: AllianceColor) -> &MatchAlliance {
        match color {
            AllianceColor::Red => &self.alliances.red,
            AllianceColor::Blue => &self.alliances.blue,
        }
    }

    /// Every team in the match, red alliance first.
    pub fn teams(&self) -> impl Iterator<Item = &TeamKey> {
        self.alliances
            .red
            .teams
            .iter()
            .chain(self.alliances.blue.teams.iter())
    }

    pub fn has_been_played(&self) -> bool {
        self.alliances.red.score.is_some() && self.alliances.blue.score.is_some()
    }

    /// The alliance that won, or `None` for ties and unplayed matches.
    pub fn winning_alliance(&self) -> Option<AllianceColor> {
        let red = self.alliances.red.score?;
        let blue = self.alliances.blue.score?;
        match red.cmp(&blue) {
            std::cmp::Ordering::Greater => Some(AllianceColor::Red),
            std::cmp::Ordering::Less => Some(AllianceColor::Blue),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Short key such as `qm12`, `sf2m1` or `f1m3`, used in log output.
    pub fn short_key(&self) -> String {
        match self.comp_level {
            CompLevel::Qm => format!("qm{}", self.match_number),
            level => format!("{level}{}m{}", self.set_number, self.match_number),
        }
    }
}
