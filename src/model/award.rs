use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use super::TeamKey;

/// The fixed award taxonomy.
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
pub enum AwardType {
    /// Chairman's Award, renamed the Impact Award in 2023.
    Chairmans,
    Winner,
    Finalist,
    WoodieFlowers,
    DeansList,
    Volunteer,
    Founders,
    BartKamen,
    MakeItLoud,
    Wildcard,
    HighestRookieSeed,
    EngineeringInspiration,
    RookieAllStar,
    GraciousProfessionalism,
    Coopertition,
    JudgesAward,
    Safety,
    RookieInspiration,
    Spirit,
    Entrepreneurship,
    Imagery,
    IndustrialDesign,
    Quality,
    Creativity,
    EngineeringExcellence,
    InnovationInControl,
    IndustrialSafety,
    Autonomous,
    TeamSpirit,
    Leadership,
    Sustainability,
}

impl AwardType {
    /// Awards that are not judged team awards and never earn district points.
    pub fn is_non_judged_non_team(self) -> bool {
        matches!(
            self,
            AwardType::Winner
                | AwardType::Finalist
                | AwardType::WoodieFlowers
                | AwardType::DeansList
                | AwardType::Volunteer
                | AwardType::Founders
                | AwardType::BartKamen
                | AwardType::MakeItLoud
                | AwardType::Wildcard
                | AwardType::HighestRookieSeed
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub award_type: AwardType,
    #[serde(default)]
    pub team_list: Vec<TeamKey>,
}
