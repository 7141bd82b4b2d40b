use crate::district::values::PointValues;
use crate::model::{AwardType, Event, EventDistrictPoints};

/// The award taxonomy in its current form dates from 2014.
const MODERN_AWARDS_SINCE: u16 = 2014;

const LEGACY_TIER_ONE: &[AwardType] = &[
    AwardType::Chairmans,
    AwardType::EngineeringInspiration,
    AwardType::RookieAllStar,
    AwardType::IndustrialDesign,
    AwardType::Quality,
    AwardType::Creativity,
    AwardType::EngineeringExcellence,
    AwardType::InnovationInControl,
];

const LEGACY_TIER_TWO: &[AwardType] = &[
    AwardType::GraciousProfessionalism,
    AwardType::Coopertition,
    AwardType::JudgesAward,
    AwardType::Safety,
    AwardType::IndustrialSafety,
    AwardType::RookieInspiration,
    AwardType::Spirit,
    AwardType::TeamSpirit,
    AwardType::Entrepreneurship,
    AwardType::Imagery,
];

/// Points one recipient earns for an award, before the multiplier.
pub(crate) fn award_value(values: &PointValues, year: u16, award_type: AwardType) -> u32 {
    if award_type.is_non_judged_non_team() {
        return 0;
    }
    if year >= MODERN_AWARDS_SINCE {
        return match award_type {
            AwardType::Chairmans => values.chairmans.get(year),
            AwardType::EngineeringInspiration | AwardType::RookieAllStar => values.ei_and_ras,
            _ => values.other_award,
        };
    }
    if LEGACY_TIER_ONE.contains(&award_type) {
        values.legacy_tier_one
    } else if LEGACY_TIER_TWO.contains(&award_type) {
        values.legacy_tier_two
    } else {
        0
    }
}

pub(crate) fn award_points(
    values: &PointValues,
    event: &Event,
    multiplier: u32,
    points: &mut EventDistrictPoints,
) {
    for award in &event.awards {
        let value = award_value(values, event.year, award.award_type) * multiplier;
        for team in &award.team_list {
            points.team_mut(team).award_points += value;
        }
    }
}
