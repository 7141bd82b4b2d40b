use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::district::values::PointValues;
use crate::error::{DistrictError, Result};
use crate::model::{AllianceSelection, Event, EventType, PlayoffType, TeamKey};

/// Which pick of an alliance a team was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pick {
    /// Captains and first picks.
    Early,
    /// The second pick.
    Late,
}

impl Pick {
    fn from_index(index: usize) -> Option<Self> {
        match index {
            0 | 1 => Some(Pick::Early),
            2 => Some(Pick::Late),
            _ => None,
        }
    }
}

/// A special-cased alliance point formula and the events it applies to.
struct AllianceRule {
    name: &'static str,
    applies: fn(&Event) -> bool,
    /// Points for alliance number `n` (1-based) before the multiplier.
    points: fn(&PointValues, u32, Pick) -> u32,
}

fn half_up(n: u32) -> u32 {
    n.div_ceil(2)
}

/// Checked in order; the first rule that applies is used.
const ALLIANCE_RULES: &[AllianceRule] = &[
    // 16 alliances, two per draft slot
    AllianceRule {
        name: "2015 Michigan championship",
        applies: |event| event.key == "2015micmp",
        points: |values, n, pick| match pick {
            Pick::Early => values.alliance_max.saturating_sub(half_up(n)),
            Pick::Late => half_up(n),
        },
    },
    // 4 alliances, each spanning two slots of the 8-alliance ladder
    AllianceRule {
        name: "2022 single-day district event",
        applies: |event| {
            event.year == 2022
                && event.event_type == EventType::District
                && event.is_single_day()
                && matches!(
                    event.playoff_type,
                    PlayoffType::Bracket4Team | PlayoffType::DoubleElim4Team
                )
        },
        points: |values, n, pick| match pick {
            Pick::Early => (values.alliance_max + 1).saturating_sub(2 * n),
            Pick::Late => 2 * n,
        },
    },
    AllianceRule {
        name: "default",
        applies: |_| true,
        points: |values, n, pick| match pick {
            Pick::Early => values.alliance_max.saturating_sub(n),
            Pick::Late => n,
        },
    },
];

fn validate(event: &Event, selections: &[AllianceSelection]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for (i, alliance) in selections.iter().enumerate() {
        let malformed = |reason| DistrictError::MalformedAllianceSelection {
            event_key: event.key.clone(),
            alliance: i + 1,
            reason,
        };
        if alliance.picks.is_empty() {
            return Err(malformed("alliance has no teams"));
        }
        if !alliance.picks.iter().all(|team| seen.insert(team)) {
            return Err(malformed("team picked more than once"));
        }
    }
    Ok(())
}

/// Alliance selection points by team, multiplier applied.
pub(crate) fn alliance_points(
    values: &PointValues,
    event: &Event,
    multiplier: u32,
) -> Result<BTreeMap<TeamKey, u32>> {
    let selections = event
        .alliance_selections
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| DistrictError::MissingAllianceSelections {
            event_key: event.key.clone(),
        })?;
    validate(event, selections)?;

    let rule = ALLIANCE_RULES
        .iter()
        .find(|rule| (rule.applies)(event))
        .unwrap_or(&ALLIANCE_RULES[ALLIANCE_RULES.len() - 1]);
    debug!(event = %event.key, rule = rule.name, "scoring alliance selections");

    let mut points = BTreeMap::new();
    for (n, alliance) in (1u32..).zip(selections) {
        for (index, team) in alliance.picks.iter().enumerate() {
            if let Some(pick) = Pick::from_index(index) {
                points.insert(team.clone(), (rule.points)(values, n, pick) * multiplier);
            }
        }
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util;

    fn selections(count: usize) -> Vec<AllianceSelection> {
        (0..count)
            .map(|a| {
                AllianceSelection::new((0..3).map(|p| format!("frc{}", a * 10 + p + 1)))
            })
            .collect()
    }

    fn event_with(key: &str, year: u16, playoff_type: PlayoffType, count: usize) -> Event {
        let mut event = test_util::event(key, year, EventType::District, playoff_type);
        event.alliance_selections = Some(selections(count));
        event
    }

    #[test]
    fn default_ladder() {
        let event = event_with("2019miliv", 2019, PlayoffType::Bracket8Team, 8);
        let points = alliance_points(&PointValues::default(), &event, 1).unwrap();

        assert_eq!(points["frc1"], 16);
        assert_eq!(points["frc2"], 16);
        assert_eq!(points["frc3"], 1);
        assert_eq!(points["frc71"], 9);
        assert_eq!(points["frc73"], 8);
    }

    #[test]
    fn multiplier_scales_ladder() {
        let event = event_with("2019micmp", 2019, PlayoffType::Bracket8Team, 8);
        let points = alliance_points(&PointValues::default(), &event, 3).unwrap();
        assert_eq!(points["frc1"], 48);
        assert_eq!(points["frc73"], 24);
    }

    #[test]
    fn picks_after_the_second_score_nothing() {
        let mut event = event_with("2015miliv", 2015, PlayoffType::AvgScore8Team, 1);
        event.alliance_selections = Some(vec![AllianceSelection::new([
            "frc1", "frc2", "frc3", "frc4",
        ])]);
        let points = alliance_points(&PointValues::default(), &event, 1).unwrap();
        assert!(!points.contains_key("frc4"));
    }

    #[test]
    fn michigan_2015_has_sixteen_alliances() {
        let event = event_with("2015micmp", 2015, PlayoffType::AvgScore8Team, 16);
        let points = alliance_points(&PointValues::default(), &event, 1).unwrap();

        assert_eq!(points["frc1"], 16);
        assert_eq!(points["frc11"], 16);
        assert_eq!(points["frc21"], 15);
        assert_eq!(points["frc151"], 9);
        assert_eq!(points["frc153"], 8);
        assert_eq!(points["frc3"], 1);
    }

    #[test]
    fn single_day_2022_ladder() {
        let mut event = event_with("2022ontest", 2022, PlayoffType::Bracket4Team, 4);
        event.end_date = event.start_date;
        let points = alliance_points(&PointValues::default(), &event, 1).unwrap();

        assert_eq!(points["frc1"], 16);
        assert_eq!(points["frc3"], 2);
        assert_eq!(points["frc31"], 10);
        assert_eq!(points["frc33"], 8);
    }

    #[test]
    fn multi_day_2022_uses_default() {
        let event = event_with("2022ontest", 2022, PlayoffType::Bracket4Team, 4);
        let points = alliance_points(&PointValues::default(), &event, 1).unwrap();
        assert_eq!(points["frc31"], 13);
    }

    #[test]
    fn missing_and_malformed_selections() {
        let mut event = event_with("2019miliv", 2019, PlayoffType::Bracket8Team, 8);
        event.alliance_selections = None;
        assert!(matches!(
            alliance_points(&PointValues::default(), &event, 1),
            Err(DistrictError::MissingAllianceSelections { .. })
        ));

        event.alliance_selections = Some(vec![
            AllianceSelection::new(["frc1", "frc2", "frc3"]),
            AllianceSelection::new(Vec::<String>::new()),
        ]);
        assert!(matches!(
            alliance_points(&PointValues::default(), &event, 1),
            Err(DistrictError::MalformedAllianceSelection { alliance: 2, .. })
        ));

        event.alliance_selections = Some(vec![
            AllianceSelection::new(["frc1", "frc2", "frc3"]),
            AllianceSelection::new(["frc4", "frc2", "frc6"]),
        ]);
        assert!(matches!(
            alliance_points(&PointValues::default(), &event, 1),
            Err(DistrictError::MalformedAllianceSelection { alliance: 2, .. })
        ));
    }
}
