//! Fixture builders shared by the unit tests.

use chrono::NaiveDate;

use crate::model::{
    Award, AwardType, CompLevel, Event, EventType, Match, MatchAlliance, MatchAlliances,
    PlayoffType, TeamKey,
};

pub(crate) fn date(year: u16, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year as i32, month, day).unwrap()
}

pub(crate) fn keys(teams: &[&str]) -> Vec<TeamKey> {
    teams.iter().map(|t| t.to_string()).collect()
}

pub(crate) fn event(
    key: &str,
    year: u16,
    event_type: EventType,
    playoff_type: PlayoffType,
) -> Event {
    Event {
        key: key.to_string(),
        year,
        event_type,
        playoff_type,
        start_date: date(year, 3, 1),
        end_date: date(year, 3, 3),
        matches: vec![],
        awards: vec![],
        alliance_selections: None,
        rankings: None,
        divisions: vec![],
    }
}

pub(crate) fn played(
    comp_level: CompLevel,
    set_number: u32,
    match_number: u32,
    red: (&[&str], i32),
    blue: (&[&str], i32),
) -> Match {
    Match {
        comp_level,
        set_number,
        match_number,
        alliances: MatchAlliances {
            red: MatchAlliance {
                teams: keys(red.0),
                score: Some(red.1),
            },
            blue: MatchAlliance {
                teams: keys(blue.0),
                score: Some(blue.1),
            },
        },
    }
}

pub(crate) fn unplayed(
    comp_level: CompLevel,
    set_number: u32,
    match_number: u32,
    red: &[&str],
    blue: &[&str],
) -> Match {
    Match {
        comp_level,
        set_number,
        match_number,
        alliances: MatchAlliances {
            red: MatchAlliance {
                teams: keys(red),
                score: None,
            },
            blue: MatchAlliance {
                teams: keys(blue),
                score: None,
            },
        },
    }
}

pub(crate) fn award(award_type: AwardType, teams: &[&str]) -> Award {
    Award {
        award_type,
        team_list: keys(teams),
    }
}
