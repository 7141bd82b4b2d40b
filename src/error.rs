/// Data-quality problems found while computing district points.
///
/// None of these abort a calculation: the affected piece of one event is
/// logged and skipped, and the rest of the season is still computed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DistrictError {
    /// A rank-based season event has no published qualification rankings.
    #[error("event {event_key} has no qualification rankings")]
    MissingRankings { event_key: String },

    /// The event has no alliance selection data.
    #[error("event {event_key} has no alliance selections")]
    MissingAllianceSelections { event_key: String },

    /// An alliance selection entry cannot be scored.
    #[error("malformed alliance {alliance} at {event_key}: {reason}")]
    MalformedAllianceSelection {
        event_key: String,
        alliance: usize,
        reason: &'static str,
    },

    /// A playoff match's teams do not belong to any selected alliance.
    #[error("match {match_key} at {event_key} does not match any alliance")]
    UnknownAlliance {
        event_key: String,
        match_key: String,
    },
}

pub type Result<T> = std::result::Result<T, DistrictError>;
