pub use calculator::DistrictCalculator;
pub use district::values::{PlacementPoints, PointValues, YearTable};
pub use error::{DistrictError, Result};
pub use model::*;

mod calculator;
mod district;
pub mod error;
pub mod model;
pub mod stats;
#[cfg(test)]
mod test_util;

/// Points for one event using the published point values.
pub fn calculate_event_points(event: &Event) -> EventDistrictPoints {
    DistrictCalculator::new().calculate_event_points(event)
}

/// A season ranking using the published point values.
pub fn calculate_rankings(events: &[Event], teams: &[Team], year: u16) -> DistrictRankings {
    DistrictCalculator::new().calculate_rankings(events, teams, year)
}
