use tracing::{debug, info, instrument, warn};

use crate::district::rules::{self, QualRule};
use crate::district::values::PointValues;
use crate::district::{alliances, awards, multiplier, playoffs, qualification};
use crate::error::DistrictError;
use crate::model::{Event, EventDistrictPoints};

/// District points for every team at one event.
///
/// Data problems skip only the affected part of the calculation.
#[instrument(skip_all, fields(event = %event.key, year = event.year))]
pub(crate) fn calculate_event_points(values: &PointValues, event: &Event) -> EventDistrictPoints {
    let multiplier = multiplier(values, event);
    let mut points = EventDistrictPoints::default();

    match rules::qual_rule(event) {
        QualRule::WinLossTie => {
            qualification::win_loss_tie_points(values, event, multiplier, &mut points)
        }
        QualRule::RankBased => {
            if let Err(e) = qualification::rank_based_points(values, event, multiplier, &mut points)
            {
                warn!(error = %e, "skipping qualification points");
            }
        }
    }
    qualification::tiebreakers(event, &mut points);

    let elim_rule = rules::elim_rule(event);
    // Computed aside so a failure leaves no partial elimination points.
    let mut elim = EventDistrictPoints::default();
    match playoffs::elim_points(values, event, elim_rule, multiplier, &mut elim) {
        Ok(()) => {
            for (team, p) in elim.points {
                points.team_mut(&team).elim_points += p.elim_points;
            }
        }
        Err(e) => warn!(error = %e, "skipping elimination points"),
    }

    if event.event_type.is_district_cmp() && event.has_divisions() {
        debug!("alliance points were awarded at the divisions");
    } else {
        match alliances::alliance_points(values, event, multiplier) {
            Ok(selection_points) => {
                for (team, p) in selection_points {
                    points.team_mut(&team).alliance_points += p;
                }
            }
            Err(e @ DistrictError::MissingAllianceSelections { .. })
                if !event.event_type.is_season_event() =>
            {
                info!(error = %e, "skipping alliance points");
            }
            Err(e) => warn!(error = %e, "skipping alliance points"),
        }
    }

    awards::award_points(values, event, multiplier, &mut points);

    debug!(
        teams = points.points.len(),
        multiplier,
        ?elim_rule,
        "calculated event points"
    );
    points
}
