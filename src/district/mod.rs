pub(crate) mod alliances;
pub(crate) mod awards;
pub(crate) mod event_points;
pub(crate) mod playoffs;
pub(crate) mod qualification;
pub(crate) mod rankings;
pub(crate) mod rules;
pub mod values;

use crate::model::Event;

use values::PointValues;

// Absorbs float noise such as 22.000000000000004 before rounding up.
const CEIL_EPSILON: f64 = 1e-9;

/// Rounds a fractional point value up to whole points, never below zero.
pub(crate) fn ceil_points(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    (value - CEIL_EPSILON).ceil().max(0.0) as u32
}

/// 3x at district championships in most years, 1x everywhere else.
pub(crate) fn multiplier(values: &PointValues, event: &Event) -> u32 {
    if event.event_type.is_district_cmp() {
        values.district_cmp_multiplier.get(event.year)
    } else {
        values.standard_multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventType, PlayoffType};
    use crate::test_util;

    #[test]
    fn ceil_points_rounds_up_and_clamps() {
        assert_eq!(ceil_points(9.9), 10);
        assert_eq!(ceil_points(22.000_000_000_000_004), 22);
        assert_eq!(ceil_points(12.0), 12);
        assert_eq!(ceil_points(-3.5), 0);
        assert_eq!(ceil_points(f64::NAN), 0);
    }

    #[test]
    fn championship_multiplier_depends_on_year() {
        let values = PointValues::default();
        let cmp = test_util::event(
            "2019micmp",
            2019,
            EventType::DistrictCmp,
            PlayoffType::Bracket8Team,
        );
        let division = test_util::event(
            "2019micmp1",
            2019,
            EventType::DistrictCmpDivision,
            PlayoffType::Bracket8Team,
        );
        let old_cmp = test_util::event(
            "2012micmp",
            2012,
            EventType::DistrictCmp,
            PlayoffType::Bracket8Team,
        );
        let district = test_util::event(
            "2019miliv",
            2019,
            EventType::District,
            PlayoffType::Bracket8Team,
        );

        assert_eq!(multiplier(&values, &cmp), 3);
        assert_eq!(multiplier(&values, &division), 3);
        assert_eq!(multiplier(&values, &old_cmp), 1);
        assert_eq!(multiplier(&values, &district), 1);
    }
}
