use crate::district::values::PointValues;
use crate::district::{event_points, rankings};
use crate::model::*;

/// The main entry point for computing district points.
///
/// `DistrictCalculator` wraps a [`PointValues`] table and exposes the
/// per-event and per-season calculations. It holds no other state, so one
/// calculator can be shared freely between threads.
///
/// # Examples
///
/// ```
/// use district_points::{DistrictCalculator, Team};
///
/// let calculator = DistrictCalculator::new();
/// let rankings = calculator.calculate_rankings(&[], &[Team::new("frc254", Some(2019))], 2019);
/// assert_eq!(rankings.get("frc254").unwrap().rookie_bonus, 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DistrictCalculator {
    values: PointValues,
}

impl DistrictCalculator {
    /// Create a calculator using the published point values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator using custom point values.
    ///
    /// Use this to model rule changes or to load values from a config file.
    pub fn with_values(values: PointValues) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &PointValues {
        &self.values
    }

    /// Points and tiebreakers for every team at one event.
    pub fn calculate_event_points(&self, event: &Event) -> EventDistrictPoints {
        event_points::calculate_event_points(&self.values, event)
    }

    /// The season ranking for `teams`, computing each event's points first.
    ///
    /// Events should be given in the order they were played.
    pub fn calculate_rankings(
        &self,
        events: &[Event],
        teams: &[Team],
        year: u16,
    ) -> DistrictRankings {
        rankings::calculate_rankings(&self.values, events, teams, year)
    }

    /// The season ranking from per-event points computed earlier, for
    /// callers that cache or parallelize [`Self::calculate_event_points`].
    pub fn rank_event_points(
        &self,
        events: &[(&Event, EventDistrictPoints)],
        teams: &[Team],
        year: u16,
    ) -> DistrictRankings {
        rankings::aggregate_rankings(&self.values, events, teams, year)
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Metadata, Subscriber};

    use super::*;
    use crate::test_util;

    type RecordedSpan = (&'static str, Vec<(String, String)>);

    /// Keeps the name and fields of every span opened while it is the default.
    #[derive(Clone, Default)]
    struct SpanRecorder {
        spans: Arc<Mutex<Vec<RecordedSpan>>>,
        next_id: Arc<AtomicU64>,
    }

    struct Fields(Vec<(String, String)>);

    impl Visit for Fields {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.push((field.name().to_string(), format!("{value:?}")));
        }
    }

    impl Subscriber for SpanRecorder {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, span: &Attributes<'_>) -> Id {
            let mut fields = Fields(vec![]);
            span.record(&mut fields);
            self.spans
                .lock()
                .unwrap()
                .push((span.metadata().name(), fields.0));
            Id::from_u64(self.next_id.fetch_add(1, Ordering::Relaxed) + 1)
        }

        fn record(&self, _: &Id, _: &Record<'_>) {}
        fn record_follows_from(&self, _: &Id, _: &Id) {}
        fn event(&self, _: &tracing::Event<'_>) {}
        fn enter(&self, _: &Id) {}
        fn exit(&self, _: &Id) {}
    }

    fn recorded_spans(f: impl FnOnce()) -> Vec<RecordedSpan> {
        let recorder = SpanRecorder::default();
        tracing::subscriber::with_default(recorder.clone(), f);
        let spans = recorder.spans.lock().unwrap().clone();
        spans
    }

    fn season() -> Vec<Event> {
        let mut event = test_util::event(
            "2019mitest",
            2019,
            EventType::District,
            PlayoffType::Bracket8Team,
        );
        event.rankings = Some(test_util::keys(&["frc1", "frc2"]));
        vec![event]
    }

    #[test]
    fn season_span_records_the_year() {
        let calculator = DistrictCalculator::new();
        let events = season();
        let spans = recorded_spans(|| {
            calculator.calculate_rankings(&events, &[Team::new("frc1", None)], 2019);
        });

        let season_spans: Vec<_> = spans
            .iter()
            .filter(|(name, _)| *name == "aggregate_rankings")
            .collect();
        assert_eq!(season_spans.len(), 1);
        assert!(season_spans[0]
            .1
            .contains(&("year".to_string(), "2019".to_string())));
    }

    #[test]
    fn event_points_open_a_single_span() {
        let calculator = DistrictCalculator::new();
        let events = season();
        let spans = recorded_spans(|| {
            calculator.calculate_event_points(&events[0]);
        });

        let event_spans: Vec<_> = spans
            .iter()
            .filter(|(name, _)| *name == "calculate_event_points")
            .collect();
        assert_eq!(event_spans.len(), 1);
        assert!(event_spans[0]
            .1
            .contains(&("event".to_string(), "2019mitest".to_string())));
    }
}
