use crate::model::{Event, PlayoffType};

/// How qualification matches earn points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QualRule {
    /// Fixed points per qualification win or tie.
    WinLossTie,
    /// Points from the final qualification rank.
    RankBased,
}

/// How playoff matches earn points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElimRule {
    /// Best-of-3 series, points per winning appearance once a series is clinched.
    SeriesWins,
    /// Average-score brackets: points for advancing a level, series finals.
    Advancement,
    /// Points for every double-elimination bracket win, series finals.
    DoubleElimWins,
    /// Points from the alliance's final double-elimination placement.
    DoubleElimPlacement,
}

#[derive(Debug, Clone, Copy)]
struct YearRules {
    first_year: u16,
    qual: QualRule,
    bracket: ElimRule,
    double_elim: ElimRule,
}

/// Ordered by first year; the last entry not after the event's year applies.
const RULES_BY_YEAR: &[YearRules] = &[
    YearRules {
        first_year: 0,
        qual: QualRule::WinLossTie,
        bracket: ElimRule::SeriesWins,
        double_elim: ElimRule::SeriesWins,
    },
    YearRules {
        first_year: 2015,
        qual: QualRule::RankBased,
        bracket: ElimRule::Advancement,
        double_elim: ElimRule::SeriesWins,
    },
    YearRules {
        first_year: 2016,
        qual: QualRule::RankBased,
        bracket: ElimRule::SeriesWins,
        double_elim: ElimRule::DoubleElimWins,
    },
    YearRules {
        first_year: 2023,
        qual: QualRule::RankBased,
        bracket: ElimRule::SeriesWins,
        double_elim: ElimRule::DoubleElimPlacement,
    },
];

fn rules_for_year(year: u16) -> YearRules {
    RULES_BY_YEAR
        .iter()
        .rev()
        .find(|rules| rules.first_year <= year)
        .copied()
        .unwrap_or(RULES_BY_YEAR[0])
}

pub(crate) fn qual_rule(event: &Event) -> QualRule {
    rules_for_year(event.year).qual
}

pub(crate) fn elim_rule(event: &Event) -> ElimRule {
    let rules = rules_for_year(event.year);
    if event.playoff_type.is_double_elim() {
        return rules.double_elim;
    }
    match rules.bracket {
        ElimRule::Advancement if event.playoff_type != PlayoffType::AvgScore8Team => {
            ElimRule::SeriesWins
        }
        rule => rule,
    }
}
