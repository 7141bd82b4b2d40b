use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A value with per-year overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearTable<T> {
    pub default: T,
    #[serde(default)]
    pub overrides: BTreeMap<u16, T>,
}

impl<T: Copy> YearTable<T> {
    pub fn new(default: T) -> Self {
        Self {
            default,
            overrides: BTreeMap::new(),
        }
    }

    pub fn with(mut self, year: u16, value: T) -> Self {
        self.overrides.insert(year, value);
        self
    }

    pub fn get(&self, year: u16) -> T {
        self.overrides.get(&year).copied().unwrap_or(self.default)
    }
}

/// Points for the final placement of a double-elimination alliance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementPoints {
    pub winner: u32,
    pub finalist: u32,
    pub third: u32,
    pub fourth: u32,
}

/// Every constant the district point rules use.
///
/// Defaults are the published values. Deserializing a partial document keeps
/// the defaults for anything it leaves out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointValues {
    pub standard_multiplier: u32,
    pub district_cmp_multiplier: YearTable<u32>,

    pub match_win: u32,
    pub match_tie: u32,

    pub qual_alpha: f64,
    pub qual_spread: f64,
    pub qual_offset: f64,

    pub qf_win: YearTable<f64>,
    pub sf_win: YearTable<f64>,
    pub f_win: YearTable<f64>,
    pub double_elim_win: f64,
    pub double_elim_placement: PlacementPoints,

    pub alliance_max: u32,

    pub chairmans: YearTable<u32>,
    pub ei_and_ras: u32,
    pub other_award: u32,
    pub legacy_tier_one: u32,
    pub legacy_tier_two: u32,

    pub rookie_bonus: u32,
    pub second_year_bonus: u32,
    pub back_to_back_bonus: u32,
}

impl Default for PointValues {
    fn default() -> Self {
        Self {
            standard_multiplier: 1,
            // 3x at district championships since 2014
            district_cmp_multiplier: (2009..=2013)
                .fold(YearTable::new(3), |table, year| table.with(year, 1)),

            match_win: 2,
            match_tie: 1,

            qual_alpha: 1.07,
            qual_spread: 10.0,
            qual_offset: 12.0,

            qf_win: YearTable::new(5.0).with(2015, 5.0),
            sf_win: YearTable::new(5.0).with(2015, 3.3),
            f_win: YearTable::new(5.0).with(2015, 5.0),
            double_elim_win: 5.0,
            double_elim_placement: PlacementPoints {
                winner: 30,
                finalist: 20,
                third: 13,
                fourth: 7,
            },

            alliance_max: 17,

            chairmans: YearTable::new(10),
            ei_and_ras: 8,
            other_award: 5,
            legacy_tier_one: 5,
            legacy_tier_two: 2,

            rookie_bonus: 10,
            second_year_bonus: 5,
            back_to_back_bonus: 2,
        }
    }
}
