use serde::Serialize;

use crate::driver::DriverRecord;

/// Independent axis on which standings rows may be included or excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterDimension {
    Team,
    Nationality,
}

impl FilterDimension {
    /// The record field this dimension matches against
    pub fn field<'a>(&self, record: &'a DriverRecord) -> &'a str {
        match self {
            FilterDimension::Team => &record.season_team_name,
            FilterDimension::Nationality => &record.driver_country_code,
        }
    }
}

/// Selected values per filter dimension
///
/// An empty selection imposes no constraint on that dimension. Selections
/// keep insertion order so derived output stays deterministic. Membership
/// is exact string equality.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Filters {
    team: Vec<String>,
    nationality: Vec<String>,
}

impl Filters {
    /// Add `value` to the dimension's selection, or remove it if already present
    ///
    /// Unknown values simply never match any record, so adding them is harmless.
    pub fn toggle(&mut self, dimension: FilterDimension, value: &str) {
        let selection = self.selection_mut(dimension);
        match selection.iter().position(|v| v == value) {
            Some(index) => {
                selection.remove(index);
            }
            None => selection.push(value.to_string()),
        }
    }

    /// Current selection for a dimension
    pub fn selection(&self, dimension: FilterDimension) -> &[String] {
        match dimension {
            FilterDimension::Team => &self.team,
            FilterDimension::Nationality => &self.nationality,
        }
    }

    fn selection_mut(&mut self, dimension: FilterDimension) -> &mut Vec<String> {
        match dimension {
            FilterDimension::Team => &mut self.team,
            FilterDimension::Nationality => &mut self.nationality,
        }
    }

    /// Whether a record passes every active dimension (logical AND)
    pub fn matches(&self, record: &DriverRecord) -> bool {
        [FilterDimension::Team, FilterDimension::Nationality]
            .iter()
            .all(|&dimension| {
                let selection = self.selection(dimension);
                selection.is_empty()
                    || selection.iter().any(|v| v == dimension.field(record))
            })
    }
}

/// Retain the records matching every active filter dimension
///
/// Returns a new vector in input order. Ranks are untouched: rank reflects
/// full-season standing and is unaffected by filtering.
pub fn apply_filters(records: &[DriverRecord], filters: &Filters) -> Vec<DriverRecord> {
    records
        .iter()
        .filter(|record| filters.matches(record))
        .cloned()
        .collect()
}
