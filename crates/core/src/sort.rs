use std::cmp::Ordering;

use serde::Serialize;

use crate::driver::DriverRecord;

/// Column a standings table can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    Rank,
    Name,
    Nationality,
    Team,
    Points,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The single column currently controlling row order
///
/// The engine holds an `Option<ActiveSort>`, so "at most one active sort
/// column" is enforced by the type rather than by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveSort {
    pub column: SortColumn,
    pub direction: SortDirection,
}

/// Compute the next sort state when a column header is toggled
///
/// Toggling an already-ascending column flips it to descending; toggling any
/// other column (or starting from no sort) activates it ascending and drops
/// whatever was active before.
pub fn toggle(current: Option<ActiveSort>, column: SortColumn) -> ActiveSort {
    let direction = match current {
        Some(active) if active.column == column && active.direction == SortDirection::Ascending => {
            SortDirection::Descending
        }
        _ => SortDirection::Ascending,
    };
    ActiveSort { column, direction }
}

fn compare(a: &DriverRecord, b: &DriverRecord, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Rank => a.rank.cmp(&b.rank),
        SortColumn::Points => a.season_points.total_cmp(&b.season_points),
        SortColumn::Name => a
            .full_name()
            .to_lowercase()
            .cmp(&b.full_name().to_lowercase()),
        SortColumn::Nationality => a
            .driver_country_code
            .to_lowercase()
            .cmp(&b.driver_country_code.to_lowercase()),
        SortColumn::Team => a
            .season_team_name
            .to_lowercase()
            .cmp(&b.season_team_name.to_lowercase()),
    }
}

/// Produce a new ordering of the rows under the given sort
///
/// Numeric columns compare numerically, the name column compares
/// "first last" case-insensitively, other string columns compare
/// case-insensitively. Descending reverses the ascending ordering. The sort
/// is stable, so ties keep their relative input order.
pub fn sort_by_column(mut rows: Vec<DriverRecord>, sort: ActiveSort) -> Vec<DriverRecord> {
    rows.sort_by(|a, b| {
        let ordering = compare(a, b, sort.column);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{fixtures, rank};

    fn fixture() -> Vec<DriverRecord> {
        rank(fixtures::grid())
    }

    fn sorted(column: SortColumn, direction: SortDirection) -> Vec<DriverRecord> {
        sort_by_column(fixture(), ActiveSort { column, direction })
    }

    #[test]
    fn test_sort_points_ascending() {
        let rows = sorted(SortColumn::Points, SortDirection::Ascending);
        let points: Vec<f64> = rows.iter().map(|d| d.season_points).collect();
        assert_eq!(points, vec![100.0, 120.0, 150.0]);
    }

    #[test]
    fn test_sort_points_descending() {
        let rows = sorted(SortColumn::Points, SortDirection::Descending);
        let points: Vec<f64> = rows.iter().map(|d| d.season_points).collect();
        assert_eq!(points, vec![150.0, 120.0, 100.0]);
    }

    #[test]
    fn test_sort_by_rank_matches_points_descending() {
        let by_rank = sorted(SortColumn::Rank, SortDirection::Ascending);
        let by_points = sorted(SortColumn::Points, SortDirection::Descending);
        assert_eq!(by_rank, by_points);
    }

    #[test]
    fn test_sort_name_is_case_insensitive_on_full_name() {
        let mut raw_drivers = fixtures::grid();
        raw_drivers.push(fixtures::raw("carlos", "sainz", "ES", "Ferrari", 90.0));

        let rows = sort_by_column(
            rank(raw_drivers),
            ActiveSort {
                column: SortColumn::Name,
                direction: SortDirection::Ascending,
            },
        );
        let names: Vec<String> = rows.iter().map(|d| d.full_name()).collect();
        assert_eq!(
            names,
            vec![
                "carlos sainz",
                "Charles Leclerc",
                "Lewis Hamilton",
                "Max Verstappen"
            ]
        );
    }

    #[test]
    fn test_sort_team_descending() {
        let rows = sorted(SortColumn::Team, SortDirection::Descending);
        let teams: Vec<&str> = rows.iter().map(|d| d.season_team_name.as_str()).collect();
        assert_eq!(teams, vec!["Red Bull", "Mercedes", "Ferrari"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let raw_drivers = vec![
            fixtures::raw("Lewis", "Hamilton", "GB", "Mercedes", 100.0),
            fixtures::raw("George", "Russell", "GB", "Mercedes", 100.0),
            fixtures::raw("Max", "Verstappen", "NL", "Red Bull", 150.0),
        ];

        let rows = sort_by_column(
            rank(raw_drivers),
            ActiveSort {
                column: SortColumn::Points,
                direction: SortDirection::Descending,
            },
        );
        let names: Vec<&str> = rows.iter().map(|d| d.last_name.as_str()).collect();
        // The tied Mercedes pair keeps its arrival order in both directions.
        assert_eq!(names, vec!["Verstappen", "Hamilton", "Russell"]);
    }

    #[test]
    fn test_toggle_inactive_column_starts_ascending() {
        let next = toggle(None, SortColumn::Points);
        assert_eq!(
            next,
            ActiveSort {
                column: SortColumn::Points,
                direction: SortDirection::Ascending,
            }
        );
    }

    #[test]
    fn test_toggle_ascending_column_flips_to_descending() {
        let current = Some(toggle(None, SortColumn::Points));
        let next = toggle(current, SortColumn::Points);
        assert_eq!(next.direction, SortDirection::Descending);
    }

    #[test]
    fn test_toggle_descending_column_returns_to_ascending() {
        let mut current = toggle(None, SortColumn::Points);
        current = toggle(Some(current), SortColumn::Points);
        let next = toggle(Some(current), SortColumn::Points);
        assert_eq!(next.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_toggle_other_column_deactivates_previous_and_starts_ascending() {
        let mut current = toggle(None, SortColumn::Points);
        current = toggle(Some(current), SortColumn::Points);
        assert_eq!(current.direction, SortDirection::Descending);

        let next = toggle(Some(current), SortColumn::Name);
        assert_eq!(
            next,
            ActiveSort {
                column: SortColumn::Name,
                direction: SortDirection::Ascending,
            }
        );
    }
}
