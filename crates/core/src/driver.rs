use serde::{Deserialize, Serialize};

/// Driver standing entry as returned by the Pitwall API (no rank field)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RawDriver {
    pub driver_uuid: String,
    pub first_name: String,
    pub last_name: String,
    pub driver_country_code: String,
    #[serde(default)]
    pub driver_image: Option<String>,
    pub team_uuid: String,
    pub season_team_name: String,
    pub season_points: f64,
}

/// One entrant's standing for one season, annotated with its competitive rank
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DriverRecord {
    pub driver_uuid: String,
    pub first_name: String,
    pub last_name: String,
    pub driver_country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_image: Option<String>,
    pub team_uuid: String,
    pub season_team_name: String,
    pub season_points: f64,
    /// 1-based position derived from descending points, stable on ties
    pub rank: u32,
}

impl DriverRecord {
    /// Display name used by the composite name sort column
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Complete standings output for a season
#[derive(Debug, Serialize, Clone)]
pub struct StandingsOutput {
    pub season: u32,
    pub drivers: Vec<DriverRecord>,
    pub team_options: Vec<String>,
    pub nationality_options: Vec<String>,
}

/// Annotate raw driver entries with their competitive rank
///
/// Ranks are assigned `1..=N` by descending `season_points`, stable with
/// respect to arrival order on ties. The returned records stay in arrival
/// order: ranking is an annotation pass, not a reordering.
pub fn rank(raw: Vec<RawDriver>) -> Vec<DriverRecord> {
    let mut by_points: Vec<usize> = (0..raw.len()).collect();
    by_points.sort_by(|&a, &b| raw[b].season_points.total_cmp(&raw[a].season_points));

    let mut ranks = vec![0u32; raw.len()];
    for (position, &index) in by_points.iter().enumerate() {
        ranks[index] = (position + 1) as u32;
    }

    raw.into_iter()
        .zip(ranks)
        .map(|(driver, rank)| DriverRecord {
            driver_uuid: driver.driver_uuid,
            first_name: driver.first_name,
            last_name: driver.last_name,
            driver_country_code: driver.driver_country_code,
            driver_image: driver.driver_image,
            team_uuid: driver.team_uuid,
            season_team_name: driver.season_team_name,
            season_points: driver.season_points,
            rank,
        })
        .collect()
}

/// Distinct, non-empty values of a field across the full dataset
///
/// Order is first-occurrence order in the dataset, so option lists are
/// deterministic and stable for the UI. Always computed over the complete
/// season, never the filtered view.
pub fn unique_values<F>(records: &[DriverRecord], field: F) -> Vec<String>
where
    F: Fn(&DriverRecord) -> &str,
{
    let mut values: Vec<String> = Vec::new();
    for record in records {
        let value = field(record);
        if value.is_empty() {
            continue;
        }
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
    values
}
