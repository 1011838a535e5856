use crate::driver::{rank, unique_values, DriverRecord, RawDriver, StandingsOutput};
use crate::filter::{apply_filters, FilterDimension, Filters};
use crate::sort::{sort_by_column, toggle, ActiveSort, SortColumn};

/// Handle for one in-flight season load
///
/// Returned by [`StandingsView::begin_season_load`] and handed back on
/// completion so the engine can tell whether the response still belongs to
/// the newest request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken {
    season: u32,
    generation: u64,
}

impl LoadToken {
    /// The season this load was issued for
    pub fn season(&self) -> u32 {
        self.season
    }
}

/// What the engine did with a completed season load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response belonged to the newest request and was applied
    Applied,
    /// A newer request was issued in the meantime; the response was dropped
    Superseded,
}

/// The standings view engine
///
/// Owns the ranked season dataset (`original_data`) and keeps the derived
/// state consistent after every mutation: the filtered and sorted
/// `view_data` projection, and the filter option lists derived from the full
/// dataset.
///
/// The season fetch itself is the shell's job. The engine only sequences it:
/// `begin_season_load` hands out a token, and `complete_season_load` /
/// `fail_season_load` apply the outcome. Tokens from superseded requests are
/// ignored, so the latest request always wins no matter when responses land.
#[derive(Debug, Default, Clone)]
pub struct StandingsView {
    original_data: Vec<DriverRecord>,
    view_data: Vec<DriverRecord>,
    team_options: Vec<String>,
    nationality_options: Vec<String>,
    filters: Filters,
    sort: Option<ActiveSort>,
    season: Option<u32>,
    loading: bool,
    generation: u64,
}

impl StandingsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filtered, sorted, ranked rows for display
    pub fn view_data(&self) -> &[DriverRecord] {
        &self.view_data
    }

    /// Distinct team names of the current season, first-occurrence order
    pub fn team_options(&self) -> &[String] {
        &self.team_options
    }

    /// Distinct country codes of the current season, first-occurrence order
    pub fn nationality_options(&self) -> &[String] {
        &self.nationality_options
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// The most recently requested season
    pub fn season(&self) -> Option<u32> {
        self.season
    }

    pub fn sort(&self) -> Option<ActiveSort> {
        self.sort
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Start loading a season; the returned token must be handed back on
    /// completion
    ///
    /// Issuing a new load before a prior one completes supersedes it: the
    /// older token will be rejected when its response finally arrives.
    pub fn begin_season_load(&mut self, season: u32) -> LoadToken {
        self.generation += 1;
        self.season = Some(season);
        self.loading = true;
        LoadToken {
            season,
            generation: self.generation,
        }
    }

    /// Apply a successfully fetched season dataset
    ///
    /// Replaces `original_data` with the ranked records, re-derives both
    /// option lists from the full new dataset, recomputes the view, and
    /// clears the loading flag. Responses for superseded requests are
    /// dropped without touching any state; the newer request is still
    /// outstanding, so loading stays set.
    pub fn complete_season_load(&mut self, token: LoadToken, raw: Vec<RawDriver>) -> LoadOutcome {
        if token.generation != self.generation {
            return LoadOutcome::Superseded;
        }

        self.original_data = rank(raw);
        self.team_options = unique_values(&self.original_data, |d| &d.season_team_name);
        self.nationality_options = unique_values(&self.original_data, |d| &d.driver_country_code);
        self.recompute();
        self.loading = false;
        LoadOutcome::Applied
    }

    /// Acknowledge a failed season load
    ///
    /// The previous dataset, options, and view are left exactly as they were;
    /// only the loading flag is cleared so the caller never sticks in a
    /// loading state. Stale failures are dropped like stale successes.
    pub fn fail_season_load(&mut self, token: LoadToken) -> LoadOutcome {
        if token.generation != self.generation {
            return LoadOutcome::Superseded;
        }

        self.loading = false;
        LoadOutcome::Applied
    }

    /// Select or deselect a filter value, then recompute the view
    pub fn toggle_filter(&mut self, dimension: FilterDimension, value: &str) {
        self.filters.toggle(dimension, value);
        self.recompute();
    }

    /// Toggle a sort column, then recompute the view
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort = Some(toggle(self.sort, column));
        self.recompute();
    }

    /// Rebuild `view_data` from `original_data`: filter first, then sort
    ///
    /// Pure given the current dataset, filters, and sort state, so calling it
    /// again with unchanged inputs yields an identical view. With no active
    /// sort the filtered rows stay in arrival order.
    pub fn recompute(&mut self) {
        let filtered = apply_filters(&self.original_data, &self.filters);
        self.view_data = match self.sort {
            Some(active) => sort_by_column(filtered, active),
            None => filtered,
        };
    }

    /// Snapshot of the current view for serialization
    pub fn to_output(&self) -> StandingsOutput {
        StandingsOutput {
            season: self.season.unwrap_or_default(),
            drivers: self.view_data.clone(),
            team_options: self.team_options.clone(),
            nationality_options: self.nationality_options.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::fixtures;

    fn loaded_view() -> StandingsView {
        let mut view = StandingsView::new();
        let token = view.begin_season_load(2024);
        view.complete_season_load(token, fixtures::grid());
        view
    }

    #[test]
    fn test_load_ranks_and_derives_options() {
        let view = loaded_view();

        assert!(!view.loading());
        assert_eq!(view.season(), Some(2024));
        assert_eq!(view.view_data().len(), 3);
        assert_eq!(view.team_options(), ["Mercedes", "Red Bull", "Ferrari"]);
        assert_eq!(view.nationality_options(), ["GB", "NL", "MC"]);

        let verstappen = view
            .view_data()
            .iter()
            .find(|d| d.last_name == "Verstappen")
            .unwrap();
        assert_eq!(verstappen.rank, 1);
    }

    #[test]
    fn test_empty_dataset_is_a_valid_state() {
        let mut view = StandingsView::new();
        let token = view.begin_season_load(2024);
        let outcome = view.complete_season_load(token, Vec::new());

        assert_eq!(outcome, LoadOutcome::Applied);
        assert!(!view.loading());
        assert!(view.view_data().is_empty());
        assert!(view.team_options().is_empty());
        assert!(view.nationality_options().is_empty());
    }

    #[test]
    fn test_sort_toggle_cycle_on_points() {
        let mut view = loaded_view();

        view.toggle_sort(SortColumn::Points);
        let ascending: Vec<f64> = view.view_data().iter().map(|d| d.season_points).collect();
        assert_eq!(ascending, vec![100.0, 120.0, 150.0]);

        view.toggle_sort(SortColumn::Points);
        let descending: Vec<f64> = view.view_data().iter().map(|d| d.season_points).collect();
        assert_eq!(descending, vec![150.0, 120.0, 100.0]);
    }

    #[test]
    fn test_toggling_another_column_deactivates_the_first() {
        let mut view = loaded_view();

        view.toggle_sort(SortColumn::Points);
        view.toggle_sort(SortColumn::Name);

        let active = view.sort().unwrap();
        assert_eq!(active.column, SortColumn::Name);
        assert_eq!(active.direction, crate::sort::SortDirection::Ascending);

        let names: Vec<String> = view.view_data().iter().map(|d| d.full_name()).collect();
        assert_eq!(
            names,
            vec!["Charles Leclerc", "Lewis Hamilton", "Max Verstappen"]
        );
    }

    #[test]
    fn test_filters_narrow_the_view_and_combine() {
        let mut view = loaded_view();

        view.toggle_filter(FilterDimension::Team, "Red Bull");
        view.toggle_filter(FilterDimension::Nationality, "NL");
        assert_eq!(view.view_data().len(), 1);
        assert_eq!(view.view_data()[0].last_name, "Verstappen");

        view.toggle_filter(FilterDimension::Nationality, "GB");
        // NL and GB are selected but only Red Bull passes the team dimension.
        assert!(view.view_data().is_empty());
    }

    #[test]
    fn test_options_are_independent_of_filters() {
        let mut view = loaded_view();
        let teams_before = view.team_options().to_vec();
        let nationalities_before = view.nationality_options().to_vec();

        view.toggle_filter(FilterDimension::Team, "Red Bull");
        view.toggle_filter(FilterDimension::Nationality, "GB");

        assert_eq!(view.team_options(), teams_before.as_slice());
        assert_eq!(view.nationality_options(), nationalities_before.as_slice());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut view = loaded_view();
        view.toggle_filter(FilterDimension::Team, "Ferrari");
        view.toggle_sort(SortColumn::Name);

        let first = view.view_data().to_vec();
        view.recompute();
        assert_eq!(view.view_data(), first.as_slice());
    }

    #[test]
    fn test_stale_response_never_overwrites_newer_data() {
        let mut view = StandingsView::new();

        let token_2023 = view.begin_season_load(2023);
        let token_2024 = view.begin_season_load(2024);

        assert_eq!(
            view.complete_season_load(token_2024, fixtures::grid()),
            LoadOutcome::Applied
        );

        // The 2023 response arrives after 2024 already landed.
        let stale = vec![fixtures::raw("Sebastian", "Vettel", "DE", "Aston Martin", 37.0)];
        assert_eq!(
            view.complete_season_load(token_2023, stale),
            LoadOutcome::Superseded
        );

        assert_eq!(view.season(), Some(2024));
        assert_eq!(view.view_data().len(), 3);
        assert!(view
            .view_data()
            .iter()
            .all(|d| d.last_name != "Vettel"));
    }

    #[test]
    fn test_stale_completion_does_not_clear_loading() {
        let mut view = StandingsView::new();

        let token_2023 = view.begin_season_load(2023);
        let _token_2024 = view.begin_season_load(2024);

        view.complete_season_load(token_2023, fixtures::grid());
        // 2024 is still outstanding.
        assert!(view.loading());
    }

    #[test]
    fn test_failed_load_clears_loading_and_keeps_prior_data() {
        let mut view = loaded_view();

        let token = view.begin_season_load(2025);
        assert!(view.loading());

        assert_eq!(view.fail_season_load(token), LoadOutcome::Applied);
        assert!(!view.loading());
        assert_eq!(view.view_data().len(), 3);
        assert_eq!(view.team_options(), ["Mercedes", "Red Bull", "Ferrari"]);
    }

    #[test]
    fn test_filters_and_sort_persist_across_season_change() {
        let mut view = loaded_view();
        view.toggle_filter(FilterDimension::Team, "Red Bull");
        view.toggle_sort(SortColumn::Points);

        let token = view.begin_season_load(2023);
        view.complete_season_load(
            token,
            vec![
                fixtures::raw("Max", "Verstappen", "NL", "Red Bull", 575.0),
                fixtures::raw("Sergio", "Perez", "MX", "Red Bull", 285.0),
                fixtures::raw("Lewis", "Hamilton", "GB", "Mercedes", 234.0),
            ],
        );

        // The Red Bull selection and ascending points sort carry over.
        let names: Vec<&str> = view
            .view_data()
            .iter()
            .map(|d| d.last_name.as_str())
            .collect();
        assert_eq!(names, vec!["Perez", "Verstappen"]);
    }

    #[test]
    fn test_to_output_snapshots_the_view() {
        let mut view = loaded_view();
        view.toggle_filter(FilterDimension::Team, "Mercedes");

        let output = view.to_output();
        assert_eq!(output.season, 2024);
        assert_eq!(output.drivers.len(), 1);
        assert_eq!(output.team_options, ["Mercedes", "Red Bull", "Ferrari"]);
    }
}
