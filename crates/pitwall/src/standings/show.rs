use crate::prelude::{println, *};
use colored::Colorize;
use pitwall_core::{FilterDimension, SortColumn, StandingsView};
use serde::{Deserialize, Serialize};

/// Options for showing driver standings
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
#[command(after_help = "EXAMPLES:
  # Show the 2024 driver standings:
  pitwall standings show

  # Show an earlier season:
  pitwall standings show --season 2021

  # Keep only Red Bull and Ferrari drivers:
  pitwall standings show --team \"Red Bull\" --team Ferrari

  # Combine filters: Dutch Red Bull drivers only:
  pitwall standings show --team \"Red Bull\" --nationality NL

  # Sort by name, then by points from the leader down:
  pitwall standings show --sort name
  pitwall standings show --sort points --desc

NOTES:
  - Filters use exact matching: team names as displayed, nationalities as
    ISO-style country codes (GB, NL, MC, ...)
  - Filter dimensions combine with logical AND; values within one dimension
    combine with OR
  - Rank always reflects the full-season standing, even when filters narrow
    the table
  - Without --sort, rows keep the order the API returned them in")]
pub struct ShowOptions {
    /// Season to display
    #[arg(short, long, env = "PITWALL_SEASON", default_value = "2024")]
    pub season: u32,

    /// Keep only these teams (repeatable, exact team name)
    #[arg(short, long)]
    pub team: Vec<String>,

    /// Keep only these nationalities (repeatable, country code)
    #[arg(short, long)]
    pub nationality: Vec<String>,

    /// Column to sort by
    #[arg(long, value_enum)]
    pub sort: Option<SortColumnArg>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// CLI name for a sortable standings column
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortColumnArg {
    Rank,
    Name,
    Nationality,
    Team,
    Points,
}

impl From<SortColumnArg> for SortColumn {
    fn from(arg: SortColumnArg) -> Self {
        match arg {
            SortColumnArg::Rank => SortColumn::Rank,
            SortColumnArg::Name => SortColumn::Name,
            SortColumnArg::Nationality => SortColumn::Nationality,
            SortColumnArg::Team => SortColumn::Team,
            SortColumnArg::Points => SortColumn::Points,
        }
    }
}

/// Handle the show command
pub async fn handler(options: ShowOptions, global: crate::Global) -> Result<()> {
    let config = super::PitwallConfig::from_env()?;
    let client = super::build_client(&config)?;

    if global.verbose {
        println!(
            "Fetching standings for season {} from {}",
            options.season, config.base_url
        );
    }

    let mut view = StandingsView::new();
    super::load_season(&mut view, &client, &config, options.season).await?;

    for team in &options.team {
        view.toggle_filter(FilterDimension::Team, team);
    }
    for nationality in &options.nationality {
        view.toggle_filter(FilterDimension::Nationality, nationality);
    }
    if let Some(arg) = options.sort {
        let column = SortColumn::from(arg);
        view.toggle_sort(column);
        if options.desc {
            // A second toggle on the same column flips ascending to descending.
            view.toggle_sort(column);
        }
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&view.to_output())?);
        return Ok(());
    }

    display_standings(&view, options.season);

    Ok(())
}

/// Display the current view as a formatted CLI table.
fn display_standings(view: &StandingsView, season: u32) {
    std::println!(
        "\n{} {}\n",
        "Driver Standings".bold().cyan(),
        season.to_string().bright_white()
    );

    if view.view_data().is_empty() {
        println!("No drivers match the current view.");
        return;
    }

    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row!["Pos", "Name", "Nationality", "Team", "Points"]);

    for driver in view.view_data() {
        table.add_row(prettytable::row![
            driver.rank,
            driver.full_name(),
            &driver.driver_country_code,
            &driver.season_team_name,
            driver.season_points
        ]);
    }

    table.printstd();
}
