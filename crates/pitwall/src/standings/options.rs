use crate::prelude::{println, *};
use pitwall_core::StandingsView;
use serde::{Deserialize, Serialize};

/// Options for listing filter choices
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct OptionsOptions {
    /// Season to derive filter options from
    #[arg(short, long, env = "PITWALL_SEASON", default_value = "2024")]
    pub season: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle the options command
///
/// Option lists always come from the full season dataset, so this shows every
/// value `show --team`/`--nationality` will accept for the season.
pub async fn handler(options: OptionsOptions, global: crate::Global) -> Result<()> {
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

    if options.json {
        #[derive(Serialize)]
        struct FilterOptionsOutput<'a> {
            season: u32,
            teams: &'a [String],
            nationalities: &'a [String],
        }

        let output = FilterOptionsOutput {
            season: options.season,
            teams: view.team_options(),
            nationalities: view.nationality_options(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Filter options for season {}:\n", options.season);

    if view.team_options().is_empty() && view.nationality_options().is_empty() {
        println!("No drivers in this season.");
        return Ok(());
    }

    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row!["Dimension", "Value"]);
    for team in view.team_options() {
        table.add_row(prettytable::row!["team", team]);
    }
    for nationality in view.nationality_options() {
        table.add_row(prettytable::row!["nationality", nationality]);
    }
    table.printstd();

    Ok(())
}
