//! travel: command-line front end for travel-core
//!
//! Runs the same search pipeline as the browser widget: load the dataset,
//! normalize the keyword, recommend at most two destinations, and print each
//! with its current local time.
//!
//! Usage examples
//! --------------
//!
//! - Recommend beaches
//!   $ travel search beaches
//!
//! - Cities of a country
//!   $ travel search japan
//!
//! - Use another dataset file (or URL with the `remote` feature)
//!   $ travel --input ./travel_recommendation_api.json search temple
//!
//! - One country and its cities
//!   $ travel countries japan
//!
//! - Drive the search/reset controller line by line
//!   $ travel interactive
//!
//! Set `RUST_LOG=debug` to see keyword classification and load failures.
mod args;
mod interactive;
mod report;

use crate::args::{CliArgs, Commands};
use anyhow::bail;
use clap::Parser;
use travel_core::loader::{is_remote, FileSource};
use travel_core::prelude::*;

/// Where the dataset comes from, decided once from `--input`.
enum Input {
    File(FileSource),
    #[cfg(feature = "remote")]
    Http(travel_core::loader::HttpSource),
}

impl DatasetSource for Input {
    fn load(&self) -> travel_core::Result<Dataset> {
        match self {
            Input::File(f) => f.load(),
            #[cfg(feature = "remote")]
            Input::Http(h) => h.load(),
        }
    }
}

fn resolve_input(input: Option<String>) -> anyhow::Result<Input> {
    let Some(input) = input else {
        let source = FileSource::default();
        log::debug!("using bundled dataset at {}", source.path().display());
        return Ok(Input::File(source));
    };
    log::debug!("using dataset from {input}");
    if is_remote(&input) {
        #[cfg(feature = "remote")]
        return Ok(Input::Http(travel_core::loader::HttpSource { url: input }));
        #[cfg(not(feature = "remote"))]
        bail!("{input} is a URL; rebuild travel-cli with the `remote` feature to fetch it");
    }
    Ok(Input::File(FileSource::new(input)))
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let args = CliArgs::parse();
    let source = resolve_input(args.input)?;

    match args.command {
        Commands::Search { term } => {
            let term = term.trim();
            if term.is_empty() {
                bail!("Please enter a search term.");
            }
            let db = source.load()?;
            print!("{}", render(&db.recommend(term), &SystemClock));
        }

        Commands::Stats => {
            let stats = source.load()?.stats();
            println!("Dataset statistics:");
            println!("  Beaches: {}", stats.beaches);
            println!("  Temples: {}", stats.temples);
            println!("  Countries: {}", stats.countries);
            println!("  Cities: {}", stats.cities);
        }

        Commands::Countries { name } => {
            let db = source.load()?;
            report::write_countries(&db, name.as_deref(), std::io::stdout().lock())?;
        }

        Commands::Cities { query } => {
            let db = source.load()?;
            let matches = db.find_cities_by_substring(&query);
            if matches.is_empty() {
                println!("No cities found matching: {query}");
            } else {
                for (city, country) in matches {
                    println!("{} ({})", city.name(), country.name());
                }
            }
        }

        Commands::Interactive => {
            let controller = Controller::new(source, SystemClock);
            let stdin = std::io::stdin();
            interactive::run(&controller, stdin.lock(), std::io::stdout())?;
        }
    }

    Ok(())
}
