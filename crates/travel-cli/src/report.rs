//! Listings printed by the non-search subcommands.
use std::io::Write;
use travel_core::prelude::*;

fn write_country(c: &Country, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{} ({} cities)", c.name(), c.cities().len())?;
    for city in c.cities() {
        writeln!(out, "- {}", city.name())?;
    }
    Ok(())
}

/// Every country with its cities, or just the country called `name`.
pub fn write_countries(db: &Dataset, name: Option<&str>, mut out: impl Write) -> std::io::Result<()> {
    match name {
        None => {
            for c in db.countries() {
                write_country(c, &mut out)?;
            }
        }
        Some(name) => match db.find_country(name) {
            Some(c) => write_country(c, &mut out)?,
            None => writeln!(out, "No country named: {name}")?,
        },
    }
    Ok(())
}
