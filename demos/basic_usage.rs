//! Basic usage example for travel-recs
//!
//! This example demonstrates how to:
//! - Load the bundled travel dataset
//! - See how keywords are normalized
//! - Run recommendation queries
//! - Render cards with local times

use travel_core::prelude::*;

fn main() -> Result<()> {
    println!("=== Travel Recommendations Basic Usage Example ===\n");

    println!("Loading travel dataset...");
    let db = Dataset::load_from_path(Dataset::default_dataset_path())?;
    let stats = db.stats();
    println!(
        "✓ Loaded {} beaches, {} temples, {} countries ({} cities)\n",
        stats.beaches, stats.temples, stats.countries, stats.cities
    );

    // Example 1: Keyword normalization
    println!("--- Example 1: Keyword normalization ---");
    for raw in ["Beaches", "Temples", "Country", "Paris", "Tokyo"] {
        println!("  {raw:>8} -> {}", normalize_keyword(raw));
    }
    println!();

    // Example 2: Recommendations with local time
    println!("--- Example 2: Recommendations ---");
    for keyword in ["beaches", "temple", "country", "Japan", "Atlantis"] {
        println!("> {keyword}");
        print!("{}", render(&db.recommend(keyword), &SystemClock));
        println!();
    }

    // Example 3: The controller, as the widget drives it
    println!("--- Example 3: Search then reset ---");
    let controller = Controller::new(FileSource::default(), SystemClock);
    let searched = controller.handle(UiState::with_input("brazil"), Command::Search);
    print!("{}", searched.state.view);
    let reset = controller.handle(searched.state, Command::Reset);
    if let Some(notice) = reset.notice {
        println!("{}", notice.message());
    }

    Ok(())
}
