//! Example demonstrating the search index API
//!
//! Loads the bundled sample index and walks through lookups and searches.
//!
//! Run with: cargo run --example docs_demo

use docsi::docs::{IndexStore, SearchField, SearchOptions};

const SAMPLE: &str = include_str!("../fixtures/search_index.js");

fn main() -> Result<(), docsi::docs::IndexError> {
    println!("=== Search Index Demo ===\n");

    // The store is built once and passed around by reference
    let store = IndexStore::load(SAMPLE)?;

    // Example 1: Every entry, in index order
    println!("1️⃣  Listing all entries:");
    for record in store.search("", &SearchOptions::new().all_fields())? {
        println!("   • [{}] {} {}", record.category, record.title, record.location);
    }
    println!();

    // Example 2: Title-only search
    println!("2️⃣  Titles containing 'model':");
    let options = SearchOptions::new().fields([SearchField::Title]);
    for record in store.search("model", &options)? {
        println!("   ✓ {}", record.title);
    }
    println!();

    // Example 3: Text search with a cap
    println!("3️⃣  First entry whose text mentions 'lognormal':");
    let options = SearchOptions::new().fields([SearchField::Text]).limit(1);
    if let Some(record) = store.search("lognormal", &options)?.next() {
        println!("   ✓ {} ({})", record.title, record.category);
    }
    println!();

    // Example 4: Anchor lookup
    println!("4️⃣  Looking up '#WatchFish.Model':");
    let record = store.get_by_location("#WatchFish.Model")?;
    for line in record.text.lines().filter(|l| !l.trim().is_empty()) {
        println!("   {}", line.trim());
    }
    println!();

    // Example 5: Missing anchors are reported, not fatal
    println!("5️⃣  Looking up a missing anchor:");
    match store.get_by_location("#WatchFish.fit") {
        Ok(record) => println!("   ✓ {}", record.title),
        Err(e) => println!("   ✗ {}", e),
    }
    println!();

    // Example 6: Statistics
    println!("6️⃣  Index statistics:");
    println!("   ✓ Total entries: {}", store.len());
    println!("   ✓ Pages: {}", store.pages().len());
    for (category, count) in store.category_counts() {
        println!("   ✓ {}: {}", category, count);
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
