//! Terminal views over a loaded search index

use colored::*;
use docsi::docs::{DocRecord, IndexStore, SearchField, SearchOptions};
use std::io::{self, Write};

use crate::config::Config;
use crate::format::{clip, preview_lines, separator, terminal_width};

/// Results shown per interactive search when no limit is configured
const INTERACTIVE_LIMIT: usize = 20;

/// Search the index and print every match
pub fn search_docs(
    store: &IndexStore,
    config: &Config,
    query: &str,
    options: &SearchOptions,
) -> Result<(), String> {
    let matches = store.search(query, options).map_err(|e| e.to_string())?;

    let mut count = 0;
    for record in matches {
        if count == 0 {
            println!();
        }
        display_record(record, config.preview_lines);
        count += 1;
    }

    if count == 0 {
        println!("{} No results found for '{}'", "ℹ️".blue(), query);
    } else {
        println!("{} {} result(s)", "✓".green(), count.to_string().bold());
    }

    Ok(())
}

/// Show the record at an anchor, suggesting close anchors when absent
pub fn show_location(store: &IndexStore, location: &str) -> Result<(), String> {
    match store.get_by_location(location) {
        Ok(record) => {
            display_record_full(record);
            Ok(())
        }
        Err(e) => {
            let suggestions = store.suggest_locations(location.trim_start_matches('#'), 5);
            if !suggestions.is_empty() {
                println!("{} Did you mean one of these?\n", "ℹ️".blue());
                for suggestion in suggestions {
                    println!("  {} {}", "•".cyan(), suggestion.green());
                }
                println!();
            }
            Err(e.to_string())
        }
    }
}

/// List pages with their record counts
pub fn list_pages(store: &IndexStore) -> Result<(), String> {
    let pages = store.pages();
    println!("\n{} {} page(s):\n", "📖".cyan(), pages.len());
    for page in pages {
        println!(
            "  {} {} ({} entries)",
            "•".cyan(),
            page.green(),
            store.records_on_page(page).count().to_string().dimmed()
        );
    }
    println!();
    Ok(())
}

/// Print the entries of a single page
fn display_page(store: &IndexStore, page: &str) -> Result<(), String> {
    let mut records = store.records_on_page(page).peekable();
    if records.peek().is_none() {
        return Err(format!("Page '{}' not found", page));
    }

    println!("\n{} {}\n", "📖".cyan(), page.yellow().bold());
    for record in records {
        println!(
            "  {} {} {}",
            "•".cyan(),
            record.title.green(),
            format!("[{}] {}", record.category, record.location).dimmed()
        );
    }
    Ok(())
}

/// Index statistics
pub fn show_stats(store: &IndexStore) -> Result<(), String> {
    println!("\n{} Search index statistics:\n", "📊".cyan());
    println!("  {} Records: {}", "✓".green(), store.len());
    println!("  {} Pages:   {}", "✓".green(), store.pages().len());
    println!("\n  {}", "By category:".bold());
    for (category, count) in store.category_counts() {
        println!("    {} {:<12} {}", "•".cyan(), category.to_string(), count);
    }
    println!();
    Ok(())
}

/// Interactive search mode
pub fn interactive_search(store: &IndexStore, config: &Config) -> Result<(), String> {
    println!("{}", "╔═══════════════════════════════════════════╗".cyan());
    println!("{}", "║   Documentation Search                    ║".cyan());
    println!("{}", "╚═══════════════════════════════════════════╝".cyan());
    println!();
    print_help();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut options = config.search_options();
    if options.limit.is_none() {
        options.limit = Some(INTERACTIVE_LIMIT);
    }

    loop {
        print!("{} ", "docsi>".blue().bold());
        stdout.flush().map_err(|e| e.to_string())?;

        let mut input = String::new();
        let read = stdin.read_line(&mut input).map_err(|e| e.to_string())?;
        if read == 0 {
            println!();
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let outcome = match parse_command(input) {
            ReplCommand::Quit => {
                println!("Goodbye! 👋");
                break;
            }
            ReplCommand::Search { field, query } => {
                let options = match field {
                    Some(field) => options.clone().fields([field]),
                    None => options.clone(),
                };
                search_docs(store, config, query, &options)
            }
            ReplCommand::Show("") => Err("Usage: show <location>".to_string()),
            ReplCommand::Show(location) => show_location(store, location),
            ReplCommand::Page("") => Err("Usage: page <title>".to_string()),
            ReplCommand::Page(page) => display_page(store, page),
            ReplCommand::Pages => list_pages(store),
            ReplCommand::Stats => show_stats(store),
            ReplCommand::Help => {
                println!();
                print_help();
                Ok(())
            }
        };
        report(outcome);
        println!();
    }

    Ok(())
}

/// One line of interactive input
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand<'a> {
    Quit,
    /// An empty query lists every entry
    Search {
        field: Option<SearchField>,
        query: &'a str,
    },
    Show(&'a str),
    Page(&'a str),
    Pages,
    Stats,
    Help,
}

fn parse_command(input: &str) -> ReplCommand<'_> {
    let (command, rest) = match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    match command {
        "quit" | "exit" | "q" => ReplCommand::Quit,
        "search" => ReplCommand::Search {
            field: None,
            query: rest,
        },
        "title" => ReplCommand::Search {
            field: Some(SearchField::Title),
            query: rest,
        },
        "text" => ReplCommand::Search {
            field: Some(SearchField::Text),
            query: rest,
        },
        "show" => ReplCommand::Show(rest),
        "page" => ReplCommand::Page(rest),
        "pages" => ReplCommand::Pages,
        "stats" => ReplCommand::Stats,
        "help" | "?" => ReplCommand::Help,
        // Default to a search over the configured fields
        _ => ReplCommand::Search {
            field: None,
            query: input,
        },
    }
}

/// Print a failed interactive command without leaving the prompt
fn report(outcome: Result<(), String>) -> bool {
    match outcome {
        Ok(()) => true,
        Err(e) => {
            println!("{} {}", "❌".red(), e);
            false
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  {} [query]      - Search titles and text (empty lists all)", "search".green());
    println!("  {} [query]       - Search titles only", "title".green());
    println!("  {} [query]        - Search text only", "text".green());
    println!("  {} <location>     - Show the entry at an anchor", "show".green());
    println!("  {} <title>        - List entries on a page", "page".green());
    println!("  {}               - List all pages", "pages".green());
    println!("  {}               - Index statistics", "stats".green());
    println!("  {}                - Exit", "quit".green());
    println!();
}

/// One result line plus a short preview of its text
fn display_record(record: &DocRecord, max_lines: usize) {
    let width = terminal_width().saturating_sub(6).max(20);

    println!(
        "  {} {} {}",
        "▸".cyan(),
        record.title.yellow().bold(),
        format!("[{}]", record.category).dimmed()
    );
    println!("    {} {}", record.page.blue(), record.location.bright_black());

    let (lines, truncated) = preview_lines(&record.text, max_lines);
    for line in lines {
        println!("    {}", clip(line, width).dimmed());
    }
    if truncated {
        println!("    {}", "...".dimmed());
    }
    println!();
}

/// Full entry view
fn display_record_full(record: &DocRecord) {
    let width = terminal_width().saturating_sub(2).max(40);

    println!();
    println!(
        "{} {} {}",
        "📄".cyan(),
        record.title.green().bold(),
        format!("[{}]", record.category).dimmed()
    );
    println!("{}", separator(width).cyan());
    println!("{} {}", "Page:".bold(), record.page);
    println!("{} {}", "Location:".bold(), record.location);
    println!();

    let body = record.text.trim_end();
    if body.is_empty() {
        println!("{}", "(no text)".dimmed());
    } else {
        println!("{}", body);
    }
    println!();
}
