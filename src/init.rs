use colored::*;
use std::{fs, path::Path};

use crate::config::CONFIG_FILE;

const TEMPLATE: &str = r#"# docsi Configuration File

# Search index emitted by the documentation generator
# Either bare JSON or the generator's `var documenterSearchIndex = {...}` script
index_path = "docs/build/search_index.js"

# Fields searched when no --field flag is given: "title", "text", "page"
fields = ["title", "text"]

# Default cap on the number of results (omit for no cap)
# limit = 20

# Match case exactly
case_sensitive = false

# Lines of each entry's text shown under a result
preview_lines = 3
"#;

pub fn init_config(force: bool) -> Result<(), String> {
    write_template(Path::new(CONFIG_FILE), force)?;

    println!("{} Created {}", "✅".green(), CONFIG_FILE);
    println!("\n{}", "Configuration file created with defaults:".cyan());
    println!(
        "  {} index_path = \"docs/build/search_index.js\"",
        "•".blue()
    );
    println!("  {} fields = [\"title\", \"text\"]", "•".blue());
    println!("  {} case_sensitive = false", "•".blue());
    println!("  {} preview_lines = 3", "•".blue());
    println!(
        "\n{}",
        format!("Edit {} to point at your documentation build.", CONFIG_FILE).cyan()
    );

    Ok(())
}

fn write_template(config_path: &Path, force: bool) -> Result<(), String> {
    if config_path.exists() && !force {
        return Err(format!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        ));
    }

    fs::write(config_path, TEMPLATE)
        .map_err(|e| format!("Failed to create {}: {}", config_path.display(), e))
}
