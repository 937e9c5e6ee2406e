use anyhow::Result;
use colored::Colorize;
use dataview_router::{RouteFile, RoutingConfig};
use std::path::Path;

pub fn execute(file: &Path, routing: &RoutingConfig) -> Result<()> {
    println!("{} {}", "Checking".green().bold(), file.display());

    let table = RouteFile::load(file)?.into_table(routing)?;
    let named = table.names().count();
    let layouts = table.entries().filter(|e| e.is_layout).count();

    println!(
        "  {} {} routes ({} named, {} layouts)",
        "✓".green(),
        table.len(),
        named,
        layouts
    );

    let unnamed: Vec<&str> = table
        .entries()
        .filter(|e| e.name.is_none() && !e.is_layout)
        .map(|e| e.pattern)
        .collect();
    if !unnamed.is_empty() {
        println!(
            "  {} unnamed routes cannot be reached by name: {}",
            "⚠".yellow(),
            unnamed.join(", ")
        );
    }

    Ok(())
}
