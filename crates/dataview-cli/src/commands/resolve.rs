use anyhow::{bail, Result};
use colored::Colorize;
use dataview_router::RouteTable;

pub fn execute(table: &RouteTable<String>, path: &str, json: bool) -> Result<()> {
    let Some(route_match) = table.resolve(path) else {
        bail!("No route matches '{}'", path);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&route_match)?);
        return Ok(());
    }

    println!("{} {}", "Matched".green().bold(), route_match.full_path().cyan());
    println!();

    for (depth, route) in route_match.matched.iter().enumerate() {
        let indent = "  ".repeat(depth + 1);
        let name = route.name.as_deref().unwrap_or("-");
        println!("{}{} {} ({})", indent, route.pattern.cyan(), route.component, name.green());
    }

    if route_match.is_layout_only() {
        println!();
        println!("{}", "Layout only: no child route active".yellow());
    }

    if !route_match.params.is_empty() {
        println!();
        println!("Params: {}", route_match.params);
    }
    if !route_match.query.is_empty() {
        println!("Query:  {}", route_match.query);
    }
    if let Some(hash) = &route_match.hash {
        println!("Hash:   {}", hash);
    }

    Ok(())
}
