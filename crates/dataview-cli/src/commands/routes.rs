use anyhow::Result;
use colored::Colorize;
use dataview_router::RouteTable;

pub fn execute(table: &RouteTable<String>) -> Result<()> {
    let case_mode = if table.is_case_insensitive() {
        "case-insensitive"
    } else {
        "case-sensitive"
    };
    let mut settings = vec![case_mode.to_string()];
    if let Some(base) = table.base_path() {
        settings.push(format!("base {}", base));
    }

    println!(
        "{} ({} routes, {})",
        "Routes".green().bold(),
        table.len(),
        settings.join(", ")
    );
    println!();

    for entry in table.entries() {
        let indent = "  ".repeat(entry.depth + 1);
        let pattern = format!("{}{}", indent, entry.pattern);
        let name = entry.name.unwrap_or("-");
        let layout = if entry.is_layout { " [layout]" } else { "" };

        println!(
            "{:<50} {:<18} {}{}",
            pattern.cyan(),
            name.green(),
            entry.component,
            layout.dimmed()
        );
    }

    Ok(())
}
