use anyhow::Result;
use colored::Colorize;
use dataview_router::{Navigator, RouteTable, Transition};
use std::sync::Arc;

pub fn execute(table: Arc<RouteTable<String>>, steps: &[String]) -> Result<()> {
    let mut navigator = Navigator::new(table);

    for step in steps {
        let outcome = match step.as_str() {
            ":back" => navigator.back(),
            ":forward" => navigator.forward(),
            location => navigator.push(location),
        };

        match outcome {
            Ok(transition) => print_transition(&transition),
            Err(e) => println!("{} {} ({})", "✗".red(), step, e.to_string().yellow()),
        }
    }

    if let Some(current) = navigator.current() {
        println!();
        println!("At {} ({} history entries)", current.full_path().cyan(), navigator.history_len());
    }

    Ok(())
}

fn print_transition(transition: &Transition<String>) {
    let from = transition
        .from
        .as_ref()
        .map(|m| m.full_path())
        .unwrap_or_else(|| "(start)".to_string());

    println!(
        "{} {} -> {}",
        transition.kind.to_string().bold(),
        from,
        transition.to.full_path().cyan()
    );

    for route in &transition.unmounted {
        println!("  {} {}", "-".red(), route.component);
    }
    for route in &transition.mounted {
        println!("  {} {}", "+".green(), route.component);
    }
    for route in &transition.updated {
        println!("  {} {} {}", "~".yellow(), route.component, transition.to.params);
    }
}
