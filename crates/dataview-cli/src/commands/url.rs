use anyhow::{Context, Result};
use dataview_router::{Params, RouteTable};

pub fn execute(table: &RouteTable<String>, name: &str, params: Vec<(String, String)>) -> Result<()> {
    let params: Params = params.into_iter().collect();
    let url = table
        .url_for(name, &params)
        .with_context(|| format!("Cannot build URL for route '{}'", name))?;

    println!("{}", url);
    Ok(())
}
