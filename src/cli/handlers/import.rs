use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use super::utils::confirm;

pub fn handle_import(ctx: &mut CommandContext, path: String, force: bool) -> Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read import file {}", path))?;

    let existing = ctx.store.jobs().len();
    if existing > 0 && !force {
        let prompt = format!(
            "Replace the current list ({} applications) with {}?",
            existing,
            path.cyan()
        );
        if !confirm(&prompt)? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let count = ctx.store.import_json(&content)?;
    println!("{} {} applications from {}", "Imported".green(), count, path);
    Ok(())
}
