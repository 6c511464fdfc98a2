use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::confirm;

pub fn handle_delete(ctx: &mut CommandContext, id: String, force: bool, json: bool) -> Result<()> {
    let job = ctx.store.find(&id)?;
    let label = format!("{} @ {}", job.role, job.company);

    if !force && !json {
        if !confirm(&format!("Delete {} permanently?", label.cyan()))? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    ctx.store.delete(&id)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "action": "deleted",
                "id": id
            }))?
        );
    } else {
        println!("{} {}", "Deleted".red(), label.cyan());
    }
    Ok(())
}
