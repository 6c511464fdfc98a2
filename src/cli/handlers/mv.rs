use crate::cli::commands::JobStatusArg;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{format_status, short_id};

pub fn handle_move(
    ctx: &mut CommandContext,
    id: String,
    status: JobStatusArg,
    json: bool,
) -> Result<()> {
    let job = ctx.store.move_to(&id, status.into())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&job)?);
    } else {
        println!(
            "{} {} to {}",
            "Moved".green(),
            short_id(&job).cyan(),
            format_status(job.status)
        );
    }
    Ok(())
}
