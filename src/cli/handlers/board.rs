use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{format_status, short_id};

pub fn handle_board(ctx: &CommandContext) -> Result<()> {
    for (status, jobs) in ctx.store.by_status() {
        println!(
            "{} ({})",
            format_status(status).bold(),
            jobs.len().to_string().dimmed()
        );

        if jobs.is_empty() {
            println!("  {}", "-".dimmed());
        }
        for job in jobs {
            println!("  {} {} @ {}", short_id(job).cyan(), job.role, job.company);
        }
        println!();
    }
    Ok(())
}
