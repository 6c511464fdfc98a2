use crate::cli::commands::JobStatusArg;
use crate::storage::JobUpdate;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{clearable, short_id};

#[allow(clippy::too_many_arguments)]
pub fn handle_update(
    ctx: &mut CommandContext,
    id: String,
    company: Option<String>,
    role: Option<String>,
    status: Option<JobStatusArg>,
    date: Option<String>,
    salary: Option<String>,
    link: Option<String>,
    notes: Option<String>,
    json: bool,
) -> Result<()> {
    let changes = JobUpdate {
        company,
        role,
        status: status.map(Into::into),
        date_applied: date,
        salary: clearable(salary),
        link: clearable(link),
        notes: clearable(notes),
    };

    let job = ctx.store.update(&id, changes)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&job)?);
    } else {
        println!(
            "{} {} {} @ {}",
            "Updated".green(),
            short_id(&job).cyan(),
            job.role,
            job.company
        );
    }
    Ok(())
}
