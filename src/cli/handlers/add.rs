use crate::cli::commands::JobStatusArg;
use crate::model::JobForm;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{short_id, today};

#[allow(clippy::too_many_arguments)]
pub fn handle_add(
    ctx: &mut CommandContext,
    company: String,
    role: String,
    status: JobStatusArg,
    date: Option<String>,
    salary: Option<String>,
    link: Option<String>,
    notes: Option<String>,
    json: bool,
) -> Result<()> {
    let form = JobForm {
        company,
        role,
        status: status.into(),
        date_applied: date.unwrap_or_else(today),
        salary,
        link,
        notes,
    };

    let job = ctx.store.add(form)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&job)?);
    } else {
        println!(
            "{} {} {} @ {}",
            "Added".green(),
            short_id(&job).cyan(),
            job.role,
            job.company
        );
    }
    Ok(())
}
