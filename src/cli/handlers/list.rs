use crate::cli::commands::JobStatusArg;
use crate::model::{JobApplication, JobStatus};
use anyhow::Result;

use super::CommandContext;
use super::utils::print_job_list;

pub fn handle_list(
    ctx: &CommandContext,
    status: Option<JobStatusArg>,
    active: bool,
    json: bool,
) -> Result<()> {
    let mut jobs: Vec<&JobApplication> = ctx.store.jobs().iter().collect();

    if let Some(s) = status {
        let filter_status: JobStatus = s.into();
        jobs.retain(|j| j.status == filter_status);
    }
    if active {
        jobs.retain(|j| j.is_active());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&jobs)?);
    } else {
        print_job_list(&jobs);
    }
    Ok(())
}
