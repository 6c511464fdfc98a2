use anyhow::Result;

use super::CommandContext;
use super::utils::print_job;

pub fn handle_show(ctx: &CommandContext, id: String, json: bool) -> Result<()> {
    let job = ctx.store.find(&id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(job)?);
    } else {
        print_job(job);
    }
    Ok(())
}
