use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_export(ctx: &CommandContext, path: Option<String>) -> Result<()> {
    let document = ctx.store.export_json()?;

    match path {
        Some(path) => {
            std::fs::write(&path, &document)?;
            println!(
                "{} {} applications to {}",
                "Exported".green(),
                ctx.store.jobs().len(),
                path
            );
        }
        None => println!("{}", document),
    }
    Ok(())
}
