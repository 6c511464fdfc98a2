use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use jobtrail::cli::handlers::{
    CommandContext, handle_add, handle_board, handle_delete, handle_export, handle_import,
    handle_init, handle_list, handle_move, handle_resume, handle_serve, handle_show, handle_update,
};
use jobtrail::cli::{Cli, Commands};
use jobtrail::config::Config;
use jobtrail::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone().map(PathBuf::from));

    match cli.command {
        Commands::Init { path } => handle_init(path),
        Commands::Add {
            company,
            role,
            status,
            date,
            salary,
            link,
            notes,
            json,
        } => {
            let mut ctx = load_context()?;
            handle_add(
                &mut ctx, company, role, status, date, salary, link, notes, json,
            )
        }
        Commands::List {
            status,
            active,
            json,
        } => {
            let ctx = load_context()?;
            handle_list(&ctx, status, active, json)
        }
        Commands::Show { id, json } => {
            let ctx = load_context()?;
            handle_show(&ctx, id, json)
        }
        Commands::Update {
            id,
            company,
            role,
            status,
            date,
            salary,
            link,
            notes,
            json,
        } => {
            let mut ctx = load_context()?;
            handle_update(
                &mut ctx, id, company, role, status, date, salary, link, notes, json,
            )
        }
        Commands::Move { id, status, json } => {
            let mut ctx = load_context()?;
            handle_move(&mut ctx, id, status, json)
        }
        Commands::Delete { id, force, json } => {
            let mut ctx = load_context()?;
            handle_delete(&mut ctx, id, force, json)
        }
        Commands::Board => {
            let ctx = load_context()?;
            handle_board(&ctx)
        }
        Commands::Export { path } => {
            let ctx = load_context()?;
            handle_export(&ctx, path)
        }
        Commands::Import { path, force } => {
            let mut ctx = load_context()?;
            handle_import(&mut ctx, path, force)
        }
        Commands::Resume { action } => {
            let ctx = load_context()?;
            handle_resume(&ctx, action)
        }
        Commands::Serve { port } => {
            let ctx = load_context()?;
            handle_serve(&ctx, port)
        }
    }
}

fn load_context() -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let (config, root) = Config::load(&cwd).context("Failed to load jobtrail configuration")?;
    Ok(CommandContext::new(config, root)?)
}
