use anyhow::Result;

use super::CommandContext;

pub fn handle_serve(ctx: &CommandContext, port: Option<u16>) -> Result<()> {
    let port = port.unwrap_or(ctx.config.server.port);

    println!("Starting extraction service on http://localhost:{}", port);

    tokio::runtime::Runtime::new()?.block_on(async { crate::server::run(port).await })?;
    Ok(())
}
