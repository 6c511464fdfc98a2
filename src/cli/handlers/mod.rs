mod add;
mod board;
mod delete;
mod export;
mod import;
mod init;
mod list;
mod mv;
mod resume;
mod serve;
mod show;
mod update;
mod utils;

pub use add::handle_add;
pub use board::handle_board;
pub use delete::handle_delete;
pub use export::handle_export;
pub use import::handle_import;
pub use init::handle_init;
pub use list::handle_list;
pub use mv::handle_move;
pub use resume::handle_resume;
pub use serve::handle_serve;
pub use show::handle_show;
pub use update::handle_update;

use crate::config::Config;
use crate::storage::JobStore;
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: Config,
    pub root: PathBuf,
    pub store: JobStore,
}

impl CommandContext {
    pub fn new(config: Config, root: PathBuf) -> crate::error::Result<Self> {
        let store = JobStore::open(config.jobs_file(&root))?;
        Ok(Self {
            config,
            root,
            store,
        })
    }
}
