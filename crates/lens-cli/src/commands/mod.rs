pub mod report;
pub mod schema;
pub mod validate;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;

/// Dispatch a parsed command to its handler. Only `report` needs the layered
/// configuration, so it is loaded there and nowhere else.
pub fn dispatch(command: &Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Report(args) => {
            let config = bootstrap::load_config(flags)?;
            report::handle(args, flags, &config)
        }
        Commands::Validate(args) => validate::handle(args, flags),
        Commands::Schema(args) => schema::handle(args, flags),
    }
}
