use clap::Subcommand;

use crate::lib::cli::init_args::InitArgs;

#[derive(Subcommand, Clone, Debug)]
pub enum SubCommands
{
    /// Create a new Prefect project.
    Init(InitArgs),
}
