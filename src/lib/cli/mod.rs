pub mod init_args;
pub mod sub_commands;

use clap::Parser;
use crate::lib::cli::sub_commands::SubCommands;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("TARGET"), ")"))]
#[command(propagate_version = true)]
pub struct Cli
{
    #[command(subcommand)]
    pub command: SubCommands,
}
