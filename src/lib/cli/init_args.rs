use clap::Args;

#[derive(Args, Clone, Debug)]
pub struct InitArgs
{
    #[arg(help = "Name of the project to create. A directory of that name is created in the current directory.")]
    pub name: String,

    #[arg(
        long = "package-manager",
        env = "PREFECT_SCAFFOLD_PACKAGE_MANAGER",
        default_value = "uv",
        help = "Program used to create the project and install dependencies."
    )]
    pub package_manager: String,

    #[arg(long, help = "Only install from the local package cache.")]
    pub offline: bool,

    #[arg(long, short, help = "Silence progress output. Errors are still printed.")]
    pub quiet: bool
}
