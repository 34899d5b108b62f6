pub mod save;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Handle Civ7Save files
    Save {
        #[command(subcommand)]
        command: save::SaveCommands,
    },
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Save { command } => command.handle(),
        }
    }
}
