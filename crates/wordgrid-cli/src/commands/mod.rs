use crate::commands::{convert::ConvertArgs, encode::EncodeArgs, inspect::InspectArgs};

pub mod convert;
pub mod encode;
pub mod inspect;

/// Subcommands for wordgrid
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode one sequence per input line as numeric rows.
    Encode(EncodeArgs),

    /// Print the contents of a state file.
    Inspect(InspectArgs),

    /// Rewrite a state file in another format.
    Convert(ConvertArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Convert(cmd) => cmd.run(),
        }
    }
}
