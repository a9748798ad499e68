use std::io::Write;

use wordgrid::io::{PolicyState, load_state_path_as};

use crate::{encoder_args::StateFormatArgs, input_output::OutputArgs};

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// The state file.
    state: String,

    #[command(flatten)]
    state_format: StateFormatArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl InspectArgs {
    /// Run the inspect command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let format = self.state_format.format_for(&self.state)?;
        let state = load_state_path_as(format, &self.state)?;

        let mut writer = self.output.open_writer()?;

        let document_frequency = match &state.policy {
            PolicyState::TfIdf {
                tf_variant,
                smooth_idf,
                document_count,
                document_frequency,
            } => {
                writeln!(writer, "policy: {}", state.policy.kind())?;
                writeln!(writer, "tf variant: {tf_variant}")?;
                writeln!(writer, "smooth idf: {smooth_idf}")?;
                writeln!(writer, "documents: {document_count}")?;
                Some(document_frequency)
            }
            policy => {
                writeln!(writer, "policy: {}", policy.kind())?;
                None
            }
        };
        writeln!(writer, "tokens: {}", state.len())?;

        for (idx, token) in state.tokens.iter().enumerate() {
            match document_frequency {
                Some(df) => writeln!(writer, "{}\t{:?}\t{}", idx + 1, token, df[idx])?,
                None => writeln!(writer, "{}\t{:?}", idx + 1, token)?,
            }
        }
        writer.flush()?;

        Ok(())
    }
}
