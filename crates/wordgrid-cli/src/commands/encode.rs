use std::io::Write;

use wordgrid::{
    StringEncoder,
    io::{load_state_path_as, save_state_path_as},
};

use crate::{
    encoder_args::{EncoderArgs, StateFormatArgs, TokenizerArgs},
    input_output::{InputArgs, OutputArgs},
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    encoder: EncoderArgs,

    #[command(flatten)]
    tokenizer: TokenizerArgs,

    /// Write unpadded rows instead of a zero-padded matrix.
    #[arg(long)]
    ragged: bool,

    /// Write non-zero cells as "row col value" lines instead of a matrix.
    #[arg(long, conflicts_with = "ragged")]
    sparse: bool,

    /// Resume from a saved encoder state.
    #[arg(long, default_value = None)]
    load_state: Option<String>,

    /// Save the encoder state after encoding.
    #[arg(long, default_value = None)]
    save_state: Option<String>,

    #[command(flatten)]
    state_format: StateFormatArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut encoder: StringEncoder<u32> = match &self.load_state {
            Some(path) => {
                if self.encoder.has_policy_flags() {
                    log::warn!("policy options are ignored when resuming from {path}");
                }
                let format = self.state_format.format_for(path)?;
                StringEncoder::from_state(load_state_path_as(format, path)?)?
                    .with_parallel(self.encoder.parallel())
            }
            None => self.encoder.options()?.build(),
        };

        let batch = self.input.read_lines()?;
        let tokenizer = self.tokenizer.tokenizer();
        let tokenizer = tokenizer.as_ref();

        let mut writer = self.output.open_writer()?;
        if self.ragged {
            for row in encoder.encode_ragged(&batch, &tokenizer)? {
                write_row(&mut writer, &row)?;
            }
        } else if self.sparse {
            let matrix = encoder.encode_sparse(&batch, &tokenizer)?;
            let (rows, cols) = matrix.shape();
            writeln!(writer, "# {rows} {cols} {}", matrix.nnz())?;
            for (row, col, value) in matrix.iter() {
                writeln!(writer, "{row} {col} {value}")?;
            }
        } else {
            let matrix = encoder.encode_dense(&batch, &tokenizer)?;
            for row in matrix.iter_rows() {
                write_row(&mut writer, row)?;
            }
        }
        writer.flush()?;

        log::info!(
            "encoded {} sequences; dictionary has {} tokens",
            batch.len(),
            encoder.dictionary().len()
        );

        if let Some(path) = &self.save_state {
            let format = self.state_format.format_for(path)?;
            save_state_path_as(&encoder.to_state(), format, path)?;
        }

        Ok(())
    }
}

fn write_row(
    writer: &mut dyn Write,
    row: &[f64],
) -> std::io::Result<()> {
    for (idx, value) in row.iter().enumerate() {
        write!(writer, "{}{}", if idx == 0 { "" } else { " " }, value)?;
    }
    writeln!(writer)
}
