use wordgrid::io::{StateFormat, load_state_path_as, save_state_path_as};

/// Args for the convert command.
#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// The state file to read.
    source: String,

    /// The state file to write.
    target: String,

    /// Source format [default: from extension].
    #[arg(long, default_value = None)]
    from: Option<StateFormat>,

    /// Target format [default: from extension].
    #[arg(long, default_value = None)]
    to: Option<StateFormat>,
}

fn resolve(
    explicit: Option<StateFormat>,
    path: &str,
) -> Result<StateFormat, Box<dyn std::error::Error>> {
    explicit
        .or_else(|| StateFormat::from_path(path))
        .ok_or_else(|| format!("cannot infer state format of {path:?}").into())
}

impl ConvertArgs {
    /// Run the convert command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let from = resolve(self.from, &self.source)?;
        let to = resolve(self.to, &self.target)?;

        let state = load_state_path_as(from, &self.source)?;
        save_state_path_as(&state, to, &self.target)?;

        Ok(())
    }
}
