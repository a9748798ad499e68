use std::{fs::File, io::BufReader, path::Path};

use wordgrid::{
    encoding::StringEncoderOptions,
    io::StateFormat,
    policies::{PolicyKind, TfVariant},
    tokenizers::{CharExtract, SplitByAnyOf, StringTokenizer},
};

/// Encoder configuration arg group.
#[derive(clap::Args, Debug)]
pub struct EncoderArgs {
    /// JSON file of encoder options; flags below override it.
    #[arg(long, default_value = None)]
    config: Option<String>,

    /// Encoding policy: "ordinal", "presence", or "tf-idf".
    #[arg(long, default_value = None)]
    policy: Option<PolicyKind>,

    /// TF-IDF term-frequency scheme: "raw-count", "binary", "sublinear-tf", or "term-frequency".
    #[arg(long, default_value = None)]
    tf_variant: Option<TfVariant>,

    /// Disable TF-IDF idf smoothing.
    #[arg(long)]
    no_smooth_idf: bool,

    /// Tokenize the batch across threads.
    #[arg(long)]
    parallel: bool,
}

impl EncoderArgs {
    /// Were any policy flags given?
    pub fn has_policy_flags(&self) -> bool {
        self.config.is_some()
            || self.policy.is_some()
            || self.tf_variant.is_some()
            || self.no_smooth_idf
    }

    /// Should tokenization run across threads?
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Resolve the encoder options.
    pub fn options(&self) -> Result<StringEncoderOptions, Box<dyn std::error::Error>> {
        let mut options = match &self.config {
            Some(path) => {
                let options: StringEncoderOptions =
                    serde_json::from_reader(BufReader::new(File::open(path)?))?;
                log::info!("loaded encoder options from {path}");
                options
            }
            None => StringEncoderOptions::default(),
        };

        if let Some(policy) = self.policy {
            options.set_policy(policy);
        }
        if let Some(tf_variant) = self.tf_variant {
            options.set_tf_variant(tf_variant);
        }
        if self.no_smooth_idf {
            options.set_smooth_idf(false);
        }
        if self.parallel {
            options.set_parallel(true);
        }

        Ok(options)
    }
}

/// Tokenizer selection arg group.
#[derive(clap::Args, Debug)]
#[group(multiple = false)]
pub struct TokenizerArgs {
    /// Emit one token per character.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    chars: bool,

    /// Split on any of these characters [default: " "].
    #[arg(long, default_value = None)]
    delimiters: Option<String>,
}

impl TokenizerArgs {
    /// Build the selected tokenizer.
    pub fn tokenizer(&self) -> Box<dyn StringTokenizer> {
        if self.chars {
            Box::new(CharExtract)
        } else {
            Box::new(SplitByAnyOf::new(self.delimiters.as_deref().unwrap_or(" ")))
        }
    }
}

/// State format selection.
#[derive(clap::Args, Debug)]
pub struct StateFormatArgs {
    /// State file format: "json", "text", or "binary" [default: from extension].
    #[arg(long, default_value = None)]
    state_format: Option<StateFormat>,
}

impl StateFormatArgs {
    /// The format for `path`: explicit, or inferred from its extension.
    pub fn format_for(
        &self,
        path: &str,
    ) -> Result<StateFormat, Box<dyn std::error::Error>> {
        match self.state_format.or_else(|| StateFormat::from_path(Path::new(path))) {
            Some(format) => Ok(format),
            None => Err(format!(
                "cannot infer state format of {path:?}; pass --state-format"
            )
            .into()),
        }
    }
}
