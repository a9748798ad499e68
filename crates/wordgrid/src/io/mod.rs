//! # Encoder State IO
//!
//! An encoder's dictionary and policy counters are captured as a single
//! [`EncoderState`] and written in one of three [`StateFormat`]s. All three
//! decode to the same state.
//!
//! ## Saving And Restoring An Encoder
//!
//! ```rust,no_run
//! use wordgrid::{
//!     encoding::StringEncoder,
//!     io::{load_state_path, save_state_path},
//!     policies::{EncodingPolicy, TfVariant},
//!     tokenizers::SplitByAnyOf,
//! };
//!
//! fn example() -> wordgrid::errors::WGResult<()> {
//!     type T = u32;
//!     let mut encoder = StringEncoder::<T>::new(EncodingPolicy::tf_idf(TfVariant::RawCount, true));
//!     encoder.encode_dense(&["a b", "b c"], &SplitByAnyOf::new(" "))?;
//!
//!     save_state_path(&encoder.to_state(), "encoder.wgst")?;
//!
//!     let restored = StringEncoder::<T>::from_state(load_state_path("encoder.wgst")?)?;
//!     assert_eq!(restored.dictionary(), encoder.dictionary());
//!     Ok(())
//! }
//! ```

mod binary_io;
mod encoder_state;
mod json_io;
mod text_io;

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

#[doc(inline)]
pub use binary_io::*;
#[doc(inline)]
pub use encoder_state::*;
#[doc(inline)]
pub use json_io::*;
#[doc(inline)]
pub use text_io::*;

use crate::errors::{WGResult, WordgridError};

/// Serialization format selector.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum StateFormat {
    /// Pretty-printed JSON; `.json`.
    #[default]
    Json,

    /// Line-oriented plain text with base64 tokens; `.txt`.
    Text,

    /// Compact `bincode`; `.wgst` or `.bin`.
    Binary,
}

impl StateFormat {
    /// The conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "txt",
            Self::Binary => "wgst",
        }
    }

    /// Infer the format from a path's extension.
    ///
    /// ## Returns
    /// `None` if the extension is missing or unrecognized.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "txt" | "text" => Some(Self::Text),
            "wgst" | "bin" => Some(Self::Binary),
            _ => None,
        }
    }

    fn for_path(path: &Path) -> WGResult<Self> {
        Self::from_path(path).ok_or_else(|| {
            WordgridError::Parse(format!(
                "cannot infer state format from path {}",
                path.display()
            ))
        })
    }
}

/// Write an [`EncoderState`] to a [`Write`] writer.
///
/// ## Arguments
/// * `state` - the state to write.
/// * `format` - the serialization format.
/// * `writer` - the writer to target.
pub fn write_state<W: Write>(
    state: &EncoderState,
    format: StateFormat,
    writer: &mut W,
) -> WGResult<()> {
    match format {
        StateFormat::Json => write_json_state(state, writer),
        StateFormat::Text => write_text_state(state, writer),
        StateFormat::Binary => write_binary_state(state, writer),
    }
}

/// Read an [`EncoderState`] from a [`Read`] reader.
///
/// Decoding is all-or-nothing: a state is only returned once it validates.
///
/// ## Arguments
/// * `reader` - the reader.
/// * `format` - the serialization format.
pub fn read_state<R: Read>(
    reader: R,
    format: StateFormat,
) -> WGResult<EncoderState> {
    match format {
        StateFormat::Json => read_json_state(reader),
        StateFormat::Text => read_text_state(BufReader::new(reader)),
        StateFormat::Binary => read_binary_state(reader),
    }
}

/// Encode an [`EncoderState`] to bytes.
pub fn to_bytes(
    state: &EncoderState,
    format: StateFormat,
) -> WGResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_state(state, format, &mut buf)?;
    Ok(buf)
}

/// Decode an [`EncoderState`] from bytes.
pub fn from_bytes(
    bytes: &[u8],
    format: StateFormat,
) -> WGResult<EncoderState> {
    read_state(bytes, format)
}

/// Save an [`EncoderState`] to a file, inferring the format from its extension.
///
/// ## Arguments
/// * `state` - the state to save.
/// * `path` - the path to save to.
pub fn save_state_path<P: AsRef<Path>>(
    state: &EncoderState,
    path: P,
) -> WGResult<()> {
    let path = path.as_ref();
    save_state_path_as(state, StateFormat::for_path(path)?, path)
}

/// Save an [`EncoderState`] to a file in an explicit format.
pub fn save_state_path_as<P: AsRef<Path>>(
    state: &EncoderState,
    format: StateFormat,
    path: P,
) -> WGResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_state(state, format, &mut writer)?;
    writer.flush()?;

    log::info!(
        "saved {} state ({} tokens) to {}",
        format,
        state.len(),
        path.display()
    );
    Ok(())
}

/// Load an [`EncoderState`] from a file, inferring the format from its extension.
///
/// ## Arguments
/// * `path` - the path to load from.
pub fn load_state_path<P: AsRef<Path>>(path: P) -> WGResult<EncoderState> {
    let path = path.as_ref();
    load_state_path_as(StateFormat::for_path(path)?, path)
}

/// Load an [`EncoderState`] from a file in an explicit format.
pub fn load_state_path_as<P: AsRef<Path>>(
    format: StateFormat,
    path: P,
) -> WGResult<EncoderState> {
    let path = path.as_ref();
    let state = read_state(BufReader::new(File::open(path)?), format)?;

    log::info!(
        "loaded {} state ({} tokens, {} policy) from {}",
        format,
        state.len(),
        state.policy.kind(),
        path.display()
    );
    Ok(state)
}
