//! # Compact Binary State IO
//!
//! A 4-byte magic, a format version byte, then the [`EncoderState`] as
//! varint `bincode`. Trailing bytes are rejected.

use std::io::{Read, Write};

use bincode::Options;

use crate::{
    errors::{WGResult, WordgridError},
    io::EncoderState,
};

/// Leading bytes of the binary format.
pub const BINARY_STATE_MAGIC: &[u8; 4] = b"WGST";

/// Binary format version.
pub const BINARY_STATE_VERSION: u8 = 1;

fn codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_varint_encoding()
        .reject_trailing_bytes()
}

/// Write an [`EncoderState`] in the binary format.
///
/// ## Arguments
/// * `state` - the state to write.
/// * `writer` - the writer to target.
pub fn write_binary_state<W: Write>(
    state: &EncoderState,
    writer: &mut W,
) -> WGResult<()> {
    let body = codec().serialize(state)?;
    writer.write_all(BINARY_STATE_MAGIC)?;
    writer.write_all(&[BINARY_STATE_VERSION])?;
    writer.write_all(&body)?;
    Ok(())
}

/// Read an [`EncoderState`] from the binary format.
///
/// The whole input is consumed; the state is validated before it is returned.
pub fn read_binary_state<R: Read>(mut reader: R) -> WGResult<EncoderState> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;

    let body = match buf.split_first_chunk::<4>() {
        Some((magic, rest)) if magic == BINARY_STATE_MAGIC => rest,
        _ => return Err(WordgridError::Parse("missing binary state magic".to_string())),
    };
    let body = match body.split_first() {
        Some((&BINARY_STATE_VERSION, rest)) => rest,
        Some((version, _)) => {
            return Err(WordgridError::Parse(format!(
                "unsupported binary state version {version}"
            )));
        }
        None => return Err(WordgridError::Parse("missing binary state version".to_string())),
    };

    let state: EncoderState = codec().deserialize(body)?;
    state.validate()?;
    Ok(state)
}
