//! # JSON State IO

use std::io::{Read, Write};

use crate::{errors::WGResult, io::EncoderState};

/// Write an [`EncoderState`] as pretty-printed JSON.
///
/// ## Arguments
/// * `state` - the state to write.
/// * `writer` - the writer to target.
pub fn write_json_state<W: Write>(
    state: &EncoderState,
    writer: &mut W,
) -> WGResult<()> {
    serde_json::to_writer_pretty(&mut *writer, state)?;
    writeln!(writer)?;
    Ok(())
}

/// Read an [`EncoderState`] from JSON.
///
/// The state is validated before it is returned.
pub fn read_json_state<R: Read>(reader: R) -> WGResult<EncoderState> {
    let state: EncoderState = serde_json::from_reader(reader)?;
    state.validate()?;
    Ok(state)
}
