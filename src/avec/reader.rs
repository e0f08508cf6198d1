//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::{ErrorKind, Read};

use thiserror::Error;

use super::Decoder;

extern crate std;

/// Size of the chunks read from a reader.
const CHUNK_SIZE: usize = 512;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Feed everything from a reader to a decoder port, chunk by chunk, until the
/// end of the stream.
///
/// Returns the number of bytes read. Bytes too few to decode the next trace
/// stay pending in the decoder.
///
/// This method is also re-exported as `freewheel::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl Read, port: u32, d: &mut impl Decoder) -> Result<usize, Error> {
    let mut buf = [0; CHUNK_SIZE];
    let mut total = 0;

    loop {
        let n = match r.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => Err(err)?,
        };

        d.software_event(port, &buf[..n]);
        total += n;
    }

    Ok(total)
}
