//! Slice-based decoder implementation.

use either::Either::{Left, Right};

use crate::sans::{cursor::Cursor, schedule::Schedule};

use super::GraphSink;

/// Decode every complete trace in a slice, starting from the first trace of a
/// schedule and publishing to a receiver.
///
/// Returns the trailing bytes too few to decode the next trace.
///
/// This method is also re-exported as `freewheel::avec::decode_slice`.
pub fn decode<'r>(schedule: &Schedule, r: &'r [u8], o: &mut impl GraphSink) -> &'r [u8] {
    let mut cursor = Cursor::new();
    let mut r = r;

    loop {
        r = match cursor.step(schedule, r) {
            Left((trace, value, tail)) => {
                o.graph(value, &trace.graph_id);
                tail
            }
            Right(rest) => return rest,
        };
    }
}
