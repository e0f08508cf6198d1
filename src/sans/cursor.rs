//! Per-port decoding position.

use alloc::{borrow::Cow, vec::Vec};

use either::Either::{self, Left, Right};

use super::{
    primitive::Value,
    schedule::{Schedule, Trace},
};

/// Decoding state for one port: the index of the next expected trace, and
/// any bytes received but too few to decode it.
///
/// The carried-over bytes are always fewer than the width of the trace at
/// the current index.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    pending: Vec<u8>,
}

impl Cursor {
    /// A cursor at the start of its schedule, with nothing carried over.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the next expected trace.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Bytes carried over from previous chunks.
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Decode the next expected trace from the head of `r`.
    ///
    /// Returns the trace, its value and the bytes following it, or if `r` is
    /// too short, `r` itself. Carried-over bytes are neither consulted nor
    /// modified; see [`Cursor::advance`] for chunked input.
    pub fn step<'s, 'r>(
        &mut self,
        schedule: &'s Schedule,
        r: &'r [u8],
    ) -> Either<(&'s Trace, Value, &'r [u8]), &'r [u8]> {
        let trace = &schedule[self.index];

        if r.len() < trace.primitive.width() {
            return Right(r);
        }

        let (head, tail) = r.split_at(trace.primitive.width());
        let value = trace.primitive.decode(head);

        self.index += 1;
        if self.index == schedule.len() {
            self.index = 0;
        }

        Left((trace, value, tail))
    }

    /// Consume a chunk, publishing every trace that can be completed, in
    /// order.
    ///
    /// Bytes carried over from earlier calls are decoded ahead of `r`. Bytes
    /// left over afterward replace them. Returns the number of traces
    /// published.
    pub fn advance(
        &mut self,
        schedule: &Schedule,
        r: &[u8],
        mut o: impl FnMut(&Trace, Value),
    ) -> usize {
        let buffer = if self.pending.is_empty() {
            Cow::Borrowed(r)
        } else {
            let mut buffer = Vec::with_capacity(self.pending.len() + r.len());
            buffer.extend_from_slice(&self.pending);
            buffer.extend_from_slice(r);
            Cow::Owned(buffer)
        };

        let mut count = 0;
        let mut rest = &*buffer;

        let remainder = loop {
            rest = match self.step(schedule, rest) {
                Left((trace, value, tail)) => {
                    o(trace, value);
                    count += 1;
                    tail
                }
                Right(remainder) => break remainder,
            };
        };

        self.pending = remainder.to_vec();

        count
    }
}
