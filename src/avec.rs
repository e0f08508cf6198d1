//! Convenience interfaces for decoding trace streams.
//!
//! [`TraceDecoder`] owns a schedule and cursor for every configured port,
//! publishing decoded values to a [`GraphSink`]. It implements [`Decoder`],
//! the interface shared with other decoders driven by the same transport.
//!
//! For data already held in memory, [`decode_slice`] decodes a whole slice
//! against a single schedule. With the `std` feature, [`decode_reader`] feeds
//! a decoder port from any `std::io::Read` source.

use alloc::boxed::Box;

use crate::sans::primitive::Value;

pub mod config;
pub mod decoder;
#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

pub use decoder::{DEFAULT_LABEL, TraceDecoder};
#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;

use config::DecoderConfig;

/// Receive decoded values for graphing.
///
/// Implemented for any `FnMut(Value, &str)` closure.
pub trait GraphSink {
    /// Receive a decoded value, with the graph identifier of its trace.
    fn graph(&mut self, value: Value, id: &str);
}

impl<F: FnMut(Value, &str)> GraphSink for F {
    fn graph(&mut self, value: Value, id: &str) {
        self(value, id)
    }
}

/// Receive formatted text output.
///
/// Implemented for any `FnMut(&str)` closure.
pub trait OutputSink {
    fn output(&mut self, text: &str);
}

impl<F: FnMut(&str)> OutputSink for F {
    fn output(&mut self, text: &str) {
        self(text)
    }
}

/// A decoder driven by a chunk transport.
///
/// Calls for one port must be made in arrival order, and never concurrently.
pub trait Decoder {
    /// Decoder-specific configuration payload.
    type Config;
    /// An error rejecting a configuration.
    type Error;

    /// Configure the decoder, replacing all earlier state.
    fn init(
        &mut self,
        config: DecoderConfig<Self::Config>,
        output: Box<dyn OutputSink>,
        graph: Box<dyn GraphSink>,
    ) -> Result<(), Self::Error>;

    /// The configured category tag.
    fn type_name(&self) -> &str;

    /// The label shown alongside this decoder's output.
    fn output_label(&self) -> &str;

    /// Consume a chunk of bytes received on a port.
    fn software_event(&mut self, port: u32, r: &[u8]);

    /// The transport acquired synchronization. Ignored by default.
    fn synchronized(&mut self) {}

    /// The transport lost synchronization. Ignored by default.
    fn lost_synchronization(&mut self) {}
}
