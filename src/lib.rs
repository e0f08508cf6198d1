#![no_std]

//! A resumable decoder for cyclic streams of fixed-width trace values.
//!
//! Freewheel reads byte chunks arriving over numbered ports and interprets
//! each port's stream as a repeating schedule of fixed-width fields
//! ("traces"). Values are published as soon as enough bytes have arrived, and
//! fields straddling chunk boundaries are carried over to the next chunk, so
//! output never depends on how the stream was split.
//!
//! Most users should begin with [`avec::TraceDecoder`], configured from a
//! [`avec::config::DecoderConfig`]. Applications needing finer control (for
//! example, managing their own port table) can drive the underlying state
//! machine in the [`sans`] module directly.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoding (default).

extern crate alloc;

pub mod avec;
pub mod sans;
