//! Internal finite-state machine for decoding trace streams.
//!
//! This module is intended for applications that need fine control over
//! decoder internals. See [`crate::avec`] for a decoder managing ports,
//! configuration and output for you.
//!
//! # Architecture
//!
//! A [`Schedule`](schedule::Schedule) is the ordered, non-empty list of
//! [`Trace`](schedule::Trace)s expected on one port. It repeats forever: after
//! the last trace, decoding continues with the first.
//!
//! A [`Cursor`](cursor::Cursor) tracks where a single port is within its
//! schedule, along with any bytes received but not yet sufficient to decode
//! the next trace. Feed it chunks in arrival order with
//! [`Cursor::advance`](cursor::Cursor::advance), or decode one field at a time
//! with [`Cursor::step`](cursor::Cursor::step).
//!
//! Widths and byte interpretation of each field kind live in
//! [`primitive`]. Some responsibilities remain with the caller:
//!
//! - Pairing each cursor with the schedule it was created for. A cursor used
//! with a shorter schedule than its own will panic.
//!
//! - Serializing calls per port. Cursors for different ports share nothing.

pub mod cursor;
pub mod primitive;
pub mod schedule;
