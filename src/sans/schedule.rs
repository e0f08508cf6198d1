//! Ordered, cyclic lists of traces.

use alloc::{string::String, vec::Vec};
use core::ops::Index;

use serde::{Deserialize, Serialize};

use super::primitive::Primitive;

/// A single fixed-width field within a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trace {
    /// The kind of the field.
    pub primitive: Primitive,
    /// Identifier published alongside each decoded value.
    pub graph_id: String,
}

impl Trace {
    pub fn new(primitive: Primitive, graph_id: impl Into<String>) -> Self {
        Self {
            primitive,
            graph_id: graph_id.into(),
        }
    }
}

/// The traces expected on a port, in order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule(Vec<Trace>);

impl Schedule {
    /// Build a schedule, if at least one trace is supplied.
    pub fn new(traces: Vec<Trace>) -> Option<Self> {
        if traces.is_empty() {
            None
        } else {
            Some(Self(traces))
        }
    }

    /// Number of traces in one cycle. Always at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Total width in bytes of one full cycle.
    pub fn cycle_width(&self) -> usize {
        self.0.iter().map(|t| t.primitive.width()).sum()
    }

    pub fn traces(&self) -> &[Trace] {
        &self.0
    }
}

impl Index<usize> for Schedule {
    type Output = Trace;

    fn index(&self, i: usize) -> &Trace {
        &self.0[i]
    }
}
