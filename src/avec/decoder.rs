//! Multi-port trace decoder.

use alloc::{boxed::Box, collections::BTreeMap, string::String};

use log::{debug, info, trace};

use crate::sans::{cursor::Cursor, primitive::Value, schedule::Schedule};

use super::{
    Decoder, GraphSink, OutputSink,
    config::{ConfigError, DecoderConfig, TraceDecoderConfig},
};

/// Output label used when none is configured.
pub const DEFAULT_LABEL: &str = "TraceDecoder";

struct Port {
    schedule: Schedule,
    cursor: Cursor,
}

/// Decode cyclic trace schedules from chunks arriving on numbered ports.
///
/// Each configured port is decoded independently. Chunks for ports without a
/// schedule are discarded.
///
/// # Example
///
/// ```
/// let config = serde_json::from_str(CONFIG)?;
/// let mut decoder = TraceDecoder::new(config, |_: &str| {}, |value, id: &str| {
///     println!("{id}: {value}");
/// })?;
///
/// decoder.software_event(1, &[0x2A, 0x00, 0x00]);
/// decoder.software_event(1, &[0x00, 0x00, 0x3F]);
/// ```
pub struct TraceDecoder {
    type_name: String,
    label: Option<String>,
    ports: BTreeMap<u32, Port>,
    graph: Box<dyn GraphSink>,
    // Held but never called: traces are only graphed.
    _output: Box<dyn OutputSink>,
}

impl Default for TraceDecoder {
    /// An unconfigured decoder, discarding all chunks.
    fn default() -> Self {
        Self {
            type_name: String::new(),
            label: None,
            ports: BTreeMap::new(),
            graph: Box::new(|_: Value, _: &str| {}),
            _output: Box::new(|_: &str| {}),
        }
    }
}

impl TraceDecoder {
    /// Build a configured decoder.
    pub fn new(
        config: DecoderConfig<TraceDecoderConfig>,
        output: impl OutputSink + 'static,
        graph: impl GraphSink + 'static,
    ) -> Result<Self, ConfigError> {
        let mut decoder = Self::default();
        decoder.init(config, Box::new(output), Box::new(graph))?;
        Ok(decoder)
    }

    /// Bytes carried over on a port, if it is configured.
    pub fn pending(&self, port: u32) -> Option<&[u8]> {
        self.ports.get(&port).map(|p| p.cursor.pending())
    }

    /// Index of the next expected trace on a port, if it is configured.
    pub fn trace_index(&self, port: u32) -> Option<usize> {
        self.ports.get(&port).map(|p| p.cursor.index())
    }

    /// The schedule of a port, if it is configured.
    pub fn schedule(&self, port: u32) -> Option<&Schedule> {
        self.ports.get(&port).map(|p| &p.schedule)
    }
}

impl Decoder for TraceDecoder {
    type Config = TraceDecoderConfig;
    type Error = ConfigError;

    /// Configure the decoder, discarding every cursor and carried-over byte
    /// from an earlier configuration.
    ///
    /// On error, the earlier configuration is kept.
    fn init(
        &mut self,
        config: DecoderConfig<TraceDecoderConfig>,
        output: Box<dyn OutputSink>,
        graph: Box<dyn GraphSink>,
    ) -> Result<(), ConfigError> {
        let ports = config
            .config
            .schedules()?
            .into_iter()
            .map(|(port, schedule)| {
                let cursor = Cursor::new();
                (port, Port { schedule, cursor })
            })
            .collect::<BTreeMap<_, _>>();

        info!(
            "Configured {} decoder with {} ports.",
            config.type_name,
            ports.len()
        );

        *self = Self {
            type_name: config.type_name,
            label: config.config.label,
            ports,
            graph,
            _output: output,
        };

        Ok(())
    }

    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn output_label(&self) -> &str {
        self.label.as_deref().unwrap_or(DEFAULT_LABEL)
    }

    fn software_event(&mut self, port: u32, r: &[u8]) {
        let Some(Port { schedule, cursor }) = self.ports.get_mut(&port) else {
            debug!("Discarding {} bytes for unconfigured port {port}.", r.len());
            return;
        };

        let graph = &mut self.graph;

        cursor.advance(schedule, r, |t, value| {
            trace!("Port {port}: {} = {value}", t.graph_id);
            graph.graph(value, &t.graph_id);
        });

        trace!("Port {port}: {} bytes pending.", cursor.pending().len());
    }

    fn synchronized(&mut self) {
        debug!("Synchronized.");
    }

    fn lost_synchronization(&mut self) {
        debug!("Lost synchronization.");
    }
}
