use std::{cell::RefCell, fs, path::Path, rc::Rc};

use csv::ReaderBuilder;
use freewheel::{
    avec::{
        Decoder, TraceDecoder,
        config::{DecoderConfig, TraceDecoderConfig},
    },
    sans::primitive::Value,
};

const CONFIG: &str = "fixtures/telemetry.json";
const PORT_1: &str = "fixtures/port1.bin";
const PORT_2: &str = "fixtures/port2.bin";

#[test]
fn decode_whole_stream() {
    let data = fs::read(PORT_1).unwrap();
    let (mut decoder, received) = build();

    decoder.software_event(1, &data);

    Validator::new(PORT_1).validate(&received.borrow());
    assert_eq!(decoder.pending(1), Some(&[1, 2, 3][..]));
}

#[test]
fn decode_fixed_chunks() {
    let data = fs::read(PORT_2).unwrap();

    for size in 1..=40 {
        let (mut decoder, received) = build();

        for chunk in data.chunks(size) {
            decoder.software_event(2, chunk);
        }

        Validator::new(PORT_2).validate(&received.borrow());
        assert_eq!(decoder.pending(2), Some(&[][..]), "chunk size {size}");
        assert_eq!(decoder.trace_index(2), Some(0), "chunk size {size}");
    }
}

#[test]
fn decode_irregular_chunks() {
    let data = fs::read(PORT_1).unwrap();
    let (mut decoder, received) = build();

    let mut r = &data[..];
    for size in [1, 5, 2, 13, 7, 0, 8, 3].into_iter().cycle() {
        if r.is_empty() {
            break;
        }
        let (chunk, rest) = r.split_at(size.min(r.len()));
        decoder.software_event(1, chunk);
        r = rest;
    }

    Validator::new(PORT_1).validate(&received.borrow());
    assert_eq!(decoder.pending(1), Some(&[1, 2, 3][..]));
}

#[test]
fn decode_interleaved_ports() {
    let data_1 = fs::read(PORT_1).unwrap();
    let data_2 = fs::read(PORT_2).unwrap();
    let (mut decoder, received) = build();

    let mut chunks_1 = data_1.chunks(7);
    let mut chunks_2 = data_2.chunks(11);

    loop {
        let (a, b) = (chunks_1.next(), chunks_2.next());
        if a.is_none() && b.is_none() {
            break;
        }
        if let Some(a) = a {
            decoder.software_event(1, a);
        }
        decoder.software_event(3, &[0xFF; 5]);
        if let Some(b) = b {
            decoder.software_event(2, b);
        }
    }

    let received = received.borrow();
    let ids_1 = trace_ids(&decoder, 1);

    let (port_1, port_2): (Vec<_>, Vec<_>) = received
        .iter()
        .cloned()
        .partition(|(_, id)| ids_1.contains(id));

    Validator::new(PORT_1).validate(&port_1);
    Validator::new(PORT_2).validate(&port_2);
    assert_eq!(decoder.pending(3), None);
}

#[cfg(feature = "std")]
#[test]
fn decode_reader() {
    let mut file = fs::File::open(PORT_2).unwrap();
    let (mut decoder, received) = build();

    let n = freewheel::avec::decode_reader(&mut file, 2, &mut decoder).unwrap();

    assert_eq!(n, fs::metadata(PORT_2).unwrap().len() as usize);
    Validator::new(PORT_2).validate(&received.borrow());
}

type Received = Rc<RefCell<Vec<(Value, String)>>>;

fn build() -> (TraceDecoder, Received) {
    let _ = env_logger::builder().is_test(true).try_init();

    let config: DecoderConfig<TraceDecoderConfig> =
        serde_json::from_str(&fs::read_to_string(CONFIG).unwrap()).unwrap();

    let received = Received::default();
    let sink = received.clone();

    let decoder = TraceDecoder::new(config, |_: &str| {}, move |value: Value, id: &str| {
        sink.borrow_mut().push((value, id.to_string()))
    })
    .unwrap();

    (decoder, received)
}

fn trace_ids(decoder: &TraceDecoder, port: u32) -> Vec<String> {
    let schedule = decoder.schedule(port).unwrap();
    schedule.traces().iter().map(|t| t.graph_id.clone()).collect()
}

/// Expected `(graph id, value)` rows for a stream.
struct Validator(Vec<Vec<String>>);

impl Validator {
    fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().with_extension("csv");

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();

        let expected = reader
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect();

        Self(expected)
    }

    fn validate(&self, received: &[(Value, String)]) {
        assert_eq!(received.len(), self.0.len());

        for ((value, id), expected) in received.iter().zip(&self.0) {
            assert_eq!(id, &expected[0]);
            assert_eq!(value.to_string(), expected[1], "{id}");
        }
    }
}
