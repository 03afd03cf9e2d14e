use paramdoc::{
    doc, to_fragment, to_string, to_string_with_options, to_value, to_writer, write_document,
    Emit, Error, Format, Options, StructuredWriter, TextWriter, Value,
};
use serde::Serialize;
use std::io;

#[derive(Serialize)]
struct Target {
    expr: String,
    interval: Option<String>,
}

#[derive(Serialize)]
struct Panel {
    title: String,
    span: u32,
    datasource: String,
    targets: Vec<Target>,
}

/// Hand-written producer using titled blocks, raw fragments and nested delegation.
struct Folder {
    name: String,
    uid: String,
    panels: Vec<String>,
    layout: Vec<u8>,
    settings: Value,
}

impl Emit for Folder {
    fn emit(&self, out: &mut dyn StructuredWriter) {
        out.begin_block(Some("folder"), Some(&self.uid));
        out.key_string("name", &self.name);
        out.begin_list(Some("panels"));
        for panel in &self.panels {
            out.string(panel, true);
        }
        out.end_list();
        out.end_block();
        out.key_raw("layout", &self.layout, false);
        out.begin_block(Some("settings"), None);
        out.nested(&self.settings);
        out.end_block();
    }
}

fn folder() -> Folder {
    Folder {
        name: "Ops".to_string(),
        uid: "ops-1".to_string(),
        panels: vec!["cpu".to_string(), "mem".to_string(), "disk".to_string()],
        layout: br#"{"rows":[{"h":8}]}"#.to_vec(),
        settings: doc!({ "theme": "dark", "shared": true }),
    }
}

#[test]
fn test_hand_written_producer() {
    let text = to_string(&folder()).unwrap();
    let expected = concat!(
        "{\n",
        "  \"folder\": {\n",
        "    \"ops-1\": {\n",
        "      \"name\": \"Ops\",\n",
        "      \"panels\": [\n",
        "        \"cpu\", \"mem\", \"disk\"\n",
        "      ]\n",
        "    }\n",
        "  },\n",
        "  \"layout\": {\n",
        "    \"rows\": [\n",
        "      {\n",
        "        \"h\": 8\n",
        "      }\n",
        "    ]\n",
        "  },\n",
        "  \"settings\": {\n",
        "    \"shared\": true,\n",
        "    \"theme\": \"dark\"\n",
        "  }\n",
        "}\n",
    );
    assert_eq!(text, expected);
}

#[test]
fn test_hand_written_producer_is_valid_json() {
    let text = to_string(&folder()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["folder"]["ops-1"]["panels"][2], "disk");
    assert_eq!(parsed["layout"]["rows"][0]["h"], 8);
}

#[test]
fn test_nested_serde_structs() {
    let panel = Panel {
        title: "Latency".to_string(),
        span: 6,
        datasource: "prometheus".to_string(),
        targets: vec![
            Target {
                expr: "histogram_quantile(0.99, rate(x[5m]))".to_string(),
                interval: None,
            },
            Target {
                expr: "up".to_string(),
                interval: Some("1m".to_string()),
            },
        ],
    };
    let value = to_value(&panel).unwrap();
    let text = to_string(&value).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, serde_json::to_value(&panel).unwrap());
}

#[test]
fn test_empty_root() {
    assert_eq!(to_string(&doc!({})).unwrap(), "{\n}\n");

    let options = Options::new()
        .with_format(Format::LetBinding)
        .with_param("color", "teal");
    assert_eq!(to_string_with_options(&doc!({}), &options).unwrap(), "{\n}\n");
}

#[test]
fn test_idempotent_output() {
    let value = to_value(&folder().settings).unwrap();
    let options = Options::new()
        .with_format(Format::ExtVar)
        .with_param("mode", "dark");
    let first = to_string_with_options(&value, &options).unwrap();
    let second = to_string_with_options(&value, &options).unwrap();
    assert_eq!(first, second);

    let a = to_string(&folder()).unwrap();
    let b = to_string(&folder()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_compact_raw_fragment() {
    let mut map = paramdoc::Map::new();
    map.insert("v".to_string(), Value::raw("[1,2,3]", true));
    assert_eq!(
        to_string(&Value::Object(map)).unwrap(),
        "{\n  \"v\": [1,2,3]\n}\n"
    );
}

#[test]
fn test_malformed_raw_fragment_does_not_abort() {
    let mut map = paramdoc::Map::new();
    map.insert("a".to_string(), Value::raw("{\"half\": [1,", false));
    map.insert("b".to_string(), Value::from(2));
    let text = to_string(&Value::Object(map)).unwrap();
    assert_eq!(text, "{\n  \"a\": {\"half\": [1,,\n  \"b\": 2\n}\n");
}

#[test]
fn test_fragment_is_single_line() {
    let fragment = to_fragment(&folder()).unwrap();
    assert!(!fragment.contains(&b'\n'));
    let parsed: serde_json::Value = serde_json::from_slice(&fragment).unwrap();
    assert_eq!(parsed["settings"]["theme"], "dark");
}

/// Accepts a fixed number of bytes, then refuses everything.
struct LimitedSink {
    written: Vec<u8>,
    limit: usize,
}

impl io::Write for LimitedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() + buf.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "disk full"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_sticky_error_keeps_partial_output() {
    let mut writer = TextWriter::new(LimitedSink {
        written: Vec::new(),
        limit: 21,
    });
    writer.begin();
    writer.key_string("a", "1");
    writer.key_string("b", "a value that does not fit");
    let original = writer.error().cloned().unwrap();

    let partial = writer.get_ref().written.clone();
    writer.key_string("c", "more");
    writer.end();

    assert_eq!(writer.get_ref().written, partial);
    assert_eq!(writer.error(), Some(&original));
    assert_eq!(String::from_utf8(partial).unwrap(), "{\n  \"a\": \"1\",\n  \"b\": ");
}

#[test]
fn test_write_document_reports_sticky_error() {
    let mut writer = TextWriter::new(LimitedSink {
        written: Vec::new(),
        limit: 4,
    });
    let err = write_document(&mut writer, &doc!({ "key": "value" })).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_to_writer_does_not_close_sink() {
    let mut out = Vec::new();
    to_writer(&mut out, &doc!({ "a": 1 })).unwrap();
    to_writer(&mut out, &doc!({ "b": 2 })).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "{\n  \"a\": 1\n}\n{\n  \"b\": 2\n}\n"
    );
}

#[test]
fn test_non_object_root_writes_nothing() {
    let mut out = Vec::new();
    let result = to_writer(&mut out, &doc!([1, 2]));
    assert!(matches!(result, Err(Error::UnsupportedType(_))));
    assert!(out.is_empty());
}
