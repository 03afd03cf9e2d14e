//! The buffering relay.
//!
//! Parameter declarations have to appear before the document body, but which
//! parameters are referenced is only known once the body has been rendered.
//! [`BufferedWriter`] solves this by rendering into memory first: every call
//! is forwarded to an inner [`TextWriter`] over a `Vec<u8>`, and only `end`
//! touches the real destination, writing the notation's declarations for the
//! matched parameters followed by the buffered body.
//!
//! Nothing reaches the destination when the inner writer recorded an error.
//! The destination is borrowed or owned by the caller and never closed here.
//!
//! ## Examples
//!
//! ```rust
//! use paramdoc::notation::LetBinding;
//! use paramdoc::{BufferedWriter, Params, StructuredWriter};
//!
//! let params: Params = [("color", "teal")].into_iter().collect();
//! let mut out = Vec::new();
//! let mut writer = BufferedWriter::new(&mut out, LetBinding, &params);
//! writer.begin();
//! writer.key_string("color", "teal");
//! writer.end();
//! assert!(writer.error().is_none());
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "let color = params.color; // \"teal\";\n\n{\n  \"color\": color\n}\n"
//! );
//! ```

use crate::notation::Notation;
use crate::params::{Matched, Params};
use crate::text::TextWriter;
use crate::writer::{Emit, StructuredWriter};
use crate::Error;
use std::io;

/// Renders into memory and delivers the finished document on `end`.
pub struct BufferedWriter<W, N> {
    inner: TextWriter<Vec<u8>>,
    sink: W,
    notation: N,
    error: Option<Error>,
}

impl<W: io::Write, N: Notation> BufferedWriter<W, N> {
    /// Prepares a relay for one document. Substitution is enabled only when
    /// the notation supports parameter references.
    pub fn new(sink: W, notation: N, params: &Params) -> Self {
        let buffer = Vec::with_capacity(256);
        let inner = if notation.substitutes() {
            TextWriter::with_params(buffer, params)
        } else {
            TextWriter::new(buffer)
        };
        BufferedWriter {
            inner,
            sink,
            notation,
            error: None,
        }
    }

    /// Parameters referenced so far, in discovery order.
    #[must_use]
    pub fn matched(&self) -> &Matched {
        self.inner.matched()
    }

    /// The body rendered so far, without declarations.
    #[must_use]
    pub fn buffered(&self) -> &[u8] {
        self.inner.get_ref()
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn flush(&mut self) {
        let mut preamble = String::new();
        for (name, value) in self.inner.matched().iter() {
            self.notation.declare(&mut preamble, name, value);
            preamble.push('\n');
        }
        if !preamble.is_empty() {
            preamble.push('\n');
        }

        let body = self.inner.get_ref();
        tracing::debug!(
            "flushing {} document: {} declarations, {} body bytes",
            self.notation.name(),
            self.inner.matched().len(),
            body.len()
        );

        if let Err(err) = deliver(&mut self.sink, preamble.as_bytes(), body) {
            tracing::debug!("delivering document failed: {}", err);
            self.error = Some(Error::from(err));
        }
    }
}

fn deliver<W: io::Write>(sink: &mut W, preamble: &[u8], body: &[u8]) -> io::Result<()> {
    sink.write_all(preamble)?;
    sink.write_all(body)?;
    sink.flush()
}

impl<W: io::Write, N: Notation> StructuredWriter for BufferedWriter<W, N> {
    fn begin(&mut self) {
        self.inner.begin();
    }

    fn end(&mut self) {
        self.inner.end();
        if self.error().is_none() {
            self.flush();
        }
    }

    fn key_string(&mut self, key: &str, value: &str) {
        self.inner.key_string(key, value);
    }

    fn string(&mut self, value: &str, compact: bool) {
        self.inner.string(value, compact);
    }

    fn key_int(&mut self, key: &str, value: i64) {
        self.inner.key_int(key, value);
    }

    fn key_float(&mut self, key: &str, value: f64) {
        self.inner.key_float(key, value);
    }

    fn key_bool(&mut self, key: &str, value: bool) {
        self.inner.key_bool(key, value);
    }

    fn key_raw(&mut self, key: &str, fragment: &[u8], compact: bool) {
        self.inner.key_raw(key, fragment, compact);
    }

    fn int(&mut self, value: i64) {
        self.inner.int(value);
    }

    fn float(&mut self, value: f64) {
        self.inner.float(value);
    }

    fn bool(&mut self, value: bool) {
        self.inner.bool(value);
    }

    fn raw(&mut self, fragment: &[u8], compact: bool) {
        self.inner.raw(fragment, compact);
    }

    fn begin_block(&mut self, key: Option<&str>, title: Option<&str>) {
        self.inner.begin_block(key, title);
    }

    fn end_block(&mut self) {
        self.inner.end_block();
    }

    fn begin_list(&mut self, key: Option<&str>) {
        self.inner.begin_list(key);
    }

    fn end_list(&mut self) {
        self.inner.end_list();
    }

    fn nested(&mut self, value: &dyn Emit) {
        // Emit through the relay so the value sees the same writer its
        // caller does.
        if self.error().is_none() {
            value.emit(self);
        }
    }

    fn error(&self) -> Option<&Error> {
        self.inner.error().or(self.error.as_ref())
    }
}
