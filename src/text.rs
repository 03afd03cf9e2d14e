//! The core text state machine.
//!
//! [`TextWriter`] implements [`StructuredWriter`] directly on top of an
//! [`io::Write`] sink. It renders JSON-shaped text:
//!
//! - two spaces of indentation per nesting level
//! - `,` plus a newline before every element except the first at a depth
//! - keys and strings as escaped, double-quoted literals
//! - raw fragments inserted byte for byte, optionally re-indented
//!
//! When a parameter index is supplied, string scalars equal to a parameter's
//! literal are written as the bare parameter name and recorded in the
//! [`Matched`] set. Integers, floats and booleans are never substituted,
//! even when their text happens to equal a parameter literal.
//!
//! ## Sticky errors
//!
//! The first failed sink write is kept and every later call returns without
//! touching the sink, so whatever reached the sink before the failure stays
//! intact for diagnostics.
//!
//! ## Inline mode
//!
//! [`TextWriter::inline`] starts at [`Depth::Inline`], which suppresses all
//! newlines and indentation. It is used to render a value compactly so the
//! bytes can be handed to another writer as a raw fragment.

use crate::params::{Matched, Params};
use crate::reindent::reindent;
use crate::writer::{Emit, StructuredWriter};
use crate::Error;
use std::collections::HashMap;
use std::io;

/// Nesting depth of a [`TextWriter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Depth {
    /// No newlines and no indentation at any nesting level.
    Inline,
    /// Pretty layout at the given nesting level.
    Level(usize),
}

/// What has to precede the next element at the current depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Separator {
    First,
    Subsequent,
}

/// Renders structural calls as text into `W`.
pub struct TextWriter<W> {
    sink: W,
    depth: Depth,
    separator: Separator,
    // Levels opened by each begin call still open; titled blocks open two.
    frames: Vec<usize>,
    index: Option<HashMap<String, String>>,
    matched: Matched,
    error: Option<Error>,
}

impl<W: io::Write> TextWriter<W> {
    /// Creates a pretty writer without parameter substitution.
    pub fn new(sink: W) -> Self {
        TextWriter {
            sink,
            depth: Depth::Level(0),
            separator: Separator::First,
            frames: Vec::new(),
            index: None,
            matched: Matched::new(),
            error: None,
        }
    }

    /// Creates a pretty writer that replaces literals found in `params`
    /// with references to the parameter.
    pub fn with_params(sink: W, params: &Params) -> Self {
        TextWriter {
            index: Some(params.reverse_index()),
            ..Self::new(sink)
        }
    }

    /// Creates a single-line writer with indentation suppressed.
    pub fn inline(sink: W) -> Self {
        TextWriter {
            depth: Depth::Inline,
            ..Self::new(sink)
        }
    }

    #[must_use]
    pub fn depth(&self) -> Depth {
        self.depth
    }

    #[must_use]
    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// Parameters referenced so far, in discovery order.
    #[must_use]
    pub fn matched(&self) -> &Matched {
        &self.matched
    }

    #[must_use]
    pub fn substitutes(&self) -> bool {
        self.index.is_some()
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn write(&mut self, bytes: &[u8]) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.sink.write_all(bytes) {
            tracing::debug!("sink write failed, further output suppressed: {}", err);
            self.error = Some(Error::from(err));
        }
    }

    fn write_str(&mut self, s: &str) {
        self.write(s.as_bytes());
    }

    fn write_indent(&mut self, level: usize) {
        for _ in 0..level {
            self.write(b"  ");
        }
    }

    /// Writes whatever has to come before the next element and marks the
    /// depth as having content.
    fn element_prefix(&mut self, compact: bool) {
        match (self.depth, self.separator) {
            (Depth::Inline, Separator::First) => {}
            (Depth::Inline, Separator::Subsequent) => self.write(b", "),
            (Depth::Level(_), Separator::Subsequent) if compact => self.write(b", "),
            (Depth::Level(level), separator) => {
                if separator == Separator::Subsequent {
                    self.write(b",");
                }
                self.write(b"\n");
                self.write_indent(level);
            }
        }
        self.separator = Separator::Subsequent;
    }

    fn write_key(&mut self, key: &str) {
        self.write_quoted(key);
        self.write(b": ");
    }

    fn write_quoted(&mut self, s: &str) {
        let mut buf = String::with_capacity(s.len() + 2);
        escape_into(&mut buf, s);
        self.write_str(&buf);
    }

    /// Writes a string scalar, substituting a parameter reference on a hit.
    fn write_string_value(&mut self, value: &str) {
        let name = self
            .index
            .as_ref()
            .and_then(|index| index.get(value))
            .cloned();
        match name {
            Some(name) => {
                self.write_str(&name);
                if self.error.is_none() {
                    self.matched.record(&name, value);
                }
            }
            None => self.write_quoted(value),
        }
    }

    fn write_float(&mut self, value: f64) {
        if value.is_finite() {
            self.write_str(&value.to_string());
        } else {
            self.write(b"null");
        }
    }

    fn write_fragment(&mut self, fragment: &[u8], compact: bool) {
        let level = match self.depth {
            Depth::Level(level) if !compact => level,
            _ => {
                self.write(fragment);
                return;
            }
        };
        match reindent(fragment, level) {
            Ok(laid_out) => self.write(&laid_out),
            Err(err) => {
                tracing::warn!("raw fragment could not be re-indented, inserting verbatim: {}", err);
                self.write(fragment);
            }
        }
    }

    fn open(&mut self, delimiter: &[u8]) {
        self.write(delimiter);
        if let Depth::Level(level) = self.depth {
            self.depth = Depth::Level(level + 1);
        }
        self.separator = Separator::First;
    }

    fn close(&mut self, delimiter: &[u8]) {
        if let Depth::Level(level) = self.depth {
            let parent = level.saturating_sub(1);
            self.depth = Depth::Level(parent);
            if self.separator == Separator::Subsequent {
                self.write(b"\n");
                self.write_indent(parent);
            }
        }
        self.write(delimiter);
        self.separator = Separator::Subsequent;
    }
}

impl<W: io::Write> StructuredWriter for TextWriter<W> {
    fn begin(&mut self) {
        if self.error.is_some() {
            return;
        }
        self.open(b"{");
        self.frames.push(1);
    }

    fn end(&mut self) {
        if self.error.is_some() {
            return;
        }
        self.frames.pop();
        match self.depth {
            Depth::Inline => self.write(b"}"),
            Depth::Level(level) => {
                self.depth = Depth::Level(level.saturating_sub(1));
                self.write(b"\n}\n");
            }
        }
        self.separator = Separator::Subsequent;
    }

    fn key_string(&mut self, key: &str, value: &str) {
        if self.error.is_some() {
            return;
        }
        self.element_prefix(false);
        self.write_key(key);
        self.write_string_value(value);
    }

    fn string(&mut self, value: &str, compact: bool) {
        if self.error.is_some() {
            return;
        }
        self.element_prefix(compact);
        self.write_string_value(value);
    }

    fn key_int(&mut self, key: &str, value: i64) {
        if self.error.is_some() {
            return;
        }
        self.element_prefix(false);
        self.write_key(key);
        self.write_str(&value.to_string());
    }

    fn key_float(&mut self, key: &str, value: f64) {
        if self.error.is_some() {
            return;
        }
        self.element_prefix(false);
        self.write_key(key);
        self.write_float(value);
    }

    fn key_bool(&mut self, key: &str, value: bool) {
        if self.error.is_some() {
            return;
        }
        self.element_prefix(false);
        self.write_key(key);
        self.write_str(if value { "true" } else { "false" });
    }

    fn key_raw(&mut self, key: &str, fragment: &[u8], compact: bool) {
        if self.error.is_some() {
            return;
        }
        self.element_prefix(false);
        self.write_key(key);
        self.write_fragment(fragment, compact);
    }

    fn int(&mut self, value: i64) {
        if self.error.is_some() {
            return;
        }
        self.element_prefix(false);
        self.write_str(&value.to_string());
    }

    fn float(&mut self, value: f64) {
        if self.error.is_some() {
            return;
        }
        self.element_prefix(false);
        self.write_float(value);
    }

    fn bool(&mut self, value: bool) {
        if self.error.is_some() {
            return;
        }
        self.element_prefix(false);
        self.write_str(if value { "true" } else { "false" });
    }

    fn raw(&mut self, fragment: &[u8], compact: bool) {
        if self.error.is_some() {
            return;
        }
        self.element_prefix(false);
        self.write_fragment(fragment, compact);
    }

    fn begin_block(&mut self, key: Option<&str>, title: Option<&str>) {
        if self.error.is_some() {
            return;
        }
        self.element_prefix(false);
        if let Some(key) = key {
            self.write_key(key);
        }
        self.open(b"{");
        match title {
            Some(title) => {
                self.element_prefix(false);
                self.write_key(title);
                self.open(b"{");
                self.frames.push(2);
            }
            None => self.frames.push(1),
        }
    }

    fn end_block(&mut self) {
        if self.error.is_some() {
            return;
        }
        let levels = self.frames.pop().unwrap_or(1);
        for _ in 0..levels {
            self.close(b"}");
        }
    }

    fn begin_list(&mut self, key: Option<&str>) {
        if self.error.is_some() {
            return;
        }
        self.element_prefix(false);
        if let Some(key) = key {
            self.write_key(key);
        }
        self.open(b"[");
        self.frames.push(1);
    }

    fn end_list(&mut self) {
        if self.error.is_some() {
            return;
        }
        self.frames.pop();
        self.close(b"]");
    }

    fn nested(&mut self, value: &dyn Emit) {
        if self.error.is_some() {
            return;
        }
        value.emit(self);
    }

    fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }
}

/// Appends `s` to `out` as a double-quoted, escaped string literal.
///
/// # Examples
///
/// ```rust
/// let mut out = String::new();
/// paramdoc::text::escape_into(&mut out, "say \"hi\"\n");
/// assert_eq!(out, r#""say \"hi\"\n""#);
/// ```
pub fn escape_into(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            _ => out.push(ch),
        }
    }
    out.push('"');
}
