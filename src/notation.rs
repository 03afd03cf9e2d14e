//! Notation adapters.
//!
//! Each adapter plugs into [`BufferedWriter`] and decides two things: whether
//! string literals may be replaced by parameter references at all, and how a
//! referenced parameter is declared ahead of the body.
//!
//! | Adapter | Declaration | Substitution |
//! |---|---|---|
//! | [`Plain`] | none | no |
//! | [`ExtVar`] | `local name = extvar(name); // "value";` | yes |
//! | [`LetBinding`] | `let name = params.name; // "value";` | yes |
//! | [`Module`] | `export const name = params.name; // "value";` | yes |
//!
//! Declarations come in discovery order, one per line, followed by a blank
//! line. Without matches the body starts on the first line.

use crate::options::Format;
use crate::params::Params;
use crate::relay::BufferedWriter;
use crate::text::escape_into;
use crate::writer::StructuredWriter;
use std::io;

/// Declaration syntax and substitution policy of a target notation.
pub trait Notation {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Whether literals may be replaced by parameter references.
    fn substitutes(&self) -> bool;

    /// Appends the declaration of `name` (standing for `value`) to `out`,
    /// without a trailing newline.
    fn declare(&self, out: &mut String, name: &str, value: &str);
}

/// Plain structured-data text. Literals are always written verbatim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Plain;

/// External-variable notation: parameters are read with `extvar`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtVar;

/// Let-binding notation: parameters are bound from a `params` record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LetBinding;

/// Named-module notation: parameters become exported module constants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Module;

impl Notation for Plain {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn substitutes(&self) -> bool {
        false
    }

    fn declare(&self, _out: &mut String, _name: &str, _value: &str) {}
}

impl Notation for ExtVar {
    fn name(&self) -> &'static str {
        "extvar"
    }

    fn substitutes(&self) -> bool {
        true
    }

    fn declare(&self, out: &mut String, name: &str, value: &str) {
        out.push_str("local ");
        out.push_str(name);
        out.push_str(" = extvar(");
        out.push_str(name);
        out.push_str("); // ");
        escape_into(out, value);
        out.push(';');
    }
}

impl Notation for LetBinding {
    fn name(&self) -> &'static str {
        "let-binding"
    }

    fn substitutes(&self) -> bool {
        true
    }

    fn declare(&self, out: &mut String, name: &str, value: &str) {
        out.push_str("let ");
        write_params_binding(out, name, value);
    }
}

impl Notation for Module {
    fn name(&self) -> &'static str {
        "module"
    }

    fn substitutes(&self) -> bool {
        true
    }

    fn declare(&self, out: &mut String, name: &str, value: &str) {
        out.push_str("export const ");
        write_params_binding(out, name, value);
    }
}

// `name = params.name; // "value";`
fn write_params_binding(out: &mut String, name: &str, value: &str) {
    out.push_str(name);
    out.push_str(" = params.");
    out.push_str(name);
    out.push_str("; // ");
    escape_into(out, value);
    out.push(';');
}

/// Builds the writer for `format`, delivering into `sink` on `end`.
///
/// # Examples
///
/// ```rust
/// use paramdoc::{writer_for_format, Format, Params, StructuredWriter};
///
/// let mut out = Vec::new();
/// let mut writer = writer_for_format(Format::Plain, &mut out, &Params::new());
/// writer.begin();
/// writer.end();
/// drop(writer);
/// assert_eq!(out, b"{\n}\n");
/// ```
pub fn writer_for_format<'a, W>(
    format: Format,
    sink: W,
    params: &Params,
) -> Box<dyn StructuredWriter + 'a>
where
    W: io::Write + 'a,
{
    match format {
        Format::Plain => Box::new(BufferedWriter::new(sink, Plain, params)),
        Format::ExtVar => Box::new(BufferedWriter::new(sink, ExtVar, params)),
        Format::LetBinding => Box::new(BufferedWriter::new(sink, LetBinding, params)),
        Format::Module => Box::new(BufferedWriter::new(sink, Module, params)),
    }
}

/// Builds the writer matching the file-name suffix of `path`.
///
/// See [`Format::from_path`] for the suffix table; anything unrecognised,
/// including an empty path for standard output, gets plain text.
pub fn writer_for_path<'a, W>(path: &str, sink: W, params: &Params) -> Box<dyn StructuredWriter + 'a>
where
    W: io::Write + 'a,
{
    writer_for_format(Format::from_path(path), sink, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaration<N: Notation>(notation: N, name: &str, value: &str) -> String {
        let mut out = String::new();
        notation.declare(&mut out, name, value);
        out
    }

    #[test]
    fn test_declarations() {
        assert_eq!(declaration(Plain, "color", "teal"), "");
        assert_eq!(
            declaration(ExtVar, "color", "teal"),
            "local color = extvar(color); // \"teal\";"
        );
        assert_eq!(
            declaration(LetBinding, "color", "teal"),
            "let color = params.color; // \"teal\";"
        );
        assert_eq!(
            declaration(Module, "color", "teal"),
            "export const color = params.color; // \"teal\";"
        );
    }

    #[test]
    fn test_declaration_escapes_value() {
        assert_eq!(
            declaration(LetBinding, "q", "say \"hi\""),
            "let q = params.q; // \"say \\\"hi\\\"\";"
        );
    }

    #[test]
    fn test_substitution_policy() {
        assert!(!Plain.substitutes());
        assert!(ExtVar.substitutes());
        assert!(LetBinding.substitutes());
        assert!(Module.substitutes());
    }

    #[test]
    fn test_writer_for_path_dispatch() {
        let params: Params = [("color", "teal")].into_iter().collect();
        let cases = [
            ("out.notationA", "local color"),
            ("out.libnotationA", "local color"),
            ("out.notationB", "let color"),
            ("out.notationC-script", "export const color"),
            ("out.notationC-alt", "export const color"),
        ];
        for (path, expected) in cases {
            let mut out = Vec::new();
            {
                let mut writer = writer_for_path(path, &mut out, &params);
                writer.begin();
                writer.key_string("color", "teal");
                writer.end();
                assert!(writer.error().is_none());
            }
            let text = String::from_utf8(out).unwrap();
            assert!(text.starts_with(expected), "{}: {}", path, text);
        }

        let mut out = Vec::new();
        {
            let mut writer = writer_for_path("", &mut out, &params);
            writer.begin();
            writer.key_string("color", "teal");
            writer.end();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"color\": \"teal\"\n}\n");
    }
}
