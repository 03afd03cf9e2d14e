//! # paramdoc
//!
//! Renders in-memory value trees as JSON text or as one of three
//! configuration-language supersets of it, replacing literal strings that
//! equal a named parameter's value with a reference to that parameter.
//!
//! ## How it works
//!
//! A producer describes a document through the [`StructuredWriter`] contract
//! (begin, keyed scalars, blocks, lists, end). The core [`TextWriter`] turns
//! those calls into text and records which parameters it substituted. For
//! parameterised notations a [`BufferedWriter`] holds the body in memory until
//! `end`, then writes one declaration per referenced parameter followed by the
//! body, so declarations always precede their first use.
//!
//! ## Quick Start
//!
//! ```rust
//! use paramdoc::{doc, to_string, to_string_with_options, Format, Options};
//!
//! let dashboard = doc!({
//!     "name": "x",
//!     "color": "teal"
//! });
//!
//! // Plain text keeps every literal.
//! assert_eq!(
//!     to_string(&dashboard).unwrap(),
//!     "{\n  \"color\": \"teal\",\n  \"name\": \"x\"\n}\n"
//! );
//!
//! // A let-binding document declares `color` and references it.
//! let options = Options::new()
//!     .with_format(Format::LetBinding)
//!     .with_param("color", "teal");
//! assert_eq!(
//!     to_string_with_options(&dashboard, &options).unwrap(),
//!     "let color = params.color; // \"teal\";\n\n{\n  \"color\": color,\n  \"name\": \"x\"\n}\n"
//! );
//! ```
//!
//! ## Writing your own producers
//!
//! Any type can implement [`Emit`] by hand and call the writer directly;
//! serde types can go through [`to_value`] and reuse the generic [`Value`]
//! walker. See the [`format`] module for the exact output layout.
//!
//! ## Errors
//!
//! Rendering only fails when the destination refuses bytes. The failure is
//! kept as a sticky error: later calls become no-ops and the entry points in
//! this module return it once the document is finished.

pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod notation;
pub mod options;
pub mod params;
pub mod reindent;
pub mod relay;
pub mod ser;
pub mod text;
pub mod value;
pub mod writer;

pub use error::{Error, Result};
pub use map::Map;
pub use notation::{writer_for_format, writer_for_path, Notation};
pub use options::{Format, Options};
pub use params::{Matched, Params};
pub use relay::BufferedWriter;
pub use ser::{to_value, ValueSerializer};
pub use text::{Depth, Separator, TextWriter};
pub use value::{Number, OmitEmpty, Value};
pub use writer::{write_document, Emit, StructuredWriter};

use std::io;

/// Renders `doc` as plain JSON text.
///
/// # Examples
///
/// ```rust
/// use paramdoc::{to_string, Value, Map};
///
/// assert_eq!(to_string(&Value::Object(Map::new())).unwrap(), "{\n}\n");
/// ```
///
/// # Errors
///
/// Returns an error if `doc` cannot stand as a document root.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<D>(doc: &D) -> Result<String>
where
    D: ?Sized + Emit,
{
    to_string_with_options(doc, &Options::default())
}

/// Renders `doc` in the format and with the parameters given in `options`.
///
/// # Errors
///
/// Returns an error if `doc` cannot stand as a document root.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<D>(doc: &D, options: &Options) -> Result<String>
where
    D: ?Sized + Emit,
{
    let mut out = Vec::with_capacity(256);
    to_writer_with_options(&mut out, doc, options)?;
    String::from_utf8(out).map_err(Error::custom)
}

/// Renders `doc` as plain JSON text into `writer`.
///
/// # Errors
///
/// Returns an error if `doc` cannot stand as a document root or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, D>(writer: W, doc: &D) -> Result<()>
where
    W: io::Write,
    D: ?Sized + Emit,
{
    to_writer_with_options(writer, doc, &Options::default())
}

/// Renders `doc` into `writer` in the format given in `options`.
///
/// Nothing is written before the whole document has been rendered. The
/// writer is not closed; pass `&mut file` to keep ownership of the handle.
///
/// # Examples
///
/// ```rust
/// use paramdoc::{doc, to_writer_with_options, Options};
///
/// let mut out = Vec::new();
/// let options = Options::new()
///     .for_path("dashboard.notationA")
///     .with_param("region", "eu-west-1");
/// to_writer_with_options(&mut out, &doc!({ "region": "eu-west-1" }), &options).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("local region = extvar(region);"));
/// ```
///
/// # Errors
///
/// Returns an error if `doc` cannot stand as a document root or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, D>(writer: W, doc: &D, options: &Options) -> Result<()>
where
    W: io::Write,
    D: ?Sized + Emit,
{
    let mut out = writer_for_format(options.format, writer, &options.params);
    write_document(out.as_mut(), doc)
}

/// Renders `doc` on a single line with no indentation.
///
/// The result is meant to be handed to another writer as a raw fragment,
/// for example through [`Value::raw`].
///
/// # Examples
///
/// ```rust
/// use paramdoc::{doc, to_fragment};
///
/// let fragment = to_fragment(&doc!({ "b": [1, 2], "a": "x" })).unwrap();
/// assert_eq!(fragment, br#"{"a": "x", "b": [1, 2]}"#);
/// ```
///
/// # Errors
///
/// Returns an error if `doc` cannot stand as a document root.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_fragment<D>(doc: &D) -> Result<Vec<u8>>
where
    D: ?Sized + Emit,
{
    let mut writer = TextWriter::inline(Vec::new());
    write_document(&mut writer, doc)?;
    Ok(writer.into_inner())
}
