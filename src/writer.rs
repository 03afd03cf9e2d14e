//! The structural writer contract.
//!
//! Every backend in this crate implements [`StructuredWriter`]: the core
//! [`TextWriter`](crate::TextWriter), the buffering
//! [`BufferedWriter`](crate::BufferedWriter) and, through it, every notation
//! adapter. Producers describe a value tree by issuing calls in a fixed order:
//!
//! 1. [`begin`](StructuredWriter::begin) opens the root block.
//! 2. Keyed composites open a block with their key, emit children in sorted
//!    key order, then close the block.
//! 3. Ordered composites open a list, emit each element (composite elements
//!    wrapped in an unnamed block or list) and close it.
//! 4. [`end`](StructuredWriter::end) closes the root block.
//!
//! Calls never return errors. A failed sink write is stored once and later
//! calls do nothing; producers check [`error`](StructuredWriter::error) after
//! `end`. Unbalanced begin/end pairs are a producer bug and only corrupt the
//! layout, they are not reported.
//!
//! ## Examples
//!
//! ```rust
//! use paramdoc::{StructuredWriter, TextWriter};
//!
//! let mut out = Vec::new();
//! let mut writer = TextWriter::new(&mut out);
//! writer.begin();
//! writer.key_string("name", "x");
//! writer.begin_list(Some("tags"));
//! writer.string("a", true);
//! writer.string("b", true);
//! writer.end_list();
//! writer.end();
//! assert!(writer.error().is_none());
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "{\n  \"name\": \"x\",\n  \"tags\": [\n    \"a\", \"b\"\n  ]\n}\n"
//! );
//! ```

use crate::Error;

/// Capability set shared by every serialization backend.
pub trait StructuredWriter {
    /// Opens the document root block.
    fn begin(&mut self);

    /// Closes the document root block. Buffering backends deliver the
    /// finished document to their destination here.
    fn end(&mut self);

    /// Emits `"key": "value"`, or a parameter reference when `value` matches one.
    fn key_string(&mut self, key: &str, value: &str);

    /// Emits an unnamed string element. `compact` keeps it on the line of the
    /// previous element, separated by `", "`.
    fn string(&mut self, value: &str, compact: bool);

    fn key_int(&mut self, key: &str, value: i64);

    fn key_float(&mut self, key: &str, value: f64);

    fn key_bool(&mut self, key: &str, value: bool);

    /// Emits a fragment already encoded in the target notation. Unless
    /// `compact` is set the fragment is re-indented to the current depth.
    fn key_raw(&mut self, key: &str, fragment: &[u8], compact: bool);

    fn int(&mut self, value: i64);

    fn float(&mut self, value: f64);

    fn bool(&mut self, value: bool);

    /// Unnamed counterpart of [`key_raw`](StructuredWriter::key_raw).
    fn raw(&mut self, fragment: &[u8], compact: bool);

    /// Opens a block, keyed when `key` is given. A `title` adds a second,
    /// labelled level that the matching [`end_block`](StructuredWriter::end_block)
    /// closes as well.
    fn begin_block(&mut self, key: Option<&str>, title: Option<&str>);

    fn end_block(&mut self);

    fn begin_list(&mut self, key: Option<&str>);

    fn end_list(&mut self);

    /// Hands the writer to `value` so it can describe itself in place.
    fn nested(&mut self, value: &dyn Emit);

    /// The sticky error, if a sink write has failed.
    fn error(&self) -> Option<&Error>;
}

/// A value that can describe itself through a [`StructuredWriter`].
///
/// Implementations emit the *contents* of the block or list their caller has
/// already opened; they never call `begin` or `end` themselves.
///
/// # Examples
///
/// ```rust
/// use paramdoc::{to_string, Emit, StructuredWriter};
///
/// struct Panel {
///     title: String,
///     span: i64,
/// }
///
/// impl Emit for Panel {
///     fn emit(&self, out: &mut dyn StructuredWriter) {
///         out.key_int("span", self.span);
///         out.key_string("title", &self.title);
///     }
/// }
///
/// let panel = Panel { title: "CPU".to_string(), span: 4 };
/// let text = to_string(&panel).unwrap();
/// assert_eq!(text, "{\n  \"span\": 4,\n  \"title\": \"CPU\"\n}\n");
/// ```
pub trait Emit {
    fn emit(&self, out: &mut dyn StructuredWriter);

    /// Checks that `self` can stand as a document root. Value trees use this
    /// to reject scalars and lists before anything is written.
    fn check_root(&self) -> crate::Result<()> {
        Ok(())
    }
}

impl<T: Emit + ?Sized> Emit for &T {
    fn emit(&self, out: &mut dyn StructuredWriter) {
        (**self).emit(out)
    }

    fn check_root(&self) -> crate::Result<()> {
        (**self).check_root()
    }
}

impl<T: Emit + ?Sized> Emit for Box<T> {
    fn emit(&self, out: &mut dyn StructuredWriter) {
        (**self).emit(out)
    }

    fn check_root(&self) -> crate::Result<()> {
        (**self).check_root()
    }
}

/// Drives one full Begin…End cycle of `doc` through `out` and reports the
/// sticky error, if any.
///
/// # Errors
///
/// Returns the producer's root check failure without touching `out`, or the
/// first sink write failure.
pub fn write_document<D>(out: &mut dyn StructuredWriter, doc: &D) -> crate::Result<()>
where
    D: ?Sized + Emit,
{
    doc.check_root()?;
    out.begin();
    doc.emit(out);
    out.end();
    match out.error() {
        Some(err) => Err(err.clone()),
        None => Ok(()),
    }
}
