//! Configuration options for document rendering.
//!
//! - [`Format`]: the target notation, usually derived from the destination
//!   file name with [`Format::from_path`]
//! - [`Options`]: format plus the parameter table used for substitution
//!
//! ## Examples
//!
//! ```rust
//! use paramdoc::{doc, to_string_with_options, Format, Options};
//!
//! let value = doc!({ "color": "teal" });
//! let options = Options::new()
//!     .with_format(Format::ExtVar)
//!     .with_param("color", "teal");
//!
//! let text = to_string_with_options(&value, &options).unwrap();
//! assert_eq!(
//!     text,
//!     "local color = extvar(color); // \"teal\";\n\n{\n  \"color\": color\n}\n"
//! );
//! ```

use crate::Params;

/// Target notation of a document.
///
/// # Examples
///
/// ```rust
/// use paramdoc::Format;
///
/// assert_eq!(Format::from_path("dash.notationA"), Format::ExtVar);
/// assert_eq!(Format::from_path("dash.notationB"), Format::LetBinding);
/// assert_eq!(Format::from_path("dash.json"), Format::Plain);
/// assert_eq!(Format::from_path(""), Format::Plain);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Format {
    /// Plain structured-data text without substitution.
    #[default]
    Plain,
    /// Notation A, `local name = extvar(name);` declarations.
    ExtVar,
    /// Notation B, `let name = params.name;` declarations.
    LetBinding,
    /// Notation C, module-scoped `export const name = params.name;` declarations.
    Module,
}

const SUFFIXES: &[(&str, Format)] = &[
    (".notationA", Format::ExtVar),
    (".libnotationA", Format::ExtVar),
    (".notationC-script", Format::Module),
    (".notationC-alt", Format::Module),
    (".notationB", Format::LetBinding),
];

impl Format {
    /// Picks the notation from the destination's file-name suffix.
    ///
    /// Unknown suffixes and the empty path (standard output) select [`Format::Plain`].
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        SUFFIXES
            .iter()
            .find(|(suffix, _)| path.ends_with(suffix))
            .map(|(_, format)| *format)
            .unwrap_or_default()
    }

    /// Returns `true` if this notation replaces literals with parameter references.
    #[must_use]
    pub const fn substitutes(&self) -> bool {
        !matches!(self, Format::Plain)
    }
}

/// Options for one rendering call.
///
/// # Examples
///
/// ```rust
/// use paramdoc::{Format, Options};
///
/// let options = Options::new().for_path("out/dashboard.notationB");
/// assert_eq!(options.format, Format::LetBinding);
/// assert!(options.params.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Options {
    pub format: Format,
    pub params: Params,
}

impl Options {
    /// Creates plain-text options with an empty parameter table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Selects the format matching the destination path.
    #[must_use]
    pub fn for_path(self, path: &str) -> Self {
        self.with_format(Format::from_path(path))
    }

    /// Replaces the parameter table.
    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Adds a single parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name, value);
        self
    }
}
