//! Output format reference
//!
//! This module documents the text produced by the writers in this crate.
//! It contains no code.
//!
//! # Document body
//!
//! Every document is a single root object rendered as JSON text:
//!
//! ```text
//! {
//!   "name": "x",
//!   "panels": [
//!     "cpu", "mem"
//!   ],
//!   "layout": {
//!     "span": 4
//!   },
//!   "empty": {}
//! }
//! ```
//!
//! **Rules**:
//! - Indentation is two spaces per nesting level
//! - Every element except the first at a level is preceded by `,` and a newline
//! - Keys and strings are double-quoted with `\"`, `\\`, `\n`, `\r`, `\t`,
//!   `\b`, `\f` and `\u00XX` escapes
//! - Blocks and lists without elements close on the same line: `{}`, `[]`
//! - The root always closes with a newline, `}` and a trailing newline, so an
//!   empty document is `{` newline `}` newline
//! - Keys of generic value trees are emitted in sorted order
//! - Floats that are not finite are written as `null`
//!
//! ## Compact strings
//!
//! Unnamed strings emitted as compact follow the previous element with `, `
//! instead of a line break. Generic value trees use this for arrays that only
//! hold strings.
//!
//! ## Raw fragments
//!
//! Pre-encoded fragments are inserted byte for byte. A compact fragment stays
//! exactly as given:
//!
//! ```text
//! "v": [1,2,3]
//! ```
//!
//! Other fragments are re-laid out to the depth they are inserted at. A
//! fragment that is not well-formed JSON is inserted unchanged instead.
//!
//! ## Titled blocks
//!
//! A block opened with a key and a title nests the title as a second key:
//!
//! ```text
//! "panel": {
//!   "cpu": {
//!     "span": 4
//!   }
//! }
//! ```
//!
//! # Parameter references
//!
//! In parameterised notations a string scalar equal to a parameter's literal
//! value is written as the bare parameter name:
//!
//! ```text
//! "color": color
//! ```
//!
//! Only strings are replaced. Integers, floats and booleans are always
//! written as literals, even when their text equals a parameter's value.
//!
//! # Declarations
//!
//! Each referenced parameter is declared once, in the order it was first
//! referenced, before the body. A blank line separates the declarations from
//! the body; without references the body starts on the first line.
//!
//! | Notation | Suffixes | Declaration |
//! |----------|----------|-------------|
//! | Plain | anything else, stdout | none |
//! | ExtVar | `.notationA`, `.libnotationA` | `local color = extvar(color); // "teal";` |
//! | LetBinding | `.notationB` | `let color = params.color; // "teal";` |
//! | Module | `.notationC-script`, `.notationC-alt` | `export const color = params.color; // "teal";` |
//!
//! # Inline mode
//!
//! [`to_fragment`](crate::to_fragment) renders without newlines or
//! indentation, separating elements with `, `:
//!
//! ```text
//! {"a": "x", "b": [1, 2]}
//! ```
