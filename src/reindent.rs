//! Re-indentation of pre-encoded JSON fragments.
//!
//! Raw fragments arrive as opaque bytes, often on a single line. Before they
//! are spliced into a pretty document they are laid out again: one element per
//! line, two spaces per nesting step, all lines after the first prefixed with
//! the indentation of the depth they are inserted at.
//!
//! Malformed fragments are reported as errors so the caller can insert them
//! verbatim instead.

use serde::de::IgnoredAny;

/// Lays `fragment` out for insertion at `depth`.
///
/// # Errors
///
/// Returns the parse error when `fragment` is not a single well-formed JSON value.
///
/// # Examples
///
/// ```rust
/// use paramdoc::reindent::reindent;
///
/// let out = reindent(br#"{"a":[1,2]}"#, 1).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "{\n    \"a\": [\n      1,\n      2\n    ]\n  }"
/// );
/// ```
pub fn reindent(fragment: &[u8], depth: usize) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::from_slice::<IgnoredAny>(fragment)?;

    let prefix = depth * 2;
    let mut out = Vec::with_capacity(fragment.len() + fragment.len() / 2);
    let mut level = 0usize;
    let mut need_indent = false;
    let mut in_string = false;
    let mut escaped = false;

    for &c in fragment {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == b'\\' {
                escaped = true;
            } else if c == b'"' {
                in_string = false;
            }
            continue;
        }

        if matches!(c, b' ' | b'\t' | b'\n' | b'\r') {
            continue;
        }

        if need_indent && c != b']' && c != b'}' {
            need_indent = false;
            level += 1;
            newline(&mut out, prefix, level);
        }

        match c {
            b'"' => {
                in_string = true;
                out.push(c);
            }
            b'{' | b'[' => {
                // The newline is deferred so empty composites stay `{}` / `[]`.
                need_indent = true;
                out.push(c);
            }
            b',' => {
                out.push(c);
                newline(&mut out, prefix, level);
            }
            b':' => {
                out.push(c);
                out.push(b' ');
            }
            b'}' | b']' => {
                if need_indent {
                    need_indent = false;
                } else {
                    level = level.saturating_sub(1);
                    newline(&mut out, prefix, level);
                }
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

fn newline(out: &mut Vec<u8>, prefix: usize, level: usize) {
    out.push(b'\n');
    out.resize(out.len() + prefix + level * 2, b' ');
}
