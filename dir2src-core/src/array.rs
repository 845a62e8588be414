//! Byte-array literal rendering
//!
//! Serializes file contents into the body of a `std::array<uint8_t, N>`
//! initializer. The layout is byte-exact and stable across runs so generated
//! sources stay diff-friendly and builds stay reproducible.

use std::fmt::Write as _;

/// Number of byte values rendered per line
pub const VALUES_PER_LINE: usize = 12;

/// Indentation prefix for each line of the literal
const LINE_INDENT: &str = "    ";

/// Render a byte sequence as a C++ array-literal body.
///
/// Each byte is a three-digit zero-padded decimal. Values within a line are
/// separated by `", "`, lines end with `",\n"`, and the final value carries
/// no trailing comma. An empty sequence renders as an empty string.
///
/// # Examples
///
/// ```rust
/// use dir2src_core::array::render_array_literal;
///
/// assert_eq!(render_array_literal(&[1, 2, 3]), "    001, 002, 003");
/// ```
pub fn render_array_literal(bytes: &[u8]) -> String {
    // "001, " per byte plus the indent per line.
    let mut out = String::with_capacity(bytes.len() * 5 + bytes.len() / VALUES_PER_LINE * 4);

    for (index, byte) in bytes.iter().enumerate() {
        if index % VALUES_PER_LINE == 0 {
            out.push_str(LINE_INDENT);
        }

        let _ = write!(out, "{byte:03}");

        if index + 1 != bytes.len() {
            if (index + 1) % VALUES_PER_LINE == 0 {
                out.push_str(",\n");
            } else {
                out.push_str(", ");
            }
        }
    }

    out
}
