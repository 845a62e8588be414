//! Per-file source unit rendering
//!
//! Every input file becomes one standalone C++ translation unit defining a
//! `std::array<uint8_t, N>` inside the nested namespaces that mirror the
//! file's directory path. Unlike the aggregate header there is no cross-file
//! state: each unit opens its full namespace path and closes it completely.

use std::fmt::Write as _;

use crate::array::render_array_literal;

/// Banner line at the top of every generated file
pub const BANNER: &str = "// AUTOGENERATED";

/// Render a complete source unit defining one embedded byte array.
///
/// `namespaces` are the sanitized directory segments below `root_namespace`,
/// outermost first; `identifier` is the sanitized file name.
pub fn render_source(
    root_namespace: &str,
    namespaces: &[String],
    identifier: &str,
    bytes: &[u8],
) -> String {
    let mut out = String::new();

    out.push_str(BANNER);
    out.push_str("\n\n#include <array>\n#include <cstdint>\n\n");

    let _ = writeln!(out, "namespace {root_namespace} {{");
    for namespace in namespaces {
        let _ = writeln!(out, "namespace {namespace} {{");
    }

    let _ = write!(
        out,
        "\nstd::array<uint8_t, {}> {identifier} = {{\n\n",
        bytes.len()
    );
    out.push_str(&render_array_literal(bytes));
    out.push_str("\n\n};\n\n");

    for namespace in namespaces.iter().rev() {
        let _ = writeln!(out, "}} // end of namespace {namespace}");
    }
    let _ = writeln!(out, "}} // end of namespace {root_namespace}");

    out
}
