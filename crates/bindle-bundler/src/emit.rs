//! Bundle assembly.
//!
//! Emits, in order: the runtime prelude (an IIFE defining a caching
//! `require` over the module table), the module table literal in
//! discovery order, and the entry invocation. The runtime publishes a
//! module's exports object into the cache before executing its body, so
//! cyclic imports receive the partially populated exports instead of
//! recursing forever.

use std::path::Path;

use bindle_graph::{ModuleGraph, ModuleKey};

/// The emitted `require` runtime. The IIFE returns `require` itself, so
/// applying it to the module table and then to the entry key keeps the
/// prelude, table and entry invocation in that textual order.
const RUNTIME_PRELUDE: &str = "\
(function (modules) {
  var cache = Object.create(null);
  function require(key) {
    if (cache[key]) {
      return cache[key].exports;
    }
    var module = { exports: {} };
    cache[key] = module;
    if (!modules[key]) {
      throw new Error(\"Module not found: \" + key);
    }
    modules[key](module, module.exports, require);
    return module.exports;
  }
  return require;
})({
";

/// Assemble the final bundle text from transformed module bodies.
///
/// `bodies` must be in discovery order, one entry per graph module; the
/// table keys use the same working-directory-relative form the analyzer
/// wrote into rewritten `require` calls.
pub fn emit_bundle(
    graph: &ModuleGraph,
    bodies: &[String],
    entry: &ModuleKey,
    cwd: &Path,
) -> String {
    debug_assert_eq!(graph.len(), bodies.len());

    let mut out = String::with_capacity(
        RUNTIME_PRELUDE.len() + bodies.iter().map(|b| b.len() + 96).sum::<usize>(),
    );
    out.push_str(RUNTIME_PRELUDE);

    for (record, body) in graph.modules().zip(bodies) {
        let key = record.key.relative_display(cwd);
        out.push_str(&js_quote(&key));
        out.push_str(": function (module, exports, require) {\n");
        out.push_str(body);
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("},\n");
    }

    out.push_str("})(");
    out.push_str(&js_quote(&entry.relative_display(cwd)));
    out.push_str(");\n");
    out
}

/// Quote `s` as a JavaScript double-quoted string literal.
pub(crate) fn js_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
