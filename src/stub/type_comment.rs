//! Legacy type-comment handling.
//!
//! Jython 2.7 sources cannot use inline annotations, so Ignition scripts carry
//! signatures in comments of the form:
//!
//! ```python
//! def func(x, y):
//!     # type: (int, str) -> bool
//! ```
//!
//! The comment may sit on the `def` line itself or on any line before the
//! first body statement. Parsing is deliberately shallow: type tokens are
//! opaque strings, split on commas, with no nesting awareness.

use rustpython_parser::ast::{self, Ranged};

/// Outcome of interpreting a function's type comment.
///
/// Carrying the degraded case as a variant (rather than swallowing a parse
/// failure) keeps the fallback explicit at the render site: a degraded
/// signature renders every parameter bare with an `Any` return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureSource {
    Typed(TypeAnnotation),
    Degraded,
}

/// A parsed `(T1, T2, ...) -> R` annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAnnotation {
    pub arg_types: Vec<String>,
    pub return_type: String,
}

/// Interpret the text of a type comment.
///
/// Anything that is not a parenthesized argument list followed by `) -> `
/// degrades; the return type is taken verbatim (stripped) from the right-hand
/// side.
pub fn parse_type_comment(text: &str) -> SignatureSource {
    let sig = text.trim();
    if !sig.starts_with('(') {
        return SignatureSource::Degraded;
    }
    let Some((args, ret)) = sig.split_once(") -> ") else {
        return SignatureSource::Degraded;
    };
    let inner = args.trim().trim_matches(|c| c == '(' || c == ')').trim();
    let arg_types = if inner.is_empty() {
        Vec::new()
    } else {
        inner.split(',').map(|t| t.trim().to_string()).collect()
    };
    SignatureSource::Typed(TypeAnnotation {
        arg_types,
        return_type: ret.trim().to_string(),
    })
}

/// Scan the raw source between a function's header and its first body
/// statement for a `# type:` comment and return the annotation text.
pub fn extract_type_comment(source: &str, func: &ast::StmtFunctionDef) -> Option<String> {
    let start = func.range.start().to_usize();
    let end = func
        .body
        .first()
        .map(|stmt| stmt.range().start().to_usize())
        .unwrap_or_else(|| func.range.end().to_usize());
    let header = source.get(start..end)?;

    for line in header.lines() {
        let Some(pos) = line.find('#') else { continue };
        let comment = line[pos + 1..].trim_start();
        if let Some(rest) = comment.strip_prefix("type:") {
            let rest = rest.trim();
            if !rest.is_empty() {
                return Some(rest.to_string());
            }
        }
    }
    None
}
