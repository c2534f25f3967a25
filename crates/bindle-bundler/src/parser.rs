//! Parser façade over oxc.
//!
//! Wraps `oxc_parser` behind a small interface configured for modern
//! ECMAScript with module syntax permitted and source positions tracked.
//! The AST borrows from the caller's [`Allocator`], so parsing and
//! analysis happen inside one scope and only owned analysis products
//! leave it.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::{Error, Result};

/// A parsed module, valid for the lifetime of the allocator.
#[derive(Debug)]
pub struct ParsedProgram<'a> {
    pub program: Program<'a>,
    pub source_text: &'a str,
}

impl<'a> ParsedProgram<'a> {
    pub fn ast(&self) -> &Program<'a> {
        &self.program
    }
}

/// Parse UTF-8 JavaScript source as an ES module.
///
/// Parser diagnostics are folded into [`Error::Parse`] carrying the
/// module's path; no partial AST is returned.
pub fn parse_program<'a>(
    allocator: &'a Allocator,
    source: &'a str,
    path: &Path,
) -> Result<ParsedProgram<'a>> {
    let result = Parser::new(allocator, source, SourceType::mjs()).parse();

    if !result.errors.is_empty() {
        let message = result
            .errors
            .iter()
            .map(|err| format!("{err:?}"))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(Error::Parse {
            path: path.to_path_buf(),
            message,
        });
    }

    Ok(ParsedProgram {
        program: result.program,
        source_text: source,
    })
}
