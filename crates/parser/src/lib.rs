//! EcmaScript parser producing an ESTree-shaped AST.

pub use self::parser::*;
use ast::Program;
use error::Error;
use global_common::{LineIndex, StringInput};
use serde::{Deserialize, Serialize};

#[macro_use]
mod macros;
mod context;
pub mod error;
pub mod estree;
pub mod lexer;
mod parser;
pub mod token;

/// Feature and output switches. Every field defaults to off.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ParserConfig {
    /// Parse as a module. Determines `Program.sourceType` and implies strict
    /// mode.
    #[serde(default)]
    pub module: bool,

    /// Start in strict mode even for scripts.
    #[serde(default)]
    pub strict_mode_initial: bool,

    /// Enable the JSX sub-scanner and grammar.
    #[serde(default)]
    pub jsx: bool,

    /// Class fields, private names, dynamic import, `import.meta`, BigInt.
    #[serde(default)]
    pub next: bool,

    /// Turn off Annex B style HTML comments in scripts.
    #[serde(default)]
    pub disable_web_compat: bool,

    /// Collect comments onto `Program.comments`.
    #[serde(default)]
    pub comments: bool,

    /// Record the raw source text of literals.
    #[serde(default)]
    pub raw: bool,

    /// Include `start`/`end` byte offsets in serialized output.
    #[serde(default)]
    pub ranges: bool,

    /// Include `loc` line/column objects in serialized output.
    #[serde(default)]
    pub locations: bool,
}

/// A parse failure located in the source text.
///
/// `line` is 1-based, `column` 0-based, `index` the byte offset of the
/// error span's start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub index: usize,
}

impl ParseError {
    fn from_error(err: Error, line_index: &LineIndex) -> Self {
        let (span, kind) = err.into_inner();
        let loc = line_index.lookup(span.lo);
        ParseError {
            message: kind.msg().into_owned(),
            line: loc.line,
            column: loc.col,
            index: span.lo.0 as usize,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}:{})", self.message, self.line, self.column)
    }
}

impl std::error::Error for ParseError {}

/// Parses `src` with the goal taken from [ParserConfig::module].
pub fn parse_program(src: &str, config: ParserConfig) -> Result<Program, ParseError> {
    parse_with(src, config, |p| p.parse_program())
}

/// Parses `src` as a script.
pub fn parse_script(src: &str, config: ParserConfig) -> Result<Program, ParseError> {
    parse_with(src, config, |p| p.parse_script())
}

/// Parses `src` as a module.
pub fn parse_module(src: &str, config: ParserConfig) -> Result<Program, ParseError> {
    parse_with(src, config, |p| p.parse_module())
}

fn parse_with<'a, F>(src: &'a str, config: ParserConfig, f: F) -> Result<Program, ParseError>
where
    F: FnOnce(&mut Parser<lexer::Lexer<'a>>) -> PResult<Program>,
{
    let mut parser = Parser::new(config, StringInput::from(src));
    let result = f(&mut parser);

    let mut errors = parser.take_errors();

    let program = match result {
        Ok(program) => program,
        Err(err) => {
            return Err(ParseError::from_error(err, &LineIndex::new(src)));
        }
    };

    // The tree completed, but recorded errors (strict mode violations and
    // the like) are still fatal. The earliest one wins.
    if !errors.is_empty() {
        return Err(ParseError::from_error(
            errors.remove(0),
            &LineIndex::new(src),
        ));
    }

    let comments = if config.comments {
        Some(parser.take_comments())
    } else {
        None
    };

    Ok(Program {
        comments,
        ..program
    })
}
