#[macro_use]
mod macros;
mod class_and_fn;
mod expression;
mod identifier;
mod input;
mod jsx;
mod object;
mod pat;
mod statement;
mod util;

use crate::{
    context::{Context, YesMaybe, YesNoMaybe},
    error::{Error, SyntaxError},
    lexer::Lexer,
    token::{Token, Word},
    ParserConfig,
};
use ast::*;
use atoms::JsWord;
use global_common::{BytePos, Comment, Span, StringInput};
use input::Buffer;
pub use input::Tokens;
use rustc_hash::FxHashMap;

#[derive(Clone, Default)]
struct State {
    labels: Vec<JsWord>,
    /// Start position of an assignment expression.
    potential_arrow_start: Option<BytePos>,
    /// Tracks the positions of commas that directly follow rest elements,
    /// keyed by the span of the enclosing array or parameter list.
    ///
    /// For example: `[...a,]`
    ///
    /// Only tracks the first matching comma in an array.
    trailing_commas_after_rest: FxHashMap<Span, Span>,
    /// Cover grammar: the expression parsed so far can still be reinterpreted
    /// as a destructuring assignment target.
    allow_destructuring: bool,
    /// Cover grammar: the expression parsed so far can still be reinterpreted
    /// as a binding pattern.
    allow_binding: bool,
    /// Cover grammar: error to surface if the covering expression never
    /// becomes a pattern. Holds at most one error; producers overwrite.
    pending_cover_error: Option<Error>,
}

/// When error occurs, error is emitted and parser returns Err(()).
pub type PResult<T> = Result<T, Error>;

/// EcmaScript parser.
#[derive(Clone)]
pub struct Parser<I: Tokens> {
    /// [false] while backtracking
    emit_err: bool,
    state: State,
    input: Buffer<I>,
}

impl<'a> Parser<Lexer<'a>> {
    pub fn new(config: ParserConfig, input: StringInput<'a>) -> Self {
        Self::new_from(Lexer::new(config, input))
    }
}

impl<I: Tokens> Parser<I> {
    pub fn new_from(input: I) -> Self {
        Parser {
            emit_err: true,
            state: Default::default(),
            input: Buffer::new(input),
        }
    }

    pub fn take_errors(&mut self) -> Vec<Error> {
        self.input().take_errors()
    }

    pub fn take_comments(&mut self) -> Vec<Comment> {
        self.input().take_comments()
    }

    pub(crate) fn config(&self) -> ParserConfig {
        self.input.config()
    }

    pub fn parse_script(&mut self) -> PResult<Program> {
        let ctx = Context {
            module: YesNoMaybe::No,
            strict: if self.config().strict_mode_initial {
                YesMaybe::Yes
            } else {
                YesMaybe::Maybe
            },
            ..self.ctx()
        };
        self.set_ctx(ctx);

        let shebang = self.parse_shebang()?;

        self.parse_block_body(true, None).map(|body| Program {
            span: Span::new(self.input.start_pos(), self.input.end_pos()),
            body,
            source_type: SourceType::Script,
            comments: None,
            shebang,
        })
    }

    pub fn parse_module(&mut self) -> PResult<Program> {
        let ctx = Context {
            module: YesNoMaybe::Yes,
            strict: YesMaybe::Yes,
            ..self.ctx()
        };
        // Module code is always in strict mode
        self.set_ctx(ctx);

        let shebang = self.parse_shebang()?;

        self.parse_block_body(true, None).map(|body| Program {
            span: Span::new(self.input.start_pos(), self.input.end_pos()),
            body,
            source_type: SourceType::Module,
            comments: None,
            shebang,
        })
    }

    /// Parses with the goal taken from [ParserConfig::module].
    pub fn parse_program(&mut self) -> PResult<Program> {
        if self.config().module {
            self.parse_module()
        } else {
            self.parse_script()
        }
    }

    fn parse_shebang(&mut self) -> PResult<Option<JsWord>> {
        match self.input.cur() {
            Some(Token::Shebang(..)) => match self.input.bump() {
                Token::Shebang(v) => Ok(Some(v)),
                _ => unreachable!(),
            },
            _ => Ok(None),
        }
    }

    fn ctx(&self) -> Context {
        self.input.get_ctx()
    }

    #[cold]
    fn emit_err(&self, span: Span, error: SyntaxError) {
        if !self.emit_err {
            return;
        }

        self.emit_error(Error {
            error: Box::new((span, error)),
        })
    }

    #[cold]
    fn emit_error(&self, error: Error) {
        if !self.emit_err {
            return;
        }

        self.input_ref().add_error(error);
    }

    #[cold]
    fn emit_strict_mode_err(&self, span: Span, error: SyntaxError) {
        if !self.emit_err {
            return;
        }
        let error = Error {
            error: Box::new((span, error)),
        };
        self.input_ref().add_strict_mode_error(error);
    }
}
