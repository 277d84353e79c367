use super::Lexer;
use crate::{
    context::{Context, YesMaybe, YesNoMaybe},
    error::Error,
    token::*,
    ParserConfig, Tokens,
};
use global_common::{comments::Comment, BytePos};
use std::mem;

/// Stripped down version of a token, used to track the previous token while
/// deciding what the next one may be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenType {
    Template,
    Dot,
    Colon,
    LBrace,
    RParen,
    Semi,
    JSXName,
    JSXText,
    JSXTagStart,
    JSXTagEnd,
    BinOp(BinOpToken),
    Keyword(Keyword),
    Other { before_expr: bool },
}

impl TokenType {
    fn before_expr(self) -> bool {
        match self {
            TokenType::Template
            | TokenType::Dot
            | TokenType::RParen
            | TokenType::JSXName
            | TokenType::JSXTagEnd => false,

            TokenType::Colon
            | TokenType::LBrace
            | TokenType::Semi
            | TokenType::JSXText
            | TokenType::JSXTagStart => true,

            TokenType::BinOp(b) => b.before_expr(),
            TokenType::Keyword(k) => k.before_expr(),
            TokenType::Other { before_expr } => before_expr,
        }
    }
}

impl From<&Token> for TokenType {
    fn from(t: &Token) -> Self {
        match t {
            Token::Template { .. } => TokenType::Template,
            Token::Dot => TokenType::Dot,
            Token::Colon => TokenType::Colon,
            Token::LBrace => TokenType::LBrace,
            Token::RParen => TokenType::RParen,
            Token::Semi => TokenType::Semi,
            Token::JSXName { .. } => TokenType::JSXName,
            Token::JSXText { .. } => TokenType::JSXText,
            Token::JSXTagStart => TokenType::JSXTagStart,
            Token::JSXTagEnd => TokenType::JSXTagEnd,
            Token::BinOp(op) => TokenType::BinOp(*op),
            Token::Word(Word::Keyword(k)) => TokenType::Keyword(*k),
            _ => TokenType::Other {
                before_expr: t.before_expr(),
            },
        }
    }
}

impl Tokens for Lexer<'_> {
    fn set_ctx(&mut self, ctx: Context) {
        if ctx.module == YesNoMaybe::Yes && !self.module_errors.borrow().is_empty() {
            let mut module_errors = self.module_errors.borrow_mut();
            self.errors.borrow_mut().append(&mut module_errors);
        }

        if ctx.strict == YesMaybe::Yes && !self.strict_errors.borrow().is_empty() {
            let mut strict_errors = self.strict_errors.borrow_mut();
            self.errors.borrow_mut().append(&mut strict_errors);
        }

        self.ctx = ctx
    }

    fn ctx(&self) -> Context {
        self.ctx
    }

    fn config(&self) -> ParserConfig {
        self.config
    }

    fn set_expr_allowed(&mut self, allow: bool) {
        self.set_expr_allowed(allow)
    }

    fn token_context(&self) -> &TokenContexts {
        &self.state.context
    }

    fn token_context_mut(&mut self) -> &mut TokenContexts {
        &mut self.state.context
    }

    fn set_token_context(&mut self, c: TokenContexts) {
        self.state.context = c;
    }

    fn add_error(&self, error: Error) {
        self.errors.borrow_mut().push(error);
    }

    fn add_module_mode_error(&self, error: Error) {
        match self.ctx.module {
            YesNoMaybe::Yes => {
                self.add_error(error);
                return;
            }
            YesNoMaybe::No => return,
            YesNoMaybe::Maybe => {}
        }
        self.module_errors.borrow_mut().push(error)
    }

    fn add_strict_mode_error(&self, error: Error) {
        if self.ctx.strict == YesMaybe::Yes {
            self.add_error(error);
            return;
        }
        self.strict_errors.borrow_mut().push(error)
    }

    fn convert_strict_mode_errors_to_module_errors(&mut self) {
        // Correct since module code is always strict.
        let mut strict_errors = self.strict_errors.borrow_mut();
        match self.ctx.module {
            YesNoMaybe::Yes => {
                self.errors.borrow_mut().extend(strict_errors.drain(..));
            }
            YesNoMaybe::No => {
                strict_errors.clear();
            }
            YesNoMaybe::Maybe => {
                self.module_errors.borrow_mut().extend(strict_errors.drain(..));
            }
        }
    }

    fn take_errors(&mut self) -> Vec<Error> {
        mem::take(&mut self.errors.borrow_mut())
    }

    fn start_pos(&self) -> BytePos {
        self.start_pos
    }

    fn end_pos(&self) -> BytePos {
        self.end_pos()
    }

    fn take_comments(&mut self) -> Vec<Comment> {
        mem::take(&mut self.comments)
    }
}

/// The algorithm used to determine whether a regexp can appear at a
/// given point in the program is loosely based on sweet.js' approach.
/// See https://github.com/mozilla/sweet.js/wiki/design
#[derive(Debug, Default, Clone)]
pub struct TokenContexts(pub(crate) Vec<TokenContext>);

impl TokenContexts {
    /// Returns true if following `LBrace` token is `block statement` according
    /// to `ctx`, `prev`, `is_expr_allowed`.
    fn is_brace_block(
        &self,
        prev: Option<TokenType>,
        had_line_break: bool,
        is_expr_allowed: bool,
    ) -> bool {
        match prev {
            Some(TokenType::Colon) => match self.current() {
                Some(TokenContext::BraceStmt) => return true,
                // `{ a: {} }`
                //     ^ ^
                Some(TokenContext::BraceExpr) => return false,
                _ => {}
            },

            //  function a() {
            //      return { a: "" };
            //  }
            //  function a() {
            //      return
            //      {
            //          function b(){}
            //      };
            //  }
            Some(TokenType::Keyword(Return)) | Some(TokenType::Keyword(Yield)) => {
                return had_line_break;
            }

            Some(TokenType::Keyword(Else))
            | Some(TokenType::Semi)
            | None
            | Some(TokenType::RParen) => {
                return true;
            }

            // If previous token was `{`
            Some(TokenType::LBrace) => return self.current() == Some(TokenContext::BraceStmt),

            // `a < { }` is an invalid program, so `{` is a block
            Some(TokenType::BinOp(Lt)) | Some(TokenType::BinOp(Gt)) => return true,

            _ => {}
        }

        !is_expr_allowed
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pop(&mut self) -> Option<TokenContext> {
        self.0.pop()
    }

    pub fn current(&self) -> Option<TokenContext> {
        self.0.last().cloned()
    }

    fn push(&mut self, t: TokenContext) {
        self.0.push(t);
    }
}

/// The type of a token seen by the expression/division disambiguator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenContext {
    BraceStmt,
    BraceExpr,
    TplQuasi,
    ParenStmt {
        /// Is this `for` loop?
        is_for_loop: bool,
    },
    ParenExpr,
    Tpl {
        /// Start of a template literal.
        start: BytePos,
    },
    FnExpr,
    JSXOpeningTag,
    JSXClosingTag,
    JSXExpr,
}

impl TokenContext {
    pub(crate) fn preserve_space(&self) -> bool {
        matches!(self, Self::Tpl { .. } | Self::JSXExpr)
    }

    fn is_expr(&self) -> bool {
        matches!(
            self,
            Self::BraceExpr | Self::TplQuasi | Self::ParenExpr | Self::Tpl { .. } | Self::FnExpr
        )
    }
}

#[derive(Clone)]
pub(super) struct State {
    /// Whether a line break exists between the previous token and the current
    /// one.
    pub had_line_break: bool,
    /// TokenType of the previous token.
    token_type: Option<TokenType>,
    pub context: TokenContexts,
    pub is_expr_allowed: bool,
    /// Start of the current token.
    pub start: BytePos,
    /// End of the previous token.
    pub last_tok_end: BytePos,
}

impl State {
    pub fn new() -> Self {
        State {
            had_line_break: true,
            token_type: None,
            context: TokenContexts(vec![TokenContext::BraceStmt]),
            is_expr_allowed: true,
            start: BytePos(0),
            last_tok_end: BytePos(0),
        }
    }
}

impl State {
    pub fn can_skip_space(&self) -> bool {
        !self
            .context
            .current()
            .map(|t| t.preserve_space())
            .unwrap_or_default()
    }

    pub fn last_was_tpl_element(&self) -> bool {
        matches!(self.token_type, Some(TokenType::Template))
    }

    pub fn update(&mut self, start: BytePos, next: &Token) {
        let prev = self.token_type.take();
        self.token_type = Some(TokenType::from(next));

        self.is_expr_allowed = self.is_expr_allowed_on_next(prev, start, next);
    }

    /// `is_expr_allowed`: previous value.
    /// `start`: start of newly produced token.
    fn is_expr_allowed_on_next(
        &mut self,
        prev: Option<TokenType>,
        start: BytePos,
        next: &Token,
    ) -> bool {
        let State {
            ref mut context,
            had_line_break,
            is_expr_allowed,
            ..
        } = *self;

        let is_next_keyword = matches!(next, Word(Word::Keyword(..)));

        if is_next_keyword && prev == Some(TokenType::Dot) {
            false
        } else {
            match *next {
                tok!(')') | tok!('}') => {
                    // TODO: Verify
                    if context.len() == 1 {
                        return true;
                    }

                    let out = context.pop().unwrap();

                    // let a = function(){}
                    if out == TokenContext::BraceStmt
                        && matches!(context.current(), Some(TokenContext::FnExpr))
                    {
                        context.pop();
                        return false;
                    }

                    // ${} in template
                    if out == TokenContext::TplQuasi {
                        match context.current() {
                            Some(TokenContext::Tpl { .. }) => return false,
                            _ => return true,
                        }
                    }

                    // expression cannot follow expression
                    !out.is_expr()
                }

                tok!("function") => {
                    // This is required to lex
                    // `x = function(){}/42/i`
                    if is_expr_allowed
                        && !context.is_brace_block(prev, had_line_break, is_expr_allowed)
                    {
                        context.push(TokenContext::FnExpr);
                    }
                    false
                }

                // for (a of b) {}
                tok!("of")
                    if matches!(
                        context.current(),
                        Some(TokenContext::ParenStmt { is_for_loop: true })
                    ) =>
                {
                    // e.g. for (a of _) => true
                    !prev
                        .expect("context.current() if ParenStmt, so prev token cannot be None")
                        .before_expr()
                }

                Word(Word::Ident(..)) => {
                    // variable declaration
                    match prev {
                        Some(TokenType::Keyword(Let))
                        | Some(TokenType::Keyword(Const))
                        | Some(TokenType::Keyword(Var))
                            if had_line_break =>
                        {
                            // it's possible to declare a variable with name `let`
                            true
                        }
                        _ => false,
                    }
                }

                tok!('{') => {
                    let next_ctxt =
                        if context.is_brace_block(prev, had_line_break, is_expr_allowed) {
                            TokenContext::BraceStmt
                        } else {
                            TokenContext::BraceExpr
                        };
                    context.push(next_ctxt);
                    true
                }

                tok!("${") => {
                    context.push(TokenContext::TplQuasi);
                    true
                }

                tok!('(') => {
                    // if, for, with, while is statement
                    let next_ctxt = match prev {
                        Some(TokenType::Keyword(k)) => match k {
                            If | With | While => TokenContext::ParenStmt { is_for_loop: false },
                            For => TokenContext::ParenStmt { is_for_loop: true },
                            _ => TokenContext::ParenExpr,
                        },
                        _ => TokenContext::ParenExpr,
                    };
                    context.push(next_ctxt);
                    true
                }

                // remains unchanged.
                tok!("++") | tok!("--") => is_expr_allowed,

                tok!('`') => {
                    // If we are in template, ` terminates template.
                    if let Some(TokenContext::Tpl { .. }) = context.current() {
                        context.pop();
                    } else {
                        context.push(TokenContext::Tpl { start });
                    }
                    false
                }

                Token::JSXTagStart => {
                    // treat as beginning of an expression
                    context.push(TokenContext::JSXExpr);
                    // start opening tag context
                    context.push(TokenContext::JSXOpeningTag);
                    false
                }

                Token::JSXTagEnd => {
                    let out = context.pop();
                    if (out == Some(TokenContext::JSXOpeningTag)
                        && prev == Some(TokenType::BinOp(Div)))
                        || out == Some(TokenContext::JSXClosingTag)
                    {
                        context.pop();
                        // Back in the enclosing element's children, so the
                        // next `<` begins a tag again.
                        matches!(context.current(), Some(TokenContext::JSXExpr))
                    } else {
                        true
                    }
                }

                tok!('/') if prev == Some(TokenType::JSXTagStart) => {
                    context.pop();
                    // do not consider JSX expr -> JSX open tag -> ... anymore
                    context.pop();
                    // reconsider as closing tag context
                    context.push(TokenContext::JSXClosingTag);
                    false
                }

                _ => next.before_expr(),
            }
        }
    }
}
