//! 13. Statements and Declarations
use super::{pat::PatType, *};
use crate::context::YesMaybe;
use global_common::Spanned;

enum ForHead {
    For {
        init: Option<VarDeclOrExpr>,
        test: Option<Box<Expr>>,
        update: Option<Box<Expr>>,
    },
    ForIn {
        left: VarDeclOrPat,
        right: Box<Expr>,
    },
    ForOf {
        left: VarDeclOrPat,
        right: Box<Expr>,
    },
}

impl<I: Tokens> Parser<I> {
    /// Parses a list of statements up to `end` (or eof when `end` is
    /// `None`), handling the directive prologue when `allow_directives` is
    /// set.
    pub(super) fn parse_block_body(
        &mut self,
        mut allow_directives: bool,
        end: Option<&Token>,
    ) -> PResult<Vec<Stmt>> {
        let old_ctx = self.ctx();

        let mut stmts = vec![];
        while {
            let c = self.input.cur();
            c != end
        } {
            let stmt = self.parse_stmt_list_item()?;

            if allow_directives {
                if is_directive(&stmt) {
                    if is_use_strict(&stmt) {
                        let ctx = Context {
                            strict: YesMaybe::Yes,
                            ..self.ctx()
                        };
                        self.set_ctx(ctx);
                    }
                } else {
                    allow_directives = false;
                    // The prologue is over. Whether the buffered
                    // strictness-contingent errors are real now depends only
                    // on the module goal.
                    self.input.convert_strict_mode_errors_to_module_errors();
                }
            }

            stmts.push(stmt);
        }

        if allow_directives {
            // The body consisted solely of directives.
            self.input.convert_strict_mode_errors_to_module_errors();
        }

        if end.is_some() {
            self.input.bump();
        }

        self.set_ctx(old_ctx);

        Ok(stmts)
    }

    pub(super) fn parse_stmt(&mut self) -> PResult<Stmt> {
        self.parse_stmt_internal(false)
    }

    fn parse_stmt_list_item(&mut self) -> PResult<Stmt> {
        self.parse_stmt_internal(true)
    }

    /// Parse a statement or, when `include_decl` is set, a declaration.
    fn parse_stmt_internal(&mut self, include_decl: bool) -> PResult<Stmt> {
        let start = self.input.cur_pos();

        // Most statements are recognized by the keyword they start with.
        match *cur!(self)? {
            tok!("break") | tok!("continue") => {
                let is_break = self.input.is(&tok!("break"));
                self.input.bump();

                let label = if eat!(self, ';') {
                    None
                } else {
                    let ident = self.parse_label_ident().map(Some)?;
                    expect!(self, ';');
                    ident
                };

                let span = span!(self, start);

                self.verify_break_continue(is_break, &label, span);

                if is_break {
                    return Ok(Stmt::Break(BreakStmt { span, label }));
                } else {
                    return Ok(Stmt::Continue(ContinueStmt { span, label }));
                }
            }
            tok!("debugger") => {
                self.input.bump();
                expect!(self, ';');
                return Ok(Stmt::Debugger(DebuggerStmt {
                    span: span!(self, start),
                }));
            }
            tok!("do") => {
                return self.parse_do_stmt();
            }
            tok!("for") => {
                return self.parse_for_stmt();
            }
            tok!("function") => {
                if !include_decl {
                    self.emit_err(self.input.cur_span(), SyntaxError::DeclNotAllowed);
                }

                return self.parse_fn_decl().map(Stmt::Decl);
            }
            tok!("class") => {
                if !include_decl {
                    self.emit_err(self.input.cur_span(), SyntaxError::DeclNotAllowed);
                }
                return self.parse_class_decl(start).map(Stmt::Decl);
            }
            tok!("if") => {
                return self.parse_if_stmt();
            }
            tok!("return") => {
                return self.parse_return_stmt();
            }
            tok!("switch") => {
                return self.parse_switch_stmt();
            }
            tok!("throw") => {
                return self.parse_throw_stmt();
            }
            tok!("try") => {
                return self.parse_try_stmt();
            }
            tok!("var") => {
                let v = self.parse_var_stmt(false)?;
                return Ok(Stmt::Decl(Decl::Var(v)));
            }
            tok!("const") if include_decl => {
                let v = self.parse_var_stmt(false)?;
                return Ok(Stmt::Decl(Decl::Var(v)));
            }
            // 'let' can also start an identifier reference, e.g. `let + 1`.
            tok!("let") if include_decl => {
                let is_keyword = match self.input.peek() {
                    Some(t) => t.follows_keyword_let(),
                    _ => false,
                };

                if is_keyword {
                    let v = self.parse_var_stmt(false)?;
                    return Ok(Stmt::Decl(Decl::Var(v)));
                }
            }
            tok!("while") => {
                return self.parse_while_stmt();
            }
            tok!("with") => {
                return self.parse_with_stmt();
            }
            tok!('{') => {
                return self.parse_block(false).map(Stmt::Block);
            }
            tok!(';') => {
                self.input.bump();
                return Ok(Stmt::Empty(EmptyStmt {
                    span: span!(self, start),
                }));
            }

            _ => {}
        }

        // Handle `async function foo() {}`
        if self.input.is(&tok!("async"))
            && self.input.peeked_is(&tok!("function"))
            && !self.input.has_linebreak_between_cur_and_peeked()
        {
            return self.parse_async_fn_decl().map(Stmt::Decl);
        }

        // If the statement does not start with a statement keyword or a
        // brace, it's an ExpressionStatement or LabeledStatement. We simply
        // start parsing an expression, and afterwards, if the next token is a
        // colon and the expression was a simple Identifier node, we switch to
        // interpreting it as a label.
        let expr = self.include_in_expr(true).parse_expr()?;

        let expr = match *expr {
            Expr::Ident(ident) => {
                if self.input.eat(&tok!(':')) {
                    return self.parse_labelled_stmt(ident);
                }
                Box::new(Expr::Ident(ident))
            }
            _ => expr,
        };

        expect!(self, ';');

        Ok(Stmt::Expr(ExprStmt {
            span: span!(self, start),
            expr,
        }))
    }

    fn verify_break_continue(&self, is_break: bool, label: &Option<Ident>, span: Span) {
        if is_break {
            if let Some(label) = label {
                if !self.state.labels.contains(&label.sym) {
                    self.emit_err(
                        span,
                        SyntaxError::UndefinedLabel {
                            label: label.sym.clone(),
                        },
                    );
                }
            } else if !self.ctx().is_break_allowed {
                self.emit_err(span, SyntaxError::IllegalBreak);
            }
        } else if !self.ctx().is_continue_allowed {
            self.emit_err(span, SyntaxError::IllegalContinue);
        } else if let Some(label) = label {
            if !self.state.labels.contains(&label.sym) {
                self.emit_err(
                    span,
                    SyntaxError::UndefinedLabel {
                        label: label.sym.clone(),
                    },
                );
            }
        }
    }

    /// Parses a parenthesized header expression, e.g. the test of an `if`.
    fn parse_header_expr(&mut self) -> PResult<Box<Expr>> {
        expect!(self, '(');
        let val = self.include_in_expr(true).parse_expr()?;
        expect!(self, ')');
        Ok(val)
    }

    fn parse_do_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();

        assert_and_bump!(self, "do");

        let ctx = Context {
            is_break_allowed: true,
            is_continue_allowed: true,
            ..self.ctx()
        };

        let body = self.with_ctx(ctx).parse_stmt().map(Box::new)?;

        expect!(self, "while");
        let test = self.parse_header_expr()?;
        // The semicolon after `do .. while (..)` is optional.
        self.input.eat(&tok!(';'));

        Ok(Stmt::DoWhile(DoWhileStmt {
            span: span!(self, start),
            test,
            body,
        }))
    }

    // Disambiguating between a `for` and a `for`/`in` or `for`/`of` loop is
    // non-trivial. Basically, we have to parse the init `var` statement or
    // expression, disallowing the `in` operator, and then check whether the
    // next token is `in` or `of`. When there is no init part (semicolon
    // immediately after the opening parenthesis), it is a regular `for` loop.
    fn parse_for_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();

        assert_and_bump!(self, "for");

        let await_start = self.input.cur_pos();
        let await_token = if self.input.eat(&tok!("await")) {
            Some(span!(self, await_start))
        } else {
            None
        };

        if let Some(await_span) = await_token {
            if !self.ctx().in_async {
                self.emit_err(await_span, SyntaxError::ForAwaitNotInAsync);
            }
        }

        expect!(self, '(');
        let head = self.parse_for_head()?;
        expect!(self, ')');

        let ctx = Context {
            is_break_allowed: true,
            is_continue_allowed: true,
            ..self.ctx()
        };
        let body = self.with_ctx(ctx).parse_stmt().map(Box::new)?;

        let span = span!(self, start);
        Ok(match head {
            ForHead::For { init, test, update } => {
                if let Some(await_span) = await_token {
                    syntax_error!(self, await_span, SyntaxError::AwaitForStmt);
                }

                Stmt::For(ForStmt {
                    span,
                    init,
                    test,
                    update,
                    body,
                })
            }
            ForHead::ForIn { left, right } => {
                if let Some(await_span) = await_token {
                    syntax_error!(self, await_span, SyntaxError::AwaitForStmt);
                }

                Stmt::ForIn(ForInStmt {
                    span,
                    left,
                    right,
                    body,
                })
            }
            ForHead::ForOf { left, right } => Stmt::ForOf(ForOfStmt {
                span,
                is_await: await_token.is_some(),
                left,
                right,
                body,
            }),
        })
    }

    fn parse_for_head(&mut self) -> PResult<ForHead> {
        if is_one_of!(self, "const", "var")
            || (self.input.is(&tok!("let")) && peek!(self)?.follows_keyword_let())
        {
            let decl = self.parse_var_stmt(true)?;

            if is_one_of!(self, "of", "in") {
                if decl.decls.len() > 1 {
                    syntax_error!(
                        self,
                        decl.decls[1].name.span(),
                        SyntaxError::TooManyVarInForInHead
                    )
                }
                if decl.decls[0].init.is_some() {
                    syntax_error!(
                        self,
                        decl.decls[0].name.span(),
                        SyntaxError::VarInitializerInForInHead
                    )
                }

                return self.parse_for_each_head(VarDeclOrPat::VarDecl(decl));
            }

            expect_exact!(self, ';');
            return self.parse_normal_for_head(Some(VarDeclOrExpr::VarDecl(decl)));
        }

        if self.input.eat(&tok!(';')) {
            return self.parse_normal_for_head(None);
        }

        let init = self.include_in_expr(false).parse_for_head_prefix()?;

        // for (a of b)
        if is_one_of!(self, "of", "in") {
            let pat = self.reparse_expr_as_pat(PatType::AssignPat, init)?;

            return self.parse_for_each_head(VarDeclOrPat::Pat(pat));
        }

        // The init can no longer be reinterpreted as a pattern, so an error
        // deferred inside it is real.
        if let Some(err) = self.state.pending_cover_error.take() {
            return Err(err);
        }

        expect_exact!(self, ';');
        self.parse_normal_for_head(Some(VarDeclOrExpr::Expr(init)))
    }

    /// Like [Parser::parse_expr], but keeps the cover grammar open so the
    /// parsed expression can still become a for-in/for-of target.
    fn parse_for_head_prefix(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();
        let expr = self.restore_cover_grammar(|p| p.parse_assignment_expr())?;

        if is!(self, ',') {
            let mut exprs = vec![expr];

            while eat!(self, ',') {
                exprs.push(self.parse_expr_cover_grammar(|p| p.parse_assignment_expr())?);
            }

            return Ok(Box::new(Expr::Seq(SeqExpr {
                span: span!(self, start),
                exprs,
            })));
        }

        Ok(expr)
    }

    fn parse_for_each_head(&mut self, left: VarDeclOrPat) -> PResult<ForHead> {
        let of = self.input.bump() == tok!("of");
        if of {
            let right = self.include_in_expr(true).parse_assignment_expr()?;
            Ok(ForHead::ForOf { left, right })
        } else {
            let right = self.include_in_expr(true).parse_expr()?;
            Ok(ForHead::ForIn { left, right })
        }
    }

    fn parse_normal_for_head(&mut self, init: Option<VarDeclOrExpr>) -> PResult<ForHead> {
        let test = if self.input.eat(&tok!(';')) {
            None
        } else {
            let test = self.include_in_expr(true).parse_expr().map(Some)?;
            expect_exact!(self, ';');
            test
        };

        let update = if self.input.is(&tok!(')')) {
            None
        } else {
            self.include_in_expr(true).parse_expr().map(Some)?
        };

        Ok(ForHead::For { init, test, update })
    }

    fn parse_if_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();

        assert_and_bump!(self, "if");

        let test = self.parse_header_expr()?;
        let cons = self.parse_stmt().map(Box::new)?;
        let alt = if self.input.eat(&tok!("else")) {
            Some(self.parse_stmt().map(Box::new)?)
        } else {
            None
        };

        Ok(Stmt::If(IfStmt {
            span: span!(self, start),
            test,
            cons,
            alt,
        }))
    }

    fn parse_return_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();

        assert_and_bump!(self, "return");

        if !self.ctx().in_function {
            self.emit_err(span!(self, start), SyntaxError::ReturnNotAllowed);
        }

        // `return` takes an optional argument, so we eagerly look for a
        // semicolon or the possibility to insert one.
        let arg = if is!(self, ';') {
            None
        } else {
            let arg = self.include_in_expr(true).parse_expr().map(Some)?;
            expect!(self, ';');
            arg
        };

        Ok(Stmt::Return(ReturnStmt {
            span: span!(self, start),
            arg,
        }))
    }

    fn parse_switch_stmt(&mut self) -> PResult<Stmt> {
        let switch_start = self.input.cur_pos();

        assert_and_bump!(self, "switch");

        let discriminant = self.parse_header_expr()?;
        let mut cases = vec![];
        let mut span_of_previous_default = None;

        expect!(self, '{');

        let ctx = Context {
            is_break_allowed: true,
            ..self.ctx()
        };

        self.with_ctx(ctx).parse_with(|parser| {
            while is_one_of!(parser, "case", "default") {
                let mut cons = vec![];
                let is_case = parser.input.is(&tok!("case"));
                let case_start = parser.input.cur_pos();

                parser.input.bump();

                let test = if is_case {
                    parser.include_in_expr(true).parse_expr().map(Some)?
                } else {
                    if span_of_previous_default.is_some() {
                        syntax_error!(
                            parser,
                            span!(parser, case_start),
                            SyntaxError::MultipleDefaultsInSwitch
                        );
                    }
                    span_of_previous_default = Some(span!(parser, case_start));

                    None
                };
                expect!(parser, ':');

                while !eof!(parser) && !is_one_of!(parser, "case", "default", '}') {
                    cons.push(parser.parse_stmt_list_item()?);
                }

                cases.push(SwitchCase {
                    span: Span::new(case_start, parser.input.prev_span().hi),
                    test,
                    cons,
                });
            }

            Ok(())
        })?;

        expect!(self, '}');

        Ok(Stmt::Switch(SwitchStmt {
            span: span!(self, switch_start),
            discriminant,
            cases,
        }))
    }

    fn parse_throw_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();

        assert_and_bump!(self, "throw");

        if self.input.had_line_break_before_cur() {
            syntax_error!(self, span!(self, start), SyntaxError::NewlineAfterThrow);
        }

        let arg = self.include_in_expr(true).parse_expr()?;
        expect!(self, ';');

        Ok(Stmt::Throw(ThrowStmt {
            span: span!(self, start),
            arg,
        }))
    }

    fn parse_try_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();

        assert_and_bump!(self, "try");

        let block = self.parse_block(false)?;

        let catch_start = self.input.cur_pos();
        let handler = self.parse_catch_clause()?;
        let finalizer = self.parse_finally_block()?;

        if handler.is_none() && finalizer.is_none() {
            self.emit_err(
                Span::new(catch_start, catch_start),
                SyntaxError::NoCatchOrFinally,
            );
        }

        Ok(Stmt::Try(TryStmt {
            span: span!(self, start),
            block,
            handler,
            finalizer,
        }))
    }

    fn parse_catch_clause(&mut self) -> PResult<Option<CatchClause>> {
        let start = self.input.cur_pos();

        Ok(if self.input.eat(&tok!("catch")) {
            // The binding is optional: `try {} catch {}`.
            let param = if eat!(self, '(') {
                let pat = self.parse_binding_pat_or_ident()?;
                expect!(self, ')');
                Some(pat)
            } else {
                None
            };

            self.parse_block(false)
                .map(|body| CatchClause {
                    span: span!(self, start),
                    param,
                    body,
                })
                .map(Some)?
        } else {
            None
        })
    }

    fn parse_finally_block(&mut self) -> PResult<Option<BlockStmt>> {
        Ok(if self.input.eat(&tok!("finally")) {
            self.parse_block(false).map(Some)?
        } else {
            None
        })
    }

    pub(super) fn parse_var_stmt(&mut self, for_loop: bool) -> PResult<VarDecl> {
        let start = self.input.cur_pos();
        let kind = match self.input.bump() {
            tok!("const") => VarDeclKind::Const,
            tok!("let") => VarDeclKind::Let,
            tok!("var") => VarDeclKind::Var,
            _ => unreachable!(),
        };
        let should_include_in = kind != VarDeclKind::Var || !for_loop;

        let mut decls = vec![];
        let mut first = true;
        while first || self.input.eat(&tok!(',')) {
            if first {
                first = false;
            }

            // Handle
            //      var a,;
            //
            // NewLine is ok
            if self.input.is(&tok!(';')) || eof!(self) {
                unexpected!(self)
            }

            let ctx = if should_include_in {
                Context {
                    include_in_expr: true,
                    ..self.ctx()
                }
            } else {
                self.ctx()
            };

            decls.push(self.with_ctx(ctx).parse_var_declarator(for_loop, kind)?);
        }

        if !for_loop {
            expect!(self, ';');
        }

        Ok(VarDecl {
            span: span!(self, start),
            kind,
            decls,
        })
    }

    fn parse_var_declarator(&mut self, for_loop: bool, kind: VarDeclKind) -> PResult<VarDeclarator> {
        let start = self.input.cur_pos();

        let name = self.parse_binding_pat_or_ident()?;

        let init = if !for_loop || !is_one_of!(self, "in", "of") {
            if self.input.eat(&tok!('=')) {
                let expr = self.parse_expr_cover_grammar(|p| p.parse_assignment_expr())?;

                Some(expr)
            } else {
                // e.g. for(let a;;)
                if kind == VarDeclKind::Const && !for_loop {
                    syntax_error!(self, span!(self, start), SyntaxError::ConstWithoutInit)
                }

                // Destructuring bindings require initializers.
                match name {
                    Pat::Ident(..) => None,
                    _ => syntax_error!(self, span!(self, start), SyntaxError::PatVarWithoutInit),
                }
            }
        } else {
            // e.g. for(let a of b)
            None
        };

        Ok(VarDeclarator {
            span: span!(self, start),
            name,
            init,
        })
    }

    fn parse_while_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();

        assert_and_bump!(self, "while");

        let test = self.parse_header_expr()?;

        let ctx = Context {
            is_break_allowed: true,
            is_continue_allowed: true,
            ..self.ctx()
        };
        let body = self.with_ctx(ctx).parse_stmt().map(Box::new)?;

        Ok(Stmt::While(WhileStmt {
            span: span!(self, start),
            test,
            body,
        }))
    }

    fn parse_with_stmt(&mut self) -> PResult<Stmt> {
        {
            let span = self.input.cur_span();
            self.emit_strict_mode_err(span, SyntaxError::StrictWith);
        }

        let start = self.input.cur_pos();

        assert_and_bump!(self, "with");

        let obj = self.parse_header_expr()?;
        let body = self.parse_stmt().map(Box::new)?;

        Ok(Stmt::With(WithStmt {
            span: span!(self, start),
            obj,
            body,
        }))
    }

    pub(super) fn parse_block(&mut self, allow_directives: bool) -> PResult<BlockStmt> {
        let start = self.input.cur_pos();

        expect!(self, '{');

        let stmts = self.parse_block_body(allow_directives, Some(&tok!('}')))?;

        let span = span!(self, start);
        Ok(BlockStmt { span, stmts })
    }

    fn parse_labelled_stmt(&mut self, label: Ident) -> PResult<Stmt> {
        let ctx = Context {
            is_break_allowed: true,
            ..self.ctx()
        };

        self.with_ctx(ctx).parse_with(|parser| {
            for existing_label in &parser.state.labels {
                if label.sym == *existing_label {
                    parser.emit_err(
                        label.span,
                        SyntaxError::DuplicateLabel {
                            label: label.sym.clone(),
                        },
                    );
                }
            }

            parser.state.labels.push(label.sym.clone());

            let body = Box::new(if parser.input.is(&tok!("function")) {
                let f = parser.parse_fn_decl()?;
                if let Decl::Fn(FnDecl { function, .. }) = &f {
                    if function.is_generator {
                        syntax_error!(parser, function.span, SyntaxError::LabelledGenerator)
                    }
                }

                Stmt::Decl(f)
            } else {
                parser.parse_stmt()?
            });

            {
                let pos = parser.state.labels.iter().position(|v| v == &label.sym);
                if let Some(pos) = pos {
                    parser.state.labels.remove(pos);
                }
            }

            Ok(Stmt::Labeled(LabeledStmt {
                span: span!(parser, label.span.lo),
                label,
                body,
            }))
        })
    }
}

/// A directive is a leading expression statement holding a bare string
/// literal (parenthesized strings do not count).
fn is_directive(stmt: &Stmt) -> bool {
    match stmt {
        Stmt::Expr(ExprStmt { span, expr }) => match &**expr {
            Expr::Lit(Lit::Str(s)) => span.lo == s.span.lo,
            _ => false,
        },
        _ => false,
    }
}

fn is_use_strict(stmt: &Stmt) -> bool {
    match stmt {
        Stmt::Expr(ExprStmt { span, expr }) => match &**expr {
            // The directive must be the exact source text `"use strict"`;
            // escapes disqualify it.
            Expr::Lit(Lit::Str(s)) => {
                span.lo == s.span.lo
                    && &*s.value == "use strict"
                    && s.span.hi - s.span.lo == BytePos("use strict".len() as u32 + 2)
            }
            _ => false,
        },
        _ => false,
    }
}
