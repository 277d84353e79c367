//! 12. Expressions
use super::{pat::PatType, util::ExprExt, *};
use atoms::js_word;
use either::Either;
use global_common::Spanned;

mod ops;

impl<I: Tokens> Parser<I> {
    /// Name from spec: 'Expression'
    ///
    /// Comma-separated sequence of assignment expressions.
    pub(super) fn parse_expr(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();
        let expr = self.parse_expr_cover_grammar(|p| p.parse_assignment_expr())?;

        if is!(self, ',') {
            let mut exprs = vec![expr];

            while eat!(self, ',') {
                exprs.push(self.parse_expr_cover_grammar(|p| p.parse_assignment_expr())?);
            }

            let expr = Expr::Seq(SeqExpr {
                span: span!(self, start),
                exprs,
            });

            return Ok(Box::new(expr));
        }

        Ok(expr)
    }

    /// Parse an assignment expression. This includes applications of
    /// operators like `+=`.
    pub(super) fn parse_assignment_expr(&mut self) -> PResult<Box<Expr>> {
        if self.ctx().in_generator && is!(self, "yield") {
            return self.parse_yield_expr();
        }

        self.state.potential_arrow_start = match *cur!(self)? {
            Word(Word::Ident(..)) | tok!('(') | tok!("yield") => Some(self.input.cur_pos()),
            _ => None,
        };
        let potential_arrow_start = self.state.potential_arrow_start;

        let start = self.input.cur_pos();

        // Try to parse conditional expression.
        let cond = self.parse_cond_expr()?;

        return_if_arrow!(potential_arrow_start, cond);

        match *cond {
            // if cond is conditional expression but not left-hand-side
            // expression, just return it.
            Expr::Cond(..) | Expr::Bin(..) | Expr::Unary(..) | Expr::Update(..) => {
                return Ok(cond)
            }
            _ => {}
        }

        self.finish_assignment_expr(start, cond)
    }

    fn finish_assignment_expr(&mut self, start: BytePos, cond: Box<Expr>) -> PResult<Box<Expr>> {
        let op = match self.input.cur() {
            Some(&Token::AssignOp(op)) => op,
            _ => return Ok(cond),
        };

        if let Expr::Ident(i) = &*cond {
            if i.sym == js_word!("eval") || i.sym == js_word!("arguments") {
                self.emit_strict_mode_err(i.span, SyntaxError::StrictLHSAssignment);
            }
        }

        let left = if op == AssignOp::Assign {
            if !self.state.allow_destructuring {
                syntax_error!(self, cond.span(), SyntaxError::InvalidLHSInAssignment)
            }

            self.input.bump();
            let pat = self.reparse_expr_as_pat(PatType::AssignPat, cond)?;
            PatOrExpr::Pat(Box::new(pat))
        } else {
            // It's a compound assignment, so the left side must be a plain
            // assignment target.
            if !cond.is_valid_simple_assignment_target(self.ctx().strict) {
                syntax_error!(self, cond.span(), SyntaxError::InvalidLHSInAssignment)
            }

            self.state.allow_destructuring = false;
            self.state.allow_binding = false;

            self.input.bump();
            PatOrExpr::Expr(cond)
        };

        let right = self.parse_expr_cover_grammar(|p| p.parse_assignment_expr())?;

        // A deferred error inside the target is resolved by the assignment
        // itself.
        self.state.pending_cover_error = None;

        Ok(Box::new(Expr::Assign(AssignExpr {
            span: span!(self, start),
            op,
            left,
            right,
        })))
    }

    fn parse_yield_expr(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();

        assert_and_bump!(self, "yield");
        debug_assert!(self.ctx().in_generator);

        // Spec says
        // YieldExpression cannot be used within the FormalParameters of a
        // generator function.
        if self.ctx().in_parameters {
            syntax_error!(self, span!(self, start), SyntaxError::YieldInParameter)
        }

        // The argument must start on the same line as `yield`.
        if !self.input.had_line_break_before_cur() {
            let delegate = eat!(self, '*');

            let has_arg =
                delegate || self.input.cur().map(|t| t.starts_expr()).unwrap_or(false);
            if has_arg {
                let arg = self.parse_assignment_expr()?;

                return Ok(Box::new(Expr::Yield(YieldExpr {
                    span: span!(self, start),
                    arg: Some(arg),
                    delegate,
                })));
            }
        }

        Ok(Box::new(Expr::Yield(YieldExpr {
            span: span!(self, start),
            arg: None,
            delegate: false,
        })))
    }

    /// Spec: 'ConditionalExpression'
    fn parse_cond_expr(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();
        let potential_arrow_start = self.state.potential_arrow_start;

        let test = self.parse_bin_expr()?;
        return_if_arrow!(potential_arrow_start, test);

        if eat!(self, '?') {
            let ctx = Context {
                in_cond_expr: true,
                include_in_expr: true,
                ..self.ctx()
            };
            let cons = self
                .with_ctx(ctx)
                .parse_expr_cover_grammar(|p| p.parse_assignment_expr())?;

            expect!(self, ':');

            let ctx = Context {
                in_cond_expr: true,
                ..self.ctx()
            };
            let alt = self
                .with_ctx(ctx)
                .parse_expr_cover_grammar(|p| p.parse_assignment_expr())?;

            let span = Span::new(start, alt.span().hi);
            Ok(Box::new(Expr::Cond(CondExpr {
                span,
                test,
                cons,
                alt,
            })))
        } else {
            Ok(test)
        }
    }

    /// Parse a primary expression or arrow function
    fn parse_primary_expr(&mut self) -> PResult<Box<Expr>> {
        let _ = self.input.cur();
        let start = self.input.cur_pos();

        let can_be_arrow = self
            .state
            .potential_arrow_start
            .map(|s| s == start)
            .unwrap_or(false);

        if is!(self, "this") {
            self.input.bump();
            return Ok(Box::new(Expr::This(ThisExpr {
                span: span!(self, start),
            })));
        }

        if is!(self, "async") {
            if peeked_is!(self, "function")
                && !self.input.has_linebreak_between_cur_and_peeked()
            {
                // Handle `async function` expression.
                return self.parse_async_fn_expr();
            }

            if can_be_arrow
                && peeked_is!(self, '(')
                && !self.input.has_linebreak_between_cur_and_peeked()
            {
                expect!(self, "async");
                let async_span = self.input.prev_span();
                return self.parse_paren_expr_or_arrow_fn(can_be_arrow, Some(async_span));
            }
        }

        if is!(self, '[') {
            return self.restore_cover_grammar(|p| p.parse_array_lit());
        }

        if is!(self, '{') {
            return self.restore_cover_grammar(|p| p.parse_object());
        }

        // Handle FunctionExpression and GeneratorExpression
        if is!(self, "function") {
            return self.parse_fn_expr();
        }

        if is!(self, "class") {
            return self.parse_class_expr();
        }

        if is!(self, "import") {
            if !self.config().next {
                unexpected!(self)
            }

            let import = self.parse_ident_name()?;

            if is!(self, '.') {
                return self.parse_import_meta_prop(start, import);
            }

            return self.parse_dynamic_import(start, import);
        }

        match *cur!(self)? {
            tok!("null")
            | tok!("true")
            | tok!("false")
            | Token::Num { .. }
            | Token::BigInt { .. }
            | Token::Str { .. } => {
                return Ok(Box::new(Expr::Lit(self.parse_lit()?)));
            }

            Token::Regex(..) => match self.input.bump() {
                Token::Regex(exp, flags) => {
                    let span = span!(self, start);
                    let raw = if self.config().raw {
                        Some(format!("/{}/{}", exp, flags).into())
                    } else {
                        None
                    };
                    return Ok(Box::new(Expr::Lit(Lit::Regex(Regex {
                        span,
                        exp,
                        flags,
                        raw,
                    }))));
                }
                _ => unreachable!(),
            },

            tok!('`') => {
                // parse template literal
                return Ok(Box::new(Expr::Tpl(self.parse_tpl(false)?)));
            }

            tok!('(') => {
                return self.parse_paren_expr_or_arrow_fn(can_be_arrow, None);
            }

            _ => {}
        }

        if is!(self, "let") || is!(self, IdentRef) {
            let id = self.parse_ident_name()?;

            match id.sym {
                js_word!("implements")
                | js_word!("interface")
                | js_word!("let")
                | js_word!("package")
                | js_word!("private")
                | js_word!("protected")
                | js_word!("public")
                | js_word!("static")
                | js_word!("yield") => {
                    self.emit_strict_mode_err(id.span, SyntaxError::UnexpectedStrictReserved);
                }
                _ => {}
            }

            if can_be_arrow
                && id.sym == js_word!("async")
                && !self.input.had_line_break_before_cur()
                && is!(self, BindingIdent)
            {
                // async a => b
                let arg = self.parse_binding_ident()?;
                let params = vec![Pat::Ident(arg)];
                expect!(self, "=>");

                self.state.pending_cover_error = None;
                self.state.allow_binding = false;
                self.state.allow_destructuring = false;

                let body = self.parse_fn_body(true, false)?;

                return Ok(Box::new(Expr::Arrow(ArrowExpr {
                    span: span!(self, start),
                    body,
                    params,
                    is_async: true,
                    is_generator: false,
                })));
            } else if can_be_arrow
                && !self.input.had_line_break_before_cur()
                && eat!(self, "=>")
            {
                // a => b
                if id.sym == js_word!("eval") || id.sym == js_word!("arguments") {
                    self.emit_strict_mode_err(id.span, SyntaxError::StrictEvalArguments);
                }
                let params = vec![Pat::Ident(id)];

                self.state.pending_cover_error = None;
                self.state.allow_binding = false;
                self.state.allow_destructuring = false;

                let body = self.parse_fn_body(false, false)?;

                return Ok(Box::new(Expr::Arrow(ArrowExpr {
                    span: span!(self, start),
                    body,
                    params,
                    is_async: false,
                    is_generator: false,
                })));
            } else {
                return Ok(Box::new(Expr::Ident(id)));
            }
        }

        unexpected!(self)
    }

    /// 12.2.5 Array Initializer
    fn parse_array_lit(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();

        assert_and_bump!(self, '[');
        let mut elems = vec![];
        let mut trailing_comma_span = None;

        while !eof!(self) && !is!(self, ']') {
            if is!(self, ',') {
                expect!(self, ',');
                elems.push(None);
                continue;
            }

            let elem = self
                .restore_cover_grammar(|p| p.include_in_expr(true).parse_expr_or_spread())
                .map(Some)?;

            if !is!(self, ']') {
                let comma_span = self.input.cur_span();
                expect!(self, ',');

                if let Some(ExprOrSpread::Spread(..)) = elem {
                    if is!(self, ']') {
                        // Remember the comma so that reinterpreting the array
                        // as a pattern can reject it.
                        if trailing_comma_span.is_none() {
                            trailing_comma_span = Some(comma_span);
                        }
                    } else {
                        // A spread followed by more elements can never be a
                        // rest pattern.
                        self.state.allow_destructuring = false;
                        self.state.allow_binding = false;
                    }
                }
            }

            elems.push(elem);
        }

        expect!(self, ']');

        let span = span!(self, start);
        if let Some(trailing_comma_span) = trailing_comma_span {
            self.state
                .trailing_commas_after_rest
                .insert(span, trailing_comma_span);
        }

        Ok(Box::new(Expr::Array(ArrayLit { span, elems })))
    }

    /// Parse `NewExpression`.
    /// This includes `MemberExpression`.
    fn parse_new_expr(&mut self) -> PResult<Box<Expr>> {
        self.parse_member_expr_or_new_expr(true)
    }

    /// `is_new_expr`: true iff we are parsing production 'NewExpression'.
    fn parse_member_expr_or_new_expr(&mut self, is_new_expr: bool) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();

        if eat!(self, "new") {
            let span_of_new = span!(self, start);

            if eat!(self, '.') {
                if is!(self, "target") {
                    let span_of_target = self.input.cur_span();
                    let target = self.parse_ident_name()?;

                    if word_contains_escape(span_of_target, &target.sym) {
                        syntax_error!(
                            self,
                            span_of_target,
                            SyntaxError::EscapeInReservedWord {
                                word: js_word!("target")
                            }
                        )
                    }

                    let expr = Box::new(Expr::MetaProp(MetaPropExpr {
                        span: span!(self, start),
                        meta: Ident::new(js_word!("new"), span_of_new),
                        prop: target,
                    }));

                    let ctx = self.ctx();
                    if !ctx.in_function && !ctx.in_parameters {
                        self.emit_err(expr.span(), SyntaxError::MetaNotInFunctionBody);
                    }

                    return self.parse_subscripts(ExprOrSuper::Expr(expr), true);
                }

                syntax_error!(self, self.input.cur_span(), SyntaxError::InvalidNewMetaProp)
            }

            // The callee of `new` is a MemberExpression, so an import call
            // can never appear here.
            if is!(self, "import") && peeked_is!(self, '(') {
                unexpected!(self)
            }

            // 'NewExpression' allows new call without paren.
            let callee = self.parse_member_expr_or_new_expr(is_new_expr)?;

            if !is_new_expr || is!(self, '(') {
                // Parsed with 'MemberExpression' production.
                let args = self.parse_args()?;

                let new_expr = ExprOrSuper::Expr(Box::new(Expr::New(NewExpr {
                    span: span!(self, start),
                    callee,
                    args,
                })));

                // We should parse subscripts for MemberExpression.
                // Because it's left recursive.
                return self.parse_subscripts(new_expr, true);
            }

            // Parsed with 'NewExpression' production.
            return Ok(Box::new(Expr::New(NewExpr {
                span: span!(self, start),
                callee,
                args: vec![],
            })));
        }

        if eat!(self, "super") {
            let base = ExprOrSuper::Super(Super {
                span: span!(self, start),
            });
            return self.parse_subscripts(base, true);
        }

        let potential_arrow_start = self.state.potential_arrow_start;

        let obj = self.parse_primary_expr()?;
        return_if_arrow!(potential_arrow_start, obj);

        self.parse_subscripts(ExprOrSuper::Expr(obj), true)
    }

    /// Parse `
    /// LeftHandSideExpression :
    ///     NewExpression
    ///     CallExpression
    /// `
    pub(super) fn parse_lhs_expr(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();

        if self.config().jsx && matches!(*cur!(self)?, Token::JSXTagStart) {
            return self.parse_jsx_element().map(|e| match e {
                Either::Left(f) => Box::new(Expr::JSXFragment(f)),
                Either::Right(el) => Box::new(Expr::JSXElement(Box::new(el))),
            });
        }

        // `super` property access can't be handled from
        // parse_member_expr_or_new_expr()
        if eat!(self, "super") {
            let obj = ExprOrSuper::Super(Super {
                span: span!(self, start),
            });
            return self.parse_subscripts(obj, false);
        }

        let potential_arrow_start = self.state.potential_arrow_start;

        let callee = self.parse_new_expr()?;
        return_if_arrow!(potential_arrow_start, callee);

        if is!(self, '(') {
            // This is parsed using production MemberExpression,
            // which is left-recursive.
            let args = self.parse_args()?;

            // A call can never be reinterpreted.
            self.state.allow_binding = false;
            self.state.allow_destructuring = false;

            let call_expr = Box::new(Expr::Call(CallExpr {
                span: span!(self, start),
                callee: ExprOrSuper::Expr(callee),
                args,
            }));

            return self.parse_subscripts(ExprOrSuper::Expr(call_expr), false);
        }

        // Member expressions are parsed in parse_new_expr, so we don't
        // handle them here.
        Ok(callee)
    }

    pub(super) fn parse_subscripts(
        &mut self,
        mut obj: ExprOrSuper,
        no_call: bool,
    ) -> PResult<Box<Expr>> {
        loop {
            obj = match self.parse_subscript(obj, no_call)? {
                (expr, false) => return Ok(expr),
                (expr, true) => ExprOrSuper::Expr(expr),
            }
        }
    }

    /// returned bool is true if this method should be called again.
    fn parse_subscript(&mut self, obj: ExprOrSuper, no_call: bool) -> PResult<(Box<Expr>, bool)> {
        let start = obj.span().lo;

        // $obj.name or $obj.#name
        if eat!(self, '.') {
            let prop: Box<Expr> = match self.parse_maybe_private_name()? {
                Either::Left(p) => Box::new(Expr::PrivateName(p)),
                Either::Right(i) => Box::new(Expr::Ident(i)),
            };

            // A member access is a destructuring target but never a binding.
            self.state.allow_binding = false;
            self.state.allow_destructuring = true;

            return Ok((
                Box::new(Expr::Member(MemberExpr {
                    span: span!(self, start),
                    obj,
                    prop,
                    computed: false,
                })),
                true,
            ));
        }

        // $obj[name()]
        if eat!(self, '[') {
            let prop = self.include_in_expr(true).parse_expr()?;
            expect!(self, ']');

            self.state.allow_binding = false;
            self.state.allow_destructuring = true;

            return Ok((
                Box::new(Expr::Member(MemberExpr {
                    span: span!(self, start),
                    obj,
                    prop,
                    computed: true,
                })),
                true,
            ));
        }

        // $obj()
        if !no_call && is!(self, '(') {
            if let ExprOrSuper::Super(s) = &obj {
                syntax_error!(self, s.span, SyntaxError::UnexpectedSuper)
            }

            let args = self.parse_args()?;

            // A call can never be reinterpreted.
            self.state.allow_binding = false;
            self.state.allow_destructuring = false;

            return Ok((
                Box::new(Expr::Call(CallExpr {
                    span: span!(self, start),
                    callee: obj,
                    args,
                })),
                true,
            ));
        }

        // $obj`template`
        if is!(self, '`') {
            let tag = match obj {
                ExprOrSuper::Expr(expr) => expr,
                ExprOrSuper::Super(s) => {
                    syntax_error!(self, s.span, SyntaxError::UnexpectedSuper)
                }
            };

            let tpl = self.parse_tagged_tpl(tag)?;
            return Ok((Box::new(Expr::TaggedTpl(tpl)), true));
        }

        match obj {
            ExprOrSuper::Expr(expr) => Ok((expr, false)),
            ExprOrSuper::Super(s) => {
                syntax_error!(self, s.span, SyntaxError::UnexpectedSuper)
            }
        }
    }

    pub(super) fn parse_expr_or_spread(&mut self) -> PResult<ExprOrSpread> {
        let start = self.input.cur_pos();

        if eat!(self, "...") {
            let expr = self.include_in_expr(true).parse_assignment_expr()?;
            let span = Span::new(start, expr.span().hi);

            Ok(ExprOrSpread::Spread(SpreadElement { span, expr }))
        } else {
            self.parse_assignment_expr().map(ExprOrSpread::Expr)
        }
    }

    /// Parse `Arguments[Yield, Await]`
    pub(super) fn parse_args(&mut self) -> PResult<Vec<ExprOrSpread>> {
        expect!(self, '(');

        let mut first = true;
        let mut expr_or_spreads = vec![];

        while !eof!(self) && !is!(self, ')') {
            if first {
                first = false;
            } else {
                expect!(self, ',');
                // Handle trailing comma.
                if is!(self, ')') {
                    break;
                }
            }

            expr_or_spreads.push(
                self.parse_expr_cover_grammar(|p| p.include_in_expr(true).parse_expr_or_spread())?,
            );
        }

        expect!(self, ')');
        Ok(expr_or_spreads)
    }

    /// Parse the items between the parens of a potential arrow head. The
    /// second half of the result is the span of a trailing comma, if one was
    /// present.
    fn parse_args_or_pats(&mut self) -> PResult<(Vec<ExprOrSpread>, Option<Span>)> {
        expect!(self, '(');

        let mut first = true;
        let mut items = vec![];
        let mut trailing_comma = None;

        while !eof!(self) && !is!(self, ')') {
            if first {
                first = false;
            } else {
                expect!(self, ',');
                // Handle trailing comma.
                if is!(self, ')') {
                    trailing_comma = Some(self.input.prev_span());
                    break;
                }
            }

            let item = self
                .restore_cover_grammar(|p| p.include_in_expr(true).parse_expr_or_spread())?;
            items.push(item);
        }

        expect!(self, ')');
        Ok((items, trailing_comma))
    }

    /// Parse paren expression or arrow function expression.
    fn parse_paren_expr_or_arrow_fn(
        &mut self,
        can_be_arrow: bool,
        async_span: Option<Span>,
    ) -> PResult<Box<Expr>> {
        let expr_start = async_span
            .map(|x| x.lo)
            .unwrap_or_else(|| self.input.cur_pos());

        // At this point, we can't know if it's parenthesized expression or
        // head of arrow function. But as all patterns of javascript is a
        // subset of expressions, we can parse both as expressions.
        let (paren_items, trailing_comma) = self.include_in_expr(true).parse_args_or_pats()?;

        // We parse arrow function at here, to handle it efficiently.
        if is!(self, "=>") {
            if self.input.had_line_break_before_cur() {
                syntax_error!(
                    self,
                    span!(self, expr_start),
                    SyntaxError::LineBreakBeforeArrow
                );
            }
            if !can_be_arrow {
                unexpected!(self)
            }
            expect!(self, "=>");

            // A rest element must be the last item and must not be followed
            // by a comma.
            for (i, item) in paren_items.iter().enumerate() {
                if let ExprOrSpread::Spread(s) = item {
                    if i != paren_items.len() - 1 {
                        syntax_error!(self, s.span, SyntaxError::NonLastRestParam)
                    }
                    if let Some(trailing_comma) = trailing_comma {
                        syntax_error!(self, trailing_comma, SyntaxError::CommaAfterRestElement)
                    }
                }
            }

            // The head turned out to be an arrow head, so nothing deferred
            // inside it can be an error.
            self.state.pending_cover_error = None;
            self.state.allow_binding = false;
            self.state.allow_destructuring = false;

            let params = self.parse_paren_items_as_params(paren_items)?;

            let body: BlockStmtOrExpr = self.parse_fn_body(async_span.is_some(), false)?;

            if let BlockStmtOrExpr::BlockStmt(block) = &body {
                self.check_use_strict_directive(&params, block);
            }

            let arrow_expr = ArrowExpr {
                span: span!(self, expr_start),
                is_async: async_span.is_some(),
                is_generator: false,
                params,
                body,
            };

            return Ok(Box::new(Expr::Arrow(arrow_expr)));
        }

        // It was not head of arrow function.

        if let Some(async_span) = async_span {
            // It's a call to a function named `async`.
            let callee = ExprOrSuper::Expr(Box::new(Expr::Ident(Ident::new(
                js_word!("async"),
                async_span,
            ))));

            // A call can never be reinterpreted.
            self.state.allow_binding = false;
            self.state.allow_destructuring = false;

            return Ok(Box::new(Expr::Call(CallExpr {
                span: span!(self, expr_start),
                callee,
                args: paren_items,
            })));
        }

        // `()` is only valid as the head of an arrow function.
        if paren_items.is_empty() {
            unexpected!(self)
        }

        if let Some(trailing_comma) = trailing_comma {
            syntax_error!(
                self,
                trailing_comma,
                SyntaxError::UnexpectedToken { got: ",".into() }
            );
        }

        if paren_items.len() == 1 {
            let expr = match paren_items.into_iter().next() {
                Some(ExprOrSpread::Expr(expr)) => expr,
                _ => unexpected!(self),
            };

            // A parenthesized expression can no longer be bound and survives
            // as an assignment target only if it is a plain one.
            self.state.allow_binding = false;
            if !expr.is_valid_simple_assignment_target(self.ctx().strict) {
                self.state.allow_destructuring = false;
            }

            // Span of the expression should not include '(' and ')'.
            return Ok(expr);
        }

        let mut exprs = Vec::with_capacity(paren_items.len());
        for item in paren_items {
            match item {
                ExprOrSpread::Expr(expr) => exprs.push(expr),
                ExprOrSpread::Spread(..) => unexpected!(self),
            }
        }
        debug_assert!(exprs.len() >= 2);

        self.state.allow_binding = false;
        self.state.allow_destructuring = false;

        // Span of the sequence should not include '(' and ')'.
        let seq_span = Span::new(
            exprs.first().unwrap().span().lo,
            exprs.last().unwrap().span().hi,
        );

        Ok(Box::new(Expr::Seq(SeqExpr {
            span: seq_span,
            exprs,
        })))
    }

    /// Parse `import.meta`. The parser is at `.` and `import` has already
    /// been eaten.
    fn parse_import_meta_prop(&mut self, start: BytePos, import: Ident) -> PResult<Box<Expr>> {
        expect!(self, '.');

        let prop = if is!(self, "meta") {
            self.parse_ident_name()?
        } else {
            unexpected!(self)
        };

        let span = span!(self, start);
        if !self.ctx().is_module() {
            self.emit_err(span, SyntaxError::ImportMetaInScript);
        }

        let expr = Box::new(Expr::MetaProp(MetaPropExpr {
            span,
            meta: import,
            prop,
        }));

        self.parse_subscripts(ExprOrSuper::Expr(expr), true)
    }

    /// Parse `import(specifier)`. The parser is at `(` and `import` has
    /// already been eaten.
    fn parse_dynamic_import(&mut self, start: BytePos, import_ident: Ident) -> PResult<Box<Expr>> {
        expect!(self, '(');

        // An import call takes exactly one argument with no trailing comma.
        let arg = self.parse_expr_cover_grammar(|p| {
            p.include_in_expr(true).parse_assignment_expr()
        })?;

        expect!(self, ')');

        let import = Box::new(Expr::Call(CallExpr {
            span: span!(self, start),
            callee: ExprOrSuper::Expr(Box::new(Expr::Import(Import {
                span: import_ident.span,
            }))),
            args: vec![ExprOrSpread::Expr(arg)],
        }));

        self.parse_subscripts(ExprOrSuper::Expr(import), true)
    }

    fn parse_tagged_tpl(&mut self, tag: Box<Expr>) -> PResult<TaggedTpl> {
        let start = tag.span().lo;

        let tpl = self.parse_tpl(true)?;

        Ok(TaggedTpl {
            span: span!(self, start),
            tag,
            tpl,
        })
    }

    pub(super) fn parse_tpl(&mut self, is_tagged: bool) -> PResult<Tpl> {
        let start = self.input.cur_pos();

        assert_and_bump!(self, '`');

        let (exprs, quasis) = self.parse_tpl_elements(is_tagged)?;

        expect!(self, '`');

        Ok(Tpl {
            span: span!(self, start),
            exprs,
            quasis,
        })
    }

    fn parse_tpl_elements(
        &mut self,
        is_tagged: bool,
    ) -> PResult<(Vec<Box<Expr>>, Vec<TplElement>)> {
        let mut exprs = vec![];

        let cur_elem = self.parse_tpl_element(is_tagged)?;
        let mut is_tail = cur_elem.tail;
        let mut quasis = vec![cur_elem];

        while !is_tail {
            expect!(self, "${");
            exprs.push(self.include_in_expr(true).parse_expr()?);
            expect!(self, '}');

            let elem = self.parse_tpl_element(is_tagged)?;
            is_tail = elem.tail;
            quasis.push(elem);
        }

        Ok((exprs, quasis))
    }

    fn parse_tpl_element(&mut self, is_tagged: bool) -> PResult<TplElement> {
        let start = self.input.cur_pos();

        let (raw, cooked) = match *cur!(self)? {
            Token::Template { .. } => match self.input.bump() {
                Token::Template { raw, cooked } => (raw, cooked),
                _ => unreachable!(),
            },
            _ => unexpected!(self),
        };

        // An invalid escape is only permitted in tagged templates; there the
        // cooked value is absent.
        if cooked.is_none() && !is_tagged {
            syntax_error!(self, span!(self, start), SyntaxError::InvalidTplEscape)
        }

        let span = span!(self, start);
        let tail = is!(self, '`');

        Ok(TplElement {
            span,
            raw,
            cooked,
            tail,
        })
    }

    pub(super) fn parse_lit(&mut self) -> PResult<Lit> {
        let start = self.input.cur_pos();
        let record_raw = self.config().raw;

        let v = match *cur!(self)? {
            Word(Word::Null) => {
                self.input.bump();
                Lit::Null(Null {
                    span: span!(self, start),
                    raw: if record_raw {
                        Some(js_word!("null"))
                    } else {
                        None
                    },
                })
            }
            Word(Word::True) | Word(Word::False) => {
                let value = self.input.bump() == tok!("true");
                Lit::Bool(Bool {
                    span: span!(self, start),
                    value,
                    raw: if record_raw {
                        Some(if value {
                            js_word!("true")
                        } else {
                            js_word!("false")
                        })
                    } else {
                        None
                    },
                })
            }
            Token::Str { .. } => match self.input.bump() {
                Token::Str { value, raw, .. } => Lit::Str(Str {
                    span: span!(self, start),
                    value,
                    raw: if record_raw { Some(raw) } else { None },
                }),
                _ => unreachable!(),
            },
            Token::Num { .. } => match self.input.bump() {
                Token::Num { value, raw } => Lit::Num(Number {
                    span: span!(self, start),
                    value,
                    raw: if record_raw { Some(raw) } else { None },
                }),
                _ => unreachable!(),
            },
            Token::BigInt { .. } => match self.input.bump() {
                Token::BigInt { value, raw } => {
                    // The sign is always plus; `-1n` is a unary expression.
                    let (_, value) = value.into_parts();
                    Lit::BigInt(BigInt {
                        span: span!(self, start),
                        value,
                        raw: if record_raw { Some(raw) } else { None },
                    })
                }
                _ => unreachable!(),
            },
            _ => unreachable!("parse_lit should not be called"),
        };

        Ok(v)
    }

    fn check_assign_target(&mut self, expr: &Expr) {
        match expr {
            Expr::Ident(i) if i.sym == js_word!("eval") || i.sym == js_word!("arguments") => {
                self.emit_strict_mode_err(i.span, SyntaxError::StrictEvalArguments);
            }
            _ => {
                if !expr.is_valid_simple_assignment_target(self.ctx().strict) {
                    self.emit_err(expr.span(), SyntaxError::InvalidLHSInAssignment);
                }
            }
        }
    }
}

fn word_contains_escape(span: Span, word: &JsWord) -> bool {
    span.hi - span.lo != BytePos(word.len() as u32)
}
