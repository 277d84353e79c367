//! Parser for object literal.

use super::{util::ParseObject, *};
use atoms::js_word;
use global_common::Spanned;

impl<I: Tokens> Parser<I> {
    /// Parse an object literal or object pattern.
    pub(super) fn parse_object<T>(&mut self) -> PResult<T>
    where
        Self: ParseObject<T>,
    {
        let start = self.input.cur_pos();
        assert_and_bump!(self, '{');

        let mut props = vec![];

        let mut first = true;
        while !eat!(self, '}') {
            // Handle comma
            if first {
                first = false;
            } else {
                expect!(self, ',');
                if eat!(self, '}') {
                    break;
                }
            }

            let prop = self.parse_object_prop()?;
            props.push(prop);
        }

        self.make_object(span!(self, start), props)
    }

    /// spec: 'PropertyName'
    ///
    /// Returns the key and whether it was a computed key.
    pub(super) fn parse_prop_name(&mut self) -> PResult<(Box<Expr>, bool)> {
        let ctx = Context {
            in_property_name: true,
            ..self.ctx()
        };
        self.with_ctx(ctx).parse_with(|parser| {
            let start = parser.input.cur_pos();
            let record_raw = parser.config().raw;

            let key = match *cur!(parser)? {
                Token::Str { .. } => match parser.input.bump() {
                    Token::Str { value, raw, .. } => Expr::Lit(Lit::Str(Str {
                        span: span!(parser, start),
                        value,
                        raw: if record_raw { Some(raw) } else { None },
                    })),
                    _ => unreachable!(),
                },
                Token::Num { .. } => match parser.input.bump() {
                    Token::Num { value, raw } => Expr::Lit(Lit::Num(Number {
                        span: span!(parser, start),
                        value,
                        raw: if record_raw { Some(raw) } else { None },
                    })),
                    _ => unreachable!(),
                },
                Token::BigInt { .. } => match parser.input.bump() {
                    Token::BigInt { value, raw } => {
                        let (_, value) = value.into_parts();
                        Expr::Lit(Lit::BigInt(BigInt {
                            span: span!(parser, start),
                            value,
                            raw: if record_raw { Some(raw) } else { None },
                        }))
                    }
                    _ => unreachable!(),
                },
                Word(..) => match parser.input.bump() {
                    Word(w) => Expr::Ident(Ident::new(w.into(), span!(parser, start))),
                    _ => unreachable!(),
                },
                tok!('[') => {
                    parser.input.bump();
                    let expr = parser.parse_expr_cover_grammar(|p| {
                        p.include_in_expr(true).parse_assignment_expr()
                    })?;
                    expect!(parser, ']');
                    return Ok((expr, true));
                }
                _ => unexpected!(parser),
            };

            Ok((Box::new(key), false))
        })
    }

    /// Rejects reserved words in a position where the name was read as an
    /// `IdentifierName` but the grammar wants an identifier.
    fn check_reserved_word_obj_prop(&mut self, ident: &Ident) {
        if self.ctx().is_reserved_word(&ident.sym) {
            self.emit_err(ident.span, SyntaxError::UnexpectedReserved);
        } else if matches!(
            ident.sym,
            js_word!("yield")
                | js_word!("static")
                | js_word!("implements")
                | js_word!("interface")
                | js_word!("let")
                | js_word!("package")
                | js_word!("private")
                | js_word!("protected")
                | js_word!("public")
        ) {
            self.emit_strict_mode_err(ident.span, SyntaxError::UnexpectedStrictReserved);
        }
    }
}

impl<I: Tokens> ParseObject<Box<Expr>> for Parser<I> {
    type Prop = PropOrSpread;

    fn make_object(&mut self, span: Span, props: Vec<Self::Prop>) -> PResult<Box<Expr>> {
        // Annex B: duplicate plain `__proto__` definitions are an error in an
        // object literal but not in an object assignment pattern, so the
        // error is deferred and dies if this object is later reinterpreted
        // as a pattern.
        let mut seen_proto = false;
        for prop in &props {
            let prop = match prop {
                PropOrSpread::Prop(prop) => prop,
                PropOrSpread::Spread(..) => continue,
            };
            if prop.computed || prop.method || prop.shorthand || prop.kind != PropKind::Init {
                continue;
            }

            let is_proto = match &*prop.key {
                Expr::Ident(i) => i.sym == js_word!("__proto__"),
                Expr::Lit(Lit::Str(s)) => s.value == js_word!("__proto__"),
                _ => false,
            };
            if is_proto {
                if seen_proto {
                    self.state.pending_cover_error = Some(Error {
                        error: Box::new((prop.key.span(), SyntaxError::DuplicateProto)),
                    });
                }
                seen_proto = true;
            }
        }

        Ok(Box::new(Expr::Object(ObjectLit { span, props })))
    }

    /// spec: 'PropertyDefinition'
    fn parse_object_prop(&mut self) -> PResult<Self::Prop> {
        let start = self.input.cur_pos();

        if eat!(self, "...") {
            // spread property
            let expr =
                self.restore_cover_grammar(|p| p.include_in_expr(true).parse_assignment_expr())?;

            return Ok(PropOrSpread::Spread(SpreadElement {
                span: span!(self, start),
                expr,
            }));
        }

        // `*foo() {}`
        if eat!(self, '*') {
            let (key, computed) = self.parse_prop_name()?;
            let fn_start = self.input.cur_pos();

            return self
                .parse_fn_args_body(fn_start, |parser| parser.parse_formal_params(), false, true)
                .map(|function| {
                    PropOrSpread::Prop(Box::new(Prop {
                        span: span!(self, start),
                        key,
                        value: PatOrExpr::Expr(Box::new(Expr::Fn(FnExpr {
                            ident: None,
                            function: Box::new(function),
                        }))),
                        kind: PropKind::Init,
                        computed,
                        method: true,
                        shorthand: false,
                    }))
                });
        }

        let (key, computed) = self.parse_prop_name()?;

        // {[computed()]: a,}
        // { 'a': a, }
        // { 0: 1, }
        // { a: expr, }
        if eat!(self, ':') {
            let value =
                self.restore_cover_grammar(|p| p.include_in_expr(true).parse_assignment_expr())?;

            return Ok(PropOrSpread::Prop(Box::new(Prop {
                span: span!(self, start),
                key,
                value: PatOrExpr::Expr(value),
                kind: PropKind::Init,
                computed,
                method: false,
                shorthand: false,
            })));
        }

        // Handle `a() {}`
        if is!(self, '(') {
            let fn_start = self.input.cur_pos();

            return self
                .parse_fn_args_body(fn_start, |parser| parser.parse_formal_params(), false, false)
                .map(|function| {
                    PropOrSpread::Prop(Box::new(Prop {
                        span: span!(self, start),
                        key,
                        value: PatOrExpr::Expr(Box::new(Expr::Fn(FnExpr {
                            ident: None,
                            function: Box::new(function),
                        }))),
                        kind: PropKind::Init,
                        computed,
                        method: true,
                        shorthand: false,
                    }))
                });
        }

        let ident = match *key {
            Expr::Ident(i) => i,
            _ => unexpected!(self),
        };

        // `ident` was parsed as an 'IdentifierName', so invalid shorthands
        // like `{ for }` must be rejected here.
        if is_one_of!(self, '=', ',', '}') {
            self.check_reserved_word_obj_prop(&ident);

            if is!(self, '=') {
                // CoverInitializedName; only valid if the whole object later
                // turns into an assignment pattern.
                let eq_span = self.input.cur_span();
                assert_and_bump!(self, '=');
                self.state.pending_cover_error = Some(Error {
                    error: Box::new((eq_span, SyntaxError::InvalidLHSInAssignment)),
                });

                if ident.sym == js_word!("eval") || ident.sym == js_word!("arguments") {
                    self.emit_strict_mode_err(ident.span, SyntaxError::StrictEvalArguments);
                }

                let right = self
                    .parse_expr_cover_grammar(|p| p.include_in_expr(true).parse_assignment_expr())?;

                let span = span!(self, start);
                return Ok(PropOrSpread::Prop(Box::new(Prop {
                    span,
                    key: Box::new(Expr::Ident(ident.clone())),
                    value: PatOrExpr::Pat(Box::new(Pat::Assign(AssignPat {
                        span,
                        left: Box::new(Pat::Ident(ident)),
                        right,
                    }))),
                    kind: PropKind::Init,
                    computed: false,
                    method: false,
                    shorthand: true,
                })));
            }

            return Ok(PropOrSpread::Prop(Box::new(Prop {
                span: span!(self, start),
                key: Box::new(Expr::Ident(ident.clone())),
                value: PatOrExpr::Expr(Box::new(Expr::Ident(ident))),
                kind: PropKind::Init,
                computed: false,
                method: false,
                shorthand: true,
            })));
        }

        // get a() {}
        // set a(v) {}
        // async a() {}
        match ident.sym {
            js_word!("get") | js_word!("set") | js_word!("async") => {}
            _ => unexpected!(self),
        }

        // `async` must be directly followed by the method name.
        if ident.sym == js_word!("async") && self.input.had_line_break_before_cur() {
            unexpected!(self)
        }

        let is_generator = ident.sym == js_word!("async") && eat!(self, '*');
        let (key, computed) = self.parse_prop_name()?;
        let key_span = key.span();
        let fn_start = self.input.cur_pos();

        match ident.sym {
            js_word!("get") => self
                .parse_fn_args_body(
                    fn_start,
                    |parser| {
                        let params = parser.parse_formal_params()?;

                        if !params.is_empty() {
                            parser.emit_err(key_span, SyntaxError::BadGetterArity);
                        }

                        Ok(params)
                    },
                    false,
                    false,
                )
                .map(|function| {
                    PropOrSpread::Prop(Box::new(Prop {
                        span: span!(self, start),
                        key,
                        value: PatOrExpr::Expr(Box::new(Expr::Fn(FnExpr {
                            ident: None,
                            function: Box::new(function),
                        }))),
                        kind: PropKind::Get,
                        computed,
                        method: false,
                        shorthand: false,
                    }))
                }),
            js_word!("set") => self
                .parse_fn_args_body(
                    fn_start,
                    |parser| {
                        let params = parser.parse_formal_params()?;

                        if params.len() != 1 {
                            parser.emit_err(key_span, SyntaxError::BadSetterArity);
                        }

                        if let Some(Pat::Rest(first)) = params.first() {
                            parser.emit_err(first.span, SyntaxError::BadSetterRestParameter);
                        }

                        Ok(params)
                    },
                    false,
                    false,
                )
                .map(|function| {
                    PropOrSpread::Prop(Box::new(Prop {
                        span: span!(self, start),
                        key,
                        value: PatOrExpr::Expr(Box::new(Expr::Fn(FnExpr {
                            ident: None,
                            function: Box::new(function),
                        }))),
                        kind: PropKind::Set,
                        computed,
                        method: false,
                        shorthand: false,
                    }))
                }),
            js_word!("async") => self
                .parse_fn_args_body(
                    fn_start,
                    |parser| parser.parse_formal_params(),
                    true,
                    is_generator,
                )
                .map(|function| {
                    PropOrSpread::Prop(Box::new(Prop {
                        span: span!(self, start),
                        key,
                        value: PatOrExpr::Expr(Box::new(Expr::Fn(FnExpr {
                            ident: None,
                            function: Box::new(function),
                        }))),
                        kind: PropKind::Init,
                        computed,
                        method: true,
                        shorthand: false,
                    }))
                }),
            _ => unreachable!(),
        }
    }
}

impl<I: Tokens> ParseObject<Pat> for Parser<I> {
    type Prop = ObjectPatProp;

    fn make_object(&mut self, span: Span, props: Vec<Self::Prop>) -> PResult<Pat> {
        let len = props.len();
        for (i, prop) in props.iter().enumerate() {
            if let ObjectPatProp::Rest(rest) = prop {
                if i != len - 1 {
                    syntax_error!(self, rest.span, SyntaxError::NonLastRestParam)
                }
            }
        }

        Ok(Pat::Object(ObjectPat { span, props }))
    }

    /// spec: 'BindingProperty'
    fn parse_object_prop(&mut self) -> PResult<Self::Prop> {
        let start = self.input.cur_pos();

        if eat!(self, "...") {
            // Rest property; only a binding identifier can follow.
            let arg = Box::new(Pat::Ident(self.parse_binding_ident()?));

            return Ok(ObjectPatProp::Rest(RestPat {
                span: span!(self, start),
                arg,
            }));
        }

        let (key, computed) = self.parse_prop_name()?;
        if eat!(self, ':') {
            let value = self.parse_binding_element()?;

            return Ok(ObjectPatProp::Prop(Box::new(Prop {
                span: span!(self, start),
                key,
                value: PatOrExpr::Pat(Box::new(value)),
                kind: PropKind::Init,
                computed,
                method: false,
                shorthand: false,
            })));
        }

        // Single name binding.
        let ident = match *key {
            Expr::Ident(i) => i,
            _ => unexpected!(self),
        };

        self.check_reserved_word_obj_prop(&ident);
        if ident.sym == js_word!("eval") || ident.sym == js_word!("arguments") {
            self.emit_strict_mode_err(ident.span, SyntaxError::StrictEvalArguments);
        }

        let value = if eat!(self, '=') {
            let right = self
                .parse_expr_cover_grammar(|p| p.include_in_expr(true).parse_assignment_expr())?;

            Pat::Assign(AssignPat {
                span: span!(self, start),
                left: Box::new(Pat::Ident(ident.clone())),
                right,
            })
        } else {
            Pat::Ident(ident.clone())
        };

        Ok(ObjectPatProp::Prop(Box::new(Prop {
            span: span!(self, start),
            key: Box::new(Expr::Ident(ident)),
            value: PatOrExpr::Pat(Box::new(value)),
            kind: PropKind::Init,
            computed: false,
            method: false,
            shorthand: true,
        })))
    }
}
