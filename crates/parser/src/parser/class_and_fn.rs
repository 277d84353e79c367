use super::{identifier::MaybeOptionalIdentParser, *};
use atoms::js_word;
use either::Either;
use global_common::Spanned;

/// A class member name: a private name, or a key expression with its
/// computed-ness.
type ClassKey = Either<PrivateName, (Box<Expr>, bool)>;

/// Parser for function expressions, function declarations and classes.
impl<I: Tokens> Parser<I> {
    pub(super) fn parse_async_fn_expr(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();
        expect!(self, "async");
        self.parse_fn(Some(start))
    }

    /// Parse function expression
    pub(super) fn parse_fn_expr(&mut self) -> PResult<Box<Expr>> {
        self.parse_fn(None)
    }

    pub(super) fn parse_async_fn_decl(&mut self) -> PResult<Decl> {
        let start = self.input.cur_pos();
        expect!(self, "async");
        self.parse_fn(Some(start))
    }

    pub(super) fn parse_fn_decl(&mut self) -> PResult<Decl> {
        self.parse_fn(None)
    }

    pub(super) fn parse_class_decl(&mut self, start: BytePos) -> PResult<Decl> {
        self.parse_class(start)
    }

    pub(super) fn parse_class_expr(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();
        self.parse_class(start)
    }

    fn parse_class<T>(&mut self, start: BytePos) -> PResult<T>
    where
        T: OutputType,
        Self: MaybeOptionalIdentParser<T::Ident>,
    {
        // Class definitions are always strict mode code, including the
        // heritage clause.
        self.strict_mode().parse_with(|parser| {
            expect!(parser, "class");

            let ident = parser.parse_maybe_opt_binding_ident()?;

            let super_class = if eat!(parser, "extends") {
                Some(parser.parse_lhs_expr()?)
            } else {
                None
            };

            let body_start = parser.input.cur_pos();
            expect!(parser, '{');
            let members = parser
                .with_ctx(Context {
                    has_super_class: super_class.is_some(),
                    ..parser.ctx()
                })
                .parse_with(|parser| parser.parse_class_body())?;
            expect!(parser, '}');
            let end = parser.input.last_pos();

            Ok(T::finish_class(
                ident,
                Class {
                    span: Span::new(start, end),
                    super_class,
                    body: ClassBody {
                        span: Span::new(body_start, end),
                        body: members,
                    },
                },
            ))
        })
    }

    fn parse_class_body(&mut self) -> PResult<Vec<ClassMember>> {
        let mut elems = vec![];
        let mut has_constructor = false;
        while !eof!(self) && !is!(self, '}') {
            // An empty member has no node of its own.
            if self.input.eat(&tok!(';')) {
                continue;
            }

            let elem = self.parse_class_member()?;
            if let ClassMember::Method(m) = &elem {
                if m.kind == MethodKind::Constructor {
                    if has_constructor {
                        self.emit_err(m.key.span(), SyntaxError::DuplicateConstructor);
                    }
                    has_constructor = true;
                }
            }
            elems.push(elem);
        }
        Ok(elems)
    }

    fn parse_class_member(&mut self) -> PResult<ClassMember> {
        let start = self.input.cur_pos();

        let static_token = {
            let start = self.input.cur_pos();
            if eat!(self, "static") {
                Some(span!(self, start))
            } else {
                None
            }
        };

        if let Some(static_token) = static_token {
            // Handle static(){}
            if self.is_class_method() {
                let key = Either::Right((
                    Box::new(Expr::Ident(Ident::new(js_word!("static"), static_token))),
                    false,
                ));
                return self.make_method(
                    |parser| parser.parse_formal_params(),
                    MakeMethodArgs {
                        start,
                        static_token: None,
                        key,
                        kind: MethodKind::Method,
                        is_async: false,
                        is_generator: false,
                    },
                );
            }

            // Property named `static`
            if self.is_class_property() {
                let key = Either::Right((
                    Box::new(Expr::Ident(Ident::new(js_word!("static"), static_token))),
                    false,
                ));
                return self.make_property(start, key, false);
            }
        }

        self.parse_class_member_with_is_static(start, static_token)
    }

    fn parse_class_member_with_is_static(
        &mut self,
        start: BytePos,
        static_token: Option<Span>,
    ) -> PResult<ClassMember> {
        let is_static = static_token.is_some();

        if eat!(self, '*') {
            // generator method
            let key = self.parse_class_prop_name()?;
            self.check_static_prototype(static_token, &key);
            if !is_static && is_constructor(&key) {
                self.emit_err(span!(self, start), SyntaxError::ConstructorIsGenerator);
            }

            return self.make_method(
                |parser| parser.parse_formal_params(),
                MakeMethodArgs {
                    start,
                    static_token,
                    key,
                    kind: MethodKind::Method,
                    is_async: false,
                    is_generator: true,
                },
            );
        }

        let key = self.parse_class_prop_name()?;
        self.check_static_prototype(static_token, &key);

        if self.is_class_method() {
            // handle a(){} / get(){} / set(){} / async(){} / constructor(){}
            //
            // A static method named `constructor` is an ordinary method.
            let kind = if !is_static && is_constructor(&key) {
                MethodKind::Constructor
            } else {
                MethodKind::Method
            };

            return self.make_method(
                |parser| parser.parse_formal_params(),
                MakeMethodArgs {
                    start,
                    static_token,
                    key,
                    kind,
                    is_async: false,
                    is_generator: false,
                },
            );
        }

        if self.is_class_property() {
            return self.make_property(start, key, is_static);
        }

        let is_async_modifier = match &key {
            Either::Right((expr, false)) => match &**expr {
                Expr::Ident(i) => i.sym == js_word!("async"),
                _ => false,
            },
            _ => false,
        };

        if is_async_modifier && !self.input.had_line_break_before_cur() {
            // handle async foo(){}
            let is_generator = eat!(self, '*');
            let key = self.parse_class_prop_name()?;
            self.check_static_prototype(static_token, &key);
            if !is_static && is_constructor(&key) {
                self.emit_err(key_span(&key), SyntaxError::ConstructorIsAsync);
            }

            return self.make_method(
                |parser| parser.parse_formal_params(),
                MakeMethodArgs {
                    start,
                    static_token,
                    key,
                    kind: MethodKind::Method,
                    is_async: true,
                    is_generator,
                },
            );
        }

        // `get\n*` is an uninitialized property named `get` followed by a
        // generator.
        let is_next_line_generator = self.input.had_line_break_before_cur() && is!(self, '*');

        let getter_or_setter = match &key {
            Either::Right((expr, false)) if !is_next_line_generator => match &**expr {
                Expr::Ident(i) if i.sym == js_word!("get") => Some(MethodKind::Getter),
                Expr::Ident(i) if i.sym == js_word!("set") => Some(MethodKind::Setter),
                _ => None,
            },
            _ => None,
        };

        if let Some(kind) = getter_or_setter {
            // handle get foo(){} / set foo(v){}
            let key = self.parse_class_prop_name()?;
            self.check_static_prototype(static_token, &key);
            let key_span = key_span(&key);
            if !is_static && is_constructor(&key) {
                self.emit_err(key_span, SyntaxError::ConstructorSpecialMethod);
            }

            return match kind {
                MethodKind::Getter => self.make_method(
                    |parser| {
                        let params = parser.parse_formal_params()?;

                        if !params.is_empty() {
                            parser.emit_err(key_span, SyntaxError::BadGetterArity);
                        }

                        Ok(params)
                    },
                    MakeMethodArgs {
                        start,
                        static_token,
                        key,
                        kind,
                        is_async: false,
                        is_generator: false,
                    },
                ),
                MethodKind::Setter => self.make_method(
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
                    MakeMethodArgs {
                        start,
                        static_token,
                        key,
                        kind,
                        is_async: false,
                        is_generator: false,
                    },
                ),
                _ => unreachable!(),
            };
        }

        unexpected!(self)
    }

    fn make_property(
        &mut self,
        start: BytePos,
        key: ClassKey,
        is_static: bool,
    ) -> PResult<ClassMember> {
        // `constructor` cannot be a field name, static or not.
        if is_constructor(&key) {
            self.emit_err(key_span(&key), SyntaxError::ConstructorClassField);
        }

        let (key, computed) = match key {
            Either::Left(name) => (Box::new(Expr::PrivateName(name)), false),
            Either::Right((key, computed)) => (key, computed),
        };

        let ctx = Context {
            in_class_prop: true,
            in_method: false,
            include_in_expr: true,
            ..self.ctx()
        };
        self.with_ctx(ctx).parse_with(|parser| {
            let value = if eat!(parser, '=') {
                Some(parser.parse_expr_cover_grammar(|parser| parser.parse_assignment_expr())?)
            } else {
                None
            };

            expect!(parser, ';');

            Ok(ClassMember::Prop(ClassProp {
                span: span!(parser, start),
                key,
                value,
                computed,
                is_static,
            }))
        })
    }

    fn make_method<F>(
        &mut self,
        parse_args: F,
        MakeMethodArgs {
            start,
            static_token,
            key,
            kind,
            is_async,
            is_generator,
        }: MakeMethodArgs,
    ) -> PResult<ClassMember>
    where
        F: FnOnce(&mut Self) -> PResult<Vec<Pat>>,
    {
        let is_static = static_token.is_some();

        let fn_start = self.input.cur_pos();
        let function = self.parse_fn_args_body(fn_start, parse_args, is_async, is_generator)?;

        let (key, computed) = match key {
            Either::Left(name) => (Box::new(Expr::PrivateName(name)), false),
            Either::Right((key, computed)) => (key, computed),
        };

        Ok(ClassMember::Method(ClassMethod {
            span: span!(self, start),
            kind,
            is_static,
            computed,
            key,
            value: FnExpr {
                ident: None,
                function: Box::new(function),
            },
        }))
    }

    fn is_class_method(&mut self) -> bool {
        is!(self, '(')
    }

    fn is_class_property(&mut self) -> bool {
        self.config().next && is_one_of!(self, '=', ';', '}')
    }

    fn parse_class_prop_name(&mut self) -> PResult<ClassKey> {
        if self.config().next && is!(self, '#') {
            let name = self.parse_private_name()?;
            if name.name == js_word!("constructor") {
                self.emit_err(name.span, SyntaxError::PrivateFieldConstructor);
            }
            Ok(Either::Left(name))
        } else {
            self.parse_prop_name().map(Either::Right)
        }
    }

    /// A static member may not be named `prototype`.
    fn check_static_prototype(&mut self, static_token: Option<Span>, key: &ClassKey) {
        if static_token.is_none() {
            return;
        }

        if let Either::Right((expr, false)) = key {
            let is_prototype = match &**expr {
                Expr::Ident(i) => i.sym == js_word!("prototype"),
                Expr::Lit(Lit::Str(s)) => s.value == js_word!("prototype"),
                _ => false,
            };
            if is_prototype {
                self.emit_err(expr.span(), SyntaxError::StaticPrototype);
            }
        }
    }

    fn parse_fn<T>(&mut self, start_of_async: Option<BytePos>) -> PResult<T>
    where
        T: OutputType,
        Self: MaybeOptionalIdentParser<T::Ident>,
    {
        let start = start_of_async.unwrap_or(self.input.cur_pos());
        assert_and_bump!(self, "function");
        let is_async = start_of_async.is_some();

        let is_generator = eat!(self, '*');

        let ctx = Context {
            in_async: is_async,
            in_generator: is_generator,
            ..self.ctx()
        };

        let ident = if T::is_fn_expr() {
            self.with_ctx(ctx).parse_maybe_opt_binding_ident()?
        } else {
            // A function declaration does not change the context for its
            // `BindingIdentifier`.
            self.parse_maybe_opt_binding_ident()?
        };

        let function = self.parse_fn_args_body(
            start,
            |parser| parser.parse_formal_params(),
            is_async,
            is_generator,
        )?;

        Ok(T::finish_fn(ident, function))
    }

    /// `parse_args` closure should not eat '(' or ')'.
    pub(super) fn parse_fn_args_body<F>(
        &mut self,
        start: BytePos,
        parse_args: F,
        is_async: bool,
        is_generator: bool,
    ) -> PResult<Function>
    where
        F: FnOnce(&mut Self) -> PResult<Vec<Pat>>,
    {
        let ctx = Context {
            in_async: is_async,
            in_generator: is_generator,
            ..self.ctx()
        };

        self.with_ctx(ctx).parse_with(|parser| {
            expect!(parser, '(');

            let arg_ctx = Context {
                in_parameters: true,
                ..parser.ctx()
            };
            let params = parser
                .with_ctx(arg_ctx)
                .parse_with(|parser| parse_args(parser))?;

            expect!(parser, ')');

            let body = parser.parse_fn_body(is_async, is_generator)?;
            parser.check_use_strict_directive(&params, &body);

            Ok(Function {
                span: span!(parser, start),
                params,
                body,
                is_generator,
                is_async,
            })
        })
    }

    pub(super) fn parse_fn_body<T>(&mut self, is_async: bool, is_generator: bool) -> PResult<T>
    where
        Self: FnBodyParser<T>,
    {
        let ctx = Context {
            in_async: is_async,
            in_generator: is_generator,
            in_function: true,
            is_break_allowed: false,
            is_continue_allowed: false,
            ..self.ctx()
        };
        let state = State {
            labels: vec![],
            ..Default::default()
        };
        self.with_ctx(ctx).with_state(state).parse_fn_body_inner()
    }

    /// A `"use strict"` directive is invalid in the body of a function with a
    /// non-simple parameter list.
    pub(super) fn check_use_strict_directive(&mut self, params: &[Pat], body: &BlockStmt) {
        if params.iter().all(|pat| matches!(pat, Pat::Ident(..))) {
            return;
        }

        for stmt in &body.stmts {
            let (stmt_span, expr) = match stmt {
                Stmt::Expr(ExprStmt { span, expr }) => (*span, expr),
                _ => break,
            };
            match &**expr {
                Expr::Lit(Lit::Str(s)) => {
                    // The directive must be the exact source text `"use strict"`;
                    // escapes or parentheses disqualify it.
                    if stmt_span.lo == s.span.lo
                        && &*s.value == "use strict"
                        && s.span.hi - s.span.lo == BytePos("use strict".len() as u32 + 2)
                    {
                        self.emit_err(s.span, SyntaxError::IllegalUseStrict);
                    }
                }
                _ => break,
            }
        }
    }
}

trait OutputType {
    type Ident;

    /// From babel..
    ///
    /// When parsing function expression, the binding identifier is parsed
    /// according to the rules inside the function.
    /// e.g. (function* yield() {}) is invalid because "yield" is disallowed in
    /// generators.
    /// This isn't the case with function declarations: function* yield() {} is
    /// valid because yield is parsed as if it was outside the generator.
    /// Therefore the context is switched before or after parsing the function
    /// id depending on the output type.
    fn is_fn_expr() -> bool {
        false
    }

    fn finish_fn(ident: Self::Ident, function: Function) -> Self;
    fn finish_class(ident: Self::Ident, class: Class) -> Self;
}

impl OutputType for Box<Expr> {
    type Ident = Option<Ident>;

    fn is_fn_expr() -> bool {
        true
    }

    fn finish_fn(ident: Option<Ident>, function: Function) -> Self {
        Box::new(Expr::Fn(FnExpr {
            ident,
            function: Box::new(function),
        }))
    }
    fn finish_class(ident: Option<Ident>, class: Class) -> Self {
        Box::new(Expr::Class(ClassExpr {
            ident,
            class: Box::new(class),
        }))
    }
}

impl OutputType for Decl {
    type Ident = Ident;

    fn finish_fn(ident: Ident, function: Function) -> Self {
        Decl::Fn(FnDecl {
            ident,
            function: Box::new(function),
        })
    }
    fn finish_class(ident: Ident, class: Class) -> Self {
        Decl::Class(ClassDecl {
            ident,
            class: Box::new(class),
        })
    }
}

pub(super) trait FnBodyParser<Body> {
    fn parse_fn_body_inner(&mut self) -> PResult<Body>;
}

impl<I: Tokens> FnBodyParser<BlockStmtOrExpr> for Parser<I> {
    fn parse_fn_body_inner(&mut self) -> PResult<BlockStmtOrExpr> {
        if is!(self, '{') {
            self.parse_block(false).map(BlockStmtOrExpr::BlockStmt)
        } else {
            // An expression body is a cover region of its own; a deferred
            // error surfaces at the body.
            self.parse_expr_cover_grammar(|parser| parser.parse_assignment_expr())
                .map(BlockStmtOrExpr::Expr)
        }
    }
}

impl<I: Tokens> FnBodyParser<BlockStmt> for Parser<I> {
    fn parse_fn_body_inner(&mut self) -> PResult<BlockStmt> {
        self.include_in_expr(true).parse_block(true)
    }
}

fn is_constructor(key: &ClassKey) -> bool {
    match key {
        Either::Right((expr, false)) => match &**expr {
            Expr::Ident(Ident {
                sym: js_word!("constructor"),
                ..
            }) => true,
            Expr::Lit(Lit::Str(Str {
                value: js_word!("constructor"),
                ..
            })) => true,
            _ => false,
        },
        _ => false,
    }
}

fn key_span(key: &ClassKey) -> Span {
    match key {
        Either::Left(name) => name.span,
        Either::Right((expr, _)) => expr.span(),
    }
}

struct MakeMethodArgs {
    start: BytePos,
    static_token: Option<Span>,
    key: ClassKey,
    kind: MethodKind,
    is_async: bool,
    is_generator: bool,
}
