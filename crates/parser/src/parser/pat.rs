//! 13.3.3 Destructuring Binding Patterns
use super::*;
use atoms::js_word;
use global_common::Spanned;

impl<I: Tokens> Parser<I> {
    pub(super) fn parse_opt_binding_ident(&mut self) -> PResult<Option<Ident>> {
        if is!(self, BindingIdent) {
            self.parse_binding_ident().map(Some)
        } else {
            Ok(None)
        }
    }

    /// spec: `BindingIdentifier`
    pub(super) fn parse_binding_ident(&mut self) -> PResult<Ident> {
        // "yield" and "await" is **lexically** accepted.
        let ident = self.parse_ident(true, true)?;

        if ident.sym == js_word!("arguments") || ident.sym == js_word!("eval") {
            self.emit_strict_mode_err(ident.span, SyntaxError::StrictEvalArguments);
        }
        if self.ctx().in_async && ident.sym == js_word!("await") {
            self.emit_err(ident.span, SyntaxError::AwaitBindingIdentifier);
        }
        if self.ctx().in_generator && ident.sym == js_word!("yield") {
            self.emit_err(ident.span, SyntaxError::YieldBindingIdentifier);
        }

        Ok(ident)
    }

    pub(super) fn parse_binding_pat_or_ident(&mut self) -> PResult<Pat> {
        match *cur!(self)? {
            Word(..) => self.parse_binding_ident().map(Pat::Ident),
            tok!('[') => self.parse_array_binding_pat(),
            tok!('{') => self.parse_object(),
            _ => unexpected!(self),
        }
    }

    /// spec: `BindingElement`
    pub(super) fn parse_binding_element(&mut self) -> PResult<Pat> {
        let start = self.input.cur_pos();
        let left = self.parse_binding_pat_or_ident()?;

        if eat!(self, '=') {
            let right = self
                .parse_expr_cover_grammar(|p| p.include_in_expr(true).parse_assignment_expr())?;

            return Ok(Pat::Assign(AssignPat {
                span: span!(self, start),
                left: Box::new(left),
                right,
            }));
        }

        Ok(left)
    }

    fn parse_array_binding_pat(&mut self) -> PResult<Pat> {
        let start = self.input.cur_pos();

        assert_and_bump!(self, '[');

        let mut elems = vec![];

        while !eof!(self) && !is!(self, ']') {
            if is!(self, ',') {
                expect!(self, ',');
                elems.push(None);
                continue;
            }

            let elem_start = self.input.cur_pos();
            if eat!(self, "...") {
                let pat = self.parse_binding_pat_or_ident()?;

                let pat_span = span!(self, elem_start);
                elems.push(Some(Pat::Rest(RestPat {
                    span: pat_span,
                    arg: Box::new(pat),
                })));

                if is!(self, ',') {
                    if peeked_is!(self, ']') {
                        syntax_error!(self, SyntaxError::CommaAfterRestElement)
                    } else {
                        syntax_error!(self, pat_span, SyntaxError::NonLastRestParam)
                    }
                }
                break;
            }

            elems.push(self.parse_binding_element().map(Some)?);
            if !is!(self, ']') {
                expect!(self, ',');
            }
        }

        expect!(self, ']');

        Ok(Pat::Array(ArrayPat {
            span: span!(self, start),
            elems,
        }))
    }

    /// spec: 'FormalParameters'
    pub(super) fn parse_formal_params(&mut self) -> PResult<Vec<Pat>> {
        let mut first = true;
        let mut params = vec![];

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

            let param_start = self.input.cur_pos();

            let pat = if eat!(self, "...") {
                let pat = self.parse_binding_pat_or_ident()?;

                let pat_span = span!(self, param_start);
                let pat = Pat::Rest(RestPat {
                    span: pat_span,
                    arg: Box::new(pat),
                });

                // Rest parameters don't take initializers.
                if is!(self, '=') {
                    syntax_error!(self, SyntaxError::RestDefaultInitializer)
                }

                if is!(self, ',') {
                    if peeked_is!(self, ')') {
                        syntax_error!(self, SyntaxError::CommaAfterRestElement)
                    } else {
                        syntax_error!(self, pat_span, SyntaxError::NonLastRestParam)
                    }
                }

                pat
            } else {
                self.parse_binding_element()?
            };

            params.push(pat);
        }

        Ok(params)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PatType {
    BindingPat,
    BindingElement,
    /// AssignmentPattern
    AssignPat,
    AssignElement,
}

impl PatType {
    pub(super) fn element(self) -> Self {
        match self {
            PatType::BindingPat | PatType::BindingElement => PatType::BindingElement,
            PatType::AssignPat | PatType::AssignElement => PatType::AssignElement,
        }
    }

    fn is_binding(self) -> bool {
        matches!(self, PatType::BindingPat | PatType::BindingElement)
    }
}

impl<I: Tokens> Parser<I> {
    /// Reinterprets an already parsed expression as a pattern. New pattern
    /// nodes are built from the expression nodes; the input is consumed.
    ///
    /// This does not return a 'rest' pattern because a non-last parameter
    /// cannot be rest.
    pub(super) fn reparse_expr_as_pat(&mut self, pat_ty: PatType, expr: Box<Expr>) -> PResult<Pat> {
        let span = expr.span();

        // AssignmentPattern:
        //      ObjectAssignmentPattern
        //      ArrayAssignmentPattern
        if pat_ty == PatType::AssignPat {
            match *expr {
                Expr::Object(..) | Expr::Array(..) => {
                    // It is a Syntax Error if LeftHandSideExpression is either
                    // an ObjectLiteral or an ArrayLiteral and if
                    // LeftHandSideExpression cannot be reparsed as an
                    // AssignmentPattern.
                }

                Expr::Ident(i) => return Ok(Pat::Ident(i)),
                Expr::Member(..) => return Ok(Pat::Expr(expr)),

                _ => syntax_error!(self, span, SyntaxError::InvalidLHSInAssignment),
            }
        }

        // AssignmentElement:
        //      DestructuringAssignmentTarget Initializer[+In]?
        //
        // DestructuringAssignmentTarget:
        //      LeftHandSideExpression
        if pat_ty == PatType::AssignElement {
            match *expr {
                Expr::Array(..) | Expr::Object(..) => {}

                // It's special because of the optional initializer; handled
                // below.
                Expr::Assign(..) => {}

                Expr::Ident(i) => {
                    if i.sym == js_word!("eval") || i.sym == js_word!("arguments") {
                        self.emit_strict_mode_err(i.span, SyntaxError::StrictEvalArguments);
                    }
                    return Ok(Pat::Ident(i));
                }
                Expr::Member(..) => return Ok(Pat::Expr(expr)),

                _ => syntax_error!(self, span, SyntaxError::InvalidLHSInAssignment),
            }
        }

        match *expr {
            Expr::Ident(i) => {
                // Only binding origins reach here; assignment targets
                // returned above.
                if i.sym == js_word!("eval") || i.sym == js_word!("arguments") {
                    self.emit_strict_mode_err(i.span, SyntaxError::StrictEvalArguments);
                }

                Ok(Pat::Ident(i))
            }

            Expr::Assign(AssignExpr {
                span,
                op: AssignOp::Assign,
                left,
                right,
            }) => Ok(Pat::Assign(AssignPat {
                span,
                left: match left {
                    PatOrExpr::Expr(left) => Box::new(self.reparse_expr_as_pat(pat_ty, left)?),
                    PatOrExpr::Pat(left) => left,
                },
                right,
            })),

            Expr::Object(ObjectLit { span, props }) => {
                // {}
                let len = props.len();
                let mut pat_props = Vec::with_capacity(len);

                for (i, prop) in props.into_iter().enumerate() {
                    let prop = match prop {
                        PropOrSpread::Prop(prop) => {
                            let Prop {
                                span,
                                key,
                                value,
                                kind,
                                computed,
                                method,
                                shorthand,
                            } = *prop;

                            // Getters, setters and methods are not patterns.
                            if method || kind != PropKind::Init {
                                syntax_error!(self, span, SyntaxError::InvalidLHSInAssignment)
                            }

                            let value = match value {
                                PatOrExpr::Expr(e) => PatOrExpr::Pat(Box::new(
                                    self.reparse_expr_as_pat(pat_ty.element(), e)?,
                                )),
                                // A shorthand with a default was already built
                                // as a pattern.
                                pat => pat,
                            };

                            ObjectPatProp::Prop(Box::new(Prop {
                                span,
                                key,
                                value,
                                kind,
                                computed,
                                method,
                                shorthand,
                            }))
                        }
                        PropOrSpread::Spread(SpreadElement { span, expr }) => {
                            if i != len - 1 {
                                syntax_error!(self, span, SyntaxError::NonLastRestParam)
                            }

                            // A rest property only covers an identifier and,
                            // for assignment targets, a member expression.
                            match *expr {
                                Expr::Ident(..) => {}
                                Expr::Member(..) if !pat_ty.is_binding() => {}
                                _ => syntax_error!(
                                    self,
                                    expr.span(),
                                    SyntaxError::InvalidLHSInAssignment
                                ),
                            }

                            let arg =
                                Box::new(self.reparse_expr_as_pat(pat_ty.element(), expr)?);
                            ObjectPatProp::Rest(RestPat { span, arg })
                        }
                    };

                    pat_props.push(prop);
                }

                // Reinterpreting the object as a pattern resolves any error
                // deferred inside it.
                self.state.pending_cover_error = None;

                Ok(Pat::Object(ObjectPat {
                    span,
                    props: pat_props,
                }))
            }

            Expr::Array(ArrayLit { span, elems }) => {
                let len = elems.len();
                let mut params = Vec::with_capacity(len);

                for (i, elem) in elems.into_iter().enumerate() {
                    match elem {
                        Some(ExprOrSpread::Spread(SpreadElement { span, expr })) => {
                            if i != len - 1 {
                                syntax_error!(self, span, SyntaxError::NonLastRestParam)
                            }
                            // Rest elements don't take initializers.
                            if let Expr::Assign(..) = &*expr {
                                syntax_error!(
                                    self,
                                    expr.span(),
                                    SyntaxError::RestDefaultInitializer
                                )
                            }

                            let arg =
                                Box::new(self.reparse_expr_as_pat(pat_ty.element(), expr)?);
                            params.push(Some(Pat::Rest(RestPat { span, arg })));
                        }
                        Some(ExprOrSpread::Expr(expr)) => {
                            params
                                .push(self.reparse_expr_as_pat(pat_ty.element(), expr).map(Some)?);
                        }
                        // Holes stay holes.
                        None => params.push(None),
                    }
                }

                // Any comma that directly followed a rest element is an error
                // now that the array is a pattern.
                if let Some(trailing_comma_span) = self.state.trailing_commas_after_rest.get(&span)
                {
                    syntax_error!(
                        self,
                        *trailing_comma_span,
                        SyntaxError::CommaAfterRestElement
                    )
                }

                Ok(Pat::Array(ArrayPat {
                    span,
                    elems: params,
                }))
            }

            _ => syntax_error!(self, span, SyntaxError::InvalidLHSInAssignment),
        }
    }

    /// Converts the items of a parenthesized arrow head into parameters.
    pub(super) fn parse_paren_items_as_params(
        &mut self,
        items: Vec<ExprOrSpread>,
    ) -> PResult<Vec<Pat>> {
        let pat_ty = PatType::BindingPat;

        let mut params = Vec::with_capacity(items.len());

        for item in items {
            let param = match item {
                ExprOrSpread::Spread(SpreadElement { span, expr }) => {
                    // Rest parameters don't take initializers.
                    if let Expr::Assign(..) = &*expr {
                        syntax_error!(self, expr.span(), SyntaxError::RestDefaultInitializer)
                    }

                    let arg = Box::new(self.reparse_expr_as_pat(pat_ty, expr)?);
                    Pat::Rest(RestPat { span, arg })
                }
                ExprOrSpread::Expr(expr) => self.reparse_expr_as_pat(pat_ty, expr)?,
            };

            params.push(param);
        }

        Ok(params)
    }
}
