use super::*;
use either::Either;

impl<I: Tokens> Parser<I> {
    /// Parse the next token as a JSX identifier.
    fn parse_jsx_ident(&mut self) -> PResult<JSXIdent> {
        debug_assert!(self.config().jsx);

        let ctx = self.ctx();
        match *cur!(self)? {
            Token::JSXName { .. } => match self.input.bump() {
                Token::JSXName { name } => {
                    let span = self.input.prev_span();
                    Ok(JSXIdent { span, sym: name })
                }
                _ => unreachable!(),
            },
            // Inside a tag relexed from '<', names come through as normal
            // identifiers.
            _ if ctx.in_forced_jsx_context => {
                let ident = self.parse_ident_ref()?;
                Ok(JSXIdent {
                    span: ident.span,
                    sym: ident.sym,
                })
            }
            _ => unexpected!(self),
        }
    }

    /// Parse a namespaced name, e.g. `xlink:href`.
    fn parse_jsx_namespaced_name(&mut self) -> PResult<JSXAttrName> {
        debug_assert!(self.config().jsx);

        let start = self.input.cur_pos();

        let ns = self.parse_jsx_ident()?;
        if !eat!(self, ':') {
            return Ok(JSXAttrName::Ident(ns));
        }

        let name = self.parse_jsx_ident()?;
        Ok(JSXAttrName::JSXNamespacedName(JSXNamespacedName {
            span: span!(self, start),
            ns,
            name,
        }))
    }

    /// Parses an element name in any form: namespaced, member or single
    /// identifier.
    fn parse_jsx_element_name(&mut self) -> PResult<JSXElementName> {
        debug_assert!(self.config().jsx);

        let start = self.input.cur_pos();

        let mut node = match self.parse_jsx_namespaced_name()? {
            JSXAttrName::Ident(i) => JSXElementName::Ident(i),
            JSXAttrName::JSXNamespacedName(i) => JSXElementName::JSXNamespacedName(i),
        };
        while eat!(self, '.') {
            let prop = self.parse_jsx_ident()?;
            node = JSXElementName::JSXMemberExpr(JSXMemberExpr {
                span: span!(self, start),
                obj: match node {
                    JSXElementName::Ident(i) => JSXObject::Ident(i),
                    JSXElementName::JSXMemberExpr(i) => JSXObject::JSXMemberExpr(Box::new(i)),
                    // A namespaced name cannot be the object of a member
                    // expression; ':' and '.' never mix in one name.
                    JSXElementName::JSXNamespacedName(..) => unexpected!(self),
                },
                prop,
            });
        }
        Ok(node)
    }

    /// Parses any type of JSX attribute value.
    fn parse_jsx_attr_value(&mut self) -> PResult<JSXAttrValue> {
        debug_assert!(self.config().jsx);

        let start = self.input.cur_pos();

        match *cur!(self)? {
            tok!('{') => {
                let node = self.parse_jsx_expr_container()?;

                match node.expr {
                    JSXExpr::JSXEmptyExpr(..) => {
                        syntax_error!(self, span!(self, start), SyntaxError::EmptyJSXAttr)
                    }
                    JSXExpr::Expr(..) => Ok(JSXAttrValue::JSXExprContainer(node)),
                }
            }
            Token::Str { .. } => {
                let lit = self.parse_lit()?;
                Ok(JSXAttrValue::Lit(lit))
            }
            Token::JSXTagStart => {
                let expr = self.parse_jsx_element()?;
                match expr {
                    Either::Left(n) => Ok(JSXAttrValue::JSXFragment(n)),
                    Either::Right(n) => Ok(JSXAttrValue::JSXElement(Box::new(n))),
                }
            }

            _ => unexpected!(self),
        }
    }

    /// A JSXEmptyExpression does not consume any tokens. It starts at the end
    /// of the last read token (left brace) and finishes at the beginning of
    /// the next one (right brace).
    fn parse_jsx_empty_expr(&mut self) -> PResult<JSXEmptyExpr> {
        debug_assert!(self.config().jsx);

        Ok(JSXEmptyExpr {
            span: Span::new(self.input.last_pos(), self.input.cur_pos()),
        })
    }

    /// Parse a JSX spread child, e.g. `{...children}`.
    fn parse_jsx_spread_child(&mut self) -> PResult<JSXSpreadChild> {
        debug_assert!(self.config().jsx);
        let start = self.input.cur_pos();
        expect!(self, '{');
        expect!(self, "...");
        let expr = self.parse_expr()?;
        expect!(self, '}');

        Ok(JSXSpreadChild {
            span: span!(self, start),
            expr,
        })
    }

    /// Parses a JSX expression enclosed in curly brackets.
    fn parse_jsx_expr_container(&mut self) -> PResult<JSXExprContainer> {
        debug_assert!(self.config().jsx);

        let start = self.input.cur_pos();
        assert_and_bump!(self, '{');
        let expr = if is!(self, '}') {
            self.parse_jsx_empty_expr().map(JSXExpr::JSXEmptyExpr)?
        } else {
            self.parse_expr().map(JSXExpr::Expr)?
        };
        expect!(self, '}');
        Ok(JSXExprContainer {
            span: span!(self, start),
            expr,
        })
    }

    /// Parses the following JSX attribute name-value pair.
    fn parse_jsx_attr(&mut self) -> PResult<JSXAttrOrSpread> {
        debug_assert!(self.config().jsx);
        let start = self.input.cur_pos();

        if eat!(self, '{') {
            expect!(self, "...");
            let expr = self.parse_assignment_expr()?;
            expect!(self, '}');
            return Ok(JSXAttrOrSpread::SpreadAttr(JSXSpreadAttr {
                span: span!(self, start),
                expr,
            }));
        }

        let name = self.parse_jsx_namespaced_name()?;
        let value = if eat!(self, '=') {
            self.parse_jsx_attr_value().map(Some)?
        } else {
            None
        };

        Ok(JSXAttrOrSpread::JSXAttr(JSXAttr {
            span: span!(self, start),
            name,
            value,
        }))
    }

    /// Parses a JSX opening tag starting after `<`.
    fn parse_jsx_opening_element_at(
        &mut self,
        start: BytePos,
    ) -> PResult<Either<JSXOpeningFragment, JSXOpeningElement>> {
        debug_assert!(self.config().jsx);

        if eat!(self, JSXTagEnd) {
            return Ok(Either::Left(JSXOpeningFragment {
                span: span!(self, start),
            }));
        }

        let name = self.parse_jsx_element_name()?;

        let mut attrs = vec![];
        while !eof!(self) {
            if is!(self, '/') || is!(self, JSXTagEnd) {
                break;
            }

            let attr = self.parse_jsx_attr()?;
            attrs.push(attr);
        }
        let self_closing = eat!(self, '/');
        if !eat!(self, JSXTagEnd) && !(self.ctx().in_forced_jsx_context && eat!(self, '>')) {
            unexpected!(self);
        }
        Ok(Either::Right(JSXOpeningElement {
            span: span!(self, start),
            name,
            attrs,
            self_closing,
        }))
    }

    /// Parses a JSX closing tag starting after `</`.
    fn parse_jsx_closing_element_at(
        &mut self,
        start: BytePos,
    ) -> PResult<Either<JSXClosingFragment, JSXClosingElement>> {
        debug_assert!(self.config().jsx);

        if eat!(self, JSXTagEnd) {
            return Ok(Either::Left(JSXClosingFragment {
                span: span!(self, start),
            }));
        }

        let name = self.parse_jsx_element_name()?;
        expect!(self, JSXTagEnd);
        Ok(Either::Right(JSXClosingElement {
            span: span!(self, start),
            name,
        }))
    }

    /// Parses an entire JSX element, including its opening tag (starting
    /// after `<`), attributes, contents and closing tag.
    fn parse_jsx_element_at(&mut self, start: BytePos) -> PResult<Either<JSXFragment, JSXElement>> {
        debug_assert!(self.config().jsx);

        let forced_jsx_context = match self.input.bump() {
            tok!('<') => true,
            Token::JSXTagStart => false,
            _ => unreachable!(),
        };

        let ctx = Context {
            in_forced_jsx_context: forced_jsx_context,
            ..self.ctx()
        };
        self.with_ctx(ctx).parse_with(|p| {
            let opening_element = p.parse_jsx_opening_element_at(start)?;
            let mut children = vec![];
            let mut closing_element = None;

            let self_closing = match opening_element {
                Either::Right(ref el) => el.self_closing,
                _ => false,
            };

            if !self_closing {
                'contents: loop {
                    match *cur!(p)? {
                        Token::JSXTagStart => {
                            let start = p.input.cur_pos();

                            if peeked_is!(p, '/') {
                                p.input.bump(); // JSXTagStart
                                assert_and_bump!(p, '/');

                                closing_element =
                                    p.parse_jsx_closing_element_at(start).map(Some)?;
                                break 'contents;
                            }

                            children.push(p.parse_jsx_element_at(start).map(|e| match e {
                                Either::Left(e) => JSXElementChild::JSXFragment(e),
                                Either::Right(e) => JSXElementChild::JSXElement(Box::new(e)),
                            })?);
                        }
                        Token::JSXText { .. } => {
                            children.push(p.parse_jsx_text().map(JSXElementChild::JSXText)?)
                        }
                        tok!('{') => {
                            if peeked_is!(p, "...") {
                                children.push(
                                    p.parse_jsx_spread_child()
                                        .map(JSXElementChild::JSXSpreadChild)?,
                                );
                            } else {
                                children.push(
                                    p.parse_jsx_expr_container()
                                        .map(JSXElementChild::JSXExprContainer)?,
                                );
                            }
                        }
                        _ => unexpected!(p),
                    }
                }
            }
            let span = span!(p, start);

            Ok(match (opening_element, closing_element) {
                (Either::Left(..), Some(Either::Right(closing))) => {
                    syntax_error!(
                        p,
                        closing.span,
                        SyntaxError::ExpectedJSXClosingTag { tag: "<>".into() }
                    );
                }
                (Either::Right(opening), Some(Either::Left(closing))) => {
                    syntax_error!(
                        p,
                        closing.span,
                        SyntaxError::ExpectedJSXClosingTag {
                            tag: get_qualified_jsx_name(&opening.name)
                        }
                    );
                }
                (Either::Left(opening), Some(Either::Left(closing))) => {
                    Either::Left(JSXFragment {
                        span,
                        opening,
                        children,
                        closing,
                    })
                }
                (Either::Right(opening), None) => Either::Right(JSXElement {
                    span,
                    opening,
                    children,
                    closing: None,
                }),
                (Either::Right(opening), Some(Either::Right(closing))) => {
                    if get_qualified_jsx_name(&closing.name)
                        != get_qualified_jsx_name(&opening.name)
                    {
                        syntax_error!(
                            p,
                            closing.span,
                            SyntaxError::ExpectedJSXClosingTag {
                                tag: get_qualified_jsx_name(&opening.name)
                            }
                        );
                    }
                    Either::Right(JSXElement {
                        span,
                        opening,
                        children,
                        closing: Some(closing),
                    })
                }
                _ => unreachable!(),
            })
        })
    }

    /// Parses an entire JSX element from the current position.
    pub(super) fn parse_jsx_element(&mut self) -> PResult<Either<JSXFragment, JSXElement>> {
        debug_assert!(self.config().jsx);
        debug_assert!(matches!(*cur!(self)?, Token::JSXTagStart | tok!('<')));

        let start = self.input.cur_pos();

        self.parse_jsx_element_at(start)
    }

    fn parse_jsx_text(&mut self) -> PResult<JSXText> {
        debug_assert!(self.config().jsx);
        debug_assert!(matches!(self.input.cur(), Some(&Token::JSXText { .. })));
        let token = self.input.bump();
        let span = self.input.prev_span();
        match token {
            Token::JSXText { raw } => Ok(JSXText {
                span,
                value: raw.clone(),
                raw: if self.config().raw { Some(raw) } else { None },
            }),
            _ => unreachable!(),
        }
    }
}

fn get_qualified_jsx_name(name: &JSXElementName) -> JsWord {
    fn get_qualified_obj_name(obj: &JSXObject) -> JsWord {
        match *obj {
            JSXObject::Ident(ref i) => i.sym.clone(),
            JSXObject::JSXMemberExpr(ref member) => format!(
                "{}.{}",
                get_qualified_obj_name(&member.obj),
                member.prop.sym
            )
            .into(),
        }
    }
    match *name {
        JSXElementName::Ident(ref i) => i.sym.clone(),
        JSXElementName::JSXNamespacedName(JSXNamespacedName {
            ref ns, ref name, ..
        }) => format!("{}:{}", ns.sym, name.sym).into(),
        JSXElementName::JSXMemberExpr(JSXMemberExpr {
            ref obj, ref prop, ..
        }) => format!("{}.{}", get_qualified_obj_name(obj), prop.sym).into(),
    }
}
