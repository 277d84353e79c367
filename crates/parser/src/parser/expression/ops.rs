//! Parser for unary operations and binary operations.
use super::*;
use crate::token::Keyword;

impl<I: Tokens> Parser<I> {
    /// Name from spec: 'ShortCircuitExpression'
    pub(super) fn parse_bin_expr(&mut self) -> PResult<Box<Expr>> {
        let potential_arrow_start = self.state.potential_arrow_start;

        let left = self.parse_unary_expr()?;

        return_if_arrow!(potential_arrow_start, left);
        self.parse_bin_op_recursively(left, 0)
    }

    /// Parse binary operators with the operator precedence parsing
    /// algorithm. `left` is the left-hand side of the operator.
    /// `min_prec` provides context that allows the function to stop and
    /// defer further parsing to one of its callers when it encounters an
    /// operator that has a lower precedence than the set it is parsing.
    fn parse_bin_op_recursively(&mut self, left: Box<Expr>, min_prec: u8) -> PResult<Box<Expr>> {
        let (expr, _) = self.parse_bin_op_recursively_inner(left, None, min_prec)?;
        Ok(expr)
    }

    /// Builds nodes left to right. Also returns the operator of the
    /// outermost node this run built, if any; operands that arrived
    /// parenthesized are unwrapped by then and do not count, which is what
    /// lets `a ?? (b || c)` through while `a ?? b || c` is rejected.
    fn parse_bin_op_recursively_inner(
        &mut self,
        mut left: Box<Expr>,
        mut left_op: Option<BinaryOp>,
        min_prec: u8,
    ) -> PResult<(Box<Expr>, Option<BinaryOp>)> {
        loop {
            let ctx = self.ctx();

            // Return left on eof
            let op = match self.input.cur() {
                Some(&Word(Word::Keyword(Keyword::In))) if ctx.include_in_expr => op!("in"),
                Some(&Word(Word::Keyword(Keyword::InstanceOf))) => op!("instanceof"),
                Some(&Token::BinOp(op)) => op.into(),
                _ => return Ok((left, left_op)),
            };

            if op.precedence() <= min_prec {
                return Ok((left, left_op));
            }
            self.input.bump();

            let (right, right_op) = {
                let left_of_right = self.parse_unary_expr()?;
                self.parse_bin_op_recursively_inner(
                    left_of_right,
                    None,
                    if op == op!("**") {
                        // exponential operator is right associative
                        op.precedence() - 1
                    } else {
                        op.precedence()
                    },
                )?
            };

            // `??` cannot be directly mixed with `&&` or `||`; the operand
            // has to be parenthesized.
            let is_logical = |o: Option<BinaryOp>| {
                matches!(o, Some(op!("&&")) | Some(op!("||")))
            };
            let mixed = match op {
                op!("??") => is_logical(left_op) || is_logical(right_op),
                op!("&&") | op!("||") => matches!(left_op, Some(op!("??"))),
                _ => false,
            };

            let span = Span::new(left.span().lo, right.span().hi);
            if mixed {
                self.emit_err(span, SyntaxError::NullishCoalescingWithLogicalOp);
            }

            left = Box::new(Expr::Bin(BinExpr {
                span,
                op,
                left,
                right,
            }));
            left_op = Some(op);
        }
    }

    /// Parse unary expression and update expression.
    ///
    /// spec: 'UnaryExpression'
    fn parse_unary_expr(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();

        // Parse update expression
        if is!(self, "++") || is!(self, "--") {
            let op = if self.input.bump() == tok!("++") {
                op!("++")
            } else {
                op!("--")
            };

            let arg = self.parse_unary_expr()?;
            let span = Span::new(start, arg.span().hi);
            self.check_assign_target(&arg);

            return Ok(Box::new(Expr::Update(UpdateExpr {
                span,
                prefix: true,
                op,
                arg,
            })));
        }

        // Parse unary expression
        if is_one_of!(self, "delete", "void", "typeof", '+', '-', '~', '!') {
            let op = match self.input.bump() {
                tok!("delete") => op!("delete"),
                tok!("void") => op!("void"),
                tok!("typeof") => op!("typeof"),
                tok!('+') => op!(unary, "+"),
                tok!('-') => op!(unary, "-"),
                tok!('~') => op!("~"),
                tok!('!') => op!("!"),
                _ => unreachable!(),
            };

            let arg = self.parse_unary_expr()?;

            if op == op!("delete") {
                match &*arg {
                    Expr::Ident(i) => {
                        self.emit_strict_mode_err(i.span, SyntaxError::StrictDelete);
                    }
                    Expr::Member(MemberExpr { prop, .. }) => {
                        if let Expr::PrivateName(p) = &**prop {
                            self.emit_err(p.span, SyntaxError::DeletePrivateField);
                        }
                    }
                    _ => {}
                }
            }

            let expr = Box::new(Expr::Unary(UnaryExpr {
                span: Span::new(start, arg.span().hi),
                op,
                arg,
            }));

            // Spec says:
            // A UnaryExpression is not allowed as the left operand of `**`;
            // the operand has to be parenthesized.
            if is!(self, "**") {
                syntax_error!(self, SyntaxError::UnaryInExp)
            }

            return Ok(expr);
        }

        if self.ctx().in_async && is!(self, "await") {
            return self.parse_await_expr();
        }

        let potential_arrow_start = self.state.potential_arrow_start;

        // UpdateExpression
        let expr = self.parse_lhs_expr()?;
        return_if_arrow!(potential_arrow_start, expr);

        // Line terminator isn't allowed here.
        if self.input.had_line_break_before_cur() {
            return Ok(expr);
        }

        if is!(self, "++") || is!(self, "--") {
            self.check_assign_target(&expr);

            let op = if self.input.bump() == tok!("++") {
                op!("++")
            } else {
                op!("--")
            };

            return Ok(Box::new(Expr::Update(UpdateExpr {
                span: span!(self, expr.span().lo),
                prefix: false,
                op,
                arg: expr,
            })));
        }

        Ok(expr)
    }

    fn parse_await_expr(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();

        assert_and_bump!(self, "await");
        debug_assert!(self.ctx().in_async);

        // Spec says
        // AwaitExpression cannot be used within the FormalParameters of an
        // async function.
        if self.ctx().in_parameters {
            syntax_error!(self, span!(self, start), SyntaxError::AwaitInParameter)
        }

        let arg = self.parse_unary_expr()?;
        Ok(Box::new(Expr::Await(AwaitExpr {
            span: span!(self, start),
            arg,
        })))
    }
}
