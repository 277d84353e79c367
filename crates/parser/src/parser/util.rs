use super::*;
use crate::context::{Context, YesMaybe};
use global_common::Span;
use std::ops::{Deref, DerefMut};

pub trait ParseObject<Obj> {
    type Prop;
    fn make_object(&mut self, span: Span, props: Vec<Self::Prop>) -> PResult<Obj>;
    fn parse_object_prop(&mut self) -> PResult<Self::Prop>;
}

pub struct WithState<'w, I: Tokens> {
    inner: &'w mut Parser<I>,
    orig_state: State,
}
impl<'w, I: Tokens> Deref for WithState<'w, I> {
    type Target = Parser<I>;

    fn deref(&self) -> &Parser<I> {
        self.inner
    }
}
impl<'w, I: Tokens> DerefMut for WithState<'w, I> {
    fn deref_mut(&mut self) -> &mut Parser<I> {
        self.inner
    }
}
impl<'w, I: Tokens> Drop for WithState<'w, I> {
    fn drop(&mut self) {
        std::mem::swap(&mut self.inner.state, &mut self.orig_state);
    }
}

pub struct WithCtx<'w, I: Tokens> {
    inner: &'w mut Parser<I>,
    orig_ctx: Context,
}
impl<'w, I: Tokens> Deref for WithCtx<'w, I> {
    type Target = Parser<I>;

    fn deref(&self) -> &Parser<I> {
        self.inner
    }
}
impl<'w, I: Tokens> DerefMut for WithCtx<'w, I> {
    fn deref_mut(&mut self) -> &mut Parser<I> {
        self.inner
    }
}

impl<'w, I: Tokens> Drop for WithCtx<'w, I> {
    fn drop(&mut self) {
        self.inner.set_ctx(self.orig_ctx);
    }
}

pub(super) trait ExprExt {
    fn as_expr(&self) -> &Expr;

    /// "IsValidSimpleAssignmentTarget" from spec.
    fn is_valid_simple_assignment_target(&self, strict: YesMaybe) -> bool {
        match *self.as_expr() {
            Expr::Ident(Ident { ref sym, .. }) => {
                if strict == YesMaybe::Yes && (&*sym == "arguments" || &*sym == "eval") {
                    return false;
                }
                true
            }

            Expr::This(..)
            | Expr::Lit(..)
            | Expr::Array(..)
            | Expr::Object(..)
            | Expr::Fn(..)
            | Expr::Class(..)
            | Expr::Tpl(..)
            | Expr::TaggedTpl(..) => false,

            Expr::Member(..) => true,

            Expr::New(..) | Expr::Call(..) | Expr::Import(..) => false,
            // TODO: Spec only mentions `new.target`
            Expr::MetaProp(..) => false,

            Expr::Update(..) => false,

            Expr::Unary(..) | Expr::Await(..) => false,

            Expr::Bin(..) => false,

            Expr::Cond(..) => false,

            Expr::Yield(..) | Expr::Arrow(..) | Expr::Assign(..) => false,

            Expr::Seq(..) => false,

            // MemberExpression is valid assignment target
            Expr::PrivateName(..) => false,

            // jsx
            Expr::JSXElement(..) | Expr::JSXFragment(..) => false,
        }
    }
}

impl ExprExt for Box<Expr> {
    fn as_expr(&self) -> &Expr {
        self
    }
}
impl ExprExt for Expr {
    fn as_expr(&self) -> &Expr {
        self
    }
}

impl<I: Tokens> Parser<I> {
    /// Original context is restored when returned guard is dropped.
    pub(super) fn with_ctx(&mut self, ctx: Context) -> WithCtx<I> {
        let orig_ctx = self.ctx();
        self.set_ctx(ctx);
        WithCtx {
            orig_ctx,
            inner: self,
        }
    }

    /// Original state is restored when returned guard is dropped.
    pub(super) fn with_state(&mut self, state: State) -> WithState<I> {
        let orig_state = std::mem::replace(&mut self.state, state);
        WithState {
            orig_state,
            inner: self,
        }
    }

    pub(super) fn strict_mode(&mut self) -> WithCtx<I> {
        let ctx = Context {
            strict: YesMaybe::Yes,
            ..self.ctx()
        };
        self.with_ctx(ctx)
    }

    /// Original context is restored when returned guard is dropped.
    pub(super) fn include_in_expr(&mut self, include_in_expr: bool) -> WithCtx<I> {
        let ctx = Context {
            include_in_expr,
            ..self.ctx()
        };
        self.with_ctx(ctx)
    }

    /// Parse with given closure
    #[inline(always)]
    pub(super) fn parse_with<F, Ret>(&mut self, f: F) -> Ret
    where
        F: FnOnce(&mut Self) -> Ret,
    {
        f(self)
    }

    pub(super) fn set_ctx(&mut self, ctx: Context) {
        self.input.set_ctx(ctx);
    }

    /// Runs `f` with a fresh cover grammar: both reinterpretation
    /// capabilities granted and an empty pending slot. If `f` leaves a
    /// deferred error behind, the expression was never reinterpreted as a
    /// pattern and that error becomes the parse error.
    pub(super) fn parse_expr_cover_grammar<T, F>(&mut self, f: F) -> PResult<T>
    where
        F: FnOnce(&mut Self) -> PResult<T>,
    {
        let orig_destructuring = self.state.allow_destructuring;
        let orig_binding = self.state.allow_binding;
        let orig_pending = self.state.pending_cover_error.take();

        self.state.allow_destructuring = true;
        self.state.allow_binding = true;

        let res = f(self);

        let res = match self.state.pending_cover_error.take() {
            Some(err) if res.is_ok() => Err(err),
            _ => res,
        };

        self.state.allow_destructuring = orig_destructuring;
        self.state.allow_binding = orig_binding;
        self.state.pending_cover_error = orig_pending;

        res
    }

    /// Like [Self::parse_expr_cover_grammar], but the result folds into the
    /// enclosing cover grammar: a capability survives only if it held both
    /// inside and outside, and an inner deferred error propagates outward
    /// when the outer slot is empty.
    pub(super) fn restore_cover_grammar<T, F>(&mut self, f: F) -> PResult<T>
    where
        F: FnOnce(&mut Self) -> PResult<T>,
    {
        let orig_destructuring = self.state.allow_destructuring;
        let orig_binding = self.state.allow_binding;
        let orig_pending = self.state.pending_cover_error.take();

        self.state.allow_destructuring = true;
        self.state.allow_binding = true;

        let res = f(self);

        self.state.allow_destructuring &= orig_destructuring;
        self.state.allow_binding &= orig_binding;
        if orig_pending.is_some() {
            self.state.pending_cover_error = orig_pending;
        }

        res
    }
}
