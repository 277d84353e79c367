use crate::expr::{Expr, PatOrExpr};
use global_common::Span;
use serde::Serialize;

/// An object literal or object pattern member. Getters, setters and
/// methods are all `Property` nodes distinguished by `kind`/`method`;
/// inside a pattern `value` holds a pattern instead of an expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Property")]
pub struct Prop {
    #[serde(flatten)]
    pub span: Span,

    pub key: Box<Expr>,

    pub value: PatOrExpr,

    pub kind: PropKind,

    pub computed: bool,

    pub method: bool,

    pub shorthand: bool,
}

string_enum! {
    pub enum PropKind {
        Init => "init",
        Get => "get",
        Set => "set",
    }
}

spanned!(Prop);
