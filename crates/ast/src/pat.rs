use crate::{expr::Expr, ident::Ident, prop::Prop};
use global_common::Span;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Pat {
    Ident(Ident),

    Array(ArrayPat),

    Rest(RestPat),

    Object(ObjectPat),

    Assign(AssignPat),

    /// Member expressions and friends. Only valid as an assignment target,
    /// never as a binding.
    Expr(Box<Expr>),
}

spanned_enum!(Pat {
    Ident,
    Array,
    Rest,
    Object,
    Assign,
    Expr,
});

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ArrayPattern")]
pub struct ArrayPat {
    #[serde(flatten)]
    pub span: Span,

    /// `None` entries are elisions.
    #[serde(rename = "elements")]
    pub elems: Vec<Option<Pat>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ObjectPattern")]
pub struct ObjectPat {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "properties")]
    pub props: Vec<ObjectPatProp>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ObjectPatProp {
    Prop(Box<Prop>),

    Rest(RestPat),
}

spanned_enum!(ObjectPatProp { Prop, Rest });

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "AssignmentPattern")]
pub struct AssignPat {
    #[serde(flatten)]
    pub span: Span,

    pub left: Box<Pat>,

    pub right: Box<Expr>,
}

/// EsTree `RestElement`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "RestElement")]
pub struct RestPat {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "argument")]
    pub arg: Box<Pat>,
}

spanned!(ArrayPat, ObjectPat, AssignPat, RestPat);
