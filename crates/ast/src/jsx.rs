use crate::{expr::Expr, lit::Lit};
use atoms::JsWord;
use global_common::Span;
use serde::Serialize;

/// JSX names serialize as `JSXIdentifier`, not `Identifier`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXIdentifier")]
pub struct JSXIdent {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "name")]
    pub sym: JsWord,
}

/// Used for `obj` property of `JSXMemberExpr`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSXObject {
    JSXMemberExpr(Box<JSXMemberExpr>),
    Ident(JSXIdent),
}

spanned_enum!(JSXObject { JSXMemberExpr, Ident });

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXMemberExpression")]
pub struct JSXMemberExpr {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "object")]
    pub obj: JSXObject,

    #[serde(rename = "property")]
    pub prop: JSXIdent,
}

/// XML-based namespace syntax, e.g. `<ns:name />`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXNamespacedName")]
pub struct JSXNamespacedName {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "namespace")]
    pub ns: JSXIdent,

    pub name: JSXIdent,
}

/// The hole between the braces of an empty `{}` container child.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXEmptyExpression")]
pub struct JSXEmptyExpr {
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXExpressionContainer")]
pub struct JSXExprContainer {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "expression")]
    pub expr: JSXExpr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSXExpr {
    JSXEmptyExpr(JSXEmptyExpr),
    Expr(Box<Expr>),
}

spanned_enum!(JSXExpr { JSXEmptyExpr, Expr });

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXSpreadChild")]
pub struct JSXSpreadChild {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "expression")]
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSXElementName {
    Ident(JSXIdent),
    JSXMemberExpr(JSXMemberExpr),
    JSXNamespacedName(JSXNamespacedName),
}

spanned_enum!(JSXElementName {
    Ident,
    JSXMemberExpr,
    JSXNamespacedName,
});

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXOpeningElement")]
pub struct JSXOpeningElement {
    #[serde(flatten)]
    pub span: Span,

    pub name: JSXElementName,

    #[serde(rename = "attributes")]
    pub attrs: Vec<JSXAttrOrSpread>,

    #[serde(rename = "selfClosing")]
    pub self_closing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSXAttrOrSpread {
    JSXAttr(JSXAttr),
    SpreadAttr(JSXSpreadAttr),
}

spanned_enum!(JSXAttrOrSpread { JSXAttr, SpreadAttr });

/// `{...expr}` in attribute position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXSpreadAttribute")]
pub struct JSXSpreadAttr {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "argument")]
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXClosingElement")]
pub struct JSXClosingElement {
    #[serde(flatten)]
    pub span: Span,

    pub name: JSXElementName,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXAttribute")]
pub struct JSXAttr {
    #[serde(flatten)]
    pub span: Span,

    pub name: JSXAttrName,

    /// Null for a bare attribute name.
    pub value: Option<JSXAttrValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSXAttrName {
    Ident(JSXIdent),
    JSXNamespacedName(JSXNamespacedName),
}

spanned_enum!(JSXAttrName { Ident, JSXNamespacedName });

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSXAttrValue {
    Lit(Lit),

    JSXExprContainer(JSXExprContainer),

    JSXElement(Box<JSXElement>),

    JSXFragment(JSXFragment),
}

spanned_enum!(JSXAttrValue {
    Lit,
    JSXExprContainer,
    JSXElement,
    JSXFragment,
});

/// Children text. `value` keeps the exact source bytes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXText")]
pub struct JSXText {
    #[serde(flatten)]
    pub span: Span,

    pub value: JsWord,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<JsWord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXElement")]
pub struct JSXElement {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "openingElement")]
    pub opening: JSXOpeningElement,

    pub children: Vec<JSXElementChild>,

    /// Null for self-closing elements.
    #[serde(rename = "closingElement")]
    pub closing: Option<JSXClosingElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSXElementChild {
    JSXText(JSXText),

    JSXExprContainer(JSXExprContainer),

    JSXSpreadChild(JSXSpreadChild),

    JSXElement(Box<JSXElement>),

    JSXFragment(JSXFragment),
}

spanned_enum!(JSXElementChild {
    JSXText,
    JSXExprContainer,
    JSXSpreadChild,
    JSXElement,
    JSXFragment,
});

/// Fragments reuse the `openingElement`/`closingElement` keys in the
/// serialized output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXFragment")]
pub struct JSXFragment {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "openingElement")]
    pub opening: JSXOpeningFragment,

    pub children: Vec<JSXElementChild>,

    #[serde(rename = "closingElement")]
    pub closing: JSXClosingFragment,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXOpeningFragment")]
pub struct JSXOpeningFragment {
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXClosingFragment")]
pub struct JSXClosingFragment {
    #[serde(flatten)]
    pub span: Span,
}

spanned!(
    JSXIdent,
    JSXMemberExpr,
    JSXNamespacedName,
    JSXEmptyExpr,
    JSXExprContainer,
    JSXSpreadChild,
    JSXOpeningElement,
    JSXSpreadAttr,
    JSXClosingElement,
    JSXAttr,
    JSXText,
    JSXElement,
    JSXFragment,
    JSXOpeningFragment,
    JSXClosingFragment,
);
