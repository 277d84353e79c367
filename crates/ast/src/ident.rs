use atoms::JsWord;
use global_common::Span;
use serde::Serialize;

/// Ident with span.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Identifier")]
pub struct Ident {
    #[serde(flatten)]
    pub span: Span,
    #[serde(rename = "name")]
    pub sym: JsWord,
}

impl Ident {
    pub fn new(sym: JsWord, span: Span) -> Self {
        Ident { span, sym }
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.sym
    }
}

/// `#name` inside a class body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "PrivateName")]
pub struct PrivateName {
    #[serde(flatten)]
    pub span: Span,
    pub name: JsWord,
}

spanned!(Ident, PrivateName);
