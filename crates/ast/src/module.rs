use crate::stmt::Stmt;
use atoms::JsWord;
use global_common::{Comment, Span};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Program")]
pub struct Program {
    #[serde(flatten)]
    pub span: Span,

    pub body: Vec<Stmt>,

    #[serde(rename = "sourceType")]
    pub source_type: SourceType,

    /// Present only when comment collection was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,

    /// Text of a leading `#!` line, without the marker.
    #[serde(skip)]
    pub shebang: Option<JsWord>,
}

string_enum! {
    pub enum SourceType {
        Script => "script",
        Module => "module",
    }
}

spanned!(Program);
