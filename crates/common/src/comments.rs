use serde::Serialize;

use crate::pos::Span;

/// A single comment, collected in source order.
///
/// The span covers the comment delimiters; `text` does not include them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    #[serde(rename = "type")]
    pub kind: CommentKind,
    #[serde(rename = "value")]
    pub text: String,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommentKind {
    #[serde(rename = "LineComment")]
    Line,
    #[serde(rename = "BlockComment")]
    Block,
}
