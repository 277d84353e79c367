use crate::{pat::Pat, stmt::BlockStmt};
use global_common::Span;

/// Common parts of function expressions, function declarations and
/// methods. Never serialized on its own; the wrapping node decides the
/// `type` string and the `id` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub span: Span,

    pub params: Vec<Pat>,

    pub body: BlockStmt,

    pub is_generator: bool,

    pub is_async: bool,
}

spanned!(Function);
