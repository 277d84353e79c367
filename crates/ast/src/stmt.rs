use crate::{
    decl::{Decl, VarDecl},
    expr::Expr,
    ident::Ident,
    pat::Pat,
};
use global_common::Span;
use serde::Serialize;

/// Use when only block statements are allowed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "BlockStatement")]
pub struct BlockStmt {
    /// Span including the braces.
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "body")]
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Stmt {
    Block(BlockStmt),

    Empty(EmptyStmt),

    Debugger(DebuggerStmt),

    With(WithStmt),

    Return(ReturnStmt),

    Labeled(LabeledStmt),

    Break(BreakStmt),

    Continue(ContinueStmt),

    If(IfStmt),

    Switch(SwitchStmt),

    Throw(ThrowStmt),

    /// A try statement. If handler is null then finalizer must be a
    /// BlockStmt.
    Try(TryStmt),

    While(WhileStmt),

    DoWhile(DoWhileStmt),

    For(ForStmt),

    ForIn(ForInStmt),

    ForOf(ForOfStmt),

    Decl(Decl),

    Expr(ExprStmt),
}

spanned_enum!(Stmt {
    Block,
    Empty,
    Debugger,
    With,
    Return,
    Labeled,
    Break,
    Continue,
    If,
    Switch,
    Throw,
    Try,
    While,
    DoWhile,
    For,
    ForIn,
    ForOf,
    Decl,
    Expr,
});

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ExpressionStatement")]
pub struct ExprStmt {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "expression")]
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "EmptyStatement")]
pub struct EmptyStmt {
    /// Span of semicolon.
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "DebuggerStatement")]
pub struct DebuggerStmt {
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "WithStatement")]
pub struct WithStmt {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "object")]
    pub obj: Box<Expr>,

    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ReturnStatement")]
pub struct ReturnStmt {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "argument")]
    pub arg: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "LabeledStatement")]
pub struct LabeledStmt {
    #[serde(flatten)]
    pub span: Span,

    pub label: Ident,

    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "BreakStatement")]
pub struct BreakStmt {
    #[serde(flatten)]
    pub span: Span,

    pub label: Option<Ident>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ContinueStatement")]
pub struct ContinueStmt {
    #[serde(flatten)]
    pub span: Span,

    pub label: Option<Ident>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "IfStatement")]
pub struct IfStmt {
    #[serde(flatten)]
    pub span: Span,

    pub test: Box<Expr>,

    #[serde(rename = "consequent")]
    pub cons: Box<Stmt>,

    #[serde(rename = "alternate")]
    pub alt: Option<Box<Stmt>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "SwitchStatement")]
pub struct SwitchStmt {
    #[serde(flatten)]
    pub span: Span,

    pub discriminant: Box<Expr>,

    pub cases: Vec<SwitchCase>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ThrowStatement")]
pub struct ThrowStmt {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "argument")]
    pub arg: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TryStatement")]
pub struct TryStmt {
    #[serde(flatten)]
    pub span: Span,

    pub block: BlockStmt,

    pub handler: Option<CatchClause>,

    pub finalizer: Option<BlockStmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "WhileStatement")]
pub struct WhileStmt {
    #[serde(flatten)]
    pub span: Span,

    pub test: Box<Expr>,

    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "DoWhileStatement")]
pub struct DoWhileStmt {
    #[serde(flatten)]
    pub span: Span,

    pub test: Box<Expr>,

    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ForStatement")]
pub struct ForStmt {
    #[serde(flatten)]
    pub span: Span,

    pub init: Option<VarDeclOrExpr>,

    pub test: Option<Box<Expr>>,

    pub update: Option<Box<Expr>>,

    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ForInStatement")]
pub struct ForInStmt {
    #[serde(flatten)]
    pub span: Span,

    pub left: VarDeclOrPat,

    pub right: Box<Expr>,

    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ForOfStatement")]
pub struct ForOfStmt {
    #[serde(flatten)]
    pub span: Span,

    /// es2018 for-await-of, e.g. `for await (const x of xs) {`.
    #[serde(rename = "await")]
    pub is_await: bool,

    pub left: VarDeclOrPat,

    pub right: Box<Expr>,

    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "SwitchCase")]
pub struct SwitchCase {
    #[serde(flatten)]
    pub span: Span,

    /// None for `default:`.
    pub test: Option<Box<Expr>>,

    #[serde(rename = "consequent")]
    pub cons: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "CatchClause")]
pub struct CatchClause {
    #[serde(flatten)]
    pub span: Span,

    /// es2019 optional binding, e.g. `try { foo() } catch { bar() }`.
    pub param: Option<Pat>,

    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VarDeclOrPat {
    VarDecl(VarDecl),

    Pat(Pat),
}

spanned_enum!(VarDeclOrPat { VarDecl, Pat });

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VarDeclOrExpr {
    VarDecl(VarDecl),

    Expr(Box<Expr>),
}

spanned_enum!(VarDeclOrExpr { VarDecl, Expr });

spanned!(
    BlockStmt,
    ExprStmt,
    EmptyStmt,
    DebuggerStmt,
    WithStmt,
    ReturnStmt,
    LabeledStmt,
    BreakStmt,
    ContinueStmt,
    IfStmt,
    SwitchStmt,
    ThrowStmt,
    TryStmt,
    WhileStmt,
    DoWhileStmt,
    ForStmt,
    ForInStmt,
    ForOfStmt,
    SwitchCase,
    CatchClause,
);
