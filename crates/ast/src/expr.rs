#![allow(clippy::vec_box)]
use crate::{
    class::Class,
    function::Function,
    ident::{Ident, PrivateName},
    jsx::{JSXElement, JSXFragment},
    lit::Lit,
    operators::{AssignOp, BinaryOp, UnaryOp, UpdateOp},
    pat::Pat,
    prop::Prop,
    ser,
    stmt::BlockStmt,
};
use atoms::JsWord;
use global_common::{Span, Spanned};
use serde::{
    ser::{SerializeMap, Serializer},
    Serialize,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expr {
    This(ThisExpr),

    Array(ArrayLit),

    Object(ObjectLit),

    Fn(FnExpr),

    Unary(UnaryExpr),

    /// `++v`, `--v`, `v++`, `v--`
    Update(UpdateExpr),

    Bin(BinExpr),

    Assign(AssignExpr),

    /// A member expression. If computed is true, the node corresponds to a
    /// computed (a[b]) member expression and property is an Expression. If
    /// computed is false, the node corresponds to a static (a.b) member
    /// expression and property is an Identifier.
    Member(MemberExpr),

    /// true ? 'a' : 'b'
    Cond(CondExpr),

    Call(CallExpr),

    /// `new Cat()`
    New(NewExpr),

    Seq(SeqExpr),

    Ident(Ident),

    Lit(Lit),

    Tpl(Tpl),

    TaggedTpl(TaggedTpl),

    Arrow(ArrowExpr),

    Class(ClassExpr),

    Yield(YieldExpr),

    MetaProp(MetaPropExpr),

    Await(AwaitExpr),

    JSXElement(Box<JSXElement>),

    JSXFragment(JSXFragment),

    PrivateName(PrivateName),

    /// The callee of a dynamic `import(..)` call.
    Import(Import),
}

spanned_enum!(Expr {
    This,
    Array,
    Object,
    Fn,
    Unary,
    Update,
    Bin,
    Assign,
    Member,
    Cond,
    Call,
    New,
    Seq,
    Ident,
    Lit,
    Tpl,
    TaggedTpl,
    Arrow,
    Class,
    Yield,
    MetaProp,
    Await,
    JSXElement,
    JSXFragment,
    PrivateName,
    Import,
});

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ThisExpression")]
pub struct ThisExpr {
    #[serde(flatten)]
    pub span: Span,
}

/// Array literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ArrayExpression")]
pub struct ArrayLit {
    #[serde(flatten)]
    pub span: Span,

    /// `None` entries are elisions.
    #[serde(rename = "elements")]
    pub elems: Vec<Option<ExprOrSpread>>,
}

/// Object literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ObjectExpression")]
pub struct ObjectLit {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "properties")]
    pub props: Vec<PropOrSpread>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropOrSpread {
    /// Spread properties, e.g., `{a: 1, ...obj, b: 2}`.
    Spread(SpreadElement),

    Prop(Box<Prop>),
}

spanned_enum!(PropOrSpread { Spread, Prop });

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "SpreadElement")]
pub struct SpreadElement {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "argument")]
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub span: Span,

    pub op: UnaryOp,

    pub arg: Box<Expr>,
}

impl Serialize for UnaryExpr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        ser::head(&mut map, "UnaryExpression", self.span)?;
        map.serialize_entry("operator", &self.op)?;
        map.serialize_entry("argument", &self.arg)?;
        map.serialize_entry("prefix", &true)?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "UpdateExpression")]
pub struct UpdateExpr {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "operator")]
    pub op: UpdateOp,

    pub prefix: bool,

    #[serde(rename = "argument")]
    pub arg: Box<Expr>,
}

/// Binary and logical operators share one node; the serialized `type`
/// depends on the operator.
#[derive(Debug, Clone, PartialEq)]
pub struct BinExpr {
    pub span: Span,

    pub op: BinaryOp,

    pub left: Box<Expr>,

    pub right: Box<Expr>,
}

impl Serialize for BinExpr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let ty = if self.op.is_logical() {
            "LogicalExpression"
        } else {
            "BinaryExpression"
        };

        let mut map = serializer.serialize_map(None)?;
        ser::head(&mut map, ty, self.span)?;
        map.serialize_entry("left", &self.left)?;
        map.serialize_entry("right", &self.right)?;
        map.serialize_entry("operator", &self.op)?;
        map.end()
    }
}

/// Function expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FnExpr {
    pub ident: Option<Ident>,

    pub function: Box<Function>,
}

impl Serialize for FnExpr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_fn(
            serializer,
            "FunctionExpression",
            self.ident.as_ref(),
            &self.function,
        )
    }
}

/// Shared by function expressions, function declarations and the method
/// values inside classes and object literals.
pub(crate) fn serialize_fn<S>(
    serializer: S,
    ty: &str,
    ident: Option<&Ident>,
    function: &Function,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(None)?;
    ser::head(&mut map, ty, function.span)?;
    map.serialize_entry("params", &function.params)?;
    map.serialize_entry("body", &function.body)?;
    map.serialize_entry("async", &function.is_async)?;
    map.serialize_entry("generator", &function.is_generator)?;
    map.serialize_entry("expression", &false)?;
    map.serialize_entry("id", &ident)?;
    map.end()
}

/// Class expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassExpr {
    pub ident: Option<Ident>,

    pub class: Box<Class>,
}

impl Serialize for ClassExpr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        crate::class::serialize_class(serializer, "ClassExpression", self.ident.as_ref(), &self.class)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "AssignmentExpression")]
pub struct AssignExpr {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "operator")]
    pub op: AssignOp,

    pub left: PatOrExpr,

    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "MemberExpression")]
pub struct MemberExpr {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "object")]
    pub obj: ExprOrSuper,

    #[serde(rename = "property")]
    pub prop: Box<Expr>,

    pub computed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ConditionalExpression")]
pub struct CondExpr {
    #[serde(flatten)]
    pub span: Span,

    pub test: Box<Expr>,

    #[serde(rename = "consequent")]
    pub cons: Box<Expr>,

    #[serde(rename = "alternate")]
    pub alt: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "CallExpression")]
pub struct CallExpr {
    #[serde(flatten)]
    pub span: Span,

    pub callee: ExprOrSuper,

    #[serde(rename = "arguments")]
    pub args: Vec<ExprOrSpread>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "NewExpression")]
pub struct NewExpr {
    #[serde(flatten)]
    pub span: Span,

    pub callee: Box<Expr>,

    /// Empty for `new Foo`.
    #[serde(rename = "arguments")]
    pub args: Vec<ExprOrSpread>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "SequenceExpression")]
pub struct SeqExpr {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "expressions")]
    pub exprs: Vec<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowExpr {
    pub span: Span,

    pub params: Vec<Pat>,

    pub body: BlockStmtOrExpr,

    pub is_async: bool,

    pub is_generator: bool,
}

impl Serialize for ArrowExpr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        ser::head(&mut map, "ArrowFunctionExpression", self.span)?;
        map.serialize_entry("params", &self.params)?;
        map.serialize_entry("body", &self.body)?;
        map.serialize_entry("async", &self.is_async)?;
        map.serialize_entry("generator", &self.is_generator)?;
        map.serialize_entry("expression", &matches!(self.body, BlockStmtOrExpr::Expr(_)))?;
        map.serialize_entry("id", &None::<Ident>)?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "YieldExpression")]
pub struct YieldExpr {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "argument")]
    pub arg: Option<Box<Expr>>,

    pub delegate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "MetaProperty")]
pub struct MetaPropExpr {
    #[serde(flatten)]
    pub span: Span,

    pub meta: Ident,

    #[serde(rename = "property")]
    pub prop: Ident,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "AwaitExpression")]
pub struct AwaitExpr {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "argument")]
    pub arg: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TemplateLiteral")]
pub struct Tpl {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "expressions")]
    pub exprs: Vec<Box<Expr>>,

    pub quasis: Vec<TplElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TaggedTemplateExpression")]
pub struct TaggedTpl {
    #[serde(flatten)]
    pub span: Span,

    pub tag: Box<Expr>,

    #[serde(rename = "quasi")]
    pub tpl: Tpl,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TplElement {
    pub span: Span,

    pub tail: bool,

    /// `None` when the raw text contains an invalid escape, which is legal
    /// inside tagged templates.
    pub cooked: Option<JsWord>,

    pub raw: JsWord,
}

impl Serialize for TplElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct TplValue<'a> {
            cooked: &'a Option<JsWord>,
            raw: &'a JsWord,
        }

        let mut map = serializer.serialize_map(None)?;
        ser::head(&mut map, "TemplateElement", self.span)?;
        map.serialize_entry(
            "value",
            &TplValue {
                cooked: &self.cooked,
                raw: &self.raw,
            },
        )?;
        map.serialize_entry("tail", &self.tail)?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExprOrSuper {
    Super(Super),

    Expr(Box<Expr>),
}

spanned_enum!(ExprOrSuper { Super, Expr });

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Super")]
pub struct Super {
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Import")]
pub struct Import {
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExprOrSpread {
    Spread(SpreadElement),

    Expr(Box<Expr>),
}

spanned_enum!(ExprOrSpread { Spread, Expr });

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BlockStmtOrExpr {
    BlockStmt(BlockStmt),

    Expr(Box<Expr>),
}

spanned_enum!(BlockStmtOrExpr { BlockStmt, Expr });

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PatOrExpr {
    Expr(Box<Expr>),

    Pat(Box<Pat>),
}

spanned_enum!(PatOrExpr { Expr, Pat });

spanned!(
    ThisExpr,
    ArrayLit,
    ObjectLit,
    SpreadElement,
    UnaryExpr,
    UpdateExpr,
    BinExpr,
    AssignExpr,
    MemberExpr,
    CondExpr,
    CallExpr,
    NewExpr,
    SeqExpr,
    ArrowExpr,
    YieldExpr,
    MetaPropExpr,
    AwaitExpr,
    Tpl,
    TaggedTpl,
    TplElement,
    Super,
    Import,
);

impl Spanned for FnExpr {
    fn span(&self) -> Span {
        self.function.span
    }
}

impl Spanned for ClassExpr {
    fn span(&self) -> Span {
        self.class.span
    }
}
