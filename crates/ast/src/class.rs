use crate::{expr::Expr, expr::FnExpr, ident::Ident, ser};
use global_common::Span;
use serde::{
    ser::{SerializeMap, Serializer},
    Serialize,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub span: Span,

    pub super_class: Option<Box<Expr>>,

    pub body: ClassBody,
}

/// Shared by `ClassExpression` and `ClassDeclaration`, which differ only
/// in the `type` string and whether `id` may be null.
pub(crate) fn serialize_class<S>(
    serializer: S,
    ty: &str,
    ident: Option<&Ident>,
    class: &Class,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(None)?;
    ser::head(&mut map, ty, class.span)?;
    map.serialize_entry("id", &ident)?;
    map.serialize_entry("superClass", &class.super_class)?;
    map.serialize_entry("body", &class.body)?;
    map.end()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ClassBody")]
pub struct ClassBody {
    /// Span including the braces.
    #[serde(flatten)]
    pub span: Span,

    pub body: Vec<ClassMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClassMember {
    Method(ClassMethod),

    Prop(ClassProp),
}

spanned_enum!(ClassMember { Method, Prop });

/// Constructors, methods and accessors, including private ones; the key
/// of a private member is a `PrivateName` expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "MethodDefinition")]
pub struct ClassMethod {
    #[serde(flatten)]
    pub span: Span,

    pub kind: MethodKind,

    #[serde(rename = "static")]
    pub is_static: bool,

    pub computed: bool,

    pub key: Box<Expr>,

    pub value: FnExpr,
}

string_enum! {
    pub enum MethodKind {
        Constructor => "constructor",
        Method => "method",
        Getter => "get",
        Setter => "set",
    }
}

/// An instance field, public or private.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "FieldDefinition")]
pub struct ClassProp {
    #[serde(flatten)]
    pub span: Span,

    pub key: Box<Expr>,

    pub value: Option<Box<Expr>>,

    pub computed: bool,

    #[serde(rename = "static")]
    pub is_static: bool,
}

spanned!(Class, ClassBody, ClassMethod, ClassProp);
