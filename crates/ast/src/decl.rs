use crate::{class::Class, expr::Expr, function::Function, ident::Ident, pat::Pat};
use global_common::{Span, Spanned};
use serde::{ser::Serializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Decl {
    Class(ClassDecl),

    Fn(FnDecl),

    Var(VarDecl),
}

spanned_enum!(Decl { Class, Fn, Var });

#[derive(Debug, Clone, PartialEq)]
pub struct FnDecl {
    pub ident: Ident,

    pub function: Box<Function>,
}

impl Serialize for FnDecl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        crate::expr::serialize_fn(
            serializer,
            "FunctionDeclaration",
            Some(&self.ident),
            &self.function,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub ident: Ident,

    pub class: Box<Class>,
}

impl Serialize for ClassDecl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        crate::class::serialize_class(serializer, "ClassDeclaration", Some(&self.ident), &self.class)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "VariableDeclaration")]
pub struct VarDecl {
    #[serde(flatten)]
    pub span: Span,

    pub kind: VarDeclKind,

    #[serde(rename = "declarations")]
    pub decls: Vec<VarDeclarator>,
}

string_enum! {
    pub enum VarDeclKind {
        /// `var`
        Var => "var",
        /// `let`
        Let => "let",
        /// `const`
        Const => "const",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "VariableDeclarator")]
pub struct VarDeclarator {
    #[serde(flatten)]
    pub span: Span,

    #[serde(rename = "id")]
    pub name: Pat,

    /// Initialization expression.
    pub init: Option<Box<Expr>>,
}

spanned!(VarDecl, VarDeclarator);

impl Spanned for FnDecl {
    fn span(&self) -> Span {
        self.function.span
    }
}

impl Spanned for ClassDecl {
    fn span(&self) -> Span {
        self.class.span
    }
}
