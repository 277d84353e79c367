#![deny(unreachable_patterns)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unreachable_pub)]

pub use self::{
    class::{Class, ClassBody, ClassMember, ClassMethod, ClassProp, MethodKind},
    decl::{ClassDecl, Decl, FnDecl, VarDecl, VarDeclKind, VarDeclarator},
    expr::{
        ArrayLit, ArrowExpr, AssignExpr, AwaitExpr, BinExpr, BlockStmtOrExpr, CallExpr, ClassExpr,
        CondExpr, Expr, ExprOrSpread, ExprOrSuper, FnExpr, Import, MemberExpr, MetaPropExpr,
        NewExpr, ObjectLit, PatOrExpr, PropOrSpread, SeqExpr, SpreadElement, Super, TaggedTpl,
        ThisExpr, Tpl, TplElement, UnaryExpr, UpdateExpr, YieldExpr,
    },
    function::Function,
    ident::{Ident, PrivateName},
    jsx::{
        JSXAttr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXClosingElement,
        JSXClosingFragment, JSXElement, JSXElementChild, JSXElementName, JSXEmptyExpr, JSXExpr,
        JSXExprContainer, JSXFragment, JSXIdent, JSXMemberExpr, JSXNamespacedName, JSXObject,
        JSXOpeningElement, JSXOpeningFragment, JSXSpreadAttr, JSXSpreadChild, JSXText,
    },
    lit::{BigInt, Bool, Lit, Null, Number, Regex, Str},
    module::{Program, SourceType},
    operators::{AssignOp, BinaryOp, UnaryOp, UpdateOp},
    pat::{ArrayPat, AssignPat, ObjectPat, ObjectPatProp, Pat, RestPat},
    prop::{Prop, PropKind},
    stmt::{
        BlockStmt, BreakStmt, CatchClause, ContinueStmt, DebuggerStmt, DoWhileStmt, EmptyStmt,
        ExprStmt, ForInStmt, ForOfStmt, ForStmt, IfStmt, LabeledStmt, ReturnStmt, Stmt, SwitchCase,
        SwitchStmt, ThrowStmt, TryStmt, VarDeclOrExpr, VarDeclOrPat, WhileStmt, WithStmt,
    },
};

#[macro_use]
mod macros;
mod class;
mod decl;
mod expr;
mod function;
mod ident;
mod jsx;
mod lit;
mod module;
mod operators;
mod pat;
mod prop;
mod ser;
mod stmt;

#[cfg(test)]
mod tests {
    use super::*;
    use global_common::{BytePos, Span};
    use serde_json::json;

    fn span(lo: u32, hi: u32) -> Span {
        Span::new(BytePos(lo), BytePos(hi))
    }

    #[test]
    fn identifier_shape() {
        let node = Expr::Ident(Ident::new("a".into(), span(0, 1)));
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({ "type": "Identifier", "start": 0, "end": 1, "name": "a" })
        );
    }

    #[test]
    fn logical_operators_change_the_type_string() {
        let left = Box::new(Expr::Ident(Ident::new("a".into(), span(0, 1))));
        let right = Box::new(Expr::Ident(Ident::new("b".into(), span(5, 6))));
        let node = BinExpr {
            span: span(0, 6),
            op: BinaryOp::LogicalAnd,
            left,
            right,
        };
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], "LogicalExpression");
        assert_eq!(value["operator"], "&&");
    }

    #[test]
    fn integral_numbers_serialize_without_fraction() {
        let node = Number {
            span: span(0, 1),
            value: 2.0,
            raw: None,
        };
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({ "type": "Literal", "start": 0, "end": 1, "value": 2 })
        );
    }

    #[test]
    fn bigint_serializes_decimal_digits() {
        let node = BigInt {
            span: span(0, 4),
            value: 255u32.into(),
            raw: Some("0xffn".into()),
        };
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({
                "type": "Literal",
                "start": 0,
                "end": 4,
                "value": null,
                "bigint": "255",
                "raw": "0xffn",
            })
        );
    }

    #[test]
    fn regex_value_is_an_empty_object() {
        let node = Regex {
            span: span(0, 6),
            exp: "ab+c".into(),
            flags: "iu".into(),
            raw: None,
        };
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({
                "type": "Literal",
                "start": 0,
                "end": 6,
                "value": {},
                "regex": { "pattern": "ab+c", "flags": "iu" },
            })
        );
    }

    #[test]
    fn template_element_nests_cooked_and_raw() {
        let node = TplElement {
            span: span(1, 3),
            tail: true,
            cooked: Some("hi".into()),
            raw: "hi".into(),
        };
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({
                "type": "TemplateElement",
                "start": 1,
                "end": 3,
                "value": { "cooked": "hi", "raw": "hi" },
                "tail": true,
            })
        );
    }

    #[test]
    fn array_holes_serialize_as_null() {
        let node = ArrayLit {
            span: span(0, 5),
            elems: vec![
                None,
                Some(ExprOrSpread::Expr(Box::new(Expr::Ident(Ident::new(
                    "a".into(),
                    span(2, 3),
                ))))),
            ],
        };
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["elements"][0], serde_json::Value::Null);
        assert_eq!(value["elements"][1]["type"], "Identifier");
    }

    #[test]
    fn arrow_reports_expression_body() {
        let node = ArrowExpr {
            span: span(0, 7),
            params: vec![Pat::Ident(Ident::new("x".into(), span(0, 1)))],
            body: BlockStmtOrExpr::Expr(Box::new(Expr::Ident(Ident::new("x".into(), span(6, 7))))),
            is_async: false,
            is_generator: false,
        };
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], "ArrowFunctionExpression");
        assert_eq!(value["expression"], true);
        assert_eq!(value["id"], serde_json::Value::Null);
    }
}
