use parser::{estree, ParseError, ParserConfig};
use pretty_assertions::assert_eq;
use serde_json::Value;

fn config() -> ParserConfig {
    ParserConfig {
        jsx: true,
        ..Default::default()
    }
}

fn jsx(src: &str) -> Value {
    let config = config();
    let program = match parser::parse_program(src, config) {
        Ok(program) => program,
        Err(e) => panic!("{:?}: {}", src, e),
    };
    let value = estree::to_value(&program, src, &config).unwrap();
    value["body"][0]["expression"].clone()
}

fn error(src: &str) -> ParseError {
    parser::parse_program(src, config()).expect_err("expected a parse error")
}

#[test]
fn self_closing_element() {
    let el = jsx("<br/>");

    assert_eq!(el["type"], "JSXElement");
    assert_eq!(el["openingElement"]["type"], "JSXOpeningElement");
    assert_eq!(el["openingElement"]["selfClosing"], true);
    assert_eq!(el["openingElement"]["name"]["type"], "JSXIdentifier");
    assert_eq!(el["openingElement"]["name"]["name"], "br");
    assert_eq!(el["closingElement"], Value::Null);
}

#[test]
fn element_with_children() {
    let el = jsx("<a>text{x}</a>");

    assert_eq!(el["openingElement"]["selfClosing"], false);
    assert_eq!(el["children"][0]["type"], "JSXText");
    assert_eq!(el["children"][0]["value"], "text");
    assert_eq!(el["children"][1]["type"], "JSXExpressionContainer");
    assert_eq!(el["children"][1]["expression"]["type"], "Identifier");
    assert_eq!(el["closingElement"]["name"]["name"], "a");
}

#[test]
fn fragment() {
    let el = jsx("<>hi</>");

    assert_eq!(el["type"], "JSXFragment");
    assert_eq!(el["openingElement"]["type"], "JSXOpeningFragment");
    assert_eq!(el["closingElement"]["type"], "JSXClosingFragment");
    assert_eq!(el["children"][0]["type"], "JSXText");
}

#[test]
fn attributes() {
    let el = jsx(r#"<a href="x" on:click={f} {...rest} download/>"#);
    let attrs = &el["openingElement"]["attributes"];

    assert_eq!(attrs[0]["type"], "JSXAttribute");
    assert_eq!(attrs[0]["name"]["name"], "href");
    assert_eq!(attrs[0]["value"]["type"], "Literal");

    assert_eq!(attrs[1]["name"]["type"], "JSXNamespacedName");
    assert_eq!(attrs[1]["name"]["namespace"]["name"], "on");
    assert_eq!(attrs[1]["value"]["type"], "JSXExpressionContainer");

    assert_eq!(attrs[2]["type"], "JSXSpreadAttribute");
    assert_eq!(attrs[2]["argument"]["name"], "rest");

    assert_eq!(attrs[3]["value"], Value::Null);
}

#[test]
fn member_expression_names() {
    let el = jsx("<a.b.c/>");
    let name = &el["openingElement"]["name"];

    assert_eq!(name["type"], "JSXMemberExpression");
    assert_eq!(name["object"]["type"], "JSXMemberExpression");
    assert_eq!(name["object"]["object"]["name"], "a");
    assert_eq!(name["property"]["name"], "c");
}

#[test]
fn empty_expression_child() {
    let el = jsx("<a>{}</a>");

    assert_eq!(el["children"][0]["type"], "JSXExpressionContainer");
    assert_eq!(el["children"][0]["expression"]["type"], "JSXEmptyExpression");
}

#[test]
fn empty_attribute_value_is_an_error() {
    let err = error("<a b={}/>");
    assert_eq!(
        err.message,
        "JSX attributes must only be assigned a non-empty expression"
    );
}

#[test]
fn mismatched_closing_tag_is_fatal() {
    let err = error("<a></b>");
    assert_eq!(
        err.message,
        "Expected corresponding JSX closing tag for 'a'"
    );
}

#[test]
fn fragment_closed_by_element_is_fatal() {
    let err = error("<>x</b>");
    assert_eq!(
        err.message,
        "Expected corresponding JSX closing tag for '<>'"
    );
}

#[test]
fn nested_elements() {
    let el = jsx("<a><b/><c/></a>");

    assert_eq!(el["children"][0]["type"], "JSXElement");
    assert_eq!(el["children"][1]["openingElement"]["name"]["name"], "c");
}

#[test]
fn children_resume_after_containers_and_closed_tags() {
    // Containers and closed child tags hand the scanner back to children
    // mode, so any mix of siblings keeps lexing as markup.
    let el = jsx("<a>{x}<b/>{y}<c/></a>");

    assert_eq!(el["children"][0]["type"], "JSXExpressionContainer");
    assert_eq!(el["children"][1]["type"], "JSXElement");
    assert_eq!(el["children"][2]["expression"]["name"], "y");
    assert_eq!(el["children"][3]["openingElement"]["name"]["name"], "c");
}
