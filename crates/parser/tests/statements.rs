use parser::{estree, ParseError, ParserConfig};
use pretty_assertions::assert_eq;
use serde_json::Value;

fn script(src: &str) -> Value {
    let config = ParserConfig::default();
    let program = match parser::parse_program(src, config) {
        Ok(program) => program,
        Err(e) => panic!("{:?}: {}", src, e),
    };
    estree::to_value(&program, src, &config).unwrap()
}

fn error(src: &str) -> ParseError {
    parser::parse_program(src, ParserConfig::default()).expect_err("expected a parse error")
}

fn module_error(src: &str) -> ParseError {
    parser::parse_module(src, ParserConfig::default()).expect_err("expected a parse error")
}

#[test]
fn source_type_follows_the_goal() {
    assert_eq!(script("1")["sourceType"], "script");

    let config = ParserConfig {
        module: true,
        ..Default::default()
    };
    let program = parser::parse_program("1", config).unwrap();
    let value = estree::to_value(&program, "1", &config).unwrap();
    assert_eq!(value["sourceType"], "module");
}

#[test]
fn for_of_without_await() {
    let stmt = &script("for (a of b);")["body"][0];

    assert_eq!(stmt["type"], "ForOfStatement");
    assert_eq!(stmt["await"], false);
    assert_eq!(stmt["left"]["type"], "Identifier");
    assert_eq!(stmt["body"]["type"], "EmptyStatement");
}

#[test]
fn for_await_in_async_function() {
    let src = "async function f() { for await (const x of xs) {} }";
    let stmt = &script(src)["body"][0]["body"]["body"][0];

    assert_eq!(stmt["type"], "ForOfStatement");
    assert_eq!(stmt["await"], true);
    assert_eq!(stmt["left"]["type"], "VariableDeclaration");
}

#[test]
fn for_await_outside_async_is_fatal() {
    let err = error("for await (a of b);");
    assert_eq!(
        err.message,
        "'for await' is only valid in async functions and async generators"
    );
}

#[test]
fn multiple_declarators_in_for_of_head_are_fatal() {
    let err = error("for (const i, j of {}) {}");
    assert_eq!(
        err.message,
        "Only a single declaration is allowed in a for-in/for-of head"
    );
}

#[test]
fn initializer_in_for_in_head_is_fatal() {
    let err = error("for (var a = 1 in b) {}");
    assert_eq!(
        err.message,
        "A loop variable declaration in a for-in/for-of head may not have an initializer"
    );
}

#[test]
fn classic_for_with_declaration_head() {
    let stmt = &script("for (let i = 0; i < 9; i++) {}")["body"][0];

    assert_eq!(stmt["type"], "ForStatement");
    assert_eq!(stmt["init"]["type"], "VariableDeclaration");
    assert_eq!(stmt["init"]["kind"], "let");
    assert_eq!(stmt["test"]["type"], "BinaryExpression");
    assert_eq!(stmt["update"]["type"], "UpdateExpression");
}

#[test]
fn for_head_expression_reinterpreted_as_target() {
    let stmt = &script("for ([a, b] of c);")["body"][0];

    assert_eq!(stmt["left"]["type"], "ArrayPattern");
}

#[test]
fn destructuring_declaration_requires_initializer() {
    let err = error("let {a};");
    assert_eq!(err.message, "Missing initializer in destructuring declaration");

    script("let {a} = b;");
    script("for (const {a} of b);");
}

#[test]
fn const_requires_initializer() {
    let err = error("const a;");
    assert_eq!(err.message, "Missing initializer in const declaration");

    // The restriction is suspended in for heads.
    script("for (const a of b);");
}

#[test]
fn return_outside_function_is_an_error() {
    let err = error("return;");
    assert_eq!(err.message, "Illegal return statement");

    script("function f() { return 1; }");
}

#[test]
fn labels_are_tracked() {
    script("outer: { break outer; }");

    assert_eq!(
        error("a: a: 1;").message,
        "Label 'a' has already been declared"
    );
    assert_eq!(error("break b;").message, "Undefined label 'b'");
}

#[test]
fn break_and_continue_need_a_loop() {
    assert_eq!(error("break;").message, "Illegal break statement");
    assert_eq!(error("continue;").message, "Illegal continue statement");

    script("while (a) { break; continue; }");
}

#[test]
fn try_needs_catch_or_finally() {
    let err = error("try {}");
    assert_eq!(err.message, "Missing catch or finally after try");

    // The catch binding is optional.
    let stmt = &script("try {} catch {}")["body"][0];
    assert_eq!(stmt["handler"]["param"], Value::Null);

    let stmt = &script("try {} catch (e) {} finally {}")["body"][0];
    assert_eq!(stmt["handler"]["param"]["name"], "e");
    assert_eq!(stmt["finalizer"]["type"], "BlockStatement");
}

#[test]
fn switch_allows_one_default() {
    let err = error("switch (x) { default: default: }");
    assert_eq!(err.message, "More than one default clause in switch statement");

    let stmt = &script("switch (x) { case 1: a(); default: b(); }")["body"][0];
    assert_eq!(stmt["cases"].as_array().unwrap().len(), 2);
    assert_eq!(stmt["cases"][1]["test"], Value::Null);
}

#[test]
fn newline_after_throw_is_fatal() {
    let err = error("throw\n1;");
    assert_eq!(err.message, "Illegal newline after throw");

    script("throw 1;");
}

#[test]
fn do_while_semicolon_is_optional() {
    let stmt = &script("do x; while (y)")["body"][0];
    assert_eq!(stmt["type"], "DoWhileStatement");
}

#[test]
fn with_is_rejected_in_strict_code() {
    script("with (x) y;");

    let err = module_error("with (x) y;");
    assert_eq!(
        err.message,
        "Strict mode code may not include a with statement"
    );
}

#[test]
fn use_strict_directive_activates_strict_mode() {
    script("delete x;");

    let err = error("\"use strict\";\ndelete x;");
    assert_eq!(
        err.message,
        "Delete of an unqualified identifier in strict mode"
    );

    // Escapes disqualify the directive.
    script("\"use\\x20strict\";\ndelete x;");
}

#[test]
fn module_goal_is_strict() {
    let err = module_error("delete x;");
    assert_eq!(
        err.message,
        "Delete of an unqualified identifier in strict mode"
    );
}

#[test]
fn let_as_identifier_in_sloppy_code() {
    let stmt = &script("let;")["body"][0];
    assert_eq!(stmt["expression"]["type"], "Identifier");
    assert_eq!(stmt["expression"]["name"], "let");

    let stmt = &script("let x = 1;")["body"][0];
    assert_eq!(stmt["type"], "VariableDeclaration");
}

#[test]
fn labelled_generator_declaration_is_fatal() {
    let err = error("l: function* g() {}");
    assert_eq!(err.message, "Generator declarations cannot be labelled");

    script("l: function f() {}");
}
