use parser::{estree, ParseError, ParserConfig};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

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

fn expr(src: &str) -> Value {
    script(src)["body"][0]["expression"].clone()
}

#[test]
fn array_with_single_identifier() {
    let expr = expr("[a]");

    assert_eq!(
        expr,
        json!({
            "type": "ArrayExpression",
            "elements": [{ "type": "Identifier", "name": "a" }],
        })
    );
}

#[test]
fn destructuring_assignment_builds_patterns() {
    let expr = expr("[a, [b]] = c");

    assert_eq!(expr["type"], "AssignmentExpression");
    assert_eq!(expr["operator"], "=");
    assert_eq!(expr["left"]["type"], "ArrayPattern");
    assert_eq!(expr["left"]["elements"][0]["type"], "Identifier");
    assert_eq!(expr["left"]["elements"][1]["type"], "ArrayPattern");
}

#[test]
fn member_default_in_pattern_vs_plain_assignment() {
    // Target position: the array becomes a pattern and the `=` inside it an
    // AssignmentPattern with a member expression left.
    let target = expr("[x.y = a] = z");
    assert_eq!(target["left"]["type"], "ArrayPattern");
    assert_eq!(target["left"]["elements"][0]["type"], "AssignmentPattern");
    assert_eq!(
        target["left"]["elements"][0]["left"]["type"],
        "MemberExpression"
    );

    // Plain expression position: nothing to reinterpret.
    let plain = expr("[x.y = z]");
    assert_eq!(plain["type"], "ArrayExpression");
    assert_eq!(plain["elements"][0]["type"], "AssignmentExpression");
}

#[test]
fn default_inside_pattern_keeps_destructuring() {
    let expr = expr("[a = b] = c");

    assert_eq!(expr["left"]["type"], "ArrayPattern");
    assert_eq!(expr["left"]["elements"][0]["type"], "AssignmentPattern");
}

#[test]
fn reinterpreting_an_existing_pattern_is_stable() {
    // The inner `[a] = b` is already a pattern by the time the outer
    // assignment reinterprets its target; the second pass must keep the
    // shape instead of rejecting or rebuilding it.
    let expr = expr("[[a] = b] = c");

    assert_eq!(expr["type"], "AssignmentExpression");
    assert_eq!(expr["left"]["type"], "ArrayPattern");

    let elem = &expr["left"]["elements"][0];
    assert_eq!(elem["type"], "AssignmentPattern");
    assert_eq!(elem["left"]["type"], "ArrayPattern");
    assert_eq!(elem["left"]["elements"][0]["name"], "a");
    assert_eq!(elem["right"]["name"], "b");
}

#[test]
fn shorthand_default_outside_pattern_is_fatal() {
    let err = error("({a = 1})");
    assert_eq!(err.message, "Invalid left-hand side in assignment");
}

#[test]
fn exponentiation_is_a_single_binary_expression() {
    let expr = expr("2 ** 4");

    assert_eq!(expr["type"], "BinaryExpression");
    assert_eq!(expr["operator"], "**");
}

#[test]
fn exponentiation_is_right_associative() {
    let expr = expr("x ** y ** z");

    assert_eq!(expr["left"]["type"], "Identifier");
    assert_eq!(expr["right"]["type"], "BinaryExpression");
    assert_eq!(expr["right"]["left"]["name"], "y");
}

#[test]
fn unary_left_of_exponentiation_is_fatal() {
    error("-x ** 2");

    let parenthesized = expr("(-x) ** 2");
    assert_eq!(parenthesized["left"]["type"], "UnaryExpression");
}

#[test]
fn update_left_of_exponentiation_is_legal() {
    let expr = expr("++x ** y");

    assert_eq!(expr["type"], "BinaryExpression");
    assert_eq!(expr["left"]["type"], "UpdateExpression");
}

#[test]
fn duplicate_proto_is_fatal_unless_pattern() {
    let err = error("({__proto__: 1, __proto__: 2})");
    assert_eq!(
        err.message,
        "Property name __proto__ appears more than once in object literal"
    );

    // In assignment-target position the object is a pattern, where the
    // restriction does not apply.
    let expr = expr("({__proto__: a, __proto__: b} = x)");
    assert_eq!(expr["left"]["type"], "ObjectPattern");
}

#[test]
fn nullish_mixed_with_logical_needs_parens() {
    let err = error("a ?? b || c");
    assert_eq!(
        err.message,
        "Cannot use '??' unparenthesized within '||' or '&&' expressions"
    );
    error("a && b ?? c");

    // Parenthesized operands are fine on either side.
    let expr = expr("a ?? (b || c)");
    assert_eq!(expr["operator"], "??");
    assert_eq!(expr["right"]["operator"], "||");

    let expr = self::expr("(a && b) ?? c");
    assert_eq!(expr["operator"], "??");
    assert_eq!(expr["left"]["operator"], "&&");
}

#[test]
fn compound_assignment_requires_simple_target() {
    let err = error("[a] += b");
    assert_eq!(err.message, "Invalid left-hand side in assignment");
}

#[test]
fn division_assignment_lexes_as_one_operator() {
    let expr = expr("a /= b");

    assert_eq!(expr["type"], "AssignmentExpression");
    assert_eq!(expr["operator"], "/=");
}

#[test]
fn arrow_parameters_are_reinterpreted() {
    let expr = expr("({a = 1}) => a");

    assert_eq!(expr["type"], "ArrowFunctionExpression");
    assert_eq!(expr["params"][0]["type"], "ObjectPattern");
    assert_eq!(
        expr["params"][0]["properties"][0]["value"]["type"],
        "AssignmentPattern"
    );
}

#[test]
fn sequence_expression() {
    let expr = expr("a, b, c");

    assert_eq!(expr["type"], "SequenceExpression");
    assert_eq!(expr["expressions"].as_array().unwrap().len(), 3);
}

#[test]
fn parse_error_carries_location() {
    let err = error("a;\n)");

    assert_eq!(err.line, 2);
    assert_eq!(err.column, 0);
    assert_eq!(err.index, 3);
}
