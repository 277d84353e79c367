use global_common::{BytePos, CommentKind};
use parser::ParserConfig;
use pretty_assertions::assert_eq;

fn config() -> ParserConfig {
    ParserConfig {
        comments: true,
        ..Default::default()
    }
}

#[test]
fn comments_are_collected_in_source_order() {
    let src = "// one\na; /* two */ b;";
    let program = parser::parse_program(src, config()).unwrap();
    let comments = program.comments.unwrap();

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].kind, CommentKind::Line);
    assert_eq!(comments[0].text, " one");
    assert_eq!(comments[1].kind, CommentKind::Block);
    assert_eq!(comments[1].text, " two ");
}

#[test]
fn comments_absent_unless_requested() {
    let program = parser::parse_program("// c\n1;", ParserConfig::default()).unwrap();
    assert!(program.comments.is_none());
}

#[test]
fn html_close_comment_after_block_comment() {
    let src = "/* block comment */--> comment";
    let program = parser::parse_program(src, config()).unwrap();
    let comments = program.comments.unwrap();

    assert_eq!(comments.len(), 2);

    assert_eq!(comments[0].kind, CommentKind::Block);
    assert_eq!(comments[0].text, " block comment ");
    assert_eq!(comments[0].span.lo, BytePos(0));
    assert_eq!(comments[0].span.hi, BytePos(19));

    assert_eq!(comments[1].kind, CommentKind::Line);
    assert_eq!(comments[1].text, " comment");
    assert_eq!(comments[1].span.lo, BytePos(19));
    assert_eq!(comments[1].span.hi, BytePos(30));
}

#[test]
fn html_open_comment_in_scripts() {
    let src = "a; <!-- hidden\nb;";
    let program = parser::parse_program(src, config()).unwrap();
    let comments = program.comments.unwrap();

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].kind, CommentKind::Line);
    assert_eq!(comments[0].text, " hidden");
}

#[test]
fn web_compat_can_be_disabled() {
    let config = ParserConfig {
        disable_web_compat: true,
        ..Default::default()
    };

    assert!(parser::parse_program("<!-- x\n1;", config).is_err());
}

#[test]
fn unterminated_block_comment_is_fatal() {
    let err = parser::parse_program("/* open", config()).unwrap_err();
    assert_eq!(err.message, "Unterminated comment");
}

#[test]
fn shebang_is_skipped() {
    let program = parser::parse_program("#!/usr/bin/env node\n1;", ParserConfig::default()).unwrap();
    assert_eq!(&*program.shebang.unwrap(), "/usr/bin/env node");
    assert_eq!(program.body.len(), 1);
}
