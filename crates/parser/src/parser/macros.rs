macro_rules! span {
    ($parser:expr, $start:expr) => {{
        let start: ::global_common::BytePos = $start;
        let end: ::global_common::BytePos = $parser.input.prev_span().hi;

        debug_assert!(
            start <= end,
            "assertion failed: (span.start <= span.end). start = {}, end = {}",
            start.0,
            end.0
        );
        ::global_common::Span::new(start, end)
    }};
}

/// Creates an error and returns it from the enclosing function.
macro_rules! syntax_error {
    ($parser:expr, $err:expr) => {
        syntax_error!($parser, $parser.input.cur_span(), $err)
    };

    ($parser:expr, $span:expr, $err:expr) => {{
        // If the lexer has already produced an error at this position, it is
        // more precise than ours.
        let is_err_token = matches!(
            $parser.input.cur(),
            Some(&crate::token::Token::Error(..))
        );
        if is_err_token {
            match $parser.input.bump() {
                crate::token::Token::Error(e) => return Err(e),
                _ => unreachable!(),
            }
        }

        return Err(crate::error::Error {
            error: Box::new(($span, $err)),
        });
    }};
}

/// Returns `Ok(&Token)`, or `Err` on eof or on a lexer error.
macro_rules! cur {
    ($parser:expr) => {{
        let pos = $parser.input.last_pos();
        let last = ::global_common::Span::new(pos, pos);
        let is_err_token = matches!(
            $parser.input.cur(),
            Some(&crate::token::Token::Error(..))
        );

        if is_err_token {
            match $parser.input.bump() {
                crate::token::Token::Error(e) => Err(e),
                _ => unreachable!(),
            }
        } else {
            match $parser.input.cur() {
                Some(c) => Ok(c),
                None => Err(crate::error::Error {
                    error: Box::new((last, crate::error::SyntaxError::Eof)),
                }),
            }
        }
    }};
}

macro_rules! peek {
    ($parser:expr) => {{
        debug_assert!(
            $parser.input.knows_cur(),
            "parser should not call peek() without knowing current token"
        );

        let pos = $parser.input.cur_pos();
        let last = ::global_common::Span::new(pos, pos);
        match $parser.input.peek() {
            Some(c) => Ok(c),
            None => Err(crate::error::Error {
                error: Box::new((last, crate::error::SyntaxError::Eof)),
            }),
        }
    }};
}

/// This handles automatic semicolon insertion.
///
/// Returns bool.
macro_rules! is {
    ($parser:expr, BindingIdent) => {{
        let ctx = $parser.ctx();
        match $parser.input.cur() {
            Some(&Word(ref w)) => !ctx.is_reserved_word(&w.cow()),
            _ => false,
        }
    }};

    ($parser:expr, IdentRef) => {{
        let ctx = $parser.ctx();
        match $parser.input.cur() {
            Some(&Word(ref w)) => !ctx.is_reserved_word(&w.cow()),
            _ => false,
        }
    }};

    ($parser:expr,IdentName) => {{
        match $parser.input.cur() {
            Some(&Word(..)) => true,
            _ => false,
        }
    }};

    ($parser:expr,';') => {{
        match $parser.input.cur() {
            Some(&Token::Semi) | None | Some(&tok!('}')) => true,
            _ => $parser.input.had_line_break_before_cur(),
        }
    }};

    ($parser:expr, $t:tt) => {
        is_exact!($parser, $t)
    };
}

macro_rules! is_exact {
    ($parser:expr, $t:tt) => {{
        $parser.input.is(&tok!($t))
    }};
}

macro_rules! is_one_of {
    ($parser:expr, $($t:tt),+) => {{
        false
        $(
            || is!($parser, $t)
        )*
    }};
}

macro_rules! peeked_is {
    ($parser:expr, IdentName) => {{
        match $parser.input.peek() {
            Some(&Word(..)) => true,
            _ => false,
        }
    }};

    ($parser:expr, $t:tt) => {{
        $parser.input.peeked_is(&tok!($t))
    }};
}

/// This handles automatic semicolon insertion.
///
/// Returns bool if token is static, and Option<Token>
///     if token has data like string.
macro_rules! eat {
    ($parser:expr, ';') => {{
        match $parser.input.cur() {
            Some(&Token::Semi) => {
                $parser.input.bump();
                true
            }
            None | Some(&tok!('}')) => true,
            _ => $parser.input.had_line_break_before_cur(),
        }
    }};

    ($parser:expr, $t:tt) => {{
        if is!($parser, $t) {
            $parser.input.bump();
            true
        } else {
            false
        }
    }};
}

/// Returns true on eof.
macro_rules! eof {
    ($parser:expr) => {
        $parser.input.cur().is_none()
    };
}

macro_rules! unexpected {
    ($parser:expr) => {{
        let got = $parser.input.dump_cur();
        syntax_error!(
            $parser,
            $parser.input.cur_span(),
            crate::error::SyntaxError::UnexpectedToken { got }
        )
    }};
}

/// This handles automatic semicolon insertion.
macro_rules! expect {
    ($parser:expr, $t:tt) => {{
        if !eat!($parser, $t) {
            unexpected!($parser)
        }
    }};
}

macro_rules! expect_exact {
    ($parser:expr, $t:tt) => {{
        const TOKEN: &Token = &tok!($t);
        if !$parser.input.eat(TOKEN) {
            unexpected!($parser)
        }
    }};
}

macro_rules! assert_and_bump {
    ($parser:expr, $t:tt) => {{
        const TOKEN: &Token = &tok!($t);
        if cfg!(debug_assertions) && !$parser.input.is(TOKEN) {
            unreachable!(
                "assertion failed: expected {:?}, got {:?}",
                TOKEN,
                $parser.input.cur()
            );
        }
        let _ = cur!($parser);
        $parser.input.bump();
    }};
}

macro_rules! return_if_arrow {
    ($potential_arrow_start:expr, $expr:expr) => {{
        match $potential_arrow_start {
            Some(start) if $expr.span().lo == start && matches!(*$expr, Expr::Arrow { .. }) => {
                return Ok($expr)
            }
            _ => {}
        };
    }};
}
