/// Creates a corresponding operator.
///
/// Unary +,- is `op!(unary, "+")`, `op!(unary, "-")`.
///
/// Binary +,- is `op!(bin, "+")`, `op!(bin, "-")`.
macro_rules! op {
    (unary,"-") => {
        ast::UnaryOp::Minus
    };
    (unary,"+") => {
        ast::UnaryOp::Plus
    };
    ("!") => {
        ast::UnaryOp::Bang
    };
    ("~") => {
        ast::UnaryOp::Tilde
    };
    ("typeof") => {
        ast::UnaryOp::TypeOf
    };
    ("void") => {
        ast::UnaryOp::Void
    };
    ("delete") => {
        ast::UnaryOp::Delete
    };

    ("++") => {
        ast::UpdateOp::PlusPlus
    };
    ("--") => {
        ast::UpdateOp::MinusMinus
    };

    ("==") => {
        ast::BinaryOp::EqEq
    };
    ("!=") => {
        ast::BinaryOp::NotEq
    };
    ("===") => {
        ast::BinaryOp::EqEqEq
    };
    ("!==") => {
        ast::BinaryOp::NotEqEq
    };
    ("<") => {
        ast::BinaryOp::Lt
    };
    ("<=") => {
        ast::BinaryOp::LtEq
    };
    (">") => {
        ast::BinaryOp::Gt
    };
    (">=") => {
        ast::BinaryOp::GtEq
    };
    ("<<") => {
        ast::BinaryOp::LShift
    };
    (">>") => {
        ast::BinaryOp::RShift
    };
    (">>>") => {
        ast::BinaryOp::ZeroFillRShift
    };
    (bin,"+") => {
        ast::BinaryOp::Add
    };
    (bin,"-") => {
        ast::BinaryOp::Sub
    };
    ("*") => {
        ast::BinaryOp::Mul
    };
    ("/") => {
        ast::BinaryOp::Div
    };
    ("%") => {
        ast::BinaryOp::Mod
    };
    ("|") => {
        ast::BinaryOp::BitOr
    };
    ("^") => {
        ast::BinaryOp::BitXor
    };
    ("&") => {
        ast::BinaryOp::BitAnd
    };
    ("||") => {
        ast::BinaryOp::LogicalOr
    };
    ("&&") => {
        ast::BinaryOp::LogicalAnd
    };
    ("in") => {
        ast::BinaryOp::In
    };
    ("instanceof") => {
        ast::BinaryOp::InstanceOf
    };
    ("**") => {
        ast::BinaryOp::Exp
    };
    ("??") => {
        ast::BinaryOp::NullishCoalescing
    };

    ("=") => {
        ast::AssignOp::Assign
    };
    ("+=") => {
        ast::AssignOp::AddAssign
    };
    ("-=") => {
        ast::AssignOp::SubAssign
    };
    ("*=") => {
        ast::AssignOp::MulAssign
    };
    ("/=") => {
        ast::AssignOp::DivAssign
    };
    ("%=") => {
        ast::AssignOp::ModAssign
    };
    ("<<=") => {
        ast::AssignOp::LShiftAssign
    };
    (">>=") => {
        ast::AssignOp::RShiftAssign
    };
    (">>>=") => {
        ast::AssignOp::ZeroFillRShiftAssign
    };
    ("|=") => {
        ast::AssignOp::BitOrAssign
    };
    ("^=") => {
        ast::AssignOp::BitXorAssign
    };
    ("&=") => {
        ast::AssignOp::BitAndAssign
    };
    ("**=") => {
        ast::AssignOp::ExpAssign
    };
}

/// Creates a token. Can be used in both expression and pattern position.
macro_rules! tok {
    ('`') => {
        crate::token::Token::BackQuote
    };
    ('#') => {
        crate::token::Token::Hash
    };
    (';') => {
        crate::token::Token::Semi
    };
    (',') => {
        crate::token::Token::Comma
    };
    ('?') => {
        crate::token::Token::QuestionMark
    };
    (':') => {
        crate::token::Token::Colon
    };
    ('.') => {
        crate::token::Token::Dot
    };
    ("...") => {
        crate::token::Token::DotDotDot
    };
    ("=>") => {
        crate::token::Token::Arrow
    };
    ('(') => {
        crate::token::Token::LParen
    };
    (')') => {
        crate::token::Token::RParen
    };
    ('{') => {
        crate::token::Token::LBrace
    };
    ('}') => {
        crate::token::Token::RBrace
    };
    ('[') => {
        crate::token::Token::LBracket
    };
    (']') => {
        crate::token::Token::RBracket
    };
    ("${") => {
        crate::token::Token::DollarLBrace
    };
    ('!') => {
        crate::token::Token::Bang
    };
    ('~') => {
        crate::token::Token::Tilde
    };

    ("++") => {
        crate::token::Token::PlusPlus
    };
    ("--") => {
        crate::token::Token::MinusMinus
    };

    ('&') => {
        crate::token::Token::BinOp(crate::token::BinOpToken::BitAnd)
    };
    ('|') => {
        crate::token::Token::BinOp(crate::token::BinOpToken::BitOr)
    };
    ('^') => {
        crate::token::Token::BinOp(crate::token::BinOpToken::BitXor)
    };
    ('+') => {
        crate::token::Token::BinOp(crate::token::BinOpToken::Add)
    };
    ('-') => {
        crate::token::Token::BinOp(crate::token::BinOpToken::Sub)
    };
    ('*') => {
        crate::token::Token::BinOp(crate::token::BinOpToken::Mul)
    };
    ('/') => {
        crate::token::Token::BinOp(crate::token::BinOpToken::Div)
    };
    ('%') => {
        crate::token::Token::BinOp(crate::token::BinOpToken::Mod)
    };
    ('<') => {
        crate::token::Token::BinOp(crate::token::BinOpToken::Lt)
    };
    ('>') => {
        crate::token::Token::BinOp(crate::token::BinOpToken::Gt)
    };
    ("<=") => {
        crate::token::Token::BinOp(crate::token::BinOpToken::LtEq)
    };
    (">=") => {
        crate::token::Token::BinOp(crate::token::BinOpToken::GtEq)
    };
    ("<<") => {
        crate::token::Token::BinOp(crate::token::BinOpToken::LShift)
    };
    (">>") => {
        crate::token::Token::BinOp(crate::token::BinOpToken::RShift)
    };
    (">>>") => {
        crate::token::Token::BinOp(crate::token::BinOpToken::ZeroFillRShift)
    };
    ("==") => {
        crate::token::Token::BinOp(crate::token::BinOpToken::EqEq)
    };
    ("!=") => {
        crate::token::Token::BinOp(crate::token::BinOpToken::NotEq)
    };
    ("===") => {
        crate::token::Token::BinOp(crate::token::BinOpToken::EqEqEq)
    };
    ("!==") => {
        crate::token::Token::BinOp(crate::token::BinOpToken::NotEqEq)
    };
    ("**") => {
        crate::token::Token::BinOp(crate::token::BinOpToken::Exp)
    };
    ("&&") => {
        crate::token::Token::BinOp(crate::token::BinOpToken::LogicalAnd)
    };
    ("||") => {
        crate::token::Token::BinOp(crate::token::BinOpToken::LogicalOr)
    };
    ("??") => {
        crate::token::Token::BinOp(crate::token::BinOpToken::NullishCoalescing)
    };

    ('=') => {
        crate::token::Token::AssignOp(ast::AssignOp::Assign)
    };
    ("/=") => {
        crate::token::Token::AssignOp(ast::AssignOp::DivAssign)
    };

    (JSXTagStart) => {
        crate::token::Token::JSXTagStart
    };
    (JSXTagEnd) => {
        crate::token::Token::JSXTagEnd
    };

    ("async") => {
        crate::token::Token::Word(crate::token::Word::Ident(atoms::js_word!("async")))
    };
    ("as") => {
        crate::token::Token::Word(crate::token::Word::Ident(atoms::js_word!("as")))
    };
    ("await") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Await))
    };
    ("break") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Break))
    };
    ("case") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Case))
    };
    ("catch") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Catch))
    };
    ("class") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Class))
    };
    ("const") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Const))
    };
    ("continue") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Continue))
    };
    ("debugger") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Debugger))
    };
    ("default") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Default_))
    };
    ("delete") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Delete))
    };
    ("do") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Do))
    };
    ("else") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Else))
    };
    ("export") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Export))
    };
    ("extends") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Extends))
    };
    ("false") => {
        crate::token::Token::Word(crate::token::Word::False)
    };
    ("finally") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Finally))
    };
    ("for") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::For))
    };
    ("from") => {
        crate::token::Token::Word(crate::token::Word::Ident(atoms::js_word!("from")))
    };
    ("function") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Function))
    };
    ("get") => {
        crate::token::Token::Word(crate::token::Word::Ident(atoms::js_word!("get")))
    };
    ("if") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::If))
    };
    ("import") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Import))
    };
    ("in") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::In))
    };
    ("instanceof") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::InstanceOf))
    };
    ("let") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Let))
    };
    ("meta") => {
        crate::token::Token::Word(crate::token::Word::Ident(atoms::js_word!("meta")))
    };
    ("new") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::New))
    };
    ("null") => {
        crate::token::Token::Word(crate::token::Word::Null)
    };
    ("of") => {
        crate::token::Token::Word(crate::token::Word::Ident(atoms::js_word!("of")))
    };
    ("return") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Return))
    };
    ("set") => {
        crate::token::Token::Word(crate::token::Word::Ident(atoms::js_word!("set")))
    };
    ("static") => {
        crate::token::Token::Word(crate::token::Word::Ident(atoms::js_word!("static")))
    };
    ("super") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Super))
    };
    ("switch") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Switch))
    };
    ("target") => {
        crate::token::Token::Word(crate::token::Word::Ident(atoms::js_word!("target")))
    };
    ("this") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::This))
    };
    ("throw") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Throw))
    };
    ("true") => {
        crate::token::Token::Word(crate::token::Word::True)
    };
    ("try") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Try))
    };
    ("typeof") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::TypeOf))
    };
    ("var") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Var))
    };
    ("void") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Void))
    };
    ("while") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::While))
    };
    ("with") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::With))
    };
    ("yield") => {
        crate::token::Token::Word(crate::token::Word::Keyword(crate::token::Keyword::Yield))
    };
}
