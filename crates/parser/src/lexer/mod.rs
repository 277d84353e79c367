pub mod identifier;
mod jsx;
mod number;
mod state;
mod util;

use crate::{
    context::Context,
    error::{Error, SyntaxError},
    token::*,
    ParserConfig,
};
use atoms::JsWord;
use global_common::{chars::char_literals, comments::Comment, BytePos, Pos, Span, StringInput};
use identifier::{is_ident_part, is_ident_start};
use state::State;
pub use state::{TokenContext, TokenContexts};
use std::{cell::RefCell, iter::FusedIterator, rc::Rc};
use util::{char_bytes, is_line_break, is_valid_regex_flag};

pub type LexResult<T> = Result<T, Error>;

pub(super) fn pos_span(p: BytePos) -> Span {
    Span::new(p, p)
}

/// Classification of the first byte of a token, used to dispatch both
/// `read_token` and `skip_space` without decoding a full char first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub(crate) enum Dispatch {
    /// Byte that cannot start a token.
    ERR,
    /// Whitespace.
    WHS,
    /// `!`
    EXL,
    /// `"` or `'`
    QOT,
    /// Identifier start.
    IDT,
    /// `#`
    HAS,
    /// `%`
    PRC,
    /// `&`
    AMP,
    /// `(`
    PNO,
    /// `)`
    PNC,
    /// `*`
    MUL,
    /// `+`
    PLS,
    /// `,`
    COM,
    /// `-`
    MIN,
    /// `.`
    PRD,
    /// `/`
    SLH,
    /// `0`
    ZER,
    /// `1`..`9`
    DIG,
    /// `:`
    COL,
    /// `;`
    SEM,
    /// `<`
    LSS,
    /// `=`
    EQL,
    /// `>`
    MOR,
    /// `?`
    QST,
    /// `[`
    BTO,
    /// `\`
    BSL,
    /// `]`
    BTC,
    /// `^`
    CRT,
    /// `` ` ``
    TPL,
    /// `{`
    BEO,
    /// `|`
    PIP,
    /// `}`
    BEC,
    /// `~`
    TLD,
    /// First byte of a multi byte char.
    UNI,
}

use Dispatch::*;

/// Lookup table mapping any incoming byte to a handler function.
pub(crate) static DISPATCHER: [Dispatch; 256] = [
    //0    1    2    3    4    5    6    7    8    9    A    B    C    D    E    F   //
    ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, WHS, WHS, WHS, WHS, WHS, ERR, ERR, // 0
    ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, // 1
    WHS, EXL, QOT, HAS, IDT, PRC, AMP, QOT, PNO, PNC, MUL, PLS, COM, MIN, PRD, SLH, // 2
    ZER, DIG, DIG, DIG, DIG, DIG, DIG, DIG, DIG, DIG, COL, SEM, LSS, EQL, MOR, QST, // 3
    ERR, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, // 4
    IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, BTO, BSL, BTC, CRT, IDT, // 5
    TPL, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, // 6
    IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, BEO, PIP, BEC, TLD, ERR, // 7
    UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, // 8
    UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, // 9
    UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, // A
    UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, // B
    UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, // C
    UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, // D
    UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, // E
    UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, UNI, // F
];

#[derive(Clone)]
pub struct Lexer<'a> {
    pub(crate) ctx: Context,
    pub(crate) config: ParserConfig,
    state: State,
    bytes: &'a [u8],
    /// Byte index of the cursor within `bytes`.
    cur: usize,
    /// Position of the first byte of the input.
    start_pos: BytePos,
    errors: Rc<RefCell<Vec<Error>>>,
    module_errors: Rc<RefCell<Vec<Error>>>,
    strict_errors: Rc<RefCell<Vec<Error>>>,
    /// Comments seen so far, in source order. Not shared between clones so a
    /// backtracked parse does not collect a comment twice.
    comments: Vec<Comment>,
}

impl<'a> Lexer<'a> {
    pub fn new(config: ParserConfig, input: StringInput<'a>) -> Self {
        Lexer {
            ctx: Default::default(),
            config,
            state: State::new(),
            bytes: input.src().as_bytes(),
            cur: 0,
            start_pos: input.start_pos(),
            errors: Default::default(),
            module_errors: Default::default(),
            strict_errors: Default::default(),
            comments: Vec::new(),
        }
    }

    pub(crate) fn end_pos(&self) -> BytePos {
        self.start_pos + BytePos::from_usize(self.bytes.len())
    }
}

impl FusedIterator for Lexer<'_> {}

impl Iterator for Lexer<'_> {
    type Item = TokenAndSpan;
    fn next(&mut self) -> Option<Self::Item> {
        self.state.had_line_break = false;
        self.state.start = self.cur_pos();

        let res = (|| -> LexResult<Option<Token>> {
            // Skip the space after the previous token, so that the next one's
            // `start` will point to the right position.
            if self.state.can_skip_space() {
                self.skip_space()?;
            }

            let start = self.cur_pos();
            self.state.start = start;

            if self.config.jsx && !self.ctx.in_property_name {
                match self.state.context.current() {
                    Some(TokenContext::JSXExpr) => return self.read_jsx_token(),
                    Some(TokenContext::JSXOpeningTag) | Some(TokenContext::JSXClosingTag) => {
                        if let Some(ch) = self.cur() {
                            if is_ident_start(ch) {
                                return self.read_jsx_word().map(Some);
                            }

                            if ch == '>' {
                                self.advance(1);
                                return Ok(Some(JSXTagEnd));
                            }

                            if (ch == '\'' || ch == '"')
                                && self.state.context.current()
                                    == Some(TokenContext::JSXOpeningTag)
                            {
                                return self.read_jsx_str(ch).map(Some);
                            }
                        }
                    }
                    _ => {}
                }

                if (self.state.is_expr_allowed || self.ctx.in_forced_jsx_context)
                    && self.is(b'<')
                    && self.peek_nth(1) != Some(b'!')
                {
                    self.advance(1);
                    return Ok(Some(JSXTagStart));
                }
            }

            if let Some(TokenContext::Tpl { start }) = self.state.context.current() {
                return self.read_tmpl_token(start).map(Some);
            }

            self.read_token()
        })();

        // A lexer error is passed to the parser as a token so that it
        // surfaces where the parser actually looks at the stream.
        let token = match res {
            Ok(token) => token,
            Err(error) => Some(Token::Error(error)),
        };

        let start = self.state.start;

        if let Some(ref token) = token {
            self.state.update(start, token);
            self.state.last_tok_end = self.cur_pos();
        }

        let span = self.span(start);

        token.map(|token| {
            // Attach span to token.
            TokenAndSpan {
                token,
                had_line_break: self.state.had_line_break,
                span,
            }
        })
    }
}

impl Lexer<'_> {
    fn read_token(&mut self) -> LexResult<Option<Token>> {
        let byte = match self.cur_byte() {
            Some(b) => b,
            None => return Ok(None),
        };

        match DISPATCHER[byte as usize] {
            WHS => unreachable!("whitespace is always skipped before read_token"),
            PRD => self.read_token_dot().map(Some),
            PNO => {
                self.advance(1);
                Ok(Some(LParen))
            }
            PNC => {
                self.advance(1);
                Ok(Some(RParen))
            }
            SEM => {
                self.advance(1);
                Ok(Some(Semi))
            }
            COM => {
                self.advance(1);
                Ok(Some(Comma))
            }
            BTO => {
                self.advance(1);
                Ok(Some(LBracket))
            }
            BTC => {
                self.advance(1);
                Ok(Some(RBracket))
            }
            BEO => {
                self.advance(1);
                Ok(Some(LBrace))
            }
            BEC => {
                self.advance(1);
                Ok(Some(RBrace))
            }
            COL => {
                self.advance(1);
                Ok(Some(Colon))
            }
            QST => Ok(Some(self.read_token_question())),
            TPL => {
                self.advance(1);
                Ok(Some(BackQuote))
            }
            ZER => {
                let token = match self.peek_nth(1) {
                    // '0x', '0X' - hex number
                    Some(b'x') | Some(b'X') => self.read_radix_number(16)?,
                    // '0o', '0O' - octal number
                    Some(b'o') | Some(b'O') => self.read_radix_number(8)?,
                    // '0b', '0B' - binary number
                    Some(b'b') | Some(b'B') => self.read_radix_number(2)?,

                    _ => self.read_number(false)?,
                };
                Ok(Some(token))
            }
            // Anything else beginning with a digit is an integer, octal
            // number, or float.
            DIG => self.read_number(false).map(Some),

            // Quotes produce strings.
            QOT => self.read_string(byte as char).map(Some),

            SLH => self.read_token_slash().map(Some),
            PRC | MUL => Ok(Some(self.read_token_mult_modulo(byte))),
            PIP | AMP => Ok(Some(self.read_token_pipe_amp(byte))),
            CRT => Ok(Some(self.read_token_caret())),
            PLS | MIN => self.read_token_plus_min(byte),
            LSS | MOR => self.read_token_lt_gt(byte),
            EQL | EXL => Ok(Some(self.read_token_eq_excl(byte))),
            TLD => {
                self.advance(1);
                Ok(Some(tok!('~')))
            }
            HAS => self.read_token_number_sign().map(Some),
            // Identifier or keyword. '\uXXXX' sequences are allowed in
            // identifiers, so '\' also dispatches to that.
            BSL | IDT => self.read_ident_or_keyword().map(Some),
            UNI => {
                let ch = self.cur_unchecked();
                if is_ident_start(ch) {
                    return self.read_ident_or_keyword().map(Some);
                }

                let start = self.cur_pos();
                self.bump();
                self.error(start, SyntaxError::UnexpectedChar { c: ch })
            }
            ERR => {
                let ch = self.cur_unchecked();
                let start = self.cur_pos();
                self.bump();
                self.error(start, SyntaxError::UnexpectedChar { c: ch })
            }
        }
    }

    fn read_token_number_sign(&mut self) -> LexResult<Token> {
        debug_assert!(self.cur() == Some('#'));

        if self.is_at_start() && self.peek_nth(1) == Some(b'!') {
            return self.read_shebang();
        }

        let start = self.cur_pos();
        self.advance(1); // '#'

        if let Some(next) = self.cur() {
            if next.is_ascii_digit() {
                return self.error(start, SyntaxError::UnexpectedDigitAfterHash);
            }
        }

        Ok(tok!('#'))
    }

    /// Expects the cursor to be at `#!` at the very start of the input.
    fn read_shebang(&mut self) -> LexResult<Token> {
        debug_assert!(self.is(b'#') && self.peek_nth(1) == Some(b'!'));

        self.advance(2); // "#!"

        let content = self.uncons_while_chars(|c| !is_line_break(c));

        Ok(Shebang(content.into()))
    }

    fn read_token_dot(&mut self) -> LexResult<Token> {
        debug_assert!(self.cur() == Some('.'));

        let next = match self.peek_nth(1) {
            Some(next) => next,
            None => {
                self.advance(1); // '.'
                return Ok(tok!('.'));
            }
        };

        if next.is_ascii_digit() {
            return self.read_number(true);
        }

        self.advance(1); // 1st '.'

        if next == b'.' && self.peek_nth(1) == Some(b'.') {
            self.advance(2); // 2nd and 3rd '.'
            Ok(tok!("..."))
        } else {
            Ok(tok!('.'))
        }
    }

    fn read_token_slash(&mut self) -> LexResult<Token> {
        debug_assert_eq!(self.cur(), Some('/'));

        // Regex
        if self.state.is_expr_allowed {
            return self.read_regexp();
        }

        // Divide operator
        self.advance(1);

        if self.eat(b'=') {
            Ok(tok!("/="))
        } else {
            Ok(tok!('/'))
        }
    }

    fn read_token_mult_modulo(&mut self, ch: u8) -> Token {
        debug_assert!(ch == b'*' || ch == b'%');
        debug_assert!(self.is(ch));

        let is_mul = ch == b'*';
        self.advance(1);
        let mut token = if is_mul { BinOp(Mul) } else { BinOp(Mod) };

        // check for **
        if is_mul && self.is(b'*') {
            self.advance(1);
            token = BinOp(Exp)
        }

        if self.is(b'=') {
            self.advance(1);
            token = match token {
                BinOp(Mul) => AssignOp(MulAssign),
                BinOp(Mod) => AssignOp(ModAssign),
                BinOp(Exp) => AssignOp(ExpAssign),
                _ => unreachable!(),
            }
        }

        token
    }

    fn read_token_pipe_amp(&mut self, ch: u8) -> Token {
        debug_assert!(ch == b'|' || ch == b'&');
        debug_assert!(self.is(ch));

        self.advance(1);
        let token = if ch == b'&' { BitAnd } else { BitOr };

        // '|=', '&='
        if self.is(b'=') {
            self.advance(1);

            return AssignOp(match token {
                BitAnd => BitAndAssign,
                BitOr => BitOrAssign,
                _ => unreachable!(),
            });
        }

        // '||', '&&'
        if self.is(ch) {
            self.advance(1);

            return BinOp(match token {
                BitAnd => LogicalAnd,
                BitOr => LogicalOr,
                _ => unreachable!(),
            });
        }

        BinOp(token)
    }

    fn read_token_caret(&mut self) -> Token {
        debug_assert!(self.cur() == Some('^'));
        // Bitwise xor
        self.advance(1); // '^'
        if self.is(b'=') {
            self.advance(1); // '='
            AssignOp(BitXorAssign)
        } else {
            BinOp(BitXor)
        }
    }

    fn read_token_plus_min(&mut self, ch: u8) -> LexResult<Option<Token>> {
        debug_assert!(ch == b'+' || ch == b'-');
        debug_assert!(self.is(ch));

        // Handle '-->' line comment. It is only recognized in script code, at
        // the start of a line (or of the file).
        if ch == b'-'
            && self.peek_nth(1) == Some(b'-')
            && self.peek_nth(2) == Some(b'>')
            && !self.ctx.is_module()
            && !self.config.disable_web_compat
            && (self.state.had_line_break || self.state.last_tok_end == BytePos(0))
        {
            self.skip_line_comment(3);
            self.skip_space()?;
            self.state.start = self.cur_pos();
            return self.read_token();
        }

        self.advance(1); // '+' or '-'

        if self.is(ch) {
            // '++', '--'
            self.advance(1);

            if ch == b'+' {
                Ok(Some(PlusPlus))
            } else {
                Ok(Some(MinusMinus))
            }
        } else if self.is(b'=') {
            // '+=', '-='
            self.advance(1);
            Ok(Some(AssignOp(if ch == b'+' { AddAssign } else { SubAssign })))
        } else {
            // '+', '-'
            Ok(Some(BinOp(if ch == b'+' { Add } else { Sub })))
        }
    }

    fn read_token_lt_gt(&mut self, ch: u8) -> LexResult<Option<Token>> {
        debug_assert!(ch == b'<' || ch == b'>');
        debug_assert!(self.is(ch));

        // `<!--`, an XML-style comment that should be interpreted as a line
        // comment. Only recognized in script code.
        if ch == b'<'
            && self.peek_nth(1) == Some(b'!')
            && self.peek_nth(2) == Some(b'-')
            && self.peek_nth(3) == Some(b'-')
            && !self.ctx.is_module()
            && !self.config.disable_web_compat
        {
            self.skip_line_comment(4);
            self.skip_space()?;
            self.state.start = self.cur_pos();
            return self.read_token();
        }

        self.advance(1); // '<' or '>'

        let mut op = if ch == b'<' { Lt } else { Gt };

        // '<<', '>>'
        if self.is(ch) {
            self.advance(1);
            op = if ch == b'<' { LShift } else { RShift };

            //'>>>'
            if ch == b'>' && self.is(ch) {
                self.advance(1);
                op = ZeroFillRShift;
            }
        }

        let token = if self.eat(b'=') {
            match op {
                Lt => BinOp(LtEq),
                Gt => BinOp(GtEq),
                LShift => AssignOp(LShiftAssign),
                RShift => AssignOp(RShiftAssign),
                ZeroFillRShift => AssignOp(ZeroFillRShiftAssign),
                _ => unreachable!(),
            }
        } else {
            BinOp(op)
        };

        Ok(Some(token))
    }

    fn read_token_eq_excl(&mut self, ch: u8) -> Token {
        debug_assert!(ch == b'=' || ch == b'!');
        debug_assert!(self.is(ch));

        self.advance(1); // '=' or '!'

        if self.is(b'=') {
            // "=="
            self.advance(1);

            if self.is(b'=') {
                self.advance(1);
                if ch == b'!' {
                    // '!=='
                    BinOp(NotEqEq)
                } else {
                    // '==='
                    BinOp(EqEqEq)
                }
            } else if ch == b'!' {
                // '!='
                BinOp(NotEq)
            } else {
                // '=='
                BinOp(EqEq)
            }
        } else if ch == b'=' && self.is(b'>') {
            // "=>"
            self.advance(1);

            Arrow
        } else if ch == b'!' {
            // '!'
            Bang
        } else {
            // '='
            AssignOp(Assign)
        }
    }

    fn read_token_question(&mut self) -> Token {
        debug_assert!(self.cur() == Some('?'));

        self.advance(1); // '?'

        if self.is(b'?') {
            self.advance(1); // 2nd '?'
            tok!("??")
        } else {
            tok!('?')
        }
    }

    fn read_regexp(&mut self) -> LexResult<Token> {
        debug_assert!(self.cur() == Some('/'));

        let start = self.cur_pos();

        self.bump();

        let mut escaped = false;
        let mut in_class = false;

        while let Some(ch) = self.cur() {
            if is_line_break(ch) {
                // Regex literal cannot span multiple lines
                return self.error(start, SyntaxError::UnterminatedRegExp);
            }

            if escaped {
                escaped = false;
            } else {
                if ch == '[' {
                    in_class = true;
                } else if ch == ']' && in_class {
                    in_class = false;
                } else if ch == '/' && !in_class {
                    break;
                }
                escaped = ch == '\\';
            }
            self.bump();
        }

        if !self.is(b'/') {
            // Reached end of input without seeing closing '/'
            return self.error(start, SyntaxError::UnterminatedRegExp);
        }

        let content = JsWord::from(self.slice_to_cur(start + BytePos(1)));

        self.bump(); // '/'

        // 6 is the number of valid flags.
        let mut mods = String::with_capacity(6);

        while let Some(ch) = self.cur() {
            if is_valid_regex_flag(ch) {
                if mods.find(ch).is_some() {
                    let span = pos_span(self.cur_pos() + BytePos(1));
                    return self.error_span(span, SyntaxError::DuplicateRegExpFlags);
                }
            } else if is_ident_part(ch) || ch == '\\' {
                let span = pos_span(self.cur_pos() + BytePos(1));
                return self.error_span(span, SyntaxError::MalformedRegExpFlags);
            } else {
                break;
            }

            self.bump();
            mods.push(ch);
        }

        Ok(Regex(content, mods.into()))
    }

    fn read_code_point(&mut self) -> LexResult<char> {
        let start = self.cur_pos();
        let val = self.read_int_u32(16, 0, false);

        if let Some(val) = val {
            if 0x0010_FFFF >= val {
                if let Some(ch) = std::char::from_u32(val) {
                    return Ok(ch);
                }
            }
        }

        self.error(start, SyntaxError::InvalidCodePoint)
    }

    fn read_unicode_escape(&mut self) -> LexResult<char> {
        if self.eat(b'{') {
            let code_pos = self.cur_pos();

            let ch = self.read_code_point()?;

            if !self.eat(b'}') {
                self.error(code_pos, SyntaxError::InvalidCodePoint)?
            }

            Ok(ch)
        } else {
            let start = self.cur_pos();
            self.read_hex_char(start, 4)
        }
    }

    /// See https://tc39.github.io/ecma262/#sec-literals-string-literals
    fn read_string(&mut self, quote: char) -> LexResult<Token> {
        debug_assert!(quote == '\'' || quote == '"');
        debug_assert!(self.cur() == Some(quote));

        let start = self.cur_pos();
        self.advance(1); // ' or "

        let mut out = String::new();
        let mut chunk_start = self.cur_pos();

        let mut has_escape = false;
        while let Some(ch) = self.cur() {
            if ch == quote {
                break;
            } else if ch == '\\' {
                out.push_str(self.slice_to_cur(chunk_start));

                if let Some(c) = self.read_escaped_char(false)? {
                    out.push(c);
                }

                has_escape = true;

                chunk_start = self.cur_pos();
            } else if ch == char_literals::LINE_SEPARATOR
                || ch == char_literals::PARAGRAPH_SEPARATOR
            {
                self.bump();
            } else if is_line_break(ch) {
                return self.error(start, SyntaxError::UnterminatedString);
            } else {
                self.bump();
            }
        }

        if !self.is(quote as u8) {
            // Reached end of input without seeing closing quote (' or ")
            return self.error(start, SyntaxError::UnterminatedString);
        }

        out.push_str(self.slice_to_cur(chunk_start));
        self.advance(1); // ' or "

        let raw = JsWord::from(self.slice_to_cur(start));

        Ok(Token::Str {
            value: out.into(),
            raw,
            has_escape,
        })
    }

    /// Reads the chunk of a template literal between `` ` ``, `${`, `}` and
    /// the closing `` ` ``. `cooked` becomes `None` when the chunk contains an
    /// escape sequence that is only valid in a tagged template.
    fn read_tmpl_token(&mut self, start_of_tpl: BytePos) -> LexResult<Token> {
        let start = self.cur_pos();

        let mut cooked = Some(String::new());
        let mut chunk_start = self.cur_pos();

        while let Some(c) = self.cur() {
            if c == '`' || (c == '$' && self.peek_nth(1) == Some(b'{')) {
                if start == self.cur_pos() && self.state.last_was_tpl_element() {
                    if c == '$' {
                        self.advance(2); // "${"
                        return Ok(tok!("${"));
                    } else {
                        self.advance(1); // '`'
                        return Ok(tok!('`'));
                    }
                }

                let raw = JsWord::from(self.slice_to_cur(start));
                let cooked = match cooked {
                    Some(mut cooked) => {
                        cooked.push_str(self.slice_to_cur(chunk_start));
                        Some(JsWord::from(cooked))
                    }
                    None => None,
                };

                return Ok(Template { raw, cooked });
            }

            if c == '\\' {
                if let Some(ref mut cooked) = cooked {
                    cooked.push_str(self.slice_to_cur(chunk_start));
                }

                match self.read_escaped_char(true) {
                    Ok(Some(ch)) => {
                        if let Some(ref mut cooked) = cooked {
                            cooked.push(ch);
                        }
                    }
                    Ok(None) => {}
                    Err(_) => {
                        // Invalid in an untagged template; the parser decides
                        // whether that is an error.
                        cooked = None;
                    }
                }

                chunk_start = self.cur_pos();
            } else if is_line_break(c) {
                if let Some(ref mut cooked) = cooked {
                    cooked.push_str(self.slice_to_cur(chunk_start));
                }

                self.bump();
                if c == char_literals::CARRIAGE_RETURN && self.is(char_bytes::LINE_FEED) {
                    self.bump();
                }

                // <CR> and <CR><LF> are normalized to <LF> in the cooked
                // value.
                if let Some(ref mut cooked) = cooked {
                    match c {
                        char_literals::CARRIAGE_RETURN | char_literals::LINE_FEED => {
                            cooked.push('\n')
                        }
                        _ => cooked.push(c),
                    }
                }

                chunk_start = self.cur_pos();
            } else {
                self.bump();
            }
        }

        self.error(start_of_tpl, SyntaxError::UnterminatedTpl)
    }

    // Used to read escaped characters
    fn read_escaped_char(&mut self, in_template: bool) -> LexResult<Option<char>> {
        debug_assert!(self.cur() == Some('\\'));

        let start = self.cur_pos();

        self.bump(); // '\'

        let ch = match self.cur() {
            Some(c) => c,
            None => return Ok(None),
        };
        self.bump();

        match ch {
            // Line feed
            'n' => Ok(Some('\n')),
            // Carriage return
            'r' => Ok(Some('\r')),
            'x' => self.read_hex_char(start, 2).map(Some),
            'u' => self.read_unicode_escape().map(Some),
            // Tab
            't' => Ok(Some('\t')),
            // Backspace
            'b' => Ok(Some(char_literals::BACKSPACE)),
            // Vertical tab
            'v' => Ok(Some(char_literals::LINE_TABULATION)),
            'f' => Ok(Some(char_literals::FORM_FEED)),
            char_literals::CARRIAGE_RETURN | char_literals::LINE_FEED => {
                // Line continuation contributes nothing to the value.
                if ch == char_literals::CARRIAGE_RETURN && self.is(char_bytes::LINE_FEED) {
                    self.bump();
                }

                Ok(None)
            }
            char_literals::LINE_SEPARATOR | char_literals::PARAGRAPH_SEPARATOR => Ok(None),
            '8' | '9' => {
                if in_template {
                    self.error(start, SyntaxError::InvalidTplEscape)
                } else {
                    self.emit_strict_mode_error(start, SyntaxError::StrictOctalEscape);
                    Ok(Some(ch))
                }
            }
            '0'..='7' => {
                let first_digit = match ch.to_digit(8) {
                    Some(v) => v,
                    None => return Ok(Some(ch)),
                };

                let mut value = first_digit;
                let mut is_zero = ch == '0';

                // An octal escape takes at most three digits, and at most two
                // when the first digit is 4 or above.
                if let Some(v) = self.cur().and_then(|c| c.to_digit(8)) {
                    value = value * 8 + v;
                    is_zero = false;
                    self.bump();

                    if first_digit <= 3 {
                        if let Some(v) = self.cur().and_then(|c| c.to_digit(8)) {
                            value = value * 8 + v;
                            self.bump();
                        }
                    }
                }

                // `\0` not followed by another digit is just NUL.
                if !is_zero || matches!(self.cur(), Some('8'..='9')) {
                    if in_template {
                        return self.error(start, SyntaxError::InvalidTplEscape);
                    }

                    self.emit_strict_mode_error(start, SyntaxError::StrictOctalEscape);
                }

                // Safety: value cannot exceed 0o377.
                Ok(Some(unsafe { std::char::from_u32_unchecked(value) }))
            }
            _ => Ok(Some(ch)),
        }
    }

    // Used to read character escape sequences ('\x', '\u').
    fn read_hex_char(&mut self, start: BytePos, len: u8) -> LexResult<char> {
        debug_assert!(len == 2 || len == 4);

        let val = self.read_int_u32(16, len, false);

        if let Some(val) = val {
            if let Some(ch) = std::char::from_u32(val) {
                return Ok(ch);
            }
        }

        self.error(start, SyntaxError::InvalidHexEscape)
    }

    // Read an identifier, and return it as a string.
    fn read_word(&mut self) -> LexResult<(JsWord, bool)> {
        debug_assert!(
            self.cur() == Some('\\')
                || (self.cur().is_some() && is_ident_start(self.cur_unchecked()))
        );

        let start = self.cur_pos();
        let mut chunk_start = start;
        let mut word = String::new();
        let mut contains_esc = false;

        while let Some(ch) = self.cur() {
            if is_ident_part(ch) {
                self.bump();
            } else if ch == '\\' {
                contains_esc = true;

                word.push_str(self.slice_to_cur(chunk_start));

                let esc_start = self.cur_pos();

                self.bump(); // '\'
                if !self.is(b'u') {
                    let pos = self.cur_pos();
                    self.error(pos, SyntaxError::MissingUnicodeEscape)?
                }

                self.bump(); // 'u'

                let ch = self.read_unicode_escape()?;

                let valid = if esc_start == start {
                    is_ident_start(ch)
                } else {
                    is_ident_part(ch)
                };

                if !valid {
                    self.error(esc_start, SyntaxError::EscapedCharNotAnIdentifier)?
                }

                word.push(ch);
                chunk_start = self.cur_pos();
            } else {
                break;
            }
        }

        if word.is_empty() {
            Ok((JsWord::from(self.slice_to_cur(start)), contains_esc))
        } else {
            word.push_str(self.slice_to_cur(chunk_start));
            Ok((JsWord::from(&*word), contains_esc))
        }
    }

    // Read an identifier or keyword token. Will check for reserved
    // words when necessary.
    // See https://tc39.github.io/ecma262/#sec-names-and-keywords
    fn read_ident_or_keyword(&mut self) -> LexResult<Token> {
        let start = self.cur_pos();

        let (text, contains_esc) = self.read_word()?;

        let word = Word::from(text);

        // Note: ctx is stored in the lexer because of this error.
        // 'await' and 'yield' may have semantic of reserved word, which means lexer
        // should know context or parser should handle this error. Our approach to this
        // problem is former one.
        if contains_esc && self.ctx.is_reserved(&word) {
            self.error(
                start,
                SyntaxError::EscapeInReservedWord { word: word.into() },
            )
        } else {
            Ok(Word(word))
        }
    }

    pub fn set_expr_allowed(&mut self, allow: bool) {
        self.state.is_expr_allowed = allow;
    }
}
