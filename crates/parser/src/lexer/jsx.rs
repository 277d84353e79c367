use super::{is_ident_part, is_ident_start, LexResult, Lexer};
use crate::{error::SyntaxError, token::Token};
use atoms::JsWord;

impl Lexer<'_> {
    /// Reads a run of JSX text, stopping before the next `{` or `<`. The raw
    /// source bytes are preserved; entities are not decoded.
    pub(super) fn read_jsx_token(&mut self) -> LexResult<Option<Token>> {
        debug_assert!(self.config.jsx);

        let start = self.cur_pos();

        loop {
            let ch = match self.cur() {
                Some(c) => c,
                None => {
                    let start = self.state.start;
                    return self.error(start, SyntaxError::UnterminatedJSXContents);
                }
            };

            match ch {
                '<' | '{' => {
                    if self.cur_pos() == self.state.start {
                        // We are lexing children, so `<` always begins a tag;
                        // the parser decides between opening and closing.
                        if ch == '<' {
                            self.advance(1);
                            return Ok(Some(Token::JSXTagStart));
                        }

                        return self.read_token();
                    }

                    let raw = JsWord::from(self.slice_to_cur(start));
                    return Ok(Some(Token::JSXText { raw }));
                }
                _ => self.bump(),
            }
        }
    }

    /// Reads a JSX tag or attribute name. JSX identifiers cannot contain
    /// escapes, so the whole word can be taken as one slice. They do allow
    /// `-`, which normal identifiers do not.
    pub(super) fn read_jsx_word(&mut self) -> LexResult<Token> {
        debug_assert!(self.config.jsx);
        debug_assert!(self.cur().is_some());
        debug_assert!(is_ident_start(self.cur_unchecked()));

        let start = self.cur_pos();
        self.bump();

        while let Some(ch) = self.cur() {
            if is_ident_part(ch) || ch == '-' {
                self.bump();
            } else {
                break;
            }
        }

        let name = JsWord::from(self.slice_to_cur(start));

        Ok(Token::JSXName { name })
    }

    /// Reads a JSX attribute string. Escape sequences are not processed; the
    /// value is the exact source text between the quotes.
    pub(super) fn read_jsx_str(&mut self, quote: char) -> LexResult<Token> {
        debug_assert!(self.config.jsx);
        debug_assert!(quote == '\'' || quote == '"');
        debug_assert!(self.cur() == Some(quote));

        let start = self.cur_pos();
        self.advance(1); // ' or "

        let value_start = self.cur_pos();

        loop {
            match self.cur() {
                Some(ch) if ch == quote => break,
                Some(_) => self.bump(),
                None => return self.error(start, SyntaxError::UnterminatedString),
            }
        }

        let value = JsWord::from(self.slice_to_cur(value_start));

        self.advance(1); // ' or "

        let raw = JsWord::from(self.slice_to_cur(start));

        Ok(Token::Str {
            value,
            raw,
            has_escape: false,
        })
    }
}
