use crate::pos::BytePos;

/// 1-based line and 0-based column, the convention used by the error
/// contract and by `loc` objects in serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    pub line: usize,
    pub col: usize,
}

/// Byte offsets of line starts, computed once per source text.
///
/// LF, CR (not followed by LF), U+2028 and U+2029 all terminate lines,
/// matching the lexer's notion of a line break.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<BytePos>,
}

impl LineIndex {
    pub fn new(src: &str) -> Self {
        let mut line_starts = vec![BytePos(0)];

        let mut iter = src.char_indices().peekable();
        while let Some((i, c)) = iter.next() {
            let next_start = match c {
                '\r' => {
                    if let Some(&(_, '\n')) = iter.peek() {
                        continue;
                    }
                    i + 1
                }
                '\n' => i + 1,
                '\u{2028}' | '\u{2029}' => i + c.len_utf8(),
                _ => continue,
            };
            line_starts.push(BytePos(next_start as u32));
        }

        LineIndex { line_starts }
    }

    /// Line/column of a byte offset. Offsets past the end map to the end of
    /// the last line.
    pub fn lookup(&self, pos: BytePos) -> LineCol {
        let line = match self.line_starts.binary_search(&pos) {
            Ok(i) => i,
            Err(i) => i - 1,
        };

        LineCol {
            line: line + 1,
            col: (pos.0 - self.line_starts[line].0) as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_lines() {
        let idx = LineIndex::new("ab\ncd\r\nef");

        assert_eq!(idx.lookup(BytePos(0)), LineCol { line: 1, col: 0 });
        assert_eq!(idx.lookup(BytePos(2)), LineCol { line: 1, col: 2 });
        assert_eq!(idx.lookup(BytePos(3)), LineCol { line: 2, col: 0 });
        assert_eq!(idx.lookup(BytePos(4)), LineCol { line: 2, col: 1 });
        assert_eq!(idx.lookup(BytePos(7)), LineCol { line: 3, col: 0 });
        assert_eq!(idx.lookup(BytePos(9)), LineCol { line: 3, col: 2 });
    }

    #[test]
    fn lone_carriage_return_ends_a_line() {
        let idx = LineIndex::new("a\rb");

        assert_eq!(idx.lookup(BytePos(2)), LineCol { line: 2, col: 0 });
    }
}
