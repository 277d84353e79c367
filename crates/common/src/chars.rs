/// Named characters referenced by the lexer.
pub mod char_literals {
    pub const BACKSPACE: char = '\u{0008}';
    pub const CHARACTER_TABULATION: char = '\u{0009}';
    pub const LINE_FEED: char = '\u{000A}';
    pub const LINE_TABULATION: char = '\u{000B}';
    pub const FORM_FEED: char = '\u{000C}';
    pub const CARRIAGE_RETURN: char = '\u{000D}';
    pub const SPACE: char = '\u{0020}';
    pub const NON_BREAKING_SPACE: char = '\u{00A0}';
    pub const OGHAM_SPACE_MARK: char = '\u{1680}';
    pub const EN_QUAD: char = '\u{2000}';
    pub const EM_QUAD: char = '\u{2001}';
    pub const EN_SPACE: char = '\u{2002}';
    pub const EM_SPACE: char = '\u{2003}';
    pub const THREE_PER_EM_SPACE: char = '\u{2004}';
    pub const FOUR_PER_EM_SPACE: char = '\u{2005}';
    pub const SIX_PER_EM_SPACE: char = '\u{2006}';
    pub const FIGURE_SPACE: char = '\u{2007}';
    pub const PUNCTUATION_SPACE: char = '\u{2008}';
    pub const THIN_SPACE: char = '\u{2009}';
    pub const HAIR_SPACE: char = '\u{200A}';
    pub const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
    pub const ZERO_WIDTH_JOINER: char = '\u{200D}';
    pub const LINE_SEPARATOR: char = '\u{2028}';
    pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';
    pub const NARROW_NO_BREAK_SPACE: char = '\u{202F}';
    pub const MEDIUM_MATHEMATICAL_SPACE: char = '\u{205F}';
    pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';
    pub const ZERO_WIDTH_NO_BREAK_SPACE: char = '\u{FEFF}';
}
