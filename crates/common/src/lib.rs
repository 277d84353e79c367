#![deny(unused)]

pub use self::{
    comments::{Comment, CommentKind},
    input::{Input, StringInput},
    loc::{LineCol, LineIndex},
    pos::{BytePos, Pos, Span, Spanned, DUMMY_SP},
};

pub mod chars;
pub mod comments;
pub mod input;
mod loc;
mod pos;
