//! Interned strings.
//!
//! `JsWord` is an interned string tuned for the words that show up in
//! ECMAScript source. Words from `words.txt` are baked into the binary and
//! available via the `js_word!` macro without allocation.

include!(concat!(env!("OUT_DIR"), "/js_word.rs"));
