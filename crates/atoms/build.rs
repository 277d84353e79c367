use std::{env, path::Path};

fn main() {
    println!("cargo:rerun-if-changed=words.txt");

    let mut generator = string_cache_codegen::AtomType::new("JsWord", "js_word!");

    for line in include_str!("words.txt").lines() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        generator.atom(word);
    }

    // The empty string shows up as a cooked template value and as the
    // default identifier.
    generator.atom("");
    generator.atom("use strict");

    generator
        .write_to_file(&Path::new(&env::var("OUT_DIR").unwrap()).join("js_word.rs"))
        .unwrap();
}
