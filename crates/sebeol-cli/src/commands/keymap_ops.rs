use std::process;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use sebeol_engine::encoder::{compose_syllable, encode};
use sebeol_engine::hanja::HanjaTable;
use sebeol_engine::keymap::{Entry, KeyTable, Symbol};
use sebeol_engine::{JamoIndex, SlotClass};

#[derive(Serialize)]
struct KeyRow {
    key: char,
    kind: &'static str,
    /// One symbol for fixed keys; [vowel, consonant, b-combination] for galma keys.
    symbols: Vec<String>,
}

fn rows(table: &KeyTable) -> Vec<KeyRow> {
    table
        .iter()
        // Self-inserting keys are noise in the listing.
        .filter(|(code, entry)| **entry != Entry::Fixed(Symbol::Literal(char::from(*code))))
        .map(|(code, entry)| match entry {
            Entry::Fixed(symbol) => KeyRow {
                key: char::from(code),
                kind: "fixed",
                symbols: vec![symbol.to_string()],
            },
            Entry::Galma(candidates) => KeyRow {
                key: char::from(code),
                kind: "galma",
                symbols: candidates.iter().map(Symbol::to_string).collect(),
            },
        })
        .collect()
}

/// Pad to a display width; compatibility jamo are double-width.
fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn keymap(json: bool) {
    let rows = rows(KeyTable::global());
    if json {
        match serde_json::to_string_pretty(&rows) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        return;
    }

    println!("{} {} {} b-comb", pad("key", 4), pad("vowel", 8), pad("consonant", 10));
    for row in &rows {
        match row.symbols.as_slice() {
            [v, c, b] => println!(
                "{} {} {} {}",
                pad(&row.key.to_string(), 4),
                pad(v, 8),
                pad(c, 10),
                b
            ),
            [s] => println!("{} {}", pad(&row.key.to_string(), 4), s),
            _ => {}
        }
    }
}

pub fn encode_cmd(initial: JamoIndex, vowel: JamoIndex, final_: JamoIndex) {
    for (index, class) in [
        (initial, SlotClass::Initial),
        (vowel, SlotClass::Vowel),
        (final_, SlotClass::Final),
    ] {
        if index != 0 && !class.contains(index) {
            eprintln!("Error: {index} is not a {class:?} index");
            process::exit(1);
        }
    }

    let text = encode(initial, vowel, final_);
    if text.is_empty() {
        println!("(empty)");
        return;
    }
    let codepoints: Vec<String> = text
        .chars()
        .map(|c| format!("U+{:04X}", u32::from(c)))
        .collect();
    let kind = if compose_syllable(initial, vowel, final_).is_some() {
        "syllable"
    } else {
        "compatibility jamo"
    };
    println!("{text}\t{}\t{kind}", codepoints.join(" "));
}

pub fn hanja(syllable: &str) {
    let mut chars = syllable.chars();
    let ch = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            eprintln!("Error: expected one syllable, got {syllable:?}");
            process::exit(1);
        }
    };
    let candidates = HanjaTable::global().lookup(ch);
    if candidates.is_empty() {
        println!("(no candidates)");
        return;
    }
    for (i, c) in candidates.iter().enumerate() {
        println!("{:>2}: {}", i + 1, c);
    }
}
