use std::fs;
use std::process;

use sebeol_engine::hanja::HanjaTable;
use sebeol_engine::keymap::{self, Entry};
use sebeol_engine::settings;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn keymap_export() {
    print!("{}", keymap::default_toml());
}

pub fn keymap_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let entries = die!(keymap::parse_keymap_toml(&content), "Error: {}");
    let galma = entries
        .iter()
        .filter(|(_, e)| matches!(e, Entry::Galma(_)))
        .count();
    println!(
        "OK: {} keys ({} galma, {} fixed)",
        entries.len(),
        galma,
        entries.len() - galma
    );
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!("OK: hanja.max_candidates={}", s.hanja.max_candidates);
}

pub fn hanja_export() {
    print!("{}", sebeol_engine::hanja::DEFAULT_HANJA_TOML);
}

pub fn hanja_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(HanjaTable::from_toml(&content), "Error: {}");
    println!("OK: {} syllables", table.len());
}
