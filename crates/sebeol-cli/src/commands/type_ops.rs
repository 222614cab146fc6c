use std::process;

use serde::Serialize;

use sebeol_engine::{key, Bridge, EditOp, Feed, GalmaMode, KeyResponse, TextBuffer};

/// Decode the key argument: `\b` is backspace, `\\` a literal backslash.
pub fn parse_keys(keys: &str) -> Result<Vec<u32>, String> {
    let mut codes = Vec::with_capacity(keys.len());
    let mut chars = keys.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            codes.push(u32::from(c));
            continue;
        }
        match chars.next() {
            Some('b') => codes.push(key::BACKSPACE),
            Some('\\') => codes.push(u32::from('\\')),
            Some(other) => return Err(format!("unknown escape \\{other}")),
            None => return Err("trailing backslash".to_string()),
        }
    }
    Ok(codes)
}

#[derive(Serialize)]
struct Step {
    key: String,
    feed: &'static str,
    ops: Vec<String>,
    preedit: String,
    mode: &'static str,
}

#[derive(Serialize)]
struct TypeReport {
    keys: String,
    text: String,
    steps: Vec<Step>,
}

fn key_label(code: u32) -> String {
    match code {
        key::BACKSPACE => "\\b".to_string(),
        _ => char::from_u32(code).map_or_else(|| format!("#{code}"), String::from),
    }
}

fn op_label(op: &EditOp) -> String {
    match op {
        EditOp::Replace(text) => format!("replace({text:?})"),
        EditOp::Commit => "commit".to_string(),
        EditOp::DeleteBefore(n) => format!("delete({n})"),
        EditOp::Insert(text) => format!("insert({text:?})"),
    }
}

fn feed_label(feed: Feed) -> &'static str {
    match feed {
        Feed::Handled => "handled",
        Feed::PassedThrough => "passthrough",
        Feed::Cancelled => "cancelled",
    }
}

fn mode_label(mode: GalmaMode) -> &'static str {
    match mode {
        GalmaMode::Vowel => "vowel",
        GalmaMode::Consonant => "consonant",
        GalmaMode::BCombination => "b-combination",
    }
}

fn step(bridge: &Bridge<TextBuffer>, code: u32, feed: Feed, resp: &KeyResponse) -> Step {
    Step {
        key: key_label(code),
        feed: feed_label(feed),
        ops: resp.ops.iter().map(op_label).collect(),
        preedit: bridge.session().preedit(),
        mode: mode_label(bridge.session().mode()),
    }
}

/// Type `keys` into an empty buffer and print the resulting text.
pub fn type_keys(keys: &str, show_ops: bool, json: bool) {
    let codes = match parse_keys(keys) {
        Ok(codes) => codes,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mut bridge = Bridge::new(TextBuffer::new());
    let mut steps = Vec::with_capacity(codes.len());
    for code in codes {
        let (feed, resp) = bridge.feed_detailed(code);
        steps.push(step(&bridge, code, feed, &resp));
    }
    bridge.flush();
    let text = bridge.surface().text();

    if json {
        let report = TypeReport {
            keys: keys.to_string(),
            text,
            steps,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        return;
    }

    if show_ops {
        for s in &steps {
            println!(
                "{:<3} {:<11} {:<13} [{}] {}",
                s.key,
                s.feed,
                s.mode,
                s.ops.join(", "),
                s.preedit
            );
        }
    }
    println!("{text}");
}
