fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_toml(
        "src/keymap/default_keymap.toml",
        include_str!("src/keymap/default_keymap.toml"),
    );
    validate_toml(
        "src/hanja/default_hanja.toml",
        include_str!("src/hanja/default_hanja.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
