use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sebeol_cli::commands::{config_ops, keymap_ops, type_ops};

#[derive(Parser)]
#[command(name = "sebeoltool", about = "Sebeolsik galmadeuli composition diagnostics")]
struct Cli {
    /// Log engine events to stderr (needs a build with the `trace` feature)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Type a key sequence and print the resulting text
    Type {
        /// Keys to type; `\b` is backspace, `\\` a backslash
        keys: String,
        /// Show the edit ops, mode and preedit after every key
        #[arg(long)]
        ops: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Encode an (initial, vowel, final) index triple; 0 is an empty slot
    Encode {
        initial: u16,
        vowel: u16,
        #[arg(value_name = "FINAL", default_value = "0")]
        final_: u16,
    },
    /// Show the compiled-in key layout
    Keymap {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List hanja candidates for a syllable
    Hanja { syllable: String },
    /// Print the default layout TOML
    KeymapExport,
    /// Validate a layout TOML file
    KeymapValidate { file: String },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate { file: String },
    /// Print the default hanja TOML
    HanjaExport,
    /// Validate a hanja TOML file
    HanjaValidate { file: String },
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("sebeol_session=debug,sebeol_core=debug")),
            )
            .init();
    }

    match cli.command {
        Command::Type { keys, ops, json } => type_ops::type_keys(&keys, ops, json),
        Command::Encode {
            initial,
            vowel,
            final_,
        } => keymap_ops::encode_cmd(initial, vowel, final_),
        Command::Keymap { json } => keymap_ops::keymap(json),
        Command::Hanja { syllable } => keymap_ops::hanja(&syllable),
        Command::KeymapExport => config_ops::keymap_export(),
        Command::KeymapValidate { file } => config_ops::keymap_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::HanjaExport => config_ops::hanja_export(),
        Command::HanjaValidate { file } => config_ops::hanja_validate(&file),
    }
}
