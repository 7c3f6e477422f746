use clap::Parser;
use cyrillic_cipher::{char_frequencies, SubstitutionMap};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Command-line arguments for the frequency decryptor program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: String,

    /// Optional config naming the substitution key file to use instead of
    /// the built-in table
    #[arg(short, long, help = "Path to the config file naming a key file")]
    config: Option<PathBuf>,
}

/// Small configuration file: names the key file holding the substitution
/// table, e.g. `{ "key_file": "keymap.json" }`.
#[derive(Debug, Deserialize)]
struct Config {
    key_file: PathBuf,
}

/// How many entries of the frequency ranking to report.
const RANKING_LINES: usize = 10;

/// Main entry point for the frequency decryptor.
fn main() {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Read the encrypted content from the input file
    let content: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read the input file");
    let content = content.trim();

    // Report the observed frequency ranking; matching it against reference
    // letter frequencies stays a manual step
    print_ranking(content);

    // Build the substitution map: from a key file when configured, the
    // built-in table otherwise
    let map = match &cli.config {
        Some(path) => match load_keyed_map(path) {
            Ok(map) => map,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => SubstitutionMap::builtin(),
    };

    // Recover the text and write it out
    let decrypted = map.apply(content);
    std::fs::write(&cli.output, decrypted)
        .expect("Failed to write the output file");

    println!("Recovered text saved to: {}", cli.output);
}

/// Prints the top of the character frequency ranking for the given text.
fn print_ranking(content: &str) {
    let ranking = char_frequencies(content);

    println!("Observed character frequencies (top {RANKING_LINES}):");
    for (c, freq) in ranking.iter().take(RANKING_LINES) {
        let shown = if *c == '\n' { "\\n".to_string() } else { c.to_string() };
        println!("  {shown:>2}  {freq:.4}");
    }
}

/// Loads the substitution map named by a config file.
///
/// The config is a JSON object with a `key_file` path; the key file itself
/// is a JSON object of single-character mappings. A relative key file path
/// is resolved against the config file's directory.
fn load_keyed_map(config_path: &Path) -> Result<SubstitutionMap, String> {
    let config_text = std::fs::read_to_string(config_path)
        .map_err(|e| format!("failed to read config {}: {e}", config_path.display()))?;

    let config: Config = serde_json::from_str(&config_text)
        .map_err(|e| format!("malformed config {}: {e}", config_path.display()))?;

    let key_path = if config.key_file.is_relative() {
        config_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(&config.key_file)
    } else {
        config.key_file
    };

    let key_text = std::fs::read_to_string(&key_path)
        .map_err(|e| format!("failed to read key file {}: {e}", key_path.display()))?;

    SubstitutionMap::from_json(&key_text).map_err(|e| e.to_string())
}
