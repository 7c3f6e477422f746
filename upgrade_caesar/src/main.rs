use clap::{Parser, ValueEnum};
use cyrillic_cipher::UpgradeCaesar;

/// Command-line arguments for the upgraded Caesar cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key string for the cipher (Cyrillic letters, any case)
    #[arg(short, long, help = "Key string for the cipher")]
    key: String,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Main entry point for the upgraded Caesar cipher program.
fn main() {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Read input file content
    let content: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read input file");

    // Key validation and the transformation itself share one error path
    let result = build_cipher_and_run(&cli, content.trim());

    let result = match result {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Write result to output file
    std::fs::write(&cli.output, result)
        .expect("Failed to write output file");

    println!("Operation completed successfully! Output saved to: {}", cli.output);
}

/// Builds the cipher session and applies the selected mode.
fn build_cipher_and_run(cli: &Cli, content: &str) -> cyrillic_cipher::Result<String> {
    let cipher = UpgradeCaesar::with_key(&cli.key)?;

    match cli.mode {
        OperationMode::Encrypt => {
            println!("Encrypting with key: {}", cipher.key().as_str());
            cipher.encrypt(content)
        }
        OperationMode::Decrypt => {
            println!("Decrypting with key: {}", cipher.key().as_str());
            cipher.decrypt(content)
        }
    }
}
