//! # Cyrillic Cipher Library
//!
//! This library implements a keyed Caesar (Vigenère-style) substitution cipher
//! over the 32-letter Cyrillic alphabet, together with the frequency-analysis
//! helpers used to break simple substitution alphabets.
//!
//! ## Components
//!
//! - **Cipher engine** - polyalphabetic encrypt/decrypt with a cycling key
//! - **Key normalization** - validates and uppercases raw key strings
//! - **Frequency analyzer** - relative frequency ranking of every character
//! - **Substitution mapper** - literal char-to-char alphabet recovery
//!
//! ## Usage
//!
//! ```rust
//! use cyrillic_cipher::{Key, UpgradeCaesar};
//!
//! let cipher = UpgradeCaesar::new(Key::new("ключ")?);
//!
//! let encrypted = cipher.encrypt("ПРИВЕТ, МИР!")?;
//! let decrypted = cipher.decrypt(&encrypted)?;
//!
//! assert_eq!(decrypted, "ПРИВЕТ, МИР!");
//! # Ok::<(), cyrillic_cipher::CipherError>(())
//! ```
//!
//! No cryptographic security is provided or implied: this is a classical
//! cipher for educational cryptanalysis, not encryption.

// Public modules
pub mod alphabet;
pub mod engine;
pub mod error;
pub mod frequency;
pub mod key;
pub mod substitution;

// Re-exports for easy access
pub use engine::UpgradeCaesar;
pub use error::{CipherError, Result};
pub use frequency::{char_frequencies, RUSSIAN_FREQUENCIES};
pub use key::Key;
pub use substitution::SubstitutionMap;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
