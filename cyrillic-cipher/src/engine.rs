//! The keyed Caesar cipher engine

use crate::alphabet;
use crate::error::{CipherError, Result};
use crate::key::Key;

/// Polyalphabetic substitution cipher over the Cyrillic alphabet.
///
/// Each letter of the text is shifted by the position of the current key
/// letter, cycling through the key. Punctuation and whitespace pass through
/// unchanged and do not consume a key letter.
///
/// The whole text is uppercased before transformation, so output is always
/// uppercase and `decrypt(encrypt(t))` recovers `uppercase(t)`, not `t`.
///
/// # Example
///
/// ```rust
/// use cyrillic_cipher::{Key, UpgradeCaesar};
///
/// let cipher = UpgradeCaesar::new(Key::new("КОТ")?);
/// let encrypted = cipher.encrypt("ПРИВЕТ")?;
/// assert_eq!(encrypted, "ЩЮЪМУД");
/// assert_eq!(cipher.decrypt(&encrypted)?, "ПРИВЕТ");
/// # Ok::<(), cyrillic_cipher::CipherError>(())
/// ```
#[derive(Debug, Clone)]
pub struct UpgradeCaesar {
    key: Key,
}

impl UpgradeCaesar {
    /// Creates a cipher session with an already-normalized key.
    pub fn new(key: Key) -> Self {
        UpgradeCaesar { key }
    }

    /// Convenience constructor validating the raw key string first.
    pub fn with_key(raw_key: &str) -> Result<Self> {
        Ok(UpgradeCaesar::new(Key::new(raw_key)?))
    }

    /// The normalized key this session uses.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Encrypts the text with the session key.
    ///
    /// # Errors
    ///
    /// [`CipherError::EmptyText`] if the text is empty,
    /// [`CipherError::InvalidText`] if it contains a character that is
    /// neither a Cyrillic letter nor allowed punctuation. Validation runs
    /// before any transformation; on error no output is produced.
    pub fn encrypt(&self, text: &str) -> Result<String> {
        self.transform(text, 1)
    }

    /// Decrypts text previously produced by [`encrypt`](Self::encrypt)
    /// under the same key. Same validation rules as encryption.
    pub fn decrypt(&self, text: &str) -> Result<String> {
        self.transform(text, -1)
    }

    fn transform(&self, text: &str, direction: i32) -> Result<String> {
        validate_text(text)?;

        let shifts = self.key.shifts();
        let mut key_index = 0;
        let mut result = String::with_capacity(text.len());

        for c in text.chars().map(alphabet::to_upper) {
            if alphabet::is_cyrillic(c) {
                result.push(alphabet::shift_char(c, direction * shifts[key_index]));
                // The key advances on letters only; punctuation below does
                // not consume a key character.
                key_index = (key_index + 1) % shifts.len();
            } else {
                result.push(c);
            }
        }

        Ok(result)
    }
}

/// Checks a text is non-empty and made only of Cyrillic letters and the
/// allowed punctuation set.
fn validate_text(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(CipherError::EmptyText);
    }

    if !text.chars().all(alphabet::is_text_char) {
        return Err(CipherError::InvalidText);
    }

    Ok(())
}
