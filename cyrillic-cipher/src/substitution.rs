//! Literal character-to-character substitution

use std::collections::BTreeMap;

use crate::error::{CipherError, Result};

/// A table of independent single-character replacements used to map an
/// obfuscation alphabet (Latin letters, digits, symbols) back to Cyrillic.
///
/// Unlike the cipher engine this is not an alphabet cipher: there is no key
/// cycling, each source character always maps to the same target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionMap {
    entries: Vec<(char, char)>,
}

impl SubstitutionMap {
    /// Builds a map from `(source, target)` pairs. Sources are unique; on a
    /// duplicate source the first pair wins.
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut entries: Vec<(char, char)> = Vec::new();

        for (from, to) in pairs {
            if !entries.iter().any(|&(seen, _)| seen == from) {
                entries.push((from, to));
            }
        }

        SubstitutionMap { entries }
    }

    /// The fixed table recovered (by frequency analysis) for the built-in
    /// obfuscation alphabet.
    pub fn builtin() -> Self {
        SubstitutionMap::new([
            ('Z', ' '),
            ('E', 'И'),
            ('9', 'О'),
            ('n', 'Т'),
            ('h', 'Л'),
            ('I', 'Е'),
            ('F', 'С'),
            ('x', 'Ы'),
            ('V', 'М'),
            ('A', 'Н'),
            ('B', 'Г'),
            ('W', 'У'),
            ('!', 'Р'),
            ('=', 'Д'),
            ('$', 'Ю'),
            ('>', 'Э'),
            ('C', 'А'),
            ('P', 'В'),
            ('U', 'П'),
            ('S', 'Я'),
            ('t', 'Ч'),
            ('-', 'Ь'),
            ('O', 'З'),
            ('M', 'Б'),
            ('8', 'Щ'),
            ('G', 'Х'),
            ('N', 'Т'),
            ('J', 'Ж'),
            ('L', 'Й'),
            ('R', 'Ц'),
            ('d', 'Ш'),
            ('3', 'Ф'),
            ('Q', 'Ё'),
            ('Y', 'Ъ'),
        ])
    }

    /// Parses a key file: a JSON object whose keys and values are each a
    /// single character, e.g. `{"Z": " ", "E": "И"}`.
    ///
    /// # Errors
    ///
    /// [`CipherError::KeyFile`] when the source is not a JSON object of
    /// strings or any key/value is not exactly one character.
    pub fn from_json(source: &str) -> Result<Self> {
        let parsed: BTreeMap<String, String> =
            serde_json::from_str(source).map_err(|e| CipherError::KeyFile(e.to_string()))?;

        let mut pairs = Vec::with_capacity(parsed.len());
        for (from, to) in &parsed {
            pairs.push((single_char(from)?, single_char(to)?));
        }

        Ok(SubstitutionMap::new(pairs))
    }

    /// Number of entries in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies the map to a text in a single pass.
    ///
    /// Each input character is looked up exactly once and replaced by its
    /// target, or kept as-is when absent from the map. A replacement's
    /// output can therefore never be picked up by another entry, whatever
    /// the entry order.
    pub fn apply(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                self.entries
                    .iter()
                    .find(|&&(from, _)| from == c)
                    .map_or(c, |&(_, to)| to)
            })
            .collect()
    }
}

fn single_char(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CipherError::KeyFile(format!(
            "entry {s:?} is not a single character"
        ))),
    }
}
