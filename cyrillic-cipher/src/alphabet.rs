//! The 32-letter Cyrillic alphabet: range checks and the cyclic shift transform

/// Number of letters in each case range of the alphabet (no Ё).
pub const ALPHABET_SIZE: u32 = 32;

/// Characters other than Cyrillic letters that a text may contain.
pub const ALLOWED_PUNCTUATION: &str = " ,.:;!?\n";

const UPPER_BASE: char = 'А';
const UPPER_LAST: char = 'Я';
const LOWER_BASE: char = 'а';
const LOWER_LAST: char = 'я';

// The lowercase range sits exactly this far above the uppercase range.
const CASE_OFFSET: u32 = LOWER_BASE as u32 - UPPER_BASE as u32;

/// Returns true if `c` lies in the contiguous Cyrillic letter range `А..=я`.
///
/// Covers both cases and every code point in between. `Ё`/`ё` sit outside
/// this range and are rejected.
pub fn is_cyrillic(c: char) -> bool {
    (UPPER_BASE..=LOWER_LAST).contains(&c)
}

/// Returns true if `c` is valid inside a text: a Cyrillic letter or a
/// member of [`ALLOWED_PUNCTUATION`].
pub fn is_text_char(c: char) -> bool {
    is_cyrillic(c) || ALLOWED_PUNCTUATION.contains(c)
}

/// Uppercases a single Cyrillic letter; any other character is unchanged.
///
/// The lowercase range maps onto the uppercase range by a fixed code point
/// offset, so no Unicode case tables are needed.
pub fn to_upper(c: char) -> char {
    if (LOWER_BASE..=LOWER_LAST).contains(&c) {
        char::from_u32(c as u32 - CASE_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// Shifts a Cyrillic letter cyclically by `shift` positions within its
/// case-specific 32-letter range.
///
/// Negative shifts are valid (used for decryption); the position is reduced
/// with a Euclidean modulo so the result always lands in `[0, 31]`. Any
/// non-letter character is returned unchanged.
pub fn shift_char(c: char, shift: i32) -> char {
    if (UPPER_BASE..=UPPER_LAST).contains(&c) {
        shift_in_range(c, UPPER_BASE, shift)
    } else if (LOWER_BASE..=LOWER_LAST).contains(&c) {
        shift_in_range(c, LOWER_BASE, shift)
    } else {
        c
    }
}

// The target code point stays inside the caller's 32-letter range, every
// value of which is a valid scalar, so the fallback never fires.
fn shift_in_range(c: char, base: char, shift: i32) -> char {
    let position = c as i32 - base as i32;
    let shifted = (position + shift).rem_euclid(ALPHABET_SIZE as i32);
    char::from_u32(base as u32 + shifted as u32).unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_check() {
        assert!(is_cyrillic('А'));
        assert!(is_cyrillic('я'));
        assert!(is_cyrillic('Я'));
        assert!(is_cyrillic('а'));
        // Ё is outside the contiguous range
        assert!(!is_cyrillic('Ё'));
        assert!(!is_cyrillic('ё'));
        assert!(!is_cyrillic('A'));
        assert!(!is_cyrillic('5'));
        assert!(!is_cyrillic(' '));
    }

    #[test]
    fn test_text_chars() {
        assert!(is_text_char('ж'));
        assert!(is_text_char(' '));
        assert!(is_text_char('\n'));
        assert!(is_text_char('!'));
        assert!(!is_text_char('-'));
        assert!(!is_text_char('7'));
    }

    #[test]
    fn test_to_upper() {
        assert_eq!(to_upper('а'), 'А');
        assert_eq!(to_upper('я'), 'Я');
        assert_eq!(to_upper('Д'), 'Д');
        assert_eq!(to_upper(','), ',');
    }

    #[test]
    fn test_shift_wraps_forward() {
        assert_eq!(shift_char('А', 1), 'Б');
        assert_eq!(shift_char('Я', 1), 'А');
        assert_eq!(shift_char('я', 3), 'в');
    }

    #[test]
    fn test_negative_shift_wraps() {
        assert_eq!(shift_char('А', -1), 'Я');
        assert_eq!(shift_char('а', -33), 'я');
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(shift_char(' ', 5), ' ');
        assert_eq!(shift_char('!', 5), '!');
        assert_eq!(shift_char('Q', 5), 'Q');
    }

    #[test]
    fn test_shift_is_bijective_on_both_ranges() {
        for shift in 0..ALPHABET_SIZE as i32 {
            for code in 'А' as u32..='я' as u32 {
                let c = char::from_u32(code).unwrap();
                assert_eq!(shift_char(shift_char(c, shift), -shift), c);
            }
        }
    }
}
