//! Character frequency analysis

/// Relative frequencies of Russian letters (and the space character) in
/// typical text, for manual comparison against an observed ranking.
///
/// Read-only reference data; the analyzer itself never consults it.
pub const RUSSIAN_FREQUENCIES: [(char, f64); 34] = [
    ('о', 0.0965), ('и', 0.0753), ('е', 0.0723), ('а', 0.0648), ('н', 0.0618),
    ('т', 0.0616), ('с', 0.0520), ('р', 0.0407), ('в', 0.0393), ('м', 0.0298),
    ('л', 0.0294), ('д', 0.0270), ('я', 0.0264), ('к', 0.0260), ('п', 0.0248),
    ('з', 0.0160), ('ы', 0.0157), ('ь', 0.0151), ('у', 0.0133), ('ч', 0.0117),
    ('ж', 0.0107), ('г', 0.0099), ('х', 0.0087), ('ф', 0.0073), ('й', 0.0069),
    ('ю', 0.0067), ('б', 0.0067), ('ц', 0.0050), ('ш', 0.0042), ('щ', 0.0036),
    ('э', 0.0024), ('ъ', 0.0004), ('ё', 0.0004), (' ', 0.1287),
];

/// Computes the relative frequency of every distinct character in `text`.
///
/// Every character counts — letters, punctuation and whitespace alike — and
/// each frequency is `count / total_character_count`, so the reported values
/// sum to 1.0 over the observed alphabet. The result is ordered by
/// descending frequency; characters with equal counts keep the order they
/// were first encountered in. An empty text yields an empty table.
///
/// This is an analytical aid only: matching the ranking against a reference
/// table such as [`RUSSIAN_FREQUENCIES`] is left to the caller.
pub fn char_frequencies(text: &str) -> Vec<(char, f64)> {
    // First-encounter order is preserved so the later stable sort breaks
    // frequency ties by it.
    let mut counts: Vec<(char, u32)> = Vec::new();

    for c in text.chars() {
        match counts.iter_mut().find(|(seen, _)| *seen == c) {
            Some((_, count)) => *count += 1,
            None => counts.push((c, 1)),
        }
    }

    let total = text.chars().count() as f64;
    counts.sort_by(|(_, a), (_, b)| b.cmp(a));

    counts
        .into_iter()
        .map(|(c, count)| (c, count as f64 / total))
        .collect()
}
