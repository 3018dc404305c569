// Heuristic English syllable counter.
//
// Counts contiguous vowel clusters ({a, e, i, o, u, y}) and subtracts one for
// a trailing silent "e" ("-e", "-es", "-ed", except "-le"). This is an
// approximation, not a pronunciation lookup: "bed" counts as 0, "apple" and
// "table" as 2, "fire" as 1. Those mismatches are part of the contract. The
// composer, the syllable index, and every test agree on exactly this
// function, so the 5-7-5 guarantee is relative to it, and it must not be
// "corrected" against real pronunciation data.

const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Estimate the number of syllables in `word`.
///
/// Pure and total: the empty string (and any word without vowels) counts as
/// 0. The result is never negative because a word ending in "e" always has
/// at least one vowel cluster to subtract from.
pub fn count_syllables(word: &str) -> u32 {
    let word = word.trim().to_lowercase();

    let mut count: u32 = 0;
    let mut last_was_vowel = false;
    for c in word.chars() {
        let is_vowel = VOWELS.contains(&c);
        if is_vowel && !last_was_vowel {
            count += 1;
        }
        last_was_vowel = is_vowel;
    }

    if has_silent_e(&word) {
        count = count.saturating_sub(1);
    }
    count
}

/// Whether the silent-e correction applies to an already-lowercased word.
fn has_silent_e(word: &str) -> bool {
    let silent_ending = word.ends_with('e') || word.ends_with("es") || word.ends_with("ed");
    silent_ending && !word.ends_with("le")
}
