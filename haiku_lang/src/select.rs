// Word selection for a single slot.
//
// Selection is a cascade:
// 1. filter the bucket for the requested syllable count by category and,
//    if anything survives, draw a tentative word from the filtered set;
// 2. `category_override_policy`: if the unfiltered bucket holds more than
//    one word, discard the tentative pick and draw from the whole bucket;
// 3. if nothing was chosen, emit a placeholder ("Blah" per syllable).
//
// Step 2 means category filtering only takes effect when a bucket has
// exactly one word. That is the established behavior and generated output
// depends on it, including the number of random draws per slot, so it is
// kept as a named policy rather than folded into step 1.

use haiku_prng::RandomSource;
use tracing::debug;

use crate::config::ComposerConfig;
use crate::corpus::{SyllableIndex, WordCategory};

/// Pick a word with exactly `count` syllables for a slot of `category`.
///
/// Never fails and never returns an empty string: when the index has no
/// usable word the placeholder from `config` is returned instead.
pub fn select_word<R: RandomSource>(
    index: &SyllableIndex,
    category: WordCategory,
    count: u32,
    config: &ComposerConfig,
    rng: &mut R,
) -> String {
    let bucket = index.bucket(count);
    let filtered: Vec<&str> = bucket
        .iter()
        .map(String::as_str)
        .filter(|w| category.matches(w))
        .collect();
    let tentative = rng.choose(&filtered).copied();

    match category_override_policy(bucket, tentative, rng) {
        Some(word) => word.to_string(),
        None => {
            debug!(?category, count, "no corpus word fits slot, using placeholder");
            placeholder(&config.placeholder_unit, count)
        }
    }
}

/// Resolve the final pick from the unfiltered bucket and the tentative,
/// category-filtered pick.
///
/// A bucket with more than one word always wins with a fresh uniform draw,
/// whatever the tentative pick was. Otherwise the tentative pick stands
/// (possibly `None`).
pub fn category_override_policy<'a, R: RandomSource>(
    bucket: &'a [String],
    tentative: Option<&'a str>,
    rng: &mut R,
) -> Option<&'a str> {
    if bucket.len() > 1 {
        return rng.choose(bucket).map(String::as_str);
    }
    tentative
}

/// `unit` repeated `count` times, at least once.
///
/// An empty `unit` falls back to the default so the result is never empty.
pub fn placeholder(unit: &str, count: u32) -> String {
    let unit = if unit.is_empty() { "Blah" } else { unit };
    unit.repeat(count.max(1) as usize)
}
