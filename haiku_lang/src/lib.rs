// Haiku composition crate.
//
// Turns a plain word list and a set of three-line templates into random
// 5-7-5 haiku. No terminal or file-format concerns beyond reading plain text
// lists; the `haiku_cli` crate is the interactive shell around it.
//
// Architecture:
// - `syllables.rs`: `count_syllables`, the vowel-cluster heuristic
// - `corpus.rs`: `WordCategory` predicates and the `SyllableIndex`
// - `template.rs`: `Template` parsing (`<W>`, `<P>`, `<S>`, `<L>` slots)
// - `select.rs`: `select_word` and the `category_override_policy`
// - `compose.rs`: the single-pass slot filler and `HaikuGenerator`
// - `config.rs`: `ComposerConfig`, loaded from JSON
// - `error.rs`: `HaikuError`, `TemplateError`
//
// The default corpus and templates are embedded from `data/` with
// `include_str!`, the same way tests and the CLI get a working setup
// without any files on disk.
//
// Determinism: all randomness comes from the caller's `RandomSource`. The
// same seed, corpus, and templates always yield the same haiku sequence.

pub mod compose;
pub mod config;
pub mod corpus;
pub mod error;
pub mod select;
pub mod syllables;
pub mod template;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export key types at crate root for convenience.
pub use compose::{
    ComposedLine, GeneratedHaiku, HAIKU_PATTERN, HaikuGenerator, ResolvedWord, WordSource,
    capitalize, compose,
};
pub use config::ComposerConfig;
pub use corpus::{SyllableIndex, WordCategory, load_words, parse_words};
pub use error::{HaikuError, TemplateError};
pub use select::{category_override_policy, placeholder, select_word};
pub use syllables::count_syllables;
pub use template::{LineTemplate, SlotKind, Template, Token, load_templates, parse_templates};

use haiku_prng::RandomSource;

/// The built-in word list.
pub fn default_words() -> Vec<String> {
    parse_words(include_str!("../../data/words.txt"))
}

/// The built-in templates.
///
/// Panics if the embedded file is malformed (should never happen in a
/// released build; `test_default_templates_parse` guards it).
pub fn default_templates() -> Vec<Template> {
    parse_templates(include_str!("../../data/templates.txt"), true)
        .expect("embedded templates.txt is malformed")
}

impl<R: RandomSource> HaikuGenerator<R> {
    /// A session over the built-in corpus and templates.
    pub fn with_defaults(config: ComposerConfig, rng: R) -> Self {
        let index = SyllableIndex::build(default_words());
        Self::new(index, default_templates(), config, rng)
            .expect("embedded templates.txt is empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haiku_prng::HaikuRng;

    #[test]
    fn test_default_words_load() {
        let words = default_words();
        assert!(
            words.len() >= 100,
            "Expected >= 100 words, got {}",
            words.len()
        );
        assert!(words.iter().all(|w| !w.trim().is_empty()));
    }

    #[test]
    fn test_default_words_cover_categories() {
        let words = default_words();
        for category in [
            WordCategory::Common,
            WordCategory::ProperNoun,
            WordCategory::EndsInS,
            WordCategory::EndsInLy,
        ] {
            assert!(
                words.iter().any(|w| category.matches(w)),
                "Should have {category:?} words"
            );
        }
    }

    #[test]
    fn test_default_index_has_small_buckets() {
        let index = SyllableIndex::build(default_words());
        for count in 0..=5 {
            assert!(
                !index.bucket(count).is_empty(),
                "Should have {count}-syllable words"
            );
        }
    }

    #[test]
    fn test_default_templates_parse() {
        let templates = default_templates();
        assert!(templates.len() >= 5);
        for t in &templates {
            for line in &t.lines {
                assert!(line.slot_count() > 0, "template {t} has a slotless line");
                assert_eq!(line.unknown_markers().count(), 0);
            }
        }
    }

    #[test]
    fn test_default_generator_hits_pattern() {
        let mut generator =
            HaikuGenerator::with_defaults(ComposerConfig::default(), HaikuRng::new(7));
        for _ in 0..100 {
            let haiku = generator.next_haiku();
            for (line, target) in haiku.lines.iter().zip(HAIKU_PATTERN) {
                assert_eq!(line.syllables(), target, "{}", line.text);
                let computed: u32 = line.words.iter().map(|w| count_syllables(&w.text)).sum();
                assert_eq!(computed, target, "{}", line.text);
            }
        }
    }
}
