// End-to-end checks of the public API: random corpora and random templates
// across many seeds must always land on 5-7-5.

use haiku_lang::{
    ComposerConfig, HAIKU_PATTERN, HaikuGenerator, SyllableIndex, Template, WordCategory,
    WordSource, compose, count_syllables, default_words, parse_templates,
};
use haiku_prng::{HaikuRng, RandomSource};

const MARKERS: [&str; 4] = ["<W>", "<P>", "<S>", "<L>"];
const FILLERS: [&str; 6] = ["the", "a", "over", "in", "silent", "moonlight"];

/// A random subset of the default words, always keeping the zero- and
/// one-syllable words so every split has a word available.
fn random_corpus(rng: &mut HaikuRng) -> Vec<String> {
    default_words()
        .into_iter()
        .filter(|w| count_syllables(w) <= 1 || rng.range_u64(0, 3) == 0)
        .collect()
}

/// A random template whose literals never exceed their line's target.
fn random_template(rng: &mut HaikuRng) -> String {
    let lines: Vec<String> = HAIKU_PATTERN
        .iter()
        .map(|&target| {
            let mut tokens = Vec::new();
            let mut literal = 0;
            let slots = rng.range_usize(1, 5);
            for _ in 0..slots {
                if rng.range_u64(0, 2) == 0 {
                    let word = *rng.choose(&FILLERS).unwrap();
                    if literal + count_syllables(word) < target {
                        literal += count_syllables(word);
                        tokens.push(word.to_string());
                    }
                }
                tokens.push(rng.choose(&MARKERS).unwrap().to_string());
            }
            tokens.join(" ")
        })
        .collect();
    lines.join("|")
}

#[test]
fn every_line_hits_its_target() {
    for seed in 0..300 {
        let mut rng = HaikuRng::new(seed);
        let index = SyllableIndex::build(random_corpus(&mut rng));
        let raw = random_template(&mut rng);
        let template = Template::parse_strict(&raw).unwrap();
        let haiku = compose(&index, &template, &ComposerConfig::default(), &mut rng);

        for (line, target) in haiku.lines.iter().zip(HAIKU_PATTERN) {
            assert_eq!(line.syllables(), target, "seed {seed}, template {raw}");
            let computed: u32 = line.words.iter().map(|w| count_syllables(&w.text)).sum();
            assert_eq!(
                computed, target,
                "seed {seed}, template {raw}, line {:?}",
                line.text
            );
            assert!(
                line.words.iter().all(|w| w.source != WordSource::Filler),
                "slotted lines never need filler"
            );
        }
    }
}

#[test]
fn six_word_corpus_scenario() {
    let corpus = ["dog", "cat", "apple", "running", "quickly", "Paris"];
    let index = SyllableIndex::build(corpus);
    let template = Template::parse("<W> <S>|<P> is <L>|<W> <W>").unwrap();
    let config = ComposerConfig::default();

    for seed in 0..100 {
        let mut rng = HaikuRng::new(seed);
        let haiku = compose(&index, &template, &config, &mut rng);
        for (line, target) in haiku.lines.iter().zip(HAIKU_PATTERN) {
            let computed: u32 = line.words.iter().map(|w| count_syllables(&w.text)).sum();
            assert_eq!(computed, target, "seed {seed}: {}", line.text);
            for word in &line.words {
                let from_corpus = corpus.contains(&word.text.as_str());
                let is_placeholder = word.text.chars().all(|c| "Blah".contains(c));
                let is_literal = word.source == WordSource::Literal;
                assert!(
                    from_corpus || is_placeholder || is_literal,
                    "seed {seed}: unexpected word {:?}",
                    word.text
                );
            }
        }
        assert_eq!(haiku.lines[1].words[1].text, "is");
        assert!(
            haiku.texts().iter().all(|t| t.starts_with(char::is_uppercase)),
            "lines should be capitalized: {haiku}"
        );
    }
}

#[test]
fn single_word_buckets_respect_category() {
    // Every bucket holds one word, so the override never fires and a <P>
    // slot either gets the proper noun of that length or a placeholder.
    let index = SyllableIndex::build(["dog", "Paris", "banana", "Kilimanjaro"]);
    let template = Template::parse("<P> <P>|<P> <P>|<P> <P>").unwrap();
    for seed in 0..100 {
        let mut rng = HaikuRng::new(seed);
        let haiku = compose(&index, &template, &ComposerConfig::default(), &mut rng);
        for line in &haiku.lines {
            for word in &line.words {
                assert!(
                    WordCategory::ProperNoun.matches(&word.text),
                    "seed {seed}: {:?} is not a proper noun",
                    word.text
                );
                assert!(word.text != "dog" && word.text != "banana");
            }
        }
    }
}

#[test]
fn generator_is_reproducible_and_varied() {
    let templates = parse_templates(
        "<W> <S>|<P> is <L>|<W> <W>\nthe <W> <W>|<S> drift <L> over <P>|a <W> <W>\n",
        true,
    )
    .unwrap();
    let index = SyllableIndex::build(default_words());

    let run = |seed| {
        let mut generator = HaikuGenerator::new(
            index.clone(),
            templates.clone(),
            ComposerConfig::default(),
            HaikuRng::new(seed),
        )
        .unwrap();
        (0..20)
            .map(|_| generator.next_haiku().to_string())
            .collect::<Vec<_>>()
    };

    assert_eq!(run(99), run(99));
    let distinct: std::collections::BTreeSet<_> = run(1).into_iter().collect();
    assert!(
        distinct.len() > 10,
        "Expected >10 distinct haiku from 20 draws, got {}",
        distinct.len()
    );
}
