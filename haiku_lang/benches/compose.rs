// Benchmarks for index construction and haiku composition over the
// built-in corpus.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use haiku_lang::{
    ComposerConfig, HaikuGenerator, SyllableIndex, compose, count_syllables, default_templates,
    default_words,
};
use haiku_prng::HaikuRng;

fn bench_count_syllables(c: &mut Criterion) {
    let words = default_words();
    c.bench_function("count_syllables/default_corpus", |b| {
        b.iter(|| {
            words
                .iter()
                .map(|w| count_syllables(black_box(w)))
                .sum::<u32>()
        })
    });
}

fn bench_build_index(c: &mut Criterion) {
    let words = default_words();
    c.bench_function("syllable_index/build", |b| {
        b.iter(|| SyllableIndex::build(black_box(&words)))
    });
}

fn bench_compose(c: &mut Criterion) {
    let index = SyllableIndex::build(default_words());
    let templates = default_templates();
    let config = ComposerConfig::default();
    let mut rng = HaikuRng::new(42);
    c.bench_function("compose/first_template", |b| {
        b.iter(|| compose(&index, black_box(&templates[0]), &config, &mut rng))
    });

    let mut generator =
        HaikuGenerator::with_defaults(ComposerConfig::default(), HaikuRng::new(7));
    c.bench_function("generator/next_haiku", |b| b.iter(|| generator.next_haiku()));
}

criterion_group!(benches, bench_count_syllables, bench_build_index, bench_compose);
criterion_main!(benches);
