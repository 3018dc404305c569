// Haiku composition: filling template slots to hit 5-7-5 exactly.
//
// For each line, the target from `HAIKU_PATTERN` minus the literal words'
// syllables gives `remaining`. Tokens are then resolved left to right in a
// single pass:
// - literals and unknown markers are emitted as they are;
// - each slot gets a syllable budget. With more than one slot left, the
//   budget is a uniform draw from `[1, remaining - slots_left)`, widened to
//   `[1, 2)` when that range is empty; the last slot takes everything left.
//   The budget is clamped into `[0, remaining]` so the remainder never goes
//   negative, then a word of exactly that many syllables is selected.
//
// Because the last slot always absorbs the rest, a line with at least one
// slot and literals within the target always lands on it exactly. A line
// without slots whose literals fall short is padded with placeholder
// syllables (unless disabled in config). Every word is charged the syllables
// its text actually counts, so a line that misses its target (literals that
// overshoot, or a zero budget filled by a placeholder) reports the true
// total and is logged. The fill is one bounded pass: there is no retry loop
// that could fail to terminate, and literals are emitted once.
//
// `HaikuGenerator` wraps an index, templates, config, and RNG into a session
// that draws a random template per haiku.

use std::fmt;

use haiku_prng::{HaikuRng, RandomSource};
use tracing::{debug, warn};

use crate::config::ComposerConfig;
use crate::corpus::SyllableIndex;
use crate::error::HaikuError;
use crate::select::{placeholder, select_word};
use crate::syllables::count_syllables;
use crate::template::{LineTemplate, SlotKind, Template, Token};

/// Target syllables per line. Fixed; every haiku has exactly these 3 lines.
pub const HAIKU_PATTERN: [u32; 3] = [5, 7, 5];

/// Where a word in a composed line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSource {
    Literal,
    Slot(SlotKind),
    /// An unrecognized marker, passed through verbatim.
    Unknown,
    /// Placeholder syllables padding a slotless short line.
    Filler,
}

/// One emitted word with the syllables it was accounted for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWord {
    pub text: String,
    /// `count_syllables` of `text`.
    pub syllables: u32,
    pub source: WordSource,
}

/// A fully resolved line of a haiku.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedLine {
    /// The line's entry in `HAIKU_PATTERN`.
    pub target: u32,
    pub words: Vec<ResolvedWord>,
    /// Words joined by single spaces, first character capitalized.
    pub text: String,
}

impl ComposedLine {
    /// Syllables of the emitted words. Equals `target` unless the line
    /// could not be filled exactly.
    pub fn syllables(&self) -> u32 {
        self.words.iter().map(|w| w.syllables).sum()
    }
}

/// Three composed lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedHaiku {
    pub lines: [ComposedLine; 3],
}

impl GeneratedHaiku {
    /// The display text of each line.
    pub fn texts(&self) -> [&str; 3] {
        [
            self.lines[0].text.as_str(),
            self.lines[1].text.as_str(),
            self.lines[2].text.as_str(),
        ]
    }

    pub fn into_texts(self) -> [String; 3] {
        self.lines.map(|line| line.text)
    }
}

impl fmt::Display for GeneratedHaiku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.texts();
        write!(f, "{a}\n{b}\n{c}")
    }
}

/// Compose one haiku from `template`, drawing words from `index`.
///
/// Never fails. An empty index yields placeholder words in every slot.
pub fn compose<R: RandomSource>(
    index: &SyllableIndex,
    template: &Template,
    config: &ComposerConfig,
    rng: &mut R,
) -> GeneratedHaiku {
    let lines = std::array::from_fn(|i| {
        compose_line(&template.lines[i], HAIKU_PATTERN[i], index, config, rng)
    });
    GeneratedHaiku { lines }
}

/// Resolve a single line against its syllable target.
pub fn compose_line<R: RandomSource>(
    line: &LineTemplate,
    target: u32,
    index: &SyllableIndex,
    config: &ComposerConfig,
    rng: &mut R,
) -> ComposedLine {
    let mut remaining = i64::from(target) - i64::from(line.literal_syllables());
    let mut slots_left = line.slot_count() as i64;
    let mut words = Vec::with_capacity(line.tokens.len() + 1);

    for token in &line.tokens {
        match token {
            Token::Literal(word) => words.push(ResolvedWord {
                text: word.clone(),
                syllables: count_syllables(word),
                source: WordSource::Literal,
            }),
            Token::Unknown(marker) => words.push(ResolvedWord {
                text: marker.clone(),
                syllables: 0,
                source: WordSource::Unknown,
            }),
            Token::Slot(kind) => {
                let budget = slot_budget(remaining, slots_left, rng);
                let text = select_word(index, kind.category(), budget, config, rng);
                remaining -= i64::from(budget);
                slots_left -= 1;
                words.push(ResolvedWord {
                    syllables: count_syllables(&text),
                    text,
                    source: WordSource::Slot(*kind),
                });
            }
        }
    }

    if remaining > 0 && config.pad_short_lines {
        let missing = remaining as u32;
        debug!(line_target = target, missing, "padding slotless line with filler");
        let text = placeholder(&config.placeholder_unit, missing);
        words.push(ResolvedWord {
            syllables: count_syllables(&text),
            text,
            source: WordSource::Filler,
        });
    }

    let total: u32 = words.iter().map(|w| w.syllables).sum();
    if total != target {
        warn!(line_target = target, total, "line cannot reach its syllable target");
    }

    let joined = words
        .iter()
        .map(|w| w.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    ComposedLine {
        target,
        words,
        text: capitalize(&joined),
    }
}

/// Syllable budget for the next slot.
///
/// With several slots left a split is drawn from `[1, remaining - slots_left)`
/// (at least `[1, 2)`); the final slot takes the whole remainder. The draw
/// happens even when the remainder is already spent, so the number of
/// random draws per line depends only on its slot count.
fn slot_budget<R: RandomSource>(remaining: i64, slots_left: i64, rng: &mut R) -> u32 {
    let split = if slots_left > 1 {
        let high = (remaining - slots_left).max(2) as u64;
        rng.range_u64(1, high) as i64
    } else {
        remaining
    };
    split.clamp(0, remaining.max(0)) as u32
}

/// Capitalize the first character of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let upper: String = c.to_uppercase().collect();
            format!("{}{}", upper, chars.as_str())
        }
    }
}

/// A haiku session: one index, a template pool, and a long-lived RNG.
#[derive(Debug, Clone)]
pub struct HaikuGenerator<R: RandomSource = HaikuRng> {
    index: SyllableIndex,
    templates: Vec<Template>,
    config: ComposerConfig,
    rng: R,
}

impl<R: RandomSource> HaikuGenerator<R> {
    /// Fails with `HaikuError::NoTemplates` if `templates` is empty.
    pub fn new(
        index: SyllableIndex,
        templates: Vec<Template>,
        config: ComposerConfig,
        rng: R,
    ) -> Result<Self, HaikuError> {
        if templates.is_empty() {
            return Err(HaikuError::NoTemplates);
        }
        if index.is_empty() {
            warn!("word corpus is empty, every slot will be a placeholder");
        }
        Ok(Self {
            index,
            templates,
            config,
            rng,
        })
    }

    /// Compose a haiku from a uniformly chosen template.
    pub fn next_haiku(&mut self) -> GeneratedHaiku {
        let choice = self.rng.range_usize(0, self.templates.len());
        debug!(template = choice, "composing haiku");
        compose(
            &self.index,
            &self.templates[choice],
            &self.config,
            &mut self.rng,
        )
    }

    pub fn index(&self) -> &SyllableIndex {
        &self.index
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }
}
