// Haiku templates: three pipe-separated lines of literal words and slot markers.
//
// A template such as `"The <W> <S>|<P> is <L>|<W> <W>"` becomes three
// `LineTemplate`s. Each line is tokenized on spaces and the punctuation set
// `. - , !`; punctuation is dropped, not reproduced. Tokens starting with `<`
// are markers: `<W>` any common word, `<P>` proper noun, `<S>` ends in "s",
// `<L>` ends in "ly". Any other marker is kept as `Token::Unknown`, which is
// inert (no syllables, never filled, emitted verbatim) unless strict parsing
// rejects it.
//
// See `compose.rs` for how lines are filled.

use std::fmt;
use std::path::Path;

use crate::corpus::WordCategory;
use crate::error::{HaikuError, TemplateError};
use crate::syllables::count_syllables;

/// Separator between the three lines of a template.
pub const LINE_DELIMITER: char = '|';

/// Characters that separate tokens within a line.
pub const TOKEN_BOUNDARIES: [char; 5] = [' ', '.', '-', ',', '!'];

/// A word slot to be filled at composition time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// `<W>`
    AnyWord,
    /// `<P>`
    ProperNoun,
    /// `<S>`
    EndsInS,
    /// `<L>`
    EndsInLy,
}

impl SlotKind {
    /// Recognize a marker token, or `None` for anything else.
    pub fn from_marker(token: &str) -> Option<Self> {
        match token {
            "<W>" => Some(SlotKind::AnyWord),
            "<P>" => Some(SlotKind::ProperNoun),
            "<S>" => Some(SlotKind::EndsInS),
            "<L>" => Some(SlotKind::EndsInLy),
            _ => None,
        }
    }

    /// The category a word must satisfy to fill this slot.
    pub fn category(self) -> WordCategory {
        match self {
            SlotKind::AnyWord => WordCategory::Common,
            SlotKind::ProperNoun => WordCategory::ProperNoun,
            SlotKind::EndsInS => WordCategory::EndsInS,
            SlotKind::EndsInLy => WordCategory::EndsInLy,
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            SlotKind::AnyWord => "<W>",
            SlotKind::ProperNoun => "<P>",
            SlotKind::EndsInS => "<S>",
            SlotKind::EndsInLy => "<L>",
        }
    }
}

/// One token of a line template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Emitted unchanged; its syllables count against the line target.
    Literal(String),
    /// Replaced by a word from the corpus.
    Slot(SlotKind),
    /// A `<...>` marker that is not one of the four slot kinds.
    Unknown(String),
}

impl Token {
    fn classify(raw: &str) -> Self {
        if raw.starts_with('<') {
            match SlotKind::from_marker(raw) {
                Some(kind) => Token::Slot(kind),
                None => Token::Unknown(raw.to_string()),
            }
        } else {
            Token::Literal(raw.to_string())
        }
    }
}

/// A single line of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTemplate {
    pub tokens: Vec<Token>,
}

impl LineTemplate {
    /// Tokenize one line. Never fails; markers are classified, not validated.
    pub fn parse(line: &str) -> Self {
        let tokens = line
            .split(TOKEN_BOUNDARIES)
            .filter(|t| !t.is_empty())
            .map(Token::classify)
            .collect();
        LineTemplate { tokens }
    }

    /// Summed syllables of the literal tokens.
    pub fn literal_syllables(&self) -> u32 {
        self.tokens
            .iter()
            .map(|t| match t {
                Token::Literal(word) => count_syllables(word),
                _ => 0,
            })
            .sum()
    }

    /// Number of recognized slots. Unknown markers are not counted.
    pub fn slot_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, Token::Slot(_)))
            .count()
    }

    /// Unknown markers on this line, in order.
    pub fn unknown_markers(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(|t| match t {
            Token::Unknown(marker) => Some(marker.as_str()),
            _ => None,
        })
    }
}

/// A parsed three-line haiku template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub lines: [LineTemplate; 3],
}

impl Template {
    /// Parse a raw `a|b|c` template. Empty segments are discarded before
    /// counting, so `"a||b|c"` is still three lines.
    pub fn parse(raw: &str) -> Result<Self, TemplateError> {
        let segments: Vec<&str> = raw
            .split(LINE_DELIMITER)
            .filter(|s| !s.is_empty())
            .collect();
        let [first, second, third] = segments[..] else {
            return Err(TemplateError::LineCount {
                found: segments.len(),
            });
        };
        Ok(Template {
            lines: [
                LineTemplate::parse(first),
                LineTemplate::parse(second),
                LineTemplate::parse(third),
            ],
        })
    }

    /// Parse, additionally rejecting unknown markers.
    pub fn parse_strict(raw: &str) -> Result<Self, TemplateError> {
        let template = Self::parse(raw)?;
        for (i, line) in template.lines.iter().enumerate() {
            if let Some(marker) = line.unknown_markers().next() {
                return Err(TemplateError::UnknownMarker {
                    marker: marker.to_string(),
                    line: i + 1,
                });
            }
        }
        Ok(template)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                write!(f, "{LINE_DELIMITER}")?;
            }
            for (j, token) in line.tokens.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                match token {
                    Token::Literal(word) | Token::Unknown(word) => f.write_str(word)?,
                    Token::Slot(kind) => f.write_str(kind.marker())?,
                }
            }
        }
        Ok(())
    }
}

/// Parse a template file: one template per non-blank line, `#` comments.
pub fn parse_templates(text: &str, strict: bool) -> Result<Vec<Template>, HaikuError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(index, line)| {
            let parsed = if strict {
                Template::parse_strict(line)
            } else {
                Template::parse(line)
            };
            parsed.map_err(|source| HaikuError::Template { index, source })
        })
        .collect()
}

/// Read and parse a template file.
pub fn load_templates(path: &Path, strict: bool) -> Result<Vec<Template>, HaikuError> {
    let text = std::fs::read_to_string(path).map_err(|source| HaikuError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_templates(&text, strict)
}
