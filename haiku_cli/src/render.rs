// Terminal rendering and the interactive key loop.
//
// Each iteration clears the screen, prints a centered title, the haiku
// between `--` rules, and a prompt, then blocks on a single key press. Esc
// (or Ctrl+C, which raw mode swallows) ends the loop; any other key draws
// the next haiku. Raw mode is only held while waiting for the key so that
// ordinary `writeln!` output keeps its carriage returns.
//
// `render_screen` is pure so the layout can be tested without a terminal.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};
use haiku_lang::{GeneratedHaiku, HaikuGenerator};
use haiku_prng::RandomSource;
use tracing::debug;

pub const TITLE: &str = "Random Haiku Generator";
pub const RULE: &str = "--";
pub const PROMPT: &str = "Hit `esc` to quit or any other key to generate another haiku...";

/// Width assumed when the terminal size cannot be queried (e.g. piped output).
pub const FALLBACK_WIDTH: usize = 80;

/// Left-pad `line` (trimmed) so it sits in the middle of `width` columns.
pub fn center(line: &str, width: usize) -> String {
    let line = line.trim();
    let pad = width.saturating_sub(line.chars().count()) / 2;
    format!("{}{}", " ".repeat(pad), line)
}

/// Blank rows between the title and the haiku, and between the haiku and
/// the prompt.
const GAP: usize = 3;

/// The full screen for one haiku, one entry per output row.
pub fn render_screen(haiku: &GeneratedHaiku, width: usize) -> Vec<String> {
    let mut rows = vec![center(TITLE, width)];
    rows.extend(std::iter::repeat_n(String::new(), GAP));
    rows.push(center(RULE, width));
    rows.extend(haiku.texts().iter().map(|line| center(line, width)));
    rows.push(center(RULE, width));
    rows.extend(std::iter::repeat_n(String::new(), GAP));
    rows.push(center(PROMPT, width));
    rows
}

pub fn terminal_width() -> usize {
    terminal::size()
        .map(|(cols, _)| usize::from(cols))
        .unwrap_or(FALLBACK_WIDTH)
}

/// Show haiku one screen at a time until the user presses Esc.
pub fn interactive<R: RandomSource>(generator: &mut HaikuGenerator<R>) -> io::Result<()> {
    let mut stdout = io::stdout();
    loop {
        let haiku = generator.next_haiku();
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        for row in render_screen(&haiku, terminal_width()) {
            writeln!(stdout, "{row}")?;
        }
        stdout.flush()?;

        let key = wait_for_key()?;
        debug!(?key, "key pressed");
        if is_quit(&key) {
            return Ok(());
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Block until a key is pressed, with raw mode on for the duration.
fn wait_for_key() -> io::Result<KeyEvent> {
    let _raw = RawModeGuard::enable()?;
    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(key),
            _ => {}
        }
    }
}

/// Restores cooked mode on drop, including on early `?` returns.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
