//! Line scrubber
//!
//! Removes marker-tagged `console.log` / `console.warn` statements from source
//! text, one whole statement at a time. A statement may span several lines
//! (an object literal argument, a long template string); its extent is found
//! with a bracket-balance heuristic rather than a parser, so brackets or `;`
//! inside string literals and comments can end a statement early or late.
//!
//! The scrubber never edits a line: each input line is either kept verbatim
//! or dropped, and kept lines stay in their original order.

use regex::Regex;

use crate::error::{ScrubError, ScrubResult};
use crate::markers::MarkerSet;

/// Method names recognized on `console` when none are configured
pub const DEFAULT_METHODS: &[&str] = &["log", "warn"];

/// Text that closes a call and its statement on the same line
const CALL_TERMINATOR: &str = ");";

/// Recognizes a marker-tagged diagnostic call on a single line
#[derive(Debug, Clone)]
pub struct DiagnosticMatcher {
    /// `None` when no methods are configured; then nothing matches
    call: Option<Regex>,
    markers: MarkerSet,
}

impl DiagnosticMatcher {
    pub fn new<S: AsRef<str>>(markers: MarkerSet, methods: &[S]) -> ScrubResult<Self> {
        for method in methods {
            validate_method(method.as_ref())?;
        }

        let call = if methods.is_empty() {
            None
        } else {
            let alternation = methods
                .iter()
                .map(|m| regex::escape(m.as_ref()))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = format!(r"console\.(?:{})", alternation);
            Some(Regex::new(&pattern).map_err(|_| ScrubError::InvalidMethod {
                method: alternation,
            })?)
        };

        Ok(Self { call, markers })
    }

    /// True if `line` has `console.<method>` followed later by a marker glyph
    ///
    /// The method name is matched as a prefix, so `console.logger` counts as
    /// a `log` call.
    pub fn is_match(&self, line: &str) -> bool {
        let Some(call) = &self.call else {
            return false;
        };
        // The leftmost call leaves the longest tail, so it is the only one
        // worth checking.
        match call.find(line) {
            Some(m) => self.markers.matches_any(&line[m.end()..]),
            None => false,
        }
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }
}

impl Default for DiagnosticMatcher {
    fn default() -> Self {
        Self {
            call: Some(Regex::new(r"console\.(?:log|warn)").expect("static pattern")),
            markers: MarkerSet::default(),
        }
    }
}

fn validate_method(method: &str) -> ScrubResult<()> {
    let mut chars = method.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if valid_start && valid_rest {
        Ok(())
    } else {
        Err(ScrubError::InvalidMethod {
            method: method.to_string(),
        })
    }
}

/// Counters for one scrub pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrubStats {
    /// Lines in the input, counting the segment after a trailing newline
    pub lines_total: usize,
    pub lines_removed: usize,
    pub statements_removed: usize,
    /// Input ended while a multi-line statement was still open
    pub unterminated: bool,
}

impl ScrubStats {
    pub fn changed(&self) -> bool {
        self.lines_removed > 0
    }
}

/// Output of a scrub pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scrubbed {
    pub content: String,
    pub stats: ScrubStats,
}

/// Removes diagnostic statements from source text
#[derive(Debug, Clone, Default)]
pub struct Scrubber {
    matcher: DiagnosticMatcher,
}

impl Scrubber {
    pub fn new<S: AsRef<str>>(markers: MarkerSet, methods: &[S]) -> ScrubResult<Self> {
        Ok(Self {
            matcher: DiagnosticMatcher::new(markers, methods)?,
        })
    }

    pub fn matcher(&self) -> &DiagnosticMatcher {
        &self.matcher
    }

    /// Scrub `content`, splitting on `\n` and rejoining with `\n`
    ///
    /// A `\r` before the newline stays part of its line. The empty segment
    /// after a final newline is an ordinary line, so the trailing newline is
    /// lost when the file ends inside an open statement.
    pub fn scrub(&self, content: &str) -> Scrubbed {
        let mut kept: Vec<&str> = Vec::new();
        let mut stats = ScrubStats::default();
        let mut skipping = false;
        let mut depth: i64 = 0;
        let mut statement_start = 0;

        for (index, line) in content.split('\n').enumerate() {
            stats.lines_total += 1;

            if skipping {
                stats.lines_removed += 1;
                depth += bracket_balance(line);
                if line.contains(CALL_TERMINATOR) || (depth <= 0 && line.contains(';')) {
                    tracing::debug!(
                        from = statement_start + 1,
                        to = index + 1,
                        "removed multi-line diagnostic statement"
                    );
                    skipping = false;
                    depth = 0;
                }
                continue;
            }

            if !self.matcher.is_match(line) {
                kept.push(line);
                continue;
            }

            stats.lines_removed += 1;
            stats.statements_removed += 1;
            if closes_on_same_line(line) {
                tracing::debug!(line = index + 1, "removed diagnostic statement");
            } else {
                skipping = true;
                depth = bracket_balance(line);
                statement_start = index;
            }
        }

        if skipping {
            tracing::debug!(
                line = statement_start + 1,
                "diagnostic statement still open at end of input"
            );
            stats.unterminated = true;
        }

        Scrubbed {
            content: kept.join("\n"),
            stats,
        }
    }
}

/// Scrub with the built-in markers and methods
pub fn scrub(content: &str) -> String {
    Scrubber::default().scrub(content).content
}

fn closes_on_same_line(line: &str) -> bool {
    line.contains(CALL_TERMINATOR) || line.trim_end().ends_with(CALL_TERMINATOR)
}

/// Net count of opening minus closing `{}`, `[]`, and `()` characters
pub fn bracket_balance(line: &str) -> i64 {
    line.chars().fold(0, |acc, ch| match ch {
        '{' | '[' | '(' => acc + 1,
        '}' | ']' | ')' => acc - 1,
        _ => acc,
    })
}
