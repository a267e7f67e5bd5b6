//! Table eligibility filtering
//!
//! Tables are selected with glob patterns delimited on `.`, matching the
//! dotted namespacing of table names: `*` and `?` stop at a literal `.`
//! boundary while `**` crosses it. Patterns are compiled once at
//! configuration load time; a pattern that does not compile is a fatal
//! configuration error.

use regex::Regex;

use super::error::{MappingError, MappingResult};

/// Compiled table allow-list.
///
/// An empty pattern list admits every table.
#[derive(Debug, Clone)]
pub struct TableFilter {
    patterns: Vec<Regex>,
}

impl TableFilter {
    /// Compile raw glob patterns into a filter.
    ///
    /// Fails on the first pattern that does not compile, naming the
    /// offending pattern.
    pub fn compile(patterns: &[String]) -> MappingResult<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Regex::new(&glob_to_regex(pattern)).map_err(|source| MappingError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<MappingResult<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// A filter that admits every table
    pub fn allow_all() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Whether a table passes the allow-list
    pub fn is_eligible(&self, table: &str) -> bool {
        if self.patterns.is_empty() {
            return true;
        }
        self.patterns.iter().any(|pattern| pattern.is_match(table))
    }
}

/// Translate a dot-delimited glob pattern into an anchored regex.
///
/// `*` and `?` match within a `.` segment, `**` matches across segments, and
/// character classes pass through with glob's `!` negation rewritten to `^`.
/// An unterminated class is left for the regex compiler to reject.
fn glob_to_regex(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() + 8);
    regex.push('^');

    let mut chars = pattern.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    regex.push_str(".*");
                } else {
                    regex.push_str("[^.]*");
                }
            }
            '?' => regex.push_str("[^.]"),
            '[' => {
                regex.push('[');
                if chars.peek() == Some(&'!') {
                    chars.next();
                    regex.push('^');
                }
                for inner in chars.by_ref() {
                    regex.push(inner);
                    if inner == ']' {
                        break;
                    }
                }
            }
            ch if ".+()|{}^$]\\".contains(ch) => {
                regex.push('\\');
                regex.push(ch);
            }
            ch => regex.push(ch),
        }
    }

    regex.push('$');
    regex
}
