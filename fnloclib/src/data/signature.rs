//! Function signature recognition.
//!
//! A line starts a function definition when, after leading whitespace, it
//! reads:
//!
//! ```text
//! [pub | pub(<scope>) | unsafe] [async] fn <name>
//! ```
//!
//! with at least one whitespace character after each keyword. The match is
//! anchored at the start of the line, so `fn` in the middle of an expression
//! or after `//` is never a signature. Anything outside this grammar, such as
//! `pub unsafe fn`, `pub const fn` or `extern "C" fn`, is not recognized.

/// Visibility written in front of a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility<'a> {
    /// No visibility keyword
    Private,
    /// `pub`
    Public,
    /// `pub(<scope>)`, e.g. `pub(crate)` or `pub(in crate::a)`
    Restricted(&'a str),
}

/// A recognized function header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature<'a> {
    pub name: &'a str,
    pub visibility: Visibility<'a>,
    pub is_unsafe: bool,
    pub is_async: bool,
}

/// Recognize a function signature at the start of `line`.
pub fn parse_signature(line: &str) -> Option<Signature<'_>> {
    let rest = line.trim_start();

    let (visibility, is_unsafe, rest) = match qualifier(rest) {
        Some(found) => found,
        None => (Visibility::Private, false, rest),
    };

    let (is_async, rest) = match keyword(rest, "async") {
        Some(after) => (true, after),
        None => (false, rest),
    };

    let rest = keyword(rest, "fn")?;
    let end = rest.find(|c: char| !is_name_char(c)).unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    Some(Signature {
        name: &rest[..end],
        visibility,
        is_unsafe,
        is_async,
    })
}

/// Parse the optional visibility or unsafety qualifier.
fn qualifier(s: &str) -> Option<(Visibility<'_>, bool, &str)> {
    if let Some(scoped) = s.strip_prefix("pub(") {
        if let Some(close) = scoped.find(')') {
            if close > 0 {
                if let Some(rest) = whitespace(&scoped[close + 1..]) {
                    return Some((Visibility::Restricted(&scoped[..close]), false, rest));
                }
            }
        }
    }

    if let Some(rest) = keyword(s, "pub") {
        return Some((Visibility::Public, false, rest));
    }

    keyword(s, "unsafe").map(|rest| (Visibility::Private, true, rest))
}

/// Consume `word` followed by at least one whitespace character.
fn keyword<'a>(s: &'a str, word: &str) -> Option<&'a str> {
    whitespace(s.strip_prefix(word)?)
}

/// Consume one or more whitespace characters.
fn whitespace(s: &str) -> Option<&str> {
    let rest = s.trim_start();
    (rest.len() < s.len()).then_some(rest)
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lazily yields `(line_index, signature)` for each line that starts a
/// function definition.
///
/// The scanner calls [`Signatures::resume_at`] to jump past a function body
/// it has already consumed.
#[derive(Debug, Clone)]
pub struct Signatures<'a, S> {
    lines: &'a [S],
    next_line: usize,
}

impl<'a, S: AsRef<str>> Signatures<'a, S> {
    pub fn new(lines: &'a [S]) -> Self {
        Self {
            lines,
            next_line: 0,
        }
    }

    /// Continue matching from `line` instead of the line after the last match.
    pub fn resume_at(&mut self, line: usize) {
        self.next_line = line;
    }
}

impl<'a, S: AsRef<str>> Iterator for Signatures<'a, S> {
    type Item = (usize, Signature<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let lines = self.lines;
        while let Some(line) = lines.get(self.next_line) {
            let line_no = self.next_line;
            self.next_line += 1;
            if let Some(signature) = parse_signature(line.as_ref()) {
                return Some((line_no, signature));
            }
        }
        None
    }
}
