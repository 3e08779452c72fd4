//! Brace matching over source lines.
//!
//! The walker in this module understands just enough lexical structure to
//! tell a structural brace from one that sits inside a string literal or a
//! comment:
//!
//! - `"` opens a string literal, closed by a `"` whose preceding character on
//!   the same line is not a backslash
//! - `//` ends the current line
//! - `/*` ... `*/` is a block comment, possibly spanning lines
//!
//! String and block comment state carries across lines within one walk.
//! Every walk starts from a fresh [`LexState`].
//!
//! The backslash check only looks one character back, so a string ending in
//! an escaped backslash (`"\\"`) is treated as still open. Function extents
//! reported for such files depend on this, so it is kept as is.

/// Lexical state carried through a single walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LexState {
    pub in_string: bool,
    pub string_delimiter: Option<char>,
    pub in_block_comment: bool,
}

impl LexState {
    /// True when neither a string literal nor a block comment is open.
    pub fn in_code(&self) -> bool {
        !self.in_string && !self.in_block_comment
    }

    fn open_string(&mut self, delimiter: char) {
        self.in_string = true;
        self.string_delimiter = Some(delimiter);
    }

    fn close_string(&mut self) {
        self.in_string = false;
        self.string_delimiter = None;
    }
}

/// A brace found outside strings and comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Brace {
    Open,
    Close,
}

/// What the walker should do after reporting an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Stop and report the current line.
    Found,
    /// Stop without a result.
    GiveUp,
}

/// Receives the structural braces seen by [`walk`].
trait BraceVisitor {
    fn brace(&mut self, brace: Brace) -> Flow;

    fn end_of_line(&mut self) -> Flow {
        Flow::Continue
    }
}

/// Stops at the first structural `{`.
struct OpeningBrace;

impl BraceVisitor for OpeningBrace {
    fn brace(&mut self, brace: Brace) -> Flow {
        match brace {
            Brace::Open => Flow::Found,
            Brace::Close => Flow::Continue,
        }
    }
}

/// Counts depth until a `}` brings it back to zero.
#[derive(Default)]
struct MatchingClose {
    depth: i64,
}

impl BraceVisitor for MatchingClose {
    fn brace(&mut self, brace: Brace) -> Flow {
        match brace {
            Brace::Open => {
                self.depth += 1;
                Flow::Continue
            }
            Brace::Close => {
                self.depth -= 1;
                if self.depth == 0 {
                    Flow::Found
                } else {
                    Flow::Continue
                }
            }
        }
    }

    // A line that leaves depth at zero without closing anything means the
    // block never opened here.
    fn end_of_line(&mut self) -> Flow {
        if self.depth == 0 {
            Flow::GiveUp
        } else {
            Flow::Continue
        }
    }
}

/// Walk `lines` from `from_line` to the end, feeding structural braces to
/// `visitor`. Returns the line index on which the visitor reported
/// [`Flow::Found`].
fn walk<S: AsRef<str>>(
    lines: &[S],
    from_line: usize,
    visitor: &mut impl BraceVisitor,
) -> Option<usize> {
    let mut state = LexState::default();

    for (line_no, line) in lines.iter().enumerate().skip(from_line) {
        // All delimiters are ASCII, so scanning bytes is equivalent to
        // scanning chars: UTF-8 continuation bytes never match them.
        let bytes = line.as_ref().as_bytes();
        let mut k = 0;

        while k < bytes.len() {
            let c = bytes[k];

            if state.in_code() {
                let brace = match c {
                    b'"' => {
                        state.open_string('"');
                        None
                    }
                    b'/' if k + 1 < bytes.len() => {
                        match bytes[k + 1] {
                            b'/' => break,
                            b'*' => {
                                state.in_block_comment = true;
                                k += 1;
                            }
                            _ => {}
                        }
                        None
                    }
                    b'{' => Some(Brace::Open),
                    b'}' => Some(Brace::Close),
                    _ => None,
                };

                if let Some(brace) = brace {
                    match visitor.brace(brace) {
                        Flow::Continue => {}
                        Flow::Found => return Some(line_no),
                        Flow::GiveUp => return None,
                    }
                }
            } else if state.in_string {
                let escaped = k > 0 && bytes[k - 1] == b'\\';
                if state.string_delimiter == Some(char::from(c)) && !escaped {
                    state.close_string();
                }
            } else if c == b'*' && k + 1 < bytes.len() && bytes[k + 1] == b'/' {
                state.in_block_comment = false;
                k += 1;
            }

            k += 1;
        }

        match visitor.end_of_line() {
            Flow::Continue => {}
            Flow::Found => return Some(line_no),
            Flow::GiveUp => return None,
        }
    }

    None
}

/// Find the line holding the first `{` at or after `from_line` that is not
/// inside a string literal or comment.
pub fn find_opening_brace<S: AsRef<str>>(lines: &[S], from_line: usize) -> Option<usize> {
    walk(lines, from_line, &mut OpeningBrace)
}

/// Find the line on which the block opened on `from_line` closes.
///
/// Scanning starts at column 0 of `from_line` with depth 0. Each structural
/// `{` adds one, each structural `}` removes one, and the line where a `}`
/// brings depth back to exactly zero is returned. Returns `None` if the file
/// ends first, or if a scanned line ends with depth at zero without having
/// closed anything.
pub fn find_matching_close<S: AsRef<str>>(lines: &[S], from_line: usize) -> Option<usize> {
    walk(lines, from_line, &mut MatchingClose::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_brace_on_next_line() {
        let lines = ["fn a()", "{", "}"];
        assert_eq!(find_opening_brace(&lines, 0), Some(1));
    }

    #[test]
    fn test_opening_brace_skips_line_comment() {
        let lines = ["fn a() // {", "{", "}"];
        assert_eq!(find_opening_brace(&lines, 0), Some(1));
    }

    #[test]
    fn test_opening_brace_skips_block_comment() {
        let lines = ["fn a() /* { */ {", "}"];
        assert_eq!(find_opening_brace(&lines, 0), Some(0));

        let lines = ["fn a() /* {", "} */ {", "}"];
        assert_eq!(find_opening_brace(&lines, 0), Some(1));
    }

    #[test]
    fn test_opening_brace_skips_multiline_string() {
        let lines = ["fn a(x = \"{", "}\") {", "}"];
        assert_eq!(find_opening_brace(&lines, 0), Some(1));
    }

    #[test]
    fn test_opening_brace_not_found() {
        let lines = ["fn a();", "struct B;"];
        assert_eq!(find_opening_brace(&lines, 0), None);
        assert_eq!(find_opening_brace(&lines, 5), None);
    }

    #[test]
    fn test_slash_at_end_of_line_is_not_a_comment() {
        let lines = ["fn a() /", "/ {", "}"];
        assert_eq!(find_opening_brace(&lines, 0), Some(1));
    }

    #[test]
    fn test_each_walk_starts_fresh() {
        // Line 0 opens a comment, but a walk from line 1 never saw it.
        let lines = ["/* {", "x {", "*/"];
        assert_eq!(find_opening_brace(&lines, 1), Some(1));
    }

    #[test]
    fn test_matching_close_nested_blocks() {
        let lines = ["fn a() {", "    if x { y }", "    {", "    }", "}", "fn b() {}"];
        assert_eq!(find_matching_close(&lines, 0), Some(4));
    }

    #[test]
    fn test_matching_close_ignores_braces_in_string() {
        let lines = ["fn a() {", "    let s = \"{ not a brace }\";", "}"];
        assert_eq!(find_matching_close(&lines, 0), Some(2));
    }

    #[test]
    fn test_matching_close_ignores_escaped_quote() {
        let lines = ["fn a() {", r#"    let s = "\"}";"#, "}"];
        assert_eq!(find_matching_close(&lines, 0), Some(2));
    }

    #[test]
    fn test_escaped_backslash_keeps_string_open() {
        // "\\" closes in Rust, but the one-character look-back sees `\"`.
        let lines = ["fn a() {", r#"    let s = "\\"; }"#, "}"];
        assert_eq!(find_matching_close(&lines, 0), None);
    }

    #[test]
    fn test_quote_at_column_zero_closes_string() {
        let lines = ["fn a() {", "    let s = \"abc\\", "\"; }"];
        assert_eq!(find_matching_close(&lines, 0), Some(2));
    }

    #[test]
    fn test_line_comment_does_not_persist() {
        let lines = ["fn a() { // }", "}"];
        assert_eq!(find_matching_close(&lines, 0), Some(1));
    }

    #[test]
    fn test_block_comment_spanning_lines() {
        let lines = ["fn a() {", "    /* }", "    } */", "}"];
        assert_eq!(find_matching_close(&lines, 0), Some(3));
    }

    #[test]
    fn test_matching_close_unbalanced() {
        let lines = ["fn a() {", "    if x {", "    }"];
        assert_eq!(find_matching_close(&lines, 0), None);
    }

    #[test]
    fn test_matching_close_gives_up_on_line_without_block() {
        let lines = ["fn a()", "{", "}"];
        assert_eq!(find_matching_close(&lines, 0), None);
    }

    #[test]
    fn test_matching_close_gives_up_when_line_nets_to_zero() {
        // Depth goes -1 then back to 0 on an increment: nothing closed.
        let lines = ["}) {", "}"];
        assert_eq!(find_matching_close(&lines, 0), None);
    }

    #[test]
    fn test_single_line_body() {
        let lines = ["fn a() { 1 }"];
        assert_eq!(find_opening_brace(&lines, 0), Some(0));
        assert_eq!(find_matching_close(&lines, 0), Some(0));
    }

    #[test]
    fn test_non_ascii_content() {
        let lines = ["fn é() {", "    let s = \"日本{\";", "    // ünïcode }", "}"];
        assert_eq!(find_matching_close(&lines, 0), Some(3));
    }

    #[test]
    fn test_lex_state_default_is_code() {
        let state = LexState::default();
        assert!(state.in_code());
        assert_eq!(state.string_delimiter, None);
    }
}
