//! PGN text cleanup before parsing.
//!
//! Raw PGN exports carry analysis baggage that would leak the solution
//! into the answer key or confuse the movetext parser: parenthesized
//! variations, brace comments with engine evaluations, and site-specific
//! header tags. Cleanup is purely functional; the source file is never
//! rewritten.

use regex::Regex;
use std::sync::OnceLock;

/// Header tags dropped during cleanup.
const DROPPED_TAGS: &[&str] = &["Link", "Site", "Event", "Date", "Round"];

/// Strips variations, comments, and the dropped header tags from raw
/// PGN text. Idempotent: running it twice yields the same output.
pub fn sanitize(raw: &str) -> String {
    let text = normalize(raw);
    strip_dropped_tags(&strip_bracketed(&text))
}

/// Strip a UTF-8 BOM and normalize line endings (CRLF / lone CR → LF).
fn normalize(content: &str) -> String {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Removes `(...)` variation spans and `{...}` comment spans, including
/// nested ones, in a single pass with a depth counter per bracket kind.
/// Only characters at depth zero survive. Inside a brace comment,
/// parentheses are ordinary text; inside a variation, `{` opens a
/// comment whose content (including any `)`) is consumed with it.
fn strip_bracketed(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut parens = 0usize;
    let mut braces = 0usize;

    for c in text.chars() {
        if braces > 0 {
            match c {
                '{' => braces += 1,
                '}' => braces -= 1,
                _ => {}
            }
            continue;
        }
        match c {
            '{' => braces += 1,
            '(' => parens += 1,
            ')' if parens > 0 => parens -= 1,
            _ if parens == 0 => out.push(c),
            _ => {}
        }
    }

    out
}

/// Removes whole header lines for the dropped tag set, consuming the
/// trailing newline so no blank line is left behind. Header tags outside
/// the set pass through untouched.
fn strip_dropped_tags(text: &str) -> String {
    static TAG_LINE: OnceLock<Regex> = OnceLock::new();
    let re = TAG_LINE.get_or_init(|| {
        let alternatives = DROPPED_TAGS.join("|");
        Regex::new(&format!(
            r#"(?m)^\[(?:{}) "[^"]*"\][ \t]*\n?"#,
            alternatives
        ))
        .unwrap()
    });
    re.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_comments_and_variations() {
        let raw = "1. e4 {best by test} e5 (1... c5 2. Nf3 d6) 2. Nf3 Nc6 *";
        let clean = sanitize(raw);
        assert_eq!(clean, "1. e4  e5  2. Nf3 Nc6 *");
    }

    #[test]
    fn removes_nested_same_type_brackets() {
        let raw = "1. e4 (1... c5 (1... e6 2. d4) 2. Nf3) e5 *";
        let clean = sanitize(raw);
        assert!(!clean.contains('('));
        assert!(!clean.contains(')'));
        assert!(clean.contains("1. e4"));
        assert!(clean.contains("e5 *"));
    }

    #[test]
    fn removes_nested_braces() {
        let clean = sanitize("1. e4 {outer {inner} still outer} e5 *");
        assert_eq!(clean, "1. e4  e5 *");
    }

    #[test]
    fn parens_inside_comments_are_plain_text() {
        // An unmatched "(" inside a comment must not swallow the rest
        // of the game.
        let clean = sanitize("1. e4 {eval (unclear} e5 2. Nf3 *");
        assert_eq!(clean, "1. e4  e5 2. Nf3 *");
    }

    #[test]
    fn closer_inside_variation_comment_stays_in_comment() {
        let clean = sanitize("1. e4 (1... c5 {sharp )} 2. Nf3) e5 *");
        assert_eq!(clean, "1. e4  e5 *");
    }

    #[test]
    fn is_idempotent() {
        let raw = "[Event \"Club\"]\n[White \"A\"]\n\n1. e4 {x} e5 (1... c5) *\n";
        let once = sanitize(raw);
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn drops_unwanted_headers_without_blank_lines() {
        let raw = "[Event \"Weekly Blitz\"]\n[Site \"chess.com\"]\n[Date \"2024.01.02\"]\n[Round \"3\"]\n[White \"Alice\"]\n[Black \"Bob\"]\n[Link \"https://example.com/game/1\"]\n\n1. e4 e5 *\n";
        let clean = sanitize(raw);
        assert_eq!(
            clean,
            "[White \"Alice\"]\n[Black \"Bob\"]\n\n1. e4 e5 *\n"
        );
    }

    #[test]
    fn keeps_headers_outside_the_dropped_set() {
        let raw = "[White \"Alice\"]\n[Black \"Bob\"]\n[Result \"1-0\"]\n\n1. e4 1-0\n";
        assert_eq!(sanitize(raw), raw);
    }

    #[test]
    fn unmatched_closers_pass_through() {
        assert_eq!(sanitize("a ) b } c"), "a ) b } c");
    }

    #[test]
    fn normalizes_bom_and_crlf() {
        let raw = "\u{FEFF}[White \"Alice\"]\r\n\r\n1. e4 e5 *\r\n";
        assert_eq!(sanitize(raw), "[White \"Alice\"]\n\n1. e4 e5 *\n");
    }
}
