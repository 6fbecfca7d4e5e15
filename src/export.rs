//! Clean PGN emission for the answer key.
//!
//! Output is re-derived from the parsed moves, not echoed from the
//! input, so it can never contain comment or variation text and is
//! byte-identical for the same game.

use crate::parser::ParsedGame;
use shakmaty::san::SanPlus;
use shakmaty::Chess;

const WRAP_COLUMN: usize = 80;
const TERMINATION_MARKERS: &[&str] = &["1-0", "0-1", "1/2-1/2", "*"];

/// Renders a parsed game as clean PGN: surviving headers in input order,
/// a blank line, then numbered movetext ending with the termination
/// marker, wrapped at 80 columns.
pub fn serialize(game: &ParsedGame) -> String {
    let mut out = String::new();

    for (key, value) in &game.headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, value));
    }
    if !game.headers.is_empty() {
        out.push('\n');
    }

    let mut tokens: Vec<String> = Vec::with_capacity(game.moves.len() * 2);
    let mut pos = Chess::default();
    for (ply, m) in game.moves.iter().enumerate() {
        if ply % 2 == 0 {
            tokens.push(format!("{}.", ply / 2 + 1));
        }
        let san = SanPlus::from_move_and_play_unchecked(&mut pos, m);
        tokens.push(san.to_string());
    }
    tokens.push(termination(game).to_string());

    out.push_str(&wrap(&tokens, WRAP_COLUMN));
    out
}

/// The movetext outcome wins; a well-formed `Result` header is the
/// fallback; `*` when neither is available.
fn termination(game: &ParsedGame) -> String {
    if let Some(outcome) = &game.outcome {
        return outcome.to_string();
    }
    game.header("Result")
        .filter(|value| TERMINATION_MARKERS.contains(value))
        .unwrap_or("*")
        .to_string()
}

fn wrap(tokens: &[String], width: usize) -> String {
    let mut out = String::new();
    let mut line_len = 0;
    for token in tokens {
        if line_len == 0 {
            out.push_str(token);
            line_len = token.len();
        } else if line_len + 1 + token.len() > width {
            out.push('\n');
            out.push_str(token);
            line_len = token.len();
        } else {
            out.push(' ');
            out.push_str(token);
            line_len += 1 + token.len();
        }
    }
    out.push('\n');
    out
}
