//! Movetext parsing on top of `pgn-reader`.
//!
//! Only the first game record of the input is read; trailing content is
//! ignored. Moves are converted to legal `shakmaty` moves against a
//! running position while reading, so a `ParsedGame` is guaranteed to
//! replay legally from the standard starting position.

use pgn_reader::{BufferedReader, RawHeader, SanPlus, Skip, Visitor};
use shakmaty::{Chess, Move, Outcome, Position};
use thiserror::Error;

/// Errors that can occur while parsing a single PGN record
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no game record found")]
    NoGame,

    #[error("illegal move in game: {0}")]
    BadMove(String),

    #[error("failed to read PGN: {0}")]
    Io(#[from] std::io::Error),
}

/// A parsed game: surviving headers in input order, the legal mainline,
/// and the termination marker if the movetext carried one.
#[derive(Debug, Clone)]
pub struct ParsedGame {
    pub headers: Vec<(String, String)>,
    pub moves: Vec<Move>,
    pub outcome: Option<Outcome>,
}

impl ParsedGame {
    /// Value of a header tag, if present.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Parse the first game record from `text`.
pub fn parse(text: &str) -> Result<ParsedGame, ParseError> {
    let mut reader = BufferedReader::new_cursor(text.as_bytes());
    let mut collector = GameCollector::default();

    match reader.read_game(&mut collector)? {
        Some(result) => result,
        None => Err(ParseError::NoGame),
    }
}

/// Visitor that accumulates headers and the mainline while replaying it.
#[derive(Default)]
struct GameCollector {
    pos: Chess,
    headers: Vec<(String, String)>,
    moves: Vec<Move>,
    bad_move: Option<String>,
    outcome: Option<Outcome>,
}

impl Visitor for GameCollector {
    type Result = Result<ParsedGame, ParseError>;

    fn begin_game(&mut self) {
        self.pos = Chess::default();
        self.headers.clear();
        self.moves.clear();
        self.bad_move = None;
        self.outcome = None;
    }

    fn header(&mut self, key: &[u8], value: RawHeader<'_>) {
        let key = String::from_utf8_lossy(key).into_owned();
        let value = value.decode_utf8_lossy().into_owned();
        self.headers.push((key, value));
    }

    fn san(&mut self, san_plus: SanPlus) {
        if self.bad_move.is_some() {
            return;
        }
        match san_plus.san.to_move(&self.pos) {
            Ok(m) => {
                self.pos.play_unchecked(&m);
                self.moves.push(m);
            }
            Err(_) => self.bad_move = Some(san_plus.to_string()),
        }
    }

    fn begin_variation(&mut self) -> Skip {
        // Stay on the mainline even if a variation survived cleanup.
        Skip(true)
    }

    fn outcome(&mut self, outcome: Option<Outcome>) {
        self.outcome = outcome;
    }

    fn end_game(&mut self) -> Self::Result {
        if let Some(san) = self.bad_move.take() {
            return Err(ParseError::BadMove(san));
        }
        let headers = std::mem::take(&mut self.headers);
        let moves = std::mem::take(&mut self.moves);
        if headers.is_empty() && moves.is_empty() {
            return Err(ParseError::NoGame);
        }
        Ok(ParsedGame {
            headers,
            moves,
            outcome: self.outcome.take(),
        })
    }
}
