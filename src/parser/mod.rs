pub mod game;
pub mod sanitize;

pub use game::{parse, ParseError, ParsedGame};
pub use sanitize::sanitize;
