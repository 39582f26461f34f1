#![warn(clippy::nursery)]
#![warn(clippy::unnested_or_patterns)]
#![warn(clippy::uninlined_format_args)]

mod cursor;
mod error;
mod eval;
mod parser;
mod syntax;

pub use error::{Error, Result};
pub use syntax::{BinaryKind, COMMANDS, Command, Expr, KEYWORDS, PROMPT, UnaryKind};

/// Parses one line and evaluates it.
pub fn calculate(input: &str) -> Result<i32> {
    Expr::parse(input)?.eval()
}
