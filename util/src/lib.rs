#![warn(clippy::nursery)]
#![warn(clippy::unnested_or_patterns)]
#![warn(clippy::uninlined_format_args)]

mod completer;
pub mod parser;

pub use completer::CommandCompleter;
pub use util_derive::Constructors;
