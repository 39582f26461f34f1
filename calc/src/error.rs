use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Parse error")]
    ParseFailure,
    #[error("Division or mod by 0")]
    DivideByZero,
}

pub type Result<T, E = Error> = StdResult<T, E>;
