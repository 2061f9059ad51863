use std::{error, fmt};

use crate::atom::Arity;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Error {
    /// A chain token is neither a keyword nor an integer literal.
    UnknownToken(String),
    /// A quick or separator keyword: it translates, but has no arity of its own.
    NoFixedArity(String),
    /// The grouping table has no entry for the window at `position`.
    NoMatchingRule { position: usize, window: Vec<Arity> },
    EmptyChain,
    MissingArgument,
}

pub(crate) type Result<T> = std::result::Result<T, Error>;

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownToken(token) => write!(f, "unknown token `{}`", token),
            Error::NoFixedArity(token) => {
                write!(f, "`{}` has no fixed arity and cannot be grouped", token)
            }
            Error::NoMatchingRule { position, window } => {
                let window: Vec<String> = window.iter().map(|a| a.to_string()).collect();
                write!(
                    f,
                    "no combinator rule for arities {} at position {} (rule table is incomplete)",
                    window.join("-"),
                    position
                )
            }
            Error::EmptyChain => write!(f, "the chain is empty"),
            Error::MissingArgument => write!(f, "no argument given after `:`"),
        }
    }
}

/// The interpreter rejected one prefix of a chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EvaluationFailure {
    pub(crate) status: Option<i32>,
    pub(crate) stderr: String,
}

impl EvaluationFailure {
    pub(crate) fn new(status: Option<i32>, stderr: impl Into<String>) -> Self {
        Self {
            status,
            stderr: stderr.into(),
        }
    }
}

impl error::Error for EvaluationFailure {}

impl fmt::Display for EvaluationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(code) => write!(f, "interpreter exited with status {}", code),
            None => write!(f, "interpreter did not run to completion"),
        }
    }
}
