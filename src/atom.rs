use std::fmt;

use crate::error::{Error, Result};
use crate::tokens::{DYADS, MONADS, QUICKS, SEPARATORS};

use nom::{character::complete::digit1, combinator::all_consuming, IResult};

/// How many arguments a link takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Arity {
    Nilad = 0,
    Monad = 1,
    Dyad = 2,
}

#[cfg(test)]
impl Arity {
    pub(crate) const ALL: [Arity; 3] = [Arity::Nilad, Arity::Monad, Arity::Dyad];
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// literal = digit+
fn literal(s: &str) -> IResult<&str, &str> {
    all_consuming(digit1)(s)
}

pub(crate) fn is_literal(token: &str) -> bool {
    literal(token).is_ok()
}

/// The atom a token stands for. Integer literals are their own atom.
pub(crate) fn translate(token: &str) -> Option<&str> {
    if let Some(atom) = MONADS.get(token).or_else(|| DYADS.get(token)) {
        return Some(atom);
    }
    if is_literal(token) {
        return Some(token);
    }
    QUICKS.get(token).or_else(|| SEPARATORS.get(token))
}

pub(crate) fn arity(token: &str) -> Result<Arity> {
    if is_literal(token) {
        Ok(Arity::Nilad)
    } else if MONADS.contains(token) {
        Ok(Arity::Monad)
    } else if DYADS.contains(token) {
        Ok(Arity::Dyad)
    } else if QUICKS.contains(token) || SEPARATORS.contains(token) {
        Err(Error::NoFixedArity(token.to_string()))
    } else {
        Err(Error::UnknownToken(token.to_string()))
    }
}

/// Concatenates the atoms of `tokens`, failing on the first one without an atom.
pub(crate) fn translate_chain<S: AsRef<str>>(tokens: &[S]) -> Result<String> {
    let mut atoms = String::new();
    for token in tokens {
        let token = token.as_ref();
        match translate(token) {
            Some(atom) => atoms.push_str(atom),
            None => return Err(Error::UnknownToken(token.to_string())),
        }
    }
    Ok(atoms)
}

pub(crate) fn arities<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Arity>> {
    tokens.iter().map(|token| arity(token.as_ref())).collect()
}
