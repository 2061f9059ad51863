use crate::error::{Error, Result};

use nom::{
    bytes::complete::{tag, take_till1, take_while},
    combinator::all_consuming,
    multi::many0,
    sequence::{pair, preceded, terminated},
    IResult,
};

/// A chain of keywords and the arguments to run it on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Line<'a> {
    pub(crate) chain: Vec<&'a str>,
    pub(crate) arguments: Vec<&'a str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command<'a> {
    Quit,
    Blank,
    Run(Line<'a>),
}

/// gap = ws*
fn gap(s: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(s)
}

/// word = (!(ws | ':') any)+
fn word(s: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace() || c == ':')(s)
}

/// words = gap (word gap)*
fn words(s: &str) -> IResult<&str, Vec<&str>> {
    preceded(gap, many0(terminated(word, gap)))(s)
}

/// line = words (':' words)*
fn line(s: &str) -> IResult<&str, (Vec<&str>, Vec<Vec<&str>>)> {
    all_consuming(pair(words, many0(preceded(tag(":"), words))))(s)
}

/// Splits one line of input. Words after the first `:` are the arguments;
/// without a `:` the last word is the only argument.
pub(crate) fn parse_line(s: &str) -> Result<Command<'_>> {
    if s.trim() == "q" {
        return Ok(Command::Quit);
    }

    // `line` accepts any input: a character that is not whitespace or `:` is a word
    let (mut chain, segments) = match line(s) {
        Ok((_, parsed)) => parsed,
        Err(_) => return Ok(Command::Blank),
    };

    let arguments = if segments.is_empty() {
        match chain.pop() {
            Some(argument) => vec![argument],
            None => return Ok(Command::Blank),
        }
    } else {
        segments.into_iter().flatten().collect()
    };

    if chain.is_empty() {
        Err(Error::EmptyChain)
    } else if arguments.is_empty() {
        Err(Error::MissingArgument)
    } else {
        Ok(Command::Run(Line { chain, arguments }))
    }
}
